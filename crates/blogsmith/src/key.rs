use std::fmt::{self, Display};

use chrono::{DateTime, TimeZone, Utc};

/// `strftime` layout of the timestamp segment, e.g. `20250701_173000`.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Object key of a stored passage: `<prefix>/<YYYYMMDD_HHMMSS>.txt`.
///
/// Resolution is one second. Two invocations within the same second get the
/// same key and the later write wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// Key for `time`, rendered in that time's own offset.
    ///
    /// ```rust
    /// use blogsmith::key::StorageKey;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let time = Utc.with_ymd_and_hms(2025, 7, 1, 17, 30, 0).unwrap();
    /// assert_eq!(
    ///     StorageKey::at("llama3-blogs", &time).as_str(),
    ///     "llama3-blogs/20250701_173000.txt"
    /// );
    /// ```
    pub fn at<Tz>(prefix: &str, time: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let stamp = time.format(TIMESTAMP_FORMAT);
        let prefix = prefix.trim_end_matches('/');

        if prefix.is_empty() {
            Self(format!("{stamp}.txt"))
        } else {
            Self(format!("{prefix}/{stamp}.txt"))
        }
    }

    /// Key for the current wall-clock time in UTC.
    pub fn now(prefix: &str) -> Self {
        Self::at(prefix, &Utc::now())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
