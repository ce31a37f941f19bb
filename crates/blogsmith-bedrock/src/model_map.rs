use std::borrow::Cow;

use blogsmith_core::model::{BedrockModel, Model};

pub const LLAMA3_8B_INSTRUCT: &str = "meta.llama3-8b-instruct-v1:0";
pub const LLAMA3_70B_INSTRUCT: &str = "meta.llama3-70b-instruct-v1:0";

pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    let bedrock_model = match model {
        Model::Custom(custom) if custom.trim().is_empty() => return None,
        Model::Custom(custom) => return Some(custom.clone().into()),
        Model::Bedrock(bedrock_model) => bedrock_model,
    };

    match bedrock_model {
        BedrockModel::Llama3_8bInstruct => Some(LLAMA3_8B_INSTRUCT.into()),
        BedrockModel::Llama3_70bInstruct => Some(LLAMA3_70B_INSTRUCT.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_llama3_variants() {
        assert_eq!(
            map_model(&BedrockModel::Llama3_8bInstruct.into()).as_deref(),
            Some("meta.llama3-8b-instruct-v1:0")
        );
        assert_eq!(
            map_model(&BedrockModel::Llama3_70bInstruct.into()).as_deref(),
            Some("meta.llama3-70b-instruct-v1:0")
        );
    }

    #[test]
    fn custom_ids_pass_through_unless_blank() {
        assert_eq!(
            map_model(&Model::Custom("meta.llama3-1-8b-instruct-v1:0".into())).as_deref(),
            Some("meta.llama3-1-8b-instruct-v1:0")
        );
        assert_eq!(map_model(&Model::Custom("  ".into())), None);
    }
}
