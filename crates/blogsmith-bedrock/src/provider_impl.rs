use std::{future::Future, pin::Pin, sync::Arc};

use blogsmith_core::{
    error::{BlogsmithError, Result},
    generic::GenerationResult,
    provider::{TextGenerationParameters, TextGenerationProvider},
};

use crate::{BedrockAdapter, api::LlamaInvokeRequest, model_map::map_model};

impl TextGenerationProvider for BedrockAdapter {
    fn generate<'p>(
        &'p self,
        params: TextGenerationParameters,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResult>> + Send + 'p>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let model = params.model();
            let model_id = map_model(&model).ok_or_else(|| BlogsmithError::ModelNotSupported {
                provider: "bedrock",
                model: model.to_string(),
            })?;

            let request = LlamaInvokeRequest::from(&params);
            let response = client.invoke_llama(&model_id, &request).await?;

            let usage = response.usage();
            let result = GenerationResult::new(response.generation);

            Ok(match usage {
                Some(usage) => result.with_usage(usage),
                None => result,
            })
        })
    }
}
