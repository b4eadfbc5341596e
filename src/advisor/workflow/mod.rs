use std::sync::Arc;

use anyhow::Result;

use crate::advisor::context::PipelineContext;
use crate::advisor::orchestrator::run_pipeline;
use crate::advisor::types::QuotaContext;
use crate::config::Config;
use crate::llm::client::LLMClient;
use crate::search::SerperClient;

/// 启动一次产品建议管线运行
pub async fn launch(config: &Config, prompt: &str) -> Result<String> {
    let llm_client = LLMClient::new(config.clone())?;

    // 详细模式下启动前检查模型连接
    if config.verbose {
        llm_client.check_connection().await?;
    }

    let context = PipelineContext::new(
        config.clone(),
        Arc::new(llm_client),
        Arc::new(SerperClient::new(&config.search)?),
    );

    run_pipeline(&context, prompt, &QuotaContext::unlimited()).await
}
