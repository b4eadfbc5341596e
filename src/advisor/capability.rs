//! 外部能力接口 - 推理与搜索服务的窄边界
//!
//! 管线各阶段只通过这两个trait与外部服务交互，
//! 测试时注入脚本化实现即可在不触网的情况下验证控制流。

use anyhow::Result;
use async_trait::async_trait;

use crate::search::SearchHit;

/// 语言推理能力
///
/// 无状态请求/响应；除指令要求外不保证输出结构，
/// 调用方必须在边界处防御性解析。
#[async_trait]
pub trait ReasoningService: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

/// 网页搜索能力
///
/// 无状态；可能返回零条结果，零结果不是错误。
#[async_trait]
pub trait SearchService: Send + Sync {
    async fn query(&self, text: &str, max_results: usize) -> Result<Vec<SearchHit>>;
}
