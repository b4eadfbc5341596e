//! 搜索服务 - 基于Serper的网页搜索客户端

use serde::{Deserialize, Serialize};

mod serper;

pub use serper::SerperClient;

/// 单条搜索结果记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
    pub url: String,
}
