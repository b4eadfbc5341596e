use std::sync::Arc;

use crate::advisor::capability::{ReasoningService, SearchService};
use crate::config::Config;

/// 管线上下文 - 持有配置与外部能力句柄，运行期间只读共享
#[derive(Clone)]
pub struct PipelineContext {
    /// 推理服务，用于与AI通信
    pub reasoner: Arc<dyn ReasoningService>,
    /// 搜索服务
    pub search: Arc<dyn SearchService>,
    /// 配置
    pub config: Config,
}

impl PipelineContext {
    /// 创建新的管线上下文
    pub fn new(
        config: Config,
        reasoner: Arc<dyn ReasoningService>,
        search: Arc<dyn SearchService>,
    ) -> Self {
        Self {
            reasoner,
            search,
            config,
        }
    }
}
