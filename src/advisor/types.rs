//! 管线核心类型 - 阶段间的类型化交接数据与错误分类

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 拒绝原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// 请求与电信产品设计无关
    OffTopic,
    /// 缺少国家或请求过于模糊
    Incomplete,
    /// 币种与所述国家不匹配
    InvalidCurrency,
}

impl RejectReason {
    /// 终端哨兵前缀，在纯文本边界输出时使用
    pub fn sentinel(&self) -> &'static str {
        match self {
            RejectReason::OffTopic => "RESPONSE_OFF_TOPIC",
            RejectReason::Incomplete => "RESPONSE_INCOMPLETE",
            RejectReason::InvalidCurrency => "RESPONSE_INVALID_CURRENCY",
        }
    }

    /// 匹配哨兵前缀，优先级为 OFF_TOPIC > INCOMPLETE > INVALID_CURRENCY
    pub fn match_sentinel(text: &str) -> Option<(RejectReason, String)> {
        const ORDERED: [RejectReason; 3] = [
            RejectReason::OffTopic,
            RejectReason::Incomplete,
            RejectReason::InvalidCurrency,
        ];

        for reason in ORDERED {
            if let Some(rest) = text.strip_prefix(reason.sentinel()) {
                let message = rest.trim_start_matches(':').trim().to_string();
                return Some((reason, message));
            }
        }
        None
    }
}

/// 校验通过后提取的结构化参数 - 阶段一产出后不可变，由后续阶段只读消费
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractedParams {
    /// 国家（接受路径上必定存在，由阶段一契约保证）
    pub country: Option<String>,
    /// 价位（含币种）
    pub price_point: Option<String>,
    /// 功能要求
    pub features: Option<String>,
    /// 客群
    pub customer_segment: Option<String>,
    /// 原始用户请求，逐字保留
    pub original_prompt: String,
}

/// 阶段一的产出：终端拒绝信号或结构化参数
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Rejected {
        reason: RejectReason,
        message: String,
    },
    Accepted {
        params: ExtractedParams,
    },
}

/// 阶段二产出的市场摘要，不超过三句话
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchSummary(pub String);

impl ResearchSummary {
    /// 搜索无可用结果时的全N/A摘要
    pub const UNAVAILABLE: &'static str =
        "Operator: N/A. Plan: N/A at N/A. Key features: N/A (source: N/A).";

    pub fn unavailable() -> Self {
        Self(Self::UNAVAILABLE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 一次管线运行的终端产出
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// 阶段一拒绝，后续阶段被完全旁路
    Rejected {
        reason: RejectReason,
        message: String,
    },
    /// 阶段三合成的最终建议
    Recommendation(String),
}

impl PipelineOutcome {
    /// 渲染为纯文本：拒绝输出哨兵前缀串，建议原样输出
    pub fn into_text(self) -> String {
        match self {
            PipelineOutcome::Rejected { reason, message } => {
                if message.is_empty() {
                    reason.sentinel().to_string()
                } else {
                    format!("{}: {}", reason.sentinel(), message)
                }
            }
            PipelineOutcome::Recommendation(text) => text,
        }
    }
}

/// 显式配额状态，由外层应用传入编排器边界；核心管线自身每次运行无状态
#[derive(Debug, Clone, Copy, Default)]
pub struct QuotaContext {
    /// 已使用的查询次数
    pub used: u32,
    /// 允许的查询上限，None表示不限制
    pub max: Option<u32>,
}

impl QuotaContext {
    pub fn unlimited() -> Self {
        Self { used: 0, max: None }
    }

    pub fn limited(used: u32, max: u32) -> Self {
        Self {
            used,
            max: Some(max),
        }
    }

    pub fn exhausted(&self) -> bool {
        matches!(self.max, Some(max) if self.used >= max)
    }
}

/// 管线错误分类
#[derive(Debug, Error)]
pub enum PipelineError {
    /// 阶段一接受路径的输出无法解析为交接载荷，不重试
    #[error("Error: Unable to parse validation output as JSON.")]
    HandoffParse,

    /// 查询配额已耗尽，管线未启动
    #[error("Query limit reached. Please contact the provider to increase access.")]
    QuotaExceeded,

    /// 底层推理/搜索服务失败，原样向上传播
    #[error(transparent)]
    Service(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_matching_precedence() {
        let (reason, message) =
            RejectReason::match_sentinel("RESPONSE_OFF_TOPIC: Rephrase query.").unwrap();
        assert_eq!(reason, RejectReason::OffTopic);
        assert_eq!(message, "Rephrase query.");

        let (reason, _) = RejectReason::match_sentinel("RESPONSE_INCOMPLETE: Specify country.")
            .unwrap();
        assert_eq!(reason, RejectReason::Incomplete);

        let (reason, _) =
            RejectReason::match_sentinel("RESPONSE_INVALID_CURRENCY: Correct currency/country.")
                .unwrap();
        assert_eq!(reason, RejectReason::InvalidCurrency);

        assert!(RejectReason::match_sentinel("{\"status\": \"valid\"}").is_none());
    }

    #[test]
    fn test_outcome_into_text() {
        let rejected = PipelineOutcome::Rejected {
            reason: RejectReason::OffTopic,
            message: "Rephrase query.".to_string(),
        };
        assert_eq!(rejected.into_text(), "RESPONSE_OFF_TOPIC: Rephrase query.");

        let bare = PipelineOutcome::Rejected {
            reason: RejectReason::Incomplete,
            message: String::new(),
        };
        assert_eq!(bare.into_text(), "RESPONSE_INCOMPLETE");

        let recommendation = PipelineOutcome::Recommendation("Launch it.".to_string());
        assert_eq!(recommendation.into_text(), "Launch it.");
    }

    #[test]
    fn test_quota_context() {
        assert!(!QuotaContext::unlimited().exhausted());
        assert!(!QuotaContext::limited(2, 3).exhausted());
        assert!(QuotaContext::limited(3, 3).exhausted());
    }

    #[test]
    fn test_unavailable_summary_is_all_na() {
        let summary = ResearchSummary::unavailable();
        assert!(summary.as_str().contains("N/A"));
        assert!(!summary.as_str().is_empty());
    }
}
