//! 管线编排器 - 串接三个阶段的状态机，处理阶段间交接与错误映射
//!
//! 状态流转：Validating → {Rejected(终端), Researching} → Synthesizing(终端)，
//! 任一阶段的解析/服务错误进入隐式Failed终端。无回退、无循环、无并行。

use anyhow::Result;

use crate::advisor::context::PipelineContext;
use crate::advisor::stage::PipelineStage;
use crate::advisor::stages::input_validator::InputValidator;
use crate::advisor::stages::market_researcher::MarketResearcher;
use crate::advisor::stages::product_strategist::{ProductStrategist, StrategistInput};
use crate::advisor::types::{PipelineError, PipelineOutcome, QuotaContext, ValidationResult};

/// 管线编排器
#[derive(Default)]
pub struct PipelineOrchestrator;

impl PipelineOrchestrator {
    /// 执行一次完整的管线运行：校验 → 调研 → 合成
    pub async fn run(
        &self,
        context: &PipelineContext,
        prompt: &str,
        quota: &QuotaContext,
    ) -> Result<PipelineOutcome, PipelineError> {
        if quota.exhausted() {
            return Err(PipelineError::QuotaExceeded);
        }

        let verbose = context.config.verbose;
        if verbose {
            println!("🚀 开始执行产品建议管线...");
        }

        // Validating：拒绝即终端，后续阶段被完全旁路
        if verbose {
            println!("🤖 执行 InputValidator 阶段...");
        }
        let validation = InputValidator.execute(context, prompt.to_string()).await?;
        let params = match validation {
            ValidationResult::Rejected { reason, message } => {
                if verbose {
                    println!("⛔ 输入被拒绝（{}）", reason.sentinel());
                }
                return Ok(PipelineOutcome::Rejected { reason, message });
            }
            ValidationResult::Accepted { params } => params,
        };

        // Researching：单次搜索，永不拒绝
        if verbose {
            println!("🤖 执行 MarketResearcher 阶段...");
        }
        let original_prompt = params.original_prompt.clone();
        let summary = MarketResearcher.execute(context, params).await?;

        // Synthesizing：合成结果即为管线最终输出
        if verbose {
            println!("🤖 执行 ProductStrategist 阶段...");
        }
        let recommendation = ProductStrategist
            .execute(
                context,
                StrategistInput {
                    summary,
                    original_prompt,
                },
            )
            .await?;

        if verbose {
            println!("✓ 产品建议管线执行完毕");
        }
        Ok(PipelineOutcome::Recommendation(recommendation))
    }
}

/// 纯文本边界适配
///
/// 拒绝渲染为哨兵前缀串，交接解析失败映射为固定错误消息（唯一的恢复动作），
/// 服务错误原样向上传播。
pub async fn run_pipeline(
    context: &PipelineContext,
    prompt: &str,
    quota: &QuotaContext,
) -> Result<String> {
    match PipelineOrchestrator.run(context, prompt, quota).await {
        Ok(outcome) => Ok(outcome.into_text()),
        Err(PipelineError::HandoffParse) => Ok(PipelineError::HandoffParse.to_string()),
        Err(err) => Err(err.into()),
    }
}
