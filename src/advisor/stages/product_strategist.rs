//! 阶段三：产品策略 - 基于市场摘要与原始请求合成最终建议

use async_trait::async_trait;

use crate::advisor::stage::{PipelineStage, PromptTemplate};
use crate::advisor::types::{PipelineError, ResearchSummary};

/// 产品策略师 - 产出单个产品概念或定价建议
#[derive(Default)]
pub struct ProductStrategist;

/// 阶段三输入：市场摘要与逐字保留的原始请求
pub struct StrategistInput {
    pub summary: ResearchSummary,
    pub original_prompt: String,
}

#[async_trait]
impl PipelineStage for ProductStrategist {
    type Input = StrategistInput;
    type Output = String;

    fn stage_name(&self) -> &'static str {
        "ProductStrategist"
    }

    fn prompt_template(&self) -> PromptTemplate {
        PromptTemplate {
            system_prompt: r#"You are an agile telecom strategist.
You synthesize market data into a single impactful product concept or a
well-justified pricing recommendation, focusing on actionable output."#
                .to_string(),

            opening_instruction: "Analyze the following market data and user request:".to_string(),

            closing_instruction: r#"
## Synthesis steps:
1. **Intent:** Determine whether the user wants 'product ideas', 'right price analysis', or 'list competition'.
   When the intent is ambiguous among these, default to 'list competition'.
2. **Generate:**
   - If 'product ideas': propose exactly **one** idea: Name, Key Features, Price.
   - If 'right price analysis': propose one price point with a **brief** justification referencing the market data.
   - If 'list competition': restate the market data in one short sentence.
3. **Format:** A concise paragraph or a few bullet points. No preamble."#
                .to_string(),
        }
    }

    fn format_material(&self, input: &StrategistInput) -> String {
        format!(
            "### Market data\n{}\n\n### Original prompt\n'{}'\n",
            input.summary.as_str(),
            input.original_prompt,
        )
    }

    fn interpret(&self, raw: &str, _input: &StrategistInput) -> Result<String, PipelineError> {
        Ok(raw.trim().to_string())
    }
}
