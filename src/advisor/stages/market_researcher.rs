//! 阶段二：市场调研 - 基于单次搜索产出简短的竞品摘要

use async_trait::async_trait;

use crate::advisor::context::PipelineContext;
use crate::advisor::stage::{PipelineStage, PromptTemplate};
use crate::advisor::types::{ExtractedParams, PipelineError, ResearchSummary};

/// 市场调研员 - 定位一个最相关的竞品方案并提炼其核心信息
#[derive(Default)]
pub struct MarketResearcher;

/// 拼接单条搜索查询：国家、价位、功能、客群（缺省为general）
pub(crate) fn build_search_query(params: &ExtractedParams) -> String {
    format!(
        "telecom mobile plans {} {} {} {}",
        params.country.as_deref().unwrap_or_default(),
        params.price_point.as_deref().unwrap_or_default(),
        params.features.as_deref().unwrap_or_default(),
        params.customer_segment.as_deref().unwrap_or("general"),
    )
    .split_whitespace()
    .collect::<Vec<_>>()
    .join(" ")
}

#[async_trait]
impl PipelineStage for MarketResearcher {
    type Input = ExtractedParams;
    type Output = ResearchSummary;

    fn stage_name(&self) -> &'static str {
        "MarketResearcher"
    }

    fn prompt_template(&self) -> PromptTemplate {
        PromptTemplate {
            system_prompt: r#"You are a concise telecom market analyst.
From a single search result you swiftly pinpoint the most prominent competitor
plan's operator, pricing and core features in a given country."#
                .to_string(),

            opening_instruction:
                "Summarize the competitor plan evidenced by the following material:".to_string(),

            closing_instruction: r#"
## Summary requirements:
- From the single search result above, extract: Operator, Plan Name, Price (with currency), Key Features, Source URL.
- State 'N/A' for any field that cannot be determined.
- Present a very brief, concise summary paragraph of at most three sentences."#
                .to_string(),
        }
    }

    fn format_material(&self, input: &ExtractedParams) -> String {
        format!(
            "### Research context\nCountry: {}\nPrice point: {}\nFeatures: {}\nCustomer segment: {}\nOriginal prompt: '{}'\n",
            input.country.as_deref().unwrap_or("N/A"),
            input.price_point.as_deref().unwrap_or("N/A"),
            input.features.as_deref().unwrap_or("N/A"),
            input.customer_segment.as_deref().unwrap_or("general"),
            input.original_prompt,
        )
    }

    fn interpret(
        &self,
        raw: &str,
        _input: &ExtractedParams,
    ) -> Result<ResearchSummary, PipelineError> {
        Ok(ResearchSummary(raw.trim().to_string()))
    }

    /// 搜索先行的execute：发起一次搜索，零结果时直接返回全N/A摘要，不再调用推理服务
    async fn execute(
        &self,
        context: &PipelineContext,
        input: ExtractedParams,
    ) -> Result<ResearchSummary, PipelineError> {
        let query = build_search_query(&input);
        let hits = context
            .search
            .query(&query, context.config.search.max_results)
            .await?;

        let Some(hit) = hits.first() else {
            if context.config.verbose {
                println!("⚠️ 搜索无可用结果，返回N/A摘要");
            }
            return Ok(ResearchSummary::unavailable());
        };

        let template = self.prompt_template();
        let material = format!(
            "{}\n### Top search result\nTitle: {}\nSnippet: {}\nURL: {}\n",
            self.format_material(&input),
            hit.title,
            hit.snippet,
            hit.url,
        );
        let user_prompt = template.assemble_user_prompt(&material);

        let raw = context
            .reasoner
            .complete(&template.system_prompt, &user_prompt)
            .await?;

        if context.config.verbose {
            println!("✅ Stage [{}] 推理完成", self.stage_name());
        }

        self.interpret(&raw, &input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ExtractedParams {
        ExtractedParams {
            country: Some("India".to_string()),
            price_point: Some("199 INR".to_string()),
            features: None,
            customer_segment: Some("students".to_string()),
            original_prompt: "Suggest a new prepaid product in India for students at 199 INR"
                .to_string(),
        }
    }

    #[test]
    fn test_build_search_query_full() {
        let query = build_search_query(&params());
        assert_eq!(query, "telecom mobile plans India 199 INR students");
    }

    #[test]
    fn test_build_search_query_defaults_segment_to_general() {
        let mut p = params();
        p.customer_segment = None;
        p.price_point = None;

        let query = build_search_query(&p);
        assert_eq!(query, "telecom mobile plans India general");
    }

    #[test]
    fn test_material_marks_missing_fields() {
        let mut p = params();
        p.features = None;

        let material = MarketResearcher.format_material(&p);
        assert!(material.contains("Country: India"));
        assert!(material.contains("Features: N/A"));
    }
}
