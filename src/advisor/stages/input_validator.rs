//! 阶段一：输入校验 - 将原始用户请求转化为拒绝信号或结构化参数

use async_trait::async_trait;
use serde::Deserialize;

use crate::advisor::stage::{PipelineStage, PromptTemplate};
use crate::advisor::types::{ExtractedParams, PipelineError, RejectReason, ValidationResult};
use crate::llm::client::utils::strip_code_fences;

/// 输入校验器 - 负责主题相关性、参数完整性与币种合理性检查
#[derive(Default)]
pub struct InputValidator;

/// 接受路径上的JSON交接载荷
#[derive(Debug, Deserialize)]
struct ValidationPayload {
    status: String,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    price_point: Option<String>,
    #[serde(default)]
    features: Option<String>,
    #[serde(default)]
    customer_segment: Option<String>,
    #[serde(default)]
    original_prompt: Option<String>,
}

#[async_trait]
impl PipelineStage for InputValidator {
    type Input = String;
    type Output = ValidationResult;

    fn stage_name(&self) -> &'static str {
        "InputValidator"
    }

    fn prompt_template(&self) -> PromptTemplate {
        PromptTemplate {
            system_prompt: r#"You are a strict input validator for a telecom product design assistant.
You analyze user requests for topic relevance and parameter validity (country, currency),
and reject inputs that cannot support downstream market analysis."#
                .to_string(),

            opening_instruction: "Analyze the following user request:".to_string(),

            closing_instruction: r#"
## Validation rules (apply in this exact order):
1. **Relevance:** If the request is NOT related to telecom product design, output exactly 'RESPONSE_OFF_TOPIC: Rephrase query.'
2. **Extract:** Identify `country` (MUST be present), `price_point` (with currency), `features`, `customer_segment`.
3. **Completeness:** If `country` is missing, output exactly 'RESPONSE_INCOMPLETE: Specify country.'
   If the request is too vague for any analysis, output exactly 'RESPONSE_INCOMPLETE: Provide specifics.'
4. **Currency:** Use your knowledge to determine whether the given currency (if any) is plausibly used in the stated country.
   If it is not, output exactly 'RESPONSE_INVALID_CURRENCY: Correct currency/country.'
5. **Output:** Otherwise respond with a single JSON object carrying `status` set to "valid",
   the extracted parameters (null when missing), and `original_prompt` preserved verbatim.
   No surrounding prose."#
                .to_string(),
        }
    }

    fn format_material(&self, input: &String) -> String {
        format!("'{}'", input)
    }

    fn interpret(&self, raw: &str, input: &String) -> Result<ValidationResult, PipelineError> {
        let cleaned = strip_code_fences(raw);

        if let Some((reason, message)) = RejectReason::match_sentinel(&cleaned) {
            return Ok(ValidationResult::Rejected { reason, message });
        }

        let payload: ValidationPayload =
            serde_json::from_str(&cleaned).map_err(|_| PipelineError::HandoffParse)?;

        // 接受路径的交接契约：status必须为valid且country非空，违反即视为交接失败
        if payload.status != "valid" || payload.country.is_none() {
            return Err(PipelineError::HandoffParse);
        }

        Ok(ValidationResult::Accepted {
            params: ExtractedParams {
                country: payload.country,
                price_point: payload.price_point,
                features: payload.features,
                customer_segment: payload.customer_segment,
                original_prompt: payload.original_prompt.unwrap_or_else(|| input.clone()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpret(raw: &str) -> Result<ValidationResult, PipelineError> {
        InputValidator.interpret(raw, &"the prompt".to_string())
    }

    #[test]
    fn test_sentinel_responses_map_to_rejections() {
        let result = interpret("RESPONSE_OFF_TOPIC: Rephrase query.").unwrap();
        assert!(matches!(
            result,
            ValidationResult::Rejected {
                reason: RejectReason::OffTopic,
                ..
            }
        ));

        let result = interpret("RESPONSE_INCOMPLETE: Specify country.").unwrap();
        assert!(matches!(
            result,
            ValidationResult::Rejected {
                reason: RejectReason::Incomplete,
                ..
            }
        ));

        let result = interpret("RESPONSE_INVALID_CURRENCY: Correct currency/country.").unwrap();
        assert!(matches!(
            result,
            ValidationResult::Rejected {
                reason: RejectReason::InvalidCurrency,
                ..
            }
        ));
    }

    #[test]
    fn test_valid_payload_is_accepted() {
        let raw = r#"{"status":"valid","country":"India","price_point":"199 INR","features":null,"customer_segment":"students","original_prompt":"Suggest a new prepaid product in India for students at 199 INR"}"#;

        let result = interpret(raw).unwrap();
        let ValidationResult::Accepted { params } = result else {
            panic!("expected accepted result");
        };

        assert_eq!(params.country.as_deref(), Some("India"));
        assert_eq!(params.price_point.as_deref(), Some("199 INR"));
        assert!(params.features.is_none());
        assert_eq!(params.customer_segment.as_deref(), Some("students"));
        assert_eq!(
            params.original_prompt,
            "Suggest a new prepaid product in India for students at 199 INR"
        );
    }

    #[test]
    fn test_code_fenced_payload_is_accepted() {
        let raw = "```json\n{\"status\":\"valid\",\"country\":\"Germany\",\"original_prompt\":\"p\"}\n```";

        let result = interpret(raw).unwrap();
        assert!(matches!(result, ValidationResult::Accepted { .. }));
    }

    #[test]
    fn test_malformed_payload_is_handoff_error() {
        assert!(matches!(
            interpret("this is not json"),
            Err(PipelineError::HandoffParse)
        ));
    }

    #[test]
    fn test_payload_without_country_violates_contract() {
        let raw = r#"{"status":"valid","country":null,"original_prompt":"p"}"#;
        assert!(matches!(interpret(raw), Err(PipelineError::HandoffParse)));
    }

    #[test]
    fn test_payload_with_wrong_status_violates_contract() {
        let raw = r#"{"status":"invalid","country":"India","original_prompt":"p"}"#;
        assert!(matches!(interpret(raw), Err(PipelineError::HandoffParse)));
    }

    #[test]
    fn test_missing_original_prompt_falls_back_to_input() {
        let raw = r#"{"status":"valid","country":"India"}"#;

        let result = interpret(raw).unwrap();
        let ValidationResult::Accepted { params } = result else {
            panic!("expected accepted result");
        };
        assert_eq!(params.original_prompt, "the prompt");
    }
}
