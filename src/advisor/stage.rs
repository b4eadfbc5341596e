//! 管线阶段抽象 - 标准化的Prompt组装与推理调用流程

use async_trait::async_trait;

use crate::advisor::context::PipelineContext;
use crate::advisor::types::PipelineError;

/// Prompt模板配置
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// 系统提示词
    pub system_prompt: String,
    /// 开头的说明性指令
    pub opening_instruction: String,
    /// 结尾的强调性指令
    pub closing_instruction: String,
}

impl PromptTemplate {
    /// 按照"开头指令 + 素材 + 结尾指令"的标准结构组装用户提示词
    pub fn assemble_user_prompt(&self, material: &str) -> String {
        let mut prompt = String::new();

        prompt.push_str(&self.opening_instruction);
        prompt.push_str("\n\n");
        prompt.push_str(material);
        prompt.push('\n');
        prompt.push_str(&self.closing_instruction);

        prompt
    }
}

/// 极简管线阶段trait - 输入输出类型化，阶段间交接由编排器串联
#[async_trait]
pub trait PipelineStage: Send + Sync {
    /// 阶段输入类型
    type Input: Send + Sync;
    /// 阶段输出类型
    type Output: Send + Sync;

    /// 阶段标识，用于日志输出
    fn stage_name(&self) -> &'static str;

    /// Prompt模板配置
    fn prompt_template(&self) -> PromptTemplate;

    /// 将输入格式化为提示词素材
    fn format_material(&self, input: &Self::Input) -> String;

    /// 解释推理服务的原始输出
    fn interpret(&self, raw: &str, input: &Self::Input) -> Result<Self::Output, PipelineError>;

    /// 默认实现的execute方法 - 组装Prompt、调用推理服务、解释输出
    async fn execute(
        &self,
        context: &PipelineContext,
        input: Self::Input,
    ) -> Result<Self::Output, PipelineError> {
        let template = self.prompt_template();
        let user_prompt = template.assemble_user_prompt(&self.format_material(&input));

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
    use super::PromptTemplate;

    #[test]
    fn test_assemble_user_prompt_structure() {
        let template = PromptTemplate {
            system_prompt: "sys".to_string(),
            opening_instruction: "Analyze the following:".to_string(),
            closing_instruction: "Answer briefly.".to_string(),
        };

        let prompt = template.assemble_user_prompt("the material");

        assert!(prompt.starts_with("Analyze the following:"));
        assert!(prompt.contains("the material"));
        assert!(prompt.ends_with("Answer briefly."));
    }
}
