//! LLM输出处理工具

/// 剥离LLM输出中包裹JSON载荷的代码围栏标记
///
/// 模型在被要求输出JSON时经常返回```json ... ```包裹的文本，
/// 解析交接载荷前必须先剥离围栏。
pub fn strip_code_fences(raw: &str) -> String {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed.to_string();
    };

    // 围栏起始处可能带有语言标注（如```json）
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim().to_string()
}
