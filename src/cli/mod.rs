use crate::config::{Config, LLMProvider};
use clap::Parser;
use std::path::PathBuf;

/// Telco-Advisor-RS - 由Rust与AI驱动的电信产品建议引擎
#[derive(Parser, Debug)]
#[command(name = "Antenna (telco-advisor-rs)")]
#[command(
    about = "AI-based advisory pipeline for telecom product design. It validates a free-text product or pricing request, researches one competitor offering via web search, and synthesizes a concise recommendation."
)]
#[command(author = "Sopaco")]
#[command(version)]
pub struct Args {
    /// 用户的产品/定价请求
    pub prompt: String,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// LLM Provider (openai, moonshot, deepseek, mistral, openrouter, anthropic, gemini, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 高能效模型，优先用于Antenna引擎的常规推理任务
    #[arg(long)]
    pub model_efficient: Option<String>,

    /// 高质量模型，用于超长上下文场景下的兜底推理
    #[arg(long)]
    pub model_powerful: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 搜索服务API KEY
    #[arg(long)]
    pub search_api_key: Option<String>,

    /// 单次查询请求的搜索结果条数
    #[arg(long)]
    pub search_max_results: Option<usize>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            // 如果显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path).unwrap_or_else(|err| {
                panic!("⚠️ 警告: 无法读取配置文件 {:?}: {}", config_path, err)
            })
        } else {
            // 如果没有显式指定配置文件，尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("antenna.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|err| {
                    panic!(
                        "⚠️ 警告: 无法读取默认配置文件 {:?}: {}",
                        default_config_path, err
                    )
                })
            } else {
                // 默认配置文件不存在，使用默认值
                Config::default()
            }
        };

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        let efficient_overridden = self.model_efficient.is_some();
        if let Some(model_efficient) = self.model_efficient {
            config.llm.model_efficient = model_efficient;
        }
        match self.model_powerful {
            Some(model_powerful) => config.llm.model_powerful = model_powerful,
            // 只指定了efficient时，powerful同步跟随，避免兜底模型落在过时配置上
            None if efficient_overridden => {
                config.llm.model_powerful = config.llm.model_efficient.clone();
            }
            None => {}
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        // 搜索配置
        if let Some(search_api_key) = self.search_api_key {
            config.search.api_key = search_api_key;
        }
        if let Some(search_max_results) = self.search_max_results {
            config.search.max_results = search_max_results;
        }

        // 其他配置
        config.verbose = self.verbose;

        config
    }
}

// Include tests
#[cfg(test)]
mod tests;
