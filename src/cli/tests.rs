#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::config::LLMProvider;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::try_parse_from(["telco-advisor-rs", "list competition in France"]).unwrap();

        assert_eq!(args.prompt, "list competition in France");
        assert!(args.config.is_none());
        assert!(args.llm_provider.is_none());
        assert!(args.llm_api_key.is_none());
        assert!(args.model_efficient.is_none());
        assert!(args.model_powerful.is_none());
        assert!(args.search_api_key.is_none());
        assert!(args.search_max_results.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_requires_prompt() {
        assert!(Args::try_parse_from(["telco-advisor-rs"]).is_err());
    }

    #[test]
    fn test_args_llm_options() {
        let args = Args::try_parse_from([
            "telco-advisor-rs",
            "Suggest a new prepaid product in India for students at 199 INR",
            "--llm-provider",
            "deepseek",
            "--llm-api-key",
            "test-key",
            "--llm-api-base-url",
            "https://example.com/v1",
            "--model-efficient",
            "model-a",
            "--max-tokens",
            "2048",
            "--temperature",
            "0.5",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.llm_provider, Some("deepseek".to_string()));
        assert_eq!(args.llm_api_key, Some("test-key".to_string()));
        assert_eq!(args.llm_api_base_url, Some("https://example.com/v1".to_string()));
        assert_eq!(args.model_efficient, Some("model-a".to_string()));
        assert_eq!(args.max_tokens, Some(2048));
        assert_eq!(args.temperature, Some(0.5));
        assert!(args.verbose);
    }

    #[test]
    fn test_into_config_applies_overrides() {
        let args = Args::try_parse_from([
            "telco-advisor-rs",
            "some prompt",
            "--llm-provider",
            "anthropic",
            "--llm-api-key",
            "override-key",
            "--search-api-key",
            "search-key",
            "--search-max-results",
            "2",
            "--verbose",
        ])
        .unwrap();

        let config = args.into_config();

        assert_eq!(config.llm.provider, LLMProvider::Anthropic);
        assert_eq!(config.llm.api_key, "override-key");
        assert_eq!(config.search.api_key, "search-key");
        assert_eq!(config.search.max_results, 2);
        assert!(config.verbose);
    }

    #[test]
    fn test_into_config_efficient_override_follows_powerful() {
        let args = Args::try_parse_from([
            "telco-advisor-rs",
            "some prompt",
            "--model-efficient",
            "model-a",
        ])
        .unwrap();

        let config = args.into_config();

        assert_eq!(config.llm.model_efficient, "model-a");
        assert_eq!(config.llm.model_powerful, "model-a");
    }

    #[test]
    fn test_into_config_unknown_provider_keeps_default() {
        let args = Args::try_parse_from([
            "telco-advisor-rs",
            "some prompt",
            "--llm-provider",
            "not-a-provider",
        ])
        .unwrap();

        let config = args.into_config();

        assert_eq!(config.llm.provider, LLMProvider::OpenAI);
    }
}
