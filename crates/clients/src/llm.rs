use std::env;

use personachat_common::define_module_client;

use async_openai::{config::OpenAIConfig, Client};

define_module_client! {
    (struct LlmClient, "llm")
    client_type: Client<OpenAIConfig>,
    env: ["DEEPSEEK_BASE_URL", "DEEPSEEK_API_KEY"],
    setup: async {
        let base_url = env::var("DEEPSEEK_BASE_URL").expect("DEEPSEEK_BASE_URL is not set");
        let api_key = env::var("DEEPSEEK_API_KEY").expect("DEEPSEEK_API_KEY is not set");
        let openai_config = OpenAIConfig::new()
            .with_api_base(base_url)
            .with_api_key(api_key);

        Client::build(
            reqwest::Client::new(),
            openai_config,
            Default::default()
        )
    }
}
