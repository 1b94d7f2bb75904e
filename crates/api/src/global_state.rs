use personachat_clients::{LlmClient, MongoClient};
use personachat_common::ModuleClient;

#[derive(Clone, Default)]
pub struct AppState {
    pub llm: LlmClient,
    pub mongo: MongoClient,
}

impl AppState {
    pub async fn new() -> Self {
        Self {
            llm: LlmClient::setup_connection().await,
            mongo: MongoClient::setup_connection().await,
        }
    }
}
