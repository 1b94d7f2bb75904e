mod consts;
mod llm;
mod mongo;

pub use consts::*;
pub use llm::LlmClient;
pub use mongo::MongoClient;
