/// Default completion model.
pub const CHAT_MODEL: &str = "deepseek-chat";
/// Variant that returns an internal reasoning trace alongside the answer.
pub const REASONER_MODEL: &str = "deepseek-reasoner";

/// Hard cap on `maxTokens` accepted by the completion proxy.
pub const MAX_TOKENS_CEILING: u32 = 4096;

/// Fixed sampling temperature forwarded on every completion request.
pub const COMPLETION_TEMPERATURE: f32 = 1.3;
