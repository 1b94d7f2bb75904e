mod character;
mod chat;

pub use character::character_routes;
pub use chat::chat_routes;
