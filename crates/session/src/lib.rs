mod api_client;
mod form;
mod render;
mod session;

pub use api_client::ApiClient;
pub use form::CharacterForm;
pub use render::{HtmlTranscript, TranscriptRenderer};
pub use session::ChatSession;
