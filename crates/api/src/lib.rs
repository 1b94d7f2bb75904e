mod env;
mod global_state;
mod middleware;
mod response;
mod routes;
mod utils;

pub use env::ApiServerEnv;
pub use global_state::AppState;
pub use middleware::{authenticate, AuthenticatedRequest};
pub use response::{AppError, AppSuccess};
pub use routes::{character_routes, chat_routes};
pub use utils::{extract_bearer_token, setup_tracing};
