mod db;
mod env;
mod record;

pub use db::connect;
pub use env::MongoDbEnv;
pub use record::UserRecord;
