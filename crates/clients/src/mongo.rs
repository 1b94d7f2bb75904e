use personachat_common::{define_module_client, EnvVars};
use personachat_database::MongoDbEnv;

use mongodb::Database;

define_module_client! {
    (struct MongoClient, "mongo")
    client_type: Database,
    env: ["MONGODB_URI", "MONGODB_DB_NAME"],
    setup: async {
        let env = MongoDbEnv::load();
        personachat_database::connect(
            &env.get_env_var("MONGODB_URI"),
            &env.get_env_var("MONGODB_DB_NAME"),
        ).await
    }
}
