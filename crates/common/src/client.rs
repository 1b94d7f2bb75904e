#[async_trait::async_trait]
pub trait ModuleClient: Clone + Send + Sync + 'static {
    const NAME: &'static str;
    type Client;

    fn validate_env() -> bool;
    async fn setup_connection() -> Self;

    fn get_client(&self) -> &Self::Client;
}

/// Declares a cheaply-clonable handle around a shared connection. The handle
/// defaults to an unconnected state so request-level code can be exercised
/// without live backends; `setup_connection` validates the required
/// environment up front and panics loudly when it is incomplete.
#[macro_export]
macro_rules! define_module_client {
    {
        (struct $struct_name:ident, $client_name:expr)
        client_type: $client_type:ty,
        env: [ $( $env_var:literal ),* ],
        setup: $setup_logic:expr
    } => {
        #[derive(Clone, Default)]
        pub struct $struct_name {
            client: Option<std::sync::Arc<$client_type>>,
        }

        #[async_trait::async_trait]
        impl ::personachat_common::ModuleClient for $struct_name {
            const NAME: &'static str = $client_name;
            type Client = std::sync::Arc<$client_type>;

            fn validate_env() -> bool {
                const ENV_VARS: &'static [&'static str] = &[ $( $env_var ),* ];
                let missing: Vec<&'static str> = ENV_VARS.iter().cloned()
                    .filter(|var| std::env::var(var).is_err())
                    .collect();

                if !missing.is_empty() {
                    tracing::error!(
                        "[Client: {}] missing environment variables: [{}]",
                        $client_name, missing.join(", ")
                    );
                }
                missing.is_empty()
            }

            async fn setup_connection() -> Self {
                if !Self::validate_env() {
                    panic!("[Client: {}] environment incomplete, cannot setup connection", $client_name);
                }

                let client_instance = $setup_logic.await;
                Self {
                    client: Some(std::sync::Arc::new(client_instance)),
                }
            }

            fn get_client(&self) -> &Self::Client {
                self.client.as_ref().expect("client not connected, call setup_connection first")
            }
        }
    }
}
