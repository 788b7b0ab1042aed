use std::time::Duration;

use secrecy::Secret;

use leadgen_service::config::{GenerationConfig, GoogleConfig, LeadgenConfig, ServerConfig};
use leadgen_service::startup::Application;

/// Service configuration pointed at a stubbed Gemini endpoint.
pub fn test_config(api_base_url: &str) -> LeadgenConfig {
    LeadgenConfig {
        server: ServerConfig { port: 0 },
        google: GoogleConfig {
            api_key: Secret::new("test-api-key".to_string()),
            api_base_url: api_base_url.to_string(),
            model: "gemini-2.5-flash".to_string(),
        },
        generation: GenerationConfig {
            product_name: "Autoleadsa1".to_string(),
            temperature: None,
            max_output_tokens: None,
        },
    }
}

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the service on a random port, wired to the given Gemini base URL.
    pub async fn spawn(api_base_url: &str) -> Self {
        leadgen_service::services::metrics::init_metrics();

        let app = Application::build(test_config(api_base_url))
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            let _ = app.run_until_stopped().await;
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("http://127.0.0.1:{}/health", port);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
        }
    }
}
