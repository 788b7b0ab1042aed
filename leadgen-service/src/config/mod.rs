//! Service configuration, loaded from the environment.

use anyhow::{anyhow, Result};
use secrecy::Secret;
use serde::Deserialize;
use std::env;

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_PRODUCT_NAME: &str = "Autoleadsa1";

#[derive(Debug, Clone)]
pub struct LeadgenConfig {
    pub server: ServerConfig,
    pub google: GoogleConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: Secret<String>,
    pub api_base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Product name woven into the prompt and response schema.
    pub product_name: String,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<i32>,
}

impl LeadgenConfig {
    /// Load configuration from environment variables and the optional
    /// `configuration` file.
    ///
    /// `GOOGLE_API_KEY` never has a default. With `ENVIRONMENT=prod` the
    /// remaining variables lose their defaults and must be set explicitly.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string());
        let is_prod = environment == "prod";

        let server = config::Config::builder()
            .add_source(config::File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize::<ServerConfig>()?;

        let api_key = Secret::new(get_env("GOOGLE_API_KEY", None, is_prod)?);
        let api_base_url = get_env("GEMINI_API_BASE_URL", Some(DEFAULT_API_BASE_URL), is_prod)?;
        let model = get_env("LEADGEN_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL), is_prod)?;
        let product_name = get_env("LEADGEN_PRODUCT_NAME", Some(DEFAULT_PRODUCT_NAME), is_prod)?;

        let temperature = env::var("LEADGEN_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok());
        let max_output_tokens = env::var("LEADGEN_MAX_OUTPUT_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok());

        Ok(Self {
            server,
            google: GoogleConfig {
                api_key,
                api_base_url,
                model,
            },
            generation: GenerationConfig {
                product_name,
                temperature,
                max_output_tokens,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(_) => {
            if is_prod {
                Err(anyhow!("{} is required in production but not set", key))
            } else {
                default
                    .map(|d| d.to_string())
                    .ok_or_else(|| anyhow!("{} is required but not set", key))
            }
        }
    }
}
