use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: String,
    pub port: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_token = env::var("API_TOKEN")?;
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

        Ok(Self { api_token, port })
    }
}
