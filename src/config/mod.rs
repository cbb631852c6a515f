use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_SESSION_FILE: &str = "./storage/session.json";

// Runtime configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub session_file: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            api_base_url: env::var("MATURITY_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            session_file: env::var("MATURITY_SESSION_FILE")
                .unwrap_or_else(|_| DEFAULT_SESSION_FILE.to_string()),
        }
    }
}
