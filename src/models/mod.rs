// src/models/mod.rs
use std::fmt;

pub mod user;
pub use user::*;

pub mod team;
pub use team::*;

pub mod maturity_model;
pub use maturity_model::*;

pub mod assessment;
pub use assessment::*;

// Custom error types
#[derive(Debug)]
pub enum ClientError {
    Network(String),
    Api { status: u16, message: String },
    TwoFactorRequired,
    Validation(String),
    Io(String),
}

impl ClientError {
    // The single line shown inline next to the triggering form
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network(_) => "Could not reach the server. Please try again.".to_string(),
            ClientError::Api { message, .. } => message.clone(),
            ClientError::TwoFactorRequired => {
                "Two-Factor Authentication required. Please enter your code.".to_string()
            }
            ClientError::Validation(message) => message.clone(),
            ClientError::Io(_) => "Something went wrong on this machine. Please try again.".to_string(),
        }
    }
}

// Implement Display for ClientError
impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "Network error: {}", msg),
            ClientError::Api { status, message } => write!(f, "API error ({}): {}", status, message),
            ClientError::TwoFactorRequired => write!(f, "Two-factor authentication required"),
            ClientError::Validation(msg) => write!(f, "Validation: {}", msg),
            ClientError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

// Implement std::error::Error for ClientError
impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Io(err.to_string())
    }
}
