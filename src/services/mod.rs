// src/services/mod.rs
pub mod http;
pub mod auth_service;
pub mod team_service;
pub mod maturity_model_service;
pub mod assessment_service;
pub mod assessment_aggregator;

pub use http::{ApiClient, MessageResponse};
