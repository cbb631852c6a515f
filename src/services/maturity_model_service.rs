use log::info;

use crate::models::{ClientError, MaturityModel};
use crate::services::ApiClient;

// List models, optionally only those scoped to one team
pub async fn get_all_models(
    client: &ApiClient,
    token: &str,
    team_id: Option<&str>,
) -> Result<Vec<MaturityModel>, ClientError> {
    info!("📋 Fetching maturity models");

    let path = match team_id {
        Some(team_id) => format!("models?teamId={}", team_id),
        None => "models".to_string(),
    };

    client.get_json(&path, Some(token)).await
}

pub async fn get_model_by_id(
    client: &ApiClient,
    token: &str,
    id: &str,
) -> Result<MaturityModel, ClientError> {
    info!("🔍 Fetching maturity model: {}", id);

    client.get_json(&format!("models/{}", id), Some(token)).await
}

// Create a model; shape problems are rejected before the request goes out
pub async fn create_model(
    client: &ApiClient,
    token: &str,
    model: &MaturityModel,
) -> Result<MaturityModel, ClientError> {
    model.validate()?;

    info!("📝 Creating maturity model: {}", model.name);

    client.post_json("models", model, Some(token)).await
}

pub async fn update_model(
    client: &ApiClient,
    token: &str,
    id: &str,
    model: &MaturityModel,
) -> Result<MaturityModel, ClientError> {
    model.validate()?;

    info!("🔄 Updating maturity model: {}", id);

    client
        .put_json(&format!("models/{}", id), model, Some(token))
        .await
}

pub async fn delete_model(client: &ApiClient, token: &str, id: &str) -> Result<(), ClientError> {
    info!("🗑️ Deleting maturity model: {}", id);

    client.delete(&format!("models/{}", id), Some(token)).await
}
