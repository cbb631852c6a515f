use log::info;
use serde::Serialize;

use crate::models::{Answer, Assessment, ClientError, MAX_LEVEL};
use crate::services::ApiClient;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct StartAssessmentRequest<'a> {
    team_id: &'a str,
    maturity_model_id: &'a str,
}

// Open a new assessment for a team against one maturity model
pub async fn start_assessment(
    client: &ApiClient,
    token: &str,
    team_id: &str,
    maturity_model_id: &str,
) -> Result<Assessment, ClientError> {
    info!("📝 Starting assessment for team: {} with model: {}", team_id, maturity_model_id);

    client
        .post_json(
            "assessments/start",
            &StartAssessmentRequest {
                team_id,
                maturity_model_id,
            },
            Some(token),
        )
        .await
}

pub async fn get_team_assessments(
    client: &ApiClient,
    token: &str,
    team_id: &str,
) -> Result<Vec<Assessment>, ClientError> {
    info!("📋 Fetching assessments for team: {}", team_id);

    client
        .get_json(&format!("assessments/team/{}", team_id), Some(token))
        .await
}

pub async fn get_assessment(
    client: &ApiClient,
    token: &str,
    id: &str,
) -> Result<Assessment, ClientError> {
    info!("🔍 Fetching assessment: {}", id);

    client.get_json(&format!("assessments/{}", id), Some(token)).await
}

// Push the signed-in user's answers as their submission, then reload the
// whole assessment so the chart matches server state instead of a local merge
pub async fn submit_assessment(
    client: &ApiClient,
    token: &str,
    id: &str,
    answers: &[Answer],
) -> Result<Assessment, ClientError> {
    for answer in answers {
        if answer.selected_level > MAX_LEVEL {
            return Err(ClientError::Validation(format!(
                "Selected level must be between 0 and {}.",
                MAX_LEVEL
            )));
        }
    }

    info!("💾 Submitting {} answers for assessment: {}", answers.len(), id);

    let _: Assessment = client
        .put_json(&format!("assessments/{}/submit", id), answers, Some(token))
        .await?;

    get_assessment(client, token, id).await
}
