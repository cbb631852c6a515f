use log::info;
use serde::Serialize;

use crate::models::{ClientError, Role, Team};
use crate::services::{ApiClient, MessageResponse};

#[derive(Serialize, Debug)]
struct CreateTeamRequest<'a> {
    name: &'a str,
}

#[derive(Serialize, Debug)]
struct InviteRequest<'a> {
    email: &'a str,
}

#[derive(Serialize, Debug)]
struct UpdateMemberRolesRequest<'a> {
    roles: &'a [Role],
}

// All teams the signed-in user belongs to
pub async fn get_user_teams(client: &ApiClient, token: &str) -> Result<Vec<Team>, ClientError> {
    info!("📋 Fetching teams");

    client.get_json("teams", Some(token)).await
}

// Create a team owned by the signed-in user
pub async fn create_team(
    client: &ApiClient,
    token: &str,
    name: &str,
) -> Result<Team, ClientError> {
    info!("📝 Creating new team: {}", name);

    client
        .post_json("teams", &CreateTeamRequest { name }, Some(token))
        .await
}

// Email an invitation link for the given team
pub async fn invite_member(
    client: &ApiClient,
    token: &str,
    team_id: &str,
    email: &str,
) -> Result<MessageResponse, ClientError> {
    info!("📧 Inviting {} to team: {}", email, team_id);

    client
        .post_json(
            &format!("teams/{}/invite", team_id),
            &InviteRequest { email },
            Some(token),
        )
        .await
}

// Replace a member's role set; the backend checks the caller is the owner
pub async fn update_member_roles(
    client: &ApiClient,
    token: &str,
    team_id: &str,
    user_id: &str,
    roles: &[Role],
) -> Result<MessageResponse, ClientError> {
    info!("🔄 Updating roles for user: {} in team: {}", user_id, team_id);

    client
        .put_json(
            &format!("teams/{}/members/{}", team_id, user_id),
            &UpdateMemberRolesRequest { roles },
            Some(token),
        )
        .await
}
