use futures::join;
use log::error;

use crate::models::{ClientError, MaturityModel, Role, Team};
use crate::screens::{assessment_screens, prompt};
use crate::services::{assessment_service, maturity_model_service, team_service, ApiClient};
use crate::utils::session::Session;
use crate::utils::validation;

// Teams dashboard: list the user's teams, create one, open one
pub async fn teams_dashboard(client: &ApiClient, session: &Session) -> Result<(), ClientError> {
    let token = match session.bearer_token() {
        Some(token) => token.to_string(),
        None => {
            println!("Please log in.");
            return Ok(());
        }
    };

    loop {
        println!("\n--- My Teams ---");

        let teams = match team_service::get_user_teams(client, &token).await {
            Ok(teams) => teams,
            Err(e) => {
                error!("❌ Error loading teams: {}", e);
                println!("{}", e.user_message());
                return Ok(());
            }
        };

        if teams.is_empty() {
            println!("You are not a member of any team yet.");
        }
        for (index, team) in teams.iter().enumerate() {
            println!(
                "  {}) {} ({} members)",
                index + 1,
                team.name,
                team.members.len()
            );
        }
        println!("  n) Create new team");
        println!("  b) Back");

        let choice = prompt("Choice")?;
        match choice.as_str() {
            "n" => create_team_prompt(client, &token).await?,
            "b" => return Ok(()),
            other => match other.parse::<usize>() {
                Ok(index) if index >= 1 && index <= teams.len() => {
                    team_details(client, session, &teams[index - 1].id).await?;
                }
                _ => println!("Unknown option."),
            },
        }
    }
}

async fn create_team_prompt(client: &ApiClient, token: &str) -> Result<(), ClientError> {
    let name = prompt("Team name")?;

    if let Err(e) = validation::require_field(&name, "Team name") {
        println!("{}", e.user_message());
        return Ok(());
    }

    match team_service::create_team(client, token, &name).await {
        Ok(_) => println!("Team created successfully!"),
        Err(e) => {
            error!("❌ Error creating team: {}", e);
            println!("{}", e.user_message());
        }
    }

    Ok(())
}

// Team details: members, invitations, role updates and assessments.
// The team, its assessments and the model catalogue load concurrently;
// each failure is handled on its own.
pub async fn team_details(
    client: &ApiClient,
    session: &Session,
    team_id: &str,
) -> Result<(), ClientError> {
    let token = match session.bearer_token() {
        Some(token) => token.to_string(),
        None => {
            println!("Please log in.");
            return Ok(());
        }
    };
    let user = match session.current_user() {
        Some(user) => user.clone(),
        None => {
            println!("Please log in.");
            return Ok(());
        }
    };

    loop {
        let (teams, assessments, models) = join!(
            team_service::get_user_teams(client, &token),
            assessment_service::get_team_assessments(client, &token, team_id),
            maturity_model_service::get_all_models(client, &token, None),
        );

        let team = match teams {
            Ok(teams) => match teams.into_iter().find(|team| team.id == team_id) {
                Some(team) => team,
                None => {
                    println!("Team not found.");
                    return Ok(());
                }
            },
            Err(e) => {
                error!("❌ Error loading team: {}", e);
                println!("Error loading team.");
                return Ok(());
            }
        };

        let assessments = match assessments {
            Ok(assessments) => assessments,
            Err(e) => {
                error!("❌ Error loading assessments: {}", e);
                Vec::new()
            }
        };

        let models = match models {
            Ok(models) => models,
            Err(e) => {
                error!("❌ Error loading models: {}", e);
                Vec::new()
            }
        };

        println!("\n--- {} ---", team.name);
        println!("Led by: {}", team.owner.display_name());
        println!("Members ({}):", team.members.len());
        for member in &team.members {
            let badge = if member.id == team.owner.id {
                " [Owner]"
            } else {
                ""
            };
            println!("  - {} <{}>{}", member.display_name(), member.email, badge);
        }

        if assessments.is_empty() {
            println!("No assessments yet.");
        } else {
            println!("Assessments:");
            for (index, assessment) in assessments.iter().enumerate() {
                println!(
                    "  {}) {} ({})",
                    index + 1,
                    assessment.maturity_model.name,
                    assessment.date.format("%Y-%m-%d")
                );
            }
        }

        // Owners and team leaders manage member roles; the backend checks too
        let can_edit_roles = team.is_owned_by(&user.id) || user.is_leader();

        println!("  i) Invite member");
        if can_edit_roles {
            println!("  r) Update a member's roles");
        }
        println!("  s) Start new assessment");
        println!("  b) Back");

        let choice = prompt("Choice")?;
        match choice.as_str() {
            "i" => invite_member_prompt(client, &token, team_id).await?,
            "r" if can_edit_roles => update_roles_prompt(client, &token, &team).await?,
            "s" => start_assessment_prompt(client, &token, team_id, &models).await?,
            "b" => return Ok(()),
            other => match other.parse::<usize>() {
                Ok(index) if index >= 1 && index <= assessments.len() => {
                    assessment_screens::assessment_view(
                        client,
                        session,
                        &assessments[index - 1].id,
                    )
                    .await?;
                }
                _ => println!("Unknown option."),
            },
        }
    }
}

async fn invite_member_prompt(
    client: &ApiClient,
    token: &str,
    team_id: &str,
) -> Result<(), ClientError> {
    let email = prompt("Email address")?;

    if let Err(e) = validation::require_email(&email) {
        println!("{}", e.user_message());
        return Ok(());
    }

    match team_service::invite_member(client, token, team_id, &email).await {
        Ok(response) => println!("{}", response.message),
        Err(e) => {
            error!("❌ Error sending invitation: {}", e);
            println!("{}", e.user_message());
        }
    }

    Ok(())
}

async fn update_roles_prompt(
    client: &ApiClient,
    token: &str,
    team: &Team,
) -> Result<(), ClientError> {
    for (index, member) in team.members.iter().enumerate() {
        println!("  {}) {} <{}>", index + 1, member.display_name(), member.email);
    }

    let choice = prompt("Member")?;
    let member = match choice.parse::<usize>() {
        Ok(index) if index >= 1 && index <= team.members.len() => &team.members[index - 1],
        _ => {
            println!("Unknown member.");
            return Ok(());
        }
    };

    let input = prompt("Roles (comma-separated: user, leader, pmo)")?;
    let mut roles = Vec::new();
    for part in input.split(',') {
        match Role::parse(part) {
            Some(role) => roles.push(role),
            None => {
                println!("Unknown role: {}", part.trim());
                return Ok(());
            }
        }
    }

    match team_service::update_member_roles(client, token, &team.id, &member.id, &roles).await {
        Ok(response) => println!("{}", response.message),
        Err(e) => {
            error!("❌ Error updating roles: {}", e);
            println!("{}", e.user_message());
        }
    }

    Ok(())
}

async fn start_assessment_prompt(
    client: &ApiClient,
    token: &str,
    team_id: &str,
    models: &[MaturityModel],
) -> Result<(), ClientError> {
    if models.is_empty() {
        println!("No maturity models available.");
        return Ok(());
    }

    println!("Maturity model:");
    for (index, model) in models.iter().enumerate() {
        println!(
            "  {}) {} ({} questions)",
            index + 1,
            model.name,
            model.questions.len()
        );
    }

    let choice = prompt("Model")?;
    let model = match choice.parse::<usize>() {
        Ok(index) if index >= 1 && index <= models.len() => &models[index - 1],
        _ => {
            println!("Unknown model.");
            return Ok(());
        }
    };

    let model_id = match &model.id {
        Some(id) => id,
        None => {
            println!("That model has not been saved yet.");
            return Ok(());
        }
    };

    match assessment_service::start_assessment(client, token, team_id, model_id).await {
        Ok(_) => println!("Assessment started successfully!"),
        Err(e) => {
            error!("❌ Error starting assessment: {}", e);
            println!("{}", e.user_message());
        }
    }

    Ok(())
}
