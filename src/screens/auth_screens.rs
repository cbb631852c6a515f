use log::error;

use crate::models::{ClientError, Role};
use crate::screens::{prompt, prompt_with_default};
use crate::services::{auth_service, ApiClient};
use crate::utils::session::Session;
use crate::utils::validation;

// The parts of an invitation link the sign-up form cares about
#[derive(Debug, Default, PartialEq)]
pub struct RegistrationInvite {
    pub email: Option<String>,
    pub role: Option<Role>,
    pub token: Option<String>,
    pub team_id: Option<String>,
}

impl RegistrationInvite {
    // Pull email/role/token/teamId out of an invitation link's query string
    pub fn parse(link: &str) -> Self {
        let mut invite = RegistrationInvite::default();

        let query = match link.split_once('?') {
            Some((_, query)) => query,
            None => link,
        };

        for pair in query.split('&') {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key, value),
                None => continue,
            };

            match key {
                "email" => invite.email = Some(value.replace("%40", "@")),
                "role" => invite.role = Role::parse(value),
                "token" => invite.token = Some(value.to_string()),
                "teamId" => invite.team_id = Some(value.to_string()),
                _ => {}
            }
        }

        invite
    }
}

// Sign-in screen; switches into 2FA entry when the backend demands a
// second factor instead of treating the 403 as a failure
pub async fn login_screen(
    client: &ApiClient,
    session: &mut Session,
) -> Result<(), ClientError> {
    println!("\n--- Sign in ---");

    let email = prompt("Email")?;
    let password = prompt("Password")?;

    match auth_service::login(client, &email, &password, None).await {
        Ok(user) => {
            session.sign_in(user)?;
            if let Some(user) = session.current_user() {
                println!("Signed in as {}.", user.full_name());
            }
        }
        Err(ClientError::TwoFactorRequired) => {
            println!("{}", ClientError::TwoFactorRequired.user_message());
            let code = prompt("2FA Code")?;

            match auth_service::login(client, &email, &password, Some(&code)).await {
                Ok(user) => {
                    session.sign_in(user)?;
                    if let Some(user) = session.current_user() {
                        println!("Signed in as {}.", user.full_name());
                    }
                }
                Err(e) => {
                    error!("❌ Two-factor sign-in failed: {}", e);
                    println!("{}", e.user_message());
                }
            }
        }
        Err(e) => {
            error!("❌ Sign-in failed: {}", e);
            println!("{}", e.user_message());
        }
    }

    Ok(())
}

// Sign-up screen; an invitation link pre-fills the email and locks the role
pub async fn register_screen(client: &ApiClient) -> Result<(), ClientError> {
    println!("\n--- Create an account ---");

    let link = prompt("Invitation link (press Enter if you have none)")?;
    let invite = if link.is_empty() {
        RegistrationInvite::default()
    } else {
        RegistrationInvite::parse(&link)
    };

    let first_name = prompt("First name")?;
    let last_name = prompt("Last name")?;

    let email = match &invite.email {
        Some(invited_email) => prompt_with_default("Email", invited_email)?,
        None => prompt("Email")?,
    };

    if let Err(e) = validation::require_field(&first_name, "First name")
        .and_then(|_| validation::require_field(&last_name, "Last name"))
        .and_then(|_| validation::require_email(&email))
    {
        println!("{}", e.user_message());
        return Ok(());
    }

    let role = match invite.role {
        Some(role) => {
            println!("Role selection is locked by invitation link: {}", role.label());
            role
        }
        None => select_role()?,
    };

    let password = prompt("Password")?;
    let confirmation = prompt("Confirm password")?;

    // Rejected client-side, before any request goes out
    if let Err(e) = validation::require_matching_passwords(&password, &confirmation) {
        println!("{}", e.user_message());
        return Ok(());
    }

    let token = invite.token.as_deref().or(invite.team_id.as_deref());

    match auth_service::register(client, &first_name, &last_name, &email, &password, role, token)
        .await
    {
        Ok(response) => {
            println!("{}", response.message);
            verify_screen(client, Some(&email)).await?;
        }
        Err(e) => {
            error!("❌ Sign-up failed: {}", e);
            println!("{}", e.user_message());
        }
    }

    Ok(())
}

// Account verification with the emailed 6-digit code
pub async fn verify_screen(
    client: &ApiClient,
    email_hint: Option<&str>,
) -> Result<(), ClientError> {
    println!("\n--- Account verification ---");
    println!("Please enter the 6-digit code sent to your email.");

    let email = match email_hint {
        Some(hint) => prompt_with_default("Email", hint)?,
        None => prompt("Email")?,
    };
    let code = prompt("Verification code")?;

    match auth_service::verify(client, &email, &code).await {
        Ok(response) => println!("{} You can now sign in.", response.message),
        Err(e) => {
            error!("❌ Verification failed: {}", e);
            println!("{}", e.user_message());
        }
    }

    Ok(())
}

fn select_role() -> Result<Role, ClientError> {
    println!("Profile role:");
    println!("  1) {}", Role::User.label());
    println!("  2) {}", Role::Leader.label());
    println!("  3) {}", Role::Pmo.label());

    loop {
        let choice = prompt("Role")?;
        match choice.as_str() {
            "1" => return Ok(Role::User),
            "2" => return Ok(Role::Leader),
            "3" => return Ok(Role::Pmo),
            _ => println!("Please choose 1, 2 or 3."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_link_parsing() {
        let invite = RegistrationInvite::parse(
            "https://maturity.example.com/register?email=alex%40example.com&role=leader&token=invite-123",
        );

        assert_eq!(invite.email.as_deref(), Some("alex@example.com"));
        assert_eq!(invite.role, Some(Role::Leader));
        assert_eq!(invite.token.as_deref(), Some("invite-123"));
        assert_eq!(invite.team_id, None);
    }

    #[test]
    fn test_invite_link_with_team_scope() {
        let invite = RegistrationInvite::parse("?teamId=team-9&role=user");

        assert_eq!(invite.team_id.as_deref(), Some("team-9"));
        assert_eq!(invite.role, Some(Role::User));
        assert_eq!(invite.token, None);
    }

    #[test]
    fn test_invite_link_ignores_unknown_params() {
        let invite = RegistrationInvite::parse("?utm_source=mail&role=bogus");
        assert_eq!(invite, RegistrationInvite::default());
    }
}
