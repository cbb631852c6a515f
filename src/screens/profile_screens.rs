use log::error;

use crate::models::ClientError;
use crate::screens::{confirm, prompt};
use crate::services::{auth_service, ApiClient};
use crate::utils::session::Session;

// Profile screen: user details plus the two-factor toggle flows
pub async fn profile_screen(
    client: &ApiClient,
    session: &mut Session,
) -> Result<(), ClientError> {
    let user = match session.current_user() {
        Some(user) => user.clone(),
        None => {
            println!("Please log in.");
            return Ok(());
        }
    };

    println!("\n--- Profile ---");
    println!("First name: {}", user.first_name);
    println!("Last name:  {}", user.last_name);
    println!("Email:      {}", user.email);
    println!("Roles:      {}", user.roles.join(", "));
    println!(
        "Two-Factor Authentication: {}",
        if user.using_two_factor { "Enabled" } else { "Disabled" }
    );

    if user.using_two_factor {
        if confirm("Disable 2FA?")? {
            disable_two_factor(client, session, &user.access_token).await;
        }
    } else if confirm("Enable 2FA?")? {
        enable_two_factor(client, session, &user.access_token).await;
    }

    Ok(())
}

// Enable flow: generate a secret, let the user register it in their
// authenticator app, then prove it with one code
async fn enable_two_factor(client: &ApiClient, session: &mut Session, token: &str) {
    let setup = match auth_service::generate_two_factor(client, token).await {
        Ok(setup) => setup,
        Err(e) => {
            error!("❌ Failed to generate 2FA secret: {}", e);
            println!("{}", e.user_message());
            return;
        }
    };

    println!("Add this account to your authenticator app (Google Authenticator, Authy, etc.):");
    println!("  Secret: {}", setup.secret);
    println!("  URL:    {}", setup.otp_auth_url);

    let code = match prompt("Enter the code from your app") {
        Ok(code) => code,
        Err(e) => {
            println!("{}", e.user_message());
            return;
        }
    };

    match auth_service::enable_two_factor(client, token, &setup.secret, &code).await {
        Ok(_) => {
            if let Err(e) = session.set_two_factor(true) {
                error!("❌ Failed to persist 2FA flag: {}", e);
            }
            println!("2FA Enabled successfully!");
        }
        Err(e) => {
            error!("❌ Failed to enable 2FA: {}", e);
            println!("Invalid code. Please try again.");
        }
    }
}

async fn disable_two_factor(client: &ApiClient, session: &mut Session, token: &str) {
    match auth_service::disable_two_factor(client, token).await {
        Ok(_) => {
            if let Err(e) = session.set_two_factor(false) {
                error!("❌ Failed to persist 2FA flag: {}", e);
            }
            println!("2FA Disabled.");
        }
        Err(e) => {
            error!("❌ Failed to disable 2FA: {}", e);
            println!("{}", e.user_message());
        }
    }
}
