//Third-party-dependencies
use dotenv::dotenv;
use log::info;

// Module imports:
use maturity_client::config::Config;
use maturity_client::models::ClientError;
use maturity_client::screens::{
    self, auth_screens, model_screens, profile_screens, team_screens,
};
use maturity_client::services::ApiClient;
use maturity_client::utils::session::Session;

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    info!("Using API at {}", config.api_base_url);

    let client = ApiClient::new(config.api_base_url.clone());
    let mut session = Session::load(config.session_file.clone());

    println!("Maturity Assessment");

    loop {
        let current_user = session.current_user().cloned();

        match current_user {
            Some(user) => {
                println!("\nSigned in as {}", user.full_name());
                println!("  1) Teams");
                if user.is_pmo() {
                    println!("  2) Maturity models");
                }
                println!("  3) Profile");
                println!("  4) Log out");
                println!("  q) Quit");

                let choice = screens::prompt("Choice")?;
                match choice.as_str() {
                    "1" => team_screens::teams_dashboard(&client, &session).await?,
                    "2" if user.is_pmo() => {
                        model_screens::models_admin(&client, &session).await?
                    }
                    "3" => profile_screens::profile_screen(&client, &mut session).await?,
                    "4" => {
                        session.sign_out()?;
                        println!("Logged out.");
                    }
                    "q" => break,
                    _ => println!("Unknown option."),
                }
            }
            None => {
                println!("\n  1) Sign in");
                println!("  2) Register");
                println!("  3) Verify account");
                println!("  q) Quit");

                let choice = screens::prompt("Choice")?;
                match choice.as_str() {
                    "1" => auth_screens::login_screen(&client, &mut session).await?,
                    "2" => auth_screens::register_screen(&client).await?,
                    "3" => auth_screens::verify_screen(&client, None).await?,
                    "q" => break,
                    _ => println!("Unknown option."),
                }
            }
        }
    }

    Ok(())
}
