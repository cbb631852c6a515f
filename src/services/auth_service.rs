use log::info;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::{AuthenticatedUser, ClientError, Role};
use crate::services::{ApiClient, MessageResponse};

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SignupRequest<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    password: &'a str,
    roles: Vec<Role>,
    // Invitation token from a sign-up link, when registering by invite
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<&'a str>,
}

#[derive(Serialize, Debug)]
struct SigninRequest<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
}

#[derive(Serialize, Debug)]
struct VerifyRequest<'a> {
    email: &'a str,
    code: &'a str,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TwoFactorSetup {
    pub secret: String,
    pub otp_auth_url: String,
}

#[derive(Serialize, Debug)]
struct EnableTwoFactorRequest<'a> {
    secret: &'a str,
    code: &'a str,
}

// Create a new account; the invitation token, when present, binds the
// registration to the inviting team server-side
pub async fn register(
    client: &ApiClient,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    role: Role,
    token: Option<&str>,
) -> Result<MessageResponse, ClientError> {
    info!("📝 Sign-up request for email: {}", email);

    client
        .post_json(
            "auth/signup",
            &SignupRequest {
                first_name,
                last_name,
                email,
                password,
                roles: vec![role],
                token,
            },
            None,
        )
        .await
}

// Sign in; the code is only sent on the second attempt of the 2FA flow
pub async fn login(
    client: &ApiClient,
    email: &str,
    password: &str,
    code: Option<&str>,
) -> Result<AuthenticatedUser, ClientError> {
    info!("🔑 Sign-in request for email: {}", email);

    client
        .post_json(
            "auth/signin",
            &SigninRequest {
                email,
                password,
                code,
            },
            None,
        )
        .await
}

// Confirm the account with the emailed 6-digit code
pub async fn verify(
    client: &ApiClient,
    email: &str,
    code: &str,
) -> Result<MessageResponse, ClientError> {
    info!("📧 Verification request for email: {}", email);

    client
        .post_json("auth/verify", &VerifyRequest { email, code }, None)
        .await
}

// Ask the backend for a fresh 2FA secret and otpauth URL
pub async fn generate_two_factor(
    client: &ApiClient,
    token: &str,
) -> Result<TwoFactorSetup, ClientError> {
    info!("🔐 Generating two-factor secret");

    client
        .post_json("auth/2fa/generate", &json!({}), Some(token))
        .await
}

// Turn 2FA on once the user proves they hold the secret
pub async fn enable_two_factor(
    client: &ApiClient,
    token: &str,
    secret: &str,
    code: &str,
) -> Result<MessageResponse, ClientError> {
    info!("🔐 Enabling two-factor authentication");

    client
        .post_json(
            "auth/2fa/enable",
            &EnableTwoFactorRequest { secret, code },
            Some(token),
        )
        .await
}

pub async fn disable_two_factor(
    client: &ApiClient,
    token: &str,
) -> Result<MessageResponse, ClientError> {
    info!("🔐 Disabling two-factor authentication");

    client.post_json("auth/2fa/disable", &json!({}), Some(token)).await
}
