// src/utils/mod.rs
use lazy_static::lazy_static;
use log::{error, info};
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::models::{AuthenticatedUser, ClientError};

// Session persistence: the signed-in user record survives restarts
pub mod session {
    use super::*;

    // Load the persisted session record, if any
    pub fn load_record(path: &str) -> Result<Option<AuthenticatedUser>, ClientError> {
        let session_path = Path::new(path);

        if !session_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(session_path).map_err(|e| {
            error!("❌ Failed to read session file: {:?}", e);
            ClientError::Io("Failed to read the session file".to_string())
        })?;

        let user: AuthenticatedUser = serde_json::from_str(&content).map_err(|e| {
            error!("❌ Failed to parse session file: {:?}", e);
            ClientError::Io("Failed to parse the session file".to_string())
        })?;

        Ok(Some(user))
    }

    // Save the session record, creating the storage directory if needed
    pub fn save_record(path: &str, user: &AuthenticatedUser) -> Result<(), ClientError> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    error!("❌ Failed to create session directory: {:?}", e);
                    ClientError::Io("Failed to create the session directory".to_string())
                })?;
            }
        }

        let content = serde_json::to_string_pretty(user).map_err(|e| {
            error!("❌ Failed to serialize session record: {:?}", e);
            ClientError::Io("Failed to serialize the session record".to_string())
        })?;

        fs::write(path, content).map_err(|e| {
            error!("❌ Failed to write session file: {:?}", e);
            ClientError::Io("Failed to write the session file".to_string())
        })?;

        info!("✅ Saved session for user: {}", user.id);
        Ok(())
    }

    pub fn clear_record(path: &str) -> Result<(), ClientError> {
        let session_path = Path::new(path);

        if session_path.exists() {
            fs::remove_file(session_path).map_err(|e| {
                error!("❌ Failed to delete session file: {:?}", e);
                ClientError::Io("Failed to delete the session file".to_string())
            })?;
            info!("✅ Cleared session");
        }

        Ok(())
    }

    // The one piece of process-wide state. Loaded at startup, populated on
    // login, cleared on logout, updated on 2FA toggles; passed explicitly
    // to every screen that needs it.
    #[derive(Debug)]
    pub struct Session {
        path: String,
        current_user: Option<AuthenticatedUser>,
    }

    impl Session {
        pub fn load(path: impl Into<String>) -> Self {
            let path = path.into();
            let current_user = match load_record(&path) {
                Ok(user) => user,
                Err(e) => {
                    error!("❌ Could not restore session: {}", e);
                    None
                }
            };

            Session { path, current_user }
        }

        pub fn current_user(&self) -> Option<&AuthenticatedUser> {
            self.current_user.as_ref()
        }

        pub fn bearer_token(&self) -> Option<&str> {
            self.current_user.as_ref().map(|user| user.access_token.as_str())
        }

        pub fn is_signed_in(&self) -> bool {
            self.current_user.is_some()
        }

        pub fn sign_in(&mut self, user: AuthenticatedUser) -> Result<(), ClientError> {
            save_record(&self.path, &user)?;
            self.current_user = Some(user);
            Ok(())
        }

        pub fn sign_out(&mut self) -> Result<(), ClientError> {
            clear_record(&self.path)?;
            self.current_user = None;
            Ok(())
        }

        // Keep the persisted record in step with the 2FA toggle
        pub fn set_two_factor(&mut self, enabled: bool) -> Result<(), ClientError> {
            if let Some(user) = self.current_user.as_mut() {
                user.using_two_factor = enabled;
                save_record(&self.path, user)?;
            }
            Ok(())
        }
    }
}

// Form validation run before any network call
pub mod validation {
    use super::*;

    lazy_static! {
        static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }

    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    pub fn require_email(email: &str) -> Result<(), ClientError> {
        if !is_valid_email(email.trim()) {
            return Err(ClientError::Validation(
                "Please enter a valid email address.".to_string(),
            ));
        }
        Ok(())
    }

    pub fn require_matching_passwords(
        password: &str,
        confirmation: &str,
    ) -> Result<(), ClientError> {
        if password != confirmation {
            return Err(ClientError::Validation(
                "Passwords do not match!".to_string(),
            ));
        }
        Ok(())
    }

    pub fn require_field(value: &str, label: &str) -> Result<(), ClientError> {
        if value.trim().is_empty() {
            return Err(ClientError::Validation(format!("{} is required.", label)));
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_password_mismatch_message() {
            let error = require_matching_passwords("secret-1", "secret-2").unwrap_err();
            assert_eq!(error.user_message(), "Passwords do not match!");
        }

        #[test]
        fn test_matching_passwords_pass() {
            assert!(require_matching_passwords("secret-1", "secret-1").is_ok());
        }

        #[test]
        fn test_email_shapes() {
            assert!(is_valid_email("alex@example.com"));
            assert!(!is_valid_email("alex@example"));
            assert!(!is_valid_email("not-an-email"));
            assert!(!is_valid_email(""));
        }

        #[test]
        fn test_required_field_message_names_the_field() {
            let error = require_field("  ", "Team name").unwrap_err();
            assert_eq!(error.user_message(), "Team name is required.");
        }
    }
}
