use derive_more::Display;
use serde::{Deserialize, Serialize};

// Profile role chosen at registration; the backend grants the matching
// ROLE_* authority on sign-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[display(fmt = "user")]
    User,
    #[display(fmt = "leader")]
    Leader,
    #[display(fmt = "pmo")]
    Pmo,
}

impl Role {
    pub fn authority(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Leader => "ROLE_LEADER",
            Role::Pmo => "ROLE_PMO",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "Team Member",
            Role::Leader => "Team Leader",
            Role::Pmo => "PMO (Model Owner)",
        }
    }

    // Parse the lowercase form used in sign-up bodies and invitation links
    pub fn parse(value: &str) -> Option<Role> {
        match value.trim().to_lowercase().as_str() {
            "user" => Some(Role::User),
            "leader" => Some(Role::Leader),
            "pmo" => Some(Role::Pmo),
            _ => None,
        }
    }
}

// Minimal user info embedded in teams and submissions
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
}

impl UserSummary {
    // Prefer the full name, fall back to the email local part
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            _ => self
                .email
                .split('@')
                .next()
                .unwrap_or(&self.email)
                .to_string(),
        }
    }
}

// The session record returned by sign-in and persisted between runs
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(rename = "using2FA", default)]
    pub using_two_factor: bool,
    pub access_token: String,
}

impl AuthenticatedUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_authority(&self, authority: &str) -> bool {
        self.roles.iter().any(|role| role == authority)
    }

    // PMO users manage the maturity model catalogue
    pub fn is_pmo(&self) -> bool {
        self.has_authority(Role::Pmo.authority())
    }

    pub fn is_leader(&self) -> bool {
        self.has_authority(Role::Leader.authority())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_and_authority() {
        assert_eq!(Role::parse("pmo"), Some(Role::Pmo));
        assert_eq!(Role::parse("Leader"), Some(Role::Leader));
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::Pmo.authority(), "ROLE_PMO");
        assert_eq!(Role::User.to_string(), "user");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let member = UserSummary {
            id: "u1".to_string(),
            first_name: None,
            last_name: None,
            email: "alex@example.com".to_string(),
        };
        assert_eq!(member.display_name(), "alex");
    }

    #[test]
    fn test_session_record_roles() {
        let user: AuthenticatedUser = serde_json::from_str(
            r#"{
                "id": "u1",
                "firstName": "Alex",
                "lastName": "Martin",
                "email": "alex@example.com",
                "roles": ["ROLE_USER", "ROLE_PMO"],
                "using2FA": true,
                "accessToken": "token-abc"
            }"#,
        )
        .unwrap();

        assert!(user.is_pmo());
        assert!(!user.is_leader());
        assert!(user.using_two_factor);
        assert_eq!(user.full_name(), "Alex Martin");
    }
}
