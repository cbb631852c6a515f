#[cfg(test)]
mod tests {
    use crate::models::AuthenticatedUser;
    use crate::utils::session::{self, Session};
    use uuid::Uuid;

    // Unique throwaway path so parallel tests never share a session file
    fn temp_session_path() -> String {
        std::env::temp_dir()
            .join(format!("maturity-session-{}.json", Uuid::new_v4()))
            .to_string_lossy()
            .to_string()
    }

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser {
            id: "u1".to_string(),
            first_name: "Alex".to_string(),
            last_name: "Martin".to_string(),
            email: "alex@example.com".to_string(),
            roles: vec!["ROLE_USER".to_string()],
            using_two_factor: false,
            access_token: "token-abc".to_string(),
        }
    }

    #[test]
    fn test_session_starts_empty() {
        let path = temp_session_path();
        let session = Session::load(path);

        assert!(!session.is_signed_in());
        assert!(session.bearer_token().is_none());
    }

    #[test]
    fn test_sign_in_persists_across_loads() {
        let path = temp_session_path();

        let mut session = Session::load(path.clone());
        session.sign_in(test_user()).unwrap();
        assert_eq!(session.bearer_token(), Some("token-abc"));

        // A fresh load (a new run of the client) restores the record
        let restored = Session::load(path.clone());
        let user = restored.current_user().unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.email, "alex@example.com");

        session::clear_record(&path).unwrap();
    }

    #[test]
    fn test_two_factor_toggle_is_persisted() {
        let path = temp_session_path();

        let mut session = Session::load(path.clone());
        session.sign_in(test_user()).unwrap();
        session.set_two_factor(true).unwrap();

        let restored = Session::load(path.clone());
        assert!(restored.current_user().unwrap().using_two_factor);

        session::clear_record(&path).unwrap();
    }

    #[test]
    fn test_sign_out_clears_the_record() {
        let path = temp_session_path();

        let mut session = Session::load(path.clone());
        session.sign_in(test_user()).unwrap();
        session.sign_out().unwrap();

        assert!(!session.is_signed_in());
        assert!(Session::load(path).current_user().is_none());
    }

    #[test]
    fn test_corrupt_record_is_treated_as_signed_out() {
        let path = temp_session_path();
        std::fs::write(&path, "not json").unwrap();

        let session = Session::load(path.clone());
        assert!(!session.is_signed_in());

        session::clear_record(&path).unwrap();
    }
}
