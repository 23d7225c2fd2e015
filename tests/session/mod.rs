use jobboard::{
    client::{
        error::ClientError,
        guard::{authorize_path, GuardDecision},
        storage::{MemoryTokenStorage, TokenStorage},
        store::SessionStore,
    },
    model::user::{LoginRequest, ProfilePatch, Role},
};
use jobboard_test_utils::prelude::*;

use crate::util::{client, client_for, unreachable_api_url};

fn credentials() -> LoginRequest {
    LoginRequest {
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

fn patch() -> ProfilePatch {
    ProfilePatch {
        full_name: "Renamed User".to_string(),
        email: TEST_EMAIL.to_string(),
        skills: vec!["rust".to_string()],
        ..Default::default()
    }
}

mod login {
    use super::*;

    #[tokio::test]
    /// Expect a session from login to be restored by a fresh store sharing the storage
    async fn persists_across_restart() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_login_endpoint("admin", 1)
            .with_validate_endpoint("admin", 1)
            .build()
            .await?;
        let storage = MemoryTokenStorage::default();

        let store = SessionStore::new(client(&test), storage.clone());
        store.login(&credentials()).await.unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some(TEST_TOKEN));
        store.teardown();

        let restarted = SessionStore::new(client(&test), storage.clone());
        let session = restarted.init().await;

        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Admin));
        assert_eq!(session.token(), Some(TEST_TOKEN));
        assert_eq!(
            authorize_path(&session, "/admin/jobs/new"),
            GuardDecision::Allow
        );
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect rejected credentials to leave the session and storage untouched
    async fn rejected_credentials_leave_state_unchanged() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_error_endpoint("POST", "/auth/login", 401, "Invalid credentials", 1)
            .build()
            .await?;
        let storage = MemoryTokenStorage::default();
        let store = SessionStore::new(client(&test), storage.clone());

        let result = store.login(&credentials()).await;

        assert_eq!(result, Err(ClientError::InvalidCredentials));
        assert!(!store.session().is_authenticated());
        assert_eq!(storage.load().unwrap(), None);

        Ok(())
    }

    #[tokio::test]
    /// Expect logout to clear the session, the persisted token and route access
    async fn logout_clears_everything() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_login_endpoint("applicant", 1)
            .build()
            .await?;
        let storage = MemoryTokenStorage::default();
        let store = SessionStore::new(client(&test), storage.clone());

        store.login(&credentials()).await.unwrap();
        assert_eq!(
            authorize_path(&store.session(), "/applicant"),
            GuardDecision::Allow
        );

        store.logout();

        assert_eq!(storage.load().unwrap(), None);
        assert_eq!(
            authorize_path(&store.session(), "/applicant"),
            GuardDecision::RedirectToLogin
        );

        Ok(())
    }
}

mod init {
    use super::*;

    #[tokio::test]
    /// Expect an expired persisted token to be discarded
    async fn expired_token_is_cleared() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_error_endpoint("GET", "/auth/validate", 401, "Token expired", 1)
            .build()
            .await?;
        let storage = MemoryTokenStorage::with_token(TEST_TOKEN);
        let store = SessionStore::new(client(&test), storage.clone());

        let session = store.init().await;

        assert!(!session.is_authenticated());
        assert_eq!(storage.load().unwrap(), None);
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect an unreachable API to start logged out while keeping the token for next time
    async fn unreachable_api_keeps_token() {
        let storage = MemoryTokenStorage::with_token(TEST_TOKEN);
        let store = SessionStore::new(client_for(&unreachable_api_url()), storage.clone());

        let session = store.init().await;

        assert!(!session.is_authenticated());
        assert_eq!(storage.load().unwrap().as_deref(), Some(TEST_TOKEN));
    }
}

mod update_profile {
    use super::*;

    async fn logged_in_store(
        test: &TestContext,
    ) -> (SessionStore<jobboard::client::api::ApiClient, MemoryTokenStorage>, MemoryTokenStorage)
    {
        let storage = MemoryTokenStorage::default();
        let store = SessionStore::new(client(test), storage.clone());
        store.login(&credentials()).await.unwrap();
        (store, storage)
    }

    #[tokio::test]
    /// Expect the updated identity to replace the session's identity
    async fn replaces_identity() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_login_endpoint("applicant", 1)
            .with_mock_endpoint(|server| {
                let mut updated = user::identity("applicant");
                updated["fullName"] = "Renamed User".into();

                server
                    .mock(
                        "PUT",
                        TestContext::path(&format!("/users/{}", TEST_USER_ID)).as_str(),
                    )
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(user::user_envelope(updated).to_string())
                    .create()
            })
            .build()
            .await?;
        let (store, _) = logged_in_store(&test).await;

        let identity = store.update_profile(&patch()).await.unwrap();

        assert_eq!(identity.full_name, "Renamed User");
        assert_eq!(
            store.session().identity().map(|i| i.full_name.as_str()),
            Some("Renamed User")
        );
        assert_eq!(store.session().token(), Some(TEST_TOKEN));
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect a rejected token to log the user out
    async fn unauthorized_logs_out() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_login_endpoint("applicant", 1)
            .with_error_endpoint(
                "PUT",
                &format!("/users/{}", TEST_USER_ID),
                401,
                "Token expired",
                1,
            )
            .build()
            .await?;
        let (store, storage) = logged_in_store(&test).await;

        let result = store.update_profile(&patch()).await;

        assert_eq!(result, Err(ClientError::Unauthorized));
        assert!(!store.session().is_authenticated());
        assert_eq!(storage.load().unwrap(), None);

        Ok(())
    }

    #[tokio::test]
    /// Expect a forbidden update to keep the session as it was
    async fn forbidden_keeps_session() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_login_endpoint("applicant", 1)
            .with_error_endpoint(
                "PUT",
                &format!("/users/{}", TEST_USER_ID),
                403,
                "Not your profile",
                1,
            )
            .build()
            .await?;
        let (store, _) = logged_in_store(&test).await;
        let before = store.session();

        let result = store.update_profile(&patch()).await;

        assert_eq!(result, Err(ClientError::Forbidden));
        assert_eq!(store.session(), before);

        Ok(())
    }
}
