use jobboard::{
    client::{api::AuthApi, error::ClientError},
    model::user::{LoginRequest, ProfilePatch, RegisterRequest, Role},
};
use jobboard_test_utils::prelude::*;
use mockito::Matcher;

use crate::util::{client, client_for, unreachable_api_url};

fn credentials() -> LoginRequest {
    LoginRequest {
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

mod login {
    use super::*;

    #[tokio::test]
    /// Expect a successful login to return the identity and bearer token
    async fn returns_identity_and_token() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_login_endpoint("admin", 1)
            .build()
            .await?;

        let response = client(&test).login(&credentials()).await.unwrap();

        assert_eq!(response.token, TEST_TOKEN);
        assert_eq!(response.user.id, TEST_USER_ID);
        assert_eq!(response.user.role, Role::Admin);
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect a 401 from login to surface as invalid credentials
    async fn rejected_credentials() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_error_endpoint("POST", "/auth/login", 401, "Invalid credentials", 1)
            .build()
            .await?;

        let result = client(&test).login(&credentials()).await;

        assert_eq!(result, Err(ClientError::InvalidCredentials));
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect a response without a token to be rejected
    async fn empty_token_is_unexpected() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                let body = serde_json::json!({ "user": user::identity("applicant"), "token": "" });

                server
                    .mock("POST", TestContext::path("/auth/login").as_str())
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(body.to_string())
                    .create()
            })
            .build()
            .await?;

        let result = client(&test).login(&credentials()).await;

        assert!(matches!(
            result,
            Err(ClientError::UnexpectedResponse { status: 200, .. })
        ));

        Ok(())
    }

    #[tokio::test]
    /// Expect an unreachable API to produce a network error
    async fn unreachable_api() {
        let result = client_for(&unreachable_api_url())
            .login(&credentials())
            .await;

        assert!(matches!(result, Err(ClientError::Network(_))));
    }
}

mod register {
    use super::*;

    fn fields() -> RegisterRequest {
        RegisterRequest {
            full_name: "Test User".to_string(),
            email: TEST_EMAIL.to_string(),
            password: TEST_PASSWORD.to_string(),
            role: Role::Applicant,
        }
    }

    #[tokio::test]
    /// Expect the created identity to be returned from the user envelope
    async fn returns_created_identity() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("POST", TestContext::path("/auth/register").as_str())
                    .match_body(Matcher::PartialJson(serde_json::json!({
                        "fullName": "Test User",
                        "role": "applicant"
                    })))
                    .with_status(201)
                    .with_header("content-type", "application/json")
                    .with_body(user::user_envelope(user::identity("applicant")).to_string())
                    .create()
            })
            .build()
            .await?;

        let identity = client(&test).register(&fields()).await.unwrap();

        assert_eq!(identity.email, TEST_EMAIL);
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect a 409 to report the existing account with the API's message
    async fn existing_account() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_error_endpoint("POST", "/auth/register", 409, "Email already registered", 1)
            .build()
            .await?;

        let result = client(&test).register(&fields()).await;

        assert_eq!(
            result,
            Err(ClientError::AlreadyExists(
                "Email already registered".to_string()
            ))
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect a plain-text 400 body to become the validation message
    async fn validation_message_from_text_body() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("POST", TestContext::path("/auth/register").as_str())
                    .with_status(400)
                    .with_body("Password too weak")
                    .create()
            })
            .build()
            .await?;

        let result = client(&test).register(&fields()).await;

        assert_eq!(
            result,
            Err(ClientError::Validation("Password too weak".to_string()))
        );

        Ok(())
    }
}

mod validate_token {
    use super::*;

    #[tokio::test]
    /// Expect the bearer token to resolve to its identity
    async fn resolves_identity() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_validate_endpoint("super_admin", 1)
            .build()
            .await?;

        let identity = client(&test).validate_token(TEST_TOKEN).await.unwrap();

        assert_eq!(identity.role, Role::SuperAdmin);
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect an expired token to be reported as unauthorized
    async fn expired_token() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_error_endpoint("GET", "/auth/validate", 401, "Token expired", 1)
            .build()
            .await?;

        let result = client(&test).validate_token("expired").await;

        assert_eq!(result, Err(ClientError::Unauthorized));

        Ok(())
    }
}

mod update_profile {
    use super::*;

    #[tokio::test]
    /// Expect a PUT to the user's resource with the bearer token and patch body
    async fn sends_patch_with_bearer() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                let mut updated = user::identity("applicant");
                updated["bio"] = "Compiler enthusiast".into();

                server
                    .mock(
                        "PUT",
                        TestContext::path(&format!("/users/{}", TEST_USER_ID)).as_str(),
                    )
                    .match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
                    .match_body(Matcher::PartialJson(serde_json::json!({
                        "bio": "Compiler enthusiast",
                        "skills": ["rust"]
                    })))
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(user::user_envelope(updated).to_string())
                    .create()
            })
            .build()
            .await?;

        let patch = ProfilePatch {
            full_name: "Test User".to_string(),
            email: TEST_EMAIL.to_string(),
            bio: Some("Compiler enthusiast".to_string()),
            skills: vec!["rust".to_string()],
            ..Default::default()
        };

        let identity = client(&test)
            .update_profile(TEST_TOKEN, TEST_USER_ID, &patch)
            .await
            .unwrap();

        assert_eq!(identity.bio.as_deref(), Some("Compiler enthusiast"));
        test.assert_mocks();

        Ok(())
    }
}
