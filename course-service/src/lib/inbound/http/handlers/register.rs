use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::JsonBody;
use crate::domain::auth::errors::PasswordPolicyError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::Password;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::PersonName;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::PersonNameError;

pub async fn register(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<RegisterRequest>,
) -> Result<ApiSuccess<AccessTokenResponseData>, ApiError> {
    state
        .auth_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::CREATED, token.into()))
}

/// HTTP request body for registering an account (raw JSON)
#[derive(Deserialize)]
pub struct RegisterRequest {
    fname: String,
    lname: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid fname: {0}")]
    FirstName(PersonNameError),

    #[error("Invalid lname: {0}")]
    LastName(PersonNameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordPolicyError),
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ParseRegisterRequestError> {
        let fname = PersonName::new(self.fname).map_err(ParseRegisterRequestError::FirstName)?;
        let lname = PersonName::new(self.lname).map_err(ParseRegisterRequestError::LastName)?;
        let email = EmailAddress::new(self.email)?;
        let password = Password::new(self.password)?;
        Ok(RegisterCommand::new(fname, lname, email, password))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

/// Response body carrying a freshly issued access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessTokenResponseData {
    pub access_token: String,
}

impl From<AccessToken> for AccessTokenResponseData {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.into_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(fname: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            fname: fname.to_string(),
            lname: "B".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_request_converts() {
        let command = request("A", " A@X.com", "secret1")
            .try_into_command()
            .expect("request should be valid");

        assert_eq!(command.fname.as_str(), "A");
        assert_eq!(command.email.as_str(), "a@x.com");
    }

    #[test]
    fn test_empty_password_is_rejected() {
        let result = request("A", "a@x.com", "").try_into_command();
        assert!(matches!(result, Err(ParseRegisterRequestError::Password(_))));
    }

    #[test]
    fn test_blank_first_name_is_rejected() {
        let result = request(" ", "a@x.com", "secret1").try_into_command();
        assert!(matches!(
            result,
            Err(ParseRegisterRequestError::FirstName(PersonNameError::Empty))
        ));
    }
}
