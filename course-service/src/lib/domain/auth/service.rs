use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;
use auth::JwtError;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::Profile;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// Authentication flow over the user directory.
///
/// Holds no per-request state; the authenticator carries the signing secret
/// loaded at startup.
pub struct AuthService<US>
where
    US: UserServicePort,
{
    user_service: Arc<US>,
    authenticator: Arc<Authenticator>,
    token_validity_hours: i64,
}

impl<US> AuthService<US>
where
    US: UserServicePort,
{
    /// Create a new auth service.
    ///
    /// # Arguments
    /// * `user_service` - User directory
    /// * `authenticator` - Password hashing and token signing
    /// * `token_validity_hours` - Lifetime of issued access tokens
    pub fn new(
        user_service: Arc<US>,
        authenticator: Arc<Authenticator>,
        token_validity_hours: i64,
    ) -> Self {
        Self {
            user_service,
            authenticator,
            token_validity_hours,
        }
    }

    fn claims_for(&self, user_id: &UserId) -> Claims {
        Claims::for_subject(user_id, self.token_validity_hours)
    }
}

#[async_trait]
impl<US> AuthServicePort for AuthService<US>
where
    US: UserServicePort,
{
    async fn register(&self, command: RegisterCommand) -> Result<AccessToken, AuthError> {
        let password_hash = self
            .authenticator
            .hash_password(command.password.expose())
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        let new_user = NewUser {
            fname: command.fname,
            lname: command.lname,
            email: command.email,
            password_hash,
        };

        let user = self
            .user_service
            .create_user(new_user)
            .await
            .map_err(|e| match e {
                UserError::EmailAlreadyExists(email) => {
                    tracing::info!("Registration rejected: email already registered");
                    AuthError::DuplicateEmail(email)
                }
                other => AuthError::User(other),
            })?;

        let token = self
            .authenticator
            .generate_token(&self.claims_for(&user.id))
            .map_err(|e| AuthError::Signing(e.to_string()))?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(AccessToken::new(token))
    }

    async fn login(&self, command: LoginCommand) -> Result<AccessToken, AuthError> {
        let user = self
            .user_service
            .get_user_by_email(&command.email)
            .await
            .map_err(AuthError::User)?;

        let (user_id, result) = match user {
            Some(user) => self
                .authenticator
                .authenticate(&command.password, &user.password_hash, &self.claims_for(&user.id))
                .map(|result| (user.id, result)),
            None => Err(self.authenticator.reject_unknown_account(&command.password)),
        }
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                tracing::warn!("Login rejected");
                AuthError::InvalidCredentials
            }
            AuthenticationError::PasswordError(err) => AuthError::Hashing(err.to_string()),
            AuthenticationError::JwtError(err) => AuthError::Signing(err.to_string()),
        })?;

        tracing::info!(user_id = %user_id, "User logged in");

        Ok(AccessToken::new(result.access_token))
    }

    fn authorize(&self, token: &str) -> Result<UserId, AuthError> {
        let claims: Claims = self
            .authenticator
            .validate_token(token)
            .map_err(|e| match e {
                JwtError::TokenExpired => AuthError::ExpiredToken,
                other => {
                    tracing::debug!(error = %other, "Token rejected");
                    AuthError::InvalidToken
                }
            })?;

        UserId::from_string(&claims.sub).map_err(|_| AuthError::InvalidToken)
    }

    async fn profile(&self, user_id: &UserId) -> Result<Profile, AuthError> {
        self.user_service
            .get_user(user_id)
            .await
            .map(Profile::from)
            .map_err(|e| match e {
                UserError::NotFound(_) => AuthError::InvalidToken,
                other => AuthError::User(other),
            })
    }
}
