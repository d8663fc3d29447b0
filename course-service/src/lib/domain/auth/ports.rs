use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::Profile;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::user::models::UserId;

/// Port for the authentication flow.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register an account and issue its first access token.
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered; no token is issued
    /// * `Hashing` / `Signing` - Credential or token primitives failed
    /// * `User` - User directory failed
    async fn register(&self, command: RegisterCommand) -> Result<AccessToken, AuthError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `Hashing` / `Signing` - Credential or token primitives failed
    /// * `User` - User directory failed
    async fn login(&self, command: LoginCommand) -> Result<AccessToken, AuthError>;

    /// Verify an access token and return its subject.
    ///
    /// # Errors
    /// * `InvalidToken` - Forged, malformed or subject-less token
    /// * `ExpiredToken` - Token is past its expiry
    fn authorize(&self, token: &str) -> Result<UserId, AuthError>;

    /// Fetch the public profile of an authenticated user.
    ///
    /// # Errors
    /// * `InvalidToken` - The token subject no longer exists
    /// * `User` - User directory failed
    async fn profile(&self, user_id: &UserId) -> Result<Profile, AuthError>;
}
