use crate::domain::auth::errors::PasswordPolicyError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::PersonName;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Plaintext password accepted at registration.
///
/// Between 6 and 128 characters; whitespace is significant and kept as typed.
/// Deliberately not `Debug`/`Display` so it cannot end up in logs.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 6;
    const MAX_LENGTH: usize = 128;

    /// Validate a candidate password against the registration policy.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 6 characters (covers the empty password)
    /// * `TooLong` - More than 128 characters
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.chars().count();

        if length < Self::MIN_LENGTH {
            Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(PasswordPolicyError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(password))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

/// Command to register a new account.
pub struct RegisterCommand {
    pub fname: PersonName,
    pub lname: PersonName,
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterCommand {
    pub fn new(fname: PersonName, lname: PersonName, email: EmailAddress, password: Password) -> Self {
        Self {
            fname,
            lname,
            email,
            password,
        }
    }
}

/// Command to log in with an email and password.
///
/// The password is not policy-checked here: a login attempt either matches
/// the stored hash or it does not.
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: EmailAddress, password: String) -> Self {
        Self { email, password }
    }
}

/// Signed access token returned by register and login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Public projection of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: UserId,
    pub fname: PersonName,
    pub lname: PersonName,
    pub email: EmailAddress,
}

impl From<User> for Profile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            fname: user.fname,
            lname: user.lname,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_accepts_policy_length() {
        let password = Password::new("secret1".to_string()).unwrap();
        assert_eq!(password.expose(), "secret1");
    }

    #[test]
    fn test_password_rejects_empty() {
        assert!(matches!(
            Password::new(String::new()),
            Err(PasswordPolicyError::TooShort { min: 6, actual: 0 })
        ));
    }

    #[test]
    fn test_password_rejects_too_long() {
        assert!(matches!(
            Password::new("p".repeat(129)),
            Err(PasswordPolicyError::TooLong {
                max: 128,
                actual: 129
            })
        ));
    }
}
