//! Single-admin authentication service

use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::auth::UserClaims,
};

#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Check the admin credential pair and return a signed JWT.
    ///
    /// The password is stored and compared in plaintext; there is a single
    /// configured admin account and no user table.
    pub fn login(&self, email: &str, password: &str) -> AppResult<(String, i64)> {
        if email != self.config.admin_email || password != self.config.admin_password {
            tracing::warn!("Rejected login attempt for {}", email);
            return Err(AppError::Authentication(
                "Invalid e-mail or password".to_string(),
            ));
        }

        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = UserClaims {
            sub: email.to_string(),
            iat: now,
            exp,
        };

        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        Ok((token, exp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(AuthConfig {
            admin_email: "admin@hospital.test".to_string(),
            admin_password: "hunter2".to_string(),
            jwt_secret: "test-secret".to_string(),
            jwt_expiration_hours: 24,
        })
    }

    #[test]
    fn valid_credentials_issue_token() {
        let (token, exp) = service().login("admin@hospital.test", "hunter2").unwrap();
        let claims = UserClaims::from_token(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, "admin@hospital.test");
        assert_eq!(claims.exp, exp);
    }

    #[test]
    fn wrong_password_is_rejected() {
        assert!(matches!(
            service().login("admin@hospital.test", "wrong"),
            Err(AppError::Authentication(_))
        ));
    }

    #[test]
    fn wrong_email_is_rejected() {
        assert!(matches!(
            service().login("someone@hospital.test", "hunter2"),
            Err(AppError::Authentication(_))
        ));
    }
}
