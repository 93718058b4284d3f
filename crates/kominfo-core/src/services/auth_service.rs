// ============================================================================
// Kominfo Core - Authentication Service
// File: crates/kominfo-core/src/services/auth_service.rs
// ============================================================================
//! Admin sign-in, bearer token checks and the bootstrap account

use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

use kominfo_security::{Claims, JwtError, JwtService, PasswordService};
use kominfo_shared::utils::mask_email;

use crate::domain::{AdminUser, LoginRequest, LoginResponse, NewAdminUser};
use crate::error::DomainError;
use crate::repositories::AdminUserRepository;

pub struct AuthService {
    users: Arc<dyn AdminUserRepository>,
    jwt: JwtService,
}

impl AuthService {
    pub fn new(users: Arc<dyn AdminUserRepository>, jwt: JwtService) -> Self {
        Self { users, jwt }
    }

    /// Login with email and password
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, DomainError> {
        request.validate()?;
        let email = request.email.trim().to_lowercase();
        info!("Login attempt for email: {}", mask_email(&email));

        // 1. Find user by email
        let user = self.users.find_by_email(&email).await?.ok_or_else(|| {
            warn!("Login failed: email not found: {}", mask_email(&email));
            DomainError::InvalidCredentials
        })?;

        // 2. Check account state
        if !user.is_active {
            warn!("Login failed: account disabled: {}", user.id);
            return Err(DomainError::UserNotActive);
        }

        // 3. Verify password
        let valid = PasswordService::verify(&request.password, &user.password_hash)
            .map_err(|_| DomainError::InvalidCredentials)?;
        if !valid {
            warn!("Login failed: invalid password for: {}", mask_email(&email));
            return Err(DomainError::InvalidCredentials);
        }

        // 4. Issue token
        let access_token = self
            .jwt
            .generate_access_token(&user.id, &user.email)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))?;

        // 5. Update last login
        if let Err(e) = self.users.record_login(&user.id).await {
            error!("Failed to update last login: {}", e);
        }

        info!("Login successful for: {}", mask_email(&email));
        Ok(LoginResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt.access_token_expiry(),
            user,
        })
    }

    /// Validates a bearer token from the `Authorization` header.
    pub fn authenticate(&self, token: &str) -> Result<Claims, DomainError> {
        self.jwt.validate_token(token).map_err(|e| match e {
            JwtError::TokenExpired => DomainError::Unauthorized("token expired".into()),
            _ => DomainError::Unauthorized("invalid token".into()),
        })
    }

    pub async fn me(&self, user_id: &Uuid) -> Result<AdminUser, DomainError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::Unauthorized("account no longer exists".into()))?;
        if !user.is_active {
            return Err(DomainError::UserNotActive);
        }
        Ok(user)
    }

    /// Creates the first admin account when the table is empty. Returns `None`
    /// when accounts already exist.
    pub async fn ensure_bootstrap_admin(&self, new_user: NewAdminUser) -> Result<Option<AdminUser>, DomainError> {
        if self.users.count().await? > 0 {
            return Ok(None);
        }
        new_user.validate()?;

        let hash = PasswordService::hash(&new_user.password)
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;
        let user = AdminUser::new(&new_user.email, hash, new_user.display_name);
        let created = self.users.create(&user).await?;
        info!("Bootstrap admin created: {}", mask_email(&created.email));
        Ok(Some(created))
    }
}
