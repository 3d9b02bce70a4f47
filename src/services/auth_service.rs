use once_cell::sync::OnceCell;
use sqlx::PgPool;
use tracing::{error, info, warn};

use crate::auth::{generate_jwt, hash_password, verify_password, AuthError};
use crate::config::SecurityConfig;
use crate::database::models::{AuthUser, User};
use crate::database::DatabaseError;
use crate::error::ApiError;
use crate::schema::{AuthResponse, LoginInput, SignupInput};

const EMAIL_TAKEN: &str = "User with this email already exists";
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Hash checked when no credential exists, so an unknown email costs the
/// same bcrypt work as a wrong password
static DUMMY_HASH: OnceCell<String> = OnceCell::new();

fn dummy_hash(cost: u32) -> Result<&'static str, AuthError> {
    DUMMY_HASH
        .get_or_try_init(|| hash_password("sitebook-no-such-credential", cost))
        .map(String::as_str)
}

pub struct AuthService {
    pool: PgPool,
    security: SecurityConfig,
}

impl AuthService {
    pub fn new(pool: PgPool, security: SecurityConfig) -> Self {
        Self { pool, security }
    }

    /// Register a profile plus its credential, both or neither
    pub async fn signup(&self, input: SignupInput) -> Result<AuthResponse, ApiError> {
        let taken: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM auth_users WHERE email = $1)
                 OR EXISTS (SELECT 1 FROM users WHERE email = $1)",
        )
        .bind(&input.email)
        .fetch_one(&self.pool)
        .await?;

        if taken {
            warn!("Signup rejected for existing email {}", input.email);
            return Err(ApiError::conflict(EMAIL_TAKEN));
        }

        let hashed_password = self.hash(input.password).await?;

        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, first_name, last_name) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&input.email)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(email_conflict)?;

        sqlx::query("INSERT INTO auth_users (user_id, email, hashed_password) VALUES ($1, $2, $3)")
            .bind(user.id)
            .bind(&user.email)
            .bind(&hashed_password)
            .execute(&mut *tx)
            .await
            .map_err(email_conflict)?;

        // Issued before commit so a signing failure leaves no rows behind
        let token = generate_jwt(&self.security, &user)?;

        tx.commit().await?;
        info!("Registered user {} ({})", user.id, user.email);

        Ok(AuthResponse { user, token: Some(token) })
    }

    /// Every failure path yields the same message so callers cannot probe
    /// which emails are registered
    pub async fn login(&self, input: LoginInput) -> Result<AuthResponse, ApiError> {
        let credential = sqlx::query_as::<_, AuthUser>("SELECT * FROM auth_users WHERE email = $1")
            .bind(&input.email)
            .fetch_optional(&self.pool)
            .await?;

        let Some(credential) = credential else {
            warn!("Login failed: no credential for {}", input.email);
            self.verify_dummy(input.password).await?;
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self.verify(input.password, credential.hashed_password).await? {
            warn!("Login failed: password mismatch for user {}", credential.user_id);
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        }

        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(credential.user_id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(user) = user else {
            warn!("Login failed: credential {} has no profile", credential.id);
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        };

        let token = generate_jwt(&self.security, &user)?;
        info!("User {} logged in", user.id);
        Ok(AuthResponse { user, token: Some(token) })
    }

    async fn hash(&self, password: String) -> Result<String, ApiError> {
        let cost = self.security.bcrypt_cost;
        let hashed = tokio::task::spawn_blocking(move || hash_password(&password, cost))
            .await
            .map_err(blocking_failed)??;
        Ok(hashed)
    }

    async fn verify(&self, password: String, hashed: String) -> Result<bool, ApiError> {
        let outcome = tokio::task::spawn_blocking(move || verify_password(&password, &hashed))
            .await
            .map_err(blocking_failed)?;

        match outcome {
            Ok(matches) => Ok(matches),
            // A stored hash bcrypt cannot parse never matches
            Err(AuthError::Hashing(msg)) => {
                error!("Unreadable password hash: {}", msg);
                Ok(false)
            }
            Err(other) => Err(other.into()),
        }
    }

    async fn verify_dummy(&self, password: String) -> Result<(), ApiError> {
        let cost = self.security.bcrypt_cost;
        let outcome = tokio::task::spawn_blocking(move || {
            dummy_hash(cost).and_then(|hashed| verify_password(&password, hashed))
        })
        .await
        .map_err(blocking_failed)?;

        if let Err(e) = outcome {
            error!("Dummy password check failed: {}", e);
        }
        Ok(())
    }
}

fn email_conflict(err: sqlx::Error) -> ApiError {
    match DatabaseError::from(err) {
        DatabaseError::UniqueViolation { .. } => ApiError::conflict(EMAIL_TAKEN),
        other => other.into(),
    }
}

fn blocking_failed(err: tokio::task::JoinError) -> ApiError {
    error!("Password hashing task failed: {}", err);
    ApiError::internal_server_error("Authentication is temporarily unavailable")
}
