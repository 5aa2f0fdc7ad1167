use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::teachers::model::TeacherProfile;
use crate::modules::teachers::service::TeacherService;
use crate::utils::errors::AppError;
use crate::utils::jwt::issue_token;
use crate::utils::password::{hash_password, verify_password};

use super::model::{AuthResponse, LoginRequest, RegisterRequest};

pub struct AuthService;

impl AuthService {
    /// Creates a teacher account and returns the public profile.
    ///
    /// Username and email are checked in that order so the caller learns
    /// about a taken username before a taken email. The insert and the
    /// first-login stamp commit together: a freshly registered account is
    /// considered signed in from the moment it exists.
    #[instrument(skip(db, dto))]
    pub async fn register(db: &PgPool, dto: RegisterRequest) -> Result<TeacherProfile, AppError> {
        let existing_user_name =
            sqlx::query("SELECT id FROM teachers WHERE LOWER(user_name) = LOWER($1)")
                .bind(&dto.user_name)
                .fetch_optional(db)
                .await?;

        if existing_user_name.is_some() {
            return Err(AppError::validation("Username already exists"));
        }

        let existing_email = sqlx::query("SELECT id FROM teachers WHERE LOWER(email) = LOWER($1)")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?;

        if existing_email.is_some() {
            return Err(AppError::validation("Email already exists"));
        }

        let password_hash = hash_password(&dto.password)?;

        let mut tx = db.begin().await?;

        let teacher_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO teachers (user_name, email, password_hash, first_name, last_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&dto.user_name)
        .bind(&dto.email)
        .bind(&password_hash)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            // Backstop for the race between the pre-checks and the insert.
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::validation("Username or email already exists");
                }
            }
            e.into()
        })?;

        sqlx::query("UPDATE teachers SET last_login_at = NOW() WHERE id = $1")
            .bind(teacher_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        TeacherService::get_teacher(db, teacher_id).await
    }

    /// Verifies credentials and issues an access token.
    ///
    /// An unknown username and a wrong password produce byte-identical
    /// failures, so a caller cannot probe which usernames exist.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct TeacherWithPassword {
            id: Uuid,
            user_name: String,
            email: String,
            password_hash: String,
        }

        let teacher = sqlx::query_as::<_, TeacherWithPassword>(
            "SELECT id, user_name, email, password_hash FROM teachers
             WHERE LOWER(user_name) = LOWER($1)",
        )
        .bind(&dto.user_name)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

        let is_valid = verify_password(&dto.password, &teacher.password_hash)?;

        if !is_valid {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let issued = issue_token(jwt_config, teacher.id, &teacher.user_name, &teacher.email)?;

        sqlx::query("UPDATE teachers SET last_login_at = NOW() WHERE id = $1")
            .bind(teacher.id)
            .execute(db)
            .await?;

        let profile = TeacherService::get_teacher(db, teacher.id).await?;

        Ok(AuthResponse {
            token: issued.token,
            expires_at: issued.expires_at,
            teacher: profile,
        })
    }
}
