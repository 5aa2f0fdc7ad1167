use sqlx::PgPool;

pub mod seeder;

/// Create a teacher account directly in the database, bypassing the HTTP API.
///
/// Used by the `portal-cli create-teacher` command for bootstrapping
/// environments that have no registered teachers yet.
pub async fn create_teacher_account(
    db: &PgPool,
    user_name: &str,
    email: &str,
    first_name: &str,
    last_name: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let hashed_password = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

    let result = sqlx::query(
        r#"
        INSERT INTO teachers (user_name, email, password_hash, first_name, last_name)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(user_name)
    .bind(email)
    .bind(hashed_password)
    .bind(first_name)
    .bind(last_name)
    .execute(db)
    .await?;

    if result.rows_affected() == 0 {
        return Err("A teacher with this username or email already exists".into());
    }

    Ok(())
}
