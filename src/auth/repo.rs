use crate::auth::repo_types::User;
use sqlx::SqlitePool;
use time::OffsetDateTime;
use uuid::Uuid;

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, session_id, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Resolve a session token to its user.
    pub async fn find_by_session(db: &SqlitePool, session_id: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, session_id, created_at
            FROM users
            WHERE session_id = ?
            "#,
        )
        .bind(session_id)
        .fetch_optional(db)
        .await
    }

    /// Create a new user with hashed password.
    pub async fn create(db: &SqlitePool, email: &str, password_hash: &str) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password_hash, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, email, password_hash, session_id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password_hash)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(db)
        .await
    }

    pub async fn set_session(db: &SqlitePool, user_id: Uuid, session_id: &str) -> sqlx::Result<()> {
        sqlx::query("UPDATE users SET session_id = ? WHERE id = ?")
            .bind(session_id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(())
    }
}
