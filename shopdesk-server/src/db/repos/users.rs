//! User repository
//!
//! Each operation is a single parameterized statement. Update and delete
//! detect a missing row from the statement's own result, so there is no
//! separate existence check to race against.

use serde::Serialize;
use sqlx::{FromRow, PgConnection};

use super::DbError;
use crate::models::NewUser;

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

fn not_found(id: i64) -> DbError {
    DbError::NotFound {
        resource: "user",
        id: id.to_string(),
    }
}

/// User repository
pub struct UserRepo<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> UserRepo<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// All users ordered by id.
    pub async fn list(&mut self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, age FROM users ORDER BY id",
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(users)
    }

    pub async fn get(&mut self, id: i64) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, name, email, age FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Insert a user and return the generated id.
    pub async fn create(&mut self, user: &NewUser) -> Result<i64, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO users (name, email, age) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(user.name())
        .bind(user.email())
        .bind(user.age())
        .fetch_one(&mut *self.conn)
        .await?;

        tracing::debug!(user_id = id, "user inserted");
        Ok(id)
    }

    /// Replace every field of an existing user.
    pub async fn update(&mut self, id: i64, user: &NewUser) -> Result<(), DbError> {
        sqlx::query_as::<_, (i64,)>(
            r#"
            UPDATE users SET name = $1, email = $2, age = $3
            WHERE id = $4
            RETURNING id
            "#,
        )
        .bind(user.name())
        .bind(user.email())
        .bind(user.age())
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(|| not_found(id))?;

        Ok(())
    }

    pub async fn delete(&mut self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations, Session};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p shopdesk-server -- --ignored

    async fn session() -> Session {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        // Never committed, so nothing a test writes outlives it
        Session::begin(&pool).await.expect("begin failed")
    }

    #[test]
    fn not_found_names_user() {
        assert_eq!(not_found(7).to_string(), "not found: user '7'");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_returns_fields() {
        let mut session = session().await;
        let user = NewUser::new("Grace", "grace@example.com", 45).unwrap();

        let id = session.users().create(&user).await.unwrap();
        let stored = session.users().get(id).await.unwrap();

        assert_eq!(
            stored,
            User {
                id,
                name: "Grace".into(),
                email: "grace@example.com".into(),
                age: 45,
            }
        );
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_and_delete_missing_user_are_not_found() {
        let mut session = session().await;
        let before = session.users().list().await.unwrap();
        let user = NewUser::new("Nobody", "nobody@example.com", 1).unwrap();

        let err = session.users().update(i64::MAX, &user).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "user", .. }));

        let err = session.users().delete(i64::MAX).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "user", .. }));

        assert_eq!(session.users().list().await.unwrap(), before);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_overwrites_fields() {
        let mut session = session().await;
        let id = session
            .users()
            .create(&NewUser::new("Old", "old@example.com", 20).unwrap())
            .await
            .unwrap();

        session
            .users()
            .update(id, &NewUser::new("New", "new@example.com", 21).unwrap())
            .await
            .unwrap();

        let stored = session.users().get(id).await.unwrap();
        assert_eq!(stored.name, "New");
        assert_eq!(stored.age, 21);

        session.users().delete(id).await.unwrap();
        assert!(session.users().get(id).await.is_err());
    }
}
