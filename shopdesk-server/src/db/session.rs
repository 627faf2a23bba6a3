//! Request-scoped database session
//!
//! A session is a transaction on one pooled connection. Handlers call
//! [`Session::commit`] once their work succeeded. A session that is dropped
//! without commit (early `?` return, not-found, validation failure) is rolled
//! back by sqlx when the transaction is dropped.

use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use super::repos::{DbError, UserRepo};

pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    /// Acquire a connection and open a transaction on it.
    pub async fn begin(pool: &PgPool) -> Result<Self, DbError> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    /// User repository bound to this session.
    pub fn users(&mut self) -> UserRepo<'_> {
        UserRepo::new(self.conn())
    }

    pub async fn commit(self) -> Result<(), DbError> {
        self.tx.commit().await?;
        Ok(())
    }

    /// Roll back explicitly. Dropping the session has the same effect.
    pub async fn rollback(self) -> Result<(), DbError> {
        self.tx.rollback().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};
    use crate::models::NewUser;

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn dropped_session_rolls_back() {
        let pool = pool().await;
        let user = NewUser::new("Rollback", "rollback@example.com", 30).unwrap();

        let id = {
            let mut session = Session::begin(&pool).await.unwrap();
            let id = session.users().create(&user).await.unwrap();
            // dropped here without commit
            id
        };

        let mut session = Session::begin(&pool).await.unwrap();
        let err = session.users().get(id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn committed_session_persists() {
        let pool = pool().await;
        let user = NewUser::new("Commit", "commit@example.com", 41).unwrap();

        let mut session = Session::begin(&pool).await.unwrap();
        let id = session.users().create(&user).await.unwrap();
        session.commit().await.unwrap();

        let mut session = Session::begin(&pool).await.unwrap();
        let stored = session.users().get(id).await.unwrap();
        assert_eq!(stored.email, "commit@example.com");

        session.users().delete(id).await.unwrap();
        session.commit().await.unwrap();
    }
}
