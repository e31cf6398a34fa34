use async_trait::async_trait;
use sqlx::SqlitePool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::db::{Message, MessageUpdate, NewMessage, NewUser, User};

use super::{MessageRepository, UserRepository};

const MESSAGE_COLUMNS: &str = "id,title,body,author,created_at,updated_at";

#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db_pool
    }
}

#[async_trait]
impl MessageRepository for SqliteStore {
    async fn create(&self, new: NewMessage) -> anyhow::Result<Message> {
        let msg = Message::new(new);
        sqlx::query("INSERT INTO messages (id,title,body,author,created_at,updated_at) VALUES (?,?,?,?,?,?)")
            .bind(msg.id)
            .bind(&msg.title)
            .bind(&msg.body)
            .bind(msg.author)
            .bind(msg.created_at)
            .bind(msg.updated_at)
            .execute(&self.db_pool)
            .await?;

        Ok(msg)
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Message>> {
        Ok(
            sqlx::query_as(&format!("SELECT {MESSAGE_COLUMNS} FROM messages WHERE id=?"))
                .bind(id)
                .fetch_optional(&self.db_pool)
                .await?
        )
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Message>> {
        Ok(
            sqlx::query_as(&format!("SELECT {MESSAGE_COLUMNS} FROM messages ORDER BY rowid"))
                .fetch_all(&self.db_pool)
                .await?
        )
    }

    async fn update(&self, id: Uuid, MessageUpdate { title, body }: MessageUpdate) -> anyhow::Result<Option<Message>> {
        Ok(
            sqlx::query_as(&format!(
                "UPDATE messages SET title=COALESCE(?,title), body=COALESCE(?,body), updated_at=? WHERE id=? RETURNING {MESSAGE_COLUMNS}"
            ))
                .bind(title)
                .bind(body)
                .bind(OffsetDateTime::now_utc())
                .bind(id)
                .fetch_optional(&self.db_pool)
                .await?
        )
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<Option<Message>> {
        Ok(
            sqlx::query_as(&format!("DELETE FROM messages WHERE id=? RETURNING {MESSAGE_COLUMNS}"))
                .bind(id)
                .fetch_optional(&self.db_pool)
                .await?
        )
    }

    async fn delete_by_title(&self, title: &str) -> anyhow::Result<u64> {
        Ok(
            sqlx::query("DELETE FROM messages WHERE title=?")
                .bind(title)
                .execute(&self.db_pool)
                .await?
                .rows_affected()
        )
    }
}

#[async_trait]
impl UserRepository for SqliteStore {
    async fn create(&self, NewUser { username, password }: NewUser) -> anyhow::Result<User> {
        let user = User {
            id: Uuid::now_v7(),
            username,
            password,
        };
        sqlx::query("INSERT INTO users (id,username,password) VALUES (?,?,?)")
            .bind(user.id)
            .bind(&user.username)
            .bind(&user.password)
            .execute(&self.db_pool)
            .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(
            sqlx::query_as("SELECT id,username,password FROM users WHERE id=?")
                .bind(id)
                .fetch_optional(&self.db_pool)
                .await?
        )
    }

    async fn delete_by_username(&self, username: &str) -> anyhow::Result<u64> {
        Ok(
            sqlx::query("DELETE FROM users WHERE username=?")
                .bind(username)
                .execute(&self.db_pool)
                .await?
                .rows_affected()
        )
    }
}
