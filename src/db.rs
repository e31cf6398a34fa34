use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    FromRow, SqlitePool,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub author: Option<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewMessage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub author: Option<Uuid>,
}

/// Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl Message {
    pub(crate) fn new(NewMessage { title, body, author }: NewMessage) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: Uuid::now_v7(),
            title,
            body,
            author,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn apply(&mut self, MessageUpdate { title, body }: MessageUpdate) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(body) = body {
            self.body = body;
        }
        self.updated_at = OffsetDateTime::now_utc();
    }
}

pub async fn connect(config: &Config) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("invalid DATABASE_URL {}", config.database_url))?
        .create_if_missing(true);

    let db_pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .context("couldn't open database")?;

    migrate(&db_pool).await?;
    Ok(db_pool)
}

/// Single-connection in-memory database; it lives as long as the pool.
pub async fn connect_in_memory() -> anyhow::Result<SqlitePool> {
    let db_pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    migrate(&db_pool).await?;
    Ok(db_pool)
}

pub async fn migrate(db_pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::migrate!()
        .run(db_pool)
        .await
        .context("couldn't run migrations")
}
