//! Persistence for users and messages.
//!
//! Handlers only see the repository traits. [`SqliteStore`] backs the
//! running server; [`MemoryStore`] keeps everything in a map for tests.

mod memory;
mod sqlite;

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::{Message, MessageUpdate, NewMessage, NewUser, User};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Assigns the id and timestamps, then stores the message.
    async fn create(&self, new: NewMessage) -> anyhow::Result<Message>;

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Message>>;

    /// Every message, oldest insertion first.
    async fn find_all(&self) -> anyhow::Result<Vec<Message>>;

    /// Returns `None` when there is no message with that id.
    async fn update(&self, id: Uuid, update: MessageUpdate) -> anyhow::Result<Option<Message>>;

    /// Returns the removed message, or `None` when there was nothing to remove.
    async fn delete(&self, id: Uuid) -> anyhow::Result<Option<Message>>;

    async fn delete_by_title(&self, title: &str) -> anyhow::Result<u64>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, new: NewUser) -> anyhow::Result<User>;

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;

    async fn delete_by_username(&self, username: &str) -> anyhow::Result<u64>;
}
