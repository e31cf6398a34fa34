use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::db::{Message, MessageUpdate, NewMessage, NewUser, User};

use super::{MessageRepository, UserRepository};

/// Vec-backed store; messages keep insertion order.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    messages: Arc<RwLock<Vec<Message>>>,
    users: Arc<RwLock<Vec<User>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for MemoryStore {
    async fn create(&self, new: NewMessage) -> anyhow::Result<Message> {
        let msg = Message::new(new);
        self.messages.write().await.push(msg.clone());
        Ok(msg)
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Message>> {
        Ok(self.messages.read().await.iter().find(|m| m.id == id).cloned())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Message>> {
        Ok(self.messages.read().await.clone())
    }

    async fn update(&self, id: Uuid, update: MessageUpdate) -> anyhow::Result<Option<Message>> {
        let mut messages = self.messages.write().await;
        let Some(msg) = messages.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };

        msg.apply(update);
        Ok(Some(msg.clone()))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<Option<Message>> {
        let mut messages = self.messages.write().await;
        Ok(messages
            .iter()
            .position(|m| m.id == id)
            .map(|i| messages.remove(i)))
    }

    async fn delete_by_title(&self, title: &str) -> anyhow::Result<u64> {
        let mut messages = self.messages.write().await;
        let before = messages.len();
        messages.retain(|m| m.title != title);
        Ok((before - messages.len()) as u64)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, NewUser { username, password }: NewUser) -> anyhow::Result<User> {
        let user = User {
            id: Uuid::now_v7(),
            username,
            password,
        };
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn delete_by_username(&self, username: &str) -> anyhow::Result<u64> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.username != username);
        Ok((before - users.len()) as u64)
    }
}
