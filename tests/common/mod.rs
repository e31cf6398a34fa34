use std::net::SocketAddr;

use messageboard::{
    app,
    db::{self, Message, NewMessage, NewUser, User},
    store::{MessageRepository, SqliteStore, UserRepository},
    AppState,
};
use tokio::task::JoinHandle;

pub const SAMPLE_USERNAME: &str = "myuser";
pub const SAMPLE_TITLE: &str = "Prose";
pub const SAMPLE_BODY: &str = "blah blah blah";

/// A served app over its own in-memory database, seeded with one user and
/// one message by that user.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    pub store: SqliteStore,
    pub user: User,
    pub message: Message,
    server: JoinHandle<()>,
}

impl TestApp {
    pub async fn spawn() -> TestApp {
        let store = SqliteStore::new(db::connect_in_memory().await.unwrap());

        let user = UserRepository::create(
            &store,
            NewUser {
                username: SAMPLE_USERNAME.to_owned(),
                password: "mypassword".to_owned(),
            },
        )
        .await
        .unwrap();
        let message = MessageRepository::create(
            &store,
            NewMessage {
                title: SAMPLE_TITLE.to_owned(),
                body: SAMPLE_BODY.to_owned(),
                author: Some(user.id),
            },
        )
        .await
        .unwrap();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = app(AppState::with_store(store.clone()));
        let server = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        TestApp {
            addr,
            client: reqwest::Client::new(),
            store,
            user,
            message,
            server,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub async fn find_message(&self, id: uuid::Uuid) -> Option<Message> {
        MessageRepository::find_by_id(&self.store, id).await.unwrap()
    }

    pub async fn teardown(self) {
        self.store.delete_by_title(SAMPLE_TITLE).await.unwrap();
        self.store.delete_by_username(SAMPLE_USERNAME).await.unwrap();

        self.server.abort();
        let _ = self.server.await;
        self.store.pool().close().await;
    }
}
