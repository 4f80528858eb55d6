use chrono::Utc;
use guestbook::configuration::{DatabaseSettings, Settings};
use guestbook::db::StoreError;
use guestbook::models;
use guestbook::services::CommentStore;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

/// In-memory stand-in for the comments collection. Assigns ids and ordering
/// timestamps the way the real store does, and can be primed to fail the
/// next append.
#[derive(Default)]
pub struct InMemoryStore {
    comments: Mutex<Vec<models::Comment>>,
    next_append_error: Mutex<Option<StoreError>>,
    appends: AtomicUsize,
    pub append_delay: Option<Duration>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_append_delay(delay: Duration) -> Self {
        Self {
            append_delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn fail_next_append(&self, err: StoreError) {
        *self.next_append_error.lock().unwrap() = Some(err);
    }

    pub fn append_count(&self) -> usize {
        self.appends.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<models::Comment> {
        self.comments.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CommentStore for InMemoryStore {
    async fn append(&self, mut comment: models::Comment) -> Result<Uuid, StoreError> {
        if let Some(delay) = self.append_delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = self.next_append_error.lock().unwrap().take() {
            return Err(err);
        }

        let id = Uuid::new_v4();
        comment.id = Some(id);
        comment.timestamp = Some(Utc::now());
        self.comments.lock().unwrap().push(comment);
        self.appends.fetch_add(1, Ordering::SeqCst);
        Ok(id)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<models::Comment>, StoreError> {
        let mut comments = self.comments.lock().unwrap().clone();
        comments.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        comments.truncate(limit.max(0) as usize);
        Ok(comments)
    }
}

pub struct TestApp {
    pub address: String,
    pub store: Arc<InMemoryStore>,
}

pub fn test_settings(port: u16) -> Settings {
    Settings {
        app_host: "127.0.0.1".to_string(),
        app_port: port,
        reload_delay_ms: 10,
        database: DatabaseSettings {
            username: "postgres".to_string(),
            password: "postgres".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5432,
            database_name: "guestbook_test".to_string(),
        },
    }
}

pub async fn spawn_app() -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let store = Arc::new(InMemoryStore::new());
    let server = guestbook::startup::run(
        listener,
        store.clone() as Arc<dyn CommentStore>,
        test_settings(port),
    )
    .await
    .expect("Failed to bind address.");
    tokio::spawn(server);

    TestApp { address, store }
}
