//! Common test utilities.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::RwLock;

use async_trait::async_trait;
use auth_ui::AuthNotificationChannel;
use auth_ui::AuthState;
use auth_ui::Hub;
use auth_ui::Unsubscribe;
use auth_ui::storage::GetOptions;
use auth_ui::storage::StorageProvider;
use serde_json::Value;

/// Creates a channel on its own hub.
#[allow(dead_code)]
pub fn new_channel() -> AuthNotificationChannel {
    AuthNotificationChannel::new(Arc::new(Hub::new()))
}

/// State changes received by a recording handler.
pub type Received = Arc<Mutex<Vec<(AuthState, Option<Value>)>>>;

/// Registers a state-change handler that records every call.
#[allow(dead_code)]
pub fn record_state_changes(channel: &AuthNotificationChannel) -> (Received, Unsubscribe) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    let unsubscribe = channel.on_state_change(move |state, data| {
        sink.lock().unwrap().push((state, data.cloned()));
        Ok(())
    });
    (received, unsubscribe)
}

// MOCK STORAGE

/// In-memory storage backend.
#[derive(Default)]
#[allow(dead_code)]
pub struct MockStorage {
    pub objects: RwLock<HashMap<String, String>>,
    pub requests: Mutex<Vec<(String, GetOptions)>>,
}

#[allow(dead_code)]
impl MockStorage {
    pub fn with_object(self, key: &str, src: &str) -> Self {
        self.objects
            .write()
            .unwrap()
            .insert(key.to_string(), src.to_string());
        self
    }
}

#[async_trait]
impl StorageProvider for MockStorage {
    async fn get(&self, key: &str, options: &GetOptions) -> anyhow::Result<String> {
        self.requests
            .lock()
            .unwrap()
            .push((key.to_string(), options.clone()));
        self.objects
            .read()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("NoSuchKey: {key}"))
    }
}
