use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use quad_types::{Institution, Message, OnboardingRequest, Post, UserProfile};

mod seed;

/// The five entity collections. Process-lifetime, no persistence;
/// everything resets when the handle is dropped.
#[derive(Debug, Default)]
pub struct Collections {
    pub institutions: Vec<Institution>,
    pub requests: Vec<OnboardingRequest>,
    pub users: Vec<UserProfile>,
    pub posts: Vec<Post>,
    pub messages: Vec<Message>,
}

/// Cloneable handle to the shared entity store.
///
/// Constructed once and passed by reference to every repository, the same
/// way a connection pool handle would be. Each access-layer call takes the
/// lock exactly once, so every operation is a single uninterrupted
/// read-modify-write even when the store is shared across threads.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Collections>>,
}

impl Store {
    /// Create an empty store. Tests get isolation by constructing a fresh
    /// instance each.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with demo tenants, users, and posts.
    pub fn seeded() -> Self {
        let store = Self::new();
        seed::load_demo_data(&store);
        tracing::info!("demo data seeded");
        store
    }

    /// A poisoned lock means a panic mid-write somewhere else; the data is
    /// still the best state we have, so recover rather than propagate.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Generated fallback avatar for accounts created without an upload.
pub(crate) fn generated_avatar(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}",
        urlencoding::encode(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_is_empty() {
        let store = Store::new();
        let data = store.read();
        assert!(data.institutions.is_empty());
        assert!(data.requests.is_empty());
        assert!(data.users.is_empty());
        assert!(data.posts.is_empty());
        assert!(data.messages.is_empty());
    }

    #[test]
    fn seeded_store_has_demo_tenants() {
        let store = Store::seeded();
        let data = store.read();
        assert_eq!(data.institutions.len(), 2);
        assert_eq!(data.requests.len(), 1);
        assert!(data.users.len() >= 4);
        assert!(data.posts.len() >= 2);
    }

    #[test]
    fn clones_share_state() {
        let store = Store::new();
        let other = store.clone();
        store.write().messages.push(quad_types::Message {
            id: uuid::Uuid::new_v4(),
            sender_id: uuid::Uuid::new_v4(),
            receiver_id: uuid::Uuid::new_v4(),
            text: "hi".to_string(),
            created_at: chrono::Utc::now(),
            read: false,
        });
        assert_eq!(other.read().messages.len(), 1);
    }

    #[test]
    fn avatar_uri_is_percent_encoded() {
        assert_eq!(
            generated_avatar("Ana Gomez"),
            "https://ui-avatars.com/api/?name=Ana%20Gomez"
        );
    }
}
