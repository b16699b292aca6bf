//! Categorized memory store
//!
//! A keyed append log behind an explicit interface. The store is injected
//! into the memory tool as a collaborator rather than living as ambient
//! global state, so its lifecycle and concurrency semantics stay visible.
//! The in-process implementation has no eviction and no durability contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryCategory {
    Personal,
    Projects,
    Technical,
    Reflections,
}

impl fmt::Display for MemoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MemoryCategory::Personal => "personal",
            MemoryCategory::Projects => "projects",
            MemoryCategory::Technical => "technical",
            MemoryCategory::Reflections => "reflections",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MemoryItem {
    pub id: String,
    pub category: MemoryCategory,
    pub content: String,
    pub context: String,
    pub timestamp: DateTime<Utc>,
}

/// Key-value memory interface: create, read, list-by-category.
#[async_trait]
pub trait MemoryStore: Send + Sync {
    async fn store(
        &self,
        category: MemoryCategory,
        content: String,
        context: String,
    ) -> MemoryItem;

    async fn get(&self, id: &str) -> Option<MemoryItem>;

    async fn list_by_category(&self, category: MemoryCategory) -> Vec<MemoryItem>;
}

/// Process-local store: per-category append log under an async RwLock.
#[derive(Default)]
pub struct InMemoryStore {
    items: RwLock<HashMap<MemoryCategory, Vec<MemoryItem>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemoryStore for InMemoryStore {
    async fn store(
        &self,
        category: MemoryCategory,
        content: String,
        context: String,
    ) -> MemoryItem {
        let item = MemoryItem {
            id: format!("mem_{}", Uuid::new_v4().simple()),
            category,
            content,
            context,
            timestamp: Utc::now(),
        };

        let mut items = self.items.write().await;
        items.entry(category).or_default().push(item.clone());
        item
    }

    async fn get(&self, id: &str) -> Option<MemoryItem> {
        let items = self.items.read().await;
        items
            .values()
            .flat_map(|v| v.iter())
            .find(|item| item.id == id)
            .cloned()
    }

    async fn list_by_category(&self, category: MemoryCategory) -> Vec<MemoryItem> {
        let items = self.items.read().await;
        items.get(&category).cloned().unwrap_or_default()
    }
}
