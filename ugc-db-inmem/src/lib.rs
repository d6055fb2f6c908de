//! In-memory storage for items, ratings, comments and cached scores.
//!
//! Every repository operation locks the store exactly once, so each
//! write (in particular of the cached scores) is atomic for readers.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{collections::HashMap, sync::Arc};
use ugc_core::entities::*;

mod repo_impl;

#[derive(Debug, Default)]
struct Store {
    items: Vec<Item>,
    ratings: Vec<Rating>,
    comments: Vec<Comment>,
    score_caches: HashMap<Id, ScoreCache>,
}

/// A cheaply cloneable handle, all clones share the same store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDb {
    store: Arc<RwLock<Store>>,
}

impl InMemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read()
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write()
    }
}
