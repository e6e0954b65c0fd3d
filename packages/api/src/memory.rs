use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use store::User;

use crate::error::StoreError;
use crate::repo::UserStore;

/// A storage operation, used to inject failures into [`MemoryUserStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Schema,
    List,
    Insert,
    Update,
    Delete,
}

#[derive(Debug, Default)]
struct Inner {
    table_exists: bool,
    users: Vec<User>,
    last_id: i32,
    failing: HashSet<Operation>,
}

/// In-memory UserStore for testing and running without a database.
///
/// Behaves like the Postgres table: ids start at 1 and are never reused, and
/// updates or deletes before the table exists fail.
#[derive(Clone, Debug, Default)]
pub struct MemoryUserStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose table already holds `names`, with ids 1..=n.
    pub fn with_users<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        {
            let mut inner = store.lock();
            inner.table_exists = true;
            for name in names {
                inner.last_id += 1;
                let id = inner.last_id;
                inner.users.push(User {
                    id,
                    name: name.into(),
                });
            }
        }
        store
    }

    /// Make every later call of `op` fail until [`recover`](Self::recover).
    pub fn fail_on(&self, op: Operation) {
        self.lock().failing.insert(op);
    }

    pub fn recover(&self, op: Operation) {
        self.lock().failing.remove(&op);
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn run<T>(
        &self,
        op: Operation,
        f: impl FnOnce(&mut Inner) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut inner = self.lock();
        if inner.failing.contains(&op) {
            return Err(StoreError::Unavailable(format!("injected {op:?} failure")));
        }
        if op != Operation::Schema && !inner.table_exists {
            return Err(StoreError::Unavailable(
                "relation \"users\" does not exist".to_string(),
            ));
        }
        f(&mut *inner)
    }
}

impl UserStore for MemoryUserStore {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.run(Operation::Schema, |inner| {
            inner.table_exists = true;
            Ok(())
        })
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        self.run(Operation::List, |inner| Ok(inner.users.clone()))
    }

    async fn insert(&self, name: &str) -> Result<User, StoreError> {
        self.run(Operation::Insert, |inner| {
            inner.last_id += 1;
            let user = User {
                id: inner.last_id,
                name: name.to_string(),
            };
            inner.users.push(user.clone());
            Ok(user)
        })
    }

    async fn update(&self, id: i32, name: &str) -> Result<Option<User>, StoreError> {
        self.run(Operation::Update, |inner| {
            Ok(inner.users.iter_mut().find(|u| u.id == id).map(|u| {
                u.name = name.to_string();
                u.clone()
            }))
        })
    }

    async fn delete(&self, id: i32) -> Result<Option<User>, StoreError> {
        self.run(Operation::Delete, |inner| {
            let pos = inner.users.iter().position(|u| u.id == id);
            Ok(pos.map(|pos| inner.users.remove(pos)))
        })
    }
}
