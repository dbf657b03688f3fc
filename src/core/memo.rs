//! Identity-keyed memoization
//!
//! A memo remembers the dependencies of its last computation and hands back
//! the cached value while they are unchanged. Dependencies are compared by
//! identity (`Arc::ptr_eq`), never by value: a state field that was replaced
//! with an equal copy still counts as changed.
//!
//! The cache holds clones of the dependency `Arc`s, so an allocation cannot
//! be freed and reused at the same address while it is still the cache key.

use parking_lot::Mutex;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// A tuple of values compared by identity
pub trait Dependencies: Clone {
    fn same(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Dependencies for Arc<T> {
    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<A: Dependencies, B: Dependencies> Dependencies for (A, B) {
    fn same(&self, other: &Self) -> bool {
        self.0.same(&other.0) && self.1.same(&other.1)
    }
}

impl<A: Dependencies, B: Dependencies, C: Dependencies> Dependencies for (A, B, C) {
    fn same(&self, other: &Self) -> bool {
        self.0.same(&other.0) && self.1.same(&other.1) && self.2.same(&other.2)
    }
}

/// Single-slot memo: last dependencies and last value
pub struct Memo<D, V> {
    name: &'static str,
    slot: Mutex<Option<(D, V)>>,
}

impl<D: Dependencies, V: Clone> Memo<D, V> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached value if `deps` is the cached key, else compute and cache
    ///
    /// `compute` runs without the lock held.
    pub fn get_or_compute(&self, deps: D, compute: impl FnOnce() -> V) -> V {
        if let Some((cached, value)) = self.slot.lock().as_ref() {
            if cached.same(&deps) {
                tracing::trace!(cache = self.name, "memo hit");
                return value.clone();
            }
        }

        tracing::trace!(cache = self.name, "memo miss");
        let value = compute();
        *self.slot.lock() = Some((deps, value.clone()));
        value
    }

    pub fn clear(&self) {
        *self.slot.lock() = None;
    }

    pub fn is_empty(&self) -> bool {
        self.slot.lock().is_none()
    }
}

/// Memo holding one value per argument, all sharing one dependency key
///
/// When the dependencies change every cached argument is dropped at once.
pub struct KeyedMemo<D, K, V> {
    name: &'static str,
    slot: Mutex<KeyedSlot<D, K, V>>,
}

struct KeyedSlot<D, K, V> {
    deps: Option<D>,
    values: HashMap<K, V>,
}

impl<D, K, V> KeyedMemo<D, K, V>
where
    D: Dependencies,
    K: Hash + Eq,
    V: Clone,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: Mutex::new(KeyedSlot {
                deps: None,
                values: HashMap::new(),
            }),
        }
    }

    pub fn get_or_compute<Q>(&self, deps: D, key: &Q, compute: impl FnOnce() -> V) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        {
            let slot = self.slot.lock();
            if slot.deps.as_ref().is_some_and(|cached| cached.same(&deps)) {
                if let Some(value) = slot.values.get(key) {
                    tracing::trace!(cache = self.name, "memo hit");
                    return value.clone();
                }
            }
        }

        tracing::trace!(cache = self.name, "memo miss");
        let value = compute();

        let mut slot = self.slot.lock();
        if !slot.deps.as_ref().is_some_and(|cached| cached.same(&deps)) {
            slot.values.clear();
            slot.deps = Some(deps);
        }
        slot.values.insert(key.to_owned(), value.clone());
        value
    }

    pub fn clear(&self) {
        let mut slot = self.slot.lock();
        slot.deps = None;
        slot.values.clear();
    }

    /// Number of arguments currently cached
    pub fn len(&self) -> usize {
        self.slot.lock().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
