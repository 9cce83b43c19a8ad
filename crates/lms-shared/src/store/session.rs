use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use super::atom::{Atom, Readable, SetValue, Writable};

type Listener = Box<dyn Fn(&SessionStore, &[&'static str]) + Send + Sync>;

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Client-side state for one session.
///
/// Create one per app instance and hand it to consumers explicitly; call
/// [`reset`](Self::reset) on logout. Atoms that were never written read as
/// their defaults.
#[derive(Default)]
pub struct SessionStore {
    values: HashMap<&'static str, Box<dyn Any + Send + Sync>>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of an atom or selector.
    pub fn get<T>(&self, state: &impl Readable<T>) -> T {
        state.read(self)
    }

    /// Write one atom or selector.
    ///
    /// Listeners run once, after every affected atom has been updated and
    /// before this call returns.
    pub fn set<T>(&mut self, state: &impl Writable<T>, value: impl Into<SetValue<T>>) {
        self.update(|tx| tx.set(state, value));
    }

    /// Apply several writes as one logical operation.
    pub fn update(&mut self, apply: impl FnOnce(&mut Transaction<'_>)) {
        let mut tx = Transaction {
            store: self,
            changed: Vec::new(),
        };
        apply(&mut tx);
        let changed = tx.changed;
        if !changed.is_empty() {
            self.notify(&changed);
        }
    }

    /// Return every atom to its default.
    pub fn reset(&mut self) {
        let mut changed: Vec<&'static str> = self.values.keys().copied().collect();
        if changed.is_empty() {
            return;
        }
        changed.sort_unstable();
        self.values.clear();
        self.notify(&changed);
    }

    /// Register a listener called with the keys of the atoms that changed.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(&SessionStore, &[&'static str]) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub(crate) fn stored<T: 'static>(&self, key: &str) -> Option<&T> {
        self.values.get(key).and_then(|v| v.downcast_ref::<T>())
    }

    fn notify(&self, changed: &[&'static str]) {
        for (_, listener) in &self.listeners {
            listener(self, changed);
        }
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.values.keys().collect();
        keys.sort_unstable();
        f.debug_struct("SessionStore")
            .field("written", &keys)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// A batch of writes against a [`SessionStore`].
///
/// Reads inside a transaction see the writes made so far.
pub struct Transaction<'a> {
    store: &'a mut SessionStore,
    changed: Vec<&'static str>,
}

impl Transaction<'_> {
    pub fn get<T>(&self, state: &impl Readable<T>) -> T {
        state.read(&*self.store)
    }

    pub fn set<T>(&mut self, state: &impl Writable<T>, value: impl Into<SetValue<T>>) {
        state.write(self, value.into());
    }

    pub(crate) fn put<T>(&mut self, atom: &Atom<T>, value: T)
    where
        T: Clone + PartialEq + Send + Sync + 'static,
    {
        if atom.read(&*self.store) == value {
            return;
        }
        self.store.values.insert(atom.key(), Box::new(value));
        self.mark(atom.key());
    }

    pub(crate) fn clear<T>(&mut self, atom: &Atom<T>)
    where
        T: Clone + PartialEq + Send + Sync + 'static,
    {
        let before = atom.read(&*self.store);
        self.store.values.remove(atom.key());
        if before != atom.default_value() {
            self.mark(atom.key());
        }
    }

    fn mark(&mut self, key: &'static str) {
        if !self.changed.contains(&key) {
            self.changed.push(key);
        }
    }
}
