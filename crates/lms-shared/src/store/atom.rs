//! State cells and derived views.

use super::session::{SessionStore, Transaction};

/// Value passed to a write: either a concrete value or the reset sentinel.
#[derive(Debug, Clone, PartialEq)]
pub enum SetValue<T> {
    Value(T),
    Reset,
}

impl<T> From<T> for SetValue<T> {
    fn from(value: T) -> Self {
        SetValue::Value(value)
    }
}

/// Anything that can be read from a [`SessionStore`].
pub trait Readable<T> {
    fn key(&self) -> &'static str;

    fn read(&self, store: &SessionStore) -> T;
}

/// Anything that can be written through a [`Transaction`].
pub trait Writable<T>: Readable<T> {
    fn write(&self, tx: &mut Transaction<'_>, value: SetValue<T>);
}

/// An independently addressable, individually writable state cell.
pub struct Atom<T> {
    key: &'static str,
    default: fn() -> T,
}

impl<T> Atom<T> {
    pub const fn new(key: &'static str, default: fn() -> T) -> Self {
        Self { key, default }
    }

    pub fn default_value(&self) -> T {
        (self.default)()
    }
}

impl<T> Readable<T> for Atom<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn key(&self) -> &'static str {
        self.key
    }

    fn read(&self, store: &SessionStore) -> T {
        store
            .stored::<T>(self.key)
            .cloned()
            .unwrap_or_else(self.default)
    }
}

impl<T> Writable<T> for Atom<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// `Reset` restores the atom's default.
    fn write(&self, tx: &mut Transaction<'_>, value: SetValue<T>) {
        match value {
            SetValue::Value(v) => tx.put(self, v),
            SetValue::Reset => tx.clear(self),
        }
    }
}

/// A derived view over one or more atoms.
///
/// Reads are recomputed from the current atom values every time, so a
/// selector never observes a stale combination. Writes fan out through
/// `set`; the reset sentinel never reaches it.
pub struct Selector<T> {
    key: &'static str,
    get: fn(&SessionStore) -> T,
    set: fn(&mut Transaction<'_>, T),
}

impl<T> Selector<T> {
    pub const fn new(
        key: &'static str,
        get: fn(&SessionStore) -> T,
        set: fn(&mut Transaction<'_>, T),
    ) -> Self {
        Self { key, get, set }
    }
}

impl<T> Readable<T> for Selector<T> {
    fn key(&self) -> &'static str {
        self.key
    }

    fn read(&self, store: &SessionStore) -> T {
        (self.get)(store)
    }
}

impl<T> Writable<T> for Selector<T> {
    fn write(&self, tx: &mut Transaction<'_>, value: SetValue<T>) {
        if let SetValue::Value(v) = value {
            (self.set)(tx, v);
        }
    }
}
