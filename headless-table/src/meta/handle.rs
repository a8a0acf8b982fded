use std::sync::{Arc, PoisonError, RwLock};

/// Shared handle to one piece of plugin metadata.
///
/// Cloning the handle is cheap and every clone refers to the same value;
/// two lookups for the same entity and plugin return handles for which
/// [`Meta::ptr_eq`] holds.
#[derive(Debug)]
pub struct Meta<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Meta<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Read the value through a closure.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Mutate the value through a closure.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.read(T::clone)
    }

    /// Whether both handles refer to the same metadata object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for Meta<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
