//! Callback handles used as component props.
//!
//! ## Usage
//!
//! Store event handlers in args structs without giving up `Clone` or
//! equality. Handles compare by identity, so two clones of one handler are
//! equal while two separately created handlers never are.
use std::{fmt, sync::Arc};

/// Shareable handler for events that carry no payload, such as blur.
#[derive(Clone)]
pub struct Callback {
    handler: Arc<dyn Fn() + Send + Sync>,
}

impl Callback {
    /// Creates a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invokes the callback.
    pub fn call(&self) {
        (self.handler)();
    }
}

impl<F> From<F> for Callback
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("handler", &Arc::as_ptr(&self.handler))
            .finish()
    }
}

/// Shareable handler for `Fn(T) -> R`, used for value-change notifications
/// and formatters.
pub struct CallbackWith<T, R = ()> {
    handler: Arc<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Creates a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invokes the callback with an argument.
    pub fn call(&self, value: T) -> R {
        (self.handler)(value)
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

// Manual impl: a derive would require `T: Clone` and `R: Clone`.
impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackWith")
            .field("handler", &Arc::as_ptr(&self.handler))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::{Callback, CallbackWith};

    #[test]
    fn callback_invokes_handler_each_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let callback = Callback::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        callback.call();
        callback.clone().call();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn callbacks_compare_by_identity() {
        let first = Callback::new(|| {});
        let second = Callback::new(|| {});
        assert_eq!(first, first.clone());
        assert_ne!(first, second);
    }

    #[test]
    fn callback_with_returns_handler_result() {
        let double = CallbackWith::new(|value: i32| value * 2);
        assert_eq!(double.call(21), 42);
        assert_eq!(double, double.clone());
    }
}
