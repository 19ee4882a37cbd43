//! Memoized async factory.

use std::cell::RefCell;
use std::future::Future;

use futures_util::future::{FutureExt, LocalBoxFuture, Shared};

type Factory<T> = Box<dyn Fn() -> LocalBoxFuture<'static, T>>;

/// A value produced by an async factory on first use and cached afterwards.
///
/// Concurrent first loads share one factory run.
pub struct Lazy<T: Clone + 'static> {
    factory: Factory<T>,
    loaded: RefCell<Option<Shared<LocalBoxFuture<'static, T>>>>,
}

impl<T: Clone + 'static> Lazy<T> {
    pub fn new<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = T> + 'static,
    {
        Self {
            factory: Box::new(move || factory().boxed_local()),
            loaded: RefCell::new(None),
        }
    }

    /// Resolve the value, running the factory only the first time.
    pub async fn load(&self) -> T {
        let pending = self
            .loaded
            .borrow_mut()
            .get_or_insert_with(|| (self.factory)().shared())
            .clone();
        pending.await
    }

    /// The value if a load has already completed.
    pub fn get(&self) -> Option<T> {
        self.loaded.borrow().as_ref().and_then(|p| p.peek().cloned())
    }
}
