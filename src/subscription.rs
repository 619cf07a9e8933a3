//! Subscription handles and teardown registration.
//!
//! A [`Subscription`] is the handle returned from `Observable::subscribe`; it
//! lets the caller cancel an execution early. A [`Teardown`] is a resource
//! owned by one `Subscriber` and released exactly once when it terminates.
use std::{
  fmt::{Debug, Formatter},
  rc::Rc,
};

/// Anything that can be cancelled.
pub trait SubscriptionLike {
  /// Release the resources held by this subscription. Calling it more than
  /// once has no further effect.
  fn unsubscribe(&self);

  fn is_closed(&self) -> bool;
}

// ============================================================================
// Subscription
// ============================================================================

/// A type-erased, clonable cancellation handle.
///
/// Clones refer to the same execution: unsubscribing through any of them
/// closes all of them.
#[derive(Clone, Default)]
pub struct Subscription(Option<Rc<dyn SubscriptionLike>>);

impl Subscription {
  /// A subscription with nothing to release; it reports itself as closed.
  #[inline]
  pub fn empty() -> Self { Subscription(None) }

  /// Activates "RAII" behavior for this subscription. That means
  /// `unsubscribe()` will be called automatically as soon as the returned
  /// value goes out of scope.
  ///
  /// **Attention:** If you don't assign the return value to a variable,
  /// `unsubscribe()` is called immediately, which is probably not what you
  /// want!
  pub fn unsubscribe_when_dropped(self) -> SubscriptionGuard { SubscriptionGuard::new(self) }

  pub(crate) fn from_rc(inner: Rc<dyn SubscriptionLike>) -> Self { Subscription(Some(inner)) }
}

impl SubscriptionLike for Subscription {
  #[inline]
  fn unsubscribe(&self) {
    if let Some(inner) = &self.0 {
      inner.unsubscribe();
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.0.as_ref().is_none_or(|inner| inner.is_closed()) }
}

impl Debug for Subscription {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Subscription")
      .field("is_closed", &self.is_closed())
      .finish()
  }
}

// ============================================================================
// Teardown
// ============================================================================

/// A resource registered on a `Subscriber` for release at termination.
#[derive(Default)]
pub enum Teardown {
  #[default]
  Empty,
  Fn(Box<dyn FnOnce()>),
  Subscription(Subscription),
}

impl Teardown {
  pub fn from_fn(f: impl FnOnce() + 'static) -> Self { Teardown::Fn(Box::new(f)) }

  #[inline]
  pub fn is_empty(&self) -> bool { matches!(self, Teardown::Empty) }

  /// Release the resource. Consumes the teardown so it can only run once.
  pub fn release(self) {
    match self {
      Teardown::Empty => {}
      Teardown::Fn(f) => f(),
      Teardown::Subscription(s) => s.unsubscribe(),
    }
  }
}

impl From<()> for Teardown {
  #[inline]
  fn from(_: ()) -> Self { Teardown::Empty }
}

impl From<Subscription> for Teardown {
  #[inline]
  fn from(s: Subscription) -> Self { Teardown::Subscription(s) }
}

impl Debug for Teardown {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Teardown::Empty => f.write_str("Teardown::Empty"),
      Teardown::Fn(_) => f.write_str("Teardown::Fn"),
      Teardown::Subscription(s) => f.debug_tuple("Teardown::Subscription").field(s).finish(),
    }
  }
}

// ============================================================================
// SubscriptionGuard
// ============================================================================

/// Scope-bound ownership of a subscription: dropping the guard unsubscribes
/// it. Use [`SubscriptionGuard::into_inner`] to keep the subscription alive
/// past the guard's scope.
#[derive(Debug)]
#[must_use]
pub struct SubscriptionGuard(Option<Subscription>);

impl SubscriptionGuard {
  /// Wraps an existing subscription with a guard to enable RAII behavior for
  /// it.
  pub fn new(subscription: Subscription) -> SubscriptionGuard {
    SubscriptionGuard(Some(subscription))
  }

  /// Disarm the guard and hand back the subscription.
  pub fn into_inner(mut self) -> Subscription { self.0.take().unwrap_or_default() }
}

impl Drop for SubscriptionGuard {
  #[inline]
  fn drop(&mut self) {
    if let Some(subscription) = self.0.take() {
      subscription.unsubscribe();
    }
  }
}
