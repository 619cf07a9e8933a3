//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for easy access.

pub use crate::{
  notification::Notification,
  observable::{self, Observable},
  observer::{BoxedObserver, DynObserver, FnMutObserver, Observer, ObserverAll},
  ops::{self, OperatorObserver},
  subscriber::{IntoSubscriber, Subscriber},
  subscription::{Subscription, SubscriptionGuard, SubscriptionLike, Teardown},
};
