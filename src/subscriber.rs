//! Subscriber: the stateful observer every execution is delivered through.
//!
//! All observers get converted to a `Subscriber` at subscribe time. The
//! subscriber guarantees that at most one terminal notification reaches the
//! wrapped observer and that it is the last one, and it owns the teardowns of
//! the execution.
//!
//! # Reentrancy
//!
//! Callbacks run synchronously and may call back into the same chain. A
//! notification that arrives while the subscriber is already delivering to
//! its observer is put on a backlog; the outer delivery drains it in arrival
//! order once the current callback returns. An `unsubscribe` from inside a
//! callback takes effect immediately: the closed flag is checked before every
//! forward, so nothing else is delivered after it.
//!
//! An observer that reports itself closed through [`Observer::is_closed`] is
//! treated like an unsubscribe: the subscriber stops and releases its
//! teardowns, which lets upstream producers stop early.
use std::{
  cell::{Cell, RefCell},
  collections::VecDeque,
  fmt::{Debug, Formatter},
  rc::Rc,
};

use smallvec::SmallVec;

use crate::{
  notification::Notification,
  observer::{BoxedObserver, FnMutObserver, Observer, ObserverAll},
  subscription::{Subscription, SubscriptionLike, Teardown},
};

/// Implements the notification contract on top of any `Observer` and adds
/// subscription capabilities.
///
/// `Subscriber` is a cheap handle: clones share the same state. Producers keep
/// a clone to push values later; operators register upstream subscriptions
/// on it with [`Subscriber::add`].
pub struct Subscriber<Item, Err>(Rc<SubscriberCore<Item, Err>>);

struct SubscriberCore<Item, Err> {
  /// Set by the first terminal notification or by `unsubscribe`. Nothing is
  /// accepted afterwards.
  stopped: Cell<bool>,
  /// Set once teardowns have been released. Nothing is delivered afterwards.
  closed: Cell<bool>,
  destination: RefCell<Option<BoxedObserver<Item, Err>>>,
  backlog: RefCell<VecDeque<Notification<Item, Err>>>,
  teardowns: RefCell<SmallVec<[Teardown; 2]>>,
}

impl<Item: 'static, Err: 'static> Subscriber<Item, Err> {
  pub fn new(observer: impl Observer<Item, Err> + 'static) -> Self {
    Subscriber(Rc::new(SubscriberCore {
      stopped: Cell::new(false),
      closed: Cell::new(false),
      destination: RefCell::new(Some(Box::new(observer))),
      backlog: RefCell::new(VecDeque::new()),
      teardowns: RefCell::new(SmallVec::new()),
    }))
  }

  #[inline]
  pub fn next(&self, value: Item) {
    if self.0.stopped.get() {
      tracing::trace!("next dropped: subscriber already stopped");
      return;
    }
    if self.0.observer_closed() {
      tracing::trace!("next dropped: observer reported closed");
      self.0.unsubscribe();
      return;
    }
    self.0.deliver(Notification::Next(value));
  }

  #[inline]
  pub fn error(&self, err: Err) {
    if self.0.stopped.replace(true) {
      tracing::trace!("error dropped: subscriber already stopped");
      return;
    }
    self.0.deliver(Notification::Error(err));
  }

  #[inline]
  pub fn complete(&self) {
    if self.0.stopped.replace(true) {
      tracing::trace!("complete dropped: subscriber already stopped");
      return;
    }
    self.0.deliver(Notification::Complete);
  }

  /// Register a resource to release when this subscriber terminates.
  ///
  /// Teardowns are released in reverse order of registration. Adding one to
  /// a subscriber that is already closed releases it immediately. Closed
  /// subscriptions are pruned whenever the list is full.
  pub fn add(&self, teardown: impl Into<Teardown>) {
    let teardown = teardown.into();
    if teardown.is_empty() {
      return;
    }
    if self.0.closed.get() {
      teardown.release();
      return;
    }
    let mut teardowns = self.0.teardowns.borrow_mut();
    if teardowns.len() == teardowns.capacity() {
      teardowns.retain(|t| !matches!(t, Teardown::Subscription(s) if s.is_closed()));
    }
    teardowns.push(teardown);
  }

  #[inline]
  pub fn unsubscribe(&self) { self.0.unsubscribe() }

  /// True once a terminal notification was accepted, the subscriber was
  /// unsubscribed or its observer reports itself closed. Producers can poll
  /// this to stop emitting early.
  #[inline]
  pub fn is_stopped(&self) -> bool { self.0.stopped.get() || self.0.observer_closed() }

  /// True once the teardowns have been released.
  #[inline]
  pub fn is_closed(&self) -> bool { self.0.closed.get() }

  /// A cancellation handle for this subscriber.
  pub fn subscription(&self) -> Subscription {
    let core: Rc<dyn SubscriptionLike> = self.0.clone();
    Subscription::from_rc(core)
  }

  #[cfg(test)]
  pub(crate) fn teardown_len(&self) -> usize { self.0.teardowns.borrow().len() }
}

impl<Item, Err> SubscriberCore<Item, Err> {
  /// False while a delivery holds the observer; the delivering frame checks
  /// it after every `next`.
  fn observer_closed(&self) -> bool {
    self
      .destination
      .try_borrow()
      .is_ok_and(|destination| destination.as_ref().is_some_and(|o| o.is_closed()))
  }

  fn deliver(&self, notification: Notification<Item, Err>) {
    let Ok(mut destination) = self.destination.try_borrow_mut() else {
      self.backlog.borrow_mut().push_back(notification);
      return;
    };

    let mut notification = notification;
    loop {
      if self.closed.get() {
        tracing::trace!("notification dropped: subscriber closed during delivery");
        destination.take();
        self.backlog.borrow_mut().clear();
        return;
      }
      let terminal = notification.is_terminal();
      if let Some(observer) = destination.take() {
        *destination = notification.accept(observer);
      }
      if terminal {
        drop(destination);
        self.unsubscribe();
        return;
      }
      if destination.as_ref().is_some_and(|o| o.is_closed()) {
        tracing::trace!("observer reported closed, unsubscribing");
        destination.take();
        drop(destination);
        self.backlog.borrow_mut().clear();
        self.unsubscribe();
        return;
      }
      let queued = self.backlog.borrow_mut().pop_front();
      match queued {
        Some(queued) => notification = queued,
        None => break,
      }
    }

    if self.closed.get() {
      destination.take();
    }
  }

  fn unsubscribe(&self) {
    if self.closed.replace(true) {
      return;
    }
    self.stopped.set(true);
    let teardowns = std::mem::take(&mut *self.teardowns.borrow_mut());
    for teardown in teardowns.into_iter().rev() {
      teardown.release();
    }
    // While a delivery is in flight the delivering frame owns the observer and
    // drops it itself.
    if let Ok(mut destination) = self.destination.try_borrow_mut() {
      destination.take();
    }
  }
}

impl<Item, Err> SubscriptionLike for SubscriberCore<Item, Err> {
  #[inline]
  fn unsubscribe(&self) { SubscriberCore::unsubscribe(self) }

  #[inline]
  fn is_closed(&self) -> bool { self.closed.get() }
}

impl<Item, Err> Clone for Subscriber<Item, Err> {
  #[inline]
  fn clone(&self) -> Self { Subscriber(self.0.clone()) }
}

impl<Item, Err> Debug for Subscriber<Item, Err> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Subscriber")
      .field("stopped", &self.0.stopped.get())
      .field("closed", &self.0.closed.get())
      .field("teardown_count", &self.0.teardowns.borrow().len())
      .finish()
  }
}

// ============================================================================
// IntoSubscriber
// ============================================================================

/// Normalizes the shapes accepted by `subscribe` into a single `Subscriber`.
///
/// - a `Subscriber` is used as is,
/// - a bare `FnMut(Item)` closure becomes the `next` handler,
/// - an [`ObserverAll`] supplies any subset of the three callbacks.
///
/// Any other `Observer` can be passed through [`Subscriber::new`].
pub trait IntoSubscriber<Item, Err> {
  fn into_subscriber(self) -> Subscriber<Item, Err>;
}

impl<Item, Err> IntoSubscriber<Item, Err> for Subscriber<Item, Err> {
  #[inline]
  fn into_subscriber(self) -> Subscriber<Item, Err> { self }
}

impl<Item: 'static, Err: 'static, F> IntoSubscriber<Item, Err> for F
where
  F: FnMut(Item) + 'static,
{
  #[inline]
  fn into_subscriber(self) -> Subscriber<Item, Err> { Subscriber::new(FnMutObserver(self)) }
}

impl<Item: 'static, Err: 'static> IntoSubscriber<Item, Err> for ObserverAll<Item, Err> {
  #[inline]
  fn into_subscriber(self) -> Subscriber<Item, Err> { Subscriber::new(self) }
}
