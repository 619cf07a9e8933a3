//! Observable: a reusable description of how to produce values.
//!
//! An `Observable` holds a single setup function. Nothing happens until
//! [`Observable::subscribe`] is called; every call runs the setup function
//! again with a fresh [`Subscriber`], so each subscription is an independent
//! execution with its own state.
use std::rc::Rc;

use crate::{
  subscriber::{IntoSubscriber, Subscriber},
  subscription::{Subscription, Teardown},
};

mod from_iter;
mod trivial;

pub use from_iter::*;
pub use trivial::*;

type Setup<Item, Err> = dyn Fn(&Subscriber<Item, Err>) -> Result<Teardown, Err>;

/// A representation of any set of values over any amount of time. This is the
/// most basic building block of rxlift.
pub struct Observable<Item, Err> {
  setup: Rc<Setup<Item, Err>>,
}

impl<Item, Err> Clone for Observable<Item, Err> {
  #[inline]
  fn clone(&self) -> Self { Observable { setup: self.setup.clone() } }
}

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// param `setup`: the function that is called each time the Observable is
  /// subscribed to. It is given a Subscriber, to which new values can be
  /// `next`ed, or `error` can be called to raise an error, or `complete` can
  /// be called to notify of a successful completion.
  ///
  /// The function returns the teardown the subscription should own, or an
  /// error which is delivered to the subscriber instead of being returned to
  /// the caller of `subscribe`.
  ///
  /// ```rust
  /// use rxlift::prelude::*;
  ///
  /// let numbers = Observable::<i32, String>::new(|subscriber| {
  ///   subscriber.next(1);
  ///   subscriber.next(2);
  ///   subscriber.complete();
  ///   Ok(Teardown::from_fn(|| println!("released")))
  /// });
  /// numbers.subscribe(|v: i32| println!("{v}"));
  /// ```
  pub fn new<F, T>(setup: F) -> Self
  where
    F: Fn(&Subscriber<Item, Err>) -> Result<T, Err> + 'static,
    T: Into<Teardown>,
  {
    let setup: Rc<Setup<Item, Err>> =
      Rc::new(move |subscriber: &Subscriber<Item, Err>| -> Result<Teardown, Err> {
        setup(subscriber).map(Into::into)
      });
    Observable { setup }
  }

  /// Invokes an execution of an Observable and registers the observer for the
  /// notifications it will emit.
  ///
  /// Accepts a bare `next` closure, an [`ObserverAll`](crate::observer::ObserverAll)
  /// or a ready-made [`Subscriber`]. The returned [`Subscription`] cancels the
  /// execution.
  pub fn subscribe(&self, observer: impl IntoSubscriber<Item, Err>) -> Subscription {
    let subscriber = observer.into_subscriber();
    if subscriber.is_stopped() {
      tracing::trace!("subscribe skipped: subscriber already stopped");
      return subscriber.subscription();
    }
    match (self.setup)(&subscriber) {
      Ok(teardown) => subscriber.add(teardown),
      Err(err) => {
        if subscriber.is_stopped() {
          tracing::debug!("setup error dropped: subscriber already stopped");
        }
        subscriber.error(err);
      }
    }
    subscriber.subscription()
  }

  /// Create a new Observable whose setup hands every destination subscriber,
  /// together with this source, to `operator`.
  ///
  /// The operator subscribes to the source, usually through an
  /// [`OperatorObserver`](crate::ops::OperatorObserver), and returns whatever
  /// teardown the destination must own. It never has to check whether the
  /// destination is still open; the destination drops late notifications.
  pub fn lift<R, E, F, T>(&self, operator: F) -> Observable<R, E>
  where
    R: 'static,
    E: 'static,
    F: Fn(&Subscriber<R, E>, &Observable<Item, Err>) -> Result<T, E> + 'static,
    T: Into<Teardown>,
  {
    let source = self.clone();
    Observable::new(move |destination: &Subscriber<R, E>| operator(destination, &source))
  }

  /// Apply an operator function, left to right.
  ///
  /// `source.pipe(ops::map(f))` is the same as `source.map(f)`.
  #[inline]
  pub fn pipe<O>(self, operator: impl FnOnce(Self) -> O) -> O { operator(self) }
}

#[cfg(test)]
mod tests {
  use std::{
    cell::{Cell, RefCell},
    convert::Infallible,
    rc::Rc,
  };

  use tracing_test::traced_test;

  use crate::prelude::*;

  #[test]
  fn proxy_call() {
    let next = Rc::new(Cell::new(0));
    let err = Rc::new(Cell::new(0));
    let complete = Rc::new(Cell::new(0));
    let (c_next, c_err, c_complete) = (next.clone(), err.clone(), complete.clone());

    Observable::<i32, &str>::new(|subscriber| {
      subscriber.next(1);
      subscriber.next(2);
      subscriber.next(3);
      subscriber.complete();
      subscriber.next(3);
      subscriber.error("never dispatch error");
      Ok(())
    })
    .subscribe(
      ObserverAll::default()
        .on_next(move |_| c_next.set(c_next.get() + 1))
        .on_error(move |_| c_err.set(c_err.get() + 1))
        .on_complete(move || c_complete.set(c_complete.get() + 1)),
    );

    assert_eq!(next.get(), 3);
    assert_eq!(complete.get(), 1);
    assert_eq!(err.get(), 0);
  }

  #[test]
  fn resubscribe_runs_setup_again() {
    let runs = Rc::new(Cell::new(0));
    let c_runs = runs.clone();
    let o = Observable::<i32, ()>::new(move |subscriber| {
      c_runs.set(c_runs.get() + 1);
      subscriber.next(c_runs.get());
      Ok(())
    });
    let sum = Rc::new(Cell::new(0));
    let (s1, s2) = (sum.clone(), sum.clone());

    o.subscribe(move |v: i32| s1.set(s1.get() + v));
    o.subscribe(move |v: i32| s2.set(s2.get() + v));

    assert_eq!(runs.get(), 2);
    assert_eq!(sum.get(), 3);
  }

  #[test]
  fn setup_error_becomes_error_notification() {
    let err = Rc::new(RefCell::new(None));
    let c_err = err.clone();
    let o = Observable::<i32, String>::new(|subscriber| {
      subscriber.next(1);
      Err::<(), _>("setup failed".to_string())
    });

    let subscription = o.subscribe(
      ObserverAll::default().on_error(move |e| *c_err.borrow_mut() = Some(e)),
    );

    assert_eq!(err.borrow().as_deref(), Some("setup failed"));
    assert!(subscription.is_closed());
  }

  #[test]
  fn setup_error_after_complete_is_dropped() {
    let errors = Rc::new(Cell::new(0));
    let c_errors = errors.clone();
    Observable::<i32, &str>::new(|subscriber| {
      subscriber.complete();
      Err::<(), _>("late")
    })
    .subscribe(ObserverAll::default().on_error(move |_| c_errors.set(c_errors.get() + 1)));

    assert_eq!(errors.get(), 0);
  }

  #[test]
  fn returned_teardown_runs_on_unsubscribe() {
    let released = Rc::new(Cell::new(0));
    let c_released = released.clone();
    let o = Observable::<i32, ()>::new(move |_| {
      let c_released = c_released.clone();
      Ok(Teardown::from_fn(move || c_released.set(c_released.get() + 1)))
    });

    let subscription = o.subscribe(|_| {});
    assert_eq!(released.get(), 0);
    subscription.unsubscribe();
    subscription.unsubscribe();
    assert_eq!(released.get(), 1);
  }

  #[test]
  fn returned_teardown_runs_at_once_when_completed_synchronously() {
    let released = Rc::new(Cell::new(false));
    let c_released = released.clone();
    let o = Observable::<i32, ()>::new(move |subscriber| {
      subscriber.complete();
      let c_released = c_released.clone();
      Ok(Teardown::from_fn(move || c_released.set(true)))
    });

    o.subscribe(|_| {});
    assert!(released.get());
  }

  #[test]
  fn producer_can_push_after_subscribe_returns() {
    let held: Rc<RefCell<Option<Subscriber<i32, ()>>>> = Rc::default();
    let c_held = held.clone();
    let o = Observable::<i32, ()>::new(move |subscriber| {
      *c_held.borrow_mut() = Some(subscriber.clone());
      Ok(())
    });
    let seen = Rc::new(RefCell::new(vec![]));
    let c_seen = seen.clone();

    let subscription = o.subscribe(move |v| c_seen.borrow_mut().push(v));
    let producer = held.borrow_mut().take().expect("setup ran");
    producer.next(1);
    producer.next(2);
    subscription.unsubscribe();
    producer.next(3);
    producer.complete();

    assert_eq!(*seen.borrow(), vec![1, 2]);
  }

  #[test]
  fn unsubscribed_subscriber_skips_setup() {
    let runs = Rc::new(Cell::new(0));
    let c_runs = runs.clone();
    let o = Observable::<i32, ()>::new(move |_| {
      c_runs.set(c_runs.get() + 1);
      Ok(())
    });
    let subscriber = Subscriber::new(FnMutObserver(|_: i32| {}));
    subscriber.unsubscribe();

    o.subscribe(subscriber);
    assert_eq!(runs.get(), 0);
  }

  #[test]
  fn lift_hands_destination_and_source() {
    let out = Rc::new(RefCell::new(vec![]));
    let c_out = out.clone();
    let doubled = observable::from_iter(1..=3).lift(|destination: &Subscriber<i32, Infallible>, source| {
      let destination = destination.clone();
      let inner = destination.clone();
      let upstream = Subscriber::new(
        ObserverAll::default()
          .on_next(move |v: i32| inner.next(v * 2))
          .on_complete(move || destination.complete()),
      );
      Ok(source.subscribe(upstream))
    });

    doubled.subscribe(move |v| c_out.borrow_mut().push(v));
    assert_eq!(*out.borrow(), vec![2, 4, 6]);
  }

  #[test]
  fn pipe_applies_operators_in_order() {
    let out = Rc::new(RefCell::new(vec![]));
    let c_out = out.clone();
    observable::from_iter(1..=2)
      .pipe(ops::map(|v: i32| v * 10))
      .pipe(ops::map(|v: i32| v + 1))
      .subscribe(move |v| c_out.borrow_mut().push(v));
    assert_eq!(*out.borrow(), vec![11, 21]);
  }

  #[test]
  #[traced_test]
  fn unhandled_error_is_logged() {
    observable::throw_err::<i32, _>("boom").subscribe(|_| {});
    assert!(logs_contain("without an error handler"));
  }
}
