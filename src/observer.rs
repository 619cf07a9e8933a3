//! Observer trait and implementations
//!
//! The Observer trait defines the consumer of data in the reactive pattern.
//! It provides three methods: next (for values), error (for errors), and
//! complete (for stream completion).

// ============================================================================
// Observer Trait
// ============================================================================

/// Observer trait: The consumer of data in reactive programming
///
/// An Observer receives values, errors, and completion notifications from
/// an Observable.
pub trait Observer<Item, Err> {
  /// Receive the next value from the observable
  fn next(&mut self, value: Item);

  /// Handle an error from the observable
  ///
  /// This consumes the observer, as no more values can be emitted after an
  /// error
  fn error(self, err: Err);

  /// Handle completion of the observable
  ///
  /// This consumes the observer, as no more values can be emitted after
  /// completion
  fn complete(self);

  /// Checks if the observer is closed.
  ///
  /// A `Subscriber` asks this after every value it delivers; once it returns
  /// true the subscriber unsubscribes, so producers polling
  /// `Subscriber::is_stopped` stop emitting early.
  fn is_closed(&self) -> bool;
}

// ============================================================================
// DynObserver Trait - Object-safe Observer
// ============================================================================

/// Helper trait to enable object-safe Observers (Box<dyn Observer>)
///
/// Standard Observer trait is not object-safe because its terminal methods
/// take `self` by value. DynObserver mirrors the interface but adapts it for
/// vtables.
pub trait DynObserver<Item, Err> {
  fn box_next(&mut self, value: Item);
  fn box_error(self: Box<Self>, err: Err);
  fn box_complete(self: Box<Self>);
  fn box_is_closed(&self) -> bool;
}

impl<T, Item, Err> DynObserver<Item, Err> for T
where
  T: Observer<Item, Err>,
{
  fn box_next(&mut self, value: Item) { self.next(value); }
  fn box_error(self: Box<Self>, err: Err) { self.error(err); }
  fn box_complete(self: Box<Self>) { self.complete(); }
  fn box_is_closed(&self) -> bool { self.is_closed() }
}

/// Boxed observer, the erased form a `Subscriber` stores as its destination.
pub type BoxedObserver<Item, Err> = Box<dyn DynObserver<Item, Err>>;

impl<Item, Err> Observer<Item, Err> for BoxedObserver<Item, Err> {
  #[inline]
  fn next(&mut self, value: Item) { (**self).box_next(value) }

  #[inline]
  fn error(self, err: Err) { self.box_error(err) }

  #[inline]
  fn complete(self) { self.box_complete() }

  #[inline]
  fn is_closed(&self) -> bool { (**self).box_is_closed() }
}

// ============================================================================
// FnMutObserver - Closure adapter
// ============================================================================

/// Observer built from a bare `next` closure.
///
/// This enables ergonomic subscription syntax: `observable.subscribe(|v|
/// println!("{}", v))`. Completion is ignored; an error has nowhere to go, so
/// it is dropped with a warning.
#[derive(Clone)]
pub struct FnMutObserver<F>(pub F);

impl<F, Item, Err> Observer<Item, Err> for FnMutObserver<F>
where
  F: FnMut(Item),
{
  #[inline]
  fn next(&mut self, v: Item) { (self.0)(v); }

  fn error(self, _err: Err) {
    tracing::warn!("error notification reached an observer without an error handler");
  }

  #[inline]
  fn complete(self) {}

  #[inline]
  fn is_closed(&self) -> bool { false }
}

// ============================================================================
// ObserverAll - Partial observer built from optional callbacks
// ============================================================================

/// An observer assembled from any subset of `next`, `error` and `complete`
/// callbacks. Unsupplied channels are no-ops, except that an unhandled error
/// is logged.
///
/// ```rust
/// use rxlift::prelude::*;
///
/// let observer = ObserverAll::default()
///   .on_next(|v: i32| println!("{v}"))
///   .on_error(|e: String| eprintln!("{e}"))
///   .on_complete(|| println!("done"));
/// # let _ = observer;
/// ```
pub struct ObserverAll<Item, Err> {
  next: Option<Box<dyn FnMut(Item)>>,
  error: Option<Box<dyn FnOnce(Err)>>,
  complete: Option<Box<dyn FnOnce()>>,
}

impl<Item, Err> Default for ObserverAll<Item, Err> {
  fn default() -> Self { Self { next: None, error: None, complete: None } }
}

impl<Item, Err> ObserverAll<Item, Err> {
  pub fn on_next(mut self, next: impl FnMut(Item) + 'static) -> Self {
    self.next = Some(Box::new(next));
    self
  }

  pub fn on_error(mut self, error: impl FnOnce(Err) + 'static) -> Self {
    self.error = Some(Box::new(error));
    self
  }

  pub fn on_complete(mut self, complete: impl FnOnce() + 'static) -> Self {
    self.complete = Some(Box::new(complete));
    self
  }
}

impl<Item, Err> Observer<Item, Err> for ObserverAll<Item, Err> {
  fn next(&mut self, value: Item) {
    if let Some(next) = self.next.as_mut() {
      next(value);
    }
  }

  fn error(self, err: Err) {
    match self.error {
      Some(error) => error(err),
      None => {
        tracing::warn!("error notification reached an observer without an error handler")
      }
    }
  }

  fn complete(self) {
    if let Some(complete) = self.complete {
      complete();
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { false }
}

// ============================================================================
// Tests
// ============================================================================
