use crate::{observer::Observer, subscriber::Subscriber};

/// Intercepts `next` on its way to `destination` and forwards `error` and
/// `complete` unchanged.
///
/// The handler receives the destination and the upstream value; it may emit
/// zero or more values downstream. Returning `Err` sends the error downstream,
/// which terminates the destination and, through its teardown, this
/// subscriber as well.
pub struct OperatorObserver<R, Err, F> {
  destination: Subscriber<R, Err>,
  on_next: F,
}

impl<R: 'static, Err: 'static, F> OperatorObserver<R, Err, F> {
  /// Build the intercepting subscriber and register it on `destination`, so
  /// disposing downstream disposes the upstream side too.
  ///
  /// Registration happens before the caller subscribes it to a source: a
  /// synchronous source that fails halfway through finds it already closed.
  pub fn subscriber<Item>(destination: &Subscriber<R, Err>, on_next: F) -> Subscriber<Item, Err>
  where
    Item: 'static,
    F: FnMut(&Subscriber<R, Err>, Item) -> Result<(), Err> + 'static,
  {
    let upstream = Subscriber::new(OperatorObserver { destination: destination.clone(), on_next });
    destination.add(upstream.subscription());
    upstream
  }
}

impl<Item, R, Err, F> Observer<Item, Err> for OperatorObserver<R, Err, F>
where
  R: 'static,
  Err: 'static,
  F: FnMut(&Subscriber<R, Err>, Item) -> Result<(), Err>,
{
  fn next(&mut self, value: Item) {
    if let Err(err) = (self.on_next)(&self.destination, value) {
      self.destination.error(err);
    }
  }

  #[inline]
  fn error(self, err: Err) { self.destination.error(err) }

  #[inline]
  fn complete(self) { self.destination.complete() }

  #[inline]
  fn is_closed(&self) -> bool { self.destination.is_stopped() }
}
