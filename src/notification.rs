use crate::observer::Observer;

/// One event of the notification contract.
///
/// A stream is any number of `Next` followed by at most one of `Error` or
/// `Complete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification<Item, Err> {
  Next(Item),
  Error(Err),
  Complete,
}

impl<Item, Err> Notification<Item, Err> {
  #[inline]
  pub fn is_terminal(&self) -> bool { !matches!(self, Notification::Next(_)) }

  /// Deliver this notification to `observer`.
  ///
  /// Terminal notifications consume the observer; `Next` hands it back so the
  /// caller can keep delivering.
  pub fn accept<O>(self, mut observer: O) -> Option<O>
  where
    O: Observer<Item, Err>,
  {
    match self {
      Notification::Next(value) => {
        observer.next(value);
        Some(observer)
      }
      Notification::Error(err) => {
        observer.error(err);
        None
      }
      Notification::Complete => {
        observer.complete();
        None
      }
    }
  }
}
