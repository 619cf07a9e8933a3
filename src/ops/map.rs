use std::rc::Rc;

use crate::{observable::Observable, ops::OperatorObserver, subscriber::Subscriber};

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// Creates a new stream which calls a closure on each element and uses
  /// its return as the value.
  pub fn map<R, F>(&self, project: F) -> Observable<R, Err>
  where
    R: 'static,
    F: Fn(Item) -> R + 'static,
  {
    self.map_indexed(move |value, _| project(value))
  }

  /// Like [`map`](Self::map), but the closure also receives the zero-based
  /// position of the value within the current subscription.
  ///
  /// Each subscription counts from zero on its own.
  pub fn map_indexed<R, F>(&self, project: F) -> Observable<R, Err>
  where
    R: 'static,
    F: Fn(Item, usize) -> R + 'static,
  {
    self.try_map_indexed(move |value, index| Ok(project(value, index)))
  }

  /// Like [`map_indexed`](Self::map_indexed), with an explicit context passed
  /// to every call of `project`.
  pub fn map_with<R, C, F>(&self, context: C, project: F) -> Observable<R, Err>
  where
    R: 'static,
    C: 'static,
    F: Fn(&C, Item, usize) -> R + 'static,
  {
    self.map_indexed(move |value, index| project(&context, value, index))
  }

  /// A map whose projection can fail. An `Err` is sent downstream as the
  /// error notification and ends the subscription.
  pub fn try_map<R, F>(&self, project: F) -> Observable<R, Err>
  where
    R: 'static,
    F: Fn(Item) -> Result<R, Err> + 'static,
  {
    self.try_map_indexed(move |value, _| project(value))
  }

  pub fn try_map_indexed<R, F>(&self, project: F) -> Observable<R, Err>
  where
    R: 'static,
    F: Fn(Item, usize) -> Result<R, Err> + 'static,
  {
    let project = Rc::new(project);
    self.lift(move |destination: &Subscriber<R, Err>, source: &Observable<Item, Err>| {
      let project = project.clone();
      let mut index = 0;
      let upstream = OperatorObserver::subscriber(
        destination,
        move |destination: &Subscriber<R, Err>, value: Item| {
          let mapped = project(value, index)?;
          index += 1;
          destination.next(mapped);
          Ok(())
        },
      );
      source.subscribe(upstream);
      Ok(())
    })
  }
}
