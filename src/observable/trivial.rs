use std::convert::Infallible;

use crate::observable::Observable;

/// Creates an observable that emits no items, just terminates with an error.
///
/// # Arguments
///
/// * `err` - An error to emit and terminate with. It is cloned for every
///   subscription.
pub fn throw_err<Item, Err>(err: Err) -> Observable<Item, Err>
where
  Item: 'static,
  Err: Clone + 'static,
{
  Observable::new(move |subscriber| {
    subscriber.error(err.clone());
    Ok(())
  })
}

/// Creates an observable that produces no values.
///
/// Completes immediately. Never emits an error.
///
/// # Examples
/// ```
/// use rxlift::prelude::*;
///
/// observable::empty()
///   .subscribe(|v: i32| println!("{},", v));
///
/// // Result: no thing printed
/// ```
pub fn empty<Item: 'static>() -> Observable<Item, Infallible> {
  Observable::new(|subscriber| {
    subscriber.complete();
    Ok(())
  })
}

/// Creates an observable that never emits anything.
///
/// Neither emits a value, nor completes, nor emits an error. The subscription
/// stays open until it is unsubscribed.
pub fn never<Item: 'static>() -> Observable<Item, Infallible> { Observable::new(|_| Ok(())) }

#[cfg(test)]
mod tests {
  use std::{
    cell::{Cell, RefCell},
    rc::Rc,
  };

  use crate::prelude::*;

  #[test]
  fn throw() {
    let value_emitted = Rc::new(Cell::new(false));
    let completed = Rc::new(Cell::new(false));
    let error_emitted = Rc::new(RefCell::new(String::new()));
    let (c_value, c_completed, c_error) =
      (value_emitted.clone(), completed.clone(), error_emitted.clone());

    observable::throw_err::<i32, _>(String::from("error")).subscribe(
      ObserverAll::default()
        .on_next(move |_| c_value.set(true))
        .on_error(move |e| *c_error.borrow_mut() = e)
        .on_complete(move || c_completed.set(true)),
    );

    assert!(!value_emitted.get());
    assert!(!completed.get());
    assert_eq!(*error_emitted.borrow(), "error");
  }

  #[test]
  fn empty() {
    let hits = Rc::new(Cell::new(0));
    let completed = Rc::new(Cell::new(false));
    let (c_hits, c_completed) = (hits.clone(), completed.clone());

    observable::empty::<i32>().subscribe(
      ObserverAll::default()
        .on_next(move |_| c_hits.set(c_hits.get() + 1))
        .on_complete(move || c_completed.set(true)),
    );

    assert_eq!(hits.get(), 0);
    assert!(completed.get());
  }

  #[test]
  fn never_stays_open_until_unsubscribed() {
    let subscription = observable::never::<i32>().subscribe(|_| {});
    assert!(!subscription.is_closed());
    subscription.unsubscribe();
    assert!(subscription.is_closed());
  }
}
