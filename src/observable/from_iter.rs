use std::convert::Infallible;

use crate::observable::Observable;

/// Creates an observable that produces values from an iterator.
///
/// Completes when all elements have been emitted. Never emits an error.
/// Emission stops early once the subscriber is stopped.
///
/// # Arguments
///
/// * `iter` - An iterator to get all the values from. It is cloned for every
///   subscription.
///
/// # Examples
///
/// A simple example for a range:
///
/// ```
/// use rxlift::prelude::*;
///
/// observable::from_iter(0..10)
///   .subscribe(|v: i32| println!("{},", v));
/// ```
///
/// Or with a vector:
///
/// ```
/// use rxlift::prelude::*;
///
/// observable::from_iter(vec![0, 1, 2, 3])
///   .subscribe(|v: i32| println!("{},", v));
/// ```
pub fn from_iter<Iter>(iter: Iter) -> Observable<Iter::Item, Infallible>
where
  Iter: IntoIterator + Clone + 'static,
  Iter::Item: 'static,
{
  Observable::new(move |subscriber| {
    for v in iter.clone() {
      if subscriber.is_stopped() {
        break;
      }
      subscriber.next(v);
    }
    subscriber.complete();
    Ok(())
  })
}

/// Creates an observable producing a single value.
///
/// Completes immediately after emitting the value given. Never emits an error.
///
/// ```
/// use rxlift::prelude::*;
///
/// observable::of(123)
///   .subscribe(|v: i32| println!("{},", v));
/// ```
pub fn of<Item>(v: Item) -> Observable<Item, Infallible>
where
  Item: Clone + 'static,
{
  from_iter(std::iter::once(v))
}

/// Creates an observable producing same value repeated N times.
///
/// Completes immediately after emitting N values. Never emits an error.
pub fn repeat<Item>(v: Item, n: usize) -> Observable<Item, Infallible>
where
  Item: Clone + 'static,
{
  from_iter(std::iter::repeat(v).take(n))
}

/// Creates an observable from an iterator of results.
///
/// `Ok` values are emitted in order; the first `Err` is emitted as the error
/// notification and ends the stream. Completes if no `Err` is met.
///
/// ```
/// use rxlift::prelude::*;
///
/// observable::from_results::<_, i32, String>(vec![Ok(1), Err("bad".to_string()), Ok(3)])
///   .subscribe(ObserverAll::default().on_next(|v: i32| println!("{v}")).on_error(|e: String| eprintln!("{e}")));
/// ```
pub fn from_results<Iter, Item, Err>(iter: Iter) -> Observable<Item, Err>
where
  Iter: IntoIterator<Item = Result<Item, Err>> + Clone + 'static,
  Item: 'static,
  Err: 'static,
{
  Observable::new(move |subscriber| {
    for v in iter.clone() {
      if subscriber.is_stopped() {
        break;
      }
      match v {
        Ok(v) => subscriber.next(v),
        Err(err) => {
          subscriber.error(err);
          return Ok(());
        }
      }
    }
    subscriber.complete();
    Ok(())
  })
}
