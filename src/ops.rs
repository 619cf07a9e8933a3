//! Operators.
//!
//! Every operator is a method on [`Observable`] built with
//! [`Observable::lift`], plus a free function here of the same name that
//! returns the operator as a value for [`Observable::pipe`].
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//!
//! use rxlift::prelude::*;
//!
//! let out = Rc::new(RefCell::new(vec![]));
//! let c_out = out.clone();
//! observable::from_iter(1..=3)
//!   .pipe(ops::map(|v: i32| v + 1))
//!   .pipe(ops::map_indexed(|v: i32, i| v * i as i32))
//!   .subscribe(move |v| c_out.borrow_mut().push(v));
//!
//! assert_eq!(*out.borrow(), vec![0, 3, 8]);
//! ```
use crate::observable::Observable;

pub mod map;
pub mod operator_subscriber;

pub use operator_subscriber::OperatorObserver;

/// [`Observable::map`] as a pipeable operator.
pub fn map<Item, Err, R, F>(project: F) -> impl FnOnce(Observable<Item, Err>) -> Observable<R, Err>
where
  Item: 'static,
  Err: 'static,
  R: 'static,
  F: Fn(Item) -> R + 'static,
{
  move |source| source.map(project)
}

/// [`Observable::map_indexed`] as a pipeable operator.
pub fn map_indexed<Item, Err, R, F>(
  project: F,
) -> impl FnOnce(Observable<Item, Err>) -> Observable<R, Err>
where
  Item: 'static,
  Err: 'static,
  R: 'static,
  F: Fn(Item, usize) -> R + 'static,
{
  move |source| source.map_indexed(project)
}

/// [`Observable::map_with`] as a pipeable operator.
pub fn map_with<Item, Err, R, C, F>(
  context: C,
  project: F,
) -> impl FnOnce(Observable<Item, Err>) -> Observable<R, Err>
where
  Item: 'static,
  Err: 'static,
  R: 'static,
  C: 'static,
  F: Fn(&C, Item, usize) -> R + 'static,
{
  move |source| source.map_with(context, project)
}

/// [`Observable::try_map`] as a pipeable operator.
pub fn try_map<Item, Err, R, F>(project: F) -> impl FnOnce(Observable<Item, Err>) -> Observable<R, Err>
where
  Item: 'static,
  Err: 'static,
  R: 'static,
  F: Fn(Item) -> Result<R, Err> + 'static,
{
  move |source| source.try_map(project)
}

/// [`Observable::try_map_indexed`] as a pipeable operator.
pub fn try_map_indexed<Item, Err, R, F>(
  project: F,
) -> impl FnOnce(Observable<Item, Err>) -> Observable<R, Err>
where
  Item: 'static,
  Err: 'static,
  R: 'static,
  F: Fn(Item, usize) -> Result<R, Err> + 'static,
{
  move |source| source.try_map_indexed(project)
}
