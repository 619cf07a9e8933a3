//! # rxlift: lift-based Reactive Extensions for Rust
//!
//! A synchronous, single-threaded implementation of the
//! [Reactive Extensions](http://reactivex.io/) core: observables, subscribers
//! with exactly-once termination, and operator composition through `lift`.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//!
//! use rxlift::prelude::*;
//!
//! let out = Rc::new(RefCell::new(vec![]));
//! let c_out = out.clone();
//!
//! observable::from_iter(1..=3)
//!   .map(|v| v * 10)
//!   .subscribe(move |v: i32| c_out.borrow_mut().push(v));
//!
//! assert_eq!(*out.borrow(), vec![10, 20, 30]);
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | Reusable description of a producer; every subscribe runs it afresh |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` events |
//! | [`Subscriber`] | Enforces the notification contract and owns teardown |
//! | [`Subscription`] | Handle to cancel an active subscription |
//!
//! Operators are built with [`Observable::lift`]; see the [`ops`] module.
//!
//! ## Logging
//!
//! Diagnostics are emitted through `tracing`. Install a subscriber in the
//! application to see them; the crate never installs one itself.
//!
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`Subscriber`]: subscriber::Subscriber
//! [`Subscription`]: subscription::Subscription
pub mod notification;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod subscriber;
pub mod subscription;

#[cfg(test)]
mod test_util;

// Re-export the prelude module
pub use prelude::*;
