//! Helpers shared by the unit tests.
use std::{cell::RefCell, rc::Rc};

use crate::{
  notification::Notification,
  observer::ObserverAll,
  subscriber::{IntoSubscriber, Subscriber},
};

pub(crate) type Log<Item, Err> = Rc<RefCell<Vec<Notification<Item, Err>>>>;

/// A subscriber that records every notification it receives, in order.
pub(crate) fn recording<Item: 'static, Err: 'static>() -> (Log<Item, Err>, Subscriber<Item, Err>) {
  let log: Log<Item, Err> = Rc::default();
  let (n, e, c) = (log.clone(), log.clone(), log.clone());
  let subscriber = ObserverAll::default()
    .on_next(move |v| n.borrow_mut().push(Notification::Next(v)))
    .on_error(move |err| e.borrow_mut().push(Notification::Error(err)))
    .on_complete(move || c.borrow_mut().push(Notification::Complete))
    .into_subscriber();
  (log, subscriber)
}
