//! Shared access to the board store for consumers that cannot take a handle
//! through their constructor.
//!
//! Explicit dependency injection (passing the `Rc<BoardStore>` down) is the
//! primary wiring; this module is the one sanctioned ambient fallback, a
//! process-wide provider with a narrow interface. Reading before a provider
//! is installed is a programming error and fails with a descriptive
//! [`BoardError::StoreNotProvided`] instead of returning an empty board.

use crate::error::{BoardError, Result};
use crate::store::BoardStore;
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static PROVIDED: RefCell<Option<Rc<BoardStore>>> = const { RefCell::new(None) };
}

/// Installs the store as the current thread's provider
pub fn provide(store: Rc<BoardStore>) {
    PROVIDED.with(|slot| *slot.borrow_mut() = Some(store));
}

/// Returns the provided store, failing loudly if none is installed
pub fn current() -> Result<Rc<BoardStore>> {
    PROVIDED
        .with(|slot| slot.borrow().clone())
        .ok_or(BoardError::StoreNotProvided)
}

/// Removes the provider, mirroring teardown of the owning scope
pub fn clear() {
    PROVIDED.with(|slot| slot.borrow_mut().take());
}
