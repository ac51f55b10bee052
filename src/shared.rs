//! Lamp controller shared between execution contexts.
//!
//! The controller itself is not reentrant. Hosts that reach it from more than
//! one context (a network task and a button interrupt, for example) wrap it
//! here, and every access runs inside a critical section.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::bus::SerialBus;
use crate::controller::LampController;
use crate::encoder::Encoder;

/// Critical-section guarded lamp controller.
pub struct SharedLamp<B: SerialBus, E: Encoder> {
    inner: Mutex<RefCell<LampController<B, E>>>,
}

impl<B: SerialBus, E: Encoder> SharedLamp<B, E> {
    /// Wrap an initialized controller.
    pub const fn new(lamp: LampController<B, E>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(lamp)),
        }
    }

    /// Run `f` with exclusive access to the controller.
    ///
    /// Rendering blocks on the bus, so interrupts stay masked for the whole
    /// frame when `f` changes the output.
    pub fn with<R>(&self, f: impl FnOnce(&mut LampController<B, E>) -> R) -> R {
        critical_section::with(|cs| {
            let mut lamp = self.inner.borrow(cs).borrow_mut();
            f(&mut lamp)
        })
    }

    /// Unwrap the controller.
    pub fn into_inner(self) -> LampController<B, E> {
        self.inner.into_inner().into_inner()
    }
}
