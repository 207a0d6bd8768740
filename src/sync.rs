//! Mutex used by [`Deck`](crate::Deck): `std` mutex when available, spin lock
//! on `alloc`-only targets.

#[cfg(feature = "std")]
pub use self::std_mutex::Mutex;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;

#[cfg(feature = "std")]
mod std_mutex {
    use std::sync::{MutexGuard, PoisonError};

    /// A mutex whose `lock` matches the spin lock signature.
    ///
    /// The deck pool stays consistent across a panicking holder, so a
    /// poisoned lock is entered anyway.
    pub struct Mutex<T>(std::sync::Mutex<T>);

    impl<T> Mutex<T> {
        pub const fn new(value: T) -> Self {
            Self(std::sync::Mutex::new(value))
        }

        pub fn lock(&self) -> MutexGuard<'_, T> {
            self.0.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }
}
