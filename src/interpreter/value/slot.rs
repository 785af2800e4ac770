use std::sync::atomic::{AtomicU64, Ordering};

/// Storage for one variable's value.
///
/// The value is kept as its bit pattern in an atomic, which makes a slot
/// `Sync`: a compiled tree that borrows it can be evaluated from several
/// threads while the owner writes new values. Writes are not ordered with
/// respect to other memory; callers that need a consistent snapshot across
/// several slots must synchronize themselves.
///
/// ## Example
/// ```
/// use exprtree::Slot;
///
/// let slot = Slot::new(1.5);
/// assert_eq!(slot.get(), 1.5);
///
/// slot.set(-2.0);
/// assert_eq!(slot.get(), -2.0);
/// ```
#[derive(Debug, Default)]
pub struct Slot(AtomicU64);

impl Slot {
    /// Creates a slot holding `value`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(AtomicU64::new(value.to_bits()))
    }

    /// Reads the current value.
    #[must_use]
    pub fn get(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    /// Replaces the current value.
    pub fn set(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl From<f64> for Slot {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
