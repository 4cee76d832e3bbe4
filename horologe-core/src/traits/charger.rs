//! Charger status query

/// Trait for reading whether the battery is charging
pub trait ChargerStatus {
    /// Check if the battery is currently being charged
    fn is_charging(&self) -> bool;
}

impl<T: ChargerStatus + ?Sized> ChargerStatus for &T {
    fn is_charging(&self) -> bool {
        (**self).is_charging()
    }
}
