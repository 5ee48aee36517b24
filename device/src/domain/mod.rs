pub mod temperature;

use core::fmt::{Debug, Formatter};
use temperature::*;

/// One validated acquisition, every value rounded to a tenth.
#[derive(Copy, Clone, PartialEq)]
pub struct Reading {
    pub temperature: Temperature<Celsius>,
    pub temperature_fahrenheit: Temperature<Fahrenheit>,
    pub heat_index: Temperature<Celsius>,
    /// Computed from the Celsius temperature, see [`crate::drivers::dht::DhtHelper::poll`].
    pub heat_index_fahrenheit: Temperature<Fahrenheit>,
    pub relative_humidity: f32,
}

impl Debug for Reading {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Reading")
            .field("temperature", &self.temperature)
            .field("temperature_fahrenheit", &self.temperature_fahrenheit)
            .field("heat_index", &self.heat_index)
            .field("heat_index_fahrenheit", &self.heat_index_fahrenheit)
            .field("relative_humidity", &self.relative_humidity)
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Reading {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(
            f,
            "Reading(temperature: {}, heat_index: {}, relative_humidity: {})",
            &self.temperature,
            &self.heat_index,
            &self.relative_humidity
        );
    }
}
