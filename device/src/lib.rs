#![macro_use]
#![cfg_attr(not(feature = "std"), no_std)]
//! Drogue DHT is a `no_std`, no-alloc helper for DHT temperature and humidity sensors.
//!
//! The [`DhtHelper`](drivers::dht::DhtHelper) owns a sensor driver and is polled from the
//! application's main loop. It reads the sensor at most once per interval, validates and rounds
//! the values, derives the heat index and caches the last good reading. Hardware is accessed
//! through traits so the helper runs against any HAL:
//!
//! * [`Dht`](traits::dht::Dht) for the sensor driver,
//! * [`Clock`](traits::clock::Clock) for the monotonic time source,
//! * [`ResetLine`](traits::reset::ResetLine) for the optional power-cycle pin. Any
//!   `embedded_hal::digital::StatefulOutputPin` can be used through
//!   [`GpioReset`](drivers::reset::GpioReset).
//!
//! # Example
//!
//! ```ignore
//! use drogue_dht::{drivers::dht::DhtHelper, drivers::reset::GpioReset};
//!
//! let mut dht = DhtHelper::with_reset(driver, EmbassyClock, GpioReset::new(reset_pin));
//! dht.begin()?;
//!
//! loop {
//!     if let Ok(Poll::Ready(reading)) = dht.poll() {
//!         display.show(reading.temperature, reading.relative_humidity);
//!     }
//!     // other work
//! }
//! ```

pub(crate) mod fmt;

pub mod domain;

pub mod drivers;

pub mod traits;

#[cfg(feature = "std")]
pub mod testutil;
