//! Non-blocking polling of a DHT sensor.
//!
//! [`DhtHelper`] owns a [`Dht`] driver and reads it at most once per
//! interval, however often [`DhtHelper::poll`] is called. Readings are
//! validated, rounded to a tenth and cached until the next read.
//!
//! Some DHT modules hang after a failed read and only recover when power
//! cycled. When constructed with a [`ResetLine`], the helper toggles that
//! line on every failed read.

use core::fmt::{Debug, Display, Formatter};

use embassy_time::{Duration, Instant};

use crate::domain::temperature::{round_tenths, Temperature};
use crate::domain::Reading;
use crate::traits::clock::Clock;
use crate::traits::dht::{Dht, Scale};
use crate::traits::reset::{NoReset, ResetLine};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
    /// Minimum time between two sensor reads.
    pub interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl Config {
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The driver returned NaN for at least one of its values.
    InvalidReading,
    /// Toggling or configuring the reset line failed.
    Reset(E),
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Error<E> {
        Error::Reset(e)
    }
}

impl<E: Debug> Display for Error<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidReading => f.write_str("invalid sensor reading"),
            Error::Reset(e) => write!(f, "reset line error: {:?}", e),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Poll {
    /// The interval has not elapsed yet, nothing was read.
    Pending,
    /// A fresh reading was taken and cached.
    Ready(Reading),
}

pub struct DhtHelper<D, C, R = NoReset>
where
    D: Dht,
    C: Clock,
    R: ResetLine,
{
    driver: D,
    clock: C,
    reset: Option<R>,
    config: Config,
    last_read: Option<Instant>,
    reading: Option<Reading>,
}

impl<D, C> DhtHelper<D, C, NoReset>
where
    D: Dht,
    C: Clock,
{
    pub fn new(driver: D, clock: C) -> Self {
        Self::with_config(driver, clock, None, Config::default())
    }
}

impl<D, C, R> DhtHelper<D, C, R>
where
    D: Dht,
    C: Clock,
    R: ResetLine,
{
    /// Helper that toggles `reset` whenever a read fails.
    pub fn with_reset(driver: D, clock: C, reset: R) -> Self {
        Self::with_config(driver, clock, Some(reset), Config::default())
    }

    pub fn with_config(driver: D, clock: C, reset: Option<R>, config: Config) -> Self {
        Self {
            driver,
            clock,
            reset,
            config,
            last_read: None,
            reading: None,
        }
    }

    /// Configure the reset line, if any, and start the driver.
    pub fn begin(&mut self) -> Result<(), Error<R::Error>> {
        if let Some(reset) = self.reset.as_mut() {
            reset.configure()?;
        }
        self.driver.begin();
        info!(
            "{:?} started, polling every {} ms",
            self.driver.kind(),
            self.config.interval.as_millis()
        );
        Ok(())
    }

    /// Read the sensor if the polling interval has elapsed since the last
    /// attempt, otherwise return [`Poll::Pending`] without touching the
    /// driver.
    ///
    /// A failed read clears the cached values and toggles the reset line.
    /// It is not retried until the interval elapses again.
    ///
    /// Both heat indices are computed from the rounded Celsius temperature,
    /// including the one requested in Fahrenheit.
    pub fn poll(&mut self) -> Result<Poll, Error<R::Error>> {
        let now = self.clock.now();
        if !self.is_due(now) {
            trace!("sensor read not due yet");
            return Ok(Poll::Pending);
        }
        self.last_read = Some(now);

        let temperature = self.driver.read_temperature(Scale::Celsius);
        let temperature_fahrenheit = self.driver.read_temperature(Scale::Fahrenheit);
        let humidity = self.driver.read_humidity();

        if temperature.is_nan() || temperature_fahrenheit.is_nan() || humidity.is_nan() {
            self.reading = None;
            warn!("failed to read from {:?} sensor", self.driver.kind());
            if let Some(reset) = self.reset.as_mut() {
                if let Err(e) = reset.toggle() {
                    error!("unable to toggle sensor reset line");
                    return Err(Error::Reset(e));
                }
                info!("toggled sensor reset line");
            }
            return Err(Error::InvalidReading);
        }

        let temperature = round_tenths(temperature);
        let temperature_fahrenheit = round_tenths(temperature_fahrenheit);
        let humidity = round_tenths(humidity);

        let heat_index = self
            .driver
            .compute_heat_index(temperature, humidity, Scale::Celsius);
        let heat_index_fahrenheit = self
            .driver
            .compute_heat_index(temperature, humidity, Scale::Fahrenheit);

        let reading = Reading {
            temperature: Temperature::new(temperature),
            temperature_fahrenheit: Temperature::new(temperature_fahrenheit),
            heat_index: Temperature::new(heat_index).round_tenths(),
            heat_index_fahrenheit: Temperature::new(heat_index_fahrenheit).round_tenths(),
            relative_humidity: humidity,
        };
        self.reading = Some(reading);

        debug!("temperature: {}°C, humidity: {}%", temperature, humidity);
        Ok(Poll::Ready(reading))
    }

    fn is_due(&self, now: Instant) -> bool {
        match self.last_read {
            None => true,
            // A clock running backwards counts as no time elapsed.
            Some(last) => now
                .checked_duration_since(last)
                .map_or(false, |elapsed| elapsed > self.config.interval),
        }
    }

    /// Change the minimum time between two sensor reads. Takes effect on the
    /// next call to [`poll`](Self::poll).
    pub fn set_interval(&mut self, interval: Duration) {
        self.config.interval = interval;
    }

    pub fn interval(&self) -> Duration {
        self.config.interval
    }

    /// True if the most recent read succeeded.
    pub fn has_valid_reading(&self) -> bool {
        self.reading.is_some()
    }

    /// The cached reading, `None` before the first read and after a failure.
    pub fn reading(&self) -> Option<Reading> {
        self.reading
    }

    pub fn temperature_c(&self) -> f32 {
        self.reading.map_or(0.0, |r| r.temperature.raw_value())
    }

    pub fn temperature_f(&self) -> f32 {
        self.reading.map_or(0.0, |r| r.temperature_fahrenheit.raw_value())
    }

    pub fn heat_index_c(&self) -> f32 {
        self.reading.map_or(0.0, |r| r.heat_index.raw_value())
    }

    pub fn heat_index_f(&self) -> f32 {
        self.reading.map_or(0.0, |r| r.heat_index_fahrenheit.raw_value())
    }

    pub fn humidity(&self) -> f32 {
        self.reading.map_or(0.0, |r| r.relative_humidity)
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Give back the driver, clock and reset line.
    pub fn release(self) -> (D, C, Option<R>) {
        (self.driver, self.clock, self.reset)
    }
}
