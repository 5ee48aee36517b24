//! Test doubles for the sensor driver, the clock and GPIO pins.

use crate::traits::clock::Clock;
use crate::traits::dht::{heat_index, Dht, DhtKind, Scale};
use core::cell::{Cell, RefCell};
use embassy_time::Instant;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin, StatefulOutputPin};
use std::rc::Rc;
use std::vec::Vec;

/// Values returned by the next reads of a [`TestDriver`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TestReading {
    pub temperature: f32,
    pub temperature_fahrenheit: f32,
    pub humidity: f32,
}

impl TestReading {
    pub fn new(temperature: f32, temperature_fahrenheit: f32, humidity: f32) -> Self {
        Self {
            temperature,
            temperature_fahrenheit,
            humidity,
        }
    }

    /// A reading where every value is NaN, as returned by a hung sensor.
    pub fn failed() -> Self {
        Self::new(f32::NAN, f32::NAN, f32::NAN)
    }
}

/// A driver returning whatever reading it was last given, counting calls.
pub struct TestDriver {
    kind: DhtKind,
    reading: TestReading,
    pub begin_calls: usize,
    pub celsius_reads: usize,
    pub fahrenheit_reads: usize,
    pub humidity_reads: usize,
    heat_index_args: RefCell<Vec<(f32, f32, Scale)>>,
}

impl TestDriver {
    pub fn new(kind: DhtKind, reading: TestReading) -> Self {
        Self {
            kind,
            reading,
            begin_calls: 0,
            celsius_reads: 0,
            fahrenheit_reads: 0,
            humidity_reads: 0,
            heat_index_args: RefCell::new(Vec::new()),
        }
    }

    pub fn set_reading(&mut self, reading: TestReading) {
        self.reading = reading;
    }

    /// Total number of temperature and humidity reads.
    pub fn reads(&self) -> usize {
        self.celsius_reads + self.fahrenheit_reads + self.humidity_reads
    }

    /// Arguments of every `compute_heat_index` call, in order.
    pub fn heat_index_args(&self) -> Vec<(f32, f32, Scale)> {
        self.heat_index_args.borrow().clone()
    }
}

impl Dht for TestDriver {
    fn kind(&self) -> DhtKind {
        self.kind
    }

    fn begin(&mut self) {
        self.begin_calls += 1;
    }

    fn read_temperature(&mut self, scale: Scale) -> f32 {
        match scale {
            Scale::Celsius => {
                self.celsius_reads += 1;
                self.reading.temperature
            }
            Scale::Fahrenheit => {
                self.fahrenheit_reads += 1;
                self.reading.temperature_fahrenheit
            }
        }
    }

    fn read_humidity(&mut self) -> f32 {
        self.humidity_reads += 1;
        self.reading.humidity
    }

    fn compute_heat_index(&self, temperature: f32, humidity: f32, scale: Scale) -> f32 {
        self.heat_index_args
            .borrow_mut()
            .push((temperature, humidity, scale));
        heat_index(temperature, humidity, scale)
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Clone, Default)]
pub struct TestClock {
    millis: Rc<Cell<u64>>,
}

impl TestClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_millis(&self, millis: u64) {
        self.millis.set(millis);
    }

    pub fn advance_millis(&self, millis: u64) {
        self.millis.set(self.millis.get() + millis);
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.millis.get())
    }
}

struct InnerPin {
    level: Cell<bool>,
    writes: Cell<usize>,
    fail: Cell<bool>,
}

/// An output pin recording its level and the number of writes. Clones share
/// the same pin, so a test can keep one while the helper owns another.
#[derive(Clone)]
pub struct TestPin {
    inner: Rc<InnerPin>,
}

impl TestPin {
    pub fn new(initial: bool) -> Self {
        Self {
            inner: Rc::new(InnerPin {
                level: Cell::new(initial),
                writes: Cell::new(0),
                fail: Cell::new(false),
            }),
        }
    }

    pub fn is_high(&self) -> bool {
        self.inner.level.get()
    }

    pub fn writes(&self) -> usize {
        self.inner.writes.get()
    }

    /// Make every following pin operation fail.
    pub fn fail(&self) {
        self.inner.fail.set(true);
    }

    fn check(&self) -> Result<(), ErrorKind> {
        if self.inner.fail.get() {
            Err(ErrorKind::Other)
        } else {
            Ok(())
        }
    }

    fn write(&mut self, level: bool) -> Result<(), ErrorKind> {
        self.check()?;
        self.inner.level.set(level);
        self.inner.writes.set(self.inner.writes.get() + 1);
        Ok(())
    }
}

impl ErrorType for TestPin {
    type Error = ErrorKind;
}

impl OutputPin for TestPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}

impl StatefulOutputPin for TestPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        self.check()?;
        Ok(self.inner.level.get())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        self.is_set_high().map(|high| !high)
    }
}

/// A clock built from a closure, for tests that need an arbitrary time source.
pub fn fixed_clock(millis: u64) -> impl Fn() -> Instant {
    move || Instant::from_millis(millis)
}
