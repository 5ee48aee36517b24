use core::convert::Infallible;

/// A digital output wired to the sensor's supply, used to power-cycle a hung
/// sensor module.
pub trait ResetLine {
    type Error;

    /// Put the line in output mode at a known level.
    fn configure(&mut self) -> Result<(), Self::Error>;

    /// Invert the current output level.
    fn toggle(&mut self) -> Result<(), Self::Error>;

    fn is_high(&mut self) -> Result<bool, Self::Error>;
}

/// Placeholder for helpers constructed without a reset line. It has no
/// values, so a `None` of it is the only thing a helper can hold.
#[derive(Debug)]
pub enum NoReset {}

impl ResetLine for NoReset {
    type Error = Infallible;

    fn configure(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }

    fn is_high(&mut self) -> Result<bool, Self::Error> {
        match *self {}
    }
}
