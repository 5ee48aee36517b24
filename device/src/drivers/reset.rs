use crate::traits::reset::ResetLine;
use embedded_hal::digital::{PinState, StatefulOutputPin};

/// Reset line driven by a GPIO output pin.
pub struct GpioReset<P>
where
    P: StatefulOutputPin,
{
    pin: P,
}

impl<P> GpioReset<P>
where
    P: StatefulOutputPin,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> ResetLine for GpioReset<P>
where
    P: StatefulOutputPin,
{
    type Error = P::Error;

    fn configure(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low()
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        let high = self.pin.is_set_high()?;
        self.pin.set_state(PinState::from(!high))
    }

    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_set_high()
    }
}

impl<P> From<P> for GpioReset<P>
where
    P: StatefulOutputPin,
{
    fn from(pin: P) -> Self {
        Self::new(pin)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::testutil::TestPin;

    #[test]
    fn test_toggle() {
        let pin = TestPin::new(false);
        let mut reset = GpioReset::new(pin.clone());

        reset.toggle().unwrap();
        assert!(pin.is_high());
        assert!(reset.is_high().unwrap());

        reset.toggle().unwrap();
        assert!(!pin.is_high());
        assert_eq!(2, pin.writes());
    }

    #[test]
    fn test_configure_drives_low() {
        let pin = TestPin::new(true);
        let mut reset: GpioReset<_> = pin.clone().into();

        reset.configure().unwrap();
        assert!(!pin.is_high());
        assert_eq!(1, pin.writes());
    }
}
