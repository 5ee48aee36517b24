use embassy_time::Instant;

/// Monotonic time source.
pub trait Clock {
    fn now(&self) -> Instant;
}

impl<F> Clock for F
where
    F: Fn() -> Instant,
{
    fn now(&self) -> Instant {
        self()
    }
}

/// Reads the embassy time driver linked into the application.
#[cfg(feature = "time")]
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

#[cfg(feature = "time")]
impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_clock() {
        let clock = || Instant::from_millis(1500);
        assert_eq!(Instant::from_millis(1500), clock.now());
    }

    #[cfg(feature = "time")]
    #[test]
    fn test_embassy_clock() {
        let a = EmbassyClock.now();
        let b = EmbassyClock.now();
        assert!(b >= a);
    }
}
