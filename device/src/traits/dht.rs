use crate::domain::temperature::{Celsius, Fahrenheit, Temperature};
use num_traits::Float;

/// Members of the DHT sensor family a driver can be configured for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DhtKind {
    Dht11,
    Dht12,
    Dht21,
    Dht22,
}

impl DhtKind {
    /// The AM2301 speaks the DHT21 protocol.
    pub const AM2301: DhtKind = DhtKind::Dht21;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Scale {
    Celsius,
    Fahrenheit,
}

/// A DHT sensor driver.
///
/// The driver owns its data pin and bus timing. Failed reads are reported as
/// `f32::NAN` rather than an error; checksum failures, timeouts and a
/// disconnected sensor are indistinguishable to the caller.
pub trait Dht {
    /// The sensor model this driver was configured for.
    fn kind(&self) -> DhtKind;

    /// Prepare the data pin. Must be called before the first read.
    fn begin(&mut self);

    fn read_temperature(&mut self, scale: Scale) -> f32;

    /// Relative humidity in percent.
    fn read_humidity(&mut self) -> f32;

    /// Heat index for `temperature` and `humidity`. `scale` is the scale of
    /// both the input temperature and the result.
    fn compute_heat_index(&self, temperature: f32, humidity: f32, scale: Scale) -> f32 {
        heat_index(temperature, humidity, scale)
    }
}

/// NOAA heat index.
///
/// Uses Steadman's simple formula and switches to the Rothfusz regression,
/// with its low and high humidity adjustments, once the simple result exceeds
/// 79°F.
#[allow(clippy::excessive_precision)]
pub fn heat_index(temperature: f32, humidity: f32, scale: Scale) -> f32 {
    let t = match scale {
        Scale::Celsius => Temperature::<Celsius>::new(temperature)
            .into_fahrenheit()
            .raw_value(),
        Scale::Fahrenheit => temperature,
    };
    let rh = humidity;

    let mut hi = 0.5 * (t + 61.0 + ((t - 68.0) * 1.2) + (rh * 0.094));

    if hi > 79.0 {
        hi = -42.379 + 2.04901523 * t + 10.14333127 * rh
            - 0.22475541 * t * rh
            - 0.00683783 * t.powi(2)
            - 0.05481717 * rh.powi(2)
            + 0.00122874 * t.powi(2) * rh
            + 0.00085282 * t * rh.powi(2)
            - 0.00000199 * t.powi(2) * rh.powi(2);

        if rh < 13.0 && (80.0..=112.0).contains(&t) {
            hi -= ((13.0 - rh) * 0.25) * Float::sqrt((17.0 - Float::abs(t - 95.0)) * 0.057);
        } else if rh > 85.0 && (80.0..=87.0).contains(&t) {
            hi += ((rh - 85.0) * 0.1) * ((87.0 - t) * 0.2);
        }
    }

    match scale {
        Scale::Celsius => Temperature::<Fahrenheit>::new(hi).into_celsius().raw_value(),
        Scale::Fahrenheit => hi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(expected: f32, actual: f32) {
        assert!(
            (expected - actual).abs() < 0.01,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_simple_formula() {
        assert_close(20.02, heat_index(25.0, 60.0, Scale::Fahrenheit));
        assert_close(25.122, heat_index(25.0, 60.0, Scale::Celsius));
        assert_close(19.361, heat_index(20.0, 50.0, Scale::Celsius));
    }

    #[test]
    fn test_regression() {
        assert_close(105.922, heat_index(90.0, 70.0, Scale::Fahrenheit));
        assert_close(41.001, heat_index(32.2, 70.0, Scale::Celsius));
    }

    #[test]
    fn test_humidity_adjustments() {
        assert_close(94.132, heat_index(100.0, 10.0, Scale::Fahrenheit));
        assert_close(101.781, heat_index(85.0, 90.0, Scale::Fahrenheit));
    }

    #[test]
    fn test_am2301_alias() {
        assert_eq!(DhtKind::Dht21, DhtKind::AM2301);
    }
}
