// src/common/types.rs

use core::fmt;

// --- Sample ---

/// One reading from a virtual device.
///
/// Validity is binary. An invalid sample carries no value at all, so there is
/// nothing a reader could mistake for a measurement.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Sample<V> {
    Valid(V),
    Invalid,
}

impl<V> Sample<V> {
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Sample::Valid(_))
    }

    /// Returns the value of a valid sample.
    #[inline]
    pub fn value(self) -> Option<V> {
        match self {
            Sample::Valid(v) => Some(v),
            Sample::Invalid => None,
        }
    }

    /// Applies `f` to the value of a valid sample, keeping invalid samples invalid.
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Sample<U> {
        match self {
            Sample::Valid(v) => Sample::Valid(f(v)),
            Sample::Invalid => Sample::Invalid,
        }
    }
}

impl<V> From<Option<V>> for Sample<V> {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(v) => Sample::Valid(v),
            None => Sample::Invalid,
        }
    }
}

impl<V> Default for Sample<V> {
    fn default() -> Self {
        Sample::Invalid
    }
}

// --- Physical units ---
//
// Plain f32 wrappers. Callers that need a fixed-point wire format convert at
// their own boundary.

macro_rules! physical_unit {
    ($(#[$meta:meta])* $name:ident, $symbol:literal) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
        pub struct $name(f32);

        impl $name {
            pub const fn new(value: f32) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn as_f32(&self) -> f32 {
                self.0
            }
        }

        impl From<f32> for $name {
            fn from(value: f32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for f32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", self.0, $symbol)
            }
        }
    };
}

physical_unit!(
    /// Barometric pressure in hectopascal, temperature-compensated by the transducer.
    Hectopascals,
    "hPa"
);
physical_unit!(
    /// Barometric altitude in meters, corrected for sea level pressure.
    Meters,
    "m"
);
physical_unit!(
    /// Temperature in degrees Celsius.
    Celsius,
    "°C"
);
physical_unit!(
    /// Relative humidity in percent.
    RelativeHumidity,
    "%RH"
);

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_validity() {
        assert!(Sample::Valid(3u8).is_valid());
        assert!(!Sample::<u8>::Invalid.is_valid());
        assert_eq!(Sample::<u8>::default(), Sample::Invalid);
    }

    #[test]
    fn test_sample_value_and_map() {
        assert_eq!(Sample::Valid(21).value(), Some(21));
        assert_eq!(Sample::<i32>::Invalid.value(), None);
        assert_eq!(Sample::Valid(2).map(|v| v * 10), Sample::Valid(20));
        assert_eq!(Sample::<i32>::Invalid.map(|v| v * 10), Sample::Invalid);
    }

    #[test]
    fn test_sample_from_option() {
        assert_eq!(Sample::from(Some(1.5f32)), Sample::Valid(1.5));
        assert_eq!(Sample::<f32>::from(None), Sample::Invalid);
    }

    #[test]
    fn test_unit_conversions() {
        let p = Hectopascals::new(1013.25);
        assert_eq!(p.as_f32(), 1013.25);
        assert_eq!(f32::from(p), 1013.25);
        assert_eq!(Meters::from(12.0), Meters::new(12.0));
        assert!(Celsius::new(-4.0) < Celsius::new(0.0));
        assert_eq!(RelativeHumidity::default().as_f32(), 0.0);
    }
}
