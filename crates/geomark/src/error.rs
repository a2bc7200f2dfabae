use std::{error::Error, fmt::Display};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeoError {
    /// `name` was NaN or infinite.
    NonFinite { name: &'static str, value: f64 },
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    NegativeSigma { name: &'static str, value: f64 },
    CountTooLarge { count: usize, max: usize },
}

impl GeoError {
    pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64, GeoError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { name, value })
        }
    }

    pub(crate) fn check_sigma(name: &'static str, value: f64) -> Result<f64, GeoError> {
        let value = Self::check_finite(name, value)?;
        if value < 0.0 {
            return Err(Self::NegativeSigma { name, value });
        }
        Ok(value)
    }
}

impl Error for GeoError {}

impl Display for GeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite { name, value } => {
                write!(f, "invalid argument: {} must be finite, got {}", name, value)
            }
            Self::OutOfRange {
                name,
                value,
                min,
                max,
            } => write!(
                f,
                "invalid argument: {} = {} is outside [{}, {}]",
                name, value, min, max
            ),
            Self::NegativeSigma { name, value } => {
                write!(f, "invalid argument: {} must not be negative, got {}", name, value)
            }
            Self::CountTooLarge { count, max } => {
                write!(f, "invalid argument: count {} exceeds the limit of {}", count, max)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::GeoError;

    #[test]
    fn sigma_checks() {
        assert_eq!(GeoError::check_sigma("sigma", 0.0), Ok(0.0));
        assert_eq!(
            GeoError::check_sigma("sigma", -1.0),
            Err(GeoError::NegativeSigma {
                name: "sigma",
                value: -1.0
            })
        );
        assert!(matches!(
            GeoError::check_sigma("sigma", f64::INFINITY),
            Err(GeoError::NonFinite { name: "sigma", .. })
        ));
    }

    #[test]
    fn display_names_argument() {
        let err = GeoError::OutOfRange {
            name: "lat",
            value: 91.0,
            min: -90.0,
            max: 90.0,
        };
        assert_eq!(err.to_string(), "invalid argument: lat = 91 is outside [-90, 90]");
    }
}
