//! Degrees/minutes/seconds rendering of [`GeoPoint`]s.
//!
//! Every component is truncated toward zero, so negative inputs give
//! negative components instead of a separate sign, and values just below a
//! unit boundary truncate to 59 instead of rolling over.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::types::GeoPoint;

/// One angle split into truncated degrees, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Sexagesimal {
    pub degrees: i32,
    pub minutes: i32,
    pub seconds: i32,
}

impl Sexagesimal {
    /// `as i32` truncates toward zero and saturates, NaN becomes 0.
    pub fn from_decimal(value: f64) -> Self {
        let degrees = value as i32;
        let minutes = ((value - degrees as f64) * 60.0) as i32;
        let seconds = ((value - degrees as f64 - minutes as f64 / 60.0) * 3600.0) as i32;

        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    fn write_padded(&self, f: &mut Formatter<'_>, degree_width: usize) -> fmt::Result {
        write!(
            f,
            "{:0dw$}°{:02}′{:02}″",
            self.degrees,
            self.minutes,
            self.seconds,
            dw = degree_width
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SexagesimalCoordinate {
    pub lat: Sexagesimal,
    pub lng: Sexagesimal,
}

impl From<GeoPoint> for SexagesimalCoordinate {
    fn from(point: GeoPoint) -> Self {
        Self {
            lat: Sexagesimal::from_decimal(point.lat),
            lng: Sexagesimal::from_decimal(point.lng),
        }
    }
}

impl Display for SexagesimalCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("lat: ")?;
        self.lat.write_padded(f, 2)?;
        f.write_str(", lng: ")?;
        self.lng.write_padded(f, 3)
    }
}

/// Renders `point` as `lat: DD°MM′SS″, lng: DDD°MM′SS″`.
pub fn format_coordinate(point: &GeoPoint) -> String {
    SexagesimalCoordinate::from(*point).to_string()
}

impl GeoPoint {
    pub fn to_sexagesimal(&self) -> SexagesimalCoordinate {
        SexagesimalCoordinate::from(*self)
    }

    pub fn to_dms_string(&self) -> String {
        format_coordinate(self)
    }
}
