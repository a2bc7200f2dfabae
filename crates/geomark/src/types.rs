use geo_types::{Coord, Point};
use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// Fallback center used when no last known location is available
/// (Osaka University, Toyonaka campus).
pub const DEFAULT_LOCATION: GeoPoint = GeoPoint::new(34.822014, 135.524468);

/// A latitude/longitude pair in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Like [`GeoPoint::new`] but rejects non-finite values and values
    /// outside `[-90, 90]` / `[-180, 180]`.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        let lat = GeoError::check_finite("lat", lat)?;
        let lng = GeoError::check_finite("lng", lng)?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::OutOfRange {
                name: "lat",
                value: lat,
                min: -90.0,
                max: 90.0,
            });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(GeoError::OutOfRange {
                name: "lng",
                value: lng,
                min: -180.0,
                max: 180.0,
            });
        }

        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// `(x, y)` in geo-types order, i.e. `(lng, lat)`.
    pub fn x_y(&self) -> (f64, f64) {
        (self.lng, self.lat)
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(value: GeoPoint) -> Self {
        Coord::from(value.x_y())
    }
}

impl From<Coord<f64>> for GeoPoint {
    fn from(value: Coord<f64>) -> Self {
        GeoPoint::new(value.y, value.x)
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(value: GeoPoint) -> Self {
        Point::new(value.lng, value.lat)
    }
}

impl From<Point<f64>> for GeoPoint {
    fn from(value: Point<f64>) -> Self {
        GeoPoint::from(value.0)
    }
}

#[cfg(test)]
mod test {
    use geo_types::{Coord, Point};
    use serde_test::{Token, assert_tokens};

    use crate::error::GeoError;

    use super::GeoPoint;

    #[test]
    fn geo_types_axis_order() {
        let point = GeoPoint::new(52.5365623, 13.3530166);

        let coord: Coord = point.into();
        assert_eq!(coord, Coord { x: 13.3530166, y: 52.5365623 });

        let geo_point: Point = point.into();
        assert_eq!(geo_point.x(), 13.3530166);
        assert_eq!(GeoPoint::from(geo_point), point);
    }

    #[test]
    fn try_new_rejects_bad_input() {
        assert_eq!(GeoPoint::try_new(90.0, -180.0), Ok(GeoPoint::new(90.0, -180.0)));
        assert!(matches!(
            GeoPoint::try_new(90.5, 0.0),
            Err(GeoError::OutOfRange { name: "lat", .. })
        ));
        assert!(matches!(
            GeoPoint::try_new(0.0, 180.1),
            Err(GeoError::OutOfRange { name: "lng", .. })
        ));
        assert!(matches!(
            GeoPoint::try_new(f64::NAN, 0.0),
            Err(GeoError::NonFinite { name: "lat", .. })
        ));
    }

    #[test]
    fn serde_layout() {
        assert_tokens(
            &GeoPoint::new(1.5, -2.5),
            &[
                Token::Struct {
                    name: "GeoPoint",
                    len: 2,
                },
                Token::Str("lat"),
                Token::F64(1.5),
                Token::Str("lng"),
                Token::F64(-2.5),
                Token::StructEnd,
            ],
        );
    }
}
