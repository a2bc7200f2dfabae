use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    error::GeoError,
    sample::next_double_norm,
    types::{DEFAULT_LOCATION, GeoPoint},
};

pub const CURRENT_LOCATION_TITLE: &str = "Your Location";
pub const POINT_TITLE: &str = "point";

/// Upper bound on [`ScatterParams::count`].
pub const MAX_SCATTER_COUNT: usize = 1 << 24;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: GeoPoint,
    pub title: String,
    /// Position in degrees/minutes/seconds.
    pub snippet: String,
}

impl Marker {
    pub fn new(position: GeoPoint, title: impl Into<String>) -> Self {
        Self {
            position,
            title: title.into(),
            snippet: position.to_dms_string(),
        }
    }

    pub fn current_location(position: GeoPoint) -> Self {
        Self::new(position, CURRENT_LOCATION_TITLE)
    }

    pub fn point(position: GeoPoint) -> Self {
        Self::new(position, POINT_TITLE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterParams {
    /// Number of markers to generate.
    pub count: usize,
    /// Standard deviation of the latitude offset, in degrees.
    pub lat_sigma: f64,
    /// Standard deviation of the longitude offset, in degrees.
    pub lng_sigma: f64,
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            count: 100,
            lat_sigma: 0.5,
            lng_sigma: 1.0,
        }
    }
}

impl ScatterParams {
    pub fn validate(&self) -> Result<(), GeoError> {
        if self.count > MAX_SCATTER_COUNT {
            return Err(GeoError::CountTooLarge {
                count: self.count,
                max: MAX_SCATTER_COUNT,
            });
        }
        GeoError::check_sigma("lat_sigma", self.lat_sigma)?;
        GeoError::check_sigma("lng_sigma", self.lng_sigma)?;
        Ok(())
    }
}

/// The last known location if there is one, [`DEFAULT_LOCATION`] otherwise.
pub fn resolve_center(last_known: Option<GeoPoint>) -> GeoPoint {
    match last_known {
        Some(location) => location,
        None => {
            debug!("No last known location, using {:?}", DEFAULT_LOCATION);
            DEFAULT_LOCATION
        }
    }
}

/// Scatters `params.count` point markers around `center`.
///
/// Latitude is drawn before longitude for every point. Positions are not
/// clamped, a large sigma can leave the valid coordinate range.
#[instrument(skip(rng))]
pub fn scatter<R: Rng + ?Sized>(
    center: GeoPoint,
    params: &ScatterParams,
    rng: &mut R,
) -> Result<Vec<Marker>, GeoError> {
    params.validate()?;
    GeoError::check_finite("lat", center.lat)?;
    GeoError::check_finite("lng", center.lng)?;

    let markers: Vec<Marker> = (0..params.count)
        .map(|_| {
            let lat = next_double_norm(&mut *rng, center.lat, params.lat_sigma);
            let lng = next_double_norm(&mut *rng, center.lng, params.lng_sigma);
            Marker::point(GeoPoint::new(lat, lng))
        })
        .collect();

    info!("Scattered {} markers around {}", markers.len(), center.to_dms_string());

    Ok(markers)
}
