pub mod error;
pub mod format;
pub mod geojson;
pub mod sample;
pub mod scatter;
pub mod types;

pub use error::GeoError;
pub use format::{Sexagesimal, SexagesimalCoordinate, format_coordinate};
pub use sample::{IrwinHall, next_double_norm};
pub use scatter::{Marker, ScatterParams, resolve_center, scatter};
pub use types::{DEFAULT_LOCATION, GeoPoint};
