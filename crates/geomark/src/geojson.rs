use std::io::Write;

use serde_json::{Value, json};

use crate::scatter::Marker;

pub fn to_feature(marker: &Marker) -> Value {
    let (x, y) = marker.position.x_y();
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [x, y],
        },
        "properties": {
            "title": marker.title,
            "snippet": marker.snippet,
        },
    })
}

pub fn to_feature_collection(markers: &[Marker]) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": markers.iter().map(to_feature).collect::<Vec<_>>(),
    })
}

pub fn write_feature_collection<W: Write>(writer: W, markers: &[Marker]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, &to_feature_collection(markers))
}
