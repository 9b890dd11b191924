//! Writes finished layers to disk, one GeoJSON file per layer.

use std::io::Write;

use anyhow::Result;
use geojson::{FeatureCollection, GeoJson};

/// Serializes the collection and writes `<output_dir>/<layer>.geojson`,
/// creating the directory if needed. Returns the path written. There's no
/// atomicity guarantee; a failed write can leave a partial file behind.
pub fn write_layer(output_dir: &str, layer: &str, collection: FeatureCollection) -> Result<String> {
    let num_features = collection.features.len();
    let contents = serde_json::to_string_pretty(&GeoJson::FeatureCollection(collection))?;

    fs_err::create_dir_all(output_dir)?;
    let path = format!("{}/{}.geojson", output_dir, layer);
    let mut file = fs_err::File::create(&path)?;
    write!(file, "{}", contents)?;

    info!(
        "Wrote {} ({} features, {} bytes)",
        path,
        num_features,
        contents.len()
    );
    Ok(path)
}
