//! Wraps raw geometry into `geojson::Feature`s. Every feature gets a non-null
//! property map, even when the caller has nothing to say; downstream code
//! inspects properties unconditionally.

use anyhow::Result;
use geojson::{Feature, Geometry, Value};

use geom::{LonLat, PolyLine, Ring};

/// Arbitrary key/value pairs associated with a feature; no schema.
pub type Properties = serde_json::Map<String, serde_json::Value>;

fn feature(geometry: Geometry, properties: Option<Properties>) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties.unwrap_or_default()),
        foreign_members: None,
    }
}

/// A Point feature at a single position.
pub fn point(pt: LonLat, properties: Option<Properties>) -> Feature {
    feature(Geometry::new(Value::Point(pt.to_geojson())), properties)
}

/// A LineString feature over the polyline's points, as-is. Densify first if
/// the line should look smooth.
pub fn line(pl: &PolyLine, properties: Option<Properties>) -> Feature {
    feature(pl.to_geojson(), properties)
}

/// A Polygon feature with a single outer ring. If the boundary isn't closed,
/// the first point is repeated to close it; this is the only place that
/// fixup happens. Fails on fewer than 3 boundary points.
pub fn polygon(boundary: Vec<LonLat>, properties: Option<Properties>) -> Result<Feature> {
    Ok(feature(Ring::close(boundary)?.to_geojson(), properties))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_coords(feature: &Feature) -> Vec<Vec<f64>> {
        match &feature.geometry.as_ref().unwrap().value {
            Value::Polygon(rings) => rings[0].clone(),
            x => panic!("not a polygon: {:?}", x),
        }
    }

    #[test]
    fn absent_properties_become_empty_map() {
        let feature = point(LonLat::new(103.845, 1.304), None);
        assert!(feature.properties.as_ref().unwrap().is_empty());
    }

    #[test]
    fn polygon_closes_open_boundary() {
        let feature = polygon(
            vec![
                LonLat::new(0.0, 0.0),
                LonLat::new(1.0, 0.0),
                LonLat::new(1.0, 1.0),
                LonLat::new(0.0, 1.0),
            ],
            None,
        )
        .unwrap();
        assert_eq!(
            ring_coords(&feature),
            vec![
                vec![0.0, 0.0],
                vec![1.0, 0.0],
                vec![1.0, 1.0],
                vec![0.0, 1.0],
                vec![0.0, 0.0]
            ]
        );
    }

    #[test]
    fn polygon_leaves_closed_boundary_alone() {
        let feature = polygon(
            vec![
                LonLat::new(0.0, 0.0),
                LonLat::new(1.0, 0.0),
                LonLat::new(1.0, 1.0),
                LonLat::new(0.0, 0.0),
            ],
            None,
        )
        .unwrap();
        assert_eq!(ring_coords(&feature).len(), 4);
    }

    #[test]
    fn polygon_rejects_degenerate_boundary() {
        assert!(polygon(vec![LonLat::new(0.0, 0.0), LonLat::new(1.0, 0.0)], None).is_err());
    }

    #[test]
    fn properties_pass_through() {
        let mut properties = Properties::new();
        properties.insert("name".to_string(), "Orchard Road".into());
        let feature = line(
            &PolyLine::must_new(vec![LonLat::new(103.826, 1.3), LonLat::new(103.832, 1.302)]),
            Some(properties),
        );
        assert_eq!(
            feature.property("name"),
            Some(&serde_json::Value::from("Orchard Road"))
        );
    }
}
