//! One generation step per thematic layer, run in a fixed order by
//! `generate`. Steps are independent of each other, except that the signal
//! step samples derived junctions from the expressway step's densified
//! polylines -- that dependency is passed explicitly, never through shared
//! state.

use anyhow::{Context, Result};
use geojson::{Feature, FeatureCollection};

use geom::{LonLat, PolyLine};

use crate::features::{self, Properties};
use crate::model::{CityMap, Park};

/// Interpolated points per waypoint pair, per category. Expressways span the
/// whole island with sparse waypoints, so they get the most.
pub const EXPRESSWAY_DENSITY: usize = 10;
pub const ARTERIAL_DENSITY: usize = 8;
pub const CYCLEWAY_DENSITY: usize = 8;

/// Half the edge of a synthesized building footprint, in degrees (about 30m).
pub const BUILDING_HALF_SIZE: f64 = 0.0003;

/// Runs every generation step in order and pairs each layer name with its
/// outcome. A failed step only loses that layer; the rest still generate.
pub fn generate(city: &CityMap) -> Vec<(&'static str, Result<FeatureCollection>)> {
    let mut layers = Vec::new();

    // The signal step samples the dense expressway geometry, so compute and
    // retain it first. If expressways fail, signals fall back to just the
    // hand-placed junctions.
    let dense_expressways = match expressways(city) {
        Ok((collection, dense)) => {
            layers.push(("expressways", Ok(collection)));
            dense
        }
        Err(err) => {
            layers.push(("expressways", Err(err)));
            Vec::new()
        }
    };

    layers.push(("arterials", arterials(city)));
    layers.push(("traffic_signals", signals(city, &dense_expressways)));
    layers.push(("parks", parks(city)));
    layers.push(("industrial", industrial(city)));
    layers.push(("buildings", buildings(city)));
    layers.push(("cycleways", cycleways(city)));
    layers
}

/// Also returns each expressway's densified polyline, for the signal step.
pub fn expressways(city: &CityMap) -> Result<(FeatureCollection, Vec<(String, PolyLine)>)> {
    let mut features = Vec::new();
    let mut dense = Vec::new();
    for road in &city.expressways {
        let pl = PolyLine::new(road.waypoints.clone())
            .with_context(|| format!("expressway {}", road.name))?
            .densify(EXPRESSWAY_DENSITY);

        let mut properties = Properties::new();
        properties.insert("name".to_string(), road.name.clone().into());
        properties.insert("highway".to_string(), "motorway".into());
        properties.insert("ref".to_string(), road.name.clone().into());
        properties.insert("lanes".to_string(), road.lanes.to_string().into());
        features.push(features::line(&pl, Some(properties)));

        dense.push((road.name.clone(), pl));
    }
    Ok((collection(features), dense))
}

pub fn arterials(city: &CityMap) -> Result<FeatureCollection> {
    let mut features = Vec::new();
    for road in &city.arterials {
        let pl = PolyLine::new(road.waypoints.clone())
            .with_context(|| format!("arterial {}", road.name))?
            .densify(ARTERIAL_DENSITY);

        let mut properties = Properties::new();
        properties.insert("name".to_string(), road.name.clone().into());
        properties.insert("highway".to_string(), "primary".into());
        features.push(features::line(&pl, Some(properties)));
    }
    Ok(collection(features))
}

/// Hand-placed junctions, plus one derived signal per `signal_stride` vertices
/// of each densified expressway. A dense polyline of M points yields
/// ceil(M / stride) derived signals, each exactly on an expressway vertex.
pub fn signals(
    city: &CityMap,
    dense_expressways: &[(String, PolyLine)],
) -> Result<FeatureCollection> {
    assert!(city.signal_stride >= 1, "signal_stride must be at least 1");

    let mut features = Vec::new();
    for junction in &city.junctions {
        features.push(signal_feature(junction.pt, &junction.name));
    }
    for (name, pl) in dense_expressways {
        for pt in pl.points().iter().step_by(city.signal_stride) {
            features.push(signal_feature(*pt, &format!("{} Junction", name)));
        }
    }
    Ok(collection(features))
}

fn signal_feature(pt: LonLat, name: &str) -> Feature {
    let mut properties = Properties::new();
    properties.insert("highway".to_string(), "traffic_signals".into());
    properties.insert("name".to_string(), name.into());
    features::point(pt, Some(properties))
}

/// Area parks wrap their sketched boundary directly; corridor parks buffer
/// their spine into a constant-width ribbon first.
pub fn parks(city: &CityMap) -> Result<FeatureCollection> {
    let mut features = Vec::new();
    for park in &city.parks {
        let boundary = match park {
            Park::Area { boundary, .. } => boundary.clone(),
            Park::Corridor { spine, width, .. } => PolyLine::new(spine.clone())
                .and_then(|pl| pl.buffer(*width))
                .with_context(|| format!("park {}", park.name()))?
                .into_points(),
        };

        let mut properties = Properties::new();
        properties.insert("name".to_string(), park.name().into());
        properties.insert("leisure".to_string(), "park".into());
        features.push(
            features::polygon(boundary, Some(properties))
                .with_context(|| format!("park {}", park.name()))?,
        );
    }
    Ok(collection(features))
}

pub fn industrial(city: &CityMap) -> Result<FeatureCollection> {
    let mut features = Vec::new();
    for zone in &city.industrial_zones {
        let mut properties = Properties::new();
        properties.insert("name".to_string(), zone.name.clone().into());
        properties.insert("landuse".to_string(), "industrial".into());
        features.push(
            features::polygon(zone.boundary.clone(), Some(properties))
                .with_context(|| format!("industrial zone {}", zone.name))?,
        );
    }
    Ok(collection(features))
}

/// Square footprints around each cluster center. The downstream street canyon
/// calculation only needs dense zones near roads, not real building shapes.
pub fn buildings(city: &CityMap) -> Result<FeatureCollection> {
    let mut features = Vec::new();
    for center in &city.building_centers {
        let s = BUILDING_HALF_SIZE;
        let footprint = vec![
            center.offset(-s, -s),
            center.offset(s, -s),
            center.offset(s, s),
            center.offset(-s, s),
        ];

        let mut properties = Properties::new();
        properties.insert("building".to_string(), "yes".into());
        features.push(
            features::polygon(footprint, Some(properties))
                .with_context(|| format!("building at {}", center))?,
        );
    }
    Ok(collection(features))
}

pub fn cycleways(city: &CityMap) -> Result<FeatureCollection> {
    let mut features = Vec::new();
    for road in &city.cycleways {
        let pl = PolyLine::new(road.waypoints.clone())
            .with_context(|| format!("cycleway {}", road.name))?
            .densify(CYCLEWAY_DENSITY);

        let mut properties = Properties::new();
        properties.insert("name".to_string(), road.name.clone().into());
        properties.insert("highway".to_string(), "cycleway".into());
        features.push(features::line(&pl, Some(properties)));
    }
    Ok(collection(features))
}

fn collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
