//! Synthesizes OSM-style GeoJSON layers (roads, signals, parks, industrial
//! zones, buildings, cycleways) for a fixed area from hand-sketched waypoint
//! tables. The downstream app uses these as stand-in geometry when Overpass
//! and Geofabrik are unreachable.

#[macro_use]
extern crate log;

pub mod features;
pub mod layers;
pub mod logger;
pub mod model;
pub mod singapore;
pub mod sink;
