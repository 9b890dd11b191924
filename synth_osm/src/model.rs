//! The sketched input data for one city, keyed by category and entity name.
//! The generation pipeline is written against these types, not against any
//! particular geography; `crate::singapore` supplies the data set we ship.

use serde::{Deserialize, Serialize};

use geom::LonLat;

/// A named road sketched as ordered waypoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Road {
    pub name: String,
    pub waypoints: Vec<LonLat>,
}

impl Road {
    pub fn new(name: &str, waypoints: Vec<LonLat>) -> Road {
        Road {
            name: name.to_string(),
            waypoints,
        }
    }
}

/// A motorway. The name doubles as the OSM `ref` code (PIE, AYE, ...).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Expressway {
    pub name: String,
    pub lanes: usize,
    pub waypoints: Vec<LonLat>,
}

impl Expressway {
    pub fn new(name: &str, lanes: usize, waypoints: Vec<LonLat>) -> Expressway {
        Expressway {
            name: name.to_string(),
            lanes,
            waypoints,
        }
    }
}

/// A hand-placed signalized junction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Junction {
    pub name: String,
    pub pt: LonLat,
}

/// Green space. Most parks are sketched directly as an area boundary; linear
/// park connectors are sketched as a spine and buffered to a constant width.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Park {
    Area {
        name: String,
        boundary: Vec<LonLat>,
    },
    Corridor {
        name: String,
        spine: Vec<LonLat>,
        /// Offset to either side of the spine, in degrees.
        width: f64,
    },
}

impl Park {
    pub fn area(name: &str, boundary: Vec<LonLat>) -> Park {
        Park::Area {
            name: name.to_string(),
            boundary,
        }
    }

    pub fn corridor(name: &str, spine: Vec<LonLat>, width: f64) -> Park {
        Park::Corridor {
            name: name.to_string(),
            spine,
            width,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Park::Area { name, .. } | Park::Corridor { name, .. } => name,
        }
    }
}

/// An industrial estate, sketched as an area boundary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub boundary: Vec<LonLat>,
}

impl Zone {
    pub fn new(name: &str, boundary: Vec<LonLat>) -> Zone {
        Zone {
            name: name.to_string(),
            boundary,
        }
    }
}

/// Everything the pipeline needs to generate one city's layers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CityMap {
    pub expressways: Vec<Expressway>,
    pub arterials: Vec<Road>,
    pub junctions: Vec<Junction>,
    pub parks: Vec<Park>,
    pub industrial_zones: Vec<Zone>,
    /// Each center becomes a small square footprint; individual buildings
    /// don't matter downstream, just dense clusters near roads.
    pub building_centers: Vec<LonLat>,
    pub cycleways: Vec<Road>,
    /// Every Nth vertex of a densified expressway becomes an extra derived
    /// signal, roughly every 500m at the densities we use.
    pub signal_stride: usize,
}
