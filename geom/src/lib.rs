//! Geometry for sketched maps. Everything here works directly on WGS84
//! degrees and treats them as planar -- good enough for hand-drawn layers
//! covering one city, and deliberately free of any projection handling.

mod gps;
mod polyline;
mod ring;

pub use crate::gps::LonLat;
pub use crate::polyline::PolyLine;
pub use crate::ring::Ring;
