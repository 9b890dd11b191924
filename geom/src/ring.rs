use std::fmt;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::LonLat;

/// Maybe a misnomer, but like a PolyLine, but closed. The first and last
/// points always match. There's no winding order guarantee and, since these
/// come from sketched waypoints and ribbon buffers, no self-intersection
/// guarantee either.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    // first equals last
    pts: Vec<LonLat>,
}

impl Ring {
    pub fn new(pts: Vec<LonLat>) -> Result<Ring> {
        if pts.len() < 4 {
            bail!(
                "Ring needs at least 3 distinct points and a closing repeat, got {}",
                pts.len()
            );
        }
        if pts[0] != *pts.last().unwrap() {
            bail!("Ring isn't closed: {} != {}", pts[0], pts.last().unwrap());
        }
        Ok(Ring { pts })
    }

    pub fn must_new(pts: Vec<LonLat>) -> Ring {
        Ring::new(pts).unwrap()
    }

    /// Closes an open boundary by repeating its first point. Already-closed
    /// input passes through untouched. This is the one place closure gets
    /// fixed up; everything else hands over closed rings.
    pub fn close(mut pts: Vec<LonLat>) -> Result<Ring> {
        if pts.len() < 3 {
            bail!("can't close a boundary of {} points", pts.len());
        }
        if pts[0] != *pts.last().unwrap() {
            pts.push(pts[0]);
        }
        Ring::new(pts)
    }

    pub fn points(&self) -> &Vec<LonLat> {
        &self.pts
    }

    pub fn into_points(self) -> Vec<LonLat> {
        self.pts
    }

    /// A GeoJSON Polygon with this as its single outer ring. No holes.
    pub fn to_geojson(&self) -> geojson::Geometry {
        geojson::Geometry::new(geojson::Value::Polygon(vec![self
            .pts
            .iter()
            .map(|pt| pt.to_geojson())
            .collect()]))
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Ring::new(vec![")?;
        for pt in &self.pts {
            writeln!(f, "  LonLat::new({}, {}),", pt.x(), pt.y())?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_open_boundary() {
        let ring = Ring::close(vec![
            LonLat::new(0.0, 0.0),
            LonLat::new(1.0, 0.0),
            LonLat::new(1.0, 1.0),
            LonLat::new(0.0, 1.0),
        ])
        .unwrap();
        assert_eq!(
            ring.points(),
            &vec![
                LonLat::new(0.0, 0.0),
                LonLat::new(1.0, 0.0),
                LonLat::new(1.0, 1.0),
                LonLat::new(0.0, 1.0),
                LonLat::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn close_is_noop_for_closed_boundary() {
        let pts = vec![
            LonLat::new(0.0, 0.0),
            LonLat::new(1.0, 0.0),
            LonLat::new(1.0, 1.0),
            LonLat::new(0.0, 0.0),
        ];
        let ring = Ring::close(pts.clone()).unwrap();
        assert_eq!(ring.points(), &pts);
    }

    #[test]
    fn reject_degenerate() {
        assert!(Ring::close(vec![LonLat::new(0.0, 0.0), LonLat::new(1.0, 0.0)]).is_err());
        // Closed, but only 2 distinct points
        assert!(Ring::new(vec![
            LonLat::new(0.0, 0.0),
            LonLat::new(1.0, 0.0),
            LonLat::new(0.0, 0.0)
        ])
        .is_err());
        // Not closed
        assert!(Ring::new(vec![
            LonLat::new(0.0, 0.0),
            LonLat::new(1.0, 0.0),
            LonLat::new(1.0, 1.0),
            LonLat::new(0.0, 1.0)
        ])
        .is_err());
    }
}
