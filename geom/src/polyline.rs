use std::fmt;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::{LonLat, Ring};

/// An ordered sequence of at least two waypoints. Order matters; it defines
/// the direction of travel and which points are adjacent. Coincident or
/// duplicate points are allowed -- sketched data has them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolyLine {
    pts: Vec<LonLat>,
}

impl PolyLine {
    pub fn new(pts: Vec<LonLat>) -> Result<PolyLine> {
        if pts.len() < 2 {
            bail!("PolyLine needs at least 2 points, got {}", pts.len());
        }
        Ok(PolyLine { pts })
    }

    pub fn must_new(pts: Vec<LonLat>) -> PolyLine {
        PolyLine::new(pts).unwrap()
    }

    pub fn points(&self) -> &Vec<LonLat> {
        &self.pts
    }

    pub fn into_points(self) -> Vec<LonLat> {
        self.pts
    }

    /// Resamples every segment into `density` evenly spaced pieces, by linear
    /// interpolation. The result has exactly `(len - 1) * density + 1` points
    /// and every original waypoint survives, in order, at the boundary it came
    /// from. No smoothing; the shape is unchanged.
    pub fn densify(&self, density: usize) -> PolyLine {
        assert!(density >= 1, "density must be at least 1");

        let mut result = Vec::new();
        for pair in self.pts.windows(2) {
            let (p1, p2) = (pair[0], pair[1]);
            for j in 0..density {
                let t = (j as f64) / (density as f64);
                result.push(LonLat::new(
                    p1.longitude + t * (p2.longitude - p1.longitude),
                    p1.latitude + t * (p2.latitude - p1.latitude),
                ));
            }
        }
        // The open parametric range never emits the final waypoint; add it
        // back exactly once.
        result.push(*self.pts.last().unwrap());
        PolyLine { pts: result }
    }

    /// Expands the line into a ribbon polygon extending `width` degrees to
    /// either side, by offsetting every vertex along its local unit normal.
    /// The tangent at a vertex is the forward difference to the next vertex
    /// (backward difference at the last one).
    ///
    /// Vertices with a zero-length tangent (coincident points) are skipped on
    /// both sides of the ribbon; this is intentional, not a correctness
    /// guarantee at duplicates. Miter joints and self-intersections at sharp
    /// turns aren't handled either. The ring is always closed.
    pub fn buffer(&self, width: f64) -> Result<Ring> {
        if width <= 0.0 {
            bail!("buffer width must be positive, got {}", width);
        }

        let mut left = Vec::new();
        let mut right = Vec::new();
        for (i, pt) in self.pts.iter().enumerate() {
            let (dx, dy) = if i < self.pts.len() - 1 {
                let next = self.pts[i + 1];
                (next.longitude - pt.longitude, next.latitude - pt.latitude)
            } else {
                let prev = self.pts[i - 1];
                (pt.longitude - prev.longitude, pt.latitude - prev.latitude)
            };
            let len = dx.hypot(dy);
            if len == 0.0 {
                continue;
            }
            let nx = -dy / len * width;
            let ny = dx / len * width;
            left.push(pt.offset(nx, ny));
            right.push(pt.offset(-nx, -ny));
        }

        if left.len() < 2 {
            bail!("all of the line's waypoints are coincident; can't buffer");
        }

        let mut ring = left.clone();
        right.reverse();
        ring.extend(right);
        ring.push(left[0]);
        Ring::new(ring).context("buffering produced a degenerate ring")
    }

    /// A GeoJSON LineString, coordinates in `[longitude, latitude]` order.
    pub fn to_geojson(&self) -> geojson::Geometry {
        geojson::Geometry::new(geojson::Value::LineString(
            self.pts.iter().map(|pt| pt.to_geojson()).collect(),
        ))
    }
}

impl fmt::Display for PolyLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "PolyLine::new(vec![")?;
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
    fn densify_counts_and_endpoints() {
        for (num_pts, density) in [(2, 1), (2, 5), (3, 2), (10, 10), (18, 10)] {
            let pts: Vec<LonLat> = (0..num_pts)
                .map(|i| LonLat::new(103.6 + 0.01 * (i as f64), 1.3 + 0.002 * (i as f64)))
                .collect();
            let pl = PolyLine::must_new(pts.clone());
            let dense = pl.densify(density);

            assert_eq!(dense.points().len(), (num_pts - 1) * density + 1);
            assert_eq!(dense.points()[0], pts[0]);
            assert_eq!(*dense.points().last().unwrap(), *pts.last().unwrap());
        }
    }

    #[test]
    fn densify_keeps_original_waypoints() {
        let pts = vec![
            LonLat::new(0.0, 0.0),
            LonLat::new(10.0, 0.0),
            LonLat::new(10.0, 10.0),
        ];
        let dense = PolyLine::must_new(pts.clone()).densify(4);
        // Each original waypoint sits at the boundary of its segment.
        for (i, pt) in pts.iter().enumerate() {
            assert_eq!(dense.points()[i * 4], *pt);
        }
    }

    #[test]
    fn densify_simple_midpoint() {
        let dense =
            PolyLine::must_new(vec![LonLat::new(0.0, 0.0), LonLat::new(10.0, 0.0)]).densify(2);
        assert_eq!(
            dense.points(),
            &vec![
                LonLat::new(0.0, 0.0),
                LonLat::new(5.0, 0.0),
                LonLat::new(10.0, 0.0)
            ]
        );
    }

    #[test]
    fn densify_with_density_one_is_identity() {
        let pts = vec![
            LonLat::new(103.84, 1.26),
            LonLat::new(103.839, 1.275),
            LonLat::new(103.838, 1.29),
        ];
        let dense = PolyLine::must_new(pts).densify(7);
        // Resampling the output at density 1 returns the same points.
        assert_eq!(dense.densify(1), dense);
    }

    #[test]
    fn too_few_points() {
        assert!(PolyLine::new(Vec::new()).is_err());
        assert!(PolyLine::new(vec![LonLat::new(0.0, 0.0)]).is_err());
    }

    #[test]
    fn buffer_straight_line() {
        // An east-pointing tangent has its normal pointing north, so the left
        // edge is the northern one.
        let ring = PolyLine::must_new(vec![LonLat::new(0.0, 0.0), LonLat::new(10.0, 0.0)])
            .buffer(1.0)
            .unwrap();
        assert_eq!(
            ring.points(),
            &vec![
                LonLat::new(0.0, 1.0),
                LonLat::new(10.0, 1.0),
                LonLat::new(10.0, -1.0),
                LonLat::new(0.0, -1.0),
                LonLat::new(0.0, 1.0),
            ]
        );
    }

    #[test]
    fn buffer_is_closed() {
        let ring = PolyLine::must_new(vec![
            LonLat::new(103.86, 1.278),
            LonLat::new(103.87, 1.277),
            LonLat::new(103.873, 1.282),
            LonLat::new(103.87, 1.287),
        ])
        .buffer(0.001)
        .unwrap();
        assert_eq!(ring.points()[0], *ring.points().last().unwrap());
    }

    #[test]
    fn buffer_skips_coincident_points() {
        // The duplicated waypoint has a zero-length tangent and contributes no
        // offset vertices, shortening the ring.
        let ring = PolyLine::must_new(vec![
            LonLat::new(0.0, 0.0),
            LonLat::new(0.0, 0.0),
            LonLat::new(10.0, 0.0),
        ])
        .buffer(1.0)
        .unwrap();
        assert_eq!(ring.points().len(), 5);
        assert_eq!(ring.points()[0], *ring.points().last().unwrap());
    }

    #[test]
    fn buffer_rejects_degenerate_input() {
        let pl = PolyLine::must_new(vec![LonLat::new(0.0, 0.0), LonLat::new(0.0, 0.0)]);
        assert!(pl.buffer(1.0).is_err());

        let pl = PolyLine::must_new(vec![LonLat::new(0.0, 0.0), LonLat::new(10.0, 0.0)]);
        assert!(pl.buffer(0.0).is_err());
        assert!(pl.buffer(-0.5).is_err());
    }
}
