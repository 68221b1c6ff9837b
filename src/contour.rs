use geo::{Area, Coord, Euclidean, Length, LineString, Polygon, Simplify};
use imageproc::contours::{BorderType, find_contours};
use imageproc::point::Point;

use crate::binary_image::BinaryImage;

/// Default simplification tolerance, as a fraction of the contour perimeter.
pub const SIMPLIFY_PERIMETER_RATIO: f64 = 0.002;

impl BinaryImage {
    /// Trace the outer boundary of every foreground connected component.
    /// Hole borders are discarded, so a shape contributes exactly one
    /// closed ring regardless of its interior structure.
    pub fn trace_outlines(&self) -> Vec<Polygon> {
        find_contours::<i32>(self.as_luma8())
            .into_iter()
            .filter(|contour| contour.border_type == BorderType::Outer)
            .map(|contour| {
                let ring = compress_chain(&contour.points);
                Polygon::new(LineString::from(ring), vec![])
            })
            .collect()
    }
}

/// Compress a closed 8-connected boundary chain to the minimal set of
/// points that describes it exactly: only the endpoints of straight runs
/// are kept.
fn compress_chain(mut points: &[Point<i32>]) -> Vec<Coord> {
    // Drop a duplicated closing point; the chain is treated as cyclic.
    if points.len() >= 2 && points.first() == points.last() {
        points = &points[..points.len() - 1];
    }
    let n = points.len();
    if n < 3 {
        return points.iter().map(to_coord).collect();
    }
    let mut ring = Vec::new();
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let here = points[i];
        let next = points[(i + 1) % n];
        let step_in = (here.x - prev.x, here.y - prev.y);
        let step_out = (next.x - here.x, next.y - here.y);
        if step_in != step_out {
            ring.push(to_coord(&here));
        }
    }
    if ring.is_empty() {
        // A closed chain always turns somewhere; keep a point anyway.
        ring.push(to_coord(&points[0]));
    }
    ring
}

#[inline]
fn to_coord(point: &Point<i32>) -> Coord {
    Coord {
        x: f64::from(point.x),
        y: f64::from(point.y),
    }
}

/// Select the outline enclosing the largest area (shoelace formula over the
/// closed ring). Ties are resolved to whichever maximal element the
/// iterator yields; the ordering among equals is not guaranteed.
pub fn largest_outline(outlines: Vec<Polygon>) -> Option<Polygon> {
    outlines
        .into_iter()
        .max_by(|a, b| a.unsigned_area().total_cmp(&b.unsigned_area()))
}

/// Reduce an outline's point count with the Ramer-Douglas-Peucker
/// algorithm. The tolerance is `perimeter_ratio` times the Euclidean
/// length of the closed exterior ring. A non-positive ratio leaves the
/// outline untouched.
pub fn simplify_outline(outline: &Polygon, perimeter_ratio: f64) -> Polygon {
    if perimeter_ratio <= 0f64 {
        return outline.clone();
    }
    let perimeter = Euclidean.length(outline.exterior());
    outline.simplify(&(perimeter_ratio * perimeter))
}
