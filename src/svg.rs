use std::fmt::Write;

use geo::{Coord, Polygon};

/// Serialize a closed outline as an SVG path: `M x y L x y ... Z`.
///
/// Coordinates are emitted as integers in the pixel coordinate system of
/// the source image (origin top-left, y down), with no scaling. The ring's
/// duplicated closing coordinate is not emitted; the `Z` command closes
/// the path instead.
#[must_use]
pub fn path_data(outline: &Polygon) -> String {
    let mut path = String::new();
    for (i, coord) in distinct_coords(outline).iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        let _ = write!(
            path,
            "{cmd} {} {}",
            coord.x.round() as i64,
            coord.y.round() as i64
        );
    }
    path.push_str(" Z");
    path
}

/// Number of distinct points in the outline (the closing duplicate of a
/// closed ring is not counted).
#[must_use]
pub fn point_count(outline: &Polygon) -> usize {
    distinct_coords(outline).len()
}

fn distinct_coords(outline: &Polygon) -> &[Coord] {
    let coords = &outline.exterior().0;
    if coords.len() >= 2 && coords.first() == coords.last() {
        &coords[..coords.len() - 1]
    } else {
        coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, polygon};

    #[test]
    fn triangle_serializes_as_move_line_line_close() {
        let triangle = polygon![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0)];

        assert_eq!(path_data(&triangle), "M 0 0 L 10 0 L 10 10 Z");
        assert_eq!(point_count(&triangle), 3);
    }

    #[test]
    fn emits_one_line_command_less_than_the_point_count() {
        let square = polygon![
            (x: 2.0, y: 3.0),
            (x: 9.0, y: 3.0),
            (x: 9.0, y: 8.0),
            (x: 2.0, y: 8.0),
        ];
        let path = path_data(&square);

        assert_eq!(path.matches('M').count(), 1);
        assert_eq!(path.matches('L').count(), point_count(&square) - 1);
        assert!(path.ends_with(" Z"));
    }

    #[test]
    fn single_point_outline_is_a_bare_moveto() {
        let point = Polygon::new(LineString::from(vec![(4.0, 7.0)]), vec![]);

        assert_eq!(path_data(&point), "M 4 7 Z");
        assert_eq!(point_count(&point), 1);
    }

    #[test]
    fn integral_coordinates_print_without_a_fraction() {
        let segment = Polygon::new(LineString::from(vec![(5.0, 12.0), (31.0, 12.0)]), vec![]);

        assert_eq!(path_data(&segment), "M 5 12 L 31 12 Z");
    }

    #[test]
    fn closing_duplicate_is_not_emitted() {
        let square = polygon![
            (x: 0.0, y: 0.0),
            (x: 4.0, y: 0.0),
            (x: 4.0, y: 4.0),
            (x: 0.0, y: 4.0),
        ];
        // geo closes the ring; the path must still list four points.
        assert_eq!(square.exterior().0.len(), 5);
        assert_eq!(point_count(&square), 4);
        assert_eq!(path_data(&square), "M 0 0 L 4 0 L 4 4 L 0 4 Z");
    }
}
