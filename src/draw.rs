use geo::Polygon;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;

pub trait DrawOutline {
    fn draw(&self, width: u32, height: u32) -> RgbaImage;
}

/// Convert a geo::Polygon exterior ring into Vec<Point<i32>> suitable for imageproc
fn ring_to_points(polygon: &Polygon) -> Vec<Point<i32>> {
    let points: Vec<Point<i32>> = polygon
        .exterior()
        .points()
        .map(|p| Point::new(p.x() as i32, p.y() as i32))
        .collect();

    // Remove duplicate last point if it matches the first (closed polygon)
    if points.len() >= 2 && points.first() == points.last() {
        points[..points.len() - 1].to_vec()
    } else {
        points
    }
}

impl DrawOutline for Polygon {
    fn draw(&self, width: u32, height: u32) -> RgbaImage {
        let mut img = RgbaImage::new(width, height);

        let points = ring_to_points(self);
        if points.len() < 3 {
            return img;
        }

        let color = Rgba([255, 0, 0, 255]);
        draw_polygon_mut(&mut img, &points, color);

        img
    }
}
