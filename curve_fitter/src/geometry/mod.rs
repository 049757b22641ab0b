//! Basic 2D geometry primitives for curve fitting.

/// Symbol used when rendering a point marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointSymbol {
    #[default]
    Circle,
    Square,
    Cross,
}

/// Representation of a 2D point.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Calculates the Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Representation of a series of connected line segments, such as a sampled
/// curve.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Polyline {
    pub vertices: Vec<Point>,
}

impl Polyline {
    /// Creates a new polyline from a list of vertices.
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Returns the total length of all segments in the polyline.
    pub fn length(&self) -> f64 {
        self.vertices
            .windows(2)
            .map(|pair| distance(pair[0], pair[1]))
            .sum()
    }

    /// Returns the axis-aligned bounding box as `(min, max)` corners, or
    /// `None` for an empty polyline.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;
        for v in &self.vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_three_four_five() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(distance(a, b), 5.0);
    }

    #[test]
    fn polyline_length() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(6.0, 8.0),
        ];
        let pl = Polyline::new(pts);
        assert!((pl.length() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn polyline_bounds() {
        let pl = Polyline::new(vec![
            Point::new(-1.0, 2.0),
            Point::new(3.0, -4.0),
            Point::new(0.5, 0.0),
        ]);
        let (min, max) = pl.bounds().unwrap();
        assert_eq!(min, Point::new(-1.0, -4.0));
        assert_eq!(max, Point::new(3.0, 2.0));
    }

    #[test]
    fn empty_polyline_has_no_bounds() {
        assert!(Polyline::new(Vec::new()).bounds().is_none());
    }
}
