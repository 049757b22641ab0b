//! SVG rendering of interpolated curves and their source points.
//!
//! Data coordinates are mapped into a margined pixel area with the y axis
//! flipped (SVG y points down). Path data is built as a raw `d` string to
//! keep `f64` precision.

use std::io;

use svg::node::element::{Circle, Group, Line, Path, Rectangle, Text};
use svg::Document;

use crate::geometry::{Point, PointSymbol, Polyline};
use crate::styles::PlotConfig;

/// Pixel margin reserved around the plot area for title, labels and legend.
const MARGIN: f64 = 60.0;
/// Fraction of the data span added as padding on each side.
const PADDING: f64 = 0.05;
/// Grid divisions along each axis.
const GRID_DIVISIONS: usize = 10;

struct PlotArea {
    min: Point,
    max: Point,
    width: f64,
    height: f64,
}

impl PlotArea {
    fn new(curve: &Polyline, points: &[Point], cfg: &PlotConfig) -> Option<Self> {
        let (mut min, mut max) = curve.bounds().or_else(|| {
            Polyline::new(points.to_vec()).bounds()
        })?;
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        // Pad the data span; a degenerate span still gets a visible range.
        let pad_x = ((max.x - min.x) * PADDING).max(0.5);
        let pad_y = ((max.y - min.y) * PADDING).max(0.5);
        min.x -= pad_x;
        min.y -= pad_y;
        max.x += pad_x;
        max.y += pad_y;

        Some(Self {
            min,
            max,
            width: cfg.width as f64,
            height: cfg.height as f64,
        })
    }

    fn to_px(&self, p: Point) -> (f64, f64) {
        let sx = (self.width - 2.0 * MARGIN) / (self.max.x - self.min.x);
        let sy = (self.height - 2.0 * MARGIN) / (self.max.y - self.min.y);
        (
            MARGIN + (p.x - self.min.x) * sx,
            self.height - MARGIN - (p.y - self.min.y) * sy,
        )
    }
}

fn curve_path(area: &PlotArea, curve: &Polyline, cfg: &PlotConfig) -> Path {
    let mut d = String::new();
    for (i, v) in curve.vertices.iter().enumerate() {
        let (px, py) = area.to_px(*v);
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{}{:.2} {:.2}", cmd, px, py));
    }
    Path::new()
        .set("d", d)
        .set("fill", "none")
        .set("stroke", cfg.curve.color.as_str())
        .set("stroke-width", cfg.curve.width)
}

fn marker(area: &PlotArea, p: Point, cfg: &PlotConfig) -> Group {
    let (px, py) = area.to_px(p);
    let s = cfg.markers.size;
    let color = cfg.markers.color.as_str();
    let group = Group::new();
    match cfg.markers.symbol {
        PointSymbol::Circle => group.add(
            Circle::new()
                .set("cx", px)
                .set("cy", py)
                .set("r", s)
                .set("fill", color),
        ),
        PointSymbol::Square => group.add(
            Rectangle::new()
                .set("x", px - s)
                .set("y", py - s)
                .set("width", 2.0 * s)
                .set("height", 2.0 * s)
                .set("fill", color),
        ),
        PointSymbol::Cross => group.add(
            Path::new()
                .set(
                    "d",
                    format!(
                        "M{:.2} {:.2}L{:.2} {:.2}M{:.2} {:.2}L{:.2} {:.2}",
                        px - s,
                        py - s,
                        px + s,
                        py + s,
                        px - s,
                        py + s,
                        px + s,
                        py - s
                    ),
                )
                .set("stroke", color)
                .set("stroke-width", 1.5)
                .set("fill", "none"),
        ),
    }
}

fn grid_lines(area: &PlotArea, cfg: &PlotConfig) -> Vec<Line> {
    let color = cfg.theme.grid();
    let mut lines = Vec::new();
    for i in 0..=GRID_DIVISIONS {
        let t = i as f64 / GRID_DIVISIONS as f64;
        let x = MARGIN + t * (area.width - 2.0 * MARGIN);
        let y = MARGIN + t * (area.height - 2.0 * MARGIN);
        lines.push(
            Line::new()
                .set("x1", x)
                .set("y1", MARGIN)
                .set("x2", x)
                .set("y2", area.height - MARGIN)
                .set("stroke", color)
                .set("stroke-width", 0.5),
        );
        lines.push(
            Line::new()
                .set("x1", MARGIN)
                .set("y1", y)
                .set("x2", area.width - MARGIN)
                .set("y2", y)
                .set("stroke", color)
                .set("stroke-width", 0.5),
        );
    }
    lines
}

fn label(text: &str, x: f64, y: f64, size: f64, cfg: &PlotConfig) -> Text {
    Text::new(text)
        .set("x", x)
        .set("y", y)
        .set("fill", cfg.theme.foreground())
        .set("font-family", "sans-serif")
        .set("font-size", size)
        .set("text-anchor", "middle")
}

fn legend(cfg: &PlotConfig) -> Group {
    let x = cfg.width as f64 - MARGIN - 160.0;
    Group::new()
        .add(
            Line::new()
                .set("x1", x)
                .set("y1", MARGIN + 14.0)
                .set("x2", x + 24.0)
                .set("y2", MARGIN + 14.0)
                .set("stroke", cfg.curve.color.as_str())
                .set("stroke-width", cfg.curve.width),
        )
        .add(label(&cfg.curve.label, x + 95.0, MARGIN + 18.0, 12.0, cfg))
        .add(
            Circle::new()
                .set("cx", x + 12.0)
                .set("cy", MARGIN + 34.0)
                .set("r", cfg.markers.size)
                .set("fill", cfg.markers.color.as_str()),
        )
        .add(label(&cfg.markers.label, x + 95.0, MARGIN + 38.0, 12.0, cfg))
}

/// Renders a sampled curve and its source points into an SVG document.
pub fn render_plot(curve: &Polyline, points: &[Point], cfg: &PlotConfig) -> Document {
    let mut doc = Document::new()
        .set("viewBox", (0u32, 0u32, cfg.width, cfg.height))
        .set("width", cfg.width)
        .set("height", cfg.height)
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", cfg.width)
                .set("height", cfg.height)
                .set("fill", cfg.theme.background()),
        );

    let area = match PlotArea::new(curve, points, cfg) {
        Some(area) => area,
        None => return doc.add(label(&cfg.title, cfg.width as f64 / 2.0, 30.0, 18.0, cfg)),
    };

    if cfg.show_grid {
        for line in grid_lines(&area, cfg) {
            doc = doc.add(line);
        }
    }

    if !curve.vertices.is_empty() {
        doc = doc.add(curve_path(&area, curve, cfg));
    }
    for p in points {
        doc = doc.add(marker(&area, *p, cfg));
    }

    doc = doc.add(label(&cfg.title, cfg.width as f64 / 2.0, 30.0, 18.0, cfg));
    if let Some(x_label) = &cfg.x_label {
        doc = doc.add(label(
            x_label,
            cfg.width as f64 / 2.0,
            cfg.height as f64 - 18.0,
            13.0,
            cfg,
        ));
    }
    if let Some(y_label) = &cfg.y_label {
        doc = doc.add(
            label(y_label, 0.0, 0.0, 13.0, cfg).set(
                "transform",
                format!("translate(20, {:.0}) rotate(-90)", cfg.height as f64 / 2.0),
            ),
        );
    }
    doc = doc.add(legend(cfg));

    doc
}

/// Renders the plot and writes it to `path`.
pub fn write_plot_svg(
    path: &str,
    curve: &Polyline,
    points: &[Point],
    cfg: &PlotConfig,
) -> io::Result<()> {
    svg::save(path, &render_plot(curve, points, cfg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolate::SineInterpolator;
    use crate::styles::Theme;

    fn demo_inputs() -> (Polyline, Vec<Point>) {
        let points = vec![
            Point::new(0.0, 5.0),
            Point::new(2.0, 0.0),
            Point::new(4.0, 10.0),
        ];
        let curve = SineInterpolator::new(16).interpolate(&points).unwrap();
        (curve, points)
    }

    #[test]
    fn document_contains_curve_and_markers() {
        let (curve, points) = demo_inputs();
        let doc = render_plot(&curve, &points, &PlotConfig::default());
        let out = doc.to_string();
        assert!(out.contains("<svg"));
        assert!(out.contains("stroke=\"blue\""));
        // One marker per point plus the legend swatch.
        assert_eq!(out.matches("<circle").count(), points.len() + 1);
    }

    #[test]
    fn dark_theme_background_is_used_by_default() {
        let (curve, points) = demo_inputs();
        let out = render_plot(&curve, &points, &PlotConfig::default()).to_string();
        assert!(out.contains("#121212"));
    }

    #[test]
    fn light_theme_changes_background() {
        let (curve, points) = demo_inputs();
        let cfg = PlotConfig {
            theme: Theme::Light,
            ..PlotConfig::default()
        };
        let out = render_plot(&curve, &points, &cfg).to_string();
        assert!(out.contains("#ffffff"));
    }

    #[test]
    fn grid_lines_render_when_enabled() {
        let (curve, points) = demo_inputs();
        let cfg = PlotConfig {
            show_grid: true,
            ..PlotConfig::default()
        };
        let out = render_plot(&curve, &points, &cfg).to_string();
        assert!(out.matches("<line").count() > 2 * GRID_DIVISIONS);
    }

    #[test]
    fn square_markers_render_rectangles() {
        let (curve, points) = demo_inputs();
        let mut cfg = PlotConfig::default();
        cfg.markers.symbol = PointSymbol::Square;
        let out = render_plot(&curve, &points, &cfg).to_string();
        // Background plus one rectangle per point.
        assert_eq!(out.matches("<rect").count(), points.len() + 1);
    }

    #[test]
    fn empty_input_still_produces_a_document() {
        let out =
            render_plot(&Polyline::new(Vec::new()), &[], &PlotConfig::default()).to_string();
        assert!(out.contains("<svg"));
    }

    #[test]
    fn axis_labels_appear_when_set() {
        let (curve, points) = demo_inputs();
        let cfg = PlotConfig::default()
            .with_labels(Some("Time (hours)".into()), Some("Temperature (°C)".into()));
        let out = render_plot(&curve, &points, &cfg).to_string();
        assert!(out.contains("Time (hours)"));
        assert!(out.contains("rotate(-90)"));
    }

    #[test]
    fn plot_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        let (curve, points) = demo_inputs();
        write_plot_svg(
            path.to_str().unwrap(),
            &curve,
            &points,
            &PlotConfig::default(),
        )
        .unwrap();
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("<svg"));
    }
}
