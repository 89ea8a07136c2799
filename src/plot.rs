//! Scatter plot of a window profile
//!
//! The figure is built as an SVG document and rasterized with resvg. Both
//! series share one y scale: G+T proportion as black dots on the left axis,
//! G/T ratio as red triangles on the red right axis. Windows without a T get
//! no triangle.

use image::RgbaImage;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;
use svg::node::element::{Circle, Line, Polygon, Rectangle, Text};
use svg::Document;

use crate::analysis::WindowResult;
use crate::error::{Error, Result};

pub const WIDTH: u32 = 1500;
pub const HEIGHT: u32 = 600;

/// Plot area margins; titles, tick labels and the legend live outside it.
pub const MARGIN_LEFT: f64 = 90.0;
pub const MARGIN_RIGHT: f64 = 80.0;
pub const MARGIN_TOP: f64 = 60.0;
pub const MARGIN_BOTTOM: f64 = 70.0;

/// Lower bound of the y range; widened if a ratio goes above it.
const Y_MAX: f64 = 1.8;
const GRID_STEP: f64 = 0.5;
const X_TICKS: usize = 10;

const BLACK: &str = "#000000";
const RED: &str = "#dc1e1e";
const GRID: &str = "#e1e1e1";
const LABEL: &str = "#374151";
const FONT: &str = "sans-serif";

/// Maps data coordinates onto the plot area.
struct Frame {
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
    pos_min: f64,
    pos_max: f64,
    y_max: f64,
}

impl Frame {
    fn new(rows: &[WindowResult]) -> Self {
        let ratio_max = rows
            .iter()
            .filter_map(|r| r.g_to_t_ratio)
            .fold(0.0_f64, f64::max);
        Frame {
            x0: MARGIN_LEFT,
            x1: WIDTH as f64 - MARGIN_RIGHT,
            y0: MARGIN_TOP,
            y1: HEIGHT as f64 - MARGIN_BOTTOM,
            pos_min: rows.first().map_or(0.0, |r| r.position as f64),
            pos_max: rows.last().map_or(0.0, |r| r.position as f64),
            y_max: Y_MAX.max(ratio_max * 1.05),
        }
    }

    fn x(&self, pos: f64) -> f64 {
        if self.pos_max <= self.pos_min {
            return (self.x0 + self.x1) / 2.0;
        }
        let frac = (pos - self.pos_min) / (self.pos_max - self.pos_min);
        self.x0 + frac * (self.x1 - self.x0)
    }

    fn y(&self, value: f64) -> f64 {
        let frac = (value / self.y_max).clamp(0.0, 1.0);
        self.y1 - frac * (self.y1 - self.y0)
    }
}

fn line(x1: f64, y1: f64, x2: f64, y2: f64, color: &str) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", color)
        .set("stroke-width", 1)
}

fn label(content: impl Into<String>, x: f64, y: f64, anchor: &str, color: &str) -> Text {
    Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("text-anchor", anchor)
        .set("font-family", FONT)
        .set("font-size", 13)
        .set("fill", color)
}

fn dot(cx: f64, cy: f64) -> Circle {
    Circle::new()
        .set("cx", cx)
        .set("cy", cy)
        .set("r", 2.5)
        .set("fill", BLACK)
}

/// Upward-pointing triangle centred on (cx, cy)
fn triangle(cx: f64, cy: f64, r: f64) -> Polygon {
    Polygon::new()
        .set(
            "points",
            format!(
                "{},{} {},{} {},{}",
                cx,
                cy - r,
                cx - r,
                cy + r,
                cx + r,
                cy + r
            ),
        )
        .set("fill", RED)
}

pub fn render_svg(rows: &[WindowResult], title: &str) -> String {
    let frame = Frame::new(rows);
    let mut doc = Document::new()
        .set("viewBox", (0, 0, WIDTH, HEIGHT))
        .set("width", WIDTH)
        .set("height", HEIGHT)
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", WIDTH)
                .set("height", HEIGHT)
                .set("fill", "#ffffff"),
        );

    // grid and y ticks, same scale on both sides
    let mut v = 0.0;
    while v <= frame.y_max + 1e-9 {
        let y = frame.y(v);
        doc = doc
            .add(line(frame.x0, y, frame.x1, y, GRID))
            .add(line(frame.x0 - 6.0, y, frame.x0, y, BLACK))
            .add(line(frame.x1, y, frame.x1 + 6.0, y, RED))
            .add(label(format!("{v:.1}"), frame.x0 - 10.0, y + 4.0, "end", LABEL))
            .add(label(format!("{v:.1}"), frame.x1 + 10.0, y + 4.0, "start", RED));
        v += GRID_STEP;
    }

    // x ticks, labelled with window start positions
    if !rows.is_empty() {
        let ticks = if frame.pos_max > frame.pos_min { X_TICKS } else { 0 };
        for i in 0..=ticks {
            let pos = if ticks == 0 {
                frame.pos_min
            } else {
                frame.pos_min + (frame.pos_max - frame.pos_min) * i as f64 / ticks as f64
            };
            let x = frame.x(pos);
            doc = doc
                .add(line(x, frame.y1, x, frame.y1 + 6.0, BLACK))
                .add(label(format!("{}", pos.round() as u64), x, frame.y1 + 22.0, "middle", LABEL));
        }
    }

    doc = doc
        .add(line(frame.x0, frame.y1, frame.x1, frame.y1, BLACK))
        .add(line(frame.x0, frame.y0, frame.x0, frame.y1, BLACK))
        .add(line(frame.x1, frame.y0, frame.x1, frame.y1, RED));

    for row in rows {
        let x = frame.x(row.position as f64);
        doc = doc.add(dot(x, frame.y(row.gt_proportion)));
        if let Some(ratio) = row.g_to_t_ratio {
            doc = doc.add(triangle(x, frame.y(ratio), 3.5));
        }
    }

    // axis titles
    let mid_y = (frame.y0 + frame.y1) / 2.0;
    doc = doc
        .add(label(
            "Position (start of sliding window)",
            (frame.x0 + frame.x1) / 2.0,
            HEIGHT as f64 - 20.0,
            "middle",
            BLACK,
        ))
        .add(
            label("T+G / total # bases", 30.0, mid_y, "middle", BLACK)
                .set("transform", format!("rotate(-90 30 {mid_y})")),
        )
        .add(
            label("G/T", WIDTH as f64 - 25.0, mid_y, "middle", RED)
                .set("transform", format!("rotate(-90 {} {mid_y})", WIDTH as f64 - 25.0)),
        );

    // title, and the legend above the top right corner of the plot area
    let legend_y = frame.y0 - 22.0;
    doc = doc
        .add(
            label(title, (frame.x0 + frame.x1) / 2.0, 30.0, "middle", BLACK)
                .set("font-size", 18)
                .set("font-weight", "bold"),
        )
        .add(dot(frame.x1 - 140.0, legend_y - 4.0))
        .add(label("G+T", frame.x1 - 130.0, legend_y, "start", BLACK))
        .add(triangle(frame.x1 - 70.0, legend_y - 4.0, 4.5))
        .add(label("G/T", frame.x1 - 60.0, legend_y, "start", RED));

    doc.to_string()
}

/// Rasterize the figure. System fonts are loaded for the labels; without any
/// installed font the markers and axes are still drawn.
pub fn render(rows: &[WindowResult], title: &str) -> Result<RgbaImage> {
    let svg = render_svg(rows, title);

    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(&svg, &opt).map_err(|e| Error::Render(e.to_string()))?;

    let mut pixmap = Pixmap::new(WIDTH, HEIGHT)
        .ok_or_else(|| Error::Render(format!("cannot allocate a {WIDTH}x{HEIGHT} canvas")))?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    // the background is opaque, so premultiplied RGBA equals straight RGBA
    RgbaImage::from_raw(WIDTH, HEIGHT, pixmap.take())
        .ok_or_else(|| Error::Render("rasterized canvas has an unexpected size".into()))
}
