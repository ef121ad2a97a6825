use super::radar::RadarSeries;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fmt;

/// Cycle of series colors, one per panel. The reference layout pairs a
/// blue privacy panel with a red security panel.
pub const SERIES_PALETTE: [&str; 4] = ["#1f77b4", "#d62728", "#2ca02c", "#9467bd"];

const PANEL_SIZE: f64 = 480.0;
const PANEL_HEIGHT: f64 = 540.0;
const AXIS_RADIUS: f64 = 170.0;
const GRID_STEPS: u32 = 4;

/// One named polygon to draw on its own polar panel.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub title: String,
    pub color: String,
    pub series: RadarSeries,
}

#[derive(Debug)]
pub enum ChartError {
    Svg(usvg::Error),
    Allocation { width: u32, height: u32 },
    Encode(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Svg(err) => write!(f, "chart svg did not parse: {err}"),
            ChartError::Allocation { width, height } => {
                write!(f, "failed to allocate a {width}x{height} pixmap")
            }
            ChartError::Encode(err) => write!(f, "png encoding failed: {err}"),
        }
    }
}

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChartError::Svg(err) => Some(err),
            ChartError::Allocation { .. } => None,
            ChartError::Encode(err) => Some(&**err),
        }
    }
}

/// Draws radar panels side by side on one canvas and serializes the
/// result as PNG. The radial scale is fixed 0-100 with grid rings but no
/// radial tick labels.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer;

impl ChartRenderer {
    pub fn render_svg(&self, panels: &[ChartSeries]) -> String {
        let count = panels.len().max(1);
        let width = PANEL_SIZE * count as f64;
        let height = PANEL_HEIGHT;

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
        ));
        svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>");

        for (index, panel) in panels.iter().enumerate() {
            let cx = PANEL_SIZE * index as f64 + PANEL_SIZE / 2.0;
            let cy = PANEL_HEIGHT / 2.0 + 20.0;
            draw_panel(&mut svg, panel, cx, cy);
        }

        svg.push_str("</svg>");
        svg
    }

    pub fn render_png(&self, panels: &[ChartSeries]) -> Result<Vec<u8>, ChartError> {
        let svg = self.render_svg(panels);

        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();

        let tree = usvg::Tree::from_str(&svg, &options).map_err(ChartError::Svg)?;
        let size = tree.size().to_int_size();
        let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height()).ok_or(
            ChartError::Allocation {
                width: size.width(),
                height: size.height(),
            },
        )?;

        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::default(),
            &mut pixmap.as_mut(),
        );

        pixmap
            .encode_png()
            .map_err(|err| ChartError::Encode(Box::new(err)))
    }

    /// PNG bytes encoded for embedding in a JSON payload or data URI.
    pub fn render_base64_png(&self, panels: &[ChartSeries]) -> Result<String, ChartError> {
        let png = self.render_png(panels)?;
        Ok(STANDARD.encode(png))
    }
}

fn draw_panel(svg: &mut String, panel: &ChartSeries, cx: f64, cy: f64) {
    // Concentric grid rings at 25/50/75/100, radial labels hidden.
    for step in 1..=GRID_STEPS {
        let radius = AXIS_RADIUS * step as f64 / GRID_STEPS as f64;
        svg.push_str(&format!(
            "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{radius:.2}\" fill=\"none\" stroke=\"#d0d0d0\" stroke-width=\"1\"/>",
        ));
    }

    // Axis spokes and Q labels, one per open polygon vertex.
    let open_points = &panel.series.points[..panel.series.axis_count()];
    for (point, label) in open_points.iter().zip(&panel.series.labels) {
        let (x, y) = to_screen(cx, cy, point.angle, 100.0);
        svg.push_str(&format!(
            "<line x1=\"{cx:.2}\" y1=\"{cy:.2}\" x2=\"{x:.2}\" y2=\"{y:.2}\" stroke=\"#d0d0d0\" stroke-width=\"1\"/>",
        ));

        let (lx, ly) = to_screen(cx, cy, point.angle, 110.0);
        svg.push_str(&format!(
            "<text x=\"{lx:.2}\" y=\"{ly:.2}\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-family=\"sans-serif\" font-size=\"14\" fill=\"#333333\">{}</text>",
            escape_xml(label)
        ));
    }

    // The closed data polygon, filled semi-transparent like the reference.
    svg.push_str(&format!(
        "<path d=\"{}\" fill=\"{}\" fill-opacity=\"0.25\" stroke=\"{}\" stroke-width=\"2\"/>",
        polygon_path(panel, cx, cy),
        escape_xml(&panel.color),
        escape_xml(&panel.color)
    ));

    let title_y = cy - AXIS_RADIUS - 50.0;
    svg.push_str(&format!(
        "<text x=\"{cx:.2}\" y=\"{title_y:.2}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"20\" fill=\"#111111\">{}</text>",
        escape_xml(&panel.title)
    ));
}

fn polygon_path(panel: &ChartSeries, cx: f64, cy: f64) -> String {
    let mut d = String::new();
    for (i, point) in panel.series.points.iter().enumerate() {
        let (x, y) = to_screen(cx, cy, point.angle, point.radius);
        let command = if i == 0 { "M" } else { "L" };
        d.push_str(&format!("{command} {x:.2} {y:.2} "));
    }
    d.push('Z');
    d
}

/// Map a polar point (angle counter-clockwise from east, radius 0-100)
/// onto screen coordinates, where the y axis points down.
fn to_screen(cx: f64, cy: f64, angle: f64, radius: f64) -> (f64, f64) {
    let r = AXIS_RADIUS * radius / 100.0;
    (cx + r * angle.cos(), cy - r * angle.sin())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
