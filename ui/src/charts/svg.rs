//! Static SVG rendering of a [`ChartConfig`].
//!
//! Used for exports and as the in-page fallback when the charting library
//! isn't loaded (e.g. an offline desktop window).

use std::fmt::Write;

use super::{ChartConfig, ChartSeries};

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Bounds {
    fn of(series: &[ChartSeries]) -> Option<Self> {
        let mut points = series
            .iter()
            .flat_map(|s| s.data.iter())
            .filter(|[x, y]| x.is_finite() && y.is_finite());

        let [x0, y0] = *points.next()?;
        let mut bounds = Bounds {
            x_min: x0,
            x_max: x0,
            y_min: y0.min(0.0),
            y_max: y0,
        };
        for &[x, y] in points {
            bounds.x_min = bounds.x_min.min(x);
            bounds.x_max = bounds.x_max.max(x);
            bounds.y_min = bounds.y_min.min(y);
            bounds.y_max = bounds.y_max.max(y);
        }

        if bounds.x_max == bounds.x_min {
            bounds.x_max = bounds.x_min + 1.0;
        }
        if bounds.y_max == bounds.y_min {
            bounds.y_max = bounds.y_min + 1.0;
        }
        Some(bounds)
    }
}

struct Plot {
    bounds: Bounds,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Plot {
    fn x(&self, value: f64) -> f64 {
        self.left + (value - self.bounds.x_min) / (self.bounds.x_max - self.bounds.x_min) * self.width
    }

    fn y(&self, value: f64) -> f64 {
        self.top + self.height
            - (value - self.bounds.y_min) / (self.bounds.y_max - self.bounds.y_min) * self.height
    }

    fn polyline_points(&self, series: &ChartSeries) -> String {
        let mut out = String::new();
        let mut previous_y: Option<f64> = None;

        for &[x, y] in series.data.iter() {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            let (px, py) = (self.x(x), self.y(y));
            if series.step {
                // Hold the previous value until this sample's x.
                if let Some(prev) = previous_y {
                    let _ = write!(out, "{px:.1},{prev:.1} ");
                }
            }
            let _ = write!(out, "{px:.1},{py:.1} ");
            previous_y = Some(py);
        }

        out.trim_end().to_string()
    }
}

/// Standalone SVG document for `config`.
pub fn render_svg(config: &ChartConfig, width: u32, height: u32) -> String {
    let w = width as f64;
    let h = height as f64;
    let plot_width = (w - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let plot_height = (h - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
    let bottom = MARGIN_TOP + plot_height;
    let right = MARGIN_LEFT + plot_width;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{width}' height='{height}' viewBox='0 0 {width} {height}' font-family='Inter, Helvetica, Arial, sans-serif'>"
    );
    let _ = writeln!(svg, "  <rect width='{width}' height='{height}' fill='#ffffff'/>");
    let _ = writeln!(
        svg,
        "  <text x='{:.1}' y='30' fill='#333333' font-size='18' text-anchor='middle'>{}</text>",
        w / 2.0,
        escape_xml(&config.title.text)
    );

    // Frame
    let _ = writeln!(
        svg,
        "  <line x1='{MARGIN_LEFT}' y1='{MARGIN_TOP}' x2='{MARGIN_LEFT}' y2='{bottom:.1}' stroke='#ccd6eb'/>"
    );
    let _ = writeln!(
        svg,
        "  <line x1='{MARGIN_LEFT}' y1='{bottom:.1}' x2='{right:.1}' y2='{bottom:.1}' stroke='#ccd6eb'/>"
    );

    // Axis titles
    let _ = writeln!(
        svg,
        "  <text x='{:.1}' y='{:.1}' fill='#666666' font-size='13' text-anchor='middle'>{}</text>",
        MARGIN_LEFT + plot_width / 2.0,
        h - 20.0,
        escape_xml(&config.x_axis.title.text)
    );
    let mid_y = MARGIN_TOP + plot_height / 2.0;
    let _ = writeln!(
        svg,
        "  <text x='20' y='{mid_y:.1}' fill='#666666' font-size='13' text-anchor='middle' transform='rotate(-90, 20, {mid_y:.1})'>{}</text>",
        escape_xml(&config.y_axis.title.text)
    );

    match Bounds::of(&config.series) {
        None => {
            let _ = writeln!(
                svg,
                "  <text x='{:.1}' y='{mid_y:.1}' fill='#999999' font-size='14' text-anchor='middle'>No data</text>",
                MARGIN_LEFT + plot_width / 2.0
            );
        }
        Some(bounds) => {
            let plot = Plot {
                bounds,
                left: MARGIN_LEFT,
                top: MARGIN_TOP,
                width: plot_width,
                height: plot_height,
            };

            // Tick labels: extremes and midpoint of both axes
            for fraction in [0.0, 0.5, 1.0] {
                let x_value = bounds.x_min + (bounds.x_max - bounds.x_min) * fraction;
                let y_value = bounds.y_min + (bounds.y_max - bounds.y_min) * fraction;
                let _ = writeln!(
                    svg,
                    "  <text x='{:.1}' y='{:.1}' fill='#666666' font-size='11' text-anchor='middle'>{}</text>",
                    plot.x(x_value),
                    bottom + 16.0,
                    format_tick(x_value)
                );
                let _ = writeln!(
                    svg,
                    "  <text x='{:.1}' y='{:.1}' fill='#666666' font-size='11' text-anchor='end'>{}</text>",
                    MARGIN_LEFT - 6.0,
                    plot.y(y_value) + 4.0,
                    format_tick(y_value)
                );
            }

            for series in &config.series {
                let _ = writeln!(
                    svg,
                    "  <polyline points='{}' fill='none' stroke='{}' stroke-width='2'/>",
                    plot.polyline_points(series),
                    series.color
                );
            }
        }
    }

    // Legend
    for (idx, series) in config.series.iter().enumerate() {
        let x = MARGIN_LEFT + idx as f64 * 180.0;
        let y = h - 48.0;
        let _ = writeln!(
            svg,
            "  <rect x='{x:.1}' y='{:.1}' width='12' height='12' fill='{}'/>",
            y - 10.0,
            series.color
        );
        let _ = writeln!(
            svg,
            "  <text x='{:.1}' y='{y:.1}' fill='#333333' font-size='12'>{}</text>",
            x + 18.0,
            escape_xml(&series.name)
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn format_tick(value: f64) -> String {
    if value.abs() >= 100.0 || value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
