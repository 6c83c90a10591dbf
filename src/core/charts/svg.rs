//! SVG building blocks shared by the chart generators
//!
//! Fixed-size canvases with a common margin layout; every helper returns an
//! SVG fragment as a string.

/// Canvas width in pixels
pub const WIDTH: f64 = 640.0;
/// Canvas height in pixels
pub const HEIGHT: f64 = 400.0;
/// Left margin (room for the y-axis labels)
pub const MARGIN_LEFT: f64 = 60.0;
/// Right margin
pub const MARGIN_RIGHT: f64 = 20.0;
/// Top margin (room for the title)
pub const MARGIN_TOP: f64 = 40.0;
/// Bottom margin (room for the x-axis labels)
pub const MARGIN_BOTTOM: f64 = 50.0;

/// Linear mapping from a data domain to pixel coordinates
pub struct Scale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl Scale {
    /// Create a scale; a zero-width domain is widened so mapping stays finite
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let domain = if (domain.1 - domain.0).abs() < f64::EPSILON {
            (domain.0 - 0.5, domain.1 + 0.5)
        } else {
            domain
        };
        Self { domain, range }
    }

    /// X scale across the plot area
    #[must_use]
    pub fn horizontal(domain: (f64, f64)) -> Self {
        Self::new(domain, (MARGIN_LEFT, WIDTH - MARGIN_RIGHT))
    }

    /// Y scale across the plot area (inverted, SVG y grows downward)
    #[must_use]
    pub fn vertical(domain: (f64, f64)) -> Self {
        Self::new(domain, (HEIGHT - MARGIN_BOTTOM, MARGIN_TOP))
    }

    /// Map a data value into pixel space
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let fraction = (value - self.domain.0) / (self.domain.1 - self.domain.0);
        self.range.0 + fraction * (self.range.1 - self.range.0)
    }

    /// Evenly spaced tick values across the domain
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let count = count.max(2);
        (0..count)
            .map(|i| {
                let fraction = i as f64 / (count - 1) as f64;
                self.domain.0 + fraction * (self.domain.1 - self.domain.0)
            })
            .collect()
    }
}

/// Wrap a chart body in a complete SVG document with title and background
#[must_use]
pub fn document(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" ",
            "viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n",
            "<rect width=\"{w}\" height=\"{h}\" fill=\"white\"/>\n",
            "<text x=\"{cx}\" y=\"24\" text-anchor=\"middle\" ",
            "font-size=\"16\" font-weight=\"bold\">{title}</text>\n",
            "{body}</svg>\n"
        ),
        w = WIDTH,
        h = HEIGHT,
        cx = WIDTH / 2.0,
        title = escape(title),
        body = body,
    )
}

/// Axis lines plus centered axis labels
#[must_use]
pub fn axes(x_label: &str, y_label: &str) -> String {
    let x0 = MARGIN_LEFT;
    let x1 = WIDTH - MARGIN_RIGHT;
    let y0 = HEIGHT - MARGIN_BOTTOM;
    let y1 = MARGIN_TOP;
    let mid_x = (x0 + x1) / 2.0;
    let mid_y = (y0 + y1) / 2.0;

    format!(
        concat!(
            "<line x1=\"{x0}\" y1=\"{y0}\" x2=\"{x1}\" y2=\"{y0}\" stroke=\"black\"/>\n",
            "<line x1=\"{x0}\" y1=\"{y0}\" x2=\"{x0}\" y2=\"{y1}\" stroke=\"black\"/>\n",
            "<text x=\"{mid_x}\" y=\"{label_y}\" text-anchor=\"middle\" ",
            "font-size=\"12\">{x_label}</text>\n",
            "<text x=\"16\" y=\"{mid_y}\" text-anchor=\"middle\" font-size=\"12\" ",
            "transform=\"rotate(-90 16 {mid_y})\">{y_label}</text>\n"
        ),
        x0 = x0,
        x1 = x1,
        y0 = y0,
        y1 = y1,
        mid_x = mid_x,
        mid_y = mid_y,
        label_y = HEIGHT - 10.0,
        x_label = escape(x_label),
        y_label = escape(y_label),
    )
}

/// Tick marks and numeric labels along the x axis
#[must_use]
pub fn x_tick_labels(scale: &Scale, count: usize, precision: usize) -> String {
    let baseline = HEIGHT - MARGIN_BOTTOM;
    scale
        .ticks(count)
        .into_iter()
        .map(|value| {
            let x = scale.map(value);
            format!(
                concat!(
                    "<line x1=\"{x}\" y1=\"{y0}\" x2=\"{x}\" y2=\"{y1}\" stroke=\"black\"/>\n",
                    "<text x=\"{x}\" y=\"{ty}\" text-anchor=\"middle\" ",
                    "font-size=\"10\">{value:.precision$}</text>\n"
                ),
                x = x,
                y0 = baseline,
                y1 = baseline + 5.0,
                ty = baseline + 18.0,
                value = value,
                precision = precision,
            )
        })
        .collect()
}

/// Tick marks and numeric labels along the y axis
#[must_use]
pub fn y_tick_labels(scale: &Scale, count: usize, precision: usize) -> String {
    scale
        .ticks(count)
        .into_iter()
        .map(|value| {
            let y = scale.map(value);
            format!(
                concat!(
                    "<line x1=\"{x0}\" y1=\"{y}\" x2=\"{x1}\" y2=\"{y}\" stroke=\"black\"/>\n",
                    "<text x=\"{tx}\" y=\"{ty}\" text-anchor=\"end\" ",
                    "font-size=\"10\">{value:.precision$}</text>\n"
                ),
                x0 = MARGIN_LEFT - 5.0,
                x1 = MARGIN_LEFT,
                y = y,
                tx = MARGIN_LEFT - 8.0,
                ty = y + 3.0,
                value = value,
                precision = precision,
            )
        })
        .collect()
}

/// A filled rectangle
#[must_use]
pub fn rect(x: f64, y: f64, width: f64, height: f64, fill: &str) -> String {
    format!(
        "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{width:.1}\" height=\"{height:.1}\" \
         fill=\"{fill}\" stroke=\"black\" stroke-width=\"0.5\"/>\n"
    )
}

/// A solid line
#[must_use]
pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) -> String {
    format!(
        "<line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" \
         stroke=\"{stroke}\" stroke-width=\"1.5\"/>\n"
    )
}

/// A dashed line (reference lines, whiskers)
#[must_use]
pub fn dashed_line(x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) -> String {
    format!(
        "<line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" \
         stroke=\"{stroke}\" stroke-width=\"1.5\" stroke-dasharray=\"6 3\"/>\n"
    )
}

/// A semi-transparent circle marker
#[must_use]
pub fn circle(cx: f64, cy: f64, r: f64, fill: &str) -> String {
    format!(
        "<circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"{r:.1}\" fill=\"{fill}\" \
         fill-opacity=\"0.5\"/>\n"
    )
}

/// A small text label
#[must_use]
pub fn label(x: f64, y: f64, anchor: &str, content: &str) -> String {
    format!(
        "<text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"{anchor}\" font-size=\"10\">{}</text>\n",
        escape(content)
    )
}

/// Escape text content for embedding in SVG/XML
#[must_use]
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_maps_endpoints() {
        let scale = Scale::new((0.0, 10.0), (100.0, 200.0));
        assert!((scale.map(0.0) - 100.0).abs() < 1e-9);
        assert!((scale.map(10.0) - 200.0).abs() < 1e-9);
        assert!((scale.map(5.0) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_vertical_scale_inverts() {
        let scale = Scale::vertical((0.0, 1.0));
        assert!(scale.map(1.0) < scale.map(0.0));
    }

    #[test]
    fn test_degenerate_domain_stays_finite() {
        let scale = Scale::new((5.0, 5.0), (0.0, 100.0));
        assert!(scale.map(5.0).is_finite());
    }

    #[test]
    fn test_document_escapes_title() {
        let doc = document("Price & Rating", "");
        assert!(doc.contains("Price &amp; Rating"));
        assert!(doc.starts_with("<svg"));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_ticks_span_domain() {
        let scale = Scale::new((0.0, 8.0), (0.0, 1.0));
        let ticks = scale.ticks(5);
        assert_eq!(ticks.len(), 5);
        assert!((ticks[0] - 0.0).abs() < 1e-9);
        assert!((ticks[4] - 8.0).abs() < 1e-9);
    }
}
