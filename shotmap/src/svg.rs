//! A minimal SVG document builder: enough shapes to draw a pitch, scatter markers, a legend and a
//! title.

use std::fmt::Write;

use crate::colour::Rgb;

#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub fill: Option<Rgb>,
    pub fill_opacity: f64,
    pub stroke: Option<Rgb>,
    pub stroke_width: f64,
}
impl Style {
    pub fn filled(fill: Rgb) -> Self {
        Self {
            fill: Some(fill),
            fill_opacity: 1.0,
            stroke: None,
            stroke_width: 0.0,
        }
    }

    pub fn stroked(stroke: Rgb, stroke_width: f64) -> Self {
        Self {
            fill: None,
            fill_opacity: 1.0,
            stroke: Some(stroke),
            stroke_width,
        }
    }

    pub fn with_stroke(mut self, stroke: Rgb, stroke_width: f64) -> Self {
        self.stroke = Some(stroke);
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_fill_opacity(mut self, fill_opacity: f64) -> Self {
        self.fill_opacity = fill_opacity;
        self
    }

    fn write_attrs(&self, out: &mut String) {
        match self.fill {
            None => out.push_str(r#" fill="none""#),
            Some(fill) => {
                let _ = write!(out, r#" fill="{fill}""#);
                if self.fill_opacity < 1.0 {
                    let _ = write!(out, r#" fill-opacity="{}""#, num(self.fill_opacity));
                }
            }
        }
        if let Some(stroke) = self.stroke {
            let _ = write!(
                out,
                r#" stroke="{stroke}" stroke-width="{}""#,
                num(self.stroke_width)
            );
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
}
impl Anchor {
    fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub size: f64,
    pub bold: bool,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Circle { cx: f64, cy: f64, r: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Polygon { points: Vec<(f64, f64)> },
    /// A circular arc swept clockwise (in screen coordinates) from `start` to `end` degrees.
    Arc { cx: f64, cy: f64, r: f64, start: f64, end: f64 },
    Text { x: f64, y: f64, content: String, font: Font },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub shape: Shape,
    pub style: Style,
}
impl Element {
    fn write(&self, out: &mut String) {
        match &self.shape {
            Shape::Rect { x, y, width, height } => {
                let _ = write!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                    num(*x),
                    num(*y),
                    num(*width),
                    num(*height)
                );
            }
            Shape::Circle { cx, cy, r } => {
                let _ = write!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{}""#,
                    num(*cx),
                    num(*cy),
                    num(*r)
                );
            }
            Shape::Line { x1, y1, x2, y2 } => {
                let _ = write!(
                    out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                    num(*x1),
                    num(*y1),
                    num(*x2),
                    num(*y2)
                );
            }
            Shape::Polygon { points } => {
                let points = points
                    .iter()
                    .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
                    .collect::<Vec<_>>()
                    .join(" ");
                let _ = write!(out, r#"<polygon points="{points}""#);
            }
            Shape::Arc { cx, cy, r, start, end } => {
                let (x1, y1) = polar(*cx, *cy, *r, *start);
                let (x2, y2) = polar(*cx, *cy, *r, *end);
                let large_arc = u8::from(end - start > 180.0);
                let _ = write!(
                    out,
                    r#"<path d="M {} {} A {} {} 0 {large_arc} 1 {} {}""#,
                    num(x1),
                    num(y1),
                    num(*r),
                    num(*r),
                    num(x2),
                    num(y2)
                );
            }
            Shape::Text { x, y, content, font } => {
                let _ = write!(
                    out,
                    r#"<text x="{}" y="{}" font-family="sans-serif" font-size="{}" text-anchor="{}""#,
                    num(*x),
                    num(*y),
                    num(font.size),
                    font.anchor.as_str()
                );
                if font.bold {
                    out.push_str(r#" font-weight="bold""#);
                }
                self.style.write_attrs(out);
                let _ = write!(out, ">{}</text>", escape(content));
                return;
            }
        }
        self.style.write_attrs(out);
        out.push_str("/>");
    }
}

/// An SVG document of fixed pixel dimensions.
#[derive(Debug, Clone)]
pub struct Svg {
    width: f64,
    height: f64,
    background: Option<Rgb>,
    elements: Vec<Element>,
}
impl Svg {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            elements: vec![],
        }
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = Some(background);
        self
    }

    pub fn push(&mut self, shape: Shape, style: Style) {
        self.elements.push(Element { shape, style });
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = num(self.width),
            h = num(self.height)
        );
        out.push('\n');
        if let Some(background) = self.background {
            let _ = writeln!(
                out,
                r#"<rect x="0" y="0" width="100%" height="100%" fill="{background}"/>"#
            );
        }
        for element in &self.elements {
            element.write(&mut out);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

fn polar(cx: f64, cy: f64, r: f64, degrees: f64) -> (f64, f64) {
    let radians = degrees.to_radians();
    (cx + r * radians.cos(), cy + r * radians.sin())
}

fn num(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".into(),
        other => other.into(),
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_trims() {
        assert_eq!("12", num(12.0));
        assert_eq!("0.5", num(0.5));
        assert_eq!("1.23", num(1.23456));
        assert_eq!("0", num(-0.001));
        assert_eq!("-2.25", num(-2.25));
    }

    #[test]
    fn escape_markup() {
        assert_eq!(
            "Jamie Vardy&apos;s &lt;b&gt; &amp; &quot;co&quot;",
            escape(r#"Jamie Vardy's <b> & "co""#)
        );
    }

    #[test]
    fn render_circle() {
        let mut svg = Svg::new(100.0, 50.0);
        svg.push(
            Shape::Circle {
                cx: 10.0,
                cy: 20.5,
                r: 3.0,
            },
            Style::filled(Rgb::new(255, 0, 0))
                .with_fill_opacity(0.7)
                .with_stroke(Rgb::BLACK, 0.8),
        );
        let rendered = svg.render();
        assert!(rendered.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50" viewBox="0 0 100 50">"#));
        assert!(rendered.contains(
            r##"<circle cx="10" cy="20.5" r="3" fill="#ff0000" fill-opacity="0.7" stroke="#000000" stroke-width="0.8"/>"##
        ), "{rendered}");
        assert!(rendered.ends_with("</svg>\n"));
    }

    #[test]
    fn render_unfilled_line() {
        let mut svg = Svg::new(10.0, 10.0);
        svg.push(
            Shape::Line {
                x1: 0.0,
                y1: 0.0,
                x2: 10.0,
                y2: 10.0,
            },
            Style::stroked(Rgb::BLACK, 1.0),
        );
        assert!(svg.render().contains(
            r##"<line x1="0" y1="0" x2="10" y2="10" fill="none" stroke="#000000" stroke-width="1"/>"##
        ));
    }

    #[test]
    fn render_arc() {
        let mut svg = Svg::new(10.0, 10.0);
        svg.push(
            Shape::Arc {
                cx: 5.0,
                cy: 5.0,
                r: 5.0,
                start: 0.0,
                end: 90.0,
            },
            Style::stroked(Rgb::BLACK, 1.0),
        );
        assert!(svg.render().contains(r#"<path d="M 10 5 A 5 5 0 0 1 5 10""#));
    }

    #[test]
    fn render_text() {
        let mut svg = Svg::new(10.0, 10.0);
        svg.push(
            Shape::Text {
                x: 5.0,
                y: 2.0,
                content: "A & B".into(),
                font: Font {
                    size: 12.0,
                    bold: true,
                    anchor: Anchor::Middle,
                },
            },
            Style::filled(Rgb::BLACK),
        );
        assert!(svg.render().contains(
            r##"<text x="5" y="2" font-family="sans-serif" font-size="12" text-anchor="middle" font-weight="bold" fill="#000000">A &amp; B</text>"##
        ));
    }

    #[test]
    fn render_background() {
        let svg = Svg::new(10.0, 10.0).with_background(Rgb::WHITE);
        assert!(svg
            .render()
            .contains(r##"<rect x="0" y="0" width="100%" height="100%" fill="#ffffff"/>"##));
        assert!(svg.elements().is_empty());
    }
}
