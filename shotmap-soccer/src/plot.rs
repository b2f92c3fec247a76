//! Shot map: a scatter of shot locations on the pitch, shaped by outcome and coloured and sized by
//! expected goals.

use rustc_hash::FxHashMap;
use shotmap::colour::{ColourScale, Rgb};
use shotmap::freq::{Frequency, Tally};
use shotmap::norm::Normalize;
use shotmap::svg::{Anchor, Font, Shape, Style, Svg};
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::domain::{Event, Location, Marker, ShotOutcome};
use crate::pitch::{Canvas, Pitch};

/// Marker area, in square points, per unit of xG.
pub const AREA_PER_XG: f64 = 500.0;

const PIXELS_PER_POINT: f64 = 100.0 / 72.0;
const FILL_OPACITY: f64 = 0.7;
const EDGE_WIDTH: f64 = 0.8;
const CROSS_WIDTH: f64 = 2.0;
const TITLE_SIZE: f64 = 24.0;
const LEGEND_FONT_SIZE: f64 = 11.0;
const LEGEND_ENTRY_WIDTH: f64 = 110.0;
const LEGEND_MARKER_EXTENT: f64 = 12.0;
const NO_OUTCOME: &str = "(none)";

/// How xG values are mapped onto the colour scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourNorm {
    /// Each outcome's shots are normalised against that outcome's own xG range, so equal xG
    /// values may be coloured differently across outcomes.
    #[default]
    PerOutcome,

    /// All plotted shots share a single xG range.
    Global,
}

#[derive(Debug, Error, PartialEq)]
pub enum PlotError {
    #[error("event {event_id} has no location")]
    MissingLocation { event_id: String },

    #[error("event {event_id} has no xG value")]
    MissingXg { event_id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub event_id: String,
    pub outcome: ShotOutcome,
    pub location: Location,
    pub xg: f64,
    pub colour: Rgb,
    /// Marker area in square points; linear in xG.
    pub area: f64,
}
impl Point {
    pub fn marker(&self) -> Marker {
        self.outcome.marker()
    }

    /// Side length of the marker's bounding box, in pixels.
    pub fn extent(&self) -> f64 {
        self.area.sqrt() * PIXELS_PER_POINT
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShotMap {
    pub title: String,
    /// Plotted shots, grouped by outcome in marker order and otherwise in collection order.
    pub points: Vec<Point>,
    /// Events whose outcome has no marker, by outcome.
    pub dropped: Vec<Frequency<String>>,
}
impl ShotMap {
    pub fn layout(
        title: impl Into<String>,
        events: &[Event],
        norm: ColourNorm,
        scale: &ColourScale,
    ) -> Result<Self, PlotError> {
        let mut subsets: FxHashMap<ShotOutcome, Vec<(&Event, Location, f64)>> =
            FxHashMap::default();
        let mut dropped = Tally::default();
        for event in events {
            let outcome = event
                .outcome()
                .and_then(|outcome| outcome.parse::<ShotOutcome>().ok());
            match outcome {
                None => dropped.add(event.outcome().unwrap_or(NO_OUTCOME).to_owned()),
                Some(outcome) => {
                    let location = event.location.ok_or_else(|| PlotError::MissingLocation {
                        event_id: event.id.clone(),
                    })?;
                    let xg = event.xg.ok_or_else(|| PlotError::MissingXg {
                        event_id: event.id.clone(),
                    })?;
                    subsets.entry(outcome).or_default().push((event, location, xg));
                }
            }
        }

        let global = Normalize::fit(subsets.values().flatten().map(|&(_, _, xg)| xg));
        let mut points = Vec::with_capacity(events.len());
        for outcome in ShotOutcome::iter() {
            let Some(subset) = subsets.get(&outcome) else {
                continue;
            };
            let normalize = match norm {
                ColourNorm::PerOutcome => Normalize::fit(subset.iter().map(|&(_, _, xg)| xg)),
                ColourNorm::Global => global,
            };
            for &(event, location, xg) in subset {
                let t = normalize.map(|normalize| normalize.apply(xg)).unwrap_or(0.0);
                points.push(Point {
                    event_id: event.id.clone(),
                    outcome,
                    location,
                    xg,
                    colour: scale.at(t),
                    area: AREA_PER_XG * xg,
                });
            }
        }

        Ok(Self {
            title: title.into(),
            points,
            dropped: dropped.relative(),
        })
    }

    pub fn plotted(&self, outcome: ShotOutcome) -> usize {
        self.points
            .iter()
            .filter(|point| point.outcome == outcome)
            .count()
    }

    pub fn dropped_count(&self) -> usize {
        self.dropped.iter().map(|row| row.count).sum()
    }

    pub fn render(&self, canvas: &Canvas) -> Svg {
        let mut svg = canvas.blank();
        Pitch::new(canvas).draw(&mut svg);
        for point in &self.points {
            let (cx, cy) = canvas.to_screen(point.location);
            draw_marker(&mut svg, point.marker(), cx, cy, point.extent(), point.colour);
        }
        svg.push(
            Shape::Text {
                x: canvas.width() / 2.0,
                y: canvas.header / 2.0 + TITLE_SIZE / 3.0,
                content: self.title.clone(),
                font: Font {
                    size: TITLE_SIZE,
                    bold: true,
                    anchor: Anchor::Middle,
                },
            },
            Style::filled(Rgb::BLACK),
        );
        self.render_legend(&mut svg, canvas);
        svg
    }

    /// A single row of entries centred beneath the pitch, one per plotted outcome, each drawn in
    /// the colour of the outcome's first shot.
    fn render_legend(&self, svg: &mut Svg, canvas: &Canvas) {
        let entries = ShotOutcome::iter()
            .filter_map(|outcome| {
                self.points
                    .iter()
                    .find(|point| point.outcome == outcome)
                    .map(|point| (outcome, point.colour))
            })
            .collect::<Vec<_>>();
        let row_width = entries.len() as f64 * LEGEND_ENTRY_WIDTH;
        let y = canvas.pitch_bottom() + canvas.footer / 2.0;
        for (index, (outcome, colour)) in entries.into_iter().enumerate() {
            let x = (canvas.width() - row_width) / 2.0 + index as f64 * LEGEND_ENTRY_WIDTH;
            let marker_x = x + LEGEND_MARKER_EXTENT;
            draw_marker(svg, outcome.marker(), marker_x, y, LEGEND_MARKER_EXTENT, colour);
            svg.push(
                Shape::Text {
                    x: marker_x + LEGEND_MARKER_EXTENT,
                    y: y + LEGEND_FONT_SIZE / 3.0,
                    content: outcome.to_string(),
                    font: Font {
                        size: LEGEND_FONT_SIZE,
                        bold: false,
                        anchor: Anchor::Start,
                    },
                },
                Style::filled(Rgb::BLACK),
            );
        }
    }
}

fn draw_marker(svg: &mut Svg, marker: Marker, cx: f64, cy: f64, extent: f64, colour: Rgb) {
    let half = extent / 2.0;
    let style = if marker.is_filled() {
        Style::filled(colour)
            .with_fill_opacity(FILL_OPACITY)
            .with_stroke(Rgb::BLACK, EDGE_WIDTH)
    } else {
        Style::stroked(colour, CROSS_WIDTH)
    };
    match marker {
        Marker::Circle => svg.push(Shape::Circle { cx, cy, r: half }, style),
        Marker::Square => svg.push(
            Shape::Rect {
                x: cx - half,
                y: cy - half,
                width: extent,
                height: extent,
            },
            style,
        ),
        Marker::Diamond => svg.push(
            Shape::Polygon {
                points: vec![
                    (cx, cy - half),
                    (cx + half * 0.6, cy),
                    (cx, cy + half),
                    (cx - half * 0.6, cy),
                ],
            },
            style,
        ),
        Marker::Triangle => svg.push(
            Shape::Polygon {
                points: vec![
                    (cx, cy - half),
                    (cx + half, cy + half),
                    (cx - half, cy + half),
                ],
            },
            style,
        ),
        Marker::Cross => {
            svg.push(
                Shape::Line {
                    x1: cx - half,
                    y1: cy - half,
                    x2: cx + half,
                    y2: cy + half,
                },
                style.clone(),
            );
            svg.push(
                Shape::Line {
                    x1: cx - half,
                    y1: cy + half,
                    x2: cx + half,
                    y2: cy - half,
                },
                style,
            );
        }
    }
}
