//! Pitch diagram in StatsBomb coordinates: the origin is the top-left corner flag, x runs along the
//! length towards the opposition goal and y runs down across the width.

use shotmap::colour::Rgb;
use shotmap::svg::{Shape, Style, Svg};

use crate::domain::{Location, PITCH_LENGTH, PITCH_WIDTH};

const PENALTY_AREA_DEPTH: f64 = 18.0;
const PENALTY_AREA_WIDTH: f64 = 44.0;
const GOAL_AREA_DEPTH: f64 = 6.0;
const GOAL_AREA_WIDTH: f64 = 20.0;
const PENALTY_SPOT_DISTANCE: f64 = 12.0;
const CIRCLE_RADIUS: f64 = 10.0;
const GOAL_WIDTH: f64 = 8.0;
const GOAL_DEPTH: f64 = 2.0;
const SPOT_RADIUS: f64 = 0.4;

/// Places the pitch on a pixel canvas, leaving room for a title above and a legend below.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// Pixels per pitch unit.
    pub scale: f64,
    pub margin: f64,
    pub header: f64,
    pub footer: f64,
}
impl Canvas {
    pub fn width(&self) -> f64 {
        PITCH_LENGTH * self.scale + 2.0 * self.margin
    }

    pub fn height(&self) -> f64 {
        PITCH_WIDTH * self.scale + self.header + self.footer
    }

    pub fn to_screen(&self, location: Location) -> (f64, f64) {
        (
            self.margin + location.x * self.scale,
            self.header + location.y * self.scale,
        )
    }

    pub fn pitch_bottom(&self) -> f64 {
        self.header + PITCH_WIDTH * self.scale
    }

    pub fn blank(&self) -> Svg {
        Svg::new(self.width(), self.height()).with_background(Rgb::WHITE)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            scale: 8.0,
            margin: 40.0,
            header: 80.0,
            footer: 60.0,
        }
    }
}

pub struct Pitch<'a> {
    canvas: &'a Canvas,
    line: Rgb,
    line_width: f64,
}
impl<'a> Pitch<'a> {
    pub fn new(canvas: &'a Canvas) -> Self {
        Self {
            canvas,
            line: Rgb::BLACK,
            line_width: 1.5,
        }
    }

    pub fn draw(&self, svg: &mut Svg) {
        self.rect(svg, 0.0, 0.0, PITCH_LENGTH, PITCH_WIDTH);
        self.line(svg, PITCH_LENGTH / 2.0, 0.0, PITCH_LENGTH / 2.0, PITCH_WIDTH);
        self.circle(svg, PITCH_LENGTH / 2.0, PITCH_WIDTH / 2.0, CIRCLE_RADIUS);
        self.spot(svg, PITCH_LENGTH / 2.0, PITCH_WIDTH / 2.0);
        for end in [End::Left, End::Right] {
            self.draw_end(svg, end);
        }
    }

    fn draw_end(&self, svg: &mut Svg, end: End) {
        let mid = PITCH_WIDTH / 2.0;
        let penalty_x = end.x(PENALTY_AREA_DEPTH);
        self.rect(
            svg,
            f64::min(end.x(0.0), penalty_x),
            mid - PENALTY_AREA_WIDTH / 2.0,
            PENALTY_AREA_DEPTH,
            PENALTY_AREA_WIDTH,
        );
        let goal_area_x = end.x(GOAL_AREA_DEPTH);
        self.rect(
            svg,
            f64::min(end.x(0.0), goal_area_x),
            mid - GOAL_AREA_WIDTH / 2.0,
            GOAL_AREA_DEPTH,
            GOAL_AREA_WIDTH,
        );
        let goal_x = end.x(-GOAL_DEPTH);
        self.rect(
            svg,
            f64::min(end.x(0.0), goal_x),
            mid - GOAL_WIDTH / 2.0,
            GOAL_DEPTH,
            GOAL_WIDTH,
        );

        let spot_x = end.x(PENALTY_SPOT_DISTANCE);
        self.spot(svg, spot_x, mid);

        // the arc is the part of the spot's circle that lies outside the penalty area
        let half_angle = ((PENALTY_AREA_DEPTH - PENALTY_SPOT_DISTANCE) / CIRCLE_RADIUS)
            .acos()
            .to_degrees();
        let facing = match end {
            End::Left => 0.0,
            End::Right => 180.0,
        };
        let (cx, cy) = self.canvas.to_screen(Location::new(spot_x, mid));
        svg.push(
            Shape::Arc {
                cx,
                cy,
                r: CIRCLE_RADIUS * self.canvas.scale,
                start: facing - half_angle,
                end: facing + half_angle,
            },
            self.stroke(),
        );
    }

    fn stroke(&self) -> Style {
        Style::stroked(self.line, self.line_width)
    }

    fn rect(&self, svg: &mut Svg, x: f64, y: f64, length: f64, width: f64) {
        let (x, y) = self.canvas.to_screen(Location::new(x, y));
        svg.push(
            Shape::Rect {
                x,
                y,
                width: length * self.canvas.scale,
                height: width * self.canvas.scale,
            },
            self.stroke(),
        );
    }

    fn line(&self, svg: &mut Svg, x1: f64, y1: f64, x2: f64, y2: f64) {
        let (x1, y1) = self.canvas.to_screen(Location::new(x1, y1));
        let (x2, y2) = self.canvas.to_screen(Location::new(x2, y2));
        svg.push(Shape::Line { x1, y1, x2, y2 }, self.stroke());
    }

    fn circle(&self, svg: &mut Svg, x: f64, y: f64, r: f64) {
        let (cx, cy) = self.canvas.to_screen(Location::new(x, y));
        svg.push(
            Shape::Circle {
                cx,
                cy,
                r: r * self.canvas.scale,
            },
            self.stroke(),
        );
    }

    fn spot(&self, svg: &mut Svg, x: f64, y: f64) {
        let (cx, cy) = self.canvas.to_screen(Location::new(x, y));
        svg.push(
            Shape::Circle {
                cx,
                cy,
                r: SPOT_RADIUS * self.canvas.scale,
            },
            Style::filled(self.line),
        );
    }
}

#[derive(Debug, Clone, Copy)]
enum End {
    Left,
    Right,
}
impl End {
    /// The x-coordinate `distance` units infield from this end's goal line.
    fn x(&self, distance: f64) -> f64 {
        match self {
            End::Left => distance,
            End::Right => PITCH_LENGTH - distance,
        }
    }
}
