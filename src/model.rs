//! Core data models for the circumcircle canvas.
//! Points and circles live in surface coordinates (origin top-left, y down).
//! The click state machine is a pure function of the previous state and the click.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use yew::Reducible;

use crate::geometry::circle_from_three_points;

/// Points needed before a circle can be solved.
pub const MAX_POINTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn distance(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Exact coordinate match; clicks are compared as delivered, without tolerance.
    pub fn same_position(self, other: Point) -> bool {
        self.x == other.x && self.y == other.y
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    /// Non-negative, equal to the distance from `center` to each defining point.
    pub radius: f64,
}

/// Where the click sequence currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Fewer than three points gathered.
    Collecting(usize),
    /// Three points gathered and a circle computed.
    Solved,
    /// Three collinear points gathered; no circle exists.
    Degenerate,
}

/// Advisory raised by a rejected click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Notification {
    DuplicatePoint { point: Point },
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::DuplicatePoint { .. } => {
                write!(f, "Two points can't be exactly the same")
            }
        }
    }
}

/// Status line shown under the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    NeedPoints(usize),
    CircleDrawn,
    Collinear,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::NeedPoints(1) => {
                write!(f, "Pick 1 more point on the canvas for the circle to be drawn")
            }
            Status::NeedPoints(n) => {
                write!(f, "Pick {n} points on the canvas for the circle to be drawn")
            }
            Status::CircleDrawn => write!(f, "Pick a new point to draw another circle"),
            Status::Collinear => {
                write!(f, "The points are collinear, pick a new point to start over")
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
    points: Vec<Point>,
    circle: Option<Circle>,
}

impl InteractionState {
    /// Collected points in click order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn circle(&self) -> Option<Circle> {
        self.circle
    }

    pub fn phase(&self) -> Phase {
        match (self.points.len(), self.circle) {
            (_, Some(_)) => Phase::Solved,
            (n, None) if n >= MAX_POINTS => Phase::Degenerate,
            (n, None) => Phase::Collecting(n),
        }
    }

    pub fn status(&self) -> Status {
        match self.phase() {
            Phase::Collecting(n) => Status::NeedPoints(MAX_POINTS - n),
            Phase::Solved => Status::CircleDrawn,
            Phase::Degenerate => Status::Collinear,
        }
    }

    /// Applies one click and returns the next state plus an optional advisory.
    ///
    /// A full sequence (solved or collinear) is discarded first, so the click
    /// always starts a new one. Otherwise a click on an already collected
    /// position is rejected and the state is returned unchanged.
    pub fn click(&self, point: Point) -> (InteractionState, Option<Notification>) {
        match self.phase() {
            Phase::Solved | Phase::Degenerate => (
                InteractionState {
                    points: vec![point],
                    circle: None,
                },
                None,
            ),
            Phase::Collecting(_) => {
                if self.points.iter().any(|p| p.same_position(point)) {
                    return (
                        self.clone(),
                        Some(Notification::DuplicatePoint { point }),
                    );
                }
                let mut points = self.points.clone();
                points.push(point);
                let circle = match points.as_slice() {
                    [p1, p2, p3] => circle_from_three_points(*p1, *p2, *p3),
                    _ => None,
                };
                (InteractionState { points, circle }, None)
            }
        }
    }
}

/// Free-function form of [`InteractionState::click`].
pub fn transition(state: &InteractionState, click: Point) -> (InteractionState, Option<Notification>) {
    state.click(click)
}

// ---------------- Reducer & Actions -----------------

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawingState {
    pub interaction: InteractionState,
    /// Advisory waiting to be shown; cleared on dismissal or on the next accepted click.
    pub notification: Option<Notification>,
    /// Bumped on every click, accepted or rejected, so views can react.
    pub version: u64,
}

#[derive(Clone, Debug)]
pub enum DrawingAction {
    Click(Point),
    DismissNotification,
}

impl Reducible for DrawingState {
    type Action = DrawingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DrawingAction::Click(point) => {
                let (interaction, notification) = transition(&self.interaction, point);
                match notification {
                    Some(n) => log::warn!("click at ({}, {}) rejected: {n}", point.x, point.y),
                    None => log::debug!(
                        "click at ({}, {}) -> {:?}",
                        point.x,
                        point.y,
                        interaction.phase()
                    ),
                }
                if let Some(circle) = interaction.circle() {
                    log::info!(
                        "circle solved: center ({:.2}, {:.2}) radius {:.2}",
                        circle.center.x,
                        circle.center.y,
                        circle.radius
                    );
                }
                Rc::new(DrawingState {
                    interaction,
                    notification,
                    version: self.version.wrapping_add(1),
                })
            }
            DrawingAction::DismissNotification => {
                if self.notification.is_none() {
                    return self;
                }
                let mut new = (*self).clone();
                new.notification = None;
                Rc::new(new)
            }
        }
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;
