// Formatting and logging helpers shared by the panels.
use crate::model::{Circle, Point};

pub fn format_point(p: Point) -> String {
    format!("({:.1}, {:.1})", p.x, p.y)
}

pub fn format_circle(c: Circle) -> String {
    format!("center {} r = {:.1}", format_point(c.center), c.radius)
}

pub fn clog(msg: &str) {
    log::debug!("{msg}");
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
