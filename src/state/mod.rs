pub mod surface;

pub use surface::{SurfaceRect, grid_lines};
