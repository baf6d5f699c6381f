//! objscale -- rescale the vertices of a Wavefront OBJ file
//!
//! Every `v x y z` record is divided by a fixed factor (1000 by default, to go
//! from millimetres to metres) and written back as `v x y z` with 5 decimals.
//! All other lines (faces, normals, texture coordinates, comments, ...) are
//! copied as they are, in the same order.
//!
//! ```no_run
//! let stats = objscale::Scaler::default().scale_file("tree.obj", "tree_m.obj")?;
//! println!("{} vertices rescaled", stats.vertices);
//! # Ok::<(), objscale::ScaleError>(())
//! ```

#[macro_use]
extern crate log; //info/debug/error

mod error;
mod scaler;
mod vertex;

pub use crate::error::{ParseErrorKind, ScaleError};
pub use crate::scaler::{ScaleStats, Scaler, DEFAULT_FACTOR};
pub use crate::vertex::{is_vertex_line, parse_vertex, Point};
