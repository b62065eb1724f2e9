//! Rendering data
//!
//! Screen-space triangle lists built from game state. No GPU code lives here;
//! a backend consumes [`DrawList`] and uploads [`Vertex`] bytes.

pub mod club;
pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{DrawList, build_frame};
pub use vertex::{Vertex, colors};
