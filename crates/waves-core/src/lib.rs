pub mod color;
pub mod constants;
pub mod curve;
pub mod driver;
pub mod field;
pub mod render;
pub mod state;

pub use color::*;
pub use curve::*;
pub use driver::*;
pub use field::*;
pub use render::*;
pub use state::*;
