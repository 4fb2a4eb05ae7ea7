pub mod color;
pub mod config;
pub mod consts;
pub mod curve;
pub mod error;
pub mod frame;
pub mod io;
pub mod transform;

pub use transform::MonotoneImageTransformer;
