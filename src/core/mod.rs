pub mod color;
pub mod constants;
pub mod field;
pub mod nav;
pub mod particle;
pub mod render;
pub mod storage;
pub mod theme;

pub use color::*;
pub use field::*;
pub use nav::*;
pub use particle::*;
pub use render::*;
pub use storage::*;
pub use theme::*;
