pub mod keyboard;
pub mod resize;

pub use keyboard::wire_quick_nav;
pub use resize::wire_viewport_resize;
