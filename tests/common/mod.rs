// The main crate is wasm-only, so host tests include the pure-Rust core
// modules directly. Sibling references inside them go through `super::`,
// which resolves to the `core` module below.

#![allow(dead_code)]

pub mod core {
    pub mod color {
        include!("../../src/core/color.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod field {
        include!("../../src/core/field.rs");
    }
    pub mod nav {
        include!("../../src/core/nav.rs");
    }
    pub mod particle {
        include!("../../src/core/particle.rs");
    }
    pub mod render {
        include!("../../src/core/render.rs");
    }
    pub mod storage {
        include!("../../src/core/storage.rs");
    }
    pub mod theme {
        include!("../../src/core/theme.rs");
    }
}
