//! Rendering module
//!
//! Frames are built as plain draw command lists so they can be tested
//! without a browser. The Canvas 2D backend only replays them.

pub mod ascii;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::{DrawCommand, build_frame};
