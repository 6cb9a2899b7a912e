//! # Render Engine
//!
//! A minimal real-time rendering bootstrap: a platform window with an
//! attached OpenGL 3.3 core-profile context, a GPU-resident triangle,
//! and a synchronous loop that clears, draws, and presents.
//!
//! ## Components
//!
//! - **[`render::RenderContext`]**: window and context lifecycle, event
//!   polling, buffer presentation
//! - **[`render::GpuPrimitive`]**: vertex array / vertex buffer ownership
//!   and the draw call
//! - **[`render::RenderLoop`]**: per-frame sequencing and close handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use render_engine::prelude::*;
//!
//! fn main() -> Result<(), RenderError> {
//!     let config = RendererConfig::default();
//!     let context = RenderContext::create(
//!         config.window.width,
//!         config.window.height,
//!         &config.window.title,
//!     )?;
//!     let triangle = GpuPrimitive::create(context.gl())?;
//!     RenderLoop::from_config(&config).run(&context, std::slice::from_ref(&triangle));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod render;

/// Commonly used types, re-exported for application crates
pub mod prelude {
    pub use crate::config::{Config, RendererConfig, WindowConfig};
    pub use crate::render::{GpuPrimitive, RenderContext, RenderError, RenderLoop};
}
