//! # Rendering System
//!
//! The core rendering abstraction: an OpenGL context bound to a GLFW
//! window, the GPU-resident primitive drawn each frame, and the loop that
//! sequences clear, draw, present, and event polling.
//!
//! ## Architecture
//!
//! - **`RenderContext`**: window and context lifecycle, presentation, events
//! - **`ShaderProgram`**: the program object bound for the draw
//! - **`GpuPrimitive`**: vertex array / vertex buffer ownership and the draw call
//! - **`RenderLoop`**: frame sequencing and close-request forwarding
//!
//! ## Resource Lifetime
//!
//! GPU resources borrow the `glow::Context` owned by their
//! `RenderContext`. The borrow checker therefore rejects any program that
//! would drop the context while a resource created under it is still
//! alive; releases happen in strict reverse order of acquisition.

pub mod context;
pub mod frame_loop;
pub mod primitive;
pub mod shader;

pub use context::{ContextError, ContextResult, RenderContext};
pub use frame_loop::RenderLoop;
pub use primitive::{GpuPrimitive, PrimitiveError, PrimitiveResult, Vertex, TRIANGLE_VERTICES};
pub use shader::{ShaderError, ShaderProgram, ShaderResult};

use thiserror::Error;

/// Top-level rendering errors
///
/// Every variant is fatal: each represents an environment precondition
/// (drivers, display server) the process cannot recover from. They
/// propagate to the entry point, are reported once, and end the process.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Window or OpenGL context setup failed
    #[error(transparent)]
    Context(#[from] ContextError),

    /// GPU resource setup for a primitive failed
    #[error(transparent)]
    Primitive(#[from] PrimitiveError),
}
