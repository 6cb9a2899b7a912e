//! The synchronous per-frame loop
//!
//! Sequences one frame: clear, draw each primitive, present, poll events,
//! forward close requests. Runs until the context reports a close request.

use glfw::{Action, Key, WindowEvent};

use crate::config::RendererConfig;
use crate::render::context::RenderContext;
use crate::render::primitive::GpuPrimitive;

/// Drives the render loop over a context and its primitives
///
/// Performs no cleanup of its own: the caller's scoped ownership of the
/// context and primitives releases resources in reverse creation order
/// once `run` returns.
pub struct RenderLoop {
    clear_color: [f32; 4],
}

impl RenderLoop {
    /// Create a loop with the given clear color
    pub const fn new(clear_color: [f32; 4]) -> Self {
        Self { clear_color }
    }

    /// Create a loop from renderer configuration
    pub const fn from_config(config: &RendererConfig) -> Self {
        Self::new(config.clear_color)
    }

    /// The clear color applied at the top of every frame
    pub const fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    /// Run until the context reports a close request
    ///
    /// The close flag is sampled once per iteration, at the top: a close
    /// request raised mid-frame still finishes that frame (draw, present,
    /// poll) before the loop exits.
    pub fn run(&self, context: &RenderContext, primitives: &[GpuPrimitive<'_>]) {
        log::info!("entering render loop");

        while !context.should_close() {
            context.clear(self.clear_color);

            for primitive in primitives {
                primitive.draw();
            }

            context.present();
            context.poll_events();
            forward_close_requests(context);
        }

        log::info!("render loop finished");
    }
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::from_config(&RendererConfig::default())
    }
}

/// Forward close requests from the event stream to the backend flag
///
/// The OS close button already raises the flag inside GLFW; Escape is the
/// one extra trigger this engine forwards.
fn forward_close_requests(context: &RenderContext) {
    for event in context.events() {
        match event {
            WindowEvent::Close | WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
                context.request_close();
            }
            _ => {}
        }
    }
}
