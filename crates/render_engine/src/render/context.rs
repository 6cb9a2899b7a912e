//! Window and OpenGL context management using GLFW
//!
//! Provides window creation, context setup, event polling, and buffer
//! presentation for the render loop.

use std::cell::RefCell;
use std::ffi::c_void;

use glfw::{Context as _, GlfwReceiver, PWindow, WindowEvent};
use glow::HasContext as _;
use thiserror::Error;

/// Context management errors
#[derive(Error, Debug)]
pub enum ContextError {
    /// GLFW could not start; the display server or drivers are unusable
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// The window or its OpenGL context could not be created
    #[error("window or OpenGL context creation failed")]
    ContextCreationFailed,

    /// The context exists but the OpenGL entry points could not be loaded
    #[error("OpenGL function pointer resolution failed")]
    FunctionResolutionFailed,
}

/// Result type for context operations
pub type ContextResult<T> = Result<T, ContextError>;

/// OpenGL version requested for the context
const GL_VERSION: (u32, u32) = (3, 3);

/// An OS window with a current OpenGL context and loaded function table
///
/// Owns the GLFW library handle, the window, the event receiver, and the
/// `glow` function table. The GLFW pieces sit behind `RefCell` so the
/// non-mutating query/poll/present surface can coexist with outstanding
/// [`gl`](Self::gl) borrows held by GPU resources.
///
/// Never cloned: one value owns one OS window. Dropping releases the
/// function table, then the window, then finalizes GLFW; the field order
/// below is what enforces that sequence.
pub struct RenderContext {
    width: u32,
    height: u32,
    title: String,
    gl: glow::Context,
    window: RefCell<PWindow>,
    events: GlfwReceiver<(f64, WindowEvent)>,
    glfw: RefCell<glfw::Glfw>,
}

impl RenderContext {
    /// Create a window with a current OpenGL 3.3 core-profile context
    ///
    /// Initializes GLFW, creates the window, makes its context current on
    /// the calling thread, and loads the OpenGL function table.
    ///
    /// # Errors
    ///
    /// [`ContextError::InitializationFailed`] when GLFW cannot start,
    /// [`ContextError::ContextCreationFailed`] when the window or context
    /// cannot be created (GLFW is terminated again before the error
    /// propagates, so a later call can still succeed), and
    /// [`ContextError::FunctionResolutionFailed`] when the OpenGL entry
    /// points cannot be resolved after context creation.
    pub fn create(width: u32, height: u32, title: &str) -> ContextResult<Self> {
        Self::create_with_version(width, height, title, GL_VERSION)
    }

    fn create_with_version(
        width: u32,
        height: u32,
        title: &str,
        gl_version: (u32, u32),
    ) -> ContextResult<Self> {
        let mut glfw =
            glfw::init(glfw::log_errors).map_err(|_| ContextError::InitializationFailed)?;

        // Core profile only: no fixed-function legacy surface.
        glfw.window_hint(glfw::WindowHint::ContextVersion(gl_version.0, gl_version.1));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        glfw.window_hint(glfw::WindowHint::Resizable(false));

        // Propagating this error drops `glfw`, which terminates the
        // library again; a failed creation leaves no process-wide state.
        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(ContextError::ContextCreationFailed)?;

        window.make_current();
        window.set_close_polling(true);
        window.set_key_polling(true);

        let gl = Self::load_gl(&mut window)?;
        let version = unsafe { gl.get_parameter_string(glow::VERSION) };
        log::debug!("OpenGL context ready: {}", version);

        Ok(Self {
            width,
            height,
            title: title.to_string(),
            gl,
            window: RefCell::new(window),
            events,
            glfw: RefCell::new(glfw),
        })
    }

    /// Build the `glow` function table over `glfwGetProcAddress`
    ///
    /// The loader only resolves symbols once a context is current, so a
    /// symbol every GL version exports is probed before the table is
    /// trusted.
    fn load_gl(window: &mut PWindow) -> ContextResult<glow::Context> {
        // glfwGetProcAddress hands back a nullable function pointer.
        fn as_ptr(symbol: glfw::GLProc) -> *const c_void {
            unsafe { std::mem::transmute(symbol) }
        }

        if as_ptr(window.get_proc_address("glClear")).is_null() {
            return Err(ContextError::FunctionResolutionFailed);
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|name| as_ptr(window.get_proc_address(name)))
        };
        Ok(gl)
    }

    /// Whether the backend has observed a close request
    ///
    /// Non-mutating; flips to `true` only through event polling (OS close
    /// button) or [`request_close`](Self::request_close).
    pub fn should_close(&self) -> bool {
        self.window.borrow().should_close()
    }

    /// Pump pending window and input events
    ///
    /// Non-blocking: dispatches whatever the OS has queued, including
    /// close-flag updates, and returns immediately.
    pub fn poll_events(&self) {
        self.glfw.borrow_mut().poll_events();
    }

    /// Drain the events buffered since the last poll
    pub fn events(&self) -> Vec<WindowEvent> {
        glfw::flush_messages(&self.events)
            .map(|(_, event)| event)
            .collect()
    }

    /// Swap the presentation buffers, making the drawn frame visible
    pub fn present(&self) {
        self.window.borrow_mut().swap_buffers();
    }

    /// Set the clear color and clear the color buffer
    pub fn clear(&self, color: [f32; 4]) {
        unsafe {
            self.gl.clear_color(color[0], color[1], color[2], color[3]);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    /// Raise the backend close flag
    pub fn request_close(&self) {
        self.window.borrow_mut().set_should_close(true);
    }

    /// The loaded OpenGL function table
    ///
    /// GPU-resource constructors take this reference; holding it ties the
    /// resource's lifetime to the context, so the context cannot be
    /// dropped first.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Requested client area size in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Title the window was created with
    pub fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RenderContext needs a display server and GL drivers, so everything
    // touching a live window is #[ignore]d and runs on a workstation.

    #[test]
    fn error_messages_name_the_failed_step() {
        assert_eq!(
            ContextError::InitializationFailed.to_string(),
            "GLFW initialization failed"
        );
        assert_eq!(
            ContextError::ContextCreationFailed.to_string(),
            "window or OpenGL context creation failed"
        );
        assert_eq!(
            ContextError::FunctionResolutionFailed.to_string(),
            "OpenGL function pointer resolution failed"
        );
    }

    #[test]
    fn context_api_shape_is_stable() {
        // Compile-time check that the query surface stays non-mutating.
        fn _assert_api(context: &RenderContext) {
            let _closing: bool = context.should_close();
            let _gl: &glow::Context = context.gl();
            let _size: (u32, u32) = context.size();
            let _title: &str = context.title();
            context.poll_events();
            context.present();
        }
    }

    #[test]
    #[ignore = "requires a display and GL drivers"]
    fn fresh_context_does_not_report_close() {
        let context = RenderContext::create(800, 600, "T").unwrap();
        assert!(!context.should_close());
        assert_eq!(context.size(), (800, 600));
        assert_eq!(context.title(), "T");
    }

    #[test]
    #[ignore = "requires a display and GL drivers"]
    fn polling_without_new_events_is_idempotent() {
        let context = RenderContext::create(320, 240, "idempotence").unwrap();
        let before = context.should_close();
        context.poll_events();
        context.poll_events();
        context.present();
        context.present();
        assert_eq!(context.should_close(), before);
    }

    #[test]
    #[ignore = "requires a display and GL drivers"]
    fn close_request_is_visible_after_next_poll() {
        let context = RenderContext::create(320, 240, "close signal").unwrap();
        context.request_close();
        context.poll_events();
        assert!(context.should_close());
    }

    #[test]
    #[ignore = "requires a display and GL drivers"]
    fn failed_creation_leaves_backend_reusable() {
        // An unsatisfiable context version must fail with the creation
        // error and roll GLFW back so the next attempt can succeed.
        let failed = RenderContext::create_with_version(320, 240, "unsatisfiable", (99, 9));
        assert!(matches!(failed, Err(ContextError::ContextCreationFailed)));

        let recovered = RenderContext::create(320, 240, "recovered");
        assert!(recovered.is_ok());
    }
}
