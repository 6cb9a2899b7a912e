//! Hello-triangle demo application
//!
//! Opens a window, uploads one triangle, and runs the render loop until
//! the window is closed. Takes no command-line arguments.

use render_engine::prelude::*;

fn main() {
    render_engine::foundation::logging::init();

    if let Err(e) = run() {
        eprintln!("Critical error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), RenderError> {
    let config = RendererConfig::default();

    log::info!(
        "creating {}x{} window \"{}\"...",
        config.window.width,
        config.window.height,
        config.window.title
    );
    let context = RenderContext::create(
        config.window.width,
        config.window.height,
        &config.window.title,
    )?;

    log::info!("uploading triangle...");
    let triangle = GpuPrimitive::create(context.gl())?;

    // Dropped in reverse order on return: triangle first, then the
    // context that hosts it.
    RenderLoop::from_config(&config).run(&context, std::slice::from_ref(&triangle));
    Ok(())
}
