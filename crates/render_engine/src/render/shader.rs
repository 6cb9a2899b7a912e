//! Shader program compilation and linking
//!
//! A core-profile context renders nothing meaningful without a bound
//! program, so the primitive carries this minimal vertex + fragment pair.
//! Sources are embedded; there is no shader asset loading.

use glow::HasContext as _;
use thiserror::Error;

/// Shader setup errors
///
/// All fatal: a primitive whose program cannot be built is unusable.
#[derive(Error, Debug)]
pub enum ShaderError {
    /// The driver refused to allocate a shader or program object
    #[error("shader object allocation failed: {0}")]
    Allocation(String),

    /// A stage failed to compile; carries the driver's info log
    #[error("shader compilation failed: {0}")]
    Compile(String),

    /// The program failed to link; carries the driver's info log
    #[error("program linking failed: {0}")]
    Link(String),
}

/// Result type for shader operations
pub type ShaderResult<T> = Result<T, ShaderError>;

/// Vertex stage: forwards the position attribute unchanged (NDC in, NDC out)
const VERTEX_SHADER_SOURCE: &str = "\
#version 330 core
layout (location = 0) in vec3 position;

void main() {
    gl_Position = vec4(position, 1.0);
}
";

/// Fragment stage: a single flat color
const FRAGMENT_SHADER_SOURCE: &str = "\
#version 330 core
out vec4 frag_color;

void main() {
    frag_color = vec4(1.0, 0.5, 0.2, 1.0);
}
";

/// A linked vertex + fragment program
///
/// The `&glow::Context` ties the program to the context that created it;
/// the program cannot outlive its context.
pub struct ShaderProgram<'gl> {
    gl: &'gl glow::Context,
    program: glow::NativeProgram,
}

impl<'gl> ShaderProgram<'gl> {
    /// Compile both embedded stages and link them into a program
    ///
    /// Stage objects are detached and deleted once the link completes;
    /// only the program object stays alive.
    ///
    /// # Errors
    ///
    /// [`ShaderError::Compile`] or [`ShaderError::Link`] with the driver's
    /// info log, or [`ShaderError::Allocation`] when object creation fails.
    pub fn create(gl: &'gl glow::Context) -> ShaderResult<Self> {
        let vertex = compile_stage(gl, glow::VERTEX_SHADER, VERTEX_SHADER_SOURCE)?;
        let fragment = match compile_stage(gl, glow::FRAGMENT_SHADER, FRAGMENT_SHADER_SOURCE) {
            Ok(fragment) => fragment,
            Err(e) => {
                unsafe { gl.delete_shader(vertex) };
                return Err(e);
            }
        };

        let program = unsafe {
            let program = match gl.create_program() {
                Ok(program) => program,
                Err(e) => {
                    gl.delete_shader(vertex);
                    gl.delete_shader(fragment);
                    return Err(ShaderError::Allocation(e));
                }
            };

            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);

            // The program keeps the linked binary; the stage objects are done.
            gl.detach_shader(program, vertex);
            gl.detach_shader(program, fragment);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            if !gl.get_program_link_status(program) {
                let info_log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(ShaderError::Link(info_log));
            }

            program
        };

        Ok(Self { gl, program })
    }

    /// Make this program current for subsequent draw calls
    pub fn bind(&self) {
        unsafe { self.gl.use_program(Some(self.program)) };
    }
}

impl Drop for ShaderProgram<'_> {
    fn drop(&mut self) {
        unsafe { self.gl.delete_program(self.program) };
    }
}

/// Compile one stage, returning the driver's info log on failure
fn compile_stage(
    gl: &glow::Context,
    stage: u32,
    source: &str,
) -> ShaderResult<glow::NativeShader> {
    unsafe {
        let shader = gl.create_shader(stage).map_err(ShaderError::Allocation)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let info_log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(ShaderError::Compile(info_log));
        }

        Ok(shader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_target_the_context_profile() {
        // Both sources must declare the same GLSL version as the 3.3 core
        // context the engine requests.
        assert!(VERTEX_SHADER_SOURCE.starts_with("#version 330 core"));
        assert!(FRAGMENT_SHADER_SOURCE.starts_with("#version 330 core"));
    }

    #[test]
    fn vertex_stage_reads_attribute_slot_zero() {
        // The primitive binds positions to slot 0; the stage must agree.
        assert!(VERTEX_SHADER_SOURCE.contains("layout (location = 0)"));
        assert!(VERTEX_SHADER_SOURCE.contains("in vec3 position"));
    }

    #[test]
    fn error_display_includes_driver_log() {
        let err = ShaderError::Compile("0:3: syntax error".to_string());
        assert!(err.to_string().contains("0:3: syntax error"));

        let err = ShaderError::Link("missing entry point".to_string());
        assert!(err.to_string().contains("missing entry point"));
    }

    #[test]
    #[ignore = "requires a display and GL drivers"]
    fn embedded_sources_compile_and_link() {
        // Would verify: ShaderProgram::create(gl) returns Ok against a
        // live 3.3 core context.
    }
}
