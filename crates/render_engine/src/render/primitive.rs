//! GPU-resident triangle primitive
//!
//! Owns a vertex array object, the vertex buffer behind it, and the
//! program bound for the draw. Vertex data is uploaded once at
//! construction and never mutated afterwards.

use glow::HasContext as _;
use thiserror::Error;

use crate::render::shader::{ShaderError, ShaderProgram};

/// GPU resource setup errors for a primitive
///
/// Creation failure is unrecoverable for this component; there are no
/// retry semantics.
#[derive(Error, Debug)]
pub enum PrimitiveError {
    /// The driver refused to allocate a vertex array or buffer object
    #[error("GPU buffer allocation failed: {0}")]
    Allocation(String),

    /// The primitive's shader program could not be built
    #[error(transparent)]
    Shader(#[from] ShaderError),
}

/// Result type for primitive operations
pub type PrimitiveResult<T> = Result<T, PrimitiveError>;

/// Position-only vertex in normalized device coordinates
///
/// # Memory Layout
///
/// `#[repr(C)]` keeps the struct byte-compatible with the GPU-side
/// attribute description: three contiguous floats, no padding, so the
/// struct size doubles as the buffer stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in NDC space
    pub position: [f32; 3],
}

// Safe to implement Pod and Zeroable for Vertex since it only contains f32 arrays
unsafe impl bytemuck::Pod for Vertex {}
unsafe impl bytemuck::Zeroable for Vertex {}

/// The fixed triangle uploaded at construction: apex up, centered in NDC
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex { position: [0.0, 0.5, 0.0] },
    Vertex { position: [-0.5, -0.5, 0.0] },
    Vertex { position: [0.5, -0.5, 0.0] },
];

/// Attribute slot the position data is bound to
const POSITION_ATTRIBUTE: u32 = 0;

/// A drawable triangle resident in GPU memory
///
/// Holds the vertex array object recording the attribute layout, the
/// vertex buffer holding the positions, and the program used to draw.
/// The `&glow::Context` borrow is the current-context token: it comes
/// from the owning [`RenderContext`](crate::render::RenderContext), and
/// the borrow checker guarantees the primitive is dropped first.
pub struct GpuPrimitive<'gl> {
    gl: &'gl glow::Context,
    vao: glow::NativeVertexArray,
    vbo: glow::NativeBuffer,
    program: ShaderProgram<'gl>,
    vertex_count: i32,
}

impl<'gl> GpuPrimitive<'gl> {
    /// Allocate the GPU resources and upload the fixed triangle
    ///
    /// The upload uses a static usage hint; the data is never re-uploaded.
    /// The bound vertex array records the buffer binding and the attribute
    /// layout (slot 0, 3 × f32, non-normalized, tightly packed).
    ///
    /// Precondition: `gl` must come from a `RenderContext` whose OpenGL
    /// context is current on the calling thread. The constructor does not
    /// check this; a function table without a current context is a logic
    /// error and driver behavior is undefined.
    ///
    /// # Errors
    ///
    /// [`PrimitiveError::Allocation`] when a handle cannot be allocated,
    /// [`PrimitiveError::Shader`] when the program fails to build. Both
    /// are fatal.
    pub fn create(gl: &'gl glow::Context) -> PrimitiveResult<Self> {
        let program = ShaderProgram::create(gl)?;

        let (vao, vbo) = unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(PrimitiveError::Allocation)?;
            let vbo = match gl.create_buffer() {
                Ok(vbo) => vbo,
                Err(e) => {
                    gl.delete_vertex_array(vao);
                    return Err(PrimitiveError::Allocation(e));
                }
            };

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&TRIANGLE_VERTICES),
                glow::STATIC_DRAW,
            );

            gl.vertex_attrib_pointer_f32(
                POSITION_ATTRIBUTE,
                3,
                glow::FLOAT,
                false,
                std::mem::size_of::<Vertex>() as i32,
                0,
            );
            gl.enable_vertex_attrib_array(POSITION_ATTRIBUTE);

            gl.bind_vertex_array(None);

            (vao, vbo)
        };

        Ok(Self {
            gl,
            vao,
            vbo,
            program,
            vertex_count: TRIANGLE_VERTICES.len() as i32,
        })
    }

    /// Bind the program and vertex array, then issue the draw call
    ///
    /// Draws the stored vertex count as a triangle list. Leaves both
    /// bindings mutated afterwards; loops drawing several primitives
    /// rebind on every `draw` call anyway.
    pub fn draw(&self) {
        self.program.bind();
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl.draw_arrays(glow::TRIANGLES, 0, self.vertex_count);
        }
    }

    /// Number of vertices the draw call issues
    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }
}

impl Drop for GpuPrimitive<'_> {
    fn drop(&mut self) {
        // Release mirrors acquisition: the vertex array and the buffer
        // behind it both go. The program deletes itself via its own Drop.
        unsafe {
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_buffer(self.vbo);
        }
    }
}
