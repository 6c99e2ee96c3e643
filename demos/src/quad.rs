//! The textured quad, stored in GPU buffers.

use gl::types::*;
use std::{mem, ptr};

// position (3), color (3), texture coordinates (2)
const FLOATS_PER_VERTEX: usize = 8;

#[rustfmt::skip]
const VERTICES: [f32; 4 * FLOATS_PER_VERTEX] = [
   0.5,  0.5, 0.0,   1.0, 0.0, 0.0,   1.0, 1.0, // top right
   0.5, -0.5, 0.0,   0.0, 1.0, 0.0,   1.0, 0.0, // bottom right
  -0.5, -0.5, 0.0,   0.0, 0.0, 1.0,   0.0, 0.0, // bottom left
  -0.5,  0.5, 0.0,   1.0, 1.0, 0.0,   0.0, 1.0, // top left
];

const INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// A quad made of two indexed triangles.
///
/// Attribute 0 is the position, 1 the color and 2 the texture coordinates.
#[derive(Debug)]
pub struct Quad {
  vao: GLuint,
  vbo: GLuint,
  ebo: GLuint,
}

impl Quad {
  /// Upload the quad; the OpenGL context must be current.
  pub fn new() -> Self {
    let mut quad = Quad {
      vao: 0,
      vbo: 0,
      ebo: 0,
    };

    unsafe {
      gl::GenVertexArrays(1, &mut quad.vao);
      gl::GenBuffers(1, &mut quad.vbo);
      gl::GenBuffers(1, &mut quad.ebo);

      gl::BindVertexArray(quad.vao);

      gl::BindBuffer(gl::ARRAY_BUFFER, quad.vbo);
      gl::BufferData(
        gl::ARRAY_BUFFER,
        mem::size_of_val(&VERTICES) as GLsizeiptr,
        VERTICES.as_ptr() as *const _,
        gl::STATIC_DRAW,
      );

      gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, quad.ebo);
      gl::BufferData(
        gl::ELEMENT_ARRAY_BUFFER,
        mem::size_of_val(&INDICES) as GLsizeiptr,
        INDICES.as_ptr() as *const _,
        gl::STATIC_DRAW,
      );

      let stride = (FLOATS_PER_VERTEX * mem::size_of::<f32>()) as GLsizei;
      for (index, (size, offset)) in [(3, 0), (3, 3), (2, 6)].iter().enumerate() {
        gl::VertexAttribPointer(
          index as GLuint,
          *size,
          gl::FLOAT,
          gl::FALSE,
          stride,
          (*offset * mem::size_of::<f32>()) as *const _,
        );
        gl::EnableVertexAttribArray(index as GLuint);
      }

      // the element buffer binding is part of the VAO state, so only unbind the VAO
      gl::BindVertexArray(0);
      gl::BindBuffer(gl::ARRAY_BUFFER, 0);
    }

    quad
  }

  /// Draw the quad with whatever program and texture are currently bound.
  pub fn draw(&self) {
    unsafe {
      gl::BindVertexArray(self.vao);
      gl::DrawElements(
        gl::TRIANGLES,
        INDICES.len() as GLsizei,
        gl::UNSIGNED_INT,
        ptr::null(),
      );
      gl::BindVertexArray(0);
    }
  }
}

impl Drop for Quad {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteVertexArrays(1, &self.vao);
      gl::DeleteBuffers(1, &self.vbo);
      gl::DeleteBuffers(1, &self.ebo);
    }
  }
}
