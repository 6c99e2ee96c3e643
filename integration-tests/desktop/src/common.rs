//! Shaders and GL readback shared by the fixtures.

use gl::types::*;
use std::ffi::CString;

pub const VS: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec2 aTexCoord;

out vec2 TexCoord;

uniform mat4 transform;

void main()
{
  gl_Position = transform * vec4(aPos, 1.0);
  TexCoord = aTexCoord;
}";

pub const FS: &str = "#version 330 core
out vec4 FragColor;

in vec2 TexCoord;

uniform sampler2D texture1;
uniform float time;

void main()
{
  FragColor = texture(texture1, TexCoord) * (0.5 + 0.5 * sin(time));
}";

/// Read back `N` floats from a uniform of the given program.
pub fn read_uniform<const N: usize>(program: GLuint, name: &str) -> [f32; N] {
  let c_name = CString::new(name).expect("uniform name");
  let mut values = [0.; N];

  unsafe {
    let location = gl::GetUniformLocation(program, c_name.as_ptr());
    assert!(location >= 0, "{} is not an active uniform", name);
    gl::GetUniformfv(program, location, values.as_mut_ptr());
  }

  values
}

/// Program currently bound by the driver.
pub fn current_program() -> GLuint {
  let mut program: GLint = 0;

  unsafe {
    gl::GetIntegerv(gl::CURRENT_PROGRAM, &mut program);
  }

  program as GLuint
}
