use super::state::GLState;
use crate::gl33::GL33;
use gl::{self, types::*};
use quadform::{
  backend::shader::{Shader, Uniformable},
  shader::{
    types::Mat44, ProgramError, StageError, StageType, Uniform, UniformType, UniformWarning,
  },
};
use std::{cell::RefCell, ffi::CString, ptr::null, rc::Rc};

/// A compiled OpenGL shader stage.
#[derive(Debug)]
pub struct Stage {
  handle: GLuint,
}

impl Drop for Stage {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteShader(self.handle);
    }
  }
}

/// A linked OpenGL shader program.
#[derive(Debug)]
pub struct Program {
  handle: GLuint,
  state: Rc<RefCell<GLState>>,
}

impl Program {
  /// OpenGL name of the program object.
  pub fn handle(&self) -> GLuint {
    self.handle
  }

  fn link(&self) -> Result<(), ProgramError> {
    let handle = self.handle;

    unsafe {
      gl::LinkProgram(handle);

      let mut linked: GLint = gl::FALSE.into();
      gl::GetProgramiv(handle, gl::LINK_STATUS, &mut linked);

      if linked == gl::TRUE.into() {
        Ok(())
      } else {
        Err(ProgramError::link_failed(program_info_log(handle)))
      }
    }
  }
}

impl Drop for Program {
  fn drop(&mut self) {
    self.state.borrow_mut().forget_program(self.handle);

    unsafe {
      gl::DeleteProgram(self.handle);
    }
  }
}

unsafe impl Shader for GL33 {
  type StageRepr = Stage;

  type ProgramRepr = Program;

  unsafe fn new_stage(&mut self, ty: StageType, src: &str) -> Result<Self::StageRepr, StageError> {
    let c_src = CString::new(src.as_bytes())
      .map_err(|_| StageError::compilation_failed(ty, "shader source contains a NUL byte"))?;

    let handle = gl::CreateShader(opengl_shader_type(ty));

    if handle == 0 {
      return Err(StageError::compilation_failed(
        ty,
        "unable to create shader stage",
      ));
    }

    // from now on, dropping the stage deletes the shader object
    let stage = Stage { handle };

    gl::ShaderSource(handle, 1, [c_src.as_ptr()].as_ptr(), null());
    gl::CompileShader(handle);

    let mut compiled: GLint = gl::FALSE.into();
    gl::GetShaderiv(handle, gl::COMPILE_STATUS, &mut compiled);

    if compiled == gl::TRUE.into() {
      Ok(stage)
    } else {
      Err(StageError::compilation_failed(ty, shader_info_log(handle)))
    }
  }

  unsafe fn new_program(
    &mut self,
    vertex: &Self::StageRepr,
    fragment: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, ProgramError> {
    let handle = gl::CreateProgram();

    if handle == 0 {
      return Err(ProgramError::link_failed("unable to create shader program"));
    }

    let program = Program {
      handle,
      state: self.state.clone(),
    };

    gl::AttachShader(handle, vertex.handle);
    gl::AttachShader(handle, fragment.handle);

    let linked = program.link();

    // the program doesn’t need the stages anymore; detaching them lets their deletion happen as
    // soon as the caller drops them
    gl::DetachShader(handle, vertex.handle);
    gl::DetachShader(handle, fragment.handle);

    linked.map(move |_| program)
  }

  unsafe fn use_program(&mut self, program: &mut Self::ProgramRepr) {
    self.state.borrow_mut().use_program(program.handle);
  }

  unsafe fn ask_uniform<T>(
    &mut self,
    program: &mut Self::ProgramRepr,
    name: &str,
  ) -> Result<Uniform<T>, UniformWarning>
  where
    Self: Uniformable<T>,
  {
    let c_name = CString::new(name.as_bytes()).map_err(|_| UniformWarning::inactive(name))?;
    let location = gl::GetUniformLocation(program.handle, c_name.as_ptr() as *const GLchar);

    // ensure the location smells good
    if location < 0 {
      return Err(UniformWarning::inactive(name));
    }

    // ensure the type is correct regarding what we have in the type-system
    let ty = <Self as Uniformable<T>>::ty();
    check_uniform_type_match(name, ty, uniform_gl_type(program.handle, &c_name))?;

    Ok(Uniform::new(location))
  }
}

fn opengl_shader_type(t: StageType) -> GLenum {
  match t {
    StageType::VertexShader => gl::VERTEX_SHADER,
    StageType::FragmentShader => gl::FRAGMENT_SHADER,
  }
}

unsafe fn shader_info_log(handle: GLuint) -> String {
  let mut log_len: GLint = 0;
  gl::GetShaderiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

  let mut log: Vec<u8> = vec![0; log_len.max(0) as usize];
  let mut written: GLsizei = 0;
  gl::GetShaderInfoLog(
    handle,
    log_len,
    &mut written,
    log.as_mut_ptr() as *mut GLchar,
  );

  log.truncate(written.max(0) as usize);
  String::from_utf8_lossy(&log).into_owned()
}

unsafe fn program_info_log(handle: GLuint) -> String {
  let mut log_len: GLint = 0;
  gl::GetProgramiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

  let mut log: Vec<u8> = vec![0; log_len.max(0) as usize];
  let mut written: GLsizei = 0;
  gl::GetProgramInfoLog(
    handle,
    log_len,
    &mut written,
    log.as_mut_ptr() as *mut GLchar,
  );

  log.truncate(written.max(0) as usize);
  String::from_utf8_lossy(&log).into_owned()
}

// reflect the GLSL type of an active uniform
unsafe fn uniform_gl_type(program: GLuint, c_name: &CString) -> GLenum {
  let mut index = gl::INVALID_INDEX;
  gl::GetUniformIndices(
    program,
    1,
    [c_name.as_ptr() as *const GLchar].as_ptr(),
    &mut index,
  );

  if index == gl::INVALID_INDEX {
    return gl::NONE;
  }

  let mut glty: GLenum = gl::NONE;
  let mut size: GLint = 0;
  let mut name_len: GLsizei = 0;
  let mut name_buf = [0 as GLchar; 1];
  gl::GetActiveUniform(
    program,
    index,
    name_buf.len() as GLsizei,
    &mut name_len,
    &mut size,
    &mut glty,
    name_buf.as_mut_ptr(),
  );

  glty
}

fn check_uniform_type_match(
  name: &str,
  ty: UniformType,
  glty: GLenum,
) -> Result<(), UniformWarning> {
  let matches = match ty {
    // glUniform1i writes int, bool and sampler uniforms alike
    UniformType::Int => glty == gl::INT || glty == gl::BOOL || is_sampler(glty),
    UniformType::Float => glty == gl::FLOAT,
    UniformType::Bool => glty == gl::BOOL || glty == gl::INT,
    UniformType::M44 => glty == gl::FLOAT_MAT4,
  };

  if matches {
    Ok(())
  } else {
    Err(UniformWarning::type_mismatch(name, ty))
  }
}

// samplers are set with the texture unit they read from
fn is_sampler(glty: GLenum) -> bool {
  matches!(
    glty,
    gl::SAMPLER_1D
      | gl::SAMPLER_2D
      | gl::SAMPLER_3D
      | gl::SAMPLER_CUBE
      | gl::SAMPLER_1D_ARRAY
      | gl::SAMPLER_2D_ARRAY
      | gl::SAMPLER_2D_SHADOW
      | gl::INT_SAMPLER_1D
      | gl::INT_SAMPLER_2D
      | gl::INT_SAMPLER_3D
      | gl::INT_SAMPLER_CUBE
      | gl::INT_SAMPLER_1D_ARRAY
      | gl::INT_SAMPLER_2D_ARRAY
      | gl::UNSIGNED_INT_SAMPLER_1D
      | gl::UNSIGNED_INT_SAMPLER_2D
      | gl::UNSIGNED_INT_SAMPLER_3D
      | gl::UNSIGNED_INT_SAMPLER_CUBE
      | gl::UNSIGNED_INT_SAMPLER_1D_ARRAY
      | gl::UNSIGNED_INT_SAMPLER_2D_ARRAY
  )
}

macro_rules! impl_Uniformable {
  ($t:ty, $uty:tt, $f:tt) => {
    unsafe impl Uniformable<$t> for GL33 {
      unsafe fn ty() -> UniformType {
        UniformType::$uty
      }

      unsafe fn update(&mut self, _: &mut Program, uniform: &Uniform<$t>, value: $t) {
        gl::$f(uniform.index(), value);
      }
    }
  };
}

impl_Uniformable!(i32, Int, Uniform1i);
impl_Uniformable!(f32, Float, Uniform1f);

unsafe impl Uniformable<bool> for GL33 {
  unsafe fn ty() -> UniformType {
    UniformType::Bool
  }

  unsafe fn update(&mut self, _: &mut Program, uniform: &Uniform<bool>, value: bool) {
    gl::Uniform1i(uniform.index(), value as GLint);
  }
}

unsafe impl Uniformable<Mat44<f32>> for GL33 {
  unsafe fn ty() -> UniformType {
    UniformType::M44
  }

  // Mat44 is already column-major; no transposition
  unsafe fn update(&mut self, _: &mut Program, uniform: &Uniform<Mat44<f32>>, value: Mat44<f32>) {
    gl::UniformMatrix4fv(uniform.index(), 1, gl::FALSE, value.as_ptr() as *const GLfloat);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn int_uniforms_accept_samplers() {
    assert!(check_uniform_type_match("tex", UniformType::Int, gl::SAMPLER_2D).is_ok());
    assert!(check_uniform_type_match("n", UniformType::Int, gl::INT).is_ok());
    assert_eq!(
      check_uniform_type_match("t", UniformType::Int, gl::FLOAT),
      Err(UniformWarning::type_mismatch("t", UniformType::Int))
    );
  }

  #[test]
  fn ints_and_bools_are_interchangeable() {
    assert!(check_uniform_type_match("flag", UniformType::Int, gl::BOOL).is_ok());
    assert!(check_uniform_type_match("n", UniformType::Bool, gl::INT).is_ok());
    assert!(check_uniform_type_match("tex", UniformType::Bool, gl::SAMPLER_2D).is_err());
    assert!(check_uniform_type_match("x", UniformType::Bool, gl::FLOAT).is_err());
  }

  #[test]
  fn matrices_only_match_mat4() {
    assert!(check_uniform_type_match("m", UniformType::M44, gl::FLOAT_MAT4).is_ok());
    assert!(check_uniform_type_match("m", UniformType::M44, gl::FLOAT_MAT3).is_err());
  }

  #[test]
  fn inactive_uniforms_have_no_type() {
    assert!(check_uniform_type_match("missing", UniformType::Float, gl::NONE).is_err());
  }
}
