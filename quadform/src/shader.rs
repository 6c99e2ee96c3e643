//! Shader stages, programs and uniforms.
//!
//! A shader [`Program`] is the linked combination of a vertex [`Stage`] and a fragment [`Stage`].
//! Programs are created through a [`ProgramBuilder`], which you get from
//! [`GraphicsContext::new_shader_program`]:
//!
//! - [`ProgramBuilder::from_files`] reads both sources from disk.
//! - [`ProgramBuilder::from_strings`] takes both sources from memory.
//! - [`ProgramBuilder::from_stages`] links stages you compiled yourself with [`Stage::new`].
//!
//! Whatever the path, intermediate stages are released once linking is over, whether it succeeded
//! or not.
//!
//! Once you have a program, [`Program::activate`] makes it the active program of the context and
//! hands you a [`ProgramInterface`] to update its uniforms.

pub mod types;

use std::error;
use std::fmt;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::backend::shader::{Shader, Uniformable};
use crate::context::GraphicsContext;

/// A shader stage type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StageType {
  /// Vertex shader.
  VertexShader,
  /// Fragment shader.
  FragmentShader,
}

impl fmt::Display for StageType {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageType::VertexShader => f.write_str("vertex shader"),
      StageType::FragmentShader => f.write_str("fragment shader"),
    }
  }
}

/// Errors that shader stages can emit.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StageError {
  /// Occurs when a shader fails to compile.
  ///
  /// The `String` is the diagnostic log reported by the driver.
  CompilationFailed(StageType, String),
}

impl StageError {
  /// Occurs when a shader fails to compile.
  pub fn compilation_failed(ty: StageType, reason: impl Into<String>) -> Self {
    StageError::CompilationFailed(ty, reason.into())
  }

  /// Type of the stage that failed.
  pub fn stage_type(&self) -> StageType {
    match *self {
      StageError::CompilationFailed(ty, _) => ty,
    }
  }
}

impl fmt::Display for StageError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageError::CompilationFailed(ref ty, ref r) => write!(f, "{} compilation error: {}", ty, r),
    }
  }
}

impl error::Error for StageError {}

/// Errors that a [`Program`] can generate.
#[non_exhaustive]
#[derive(Debug)]
pub enum ProgramError {
  /// The source of a stage could not be read.
  ResourceReadFailed {
    /// Stage the source was meant for.
    stage: StageType,
    /// Path that was read.
    path: PathBuf,
    /// Underlying I/O error.
    source: io::Error,
  },
  /// A shader stage failed to compile.
  Stage(StageError),
  /// Program link failed. You can inspect the reason by looking at the contained `String`.
  LinkFailed(String),
}

impl ProgramError {
  /// Program link failed.
  pub fn link_failed(reason: impl Into<String>) -> Self {
    ProgramError::LinkFailed(reason.into())
  }
}

impl fmt::Display for ProgramError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ProgramError::ResourceReadFailed {
        ref stage,
        ref path,
        ref source,
      } => write!(
        f,
        "cannot read {} source from {}: {}",
        stage,
        path.display(),
        source
      ),

      ProgramError::Stage(ref e) => write!(f, "shader program has stage error: {}", e),

      ProgramError::LinkFailed(ref s) => write!(f, "shader program failed to link: {}", s),
    }
  }
}

impl error::Error for ProgramError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      ProgramError::ResourceReadFailed { source, .. } => Some(source),
      ProgramError::Stage(e) => Some(e),
      ProgramError::LinkFailed(_) => None,
    }
  }
}

impl From<StageError> for ProgramError {
  fn from(e: StageError) -> Self {
    ProgramError::Stage(e)
  }
}

/// Warnings related to uniform issues.
///
/// Those are never fatal: [`ProgramInterface::set`] swallows them, [`ProgramInterface::ask`]
/// reports them.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UniformWarning {
  /// Inactive uniform (not declared, or not participating in the final output and optimized out).
  Inactive(String),
  /// Type mismatch between the requested type and the type reflected from the program.
  ///
  /// The `String` is the name of the uniform; the [`UniformType`] is the requested type.
  TypeMismatch(String, UniformType),
}

impl UniformWarning {
  /// Create an inactive uniform warning.
  pub fn inactive<N>(name: N) -> Self
  where
    N: Into<String>,
  {
    UniformWarning::Inactive(name.into())
  }

  /// Create a type mismatch.
  pub fn type_mismatch<N>(name: N, ty: UniformType) -> Self
  where
    N: Into<String>,
  {
    UniformWarning::TypeMismatch(name.into(), ty)
  }
}

impl fmt::Display for UniformWarning {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      UniformWarning::Inactive(ref s) => write!(f, "inactive {} uniform", s),

      UniformWarning::TypeMismatch(ref n, ref t) => {
        write!(f, "type mismatch for uniform {}: {}", n, t)
      }
    }
  }
}

impl error::Error for UniformWarning {}

/// Type of a uniform.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UniformType {
  /// 32-bit signed integer. Also accepted by boolean uniforms and samplers (texture unit).
  Int,
  /// 32-bit floating-point number.
  Float,
  /// Boolean. Also accepted by integer uniforms.
  Bool,
  /// 4×4 floating-point matrix.
  M44,
}

impl fmt::Display for UniformType {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      UniformType::Int => f.write_str("int"),
      UniformType::Float => f.write_str("float"),
      UniformType::Bool => f.write_str("bool"),
      UniformType::M44 => f.write_str("mat4"),
    }
  }
}

/// A resolved uniform location.
///
/// Resolving a uniform once with [`ProgramInterface::ask`] and updating it through
/// [`ProgramInterface::update`] avoids a name lookup per update.
#[derive(Debug)]
pub struct Uniform<T>
where
  T: ?Sized,
{
  index: i32,
  _t: PhantomData<*const T>,
}

impl<T> Uniform<T>
where
  T: ?Sized,
{
  /// Create a new uniform from a backend location.
  ///
  /// # Unsafety
  ///
  /// The location must come from the backend that will update it.
  pub unsafe fn new(index: i32) -> Self {
    Uniform {
      index,
      _t: PhantomData,
    }
  }

  /// Backend location of the uniform.
  pub fn index(&self) -> i32 {
    self.index
  }
}

/// A compiled shader stage.
///
/// The stage is released when dropped.
pub struct Stage<S>
where
  S: ?Sized + Shader,
{
  repr: S::StageRepr,
}

impl<S> Stage<S>
where
  S: ?Sized + Shader,
{
  /// Compile a new shader stage.
  pub fn new<C, R>(ctx: &mut C, ty: StageType, src: R) -> Result<Self, StageError>
  where
    C: GraphicsContext<Backend = S>,
    R: AsRef<str>,
  {
    unsafe {
      ctx
        .backend()
        .new_stage(ty, src.as_ref())
        .map(|repr| Stage { repr })
    }
  }
}

/// Shader program builder.
///
/// Obtained with [`GraphicsContext::new_shader_program`].
pub struct ProgramBuilder<'a, C>
where
  C: ?Sized,
{
  ctx: &'a mut C,
}

impl<'a, C> ProgramBuilder<'a, C>
where
  C: GraphicsContext,
  C::Backend: Shader,
{
  pub(crate) fn new(ctx: &'a mut C) -> Self {
    ProgramBuilder { ctx }
  }

  /// Link a program from already compiled stages.
  ///
  /// The stages remain yours; you can drop them as soon as this function returns.
  pub fn from_stages(
    self,
    vertex: &Stage<C::Backend>,
    fragment: &Stage<C::Backend>,
  ) -> Result<Program<C::Backend>, ProgramError> {
    let repr = unsafe { self.ctx.backend().new_program(&vertex.repr, &fragment.repr)? };
    log::debug!("shader program linked");

    Ok(Program { repr })
  }

  /// Compile both stages from their source code and link them.
  pub fn from_strings<V, F>(self, vertex: V, fragment: F) -> Result<Program<C::Backend>, ProgramError>
  where
    V: AsRef<str>,
    F: AsRef<str>,
  {
    let vs_stage = Stage::new(&mut *self.ctx, StageType::VertexShader, vertex)?;
    let fs_stage = Stage::new(&mut *self.ctx, StageType::FragmentShader, fragment)?;

    // both stages are dropped on return, linked or not
    self.from_stages(&vs_stage, &fs_stage)
  }

  /// Read both stages from files, compile and link them.
  pub fn from_files<V, F>(self, vertex: V, fragment: F) -> Result<Program<C::Backend>, ProgramError>
  where
    V: AsRef<Path>,
    F: AsRef<Path>,
  {
    let vs_src = read_source(StageType::VertexShader, vertex.as_ref())?;
    let fs_src = read_source(StageType::FragmentShader, fragment.as_ref())?;

    self.from_strings(vs_src, fs_src)
  }
}

fn read_source(stage: StageType, path: &Path) -> Result<String, ProgramError> {
  log::debug!("reading {} source from {}", stage, path.display());

  fs::read_to_string(path).map_err(|source| ProgramError::ResourceReadFailed {
    stage,
    path: path.to_owned(),
    source,
  })
}

/// A linked shader program.
///
/// The program is released when dropped.
pub struct Program<S>
where
  S: ?Sized + Shader,
{
  repr: S::ProgramRepr,
}

impl<S> Program<S>
where
  S: ?Sized + Shader,
{
  /// Make this program the active one on the context.
  ///
  /// The returned [`ProgramInterface`] borrows both the context and the program, so that uniforms
  /// can only be set while the program is active.
  pub fn activate<'a, C>(&'a mut self, ctx: &'a mut C) -> ProgramInterface<'a, S>
  where
    C: GraphicsContext<Backend = S>,
  {
    let backend = ctx.backend();
    unsafe { backend.use_program(&mut self.repr) };

    ProgramInterface {
      backend,
      program: &mut self.repr,
    }
  }

  /// Backend representation of the program.
  pub fn repr(&self) -> &S::ProgramRepr {
    &self.repr
  }
}

/// An active program, ready to receive uniform values.
pub struct ProgramInterface<'a, S>
where
  S: ?Sized + Shader,
{
  backend: &'a mut S,
  program: &'a mut S::ProgramRepr,
}

impl<'a, S> ProgramInterface<'a, S>
where
  S: ?Sized + Shader,
{
  /// Set a uniform by name.
  ///
  /// If the program has no active uniform with that name, or if its type cannot hold a `T`, the
  /// call does nothing. `i32` and `bool` values can be written to both `int` and `bool` uniforms;
  /// `i32` also selects the texture unit of samplers.
  pub fn set<T>(&mut self, name: &str, value: T)
  where
    S: Uniformable<T>,
  {
    match self.ask(name) {
      Ok(uniform) => self.update(&uniform, value),
      Err(warning) => log::debug!("skipping uniform update: {}", warning),
    }
  }

  /// Resolve a uniform by name.
  pub fn ask<T>(&mut self, name: &str) -> Result<Uniform<T>, UniformWarning>
  where
    S: Uniformable<T>,
  {
    unsafe { self.backend.ask_uniform(self.program, name) }
  }

  /// Update a resolved uniform.
  pub fn update<T>(&mut self, uniform: &Uniform<T>, value: T)
  where
    S: Uniformable<T>,
  {
    unsafe { self.backend.update(self.program, uniform, value) }
  }
}
