//! Shader backend interface.
//!
//! Resources returned by a backend (stage and program representations) are released by their own
//! `Drop` implementation. The public types in [`crate::shader`] rely on that to release stages on
//! every exit path of program construction.

use crate::shader::{ProgramError, StageError, StageType, Uniform, UniformType, UniformWarning};

/// Shader support.
///
/// # Unsafety
///
/// Implementors must make sure every method runs against the graphics context the backend was
/// created for, and that this context is current on the calling thread.
pub unsafe trait Shader {
  /// Backend representation of a compiled shader stage.
  type StageRepr;

  /// Backend representation of a linked shader program.
  type ProgramRepr;

  /// Compile a new shader stage.
  ///
  /// A stage that fails to compile must be released before returning the error.
  unsafe fn new_stage(&mut self, ty: StageType, src: &str) -> Result<Self::StageRepr, StageError>;

  /// Link a vertex and a fragment stage into a new program.
  ///
  /// The stages stay owned by the caller; the program must not depend on them once linked.
  unsafe fn new_program(
    &mut self,
    vertex: &Self::StageRepr,
    fragment: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, ProgramError>;

  /// Make a program the active one for subsequent uniform updates and draw calls.
  unsafe fn use_program(&mut self, program: &mut Self::ProgramRepr);

  /// Resolve a uniform by name.
  ///
  /// Must fail with [`UniformWarning::Inactive`] if the program doesn’t expose the uniform and
  /// with [`UniformWarning::TypeMismatch`] if its reflected type cannot hold a `T`.
  unsafe fn ask_uniform<T>(
    &mut self,
    program: &mut Self::ProgramRepr,
    name: &str,
  ) -> Result<Uniform<T>, UniformWarning>
  where
    Self: Uniformable<T>;
}

/// Types that can be sent to a shader program as uniform values.
///
/// # Unsafety
///
/// [`Uniformable::update`] writes into the currently active program. Callers must have activated
/// the program owning the uniform first.
pub unsafe trait Uniformable<T>: Shader {
  /// Type of the uniform, as seen by shader code.
  unsafe fn ty() -> UniformType;

  /// Upload a value.
  unsafe fn update(&mut self, program: &mut Self::ProgramRepr, uniform: &Uniform<T>, value: T);
}
