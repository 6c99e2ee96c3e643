//! Graphics context.
//!
//! A graphics context is an object that abstracts all the low-level operations that happen on a
//! graphics device (it can be a GPU or a software implementation, for instance).
//!
//! This crate doesn’t provide you with creating such contexts. Instead, you must do it yourself
//! or rely on crates doing it for you.
//!
//! # On context and threads
//!
//! - An object which type implements [`GraphicsContext`] must be `!Send` and `!Sync`. It cannot be
//!   moved nor shared between threads.
//! - You can only create a single context per thread.
//!
//! The context is passed explicitly to every operation that touches the device, which includes
//! the “currently active program” slot. There is no hidden global.

use crate::backend::shader::Shader;
use crate::shader::ProgramBuilder;

/// Class of graphics context.
///
/// Such a context must not be Send nor Sync, which means that you cannot share it between
/// threads in any way (move / borrow).
pub unsafe trait GraphicsContext: Sized {
  /// Backend type this context runs on.
  type Backend: ?Sized;

  /// Access the underlying backend.
  fn backend(&mut self) -> &mut Self::Backend;

  /// Create a new shader program builder.
  ///
  /// See the documentation of [`ProgramBuilder`] for further details.
  fn new_shader_program(&mut self) -> ProgramBuilder<Self>
  where
    Self::Backend: Shader,
  {
    ProgramBuilder::new(self)
  }
}
