//! # A small, type-safe shader program layer
//!
//! quadform wraps the lifecycle of a GPU shader program behind a handful of typed operations:
//!
//! - Load a vertex and a fragment stage, either from files on disk or from in-memory strings.
//! - Compile both stages and link them into a [`Program`]. Any failure is reported as a value
//!   ([`ProgramError`]) carrying the driver diagnostic, never as a panic.
//! - Activate the program on a graphics context and set its uniforms by name.
//!
//! quadform doesn’t create graphics contexts. A backend crate (such as `quadform-gl`) implements
//! the traits from [`backend`] and a windowing crate (such as `quadform-glfw`) exposes a type
//! implementing [`GraphicsContext`].
//!
//! # Uniforms
//!
//! Setting a uniform that the linked program doesn’t expose is a silent no-op. Shader compilers are
//! free to remove uniforms that don’t participate in the output, so a missing name is not
//! considered an error. If you want to know whether a uniform is really there, resolve it with
//! [`ProgramInterface::ask`], which reports a [`UniformWarning`].
//!
//! Matrices are uploaded column-major: a [`Mat44`] is an array of four columns.
//!
//! # Example
//!
//! ```ignore
//! let mut program = ctx
//!   .new_shader_program()
//!   .from_files("shaders/transform-vs.glsl", "shaders/transform-fs.glsl")?;
//!
//! let mut iface = program.activate(&mut ctx);
//! iface.set("transform", Mat44::identity());
//! iface.set("time", 0.);
//! ```
//!
//! [`Program`]: crate::shader::Program
//! [`ProgramError`]: crate::shader::ProgramError
//! [`ProgramInterface::ask`]: crate::shader::ProgramInterface::ask
//! [`UniformWarning`]: crate::shader::UniformWarning
//! [`Mat44`]: crate::shader::types::Mat44
//! [`GraphicsContext`]: crate::context::GraphicsContext

#![deny(missing_docs)]

pub mod backend;
pub mod context;
pub mod shader;
