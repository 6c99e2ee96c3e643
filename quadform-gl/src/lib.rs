//! OpenGL backends.
//!
//! This crate exports [OpenGL](https://www.khronos.org/opengl/) backends for quadform. Pick a
//! _backend type_ (for now, only [`GL33`]) and use it as the `Backend` of your
//! `GraphicsContext`. Creating the OpenGL context itself is left to windowing crates, such as
//! `quadform-glfw`.

pub mod gl33;

pub use gl33::GL33;
