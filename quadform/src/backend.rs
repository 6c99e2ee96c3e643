//! Backend interfacing.
//!
//! Backends implement the traits in this module so that the public API in [`crate::shader`] can
//! drive them. You shouldn’t have to use those traits directly unless you are writing a backend.

pub mod shader;
