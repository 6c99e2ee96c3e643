//! OpenGL 3.3 backend.
//!
//! This module implements an OpenGL 3.3 backend for quadform. The backend type is [`GL33`].

mod shader;
mod state;

pub use self::shader::{Program, Stage};
pub use self::state::StateQueryError;
use self::state::GLState;
use std::cell::RefCell;
use std::rc::Rc;

/// An OpenGL 3.3 backend.
///
/// This type is to be used as a quadform backend type. It implements the whole shader API.
#[derive(Debug)]
pub struct GL33 {
  pub(crate) state: Rc<RefCell<GLState>>,
}

impl GL33 {
  /// Create a new OpenGL 3.3 backend.
  ///
  /// The OpenGL context must be current on the calling thread and its function pointers loaded.
  pub fn new() -> Result<Self, StateQueryError> {
    GLState::new().map(|state| GL33 {
      state: Rc::new(RefCell::new(state)),
    })
  }
}
