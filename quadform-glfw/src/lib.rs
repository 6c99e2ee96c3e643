//! [GLFW](https://crates.io/crates/glfw) backend for quadform.
//!
//! This crate opens a window with an OpenGL 3.3 core context and wraps it into a [`GL33Context`],
//! which implements [`GraphicsContext`] for the [`GL33`] backend.

#![deny(missing_docs)]

use glfw::{self, Context as _, Glfw, InitError, Window, WindowEvent, WindowMode};
pub use quadform_gl::gl33::StateQueryError;
use quadform::context::GraphicsContext;
use quadform_gl::GL33;
use std::{error, fmt, os::raw::c_void, sync::mpsc::Receiver};

/// Error that can be risen while creating a surface.
#[non_exhaustive]
#[derive(Debug)]
pub enum GlfwSurfaceError {
  /// Initialization of the surface went wrong.
  ///
  /// This variant exposes a **glfw** error for further information about what went wrong.
  InitError(InitError),

  /// Window creation failed.
  WindowCreationFailed,

  /// The graphics state is not available.
  ///
  /// This error is generated when the initialization code is called on a thread on which the
  /// graphics state has already been acquired.
  GraphicsStateError(StateQueryError),
}

impl fmt::Display for GlfwSurfaceError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      GlfwSurfaceError::InitError(ref e) => write!(f, "initialization error: {}", e),
      GlfwSurfaceError::WindowCreationFailed => f.write_str("failed to create window"),
      GlfwSurfaceError::GraphicsStateError(ref e) => {
        write!(f, "failed to get graphics state: {}", e)
      }
    }
  }
}

impl From<InitError> for GlfwSurfaceError {
  fn from(e: InitError) -> Self {
    GlfwSurfaceError::InitError(e)
  }
}

impl error::Error for GlfwSurfaceError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      GlfwSurfaceError::InitError(e) => Some(e),
      GlfwSurfaceError::WindowCreationFailed => None,
      GlfwSurfaceError::GraphicsStateError(e) => Some(e),
    }
  }
}

/// Dimension and visibility of the window to open.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WindowDim {
  /// Windowed mode with the wished resolution.
  Windowed {
    /// Width of the window.
    width: u32,
    /// Height of the window.
    height: u32,
  },
  /// Hidden window; useful for offscreen work and tests.
  Hidden {
    /// Width of the window.
    width: u32,
    /// Height of the window.
    height: u32,
  },
}

/// GLFW surface.
///
/// This type is a helper that exposes two important concepts: the GLFW event receiver that you can use it with to
/// poll events and the [`GL33Context`], which allows you to perform the rendering part.
#[derive(Debug)]
pub struct GlfwSurface {
  /// Wrapped GLFW events queue.
  pub events_rx: Receiver<(f64, WindowEvent)>,

  /// Wrapped quadform context.
  pub context: GL33Context,
}

impl GlfwSurface {
  /// Initialize GLFW to provide a quadform environment.
  ///
  /// The `create_window` closure is given the initialized GLFW instance, with OpenGL hints already set. It must
  /// return a window and its events receiver; the window is made current by this function.
  pub fn new(
    create_window: impl FnOnce(
      &mut Glfw,
    ) -> Result<(Window, Receiver<(f64, WindowEvent)>), GlfwSurfaceError>,
  ) -> Result<Self, GlfwSurfaceError> {
    #[cfg(feature = "log-errors")]
    let error_cbk = glfw::LOG_ERRORS;
    #[cfg(not(feature = "log-errors"))]
    let error_cbk = glfw::FAIL_ON_ERRORS;

    let mut glfw = glfw::init(error_cbk)?;

    // OpenGL hints
    glfw.window_hint(glfw::WindowHint::OpenGlProfile(
      glfw::OpenGlProfileHint::Core,
    ));
    glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
    glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
    glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));

    let (mut window, events_rx) = create_window(&mut glfw)?;
    window.make_current();

    // init OpenGL
    gl::load_with(|s| window.get_proc_address(s) as *const c_void);

    let gl = GL33::new().map_err(GlfwSurfaceError::GraphicsStateError)?;
    let context = GL33Context { window, gl };
    let surface = GlfwSurface { events_rx, context };

    Ok(surface)
  }

  /// Create a surface with an OpenGL 3.3 context, polling keys and framebuffer resizes.
  pub fn new_gl33(title: &str, dim: WindowDim) -> Result<Self, GlfwSurfaceError> {
    GlfwSurface::new(|glfw| {
      let (width, height) = match dim {
        WindowDim::Windowed { width, height } => (width, height),
        WindowDim::Hidden { width, height } => {
          glfw.window_hint(glfw::WindowHint::Visible(false));
          (width, height)
        }
      };

      let (mut window, events_rx) = glfw
        .create_window(width, height, title, WindowMode::Windowed)
        .ok_or(GlfwSurfaceError::WindowCreationFailed)?;

      window.set_key_polling(true);
      window.set_close_polling(true);
      window.set_framebuffer_size_polling(true);

      Ok((window, events_rx))
    })
  }
}

/// quadform OpenGL 3.3 context.
///
/// This type also re-exports the GLFW window, if you need access to it.
#[derive(Debug)]
pub struct GL33Context {
  /// Wrapped GLFW window.
  pub window: Window,

  /// OpenGL 3.3 state.
  gl: GL33,
}

impl GL33Context {
  /// Seconds elapsed since GLFW was initialized.
  pub fn time(&self) -> f64 {
    self.window.glfw.get_time()
  }
}

unsafe impl GraphicsContext for GL33Context {
  type Backend = GL33;

  fn backend(&mut self) -> &mut Self::Backend {
    &mut self.gl
  }
}
