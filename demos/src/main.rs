//! A textured quad orbiting around the center of the window.
//!
//! The quad’s transform is computed on the CPU every frame and uploaded to the shader program, along
//! with the elapsed time, by uniform name.
//!
//! Press <escape> or close the window to quit.

mod quad;
mod texture;
mod transform;

use glfw::{Action, Context as _, Key, WindowEvent};
use image::ImageError;
use quad::Quad;
use quadform::{context::GraphicsContext as _, shader::ProgramError};
use quadform_glfw::{GlfwSurface, GlfwSurfaceError, WindowDim};
use std::{error::Error, fmt, path::PathBuf, process};
use structopt::StructOpt;
use texture::Texture2D;

#[derive(Debug, StructOpt)]
#[structopt(name = "transform")]
pub struct CLIOpts {
  #[structopt(long, parse(from_os_str))]
  /// Vertex shader source; defaults to the shader shipped with the demo.
  vertex: Option<PathBuf>,

  #[structopt(long, parse(from_os_str))]
  /// Fragment shader source; defaults to the shader shipped with the demo.
  fragment: Option<PathBuf>,

  #[structopt(short, long, parse(from_os_str))]
  /// Image to put on the quad; a checkerboard is generated if absent.
  texture: Option<PathBuf>,

  #[structopt(long, default_value = "800")]
  /// Width of the window.
  width: u32,

  #[structopt(long, default_value = "600")]
  /// Height of the window.
  height: u32,
}

#[derive(Debug)]
pub enum DemoError {
  Surface(GlfwSurfaceError),
  Program(ProgramError),
  Texture(ImageError),
}

impl fmt::Display for DemoError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      DemoError::Surface(ref e) => write!(f, "cannot create surface: {}", e),
      DemoError::Program(ref e) => write!(f, "cannot build shader program: {}", e),
      DemoError::Texture(ref e) => write!(f, "cannot load texture: {}", e),
    }
  }
}

impl Error for DemoError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      DemoError::Surface(e) => Some(e),
      DemoError::Program(e) => Some(e),
      DemoError::Texture(e) => Some(e),
    }
  }
}

impl From<GlfwSurfaceError> for DemoError {
  fn from(e: GlfwSurfaceError) -> Self {
    DemoError::Surface(e)
  }
}

impl From<ProgramError> for DemoError {
  fn from(e: ProgramError) -> Self {
    DemoError::Program(e)
  }
}

impl From<ImageError> for DemoError {
  fn from(e: ImageError) -> Self {
    DemoError::Texture(e)
  }
}

fn shipped_shader(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("shaders")
    .join(name)
}

// leave as soon as escape goes down, or when the window is closed
fn quits(event: &WindowEvent) -> bool {
  matches!(
    event,
    WindowEvent::Close | WindowEvent::Key(Key::Escape, _, Action::Press, _)
  )
}

fn run(cli_opts: CLIOpts) -> Result<(), DemoError> {
  let dim = WindowDim::Windowed {
    width: cli_opts.width,
    height: cli_opts.height,
  };
  let surface = GlfwSurface::new_gl33("quadform transform", dim)?;
  let mut context = surface.context;
  let events = surface.events_rx;

  let vs_path = cli_opts
    .vertex
    .unwrap_or_else(|| shipped_shader("transform-vs.glsl"));
  let fs_path = cli_opts
    .fragment
    .unwrap_or_else(|| shipped_shader("transform-fs.glsl"));
  let mut program = context
    .new_shader_program()
    .from_files(&vs_path, &fs_path)?;

  let img = match cli_opts.texture {
    Some(ref path) => texture::load_image(path)?,
    None => texture::checkerboard(256, 8),
  };
  let texture = Texture2D::new(&img);
  let quad = Quad::new();

  // the sampler reads from texture unit 0 for the whole run
  program.activate(&mut context).set("texture1", 0i32);

  let (fb_w, fb_h) = context.window.get_framebuffer_size();
  unsafe {
    gl::Viewport(0, 0, fb_w, fb_h);
  }

  'app: loop {
    context.window.glfw.poll_events();
    for (_, event) in glfw::flush_messages(&events) {
      match event {
        event if quits(&event) => break 'app,

        WindowEvent::FramebufferSize(width, height) => {
          log::debug!("framebuffer resized to {}×{}", width, height);
          unsafe {
            gl::Viewport(0, 0, width, height);
          }
        }

        _ => (),
      }
    }

    let t = context.time() as f32;

    unsafe {
      gl::ClearColor(0.2, 0.3, 0.3, 1.0);
      gl::Clear(gl::COLOR_BUFFER_BIT);
    }

    texture.bind(0);

    let mut iface = program.activate(&mut context);
    iface.set("transform", transform::transform_at(t));
    iface.set("time", t);

    quad.draw();
    context.window.swap_buffers();
  }

  log::info!("bye");
  Ok(())
}

fn main() {
  env_logger::builder()
    .filter_level(log::LevelFilter::Info)
    .parse_default_env()
    .init();

  let cli_opts = CLIOpts::from_args();

  if let Err(e) = run(cli_opts) {
    log::error!("{}", e);
    process::exit(1);
  }
}
