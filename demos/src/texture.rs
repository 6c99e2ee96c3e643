//! Texture of the quad.

use gl::types::*;
use image::{ImageError, Rgb, RgbImage};
use std::path::Path;

/// Load an RGB image from disk, flipped so that its first row is at the bottom like OpenGL expects.
pub fn load_image(path: &Path) -> Result<RgbImage, ImageError> {
  let img = image::open(path)?.flipv().to_rgb8();
  log::info!("loaded texture {} ({:?})", path.display(), img.dimensions());
  Ok(img)
}

/// A `size`×`size` checkerboard made of `cells`×`cells` squares.
pub fn checkerboard(size: u32, cells: u32) -> RgbImage {
  let cell = (size / cells.max(1)).max(1);

  RgbImage::from_fn(size, size, |x, y| {
    if (x / cell + y / cell) % 2 == 0 {
      Rgb([230, 230, 230])
    } else {
      Rgb([40, 40, 40])
    }
  })
}

/// A 2D texture with repeat wrapping, linear filtering and mipmaps.
#[derive(Debug)]
pub struct Texture2D {
  handle: GLuint,
}

impl Texture2D {
  /// Upload an image; the OpenGL context must be current.
  pub fn new(img: &RgbImage) -> Self {
    let (width, height) = img.dimensions();
    let mut handle = 0;

    unsafe {
      gl::GenTextures(1, &mut handle);
      gl::BindTexture(gl::TEXTURE_2D, handle);

      gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::REPEAT as GLint);
      gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::REPEAT as GLint);
      gl::TexParameteri(
        gl::TEXTURE_2D,
        gl::TEXTURE_MIN_FILTER,
        gl::LINEAR_MIPMAP_LINEAR as GLint,
      );
      gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as GLint);

      // RGB rows are not necessarily 4-byte aligned
      gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
      gl::TexImage2D(
        gl::TEXTURE_2D,
        0,
        gl::RGB as GLint,
        width as GLsizei,
        height as GLsizei,
        0,
        gl::RGB,
        gl::UNSIGNED_BYTE,
        img.as_raw().as_ptr() as *const _,
      );
      gl::GenerateMipmap(gl::TEXTURE_2D);

      gl::BindTexture(gl::TEXTURE_2D, 0);
    }

    Texture2D { handle }
  }

  /// Bind the texture to the given texture unit.
  pub fn bind(&self, unit: u32) {
    unsafe {
      gl::ActiveTexture(gl::TEXTURE0 + unit);
      gl::BindTexture(gl::TEXTURE_2D, self.handle);
    }
  }
}

impl Drop for Texture2D {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteTextures(1, &self.handle);
    }
  }
}
