//! Shader type wrappers.
//!
//! These types are used, mostly, to be passed to shaders as uniform values.

use std::ops::{Deref, DerefMut};

/// A 4×4 matrix, stored column-major.
///
/// The wrapped array is an array of **columns**: `m[c][r]` is the element at column `c`, row `r`.
/// This is the layout the shader side expects, so the matrix is uploaded as-is, without
/// transposition. Math libraries storing their matrices column-major (like `cgmath`) convert
/// directly with `.into()`; row-major sources go through [`Mat44::from_rows`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Mat44<T>(pub [[T; 4]; 4]);

impl<T> From<[[T; 4]; 4]> for Mat44<T> {
  fn from(a: [[T; 4]; 4]) -> Self {
    Mat44(a)
  }
}

impl<T> From<Mat44<T>> for [[T; 4]; 4] {
  fn from(Mat44(a): Mat44<T>) -> Self {
    a
  }
}

impl<T> AsRef<[[T; 4]; 4]> for Mat44<T> {
  fn as_ref(&self) -> &[[T; 4]; 4] {
    &self.0
  }
}

impl<T> Deref for Mat44<T> {
  type Target = [[T; 4]; 4];

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T> DerefMut for Mat44<T> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl<T> Mat44<T> {
  /// Create a matrix from its columns.
  pub fn new(columns: impl Into<[[T; 4]; 4]>) -> Self {
    Mat44(columns.into())
  }
}

impl<T> Mat44<T>
where
  T: Copy,
{
  /// Create a matrix from its rows.
  pub fn from_rows(rows: [[T; 4]; 4]) -> Self {
    let mut columns = rows;

    for (c, column) in columns.iter_mut().enumerate() {
      for (r, x) in column.iter_mut().enumerate() {
        *x = rows[r][c];
      }
    }

    Mat44(columns)
  }
}

impl Mat44<f32> {
  /// The identity matrix.
  pub const fn identity() -> Self {
    Mat44([
      [1., 0., 0., 0.],
      [0., 1., 0., 0.],
      [0., 0., 1., 0.],
      [0., 0., 0., 1.],
    ])
  }

  /// Flatten the matrix in upload order.
  pub fn to_cols_array(&self) -> [f32; 16] {
    let mut flat = [0.; 16];

    for (i, x) in self.0.iter().flatten().enumerate() {
      flat[i] = *x;
    }

    flat
  }
}

impl Default for Mat44<f32> {
  fn default() -> Self {
    Self::identity()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn columns_are_contiguous() {
    // translation by (1, 2, 3) lives in the last column
    let m = Mat44::new([
      [1., 0., 0., 0.],
      [0., 1., 0., 0.],
      [0., 0., 1., 0.],
      [1., 2., 3., 1.],
    ]);

    assert_eq!(&m.to_cols_array()[12..], &[1., 2., 3., 1.]);
  }

  #[test]
  fn from_rows_transposes() {
    let m = Mat44::from_rows([
      [1., 0., 0., 1.],
      [0., 1., 0., 2.],
      [0., 0., 1., 3.],
      [0., 0., 0., 1.],
    ]);

    assert_eq!(m[3], [1., 2., 3., 1.]);
    assert_eq!(m[0], [1., 0., 0., 0.]);
  }

  #[test]
  fn identity_is_default() {
    assert_eq!(Mat44::default(), Mat44::identity());
    assert_eq!(Mat44::from_rows(*Mat44::identity()), Mat44::identity());
  }
}
