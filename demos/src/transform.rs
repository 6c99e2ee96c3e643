//! Per-frame transform of the quad.

use cgmath::{Matrix4, Rad, Vector3};
use quadform::shader::types::Mat44;

/// Transform applied to the quad at time `t` (in seconds).
///
/// The quad spins around its own center, is pushed away from the origin, and the whole thing spins
/// around the origin again: `Rz(t) · T(1, -0.5, 0) · Rz(t)`.
pub fn transform_at(t: f32) -> Mat44<f32> {
  let spin = Matrix4::from_angle_z(Rad(t));
  let transform = spin * Matrix4::from_translation(Vector3::new(1., -0.5, 0.)) * spin;

  // cgmath stores matrices as columns already
  let cols: [[f32; 4]; 4] = transform.into();
  Mat44::new(cols)
}
