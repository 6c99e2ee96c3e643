use crate::common::{self, FS, VS};
use quadform::context::GraphicsContext as _;
use quadform::shader::types::Mat44;
use quadform_glfw::GL33Context;

pub fn fixture(context: &mut GL33Context) {
  let mut program = context
    .new_shader_program()
    .from_strings(VS, FS)
    .unwrap();
  let handle = program.repr().handle();

  let mut iface = program.activate(context);
  iface.set("transform", Mat44::<f32>::identity());
  iface.set("time", 0f32);
  iface.set("missingName", 1i32);

  assert_eq!(
    common::read_uniform::<16>(handle, "transform"),
    Mat44::<f32>::identity().to_cols_array()
  );
  assert_eq!(common::read_uniform::<1>(handle, "time"), [0.]);
}
