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

  // every element is distinct, so any transposition shows up
  let rows = [
    [1., 2., 3., 4.],
    [5., 6., 7., 8.],
    [9., 10., 11., 12.],
    [13., 14., 15., 16.],
  ];
  let transform = Mat44::<f32>::from_rows(rows);

  program.activate(context).set("transform", transform);

  let read = common::read_uniform::<16>(handle, "transform");
  assert_eq!(read, transform.to_cols_array());
  assert_eq!(&read[..4], &[1., 5., 9., 13.]);
}
