use crate::common::{self, FS, VS};
use quadform::context::GraphicsContext as _;
use quadform_glfw::GL33Context;

pub fn fixture(context: &mut GL33Context) {
  let mut program = context
    .new_shader_program()
    .from_strings(VS, FS)
    .unwrap();
  let handle = program.repr().handle();

  program.activate(context);
  assert_eq!(common::current_program(), handle);

  // activating again is served from the state cache and must not unbind anything
  program.activate(context);
  assert_eq!(common::current_program(), handle);

  // the driver may hand the same name to the next program; the cache must not skip its binding
  drop(program);
  let mut next = context
    .new_shader_program()
    .from_strings(VS, FS)
    .unwrap();
  let next_handle = next.repr().handle();

  next.activate(context);
  assert_eq!(common::current_program(), next_handle);
}
