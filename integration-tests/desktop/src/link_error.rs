use crate::common::VS;
use quadform::context::GraphicsContext as _;
use quadform::shader::ProgramError;
use quadform_glfw::GL33Context;

// reads a varying the vertex stage doesn’t write
const FS_MISMATCHED_VARYING: &str = "#version 330 core
out vec4 FragColor;

in vec3 ourColor;

void main()
{
  FragColor = vec4(ourColor, 1.0);
}";

pub fn fixture(context: &mut GL33Context) {
  let result = context
    .new_shader_program()
    .from_strings(VS, FS_MISMATCHED_VARYING);

  match result {
    Err(ProgramError::LinkFailed(_)) => (),
    Err(e) => panic!("unexpected error: {}", e),
    Ok(_) => panic!("mismatched stage interfaces should not link"),
  }
}
