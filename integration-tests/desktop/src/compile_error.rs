use crate::common::{FS, VS};
use quadform::context::GraphicsContext as _;
use quadform::shader::{ProgramError, StageError, StageType};
use quadform_glfw::GL33Context;

// missing closing parenthesis
const VS_SYNTAX_ERROR: &str = "#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
  gl_Position = vec4(aPos, 1.0;
}";

// undeclared identifier
const FS_SYNTAX_ERROR: &str = "#version 330 core
out vec4 FragColor;

void main()
{
  FragColor = vec4(undeclared, 1.0);
}";

fn expect_stage_error(result: Result<(), ProgramError>, expected: StageType) {
  match result {
    Err(ProgramError::Stage(StageError::CompilationFailed(ty, log))) => {
      assert_eq!(ty, expected);
      assert!(!log.is_empty(), "{} error without driver log", ty);
    }

    Err(e) => panic!("unexpected error: {}", e),
    Ok(_) => panic!("{} should not compile", expected),
  }
}

pub fn fixture(context: &mut GL33Context) {
  let vs_err = context
    .new_shader_program()
    .from_strings(VS_SYNTAX_ERROR, FS)
    .map(|_| ());
  expect_stage_error(vs_err, StageType::VertexShader);

  let fs_err = context
    .new_shader_program()
    .from_strings(VS, FS_SYNTAX_ERROR)
    .map(|_| ());
  expect_stage_error(fs_err, StageType::FragmentShader);
}
