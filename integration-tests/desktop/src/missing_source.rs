use quadform::context::GraphicsContext as _;
use quadform::shader::{ProgramError, StageType};
use quadform_glfw::GL33Context;
use std::env;

pub fn fixture(context: &mut GL33Context) {
  let vs_path = env::temp_dir().join("quadform-integ-missing-vs.glsl");
  let fs_path = env::temp_dir().join("quadform-integ-missing-fs.glsl");

  let result = context
    .new_shader_program()
    .from_files(&vs_path, &fs_path);

  match result {
    Err(ProgramError::ResourceReadFailed { stage, path, .. }) => {
      assert_eq!(stage, StageType::VertexShader);
      assert_eq!(path, vs_path);
    }

    Err(e) => panic!("unexpected error: {}", e),
    Ok(_) => panic!("missing sources should not build a program"),
  }
}
