use colored::Colorize as _;
use quadform_glfw::{GL33Context, GlfwSurface, WindowDim};

mod common;

macro_rules! tests {
  ($($name:expr, $module:ident),*) => {
    // declare the modules for all tests
    $(
      mod $module;
    )*

    // list of all available integration tests
    const TEST_NAMES: &[&str] = &[$( $name ),*];

    // run a given test; all tests share the same context
    fn run_test(name: &str, context: &mut GL33Context) {
      $(
        if name == $name {
          $module::fixture(context);
          return;
        }
      )*
    }
  }
}

tests! {
  "program-link", program_link,
  "compile-error", compile_error,
  "link-error", link_error,
  "missing-uniform", missing_uniform,
  "matrix-layout", matrix_layout,
  "missing-source", missing_source
}

fn show_test_names() {
  for test_name in TEST_NAMES {
    println!("  -> {}", test_name.blue());
  }
}

fn main() {
  let test_name = std::env::args().nth(1);

  let to_run: Vec<&str> = match test_name {
    Some(ref test_name) if TEST_NAMES.contains(&test_name.as_str()) => vec![test_name.as_str()],

    Some(ref test_name) => {
      println!("{} is not a valid test. Possible values", test_name.red());
      show_test_names();
      return;
    }

    None => TEST_NAMES.to_vec(),
  };

  let dim = WindowDim::Hidden {
    width: 64,
    height: 64,
  };
  let surface = GlfwSurface::new_gl33("quadform integration tests", dim).expect("GLFW surface");
  let mut context = surface.context;

  for test_name in to_run {
    println!("test name: {}", test_name.green());
    run_test(test_name, &mut context);
    println!("  {}", "ok".green());
  }
}
