//! An in-memory backend used to drive the shader API without a GPU.
//!
//! It understands just enough GLSL to behave like a driver for the properties under test:
//!
//! - a stage compiles if it has a `main` function and balanced braces and parentheses;
//! - `uniform`, `in` and `out` declarations are collected, `layout(...)` prefixes are ignored;
//! - a uniform referenced nowhere but in its declaration is optimized out;
//! - linking fails when a fragment input has no vertex output with the same name and type;
//! - uniform updates land in the storage of the currently used program, like GL.

#![allow(dead_code)]

use quadform::backend::shader::{Shader, Uniformable};
use quadform::context::GraphicsContext;
use quadform::shader::types::Mat44;
use quadform::shader::{
  ProgramError, StageError, StageType, Uniform, UniformType, UniformWarning,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Value stored in a uniform slot.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
  Bool(bool),
  Int(i32),
  Float(f32),
  Mat44([f32; 16]),
}

#[derive(Debug)]
struct UniformSlot {
  name: String,
  glsl_ty: String,
  value: Option<Value>,
}

#[derive(Debug, Default)]
struct Registry {
  next_handle: u32,
  live_stages: usize,
  live_programs: usize,
  programs: HashMap<u32, Vec<UniformSlot>>,
}

impl Registry {
  fn gen_handle(&mut self) -> u32 {
    self.next_handle += 1;
    self.next_handle
  }
}

#[derive(Clone, Debug, Default)]
struct Decls {
  uniforms: Vec<(String, String)>,
  inputs: Vec<(String, String)>,
  outputs: Vec<(String, String)>,
}

#[derive(Debug)]
pub struct SoftStage {
  handle: u32,
  decls: Decls,
  registry: Rc<RefCell<Registry>>,
}

impl Drop for SoftStage {
  fn drop(&mut self) {
    self.registry.borrow_mut().live_stages -= 1;
  }
}

#[derive(Debug)]
pub struct SoftProgram {
  handle: u32,
  registry: Rc<RefCell<Registry>>,
}

impl SoftProgram {
  pub fn handle(&self) -> u32 {
    self.handle
  }
}

impl Drop for SoftProgram {
  fn drop(&mut self) {
    let mut registry = self.registry.borrow_mut();
    registry.live_programs -= 1;
    registry.programs.remove(&self.handle);
  }
}

#[derive(Debug, Default)]
pub struct SoftBackend {
  registry: Rc<RefCell<Registry>>,
  current_program: Option<u32>,
}

impl SoftBackend {
  pub fn live_stages(&self) -> usize {
    self.registry.borrow().live_stages
  }

  pub fn live_programs(&self) -> usize {
    self.registry.borrow().live_programs
  }

  pub fn current_program(&self) -> Option<u32> {
    self.current_program
  }

  /// Read back the value stored for a uniform, if it was ever set.
  pub fn uniform_value(&self, program: u32, name: &str) -> Option<Value> {
    self
      .registry
      .borrow()
      .programs
      .get(&program)?
      .iter()
      .find(|slot| slot.name == name)?
      .value
      .clone()
  }

  fn write(&mut self, location: i32, value: Value) {
    let current = match self.current_program {
      Some(handle) => handle,
      None => return,
    };

    let mut registry = self.registry.borrow_mut();
    let slot = registry
      .programs
      .get_mut(&current)
      .and_then(|slots| slots.get_mut(location as usize));

    if let Some(slot) = slot {
      slot.value = Some(value);
    }
  }
}

#[derive(Debug, Default)]
pub struct SoftContext {
  backend: SoftBackend,
}

impl SoftContext {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn soft(&self) -> &SoftBackend {
    &self.backend
  }
}

unsafe impl GraphicsContext for SoftContext {
  type Backend = SoftBackend;

  fn backend(&mut self) -> &mut Self::Backend {
    &mut self.backend
  }
}

unsafe impl Shader for SoftBackend {
  type StageRepr = SoftStage;

  type ProgramRepr = SoftProgram;

  unsafe fn new_stage(&mut self, ty: StageType, src: &str) -> Result<Self::StageRepr, StageError> {
    let decls = compile(src).map_err(|log| StageError::compilation_failed(ty, log))?;

    let mut registry = self.registry.borrow_mut();
    let handle = registry.gen_handle();
    registry.live_stages += 1;

    Ok(SoftStage {
      handle,
      decls,
      registry: self.registry.clone(),
    })
  }

  unsafe fn new_program(
    &mut self,
    vertex: &Self::StageRepr,
    fragment: &Self::StageRepr,
  ) -> Result<Self::ProgramRepr, ProgramError> {
    for (name, ty) in &fragment.decls.inputs {
      if !vertex.decls.outputs.contains(&(name.clone(), ty.clone())) {
        return Err(ProgramError::link_failed(format!(
          "error: fragment input {} ({}) has no matching vertex output",
          name, ty
        )));
      }
    }

    let mut slots: Vec<UniformSlot> = Vec::new();
    for (name, ty) in vertex.decls.uniforms.iter().chain(&fragment.decls.uniforms) {
      match slots.iter().find(|slot| &slot.name == name) {
        Some(slot) if &slot.glsl_ty != ty => {
          return Err(ProgramError::link_failed(format!(
            "error: uniform {} declared as both {} and {}",
            name, slot.glsl_ty, ty
          )));
        }
        Some(_) => (),
        None => slots.push(UniformSlot {
          name: name.clone(),
          glsl_ty: ty.clone(),
          value: None,
        }),
      }
    }

    let mut registry = self.registry.borrow_mut();
    let handle = registry.gen_handle();
    registry.live_programs += 1;
    registry.programs.insert(handle, slots);

    Ok(SoftProgram {
      handle,
      registry: self.registry.clone(),
    })
  }

  unsafe fn use_program(&mut self, program: &mut Self::ProgramRepr) {
    self.current_program = Some(program.handle);
  }

  unsafe fn ask_uniform<T>(
    &mut self,
    program: &mut Self::ProgramRepr,
    name: &str,
  ) -> Result<Uniform<T>, UniformWarning>
  where
    Self: Uniformable<T>,
  {
    let registry = self.registry.borrow();
    let slots = registry
      .programs
      .get(&program.handle)
      .ok_or_else(|| UniformWarning::inactive(name))?;
    let location = slots
      .iter()
      .position(|slot| slot.name == name)
      .ok_or_else(|| UniformWarning::inactive(name))?;

    let ty = <Self as Uniformable<T>>::ty();
    if !type_matches(ty, &slots[location].glsl_ty) {
      return Err(UniformWarning::type_mismatch(name, ty));
    }

    Ok(Uniform::new(location as i32))
  }
}

fn type_matches(ty: UniformType, glsl_ty: &str) -> bool {
  match ty {
    UniformType::Int => glsl_ty == "int" || glsl_ty == "bool" || glsl_ty.starts_with("sampler"),
    UniformType::Float => glsl_ty == "float",
    UniformType::Bool => glsl_ty == "bool" || glsl_ty == "int",
    UniformType::M44 => glsl_ty == "mat4",
  }
}

unsafe impl Uniformable<bool> for SoftBackend {
  unsafe fn ty() -> UniformType {
    UniformType::Bool
  }

  unsafe fn update(&mut self, _: &mut SoftProgram, uniform: &Uniform<bool>, value: bool) {
    self.write(uniform.index(), Value::Bool(value));
  }
}

unsafe impl Uniformable<i32> for SoftBackend {
  unsafe fn ty() -> UniformType {
    UniformType::Int
  }

  unsafe fn update(&mut self, _: &mut SoftProgram, uniform: &Uniform<i32>, value: i32) {
    self.write(uniform.index(), Value::Int(value));
  }
}

unsafe impl Uniformable<f32> for SoftBackend {
  unsafe fn ty() -> UniformType {
    UniformType::Float
  }

  unsafe fn update(&mut self, _: &mut SoftProgram, uniform: &Uniform<f32>, value: f32) {
    self.write(uniform.index(), Value::Float(value));
  }
}

unsafe impl Uniformable<Mat44<f32>> for SoftBackend {
  unsafe fn ty() -> UniformType {
    UniformType::M44
  }

  unsafe fn update(&mut self, _: &mut SoftProgram, uniform: &Uniform<Mat44<f32>>, value: Mat44<f32>) {
    self.write(uniform.index(), Value::Mat44(value.to_cols_array()));
  }
}

fn compile(src: &str) -> Result<Decls, String> {
  if !src.contains("void main()") {
    return Err("0:0: error: no main function".to_owned());
  }

  let mut depth = Vec::new();
  for (line_nb, line) in src.lines().enumerate() {
    for c in line.chars() {
      match c {
        '{' | '(' => depth.push(c),
        '}' | ')' => {
          let open = if c == '}' { '{' } else { '(' };
          if depth.pop() != Some(open) {
            return Err(format!("0:{}: error: syntax error, unexpected '{}'", line_nb + 1, c));
          }
        }
        _ => (),
      }
    }
  }

  if !depth.is_empty() {
    return Err("0:0: error: syntax error, unexpected end of file".to_owned());
  }

  let mut decls = Decls::default();
  for line in src.lines() {
    let line = strip_layout(line.trim());
    let words: Vec<&str> = line.trim_end_matches(';').split_whitespace().collect();

    if let [qualifier, ty, name] = words.as_slice() {
      let decl = (name.to_string(), ty.to_string());
      match *qualifier {
        "uniform" if is_used(src, name) => decls.uniforms.push(decl),
        "in" => decls.inputs.push(decl),
        "out" => decls.outputs.push(decl),
        _ => (),
      }
    }
  }

  Ok(decls)
}

fn strip_layout(line: &str) -> &str {
  if line.starts_with("layout") {
    line.find(')').map(|i| line[i + 1..].trim()).unwrap_or(line)
  } else {
    line
  }
}

// a uniform is used if its name shows up anywhere besides its declaration
fn is_used(src: &str, name: &str) -> bool {
  src
    .split(|c: char| !(c.is_alphanumeric() || c == '_'))
    .filter(|word| *word == name)
    .count()
    > 1
}
