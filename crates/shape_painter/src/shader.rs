// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::ffi::{c_char, CString};

use gl::types::{GLenum, GLint, GLuint};
use glam::{Mat4, Vec4};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderType {
	Vertex,
	Fragment,
}

pub struct Shader {
	ty: ShaderType,
	shader_object: GLuint,
}

pub struct ShaderProgram {
	program_object: GLuint,
}

/// Location of a uniform inside a linked [`ShaderProgram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uniform {
	location: GLint,
}

impl ShaderType {
	#[inline]
	pub fn gl_type(&self) -> GLenum {
		match self {
			Self::Vertex => gl::VERTEX_SHADER,
			Self::Fragment => gl::FRAGMENT_SHADER,
		}
	}
}

#[derive(Debug, Error)]
pub enum ShaderCompileError {
	#[error("could not create shader (glCreateShader returned 0)")]
	CouldNotCreate,
	#[error("could not compile {0:?} shader - driver log:\n{1}\n")]
	Compile(ShaderType, String),
}

#[derive(Debug, Error)]
pub enum ShaderLinkError {
	#[error("expected a vertex shader and a fragment shader")]
	InvalidShader,
	#[error("could not create program (glCreateProgram returned 0)")]
	CouldNotCreate,
	#[error("attribute name {0:?} contains a nul byte")]
	InvalidName(String),
	#[error("could not link shader - driver log:\n{0}\n")]
	Link(String),
}

#[derive(Debug, Error)]
pub enum UniformError {
	#[error("uniform name {0:?} contains a nul byte")]
	InvalidName(String),
	#[error("uniform {0:?} is not an active uniform of the program")]
	NotFound(String),
}

/// Reads a shader or program info log.
///
/// The driver writes a null terminator, which is stripped.
unsafe fn read_info_log(
	object: GLuint,
	get_iv: unsafe fn(GLuint, GLenum, *mut GLint),
	get_log: unsafe fn(GLuint, GLint, *mut GLint, *mut c_char),
) -> String {
	let mut log_length = 0 as GLint;
	get_iv(object, gl::INFO_LOG_LENGTH, &mut log_length);
	if log_length <= 0 {
		return String::new()
	}

	let mut log = vec![0u8; log_length as usize];
	let mut written = 0 as GLint;
	get_log(object, log_length, &mut written, log.as_mut_ptr() as *mut c_char);
	log.truncate(written.max(0) as usize);

	String::from_utf8_lossy(&log).into_owned()
}

impl Shader {
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn compile(ty: ShaderType, source: &str) -> Result<Self, ShaderCompileError> {
		let shader = gl::CreateShader(ty.gl_type());
		if shader == 0 {
			return Err(ShaderCompileError::CouldNotCreate)
		}

		let src_ptr = source.as_bytes().as_ptr() as *const c_char;
		let len = source.len() as GLint;
		gl::ShaderSource(shader, 1, &src_ptr, &len);

		gl::CompileShader(shader);

		let mut compile_status = 0 as GLint;
		gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut compile_status);

		if compile_status != gl::TRUE as GLint {
			let log = read_info_log(shader, gl::GetShaderiv, gl::GetShaderInfoLog);
			gl::DeleteShader(shader);
			return Err(ShaderCompileError::Compile(ty, log))
		}

		log::debug!("compiled {ty:?} shader {shader}");

		Ok(Shader {
			shader_object: shader,
			ty,
		})
	}

	pub fn ty(&self) -> ShaderType {
		self.ty
	}
}

impl Drop for Shader {
	fn drop(&mut self) {
		// Reduces refcount for shader.
		// The OpenGL driver will only delete the backing shader object
		// when it is not attached to shader program.
		unsafe { gl::DeleteShader(self.shader_object) };
	}
}

impl ShaderProgram {
	/// Link a vertex and fragment shader, binding each `(name, location)`
	/// attribute pair before linking.
	///
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn link(
		vertex_shader: &Shader,
		fragment_shader: &Shader,
		attributes: &[(&str, GLuint)],
	) -> Result<Self, ShaderLinkError> {
		match (&vertex_shader.ty, &fragment_shader.ty) {
			(ShaderType::Vertex, ShaderType::Fragment) => {},
			_ => return Err(ShaderLinkError::InvalidShader),
		}

		let attributes = attributes
			.iter()
			.map(|(name, location)| {
				CString::new(*name)
					.map(|name| (name, *location))
					.map_err(|_| ShaderLinkError::InvalidName(name.to_string()))
			})
			.collect::<Result<Vec<_>, _>>()?;

		let program = gl::CreateProgram();
		if program == 0 {
			return Err(ShaderLinkError::CouldNotCreate)
		}

		gl::AttachShader(program, vertex_shader.shader_object);
		gl::AttachShader(program, fragment_shader.shader_object);

		for (name, location) in &attributes {
			gl::BindAttribLocation(program, *location, name.as_ptr());
		}

		gl::LinkProgram(program);

		// allows earlier deletion of shader objects.
		gl::DetachShader(program, vertex_shader.shader_object);
		gl::DetachShader(program, fragment_shader.shader_object);

		let mut link_status = 0;
		gl::GetProgramiv(program, gl::LINK_STATUS, &mut link_status);

		if link_status != gl::TRUE as GLint {
			let log = read_info_log(program, gl::GetProgramiv, gl::GetProgramInfoLog);
			gl::DeleteProgram(program);
			return Err(ShaderLinkError::Link(log))
		}

		log::debug!("linked shader program {program}");

		Ok(ShaderProgram {
			program_object: program,
		})
	}

	/// Look up an active uniform by name.
	///
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn uniform(&self, name: &str) -> Result<Uniform, UniformError> {
		let c_name = CString::new(name).map_err(|_| UniformError::InvalidName(name.to_string()))?;

		match gl::GetUniformLocation(self.program_object, c_name.as_ptr()) {
			-1 => Err(UniformError::NotFound(name.to_string())),
			location => Ok(Uniform { location }),
		}
	}

	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn bind(&self) {
		gl::UseProgram(self.program_object);
	}
}

impl Drop for ShaderProgram {
	fn drop(&mut self) {
		// Reduces refcount for shader program.
		// The OpenGL driver will only delete the backing shader program
		// when it is not part of any rendering context.
		unsafe { gl::DeleteProgram(self.program_object) };
	}
}

impl Uniform {
	/// # SAFETY
	/// * the owning program must be bound
	pub unsafe fn set_mat4(&self, matrix: &Mat4) {
		gl::UniformMatrix4fv(self.location, 1, gl::FALSE, matrix.to_cols_array().as_ptr());
	}

	/// # SAFETY
	/// * the owning program must be bound
	pub unsafe fn set_vec4(&self, value: Vec4) {
		gl::Uniform4f(self.location, value.x, value.y, value.z, value.w);
	}
}
