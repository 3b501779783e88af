// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use gl::types::GLuint;
use thiserror::Error;

use crate::{
	geometry::GeometryKind,
	mesh::{Mesh, MeshError},
	shader::{
		Shader,
		ShaderCompileError,
		ShaderLinkError,
		ShaderProgram,
		ShaderType,
		Uniform,
		UniformError,
	},
	shape::Shape,
};

const VERTEX_SHADER: &str = include_str!("shaders/clip-vs.glsl");
const FRAGMENT_SHADER: &str = include_str!("shaders/clip-fs.glsl");

pub const POSITION_ATTRIBUTE: (&str, GLuint) = ("inPosition", 0);
pub const MATRIX_UNIFORM: &str = "Matrix";
pub const COLOR_UNIFORM: &str = "Color";

#[derive(Debug, Error)]
pub enum PainterError {
	#[error(transparent)]
	Compile(#[from] ShaderCompileError),
	#[error(transparent)]
	Link(#[from] ShaderLinkError),
	#[error(transparent)]
	Uniform(#[from] UniformError),
	#[error("could not create {0} mesh: {1}")]
	Mesh(&'static str, #[source] MeshError),
}

/// Draws [`Shape`]s with a single flat-colour clip-space program.
///
/// Owns one mesh per [`GeometryKind`], shared by every shape of that kind.
/// All GPU objects are released on drop, which must happen while the
/// context that created them is still current.
pub struct Painter {
	program: ShaderProgram,
	matrix: Uniform,
	color: Uniform,
	triangle: Mesh,
	square: Mesh,
	parallelogram: Mesh,
}

impl Painter {
	/// Compile the shader program and upload the base geometries.
	///
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn new() -> Result<Self, PainterError> {
		let program = ShaderProgram::link(
			&Shader::compile(ShaderType::Vertex, VERTEX_SHADER)?,
			&Shader::compile(ShaderType::Fragment, FRAGMENT_SHADER)?,
			&[POSITION_ATTRIBUTE],
		)?;

		let matrix = program.uniform(MATRIX_UNIFORM)?;
		let color = program.uniform(COLOR_UNIFORM)?;

		let mesh = |kind: GeometryKind| {
			Mesh::new(kind.vertices(), kind.indices()).map_err(|e| PainterError::Mesh(kind.name(), e))
		};

		Ok(Self {
			program,
			matrix,
			color,
			triangle: mesh(GeometryKind::Triangle)?,
			square: mesh(GeometryKind::Square)?,
			parallelogram: mesh(GeometryKind::Parallelogram)?,
		})
	}

	pub fn mesh(&self, kind: GeometryKind) -> &Mesh {
		match kind {
			GeometryKind::Triangle => &self.triangle,
			GeometryKind::Square => &self.square,
			GeometryKind::Parallelogram => &self.parallelogram,
		}
	}

	/// # SAFETY
	/// * must be called from GL thread
	///
	/// # SIDE EFFECTS
	/// * leaves the painter's program bound
	pub unsafe fn draw<'s>(&self, shapes: impl IntoIterator<Item = &'s Shape>) {
		self.program.bind();

		for shape in shapes {
			self.matrix.set_mat4(shape.transform.matrix());
			self.color.set_vec4(shape.color.to_vec4());
			self.mesh(shape.kind).draw();
		}
	}
}
