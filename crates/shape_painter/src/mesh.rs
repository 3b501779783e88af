// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::ffi::c_void;

use gl::types::{GLenum, GLsizei, GLsizeiptr, GLuint};
use thiserror::Error;

use crate::attribute::{self, GLtype, Vertex, VertexAttribute};

/// Indexed triangle list uploaded once into GPU memory.
pub struct Mesh {
	vao: GLuint,
	vertex_buffer: GLuint,
	index_buffer: GLuint,
	index_count: usize,
	attribute_count: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
	#[error("mesh has no vertices or no indices")]
	EmptyGeometry,
	#[error("index {index} is out of range for {vertex_count} vertices")]
	IndexOutOfRange { index: u8, vertex_count: usize },
	#[error("vertex count {0} cannot be addressed by u8 indices")]
	TooManyVertices(usize),
}

/// Check that `indices` only reference existing vertices.
pub fn validate_indices(indices: &[u8], vertex_count: usize) -> Result<(), MeshError> {
	if indices.is_empty() || vertex_count == 0 {
		return Err(MeshError::EmptyGeometry)
	}

	if vertex_count > u8::MAX as usize + 1 {
		return Err(MeshError::TooManyVertices(vertex_count))
	}

	match indices.iter().find(|&&i| i as usize >= vertex_count) {
		Some(&index) => Err(MeshError::IndexOutOfRange {
			index,
			vertex_count,
		}),
		None => Ok(()),
	}
}

impl Mesh {
	/// Create a VAO with a static vertex and index buffer.
	///
	/// # SAFETY
	/// * must be called from GL thread
	///
	/// # SIDE EFFECTS
	/// * leaves the VAO unbound
	pub unsafe fn new<V: Vertex>(vertices: &[V], indices: &[u8]) -> Result<Self, MeshError> {
		validate_indices(indices, vertices.len())?;

		let mut vao = 0;
		gl::GenVertexArrays(1, &mut vao);
		gl::BindVertexArray(vao);

		let vertex_buffer = Self::upload_buffer(gl::ARRAY_BUFFER, bytemuck::cast_slice(vertices));
		Self::set_vertex_attributes(V::VERTEX_ATTRIBUTES);

		// The element buffer binding is VAO state, so it stays bound
		// to the VAO after unbinding the VAO.
		let index_buffer = Self::upload_buffer(gl::ELEMENT_ARRAY_BUFFER, indices);

		gl::BindVertexArray(0);
		gl::BindBuffer(gl::ARRAY_BUFFER, 0);
		gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, 0);

		log::debug!(
			"uploaded mesh vao={vao} ({} vertices, {} indices)",
			vertices.len(),
			indices.len()
		);

		Ok(Self {
			vao,
			vertex_buffer,
			index_buffer,
			index_count: indices.len(),
			attribute_count: V::VERTEX_ATTRIBUTES.len(),
		})
	}

	/// # SAFETY
	/// * must be called from GL thread
	///
	/// # SIDE EFFECTS
	/// * leaves the new buffer bound to `buffer_type`
	unsafe fn upload_buffer(buffer_type: GLenum, data: &[u8]) -> GLuint {
		let mut buffer = 0;
		gl::GenBuffers(1, &mut buffer);
		gl::BindBuffer(buffer_type, buffer);
		gl::BufferData(
			buffer_type,
			data.len() as GLsizeiptr,
			data.as_ptr() as *const c_void,
			gl::STATIC_DRAW,
		);
		buffer
	}

	/// # SAFETY
	/// * VAO and VBO must be bound
	unsafe fn set_vertex_attributes(vertex_attributes: &[VertexAttribute]) {
		let stride = attribute::stride(vertex_attributes) as GLsizei;
		let mut offset = 0;

		for (i, attribute) in vertex_attributes.iter().enumerate() {
			if attribute.is_integer {
				gl::VertexAttribIPointer(
					i as u32,
					attribute.count as GLsizei,
					attribute.ty,
					stride,
					offset as *const c_void,
				);
			} else {
				gl::VertexAttribPointer(
					i as u32,
					attribute.count as GLsizei,
					attribute.ty,
					gl::FALSE,
					stride,
					offset as *const c_void,
				);
			}

			gl::EnableVertexAttribArray(i as u32);

			offset += attribute.size();
		}
	}

	pub fn index_count(&self) -> usize {
		self.index_count
	}

	/// # SAFETY
	/// * must be called from GL thread, with a compatible program bound
	pub unsafe fn draw(&self) {
		gl::BindVertexArray(self.vao);
		gl::DrawElements(
			gl::TRIANGLES,
			self.index_count as GLsizei,
			u8::GL_TYPE,
			std::ptr::null(),
		);
		gl::BindVertexArray(0);
	}
}

impl Drop for Mesh {
	fn drop(&mut self) {
		unsafe {
			gl::BindVertexArray(self.vao);
			for location in 0..self.attribute_count {
				gl::DisableVertexAttribArray(location as GLuint);
			}
			gl::BindVertexArray(0);

			let buffers = [self.vertex_buffer, self.index_buffer];
			gl::DeleteBuffers(buffers.len() as GLsizei, buffers.as_ptr());
			gl::DeleteVertexArrays(1, &self.vao);
		}

		log::debug!("destroyed mesh vao={}", self.vao);
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn rejects_empty_geometry() {
		assert_eq!(validate_indices(&[], 3), Err(MeshError::EmptyGeometry));
		assert_eq!(validate_indices(&[0, 1, 2], 0), Err(MeshError::EmptyGeometry));
	}

	#[test]
	fn rejects_out_of_range_index() {
		assert_eq!(
			validate_indices(&[0, 1, 4], 4),
			Err(MeshError::IndexOutOfRange {
				index: 4,
				vertex_count: 4
			})
		);
		assert_eq!(validate_indices(&[0, 1, 3], 4), Ok(()));
	}

	#[test]
	fn rejects_unaddressable_vertex_count() {
		assert_eq!(validate_indices(&[0], 300), Err(MeshError::TooManyVertices(300)));
	}
}
