// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use gl::types::GLenum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
	pub ty: GLenum,
	pub count: usize,
	pub ty_size: usize,
	pub is_integer: bool,
}

impl VertexAttribute {
	pub const fn new<T: GLtype>(count: usize) -> Self {
		VertexAttribute {
			ty: T::GL_TYPE,
			count,
			ty_size: std::mem::size_of::<T>(),
			is_integer: T::IS_INTEGER,
		}
	}

	#[inline]
	pub const fn size(&self) -> usize {
		self.count * self.ty_size
	}
}

/// Byte distance between consecutive vertices of an interleaved layout.
pub fn stride(attributes: &[VertexAttribute]) -> usize {
	attributes.iter().map(VertexAttribute::size).sum()
}

/// Data laid out as one vertex of a mesh.
///
/// Attribute `i` of `VERTEX_ATTRIBUTES` is bound to location `i`.
pub trait Vertex: bytemuck::Pod {
	const VERTEX_ATTRIBUTES: &'static [VertexAttribute];
}

/// Homogeneous clip-space position.
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Position {
	pub x: f32,
	pub y: f32,
	pub z: f32,
	pub w: f32,
}

impl Position {
	/// A point on the z = 0 plane.
	pub const fn xy(x: f32, y: f32) -> Self {
		Self { x, y, z: 0.0, w: 1.0 }
	}
}

impl Vertex for Position {
	const VERTEX_ATTRIBUTES: &'static [VertexAttribute] = &[VertexAttribute::new::<f32>(4)];
}

pub trait GLtype: Sized {
	const GL_TYPE: GLenum;
	const IS_INTEGER: bool;
}

macro_rules! gl_types {
	($($type:ident($gltype:expr, int: $int:literal);)*) => {
		$(
			impl GLtype for $type {
				const GL_TYPE: GLenum = $gltype;
				const IS_INTEGER: bool = $int;
			}
		)*
	}
}

gl_types! {
	f64(gl::DOUBLE, int: false);
	f32(gl::FLOAT, int: false);

	u32(gl::UNSIGNED_INT, int: true);
	u16(gl::UNSIGNED_SHORT, int: true);
	u8(gl::UNSIGNED_BYTE, int: true);

	i32(gl::INT, int: true);
	i16(gl::SHORT, int: true);
	i8(gl::BYTE, int: true);
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn position_layout_matches_struct() {
		assert_eq!(stride(Position::VERTEX_ATTRIBUTES), std::mem::size_of::<Position>());
		assert_eq!(Position::VERTEX_ATTRIBUTES[0].ty, gl::FLOAT);
		assert!(!Position::VERTEX_ATTRIBUTES[0].is_integer);
	}

	#[test]
	fn interleaved_stride() {
		let attributes = [VertexAttribute::new::<f32>(2), VertexAttribute::new::<u8>(4)];
		assert_eq!(stride(&attributes), 12);
		assert_eq!(stride(&[]), 0);
	}
}
