// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use glam::{Vec3, Vec4};

use crate::{geometry::GeometryKind, transform::Transform};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
	pub r: f32,
	pub g: f32,
	pub b: f32,
}

impl Color {
	pub const fn new(r: f32, g: f32, b: f32) -> Self {
		Self { r, g, b }
	}

	pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
		Self {
			r: r as f32 / 255.0,
			g: g as f32 / 255.0,
			b: b as f32 / 255.0,
		}
	}

	/// Opaque RGBA.
	pub fn to_vec4(self) -> Vec4 {
		Vec4::new(self.r, self.g, self.b, 1.0)
	}
}

/// One flat-coloured piece: a base geometry placed by a transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
	pub kind: GeometryKind,
	pub color: Color,
	pub transform: Transform,
}

impl Shape {
	pub fn new(kind: GeometryKind, color: Color) -> Self {
		Self {
			kind,
			color,
			transform: Transform::new(),
		}
	}

	pub fn triangle(color: Color) -> Self {
		Self::new(GeometryKind::Triangle, color)
	}

	pub fn square(color: Color) -> Self {
		Self::new(GeometryKind::Square, color)
	}

	pub fn parallelogram(color: Color) -> Self {
		Self::new(GeometryKind::Parallelogram, color)
	}

	pub fn translate(&mut self, delta: Vec3) -> &mut Self {
		self.transform.translate(delta);
		self
	}

	pub fn scale(&mut self, factors: Vec3) -> &mut Self {
		self.transform.scale(factors);
		self
	}

	pub fn rotate(&mut self, axis: Vec3, degrees: f32) -> &mut Self {
		self.transform.rotate(axis, degrees);
		self
	}

	/// Vertices as they end up in clip space, in geometry table order.
	pub fn clip_space_vertices(&self) -> Vec<Vec3> {
		self.kind
			.vertices()
			.iter()
			.map(|p| self.transform.apply(Vec3::new(p.x, p.y, p.z)))
			.collect()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn rgb8_is_normalized() {
		let c = Color::from_rgb8(255, 0, 51);
		assert_eq!(c, Color::new(1.0, 0.0, 0.2));
		assert_eq!(c.to_vec4(), Vec4::new(1.0, 0.0, 0.2, 1.0));
	}

	#[test]
	fn untransformed_shape_keeps_table_vertices() {
		let square = Shape::square(Color::new(0.0, 1.0, 0.0));
		assert_eq!(square.clip_space_vertices(), vec![
			Vec3::new(-0.5, -0.5, 0.0),
			Vec3::new(0.5, -0.5, 0.0),
			Vec3::new(0.5, 0.5, 0.0),
			Vec3::new(-0.5, 0.5, 0.0),
		]);
	}

	#[test]
	fn operations_forward_to_transform() {
		let mut shape = Shape::triangle(Color::new(1.0, 1.0, 1.0));
		shape.scale(Vec3::splat(2.0)).translate(Vec3::new(0.0, 1.0, 0.0));

		assert_eq!(shape.clip_space_vertices()[2], Vec3::new(-1.0, 2.0, 0.0));
	}
}
