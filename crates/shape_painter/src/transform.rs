// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use glam::{Mat4, Vec3};

/// Affine transform built up from successive operations.
///
/// Each operation is applied after every operation already recorded,
/// so calls read in the order they happen to the shape:
///
/// ```
/// # use glam::Vec3;
/// # use shape_painter::Transform;
/// let mut t = Transform::new();
/// t.scale(Vec3::splat(2.0)).translate(Vec3::X);
/// assert_eq!(t.apply(Vec3::X), Vec3::new(3.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
	matrix: Mat4,
}

impl Default for Transform {
	fn default() -> Self {
		Self::new()
	}
}

impl Transform {
	pub const fn new() -> Self {
		Self {
			matrix: Mat4::IDENTITY,
		}
	}

	pub fn translate(&mut self, delta: Vec3) -> &mut Self {
		self.then(Mat4::from_translation(delta))
	}

	pub fn scale(&mut self, factors: Vec3) -> &mut Self {
		self.then(Mat4::from_scale(factors))
	}

	/// Rotate by `degrees` counter-clockwise around `axis`.
	///
	/// A zero-length axis has no direction and is ignored.
	pub fn rotate(&mut self, axis: Vec3, degrees: f32) -> &mut Self {
		match axis.try_normalize() {
			Some(axis) => self.then(Mat4::from_axis_angle(axis, degrees.to_radians())),
			None => {
				log::warn!("ignoring rotation of {degrees} degrees around zero-length axis");
				self
			},
		}
	}

	/// Apply `other` after this transform.
	pub fn then(&mut self, other: Mat4) -> &mut Self {
		self.matrix = other * self.matrix;
		self
	}

	pub fn matrix(&self) -> &Mat4 {
		&self.matrix
	}

	pub fn apply(&self, point: Vec3) -> Vec3 {
		self.matrix.transform_point3(point)
	}
}

#[cfg(test)]
mod test {
	use std::f32::consts::FRAC_1_SQRT_2;

	use super::*;

	const EPSILON: f32 = 1e-6;

	#[test]
	fn starts_at_identity() {
		assert_eq!(*Transform::new().matrix(), Mat4::IDENTITY);
		assert_eq!(Transform::default(), Transform::new());
	}

	#[test]
	fn first_call_applies_first() {
		let mut rotate_then_move = Transform::new();
		rotate_then_move.rotate(Vec3::Z, 90.0).translate(Vec3::X);

		let mut move_then_rotate = Transform::new();
		move_then_rotate.translate(Vec3::X).rotate(Vec3::Z, 90.0);

		assert!(rotate_then_move.apply(Vec3::X).abs_diff_eq(Vec3::new(1.0, 1.0, 0.0), EPSILON));
		assert!(move_then_rotate.apply(Vec3::X).abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), EPSILON));
	}

	#[test]
	fn rotation_uses_degrees() {
		let mut t = Transform::new();
		t.rotate(Vec3::Z, 45.0);
		assert!(t
			.apply(Vec3::X)
			.abs_diff_eq(Vec3::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0), EPSILON));
	}

	#[test]
	fn rotation_axis_is_normalized() {
		let mut unit = Transform::new();
		unit.rotate(Vec3::Z, -135.0);
		let mut long = Transform::new();
		long.rotate(Vec3::new(0.0, 0.0, 5.0), -135.0);

		assert!(unit.matrix().abs_diff_eq(*long.matrix(), EPSILON));
	}

	#[test]
	fn zero_axis_rotation_is_ignored() {
		let mut t = Transform::new();
		t.translate(Vec3::Y).rotate(Vec3::ZERO, 30.0);

		let mut expected = Transform::new();
		expected.translate(Vec3::Y);
		assert_eq!(t, expected);
	}

	#[test]
	fn flattening_scale() {
		let mut t = Transform::new();
		t.scale(Vec3::new(0.5, 0.5, 0.0));
		assert_eq!(t.apply(Vec3::new(1.0, -1.0, 3.0)), Vec3::new(0.5, -0.5, 0.0));
	}
}
