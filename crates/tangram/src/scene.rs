// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! The "sea dinosaur" tangram figure.
//!
//! Pieces are first scaled, rotated and moved into place relative to each
//! other. The whole figure is then shrunk to fit clip space, tilted slightly
//! upwards and nudged right; those operations come after the per-piece ones,
//! so they move the figure rather than individual pieces.

use std::f32::consts::SQRT_2;

use glam::Vec3;
use shape_painter::{Color, Shape};

const HALF_SQRT_2: f32 = SQRT_2 / 2.0;
const QUARTER_SQRT_2: f32 = SQRT_2 / 4.0;

const FLAT_HALF: Vec3 = Vec3::new(0.5, 0.5, 0.0);

pub fn sea_dinosaur() -> Vec<Shape> {
	let mut large_blue = Shape::triangle(Color::from_rgb8(15, 130, 242));
	large_blue
		.rotate(Vec3::Z, -135.0)
		.translate(Vec3::new(HALF_SQRT_2, -HALF_SQRT_2, 0.0));

	let mut large_magenta = Shape::triangle(Color::from_rgb8(205, 14, 102));
	large_magenta.rotate(Vec3::Z, 45.0);

	let mut medium_purple = Shape::triangle(Color::from_rgb8(109, 59, 191));
	medium_purple
		.scale(Vec3::new(HALF_SQRT_2, HALF_SQRT_2, 0.0))
		.translate(Vec3::new(-QUARTER_SQRT_2, -QUARTER_SQRT_2, 0.0));

	let mut small_teal = Shape::triangle(Color::from_rgb8(0, 158, 166));
	small_teal
		.scale(FLAT_HALF)
		.rotate(Vec3::Z, 45.0)
		.translate(Vec3::new(-QUARTER_SQRT_2, -HALF_SQRT_2, 0.0));

	let mut small_orange = Shape::triangle(Color::from_rgb8(235, 71, 38));
	small_orange
		.scale(FLAT_HALF)
		.rotate(Vec3::Z, 90.0)
		.translate(Vec3::new(-HALF_SQRT_2 - 1.25, 0.25, 0.0));

	let mut green = Shape::square(Color::from_rgb8(34, 171, 36));
	green.scale(FLAT_HALF).translate(Vec3::new(-HALF_SQRT_2 - 0.75, 0.25, 0.0));

	let mut orange = Shape::parallelogram(Color::from_rgb8(253, 140, 0));
	orange
		.scale(FLAT_HALF)
		.rotate(Vec3::Z, 90.0)
		.translate(Vec3::new(-HALF_SQRT_2 - 0.25, 0.0, 0.0));

	let mut pieces = vec![
		large_blue,
		large_magenta,
		medium_purple,
		small_teal,
		small_orange,
		green,
		orange,
	];

	for piece in &mut pieces {
		piece
			.scale(FLAT_HALF)
			.rotate(Vec3::Z, -11.0)
			.translate(Vec3::new(0.25, 0.0, 0.0));
	}

	pieces
}

#[cfg(test)]
mod test {
	use shape_painter::GeometryKind;

	use super::*;

	const EPSILON: f32 = 1e-5;

	fn corner(shape: &Shape, i: usize) -> Vec3 {
		shape.clip_space_vertices()[i]
	}

	#[test]
	fn seven_pieces() {
		let kinds = sea_dinosaur().iter().map(|s| s.kind).collect::<Vec<_>>();
		assert_eq!(kinds, [
			GeometryKind::Triangle,
			GeometryKind::Triangle,
			GeometryKind::Triangle,
			GeometryKind::Triangle,
			GeometryKind::Triangle,
			GeometryKind::Square,
			GeometryKind::Parallelogram,
		]);
	}

	#[test]
	fn fits_in_clip_space() {
		for shape in sea_dinosaur() {
			for v in shape.clip_space_vertices() {
				assert!(v.x.abs() < 1.0 && v.y.abs() < 1.0, "{v} is outside clip space");
				assert_eq!(v.z, 0.0);
			}
		}
	}

	#[test]
	fn pieces_meet_at_corners() {
		let [blue, magenta, purple, teal, small_orange, green, orange]: [Shape; 7] =
			sea_dinosaur().try_into().unwrap();

		// the two large triangles form a square
		assert!(corner(&blue, 0).abs_diff_eq(corner(&magenta, 1), EPSILON));
		assert!(corner(&blue, 1).abs_diff_eq(corner(&magenta, 0), EPSILON));

		assert!(corner(&purple, 1).abs_diff_eq(corner(&magenta, 0), EPSILON));
		assert!(corner(&purple, 2).abs_diff_eq(corner(&magenta, 2), EPSILON));
		assert!(corner(&teal, 2).abs_diff_eq(corner(&purple, 0), EPSILON));

		// neck and head
		assert!(corner(&orange, 1).abs_diff_eq(corner(&magenta, 2), EPSILON));
		assert!(corner(&orange, 2).abs_diff_eq(corner(&green, 1), EPSILON));
		assert!(corner(&orange, 3).abs_diff_eq(corner(&green, 2), EPSILON));
		assert!(corner(&small_orange, 0).abs_diff_eq(corner(&green, 0), EPSILON));
		assert!(corner(&small_orange, 1).abs_diff_eq(corner(&green, 3), EPSILON));
	}

	#[test]
	fn known_corner_positions() {
		let pieces = sea_dinosaur();
		assert!(corner(&pieces[0], 2).abs_diff_eq(Vec3::new(0.876_654, -0.481_980, 0.0), EPSILON));
		assert!(corner(&pieces[4], 2).abs_diff_eq(Vec3::new(-0.833_278, 0.210_568, 0.0), EPSILON));
	}

	#[test]
	fn total_area() {
		// A full tangram covers 2 square units before the figure is halved.
		let area = sea_dinosaur()
			.iter()
			.map(|shape| {
				let vertices = shape.clip_space_vertices();
				shape
					.kind
					.indices()
					.chunks_exact(3)
					.map(|tri| {
						let a = vertices[tri[0] as usize];
						let b = vertices[tri[1] as usize];
						let c = vertices[tri[2] as usize];
						(b - a).truncate().perp_dot((c - a).truncate()).abs() / 2.0
					})
					.sum::<f32>()
			})
			.sum::<f32>();

		assert!((area - 0.5).abs() < EPSILON, "area was {area}");
	}

	#[test]
	fn colors() {
		let pieces = sea_dinosaur();
		assert_eq!(pieces[5].color, Color::from_rgb8(34, 171, 36));
		assert_eq!(pieces[6].color.b, 0.0);
	}
}
