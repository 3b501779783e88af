// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Base geometries, centred on the origin and wound counter-clockwise.

use crate::attribute::Position;

pub trait Geometry {
	const NAME: &'static str;
	const VERTICES: &'static [Position];
	const INDICES: &'static [u8];
}

pub struct Triangle;
pub struct Square;
pub struct Parallelogram;

impl Geometry for Triangle {
	const NAME: &'static str = "triangle";
	#[rustfmt::skip]
	const VERTICES: &'static [Position] = &[
		Position::xy(-0.5, -0.5),
		Position::xy(0.5, -0.5),
		Position::xy(-0.5, 0.5),
	];
	const INDICES: &'static [u8] = &[0, 1, 2];
}

impl Geometry for Square {
	const NAME: &'static str = "square";
	#[rustfmt::skip]
	const VERTICES: &'static [Position] = &[
		Position::xy(-0.5, -0.5),
		Position::xy(0.5, -0.5),
		Position::xy(0.5, 0.5),
		Position::xy(-0.5, 0.5),
	];
	const INDICES: &'static [u8] = &[0, 1, 2, 0, 2, 3];
}

impl Geometry for Parallelogram {
	const NAME: &'static str = "parallelogram";
	#[rustfmt::skip]
	const VERTICES: &'static [Position] = &[
		Position::xy(-1.0, -0.5),
		Position::xy(0.0, -0.5),
		Position::xy(0.0, 0.5),
		Position::xy(1.0, 0.5),
	];
	const INDICES: &'static [u8] = &[0, 1, 2, 1, 3, 2];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
	Triangle,
	Square,
	Parallelogram,
}

impl GeometryKind {
	pub const ALL: [GeometryKind; 3] = [Self::Triangle, Self::Square, Self::Parallelogram];

	pub fn name(&self) -> &'static str {
		match self {
			Self::Triangle => Triangle::NAME,
			Self::Square => Square::NAME,
			Self::Parallelogram => Parallelogram::NAME,
		}
	}

	pub fn vertices(&self) -> &'static [Position] {
		match self {
			Self::Triangle => Triangle::VERTICES,
			Self::Square => Square::VERTICES,
			Self::Parallelogram => Parallelogram::VERTICES,
		}
	}

	pub fn indices(&self) -> &'static [u8] {
		match self {
			Self::Triangle => Triangle::INDICES,
			Self::Square => Square::INDICES,
			Self::Parallelogram => Parallelogram::INDICES,
		}
	}

	/// Area covered by the index triangles.
	pub fn area(&self) -> f32 {
		let vertices = self.vertices();
		self.indices()
			.chunks_exact(3)
			.map(|tri| {
				signed_area(
					vertices[tri[0] as usize],
					vertices[tri[1] as usize],
					vertices[tri[2] as usize],
				)
			})
			.sum()
	}
}

/// Positive when `a`, `b`, `c` are counter-clockwise.
pub(crate) fn signed_area(a: Position, b: Position, c: Position) -> f32 {
	((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)) / 2.0
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::mesh::validate_indices;

	#[test]
	fn tables_are_valid_meshes() {
		for kind in GeometryKind::ALL {
			validate_indices(kind.indices(), kind.vertices().len()).unwrap();
			assert_eq!(kind.indices().len() % 3, 0, "{} is not a triangle list", kind.name());
		}
	}

	#[test]
	fn counter_clockwise_winding() {
		for kind in GeometryKind::ALL {
			let vertices = kind.vertices();
			for tri in kind.indices().chunks_exact(3) {
				let area = signed_area(
					vertices[tri[0] as usize],
					vertices[tri[1] as usize],
					vertices[tri[2] as usize],
				);
				assert!(area > 0.0, "{} has a clockwise triangle {tri:?}", kind.name());
			}
		}
	}

	#[test]
	fn areas() {
		assert_eq!(GeometryKind::Triangle.area(), 0.5);
		assert_eq!(GeometryKind::Square.area(), 1.0);
		assert_eq!(GeometryKind::Parallelogram.area(), 1.0);
	}
}
