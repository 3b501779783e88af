// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Flat-colour shapes drawn directly in clip space.
//!
//! Every GL-touching function in this crate is `unsafe` and must be called
//! from the thread owning a current OpenGL context.

pub mod attribute;
pub mod geometry;
pub mod mesh;
pub mod painter;
pub mod shader;
pub mod shape;
pub mod transform;

pub use geometry::GeometryKind;
pub use painter::{Painter, PainterError};
pub use shape::{Color, Shape};
pub use transform::Transform;
