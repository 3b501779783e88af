// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	pub width: u32,
	pub height: u32,
	pub title: String,
	/// Requested OpenGL core profile version (major, minor).
	pub gl_version: (u32, u32),
	pub vsync: bool,
	/// Request a debug context and route driver messages to the log.
	pub gl_debug: bool,
	pub clear_color: [f32; 4],
}

impl Default for Config {
	fn default() -> Self {
		Self {
			width: 600,
			height: 600,
			title: "Hello Modern 2D World".to_owned(),
			gl_version: (4, 6),
			vsync: true,
			gl_debug: true,
			clear_color: [0.1, 0.1, 0.1, 1.0],
		}
	}
}

impl Config {
	/// Defaults overridden by `TANGRAM_*` environment variables.
	pub fn from_env() -> Self {
		let mut config = Self::default();
		config.apply_overrides(std::env::vars());
		config
	}

	/// Apply `TANGRAM_*` overrides from `(key, value)` pairs.
	///
	/// Unparseable values are logged and skipped.
	pub fn apply_overrides(&mut self, vars: impl IntoIterator<Item = (String, String)>) {
		for (key, value) in vars {
			let applied = match key.as_str() {
				"TANGRAM_WIDTH" => parse_into(&value, &mut self.width),
				"TANGRAM_HEIGHT" => parse_into(&value, &mut self.height),
				"TANGRAM_VSYNC" => parse_bool(&value).map(|v| self.vsync = v).is_some(),
				"TANGRAM_GL_DEBUG" => parse_bool(&value).map(|v| self.gl_debug = v).is_some(),
				"TANGRAM_GL_VERSION" =>
					parse_version(&value).map(|v| self.gl_version = v).is_some(),
				_ => continue,
			};

			if applied {
				log::debug!("config override {key}={value}");
			} else {
				log::warn!("ignoring invalid value {value:?} for {key}");
			}
		}

		if self.width == 0 || self.height == 0 {
			log::warn!("window size {}x{} is empty, using defaults", self.width, self.height);
			let defaults = Self::default();
			self.width = defaults.width;
			self.height = defaults.height;
		}
	}
}

fn parse_into<T: FromStr>(value: &str, target: &mut T) -> bool {
	match value.trim().parse() {
		Ok(v) => {
			*target = v;
			true
		},
		Err(_) => false,
	}
}

fn parse_bool(value: &str) -> Option<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "on" | "yes" => Some(true),
		"0" | "false" | "off" | "no" => Some(false),
		_ => None,
	}
}

/// Parses `major.minor`.
fn parse_version(value: &str) -> Option<(u32, u32)> {
	let (major, minor) = value.trim().split_once('.')?;
	Some((major.parse().ok()?, minor.parse().ok()?))
}
