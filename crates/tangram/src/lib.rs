// Copyright (C) 2022 the ITK authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use glfw::{Context, OpenGlProfileHint, SwapInterval, WindowHint, WindowMode};
use shape_painter::{Painter, PainterError, Shape};
use thiserror::Error;

pub mod config;
pub mod debug;
pub mod scene;

pub use config::Config;

#[derive(Debug, Error)]
pub enum AppError {
	#[error("could not initialize GLFW: {0:?}")]
	GlfwInit(glfw::InitError),
	#[error("could not create a {width}x{height} window with an OpenGL {major}.{minor} context")]
	WindowCreation {
		width: u32,
		height: u32,
		major: u32,
		minor: u32,
	},
	#[error("could not set up the painter: {0}")]
	Painter(#[from] PainterError),
}

/// GPU resources and scene, alive while the window is open.
struct App {
	painter: Painter,
	shapes: Vec<Shape>,
	clear_color: [f32; 4],
}

impl App {
	/// # SAFETY
	/// * must be called from GL thread
	unsafe fn init(config: &Config) -> Result<Self, PainterError> {
		let painter = Painter::new()?;
		let shapes = scene::sea_dinosaur();
		log::info!("scene ready with {} shapes", shapes.len());

		Ok(Self {
			painter,
			shapes,
			clear_color: config.clear_color,
		})
	}

	/// # SAFETY
	/// * must be called from GL thread
	unsafe fn display(&self) {
		let [r, g, b, a] = self.clear_color;
		gl::ClearColor(r, g, b, a);
		gl::Clear(gl::COLOR_BUFFER_BIT);

		self.painter.draw(&self.shapes);
	}

	/// # SAFETY
	/// * must be called from GL thread
	unsafe fn resize(&self, width: i32, height: i32) {
		log::debug!("viewport resized to {width}x{height}");
		gl::Viewport(0, 0, width, height);
	}
}

/// Open the window and draw the scene until the window is closed.
pub fn run(config: &Config) -> Result<(), AppError> {
	let mut glfw = glfw::init(glfw::LOG_ERRORS).map_err(AppError::GlfwInit)?;

	let (major, minor) = config.gl_version;
	glfw.window_hint(WindowHint::ContextVersion(major, minor));
	glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));
	glfw.window_hint(WindowHint::OpenGlForwardCompat(true));
	glfw.window_hint(WindowHint::OpenGlDebugContext(config.gl_debug));

	let (mut window, events) = glfw
		.create_window(config.width, config.height, &config.title, WindowMode::Windowed)
		.ok_or(AppError::WindowCreation {
			width: config.width,
			height: config.height,
			major,
			minor,
		})?;

	window.make_current();

	glfw.set_swap_interval(match config.vsync {
		true => SwapInterval::Sync(1),
		false => SwapInterval::None,
	});

	window.set_framebuffer_size_polling(true);

	gl::load_with(|p| window.get_proc_address(p));

	if config.gl_debug && !unsafe { debug::setup_gl_debug() } {
		log::warn!("GL debug output is not available in this context");
	}

	log::info!(
		"opened {}x{} window with OpenGL {major}.{minor}",
		config.width,
		config.height
	);

	// Dropped before `window`, so GPU objects are destroyed while the
	// context is still alive.
	let app = unsafe { App::init(config)? };

	let (width, height) = window.get_framebuffer_size();
	unsafe { app.resize(width, height) };

	while !window.should_close() {
		unsafe { app.display() };

		window.swap_buffers();
		glfw.poll_events();
		for (_, event) in glfw::flush_messages(&events) {
			match event {
				glfw::WindowEvent::FramebufferSize(width, height) => unsafe {
					app.resize(width, height);
				},
				_ => {},
			}
		}
	}

	log::info!("window closed, releasing GPU resources");
	drop(app);

	Ok(())
}
