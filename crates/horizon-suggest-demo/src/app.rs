//! Winit application hosting the demo [`Scene`].
//!
//! Frames are rasterized on the CPU with [`FramePainter`] and presented
//! through softbuffer.

use std::num::NonZeroU32;
use std::sync::Arc;

use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, OwnedDisplayHandle};
use winit::window::{Window, WindowId};

use horizon_suggest::core::logging::targets;
use horizon_suggest::prelude::*;

use crate::config::DemoConfig;
use crate::error::{DemoError, DemoResult};
use crate::raster::{FramePainter, TextRaster};
use crate::scene::Scene;

const CLEAR_COLOR: Color = Color::from_rgb(0.94, 0.94, 0.94);

/// Per-window state, created on `resumed`.
struct WindowState {
    // Dropped before the window it presents to.
    surface: Surface<OwnedDisplayHandle, Arc<Window>>,
    _context: Context<OwnedDisplayHandle>,
    window: Arc<Window>,
    raster: TextRaster,
}

impl WindowState {
    fn scale(&self) -> f32 {
        self.window.scale_factor() as f32
    }

    /// Screen position of the content area in logical pixels.
    fn content_origin(&self) -> Point {
        let scale = self.scale();
        let position = self
            .window
            .inner_position()
            .unwrap_or(PhysicalPosition::new(0, 0));
        Point::new(position.x as f32 / scale, position.y as f32 / scale)
    }

    fn content_size(&self) -> Size {
        let scale = self.scale();
        let size = self.window.inner_size();
        Size::new(size.width as f32 / scale, size.height as f32 / scale)
    }

    fn resize_surface(&mut self, size: PhysicalSize<u32>) -> DemoResult<()> {
        let width = NonZeroU32::new(size.width);
        let height = NonZeroU32::new(size.height);
        if let (Some(width), Some(height)) = (width, height) {
            self.surface.resize(width, height)?;
        }
        Ok(())
    }
}

/// The demo application.
pub struct DemoApp {
    config: DemoConfig,
    scene: Scene,
    keyboard: KeyboardInputHandler,
    mouse: MouseInputHandler,
    state: Option<WindowState>,
    error: Option<DemoError>,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> DemoResult<Self> {
        let scene = Scene::new(&config)?;
        Ok(Self {
            config,
            scene,
            keyboard: KeyboardInputHandler::new(),
            mouse: MouseInputHandler::new(),
            state: None,
            error: None,
        })
    }

    /// Consume the app, returning the first error that stopped the loop.
    pub fn finish(self) -> DemoResult<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: DemoError) {
        tracing::error!(target: targets::DEMO, error = %err, "stopping event loop");
        self.error.get_or_insert(err);
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> DemoResult<()> {
        let attributes = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));
        let window = Arc::new(event_loop.create_window(attributes)?);
        let context = Context::new(event_loop.owned_display_handle())?;
        let surface = Surface::new(&context, window.clone())?;

        let mut state = WindowState {
            surface,
            _context: context,
            window,
            raster: TextRaster::new(),
        };
        state.resize_surface(state.window.inner_size())?;
        tracing::info!(
            target: targets::DEMO,
            title = %self.config.window.title,
            scale = state.scale(),
            "window created"
        );

        self.configure(&state);
        state.window.request_redraw();
        self.state = Some(state);
        Ok(())
    }

    fn configure(&mut self, state: &WindowState) {
        let origin = state.content_origin();
        self.mouse.set_content_origin(origin);
        self.scene.configure(origin, state.content_size());
    }

    fn redraw(&mut self) -> DemoResult<()> {
        let Some(state) = self.state.as_mut() else {
            return Ok(());
        };
        let size = state.window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }
        let scale = state.scale();

        let mut buffer = state.surface.buffer_mut()?;
        {
            let mut painter =
                FramePainter::new(&mut buffer, size.width, size.height, scale, &mut state.raster);
            painter.clear(CLEAR_COLOR);
            self.scene.paint(&mut painter);
        }
        state.window.pre_present_notify();
        buffer.present()?;
        Ok(())
    }

    fn handle_window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        event: WindowEvent,
    ) -> DemoResult<()> {
        let mut needs_redraw = true;
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!(target: targets::DEMO, "close requested");
                event_loop.exit();
                needs_redraw = false;
            }
            WindowEvent::Resized(size) => {
                if let Some(mut state) = self.state.take() {
                    let result = state.resize_surface(size);
                    self.configure(&state);
                    self.state = Some(state);
                    result?;
                }
            }
            WindowEvent::Moved(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(state) = self.state.take() {
                    self.configure(&state);
                    self.state = Some(state);
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.keyboard.update_modifiers(modifiers.state());
                needs_redraw = false;
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let widget_event = self.keyboard.handle_key(
                    event.state,
                    &event.logical_key,
                    event.text.as_deref(),
                    event.repeat,
                );
                self.scene.key(widget_event);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let scale = self.state.as_ref().map_or(1.0, WindowState::scale) as f64;
                let moved = self.mouse.handle_cursor_moved(position.x / scale, position.y / scale);
                self.scene.mouse_move(moved);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                match self
                    .mouse
                    .handle_mouse_input(state, button, self.keyboard.modifiers())
                {
                    Some(press) => self.scene.mouse_press(press),
                    None => needs_redraw = false,
                }
            }
            WindowEvent::Focused(focused) => {
                self.scene.window_focus(focused);
            }
            WindowEvent::RedrawRequested => {
                self.redraw()?;
                needs_redraw = false;
            }
            _ => needs_redraw = false,
        }

        if needs_redraw {
            if let Some(state) = &self.state {
                state.window.request_redraw();
            }
        }
        Ok(())
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        if let Err(err) = self.create_window(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.state.as_ref().is_none_or(|state| state.window.id() != window_id) {
            return;
        }
        if let Err(err) = self.handle_window_event(event_loop, event) {
            self.fail(event_loop, err);
        }
    }
}

impl std::fmt::Debug for DemoApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoApp")
            .field("scene", &self.scene)
            .field("has_window", &self.state.is_some())
            .finish()
    }
}
