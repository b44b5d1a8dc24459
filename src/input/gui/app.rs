//! Main GUI application loop.

use crate::controllers::data::explorer_config::{ConfigError, ExplorerConfig};
use crate::controllers::interactive::{InteractiveController, ViewStatus};
use crate::input::gui::frame_rate::FrameRate;
use crate::input::gui::view_input::{PIXELS_PER_SCROLL_NOTCH, ViewInput};
use crate::presenters::pixels::PixelsPresenter;
use egui::Context;
use egui_winit::State as EguiWinitState;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, error, info};
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, Event, MouseScrollDelta, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::PhysicalKey,
    window::{Fullscreen, Window, WindowBuilder},
};

/// Control ticks per second.
const TICK_RATE: u32 = 60;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("could not create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("pixels surface failed: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("could not resize surface: {0}")]
    Surface(#[from] pixels::TextureError),
}

struct GuiApp {
    window: &'static Window,
    controller: InteractiveController,
    presenter: PixelsPresenter,
    input: ViewInput,
    frame_rate: FrameRate,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    next_tick: Instant,
    failure: Option<GuiError>,
}

impl GuiApp {
    fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        config: &ExplorerConfig,
    ) -> Result<Self, GuiError> {
        let controller = InteractiveController::new(config)?;
        let presenter = PixelsPresenter::new(window, config.width, config.height)?;
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Ok(Self {
            window,
            controller,
            presenter,
            input: ViewInput::default(),
            frame_rate: FrameRate::default(),
            egui_ctx,
            egui_state,
            next_tick: Instant::now(),
            failure: None,
        })
    }

    fn fail(&mut self, elwt: &EventLoopWindowTarget<()>, failure: GuiError) {
        error!(%failure, "shutting down");
        self.failure = Some(failure);
        elwt.exit();
    }

    fn handle_window_event(&mut self, event: &WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        let egui_consumed = self.egui_state.on_window_event(self.window, event).consumed;

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::RedrawRequested => self.redraw(elwt),
            WindowEvent::Resized(size) => {
                if let Err(failure) = self.presenter.resize_surface(size.width, size.height) {
                    self.fail(elwt, failure.into());
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
            }
            WindowEvent::Focused(false) => self.input.release_all(),
            WindowEvent::KeyboardInput { event, .. } => {
                // releases always pass so held keys cannot stick under egui
                if egui_consumed && event.state == ElementState::Pressed {
                    return;
                }
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    self.input
                        .handle_key_event(key_code, event.state, event.repeat);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if egui_consumed && *state == ElementState::Pressed {
                    return;
                }
                self.input.handle_mouse_button(*button, *state);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pixel = self
                    .presenter
                    .window_pos_to_frame_pixel((position.x as f32, position.y as f32));
                self.input.set_cursor(Some(pixel));
            }
            WindowEvent::CursorLeft { .. } => self.input.set_cursor(None),
            WindowEvent::MouseWheel { delta, .. } if !egui_consumed => {
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
                    MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_SCROLL_NOTCH,
                };
                self.input.handle_scroll(notches);
            }
            _ => {}
        }
    }

    fn tick(&mut self, elwt: &EventLoopWindowTarget<()>) {
        let snapshot = self.input.snapshot(self.egui_ctx.wants_keyboard_input());
        let outcome = self.controller.tick(&snapshot, &mut self.presenter);

        if outcome.quit {
            info!("quit requested");
            elwt.exit();
            return;
        }

        if outcome.toggle_fullscreen {
            let fullscreen = match self.window.fullscreen() {
                Some(_) => None,
                None => Some(Fullscreen::Borderless(None)),
            };
            debug!(fullscreen = fullscreen.is_some(), "toggling fullscreen");
            self.window.set_fullscreen(fullscreen);
        }

        self.window.request_redraw();
    }

    fn redraw(&mut self, elwt: &EventLoopWindowTarget<()>) {
        self.frame_rate.record_frame(Instant::now());

        let status = self.controller.status();
        let fps = self.frame_rate.fps();
        let raw_input = self.egui_state.take_egui_input(self.window);
        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            if status.debug_visible {
                show_debug_window(ctx, &status, fps);
            }
        });

        self.egui_state
            .handle_platform_output(self.window, egui_output.platform_output.clone());

        if let Err(failure) = self.presenter.render(egui_output, &self.egui_ctx) {
            self.fail(elwt, failure.into());
        }
    }

    fn about_to_wait(&mut self, elwt: &EventLoopWindowTarget<()>) {
        let now = Instant::now();
        if now >= self.next_tick {
            self.tick(elwt);
            self.next_tick = now + Duration::from_secs(1) / TICK_RATE;
        }
        elwt.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }
}

fn show_debug_window(ctx: &Context, status: &ViewStatus, fps: f64) {
    egui::Window::new("Debug")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!("FPS: {fps:.1}"));
            match status.cursor_location {
                Some(location) => {
                    ui.label(format!("Location: {:.6} {:+.6}i", location.real, location.imag))
                }
                None => ui.label("Location: -"),
            };
            ui.label(format!("Zoom: {:.3e} px/unit", status.zoom));
            ui.label(format!("Max iterations: {}", status.max_iterations));
            if let Some(render) = status.last_render {
                ui.label(format!("Last render: {:.1} ms", render.as_secs_f64() * 1000.0));
            }
        });
}

/// Opens the explorer window and runs until it is closed or Q is pressed.
pub fn run_gui(config: &ExplorerConfig) -> Result<(), GuiError> {
    config.validate()?;

    let event_loop = EventLoop::new()?;

    // pixels needs the window for 'static
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Explorer")
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut app = GuiApp::new(window, &event_loop, config)?;
    info!(width = config.width, height = config.height, "window open");

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => app.handle_window_event(event, elwt),
        Event::AboutToWait => app.about_to_wait(elwt),
        _ => {}
    })?;

    match app.failure {
        Some(failure) => Err(failure),
        None => Ok(()),
    }
}
