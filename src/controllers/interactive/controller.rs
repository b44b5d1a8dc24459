use crate::controllers::data::explorer_config::{
    ConfigError, ExplorerConfig, RenderSession, ScrollZoomAnchor,
};
use crate::controllers::interactive::data::input_snapshot::InputSnapshot;
use crate::controllers::interactive::data::view_status::ViewStatus;
use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::core::data::point::Point;
use crate::core::navigation::{PanDirection, ViewportController};
use tracing::debug;

/// Most scroll notches applied in a single tick.
const MAX_SCROLL_STEPS_PER_TICK: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub quit: bool,
    pub toggle_fullscreen: bool,
    /// A new frame was rendered and handed to the presenter.
    pub rendered: bool,
}

/// Drives the explorer one control tick at a time.
///
/// Input handling and rendering run in the same call, so the viewport never
/// changes while a frame is being computed.
#[derive(Debug)]
pub struct InteractiveController {
    session: RenderSession,
    scroll_zoom: ScrollZoomAnchor,
    cursor: Option<Point>,
    debug_visible: bool,
}

impl InteractiveController {
    pub fn new(config: &ExplorerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            session: config.build_session()?,
            scroll_zoom: config.scroll_zoom,
            cursor: None,
            debug_visible: true,
        })
    }

    #[must_use]
    pub fn navigation(&self) -> &ViewportController {
        &self.session.navigation
    }

    pub fn tick<P>(&mut self, input: &InputSnapshot, presenter: &mut P) -> TickOutcome
    where
        P: FramePresenterPort + ?Sized,
    {
        if input.quit_edge {
            debug!("quit requested");
            return TickOutcome {
                quit: true,
                ..TickOutcome::default()
            };
        }

        self.cursor = input.cursor;
        self.apply_input(input);

        let refreshed = self.session.renderer.refresh(&mut self.session.navigation);
        if refreshed.rendered {
            presenter.present(refreshed.frame);
        }

        TickOutcome {
            quit: false,
            toggle_fullscreen: input.fullscreen_toggle_edge,
            rendered: refreshed.rendered,
        }
    }

    #[must_use]
    pub fn status(&self) -> ViewStatus {
        let navigation = &self.session.navigation;
        let viewport = navigation.viewport();

        ViewStatus {
            cursor_location: self.cursor.map(|cursor| navigation.cursor_location(cursor)),
            zoom: navigation.zoom(),
            max_iterations: viewport.max_iterations(),
            last_render: self.session.renderer.last_render_duration(),
            debug_visible: self.debug_visible,
        }
    }

    fn apply_input(&mut self, input: &InputSnapshot) {
        if input.reset_edge {
            self.session.navigation.reset();
        }

        if input.debug_toggle_edge {
            self.debug_visible = !self.debug_visible;
        }

        let navigation = &mut self.session.navigation;

        if input.zoom_in_held {
            match self.cursor {
                Some(cursor) => {
                    let anchor = navigation.cursor_location(cursor);
                    navigation.zoom_toward(anchor);
                }
                None => {
                    navigation.zoom_in();
                }
            }
        }

        if input.zoom_out_held {
            navigation.zoom_out();
        }

        for (held, direction) in [
            (input.pan_left, PanDirection::Left),
            (input.pan_right, PanDirection::Right),
            (input.pan_up, PanDirection::Up),
            (input.pan_down, PanDirection::Down),
        ] {
            if held {
                navigation.pan(direction);
            }
        }

        if input.iterations_up {
            navigation.increase_max_iterations();
        }

        if input.iterations_down {
            navigation.decrease_max_iterations();
        }

        self.apply_scroll(input.scroll_steps);
    }

    fn apply_scroll(&mut self, steps: i32) {
        let steps = steps.clamp(-MAX_SCROLL_STEPS_PER_TICK, MAX_SCROLL_STEPS_PER_TICK);
        let navigation = &mut self.session.navigation;

        let anchor = match (self.scroll_zoom, self.cursor) {
            (ScrollZoomAnchor::Cursor, Some(cursor)) => Some(navigation.cursor_location(cursor)),
            _ => None,
        };

        for _ in 0..steps.unsigned_abs() {
            let report = match (steps > 0, anchor) {
                (true, Some(anchor)) => navigation.zoom_toward(anchor),
                (true, None) => navigation.zoom_in(),
                (false, Some(anchor)) => navigation.zoom_away_from(anchor),
                (false, None) => navigation.zoom_out(),
            };

            if !report.changed {
                break;
            }
        }
    }
}
