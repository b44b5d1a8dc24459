use crate::controllers::interactive::InputSnapshot;
use crate::core::data::point::Point;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Pixel-delta scroll (touchpads) counted as one wheel notch.
pub const PIXELS_PER_SCROLL_NOTCH: f64 = 50.0;

/// Accumulates window input between control ticks.
///
/// Keys and buttons are tracked as held state. One-shot actions latch until
/// the next [`ViewInput::snapshot`]. Scrolling accumulates fractional notches
/// and only whole notches are handed out, the remainder carries over.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ViewInput {
    cursor: Option<Point>,
    left_button_held: bool,
    right_button_held: bool,
    up_held: bool,
    down_held: bool,
    left_held: bool,
    right_held: bool,
    equals_held: bool,
    minus_held: bool,
    scroll_notches: f64,
    reset_pending: bool,
    quit_pending: bool,
    fullscreen_pending: bool,
    debug_pending: bool,
}

impl ViewInput {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) {
        let pressed = state == ElementState::Pressed;
        let fresh_press = pressed && !repeat;

        match key_code {
            KeyCode::ArrowUp => self.up_held = pressed,
            KeyCode::ArrowDown => self.down_held = pressed,
            KeyCode::ArrowLeft => self.left_held = pressed,
            KeyCode::ArrowRight => self.right_held = pressed,
            KeyCode::Equal => self.equals_held = pressed,
            KeyCode::Minus => self.minus_held = pressed,
            KeyCode::Space if fresh_press => self.reset_pending = true,
            KeyCode::KeyQ if fresh_press => self.quit_pending = true,
            KeyCode::Enter if fresh_press => self.fullscreen_pending = true,
            KeyCode::KeyD if fresh_press => self.debug_pending = true,
            _ => {}
        }
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match button {
            MouseButton::Left => self.left_button_held = pressed,
            MouseButton::Right => self.right_button_held = pressed,
            _ => {}
        }
    }

    pub fn set_cursor(&mut self, cursor: Option<Point>) {
        self.cursor = cursor;
    }

    /// Adds wheel movement in notches; positive scrolls away from the user
    /// and zooms in.
    pub fn handle_scroll(&mut self, notches: f64) {
        if notches.is_finite() {
            self.scroll_notches += notches;
        }
    }

    /// Takes the input for one tick and clears the latched actions.
    ///
    /// While `suppressed` (an egui widget owns the keyboard) only the cursor
    /// is reported and pending actions are dropped.
    pub fn snapshot(&mut self, suppressed: bool) -> InputSnapshot {
        if suppressed {
            self.clear_pending();
            self.scroll_notches = 0.0;
            return InputSnapshot {
                cursor: self.cursor,
                ..InputSnapshot::default()
            };
        }

        let whole_notches = self.scroll_notches.trunc();
        self.scroll_notches -= whole_notches;

        let snapshot = InputSnapshot {
            cursor: self.cursor,
            zoom_in_held: self.left_button_held,
            zoom_out_held: self.right_button_held,
            pan_left: self.left_held,
            pan_right: self.right_held,
            pan_up: self.up_held,
            pan_down: self.down_held,
            iterations_up: self.equals_held,
            iterations_down: self.minus_held,
            scroll_steps: whole_notches.clamp(i32::MIN as f64, i32::MAX as f64) as i32,
            reset_edge: self.reset_pending,
            quit_edge: self.quit_pending,
            fullscreen_toggle_edge: self.fullscreen_pending,
            debug_toggle_edge: self.debug_pending,
        };

        self.clear_pending();
        snapshot
    }

    /// Forgets held keys and buttons, used when the window loses focus and
    /// release events may never arrive.
    pub fn release_all(&mut self) {
        *self = Self {
            cursor: self.cursor,
            ..Self::default()
        };
    }

    fn clear_pending(&mut self) {
        self.reset_pending = false;
        self.quit_pending = false;
        self.fullscreen_pending = false;
        self.debug_pending = false;
    }
}
