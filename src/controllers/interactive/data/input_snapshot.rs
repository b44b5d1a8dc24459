use crate::core::data::point::Point;

/// Input state sampled once per control tick.
///
/// Held fields are level-triggered and act on every tick they are set.
/// `*_edge` fields fire once per press and must be cleared by the producer
/// after the snapshot is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    /// Cursor position in frame pixels, if the pointer is over the window.
    pub cursor: Option<Point>,
    pub zoom_in_held: bool,
    pub zoom_out_held: bool,
    pub pan_left: bool,
    pub pan_right: bool,
    pub pan_up: bool,
    pub pan_down: bool,
    pub iterations_up: bool,
    pub iterations_down: bool,
    /// Whole scroll-wheel notches since the last tick; positive zooms in.
    pub scroll_steps: i32,
    pub reset_edge: bool,
    pub quit_edge: bool,
    pub fullscreen_toggle_edge: bool,
    pub debug_toggle_edge: bool,
}

#[cfg(test)]
mod tests {
    use super::InputSnapshot;

    #[test]
    fn default_snapshot_is_idle() {
        let snapshot = InputSnapshot::default();

        assert_eq!(snapshot.cursor, None);
        assert!(!snapshot.zoom_in_held);
        assert!(!snapshot.zoom_out_held);
        assert!(!snapshot.pan_left && !snapshot.pan_right);
        assert!(!snapshot.pan_up && !snapshot.pan_down);
        assert!(!snapshot.iterations_up && !snapshot.iterations_down);
        assert_eq!(snapshot.scroll_steps, 0);
        assert!(!snapshot.reset_edge);
        assert!(!snapshot.quit_edge);
        assert!(!snapshot.fullscreen_toggle_edge);
        assert!(!snapshot.debug_toggle_edge);
    }
}
