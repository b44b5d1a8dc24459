use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::direction::PanDirection;
use crate::core::navigation::settings::{NavigationSettings, NavigationSettingsError};
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use std::num::NonZeroU32;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationWarning {
    ZoomLimitReached,
    IterationFloorReached,
    IterationCeilingReached,
    /// The transition would leave the representable plane.
    RegionOutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationReport {
    pub changed: bool,
    pub warning: Option<NavigationWarning>,
}

impl NavigationReport {
    const CHANGED: Self = Self {
        changed: true,
        warning: None,
    };

    const fn refused(warning: NavigationWarning) -> Self {
        Self {
            changed: false,
            warning: Some(warning),
        }
    }
}

/// Owns the live view and applies interaction transitions to it.
///
/// The complex-plane bounds are the single source of truth; zoom is always
/// derived from them and the frame size. Every transition that changes the
/// view sets the dirty flag, and refused transitions leave both the view and
/// the flag untouched.
#[derive(Debug, Clone)]
pub struct ViewportController {
    defaults: Viewport,
    current: Viewport,
    pixel_rect: PixelRect,
    settings: NavigationSettings,
    dirty: bool,
}

impl ViewportController {
    /// Starts dirty, since no frame exists for the initial view yet.
    pub fn new(
        defaults: Viewport,
        pixel_rect: PixelRect,
        settings: NavigationSettings,
    ) -> Result<Self, NavigationSettingsError> {
        settings.validate()?;

        Ok(Self {
            defaults,
            current: defaults,
            pixel_rect,
            settings,
            dirty: true,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.current
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    /// Pixels per plane unit along the real axis.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.current.zoom(self.pixel_rect)
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Plane coordinate under a window pixel, for cursor-anchored zooms and
    /// the debug overlay.
    #[must_use]
    pub fn cursor_location(&self, cursor: Point) -> Complex {
        pixel_to_complex_coords(cursor, self.pixel_rect, &self.current)
    }

    pub fn zoom_in(&mut self) -> NavigationReport {
        let candidate = self
            .current
            .region()
            .scaled_about_center(self.settings.zoom_factor.recip());
        self.apply_zoom(candidate)
    }

    pub fn zoom_out(&mut self) -> NavigationReport {
        let candidate = self
            .current
            .region()
            .scaled_about_center(self.settings.zoom_factor);
        self.apply_zoom(candidate)
    }

    /// Zooms in by one step while keeping `anchor` at the same pixel.
    pub fn zoom_toward(&mut self, anchor: Complex) -> NavigationReport {
        let candidate = self
            .current
            .region()
            .interpolated_toward(anchor, self.settings.zoom_factor.recip());
        self.apply_zoom(candidate)
    }

    /// Zooms out by one step while keeping `anchor` at the same pixel.
    pub fn zoom_away_from(&mut self, anchor: Complex) -> NavigationReport {
        let candidate = self
            .current
            .region()
            .interpolated_toward(anchor, self.settings.zoom_factor);
        self.apply_zoom(candidate)
    }

    /// Shifts both bounds of one axis by `pan_factor / zoom` plane units.
    pub fn pan(&mut self, direction: PanDirection) -> NavigationReport {
        let (unit_real, unit_imag) = direction.unit();
        let real = unit_real * self.settings.pan_factor / self.current.zoom(self.pixel_rect);
        let imag = unit_imag * self.settings.pan_factor / self.current.zoom_imag(self.pixel_rect);

        let candidate = self.current.region().translated(real, imag);
        self.apply_region(candidate)
    }

    pub fn increase_max_iterations(&mut self) -> NavigationReport {
        let current = self.current.max_iterations();
        let next = current.saturating_add(self.settings.iteration_step);

        self.apply_max_iterations(current, next, NavigationWarning::IterationCeilingReached)
    }

    /// Lowers the cap by one step, never below the step itself.
    pub fn decrease_max_iterations(&mut self) -> NavigationReport {
        let step = self.settings.iteration_step;
        let current = self.current.max_iterations();
        let next = if current > step {
            (current - step).max(step)
        } else {
            current
        };

        self.apply_max_iterations(current, next, NavigationWarning::IterationFloorReached)
    }

    /// Restores the startup view. Always marks the view dirty.
    pub fn reset(&mut self) -> NavigationReport {
        self.current = self.defaults;
        self.dirty = true;
        NavigationReport::CHANGED
    }

    fn apply_zoom(&mut self, candidate: Result<ComplexRect, ComplexRectError>) -> NavigationReport {
        if let Ok(region) = candidate {
            let extent = region.width();
            if extent < self.settings.min_region_extent || extent > self.settings.max_region_extent {
                trace!(extent, "zoom refused at region extent limit");
                return NavigationReport::refused(NavigationWarning::ZoomLimitReached);
            }
        }

        self.apply_region(candidate)
    }

    fn apply_region(&mut self, candidate: Result<ComplexRect, ComplexRectError>) -> NavigationReport {
        match candidate {
            Ok(region) => {
                self.current.set_region(region);
                self.dirty = true;
                NavigationReport::CHANGED
            }
            Err(error) => {
                trace!(%error, "view transition refused");
                NavigationReport::refused(NavigationWarning::RegionOutOfRange)
            }
        }
    }

    fn apply_max_iterations(
        &mut self,
        current: u32,
        next: u32,
        warning: NavigationWarning,
    ) -> NavigationReport {
        let Some(next) = NonZeroU32::new(next).filter(|next| next.get() != current) else {
            trace!(max_iterations = current, ?warning, "iteration change refused");
            return NavigationReport::refused(warning);
        };

        self.current.set_max_iterations(next);
        self.dirty = true;
        NavigationReport::CHANGED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn controller() -> ViewportController {
        controller_with(NavigationSettings::default())
    }

    fn controller_with(settings: NavigationSettings) -> ViewportController {
        let region = ComplexRect::from_bounds(-2.0, 1.0, -1.0, 1.8).unwrap();
        let defaults = Viewport::new(region, 256).unwrap();
        let pixel_rect = PixelRect::new(600, 400).unwrap();

        let mut controller = ViewportController::new(defaults, pixel_rect, settings).unwrap();
        controller.clear_dirty();
        controller
    }

    #[test]
    fn new_controller_starts_dirty() {
        let region = ComplexRect::from_bounds(-2.0, 1.0, -1.0, 1.8).unwrap();
        let controller = ViewportController::new(
            Viewport::new(region, 256).unwrap(),
            PixelRect::new(600, 400).unwrap(),
            NavigationSettings::default(),
        )
        .unwrap();

        assert!(controller.is_dirty());
        assert_eq!(controller.zoom(), 200.0);
    }

    #[test]
    fn invalid_settings_rejected() {
        let region = ComplexRect::from_bounds(-2.0, 1.0, -1.0, 1.8).unwrap();
        let result = ViewportController::new(
            Viewport::new(region, 256).unwrap(),
            PixelRect::new(600, 400).unwrap(),
            NavigationSettings {
                iteration_step: 0,
                ..NavigationSettings::default()
            },
        );

        assert!(matches!(
            result,
            Err(NavigationSettingsError::ZeroIterationStep)
        ));
    }

    #[test]
    fn zoom_in_multiplies_zoom_and_keeps_center() {
        let mut controller = controller();
        let center = controller.viewport().region().center();

        let report = controller.zoom_in();

        assert!(report.changed);
        assert!(controller.is_dirty());
        assert_relative_eq!(controller.zoom(), 220.0, max_relative = 1e-12);
        let new_center = controller.viewport().region().center();
        assert_relative_eq!(new_center.real, center.real, epsilon = 1e-12);
        assert_relative_eq!(new_center.imag, center.imag, epsilon = 1e-12);
    }

    #[test]
    fn zoom_in_then_out_restores_zoom() {
        let mut controller = controller();
        let original = controller.viewport();

        controller.zoom_in();
        controller.zoom_out();

        assert_relative_eq!(controller.zoom(), 200.0, max_relative = 1e-12);
        assert_relative_eq!(controller.viewport().r_min(), original.r_min(), epsilon = 1e-12);
        assert_relative_eq!(controller.viewport().i_max(), original.i_max(), epsilon = 1e-12);
    }

    #[test]
    fn pan_shifts_both_bounds_by_pan_distance() {
        let mut controller = controller();
        let before = controller.viewport();

        controller.pan(PanDirection::Right);
        let after = controller.viewport();

        // pan_factor 10 at 200 px/unit
        assert_relative_eq!(after.r_min() - before.r_min(), 0.05, epsilon = 1e-12);
        assert_relative_eq!(after.r_max() - before.r_max(), 0.05, epsilon = 1e-12);
        assert_eq!(after.i_min(), before.i_min());
        assert_eq!(after.i_max(), before.i_max());
        assert_relative_eq!(controller.zoom(), 200.0, max_relative = 1e-12);
        assert!(controller.is_dirty());
    }

    #[test]
    fn pan_up_decreases_imaginary_bounds() {
        let mut controller = controller();
        let before = controller.viewport();

        controller.pan(PanDirection::Up);
        let after = controller.viewport();

        assert!(after.i_min() < before.i_min());
        assert!(after.i_max() < before.i_max());
        assert_relative_eq!(
            after.i_max() - after.i_min(),
            before.i_max() - before.i_min(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn pan_distance_shrinks_as_zoom_grows() {
        let mut controller = controller();
        controller.zoom_in();
        let before = controller.viewport();

        controller.pan(PanDirection::Left);

        let moved = before.r_min() - controller.viewport().r_min();
        assert_relative_eq!(moved, 10.0 / 220.0, max_relative = 1e-9);
    }

    #[test]
    fn zoom_toward_keeps_anchor_under_same_pixel() {
        let mut controller = controller();
        let cursor = Point { x: 150, y: 300 };
        let anchor = controller.cursor_location(cursor);

        controller.zoom_toward(anchor);

        let after = controller.cursor_location(cursor);
        assert_relative_eq!(after.real, anchor.real, epsilon = 1e-12);
        assert_relative_eq!(after.imag, anchor.imag, epsilon = 1e-12);
        assert_relative_eq!(controller.zoom(), 220.0, max_relative = 1e-12);
    }

    #[test]
    fn zoom_away_from_undoes_zoom_toward() {
        let mut controller = controller();
        let original = controller.viewport();
        let anchor = controller.cursor_location(Point { x: 420, y: 37 });

        controller.zoom_toward(anchor);
        controller.zoom_away_from(anchor);

        let after = controller.viewport();
        assert_relative_eq!(after.r_min(), original.r_min(), epsilon = 1e-12);
        assert_relative_eq!(after.r_max(), original.r_max(), epsilon = 1e-12);
        assert_relative_eq!(after.i_min(), original.i_min(), epsilon = 1e-12);
        assert_relative_eq!(after.i_max(), original.i_max(), epsilon = 1e-12);
    }

    #[test]
    fn zoom_in_refused_at_minimum_extent() {
        let mut controller = controller_with(NavigationSettings {
            min_region_extent: 2.9,
            ..NavigationSettings::default()
        });
        let before = controller.viewport();

        let report = controller.zoom_in();

        assert_eq!(
            report,
            NavigationReport {
                changed: false,
                warning: Some(NavigationWarning::ZoomLimitReached)
            }
        );
        assert_eq!(controller.viewport(), before);
        assert!(!controller.is_dirty());
    }

    #[test]
    fn zoom_out_refused_at_maximum_extent() {
        let mut controller = controller_with(NavigationSettings {
            max_region_extent: 3.1,
            ..NavigationSettings::default()
        });

        let report = controller.zoom_out();

        assert!(!report.changed);
        assert_eq!(report.warning, Some(NavigationWarning::ZoomLimitReached));
        assert!(!controller.is_dirty());
    }

    #[test]
    fn increase_iterations_adds_step() {
        let mut controller = controller();

        controller.increase_max_iterations();

        assert_eq!(controller.viewport().max_iterations(), 261);
        assert!(controller.is_dirty());
    }

    #[test]
    fn decrease_iterations_floors_at_step() {
        let mut controller = controller();

        for _ in 0..100 {
            controller.decrease_max_iterations();
        }

        assert_eq!(controller.viewport().max_iterations(), 5);

        controller.clear_dirty();
        let report = controller.decrease_max_iterations();

        assert_eq!(report.warning, Some(NavigationWarning::IterationFloorReached));
        assert_eq!(controller.viewport().max_iterations(), 5);
        assert!(!controller.is_dirty());
    }

    #[test]
    fn decrease_iterations_clamps_partial_step_to_floor() {
        let region = ComplexRect::from_bounds(-2.0, 1.0, -1.0, 1.8).unwrap();
        let mut controller = ViewportController::new(
            Viewport::new(region, 7).unwrap(),
            PixelRect::new(600, 400).unwrap(),
            NavigationSettings::default(),
        )
        .unwrap();

        controller.decrease_max_iterations();

        assert_eq!(controller.viewport().max_iterations(), 5);
    }

    #[test]
    fn increase_iterations_saturates() {
        let region = ComplexRect::from_bounds(-2.0, 1.0, -1.0, 1.8).unwrap();
        let mut controller = ViewportController::new(
            Viewport::new(region, u32::MAX).unwrap(),
            PixelRect::new(600, 400).unwrap(),
            NavigationSettings::default(),
        )
        .unwrap();
        controller.clear_dirty();

        let report = controller.increase_max_iterations();

        assert_eq!(report.warning, Some(NavigationWarning::IterationCeilingReached));
        assert_eq!(controller.viewport().max_iterations(), u32::MAX);
        assert!(!controller.is_dirty());
    }

    #[test]
    fn reset_restores_exact_defaults_after_any_sequence() {
        let mut controller = controller();
        let defaults = controller.viewport();

        controller.zoom_in();
        controller.pan(PanDirection::Down);
        controller.zoom_toward(Complex {
            real: -0.7,
            imag: 0.2,
        });
        controller.increase_max_iterations();
        controller.pan(PanDirection::Left);
        controller.zoom_out();
        controller.decrease_max_iterations();
        controller.decrease_max_iterations();
        controller.clear_dirty();

        controller.reset();

        assert_eq!(controller.viewport(), defaults);
        assert!(controller.is_dirty());

        controller.reset();
        assert_eq!(controller.viewport(), defaults);
    }

    #[test]
    fn cursor_location_maps_through_current_view() {
        let controller = controller();

        let origin = controller.cursor_location(Point { x: 0, y: 0 });

        assert_eq!(origin.real, -2.0);
        assert_eq!(origin.imag, -1.0);
    }
}
