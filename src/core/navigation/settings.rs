use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NavigationSettingsError {
    #[error("zoom factor must be finite and greater than 1, got {0}")]
    ZoomFactor(f64),

    #[error("pan factor must be finite and positive, got {0}")]
    PanFactor(f64),

    #[error("iteration step must be greater than zero")]
    ZeroIterationStep,

    #[error("region extent limits must satisfy 0 < min < max, got min {min} max {max}")]
    RegionExtent { min: f64, max: f64 },
}

/// Step sizes and limits for view transitions. Fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationSettings {
    /// Multiplier applied to pixels-per-unit by one zoom step.
    pub zoom_factor: f64,
    /// Pan distance in pixels; divided by the current zoom to get plane units.
    pub pan_factor: f64,
    pub iteration_step: u32,
    /// Smallest real-axis extent a zoom-in may produce.
    pub min_region_extent: f64,
    /// Largest real-axis extent a zoom-out may produce.
    pub max_region_extent: f64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            zoom_factor: 1.1,
            pan_factor: 10.0,
            iteration_step: 5,
            min_region_extent: 1e-13,
            max_region_extent: 1e3,
        }
    }
}

impl NavigationSettings {
    pub fn validate(&self) -> Result<(), NavigationSettingsError> {
        if !self.zoom_factor.is_finite() || self.zoom_factor <= 1.0 {
            return Err(NavigationSettingsError::ZoomFactor(self.zoom_factor));
        }

        if !self.pan_factor.is_finite() || self.pan_factor <= 0.0 {
            return Err(NavigationSettingsError::PanFactor(self.pan_factor));
        }

        if self.iteration_step == 0 {
            return Err(NavigationSettingsError::ZeroIterationStep);
        }

        let (min, max) = (self.min_region_extent, self.max_region_extent);
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min >= max {
            return Err(NavigationSettingsError::RegionExtent { min, max });
        }

        Ok(())
    }
}
