use arplace_core::{ScaleBounds, SurfaceFilter};

use crate::ConfigError;

pub const DEFAULT_ASSET_NAME: &str = "robot";

/// Per-session settings. Built once when the AR session starts.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    asset_name: String,
    bounds: ScaleBounds,
    surface_filter: SurfaceFilter,
    enable_collision: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            asset_name: DEFAULT_ASSET_NAME.to_owned(),
            bounds: ScaleBounds::default(),
            surface_filter: SurfaceFilter::default(),
            enable_collision: true,
        }
    }
}

impl SessionConfig {
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }

    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }

    pub fn bounds(&self) -> &ScaleBounds {
        &self.bounds
    }

    pub fn surface_filter(&self) -> &SurfaceFilter {
        &self.surface_filter
    }

    pub fn enable_collision(&self) -> bool {
        self.enable_collision
    }
}

#[derive(Debug, Clone)]
pub struct SessionConfigBuilder {
    asset_name: String,
    min_scale: f32,
    max_scale: f32,
    surface_filter: SurfaceFilter,
    enable_collision: bool,
}

impl Default for SessionConfigBuilder {
    fn default() -> Self {
        let defaults = SessionConfig::default();
        Self {
            asset_name: defaults.asset_name,
            min_scale: defaults.bounds.min(),
            max_scale: defaults.bounds.max(),
            surface_filter: defaults.surface_filter,
            enable_collision: defaults.enable_collision,
        }
    }
}

impl SessionConfigBuilder {
    pub fn with_asset_name(mut self, asset_name: &str) -> Self {
        self.asset_name = asset_name.to_owned();
        self
    }

    pub fn with_scale_range(mut self, min_scale: f32, max_scale: f32) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    pub fn with_surface_filter(mut self, surface_filter: SurfaceFilter) -> Self {
        self.surface_filter = surface_filter;
        self
    }

    pub fn with_collision(mut self, enabled: bool) -> Self {
        self.enable_collision = enabled;
        self
    }

    pub fn build(self) -> Result<SessionConfig, ConfigError> {
        let bounds = ScaleBounds::new(self.min_scale, self.max_scale)
            .ok_or(ConfigError::InvalidScaleBounds)?;
        if self.asset_name.trim().is_empty() {
            return Err(ConfigError::EmptyAssetName);
        }

        Ok(SessionConfig {
            asset_name: self.asset_name,
            bounds,
            surface_filter: self.surface_filter,
            enable_collision: self.enable_collision,
        })
    }
}

#[cfg(test)]
mod tests {
    use arplace_core::{SurfaceAlignment, SurfaceTarget};

    use super::*;

    #[test]
    fn default_config_matches_builder_defaults() {
        let built = SessionConfig::builder().build().unwrap();
        assert_eq!(built, SessionConfig::default());
        assert_eq!(built.asset_name(), "robot");
        assert_eq!(built.bounds().min(), 0.01);
        assert_eq!(built.bounds().max(), 0.02);
        assert_eq!(built.surface_filter().alignment, SurfaceAlignment::Horizontal);
        assert_eq!(built.surface_filter().target, SurfaceTarget::EstimatedPlane);
        assert!(built.enable_collision());
    }

    #[test]
    fn invalid_scale_range_is_rejected() {
        let result = SessionConfig::builder().with_scale_range(0.5, 0.1).build();
        assert_eq!(result.unwrap_err(), ConfigError::InvalidScaleBounds);

        let result = SessionConfig::builder().with_scale_range(0.0, 0.1).build();
        assert_eq!(result.unwrap_err(), ConfigError::InvalidScaleBounds);
    }

    #[test]
    fn blank_asset_name_is_rejected() {
        let result = SessionConfig::builder().with_asset_name("  ").build();
        assert_eq!(result.unwrap_err(), ConfigError::EmptyAssetName);
    }
}
