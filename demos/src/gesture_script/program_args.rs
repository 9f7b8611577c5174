use arplace::{
    core::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE},
    runtime::DEFAULT_ASSET_NAME,
};

use super::Step;

#[derive(Clone, clap::Args)]
pub struct ScriptOptions {
    /// Steps to replay in order: tap:X,Y | begin | change:FACTOR | end | cancel
    #[arg(required = true)]
    pub steps: Vec<Step>,
    /// Name of the renderable asset placed on tap
    #[arg(long, default_value = DEFAULT_ASSET_NAME)]
    pub asset: String,
    #[arg(long, default_value_t = DEFAULT_MIN_SCALE)]
    pub min_scale: f32,
    #[arg(long, default_value_t = DEFAULT_MAX_SCALE)]
    pub max_scale: f32,
    #[command(flatten)]
    pub surface: SurfaceOptions,
    #[command(flatten)]
    pub view: ViewOptions,
    /// Leave the asset out of the catalog so every placement fails to load
    #[arg(long, default_value_t = false)]
    pub missing_asset: bool,
}

#[derive(Clone, clap::Args)]
pub struct SurfaceOptions {
    /// World height of the detected floor plane
    #[arg(long, default_value_t = -1.4, allow_hyphen_values = true)]
    pub surface_height: f32,
    /// Report the floor as an estimated plane
    #[arg(long, default_value_t = false)]
    pub estimated: bool,
    /// Run without any detected surface
    #[arg(long, default_value_t = false, conflicts_with = "surface_height")]
    pub no_surface: bool,
}

#[derive(Clone, clap::Args)]
pub struct ViewOptions {
    /// Width of the view in points
    #[arg(long, default_value_t = 1170.0, value_parser = parse_extent)]
    pub width: f32,
    /// Height of the view in points
    #[arg(long, default_value_t = 2532.0, value_parser = parse_extent)]
    pub height: f32,
}

fn parse_extent(s: &str) -> Result<f32, String> {
    let extent: f32 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if extent.is_finite() && extent > 0.0 {
        Ok(extent)
    } else {
        Err(format!("view extent must be positive, got {}", extent))
    }
}
