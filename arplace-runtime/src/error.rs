use core::fmt;
use std::error::Error;

use arplace_core::ObjectHandle;

use crate::PinchKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLoadError {
    NotFound(String),
}

impl fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "Renderable asset '{}' not found", name),
        }
    }
}

impl Error for AssetLoadError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    StaleHandle(ObjectHandle),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleHandle(handle) => {
                write!(f, "Object {} is no longer part of the scene", handle)
            }
        }
    }
}

impl Error for SceneError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    NoSurfaceFound,
    AssetLoad(AssetLoadError),
    Scene(SceneError),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSurfaceFound => write!(f, "No horizontal surface under tap location"),
            Self::AssetLoad(e) => write!(f, "Asset load failed: {}", e),
            Self::Scene(e) => write!(f, "Scene rejected new object: {}", e),
        }
    }
}

impl Error for PlacementError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoSurfaceFound => None,
            Self::AssetLoad(e) => Some(e),
            Self::Scene(e) => Some(e),
        }
    }
}

impl From<AssetLoadError> for PlacementError {
    fn from(value: AssetLoadError) -> Self {
        Self::AssetLoad(value)
    }
}

impl From<SceneError> for PlacementError {
    fn from(value: SceneError) -> Self {
        Self::Scene(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureError {
    NoSelection,
    StrayGestureEvent(PinchKind),
    InvalidScaleFactor(f32),
    StaleSelection(ObjectHandle),
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSelection => write!(f, "No object selected"),
            Self::StrayGestureEvent(kind) => {
                write!(f, "Pinch {:?} received without an active session", kind)
            }
            Self::InvalidScaleFactor(factor) => {
                write!(f, "Pinch factor {} is not a positive number", factor)
            }
            Self::StaleSelection(handle) => {
                write!(f, "Scaled object {} was removed from the scene", handle)
            }
        }
    }
}

impl Error for GestureError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    InvalidScaleBounds,
    EmptyAssetName,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScaleBounds => {
                write!(f, "Scale bounds must be finite with 0 < min <= max")
            }
            Self::EmptyAssetName => write!(f, "Asset name must not be empty"),
        }
    }
}

impl Error for ConfigError {}
