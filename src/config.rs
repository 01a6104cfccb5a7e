use serde::{Deserialize, Serialize};

use crate::error::{Result, ZoomError};
use crate::model::Point;

pub const DEFAULT_INVERSE_SPEED: f64 = 15.0;
pub const DEFAULT_ACCURACY: f64 = 3.0;
pub const DEFAULT_POINTER_THRESHOLD: f64 = 15.0;
/// Below this the smoothing step overshoots the target.
pub const MIN_INVERSE_SPEED: f64 = 1.0;
/// Finer thresholds are below what the smoothing step can resolve at pixel offsets.
pub const MIN_ACCURACY: f64 = 0.01;

/// How the animated position is written to the content element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementMethod {
    /// `transform: translate3d(x, y, 0)`, keeping any other transform functions.
    #[default]
    #[serde(rename = "translate3d")]
    Translate3d,
    /// `left` / `top` offsets.
    #[serde(rename = "lefttop")]
    LeftTop,
    /// Anything else; applying it does nothing.
    #[serde(other)]
    Unsupported,
}

/// Options recognised when building a zoom widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoomConfig {
    pub margin_x: f64,
    pub margin_y: f64,
    pub inverse_animation_speed: f64,
    pub animation_accuracy: f64,
    pub zoomed_image_default_x: f64,
    pub zoomed_image_default_y: f64,
    pub center_zoomed_image: bool,
    pub movement_method: MovementMethod,
    pub pointer_threshold: f64,
    /// Extra CSS selectors whose matches also open the zoom.
    pub triggers: Vec<String>,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            margin_x: 0.0,
            margin_y: 0.0,
            inverse_animation_speed: DEFAULT_INVERSE_SPEED,
            animation_accuracy: DEFAULT_ACCURACY,
            zoomed_image_default_x: 0.0,
            zoomed_image_default_y: 0.0,
            center_zoomed_image: true,
            movement_method: MovementMethod::default(),
            pointer_threshold: DEFAULT_POINTER_THRESHOLD,
            triggers: Vec::new(),
        }
    }
}

impl ZoomConfig {
    /// Parses and validates a JSON options object. Missing keys take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let cfg: ZoomConfig = serde_json::from_str(raw)?;
        cfg.validated()
    }

    /// Checks every numeric option, clamping a too-small inverse speed up to
    /// [`MIN_INVERSE_SPEED`] and a too-small accuracy up to [`MIN_ACCURACY`].
    pub fn validated(mut self) -> Result<Self> {
        for (name, value) in [
            ("marginX", self.margin_x),
            ("marginY", self.margin_y),
            ("zoomedImageDefaultX", self.zoomed_image_default_x),
            ("zoomedImageDefaultY", self.zoomed_image_default_y),
        ] {
            finite(name, value)?;
        }
        finite("pointerThreshold", self.pointer_threshold)?;
        if self.pointer_threshold < 0.0 {
            return Err(ZoomError::InvalidDimension {
                name: "pointerThreshold",
                value: self.pointer_threshold,
            });
        }
        self.inverse_animation_speed = checked_inverse_speed(self.inverse_animation_speed)?;
        self.animation_accuracy = checked_accuracy(self.animation_accuracy)?;
        if let Some(blank) = self.triggers.iter().find(|s| s.trim().is_empty()) {
            return Err(ZoomError::InvalidTrigger(blank.clone()));
        }
        Ok(self)
    }

    pub fn animator(&self) -> AnimatorConfig {
        AnimatorConfig {
            inverse_speed: self.inverse_animation_speed,
            accuracy: self.animation_accuracy,
            ..AnimatorConfig::default()
        }
    }

    pub fn mapper(&self) -> MapperConfig {
        MapperConfig {
            margin_x: self.margin_x,
            margin_y: self.margin_y,
            default_offset: Point::new(self.zoomed_image_default_x, self.zoomed_image_default_y),
            center_zoomed_image: self.center_zoomed_image,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorConfig {
    pub inverse_speed: f64,
    pub accuracy: f64,
    pub start: Point,
    pub target: Point,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            inverse_speed: DEFAULT_INVERSE_SPEED,
            accuracy: DEFAULT_ACCURACY,
            start: Point::ZERO,
            target: Point::ZERO,
        }
    }
}

impl AnimatorConfig {
    pub fn validated(mut self) -> Result<Self> {
        self.inverse_speed = checked_inverse_speed(self.inverse_speed)?;
        self.accuracy = checked_accuracy(self.accuracy)?;
        finite("start.x", self.start.x)?;
        finite("start.y", self.start.y)?;
        finite("target.x", self.target.x)?;
        finite("target.y", self.target.y)?;
        Ok(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapperConfig {
    pub margin_x: f64,
    pub margin_y: f64,
    /// Parked offset used when content fits and centering is off.
    pub default_offset: Point,
    pub center_zoomed_image: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        ZoomConfig::default().mapper()
    }
}

fn finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ZoomError::InvalidDimension { name, value })
    }
}

fn checked_inverse_speed(value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ZoomError::InvalidInverseSpeed(value));
    }
    if value < MIN_INVERSE_SPEED {
        log::warn!(
            "inverse animation speed {} would overshoot, clamping to {}",
            value,
            MIN_INVERSE_SPEED
        );
        return Ok(MIN_INVERSE_SPEED);
    }
    Ok(value)
}

fn checked_accuracy(value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ZoomError::InvalidAccuracy(value));
    }
    if value < MIN_ACCURACY {
        log::warn!(
            "animation accuracy {} is finer than the step can resolve, clamping to {}",
            value,
            MIN_ACCURACY
        );
        return Ok(MIN_ACCURACY);
    }
    Ok(value)
}
