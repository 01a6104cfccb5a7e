//! Lightbox zoom: a magnified image panned inside a fixed viewport, following the
//! pointer with eased motion.
//!
//! The core ([`mapper`], [`animation`], [`movement`], [`zoom`]) has no browser
//! dependency; the host supplies measurement, style writes and frame scheduling through
//! traits. [`web`] and [`components`] provide those for the browser.

pub mod animation;
pub mod components;
pub mod config;
pub mod error;
pub mod mapper;
pub mod model;
pub mod movement;
pub mod state;
pub mod transform;
pub mod util;
pub mod web;
pub mod zoom;

#[doc(hidden)]
pub mod testing;

pub use animation::{Animator, FrameScheduler, ImmediateAnimator, SmoothedAnimator};
pub use config::{AnimatorConfig, MapperConfig, MovementMethod, ZoomConfig};
pub use error::{Result, ZoomError};
pub use mapper::{CoordinateMapper, Measure, compute_offset};
pub use model::{Geometry, MotionState, Point, Size};
pub use movement::{ElementMover, ElementStyle, PositionSetter};
pub use zoom::ZoomController;
