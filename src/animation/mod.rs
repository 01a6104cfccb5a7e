//! Animators that move the zoomed content toward a target offset.
//!
//! An animator never talks to the host directly. It gets a [`FrameScheduler`] to ask for
//! the next frame and a [`PositionSetter`](crate::movement::PositionSetter) to write each
//! position. The host calls [`Animator::tick`] once per granted frame.

pub mod immediate;
pub mod smoothed;

pub use immediate::ImmediateAnimator;
pub use smoothed::SmoothedAnimator;

use crate::model::Point;

/// Per-frame callback registration supplied by the host.
///
/// A granted frame clears the scheduled state before the host invokes `tick`.
pub trait FrameScheduler {
    /// Returns false if no frame could be scheduled.
    fn request_frame(&mut self) -> bool;
    /// Drops a pending request, if any.
    fn cancel(&mut self);
    fn is_scheduled(&self) -> bool;
}

/// Capability set shared by every animator variant. The zoom controller picks one at
/// construction time.
pub trait Animator {
    /// Moves the target; starts frame requests if idle.
    fn set_target(&mut self, target: Point);
    /// One frame of motion.
    fn tick(&mut self);
    fn stop(&mut self);
    /// Stops and zeroes position and target.
    fn reset(&mut self);
    /// Jumps position and target to `point` and applies it right away.
    fn snap_to(&mut self, point: Point);
    fn position(&self) -> Point;
    fn target(&self) -> Point;
    fn is_running(&self) -> bool;
}
