use crate::animation::{Animator, FrameScheduler};
use crate::config::AnimatorConfig;
use crate::error::Result;
use crate::model::{MotionState, Point};
use crate::movement::PositionSetter;

/// First-order exponential smoothing: every frame closes `1 / inverse_speed` of the
/// remaining distance, so motion decelerates without overshoot.
pub struct SmoothedAnimator {
    config: AnimatorConfig,
    state: MotionState,
    setter: Box<dyn PositionSetter>,
    scheduler: Box<dyn FrameScheduler>,
}

impl SmoothedAnimator {
    pub fn new(
        config: AnimatorConfig,
        setter: Box<dyn PositionSetter>,
        scheduler: Box<dyn FrameScheduler>,
    ) -> Result<Self> {
        let config = config.validated()?;
        Ok(Self {
            state: MotionState {
                position: config.start,
                target: config.target,
                running: false,
            },
            config,
            setter,
            scheduler,
        })
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Returns false when the step no longer moves the position (below float
    /// resolution at this magnitude).
    fn step(&mut self) -> bool {
        let s = &mut self.state;
        let before = s.position;
        s.position.x += (s.target.x - s.position.x) / self.config.inverse_speed;
        s.position.y += (s.target.y - s.position.y) / self.config.inverse_speed;
        s.position != before
    }

    fn settled(&self) -> bool {
        let s = &self.state;
        (s.position.x - s.target.x).abs() < self.config.accuracy
            && (s.position.y - s.target.y).abs() < self.config.accuracy
    }

    /// True when a frame is pending afterwards. At most one is ever pending.
    fn schedule_next(&mut self) -> bool {
        self.scheduler.is_scheduled() || self.scheduler.request_frame()
    }
}

impl Animator for SmoothedAnimator {
    fn set_target(&mut self, target: Point) {
        self.state.target = target;
        if !self.state.running {
            self.state.running = self.schedule_next();
            if self.state.running {
                log::debug!("animation start -> {:?}", target);
            } else {
                log::warn!("no frame granted, animation to {:?} not started", target);
            }
        }
    }

    fn tick(&mut self) {
        let moved = self.step();
        self.setter.apply(self.state.position);
        log::trace!(
            "step pos={:?} target={:?}",
            self.state.position,
            self.state.target
        );

        if self.settled() || !moved {
            if self.state.running {
                log::debug!("animation settled at {:?}", self.state.position);
            }
            self.stop();
            return;
        }
        if self.state.running && !self.schedule_next() {
            log::warn!("no frame granted, animation halted at {:?}", self.state.position);
            self.state.running = false;
        }
    }

    fn stop(&mut self) {
        self.state.running = false;
        self.scheduler.cancel();
    }

    fn reset(&mut self) {
        self.stop();
        self.state.position = Point::ZERO;
        self.state.target = Point::ZERO;
    }

    fn snap_to(&mut self, point: Point) {
        self.state.position = point;
        self.state.target = point;
        self.setter.apply(point);
    }

    fn position(&self) -> Point {
        self.state.position
    }

    fn target(&self) -> Point {
        self.state.target
    }

    fn is_running(&self) -> bool {
        self.state.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZoomError;
    use crate::testing::{ManualScheduler, RecordingSetter};

    fn animator(inverse_speed: f64, accuracy: f64) -> (SmoothedAnimator, ManualScheduler, RecordingSetter) {
        let scheduler = ManualScheduler::default();
        let setter = RecordingSetter::default();
        let a = SmoothedAnimator::new(
            AnimatorConfig {
                inverse_speed,
                accuracy,
                ..AnimatorConfig::default()
            },
            Box::new(setter.clone()),
            Box::new(scheduler.clone()),
        )
        .unwrap();
        (a, scheduler, setter)
    }

    #[test]
    fn first_step_closes_one_fifteenth() {
        let (mut a, scheduler, setter) = animator(15.0, 3.0);
        a.set_target(Point::new(300.0, 0.0));
        assert!(a.is_running());
        assert!(scheduler.fire());
        a.tick();
        assert_eq!(a.position(), Point::new(20.0, 0.0));
        assert_eq!(setter.last(), Some(Point::new(20.0, 0.0)));
    }

    #[test]
    fn converges_monotonically_and_goes_idle() {
        let (mut a, scheduler, setter) = animator(15.0, 3.0);
        a.set_target(Point::new(300.0, 0.0));

        let mut prev = 300.0_f64;
        let mut frames = 0;
        while scheduler.fire() {
            a.tick();
            let d = (300.0 - a.position().x).abs();
            assert!(d < prev, "distance must shrink every frame");
            prev = d;
            frames += 1;
            assert!(frames < 200, "animation did not settle");
        }
        assert!(!a.is_running());
        assert!(prev < 3.0);
        assert_eq!(setter.len(), frames);
        assert!(!scheduler.is_scheduled());
    }

    #[test]
    fn settles_for_any_speed_and_accuracy_at_least_one() {
        for speed in [1.0, 1.5, 4.0, 30.0] {
            for acc in [1.0, 2.5, 10.0] {
                let (mut a, scheduler, _) = animator(speed, acc);
                a.set_target(Point::new(-750.0, 420.0));
                let mut frames = 0;
                while scheduler.fire() {
                    a.tick();
                    frames += 1;
                    assert!(frames < 2_000, "speed {speed} accuracy {acc} did not settle");
                }
                assert!(!a.is_running());
            }
        }
    }

    #[test]
    fn retargeting_while_running_keeps_one_frame_request() {
        let (mut a, scheduler, _) = animator(15.0, 3.0);
        a.set_target(Point::new(100.0, 100.0));
        a.set_target(Point::new(200.0, 50.0));
        a.set_target(Point::new(-30.0, 10.0));
        assert_eq!(scheduler.requests(), 1);
        assert_eq!(scheduler.duplicate_requests(), 0);

        assert!(scheduler.fire());
        a.tick();
        a.set_target(Point::new(400.0, 400.0));
        a.set_target(Point::new(410.0, 400.0));
        assert_eq!(scheduler.requests(), 2);
        assert_eq!(scheduler.duplicate_requests(), 0);
        assert_eq!(a.target(), Point::new(410.0, 400.0));
    }

    #[test]
    fn stop_is_idempotent() {
        let (mut a, scheduler, _) = animator(15.0, 3.0);
        a.stop();
        let before = *a.state();
        a.stop();
        assert_eq!(*a.state(), before);

        a.set_target(Point::new(50.0, 0.0));
        a.stop();
        assert!(!a.is_running());
        assert!(!scheduler.is_scheduled());
        a.stop();
        assert!(!a.is_running());
    }

    #[test]
    fn tick_after_stop_applies_but_does_not_reschedule() {
        let (mut a, scheduler, setter) = animator(15.0, 3.0);
        a.set_target(Point::new(300.0, 0.0));
        assert!(scheduler.fire());
        a.stop();
        a.tick();
        assert_eq!(setter.len(), 1);
        assert!(!scheduler.is_scheduled());
        assert!(!a.is_running());
    }

    #[test]
    fn refused_frame_leaves_animator_idle_and_retries() {
        let (mut a, scheduler, _) = animator(15.0, 3.0);
        scheduler.set_refusing(true);
        a.set_target(Point::new(300.0, 0.0));
        assert!(!a.is_running());
        assert!(!scheduler.is_scheduled());
        a.set_target(Point::new(310.0, 0.0));
        assert!(!a.is_running());

        scheduler.set_refusing(false);
        a.set_target(Point::new(320.0, 0.0));
        assert!(a.is_running());
        assert!(scheduler.is_scheduled());
    }

    #[test]
    fn refused_follow_up_frame_stops_running() {
        let (mut a, scheduler, _) = animator(15.0, 3.0);
        a.set_target(Point::new(300.0, 0.0));
        assert!(scheduler.fire());
        scheduler.set_refusing(true);
        a.tick();
        assert!(!a.is_running());
        assert!(!scheduler.is_scheduled());

        scheduler.set_refusing(false);
        a.set_target(Point::new(300.0, 0.0));
        assert!(a.is_running());
    }

    #[test]
    fn tiny_accuracy_still_settles() {
        let (mut a, scheduler, _) = animator(15.0, 1e-13);
        a.set_target(Point::new(1000.3, 0.0));
        let mut frames = 0;
        while scheduler.fire() {
            a.tick();
            frames += 1;
            assert!(frames < 10_000, "animation never settled");
        }
        assert!(!a.is_running());
        assert!((a.position().x - 1000.3).abs() < crate::config::MIN_ACCURACY);
    }

    #[test]
    fn settles_when_steps_fall_below_float_resolution() {
        // at 1e17 one ulp is 16, far above the accuracy of 1
        let (mut a, scheduler, _) = animator(15.0, 1.0);
        a.set_target(Point::new(1.0e17, 0.0));
        let mut frames = 0;
        while scheduler.fire() {
            a.tick();
            frames += 1;
            assert!(frames < 10_000, "animation never settled");
        }
        assert!(!a.is_running());
    }

    #[test]
    fn reset_zeroes_everything() {
        let (mut a, scheduler, _) = animator(15.0, 3.0);
        a.set_target(Point::new(300.0, 90.0));
        scheduler.fire();
        a.tick();
        a.reset();
        assert_eq!(a.position(), Point::ZERO);
        assert_eq!(a.target(), Point::ZERO);
        assert!(!a.is_running());
        assert!(!scheduler.is_scheduled());
    }

    #[test]
    fn snap_applies_without_scheduling() {
        let (mut a, scheduler, setter) = animator(15.0, 3.0);
        a.snap_to(Point::new(-200.0, 0.0));
        assert_eq!(a.position(), Point::new(-200.0, 0.0));
        assert_eq!(a.target(), Point::new(-200.0, 0.0));
        assert_eq!(setter.last(), Some(Point::new(-200.0, 0.0)));
        assert_eq!(scheduler.requests(), 0);
        assert!(!a.is_running());
    }

    #[test]
    fn starts_from_configured_position() {
        let a = SmoothedAnimator::new(
            AnimatorConfig {
                start: Point::new(5.0, 6.0),
                target: Point::new(7.0, 8.0),
                ..AnimatorConfig::default()
            },
            Box::new(RecordingSetter::default()),
            Box::new(ManualScheduler::default()),
        )
        .unwrap();
        assert_eq!(a.position(), Point::new(5.0, 6.0));
        assert_eq!(a.target(), Point::new(7.0, 8.0));
        assert!(!a.is_running());
    }

    #[test]
    fn rejects_zero_inverse_speed() {
        let err = SmoothedAnimator::new(
            AnimatorConfig {
                inverse_speed: 0.0,
                ..AnimatorConfig::default()
            },
            Box::new(RecordingSetter::default()),
            Box::new(ManualScheduler::default()),
        )
        .err()
        .unwrap();
        assert!(matches!(err, ZoomError::InvalidInverseSpeed(_)));
    }
}
