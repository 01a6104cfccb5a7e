use crate::animation::Animator;
use crate::model::Point;
use crate::movement::PositionSetter;

/// Animator without easing: every target is applied on the spot and no frames are
/// ever requested. Useful where motion should be reduced.
pub struct ImmediateAnimator {
    position: Point,
    setter: Box<dyn PositionSetter>,
}

impl ImmediateAnimator {
    pub fn new(setter: Box<dyn PositionSetter>) -> Self {
        Self {
            position: Point::ZERO,
            setter,
        }
    }
}

impl Animator for ImmediateAnimator {
    fn set_target(&mut self, target: Point) {
        self.snap_to(target);
    }

    fn tick(&mut self) {}

    fn stop(&mut self) {}

    fn reset(&mut self) {
        self.position = Point::ZERO;
    }

    fn snap_to(&mut self, point: Point) {
        self.position = point;
        self.setter.apply(point);
    }

    fn position(&self) -> Point {
        self.position
    }

    fn target(&self) -> Point {
        self.position
    }

    fn is_running(&self) -> bool {
        false
    }
}
