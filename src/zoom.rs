//! Glue between interactions and the mapper/animator pair.

use crate::animation::{Animator, FrameScheduler, SmoothedAnimator};
use crate::config::ZoomConfig;
use crate::error::Result;
use crate::mapper::{CoordinateMapper, Measure};
use crate::model::Point;
use crate::movement::PositionSetter;
use crate::state::PointerTracker;

pub struct ZoomController {
    mapper: CoordinateMapper,
    pointer: PointerTracker,
    animator: Box<dyn Animator>,
    open: bool,
}

impl ZoomController {
    /// Controller using the default [`SmoothedAnimator`].
    pub fn new(
        config: &ZoomConfig,
        setter: Box<dyn PositionSetter>,
        scheduler: Box<dyn FrameScheduler>,
    ) -> Result<Self> {
        let config = config.clone().validated()?;
        let animator = SmoothedAnimator::new(config.animator(), setter, scheduler)?;
        Self::with_animator(&config, Box::new(animator))
    }

    /// Controller driving a caller-supplied animator.
    pub fn with_animator(config: &ZoomConfig, animator: Box<dyn Animator>) -> Result<Self> {
        let config = config.clone().validated()?;
        Ok(Self {
            mapper: CoordinateMapper::new(config.mapper()),
            pointer: PointerTracker::new(config.pointer_threshold),
            animator,
            open: false,
        })
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn animator(&self) -> &dyn Animator {
        self.animator.as_ref()
    }

    /// Shows the zoom at `pointer`: geometry is re-measured and the content is placed
    /// immediately, without easing.
    pub fn open(&mut self, pointer: Point, viewport: &impl Measure, content: &impl Measure) {
        self.open = true;
        self.pointer.reset_to(pointer);
        self.mapper.recalculate(viewport, content);
        let offset = self.mapper.offset_for(pointer);
        log::debug!("zoom open at {:?}, offset {:?}", pointer, offset);
        self.animator.snap_to(offset);
    }

    /// Retargets the animation. Returns false when the move was too small to count or
    /// the zoom is closed.
    pub fn pointer_moved(&mut self, pointer: Point) -> bool {
        if !self.open || !self.pointer.accept(pointer) {
            return false;
        }
        let offset = self.mapper.offset_for(pointer);
        self.animator.set_target(offset);
        true
    }

    /// Re-measures and eases toward the offset for the last pointer sample.
    pub fn resized(&mut self, viewport: &impl Measure, content: &impl Measure) {
        if !self.open {
            return;
        }
        self.mapper.recalculate(viewport, content);
        let offset = self.mapper.offset_for(self.pointer.last());
        self.animator.set_target(offset);
    }

    pub fn close(&mut self) {
        if self.open {
            log::debug!("zoom closed");
        }
        self.open = false;
        self.animator.stop();
    }

    pub fn tick(&mut self) {
        self.animator.tick();
    }
}
