//! Deterministic stand-ins for the host collaborators, for unit and integration tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::animation::FrameScheduler;
use crate::mapper::Measure;
use crate::model::{Point, Size};
use crate::movement::{ElementStyle, PositionSetter};

#[derive(Default, Debug)]
struct SchedulerCounters {
    pending: Cell<bool>,
    requests: Cell<usize>,
    duplicates: Cell<usize>,
    cancels: Cell<usize>,
    refusing: Cell<bool>,
}

/// Frame scheduler driven by hand. Clones share state, so a test can keep one while
/// the animator owns another.
#[derive(Clone, Default, Debug)]
pub struct ManualScheduler {
    counters: Rc<SchedulerCounters>,
}

impl ManualScheduler {
    /// Grants the pending frame, if any. The caller then ticks the animator.
    pub fn fire(&self) -> bool {
        self.counters.pending.replace(false)
    }

    pub fn requests(&self) -> usize {
        self.counters.requests.get()
    }

    /// Requests made while one was already pending.
    pub fn duplicate_requests(&self) -> usize {
        self.counters.duplicates.get()
    }

    pub fn cancels(&self) -> usize {
        self.counters.cancels.get()
    }

    /// While set, every request is turned down.
    pub fn set_refusing(&self, refusing: bool) {
        self.counters.refusing.set(refusing);
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> bool {
        if self.counters.refusing.get() {
            return false;
        }
        if self.counters.pending.get() {
            self.counters.duplicates.set(self.counters.duplicates.get() + 1);
        }
        self.counters.pending.set(true);
        self.counters.requests.set(self.counters.requests.get() + 1);
        true
    }

    fn cancel(&mut self) {
        if self.counters.pending.replace(false) {
            self.counters.cancels.set(self.counters.cancels.get() + 1);
        }
    }

    fn is_scheduled(&self) -> bool {
        self.counters.pending.get()
    }
}

/// Remembers every applied position.
#[derive(Clone, Default, Debug)]
pub struct RecordingSetter {
    applied: Rc<RefCell<Vec<Point>>>,
}

impl RecordingSetter {
    pub fn last(&self) -> Option<Point> {
        self.applied.borrow().last().copied()
    }

    pub fn len(&self) -> usize {
        self.applied.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.borrow().is_empty()
    }

    pub fn all(&self) -> Vec<Point> {
        self.applied.borrow().clone()
    }
}

impl PositionSetter for RecordingSetter {
    fn apply(&mut self, position: Point) {
        self.applied.borrow_mut().push(position);
    }
}

/// In-memory style declaration.
#[derive(Clone, Default, Debug)]
pub struct StyleMap {
    props: HashMap<String, String>,
}

impl StyleMap {
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl ElementStyle for StyleMap {
    fn style_property(&self, name: &str) -> String {
        self.props.get(name).cloned().unwrap_or_default()
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        self.props.insert(name.to_string(), value.to_string());
    }
}

/// Element whose size a test can change between measurements.
#[derive(Clone, Default, Debug)]
pub struct FixedSize {
    size: Rc<Cell<Size>>,
}

impl FixedSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Rc::new(Cell::new(Size::new(width, height))),
        }
    }

    pub fn resize(&self, width: f64, height: f64) {
        self.size.set(Size::new(width, height));
    }
}

impl Measure for FixedSize {
    fn measure(&self) -> Size {
        self.size.get()
    }
}
