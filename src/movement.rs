//! Writing an animated position onto an element's style.

use crate::config::MovementMethod;
use crate::model::Point;
use crate::transform::TransformList;
use crate::util::fmt_px;

/// Receives every position the animator produces.
pub trait PositionSetter {
    fn apply(&mut self, position: Point);
}

/// Named style property access on an element.
pub trait ElementStyle {
    fn style_property(&self, name: &str) -> String;
    fn set_style_property(&mut self, name: &str, value: &str);
}

/// [`PositionSetter`] that moves an element with the configured [`MovementMethod`].
pub struct ElementMover<S> {
    element: S,
    method: MovementMethod,
}

impl<S: ElementStyle> ElementMover<S> {
    pub fn new(element: S, method: MovementMethod) -> Self {
        Self { element, method }
    }

    pub fn element(&self) -> &S {
        &self.element
    }
}

impl<S: ElementStyle> PositionSetter for ElementMover<S> {
    fn apply(&mut self, position: Point) {
        move_element(&mut self.element, position, self.method);
    }
}

pub fn move_element(element: &mut impl ElementStyle, position: Point, method: MovementMethod) {
    match method {
        MovementMethod::Translate3d => translate_element(element, position),
        MovementMethod::LeftTop => set_left_top(element, position),
        MovementMethod::Unsupported => {
            log::debug!("unsupported movement method, position {:?} not applied", position);
        }
    }
}

fn translate_element(element: &mut impl ElementStyle, position: Point) {
    let mut transform = TransformList::parse(&element.style_property("transform"));
    transform.set_translate3d(position.x, position.y);
    element.set_style_property("transform", &transform.to_string());
}

fn set_left_top(element: &mut impl ElementStyle, position: Point) {
    element.set_style_property("left", &format!("{}px", fmt_px(position.x)));
    element.set_style_property("top", &format!("{}px", fmt_px(position.y)));
}
