//! Pointer position to content offset mapping.
//!
//! The content is moved so that sweeping the pointer across the viewport sweeps the
//! viewport across the whole (oversized) content. Axes on which the content already
//! fits are parked at a fixed offset instead.

use crate::config::MapperConfig;
use crate::model::{Geometry, Point, Size};

/// Anything that can report its rendered size.
pub trait Measure {
    fn measure(&self) -> Size;
}

impl Measure for Size {
    fn measure(&self) -> Size {
        *self
    }
}

/// Offset to apply to the content for `pointer`.
///
/// Pointers outside the viewport are not clamped and yield offsets past the nominal
/// travel range.
pub fn compute_offset(pointer: Point, geometry: &Geometry, config: &MapperConfig) -> Point {
    let x = axis_offset(
        pointer.x,
        geometry.ratio_x(),
        geometry.viewport_width,
        geometry.content_width,
        geometry.margin_x,
        config.default_offset.x,
        config.center_zoomed_image,
    );
    let y = axis_offset(
        pointer.y,
        geometry.ratio_y(),
        geometry.viewport_height,
        geometry.content_height,
        geometry.margin_y,
        config.default_offset.y,
        config.center_zoomed_image,
    );
    Point { x, y }
}

fn axis_offset(
    pointer: f64,
    ratio: f64,
    viewport: f64,
    content: f64,
    margin: f64,
    default: f64,
    center: bool,
) -> f64 {
    if ratio == 0.0 {
        if center {
            viewport / 2.0 - (content - margin) / 2.0
        } else {
            default
        }
    } else {
        -pointer * ratio + margin / 2.0
    }
}

/// Mapper holding the last measured geometry.
#[derive(Clone, Debug)]
pub struct CoordinateMapper {
    config: MapperConfig,
    geometry: Geometry,
}

impl CoordinateMapper {
    pub fn new(config: MapperConfig) -> Self {
        Self {
            config,
            geometry: Geometry {
                margin_x: config.margin_x,
                margin_y: config.margin_y,
                ..Geometry::default()
            },
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Re-measures viewport and content. Must run whenever either may have resized.
    pub fn recalculate(&mut self, viewport: &impl Measure, content: &impl Measure) {
        self.geometry = Geometry::measured(
            viewport.measure(),
            content.measure(),
            self.config.margin_x,
            self.config.margin_y,
        );
        log::trace!(
            "geometry {:?} ratio=({}, {})",
            self.geometry,
            self.geometry.ratio_x(),
            self.geometry.ratio_y()
        );
    }

    pub fn offset_for(&self, pointer: Point) -> Point {
        compute_offset(pointer, &self.geometry, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(config: MapperConfig, viewport: Size, content: Size) -> CoordinateMapper {
        let mut m = CoordinateMapper::new(config);
        m.recalculate(&viewport, &content);
        m
    }

    #[test]
    fn wide_content_pans_horizontally_and_centers_vertically() {
        let m = mapper(
            MapperConfig::default(),
            Size::new(300.0, 300.0),
            Size::new(900.0, 300.0),
        );
        let off = m.offset_for(Point::new(100.0, 250.0));
        assert_eq!(off.x, -200.0);
        assert_eq!(off.y, 0.0);
    }

    #[test]
    fn fitting_axis_is_constant_for_any_pointer() {
        let m = mapper(
            MapperConfig::default(),
            Size::new(400.0, 400.0),
            Size::new(200.0, 100.0),
        );
        let a = m.offset_for(Point::new(0.0, 0.0));
        let b = m.offset_for(Point::new(399.0, -50.0));
        let c = m.offset_for(Point::new(10_000.0, 7.0));
        assert_eq!(a, Point::new(100.0, 150.0));
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn fitting_axis_uses_default_when_not_centering() {
        let cfg = MapperConfig {
            center_zoomed_image: false,
            default_offset: Point::new(12.0, -4.0),
            ..MapperConfig::default()
        };
        let m = mapper(cfg, Size::new(400.0, 400.0), Size::new(200.0, 100.0));
        assert_eq!(m.offset_for(Point::new(55.0, 66.0)), Point::new(12.0, -4.0));
    }

    #[test]
    fn overhanging_axis_is_affine_in_pointer() {
        let cfg = MapperConfig {
            margin_x: 100.0,
            margin_y: 60.0,
            ..MapperConfig::default()
        };
        let m = mapper(cfg, Size::new(400.0, 300.0), Size::new(1100.0, 840.0));
        // content incl. margin: 1200 x 900 -> ratios 2.0 and 2.0
        assert_eq!(m.geometry().ratio_x(), 2.0);
        assert_eq!(m.geometry().ratio_y(), 2.0);

        let at_origin = m.offset_for(Point::ZERO);
        assert_eq!(at_origin, Point::new(50.0, 30.0));

        let at_edge = m.offset_for(Point::new(400.0, 300.0));
        assert_eq!(at_edge, Point::new(-800.0 + 50.0, -600.0 + 30.0));
    }

    #[test]
    fn centering_subtracts_margin_from_content() {
        let cfg = MapperConfig {
            margin_x: 40.0,
            ..MapperConfig::default()
        };
        // content 200 + 40 margin fits a 300 wide viewport
        let m = mapper(cfg, Size::new(300.0, 300.0), Size::new(200.0, 100.0));
        assert_eq!(m.offset_for(Point::ZERO).x, 150.0 - 100.0);
    }

    #[test]
    fn pointer_outside_viewport_is_not_clamped() {
        let m = mapper(
            MapperConfig::default(),
            Size::new(300.0, 300.0),
            Size::new(900.0, 300.0),
        );
        assert_eq!(m.offset_for(Point::new(-50.0, 0.0)).x, 100.0);
        assert_eq!(m.offset_for(Point::new(600.0, 0.0)).x, -1200.0);
    }

    #[test]
    fn recalculate_picks_up_new_sizes() {
        let mut m = mapper(
            MapperConfig::default(),
            Size::new(300.0, 300.0),
            Size::new(900.0, 300.0),
        );
        m.recalculate(&Size::new(900.0, 300.0), &Size::new(900.0, 300.0));
        assert_eq!(m.geometry().ratio_x(), 0.0);
        assert_eq!(m.offset_for(Point::new(100.0, 0.0)).x, 0.0);
    }
}
