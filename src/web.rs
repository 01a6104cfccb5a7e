//! Browser implementations of the host collaborators, plus DOM event wiring.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, EventTarget, HtmlElement, MouseEvent, ResizeObserver, Window};

use crate::animation::FrameScheduler;
use crate::config::ZoomConfig;
use crate::error::{Result, ZoomError};
use crate::mapper::Measure;
use crate::model::{Point, Size};
use crate::movement::{ElementMover, ElementStyle};
use crate::zoom::ZoomController;

fn js_err(v: JsValue) -> ZoomError {
    ZoomError::Js(format!("{:?}", v))
}

impl Measure for HtmlElement {
    fn measure(&self) -> Size {
        Size::new(self.offset_width() as f64, self.offset_height() as f64)
    }
}

impl ElementStyle for HtmlElement {
    fn style_property(&self, name: &str) -> String {
        self.style().get_property_value(name).unwrap_or_default()
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        if let Err(e) = self.style().set_property(name, value) {
            log::warn!("failed to set {}: {:?}", name, e);
        }
    }
}

/// Every HTML element matching a CSS selector; an empty match is an error.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    let nodes = document.query_selector_all(selector).map_err(js_err)?;
    let found: Vec<HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();
    if found.is_empty() {
        return Err(ZoomError::MissingElement(selector.to_string()));
    }
    Ok(found)
}

/// `requestAnimationFrame` scheduler. Clones share the pending frame and the callback.
#[derive(Clone)]
pub struct RafScheduler {
    window: Window,
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Sets what runs on every granted frame.
    pub fn bind(&self, mut on_frame: impl FnMut() + 'static) {
        let pending = self.pending.clone();
        *self.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending.set(None);
            on_frame();
        }) as Box<dyn FnMut()>));
    }

    pub fn unbind(&self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> bool {
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            log::warn!("frame requested before a frame callback was bound");
            return false;
        };
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => {
                self.pending.set(Some(id));
                true
            }
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                false
            }
        }
    }

    fn cancel(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }

    fn is_scheduled(&self) -> bool {
        self.pending.get().is_some()
    }
}

/// Shows the viewport and locks page scrolling while the zoom is open.
#[derive(Clone)]
pub struct Overlay {
    viewport: HtmlElement,
    root: Option<HtmlElement>,
}

impl Overlay {
    pub fn new(document: &Document, viewport: HtmlElement) -> Self {
        let root = document
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        Self { viewport, root }
    }

    pub fn show(&mut self) {
        self.viewport.set_style_property("display", "block");
        if let Some(root) = self.root.as_mut() {
            root.set_style_property("overflow", "hidden");
        }
    }

    pub fn hide(&mut self) {
        self.viewport.set_style_property("display", "");
        if let Some(root) = self.root.as_mut() {
            root.set_style_property("overflow", "");
        }
    }
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn add(target: &EventTarget, event: &'static str, f: impl FnMut(Event) + 'static) -> Result<Self> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

fn client_point(e: &Event) -> Option<Point> {
    e.dyn_ref::<MouseEvent>()
        .map(|m| Point::new(m.client_x() as f64, m.client_y() as f64))
}

/// A live zoom widget. Dropping it removes every listener, disconnects the resize
/// observer and cancels the pending frame.
pub struct ZoomBinding {
    document: Document,
    controller: Rc<RefCell<ZoomController>>,
    overlay: Rc<RefCell<Overlay>>,
    viewport: HtmlElement,
    content: HtmlElement,
    scheduler: RafScheduler,
    listeners: Vec<Listener>,
    observer: Option<(ResizeObserver, Closure<dyn FnMut()>)>,
}

impl ZoomBinding {
    /// Wires click-to-open on `trigger` and on every element matching the configured
    /// trigger selectors, click-to-close and pointer tracking on `viewport`, and resizes
    /// of both the window and the viewport.
    pub fn attach(
        window: &Window,
        trigger: HtmlElement,
        viewport: HtmlElement,
        content: HtmlElement,
        config: &ZoomConfig,
    ) -> Result<Self> {
        let document = window
            .document()
            .ok_or_else(|| ZoomError::MissingElement("document".to_string()))?;
        let scheduler = RafScheduler::new(window.clone());
        let mover = ElementMover::new(content.clone(), config.movement_method);
        let controller = Rc::new(RefCell::new(ZoomController::new(
            config,
            Box::new(mover),
            Box::new(scheduler.clone()),
        )?));

        {
            let weak: Weak<RefCell<ZoomController>> = Rc::downgrade(&controller);
            scheduler.bind(move || {
                if let Some(c) = weak.upgrade() {
                    c.borrow_mut().tick();
                }
            });
        }

        let overlay = Rc::new(RefCell::new(Overlay::new(&document, viewport.clone())));
        let mut binding = Self {
            document,
            controller,
            overlay,
            viewport,
            content,
            scheduler,
            listeners: Vec::with_capacity(4 + config.triggers.len()),
            observer: None,
        };

        binding.add_trigger(&trigger)?;
        for selector in &config.triggers {
            match binding.add_trigger_selector(selector) {
                Ok(n) => log::debug!("{} extra trigger(s) for {:?}", n, selector),
                Err(ZoomError::MissingElement(_)) => {
                    log::warn!("trigger selector {:?} matched nothing", selector)
                }
                Err(e) => return Err(e),
            }
        }
        // Close
        {
            let controller = binding.controller.clone();
            let overlay = binding.overlay.clone();
            let listener = Listener::add(&binding.viewport, "click", move |_e| {
                overlay.borrow_mut().hide();
                controller.borrow_mut().close();
            })?;
            binding.listeners.push(listener);
        }
        // Pointer tracking
        {
            let controller = binding.controller.clone();
            let listener = Listener::add(&binding.viewport, "mousemove", move |e| {
                if let Some(p) = client_point(&e) {
                    controller.borrow_mut().pointer_moved(p);
                }
            })?;
            binding.listeners.push(listener);
        }
        // Window resize
        {
            let on_resize = binding.resize_handler();
            let listener = Listener::add(window, "resize", move |_e| on_resize())?;
            binding.listeners.push(listener);
        }
        binding.observe_viewport()?;

        log::debug!("zoom attached");
        Ok(binding)
    }

    /// Opens the zoom when `trigger` is clicked. Any number of triggers may share
    /// one viewport.
    pub fn add_trigger(&mut self, trigger: &HtmlElement) -> Result<()> {
        let controller = self.controller.clone();
        let overlay = self.overlay.clone();
        let viewport = self.viewport.clone();
        let content = self.content.clone();
        let listener = Listener::add(trigger, "click", move |e| {
            let Some(p) = client_point(&e) else { return };
            overlay.borrow_mut().show();
            controller.borrow_mut().open(p, &viewport, &content);
        })?;
        self.listeners.push(listener);
        Ok(())
    }

    /// [`add_trigger`](Self::add_trigger) for every element matching `selector`.
    /// Returns how many were wired.
    pub fn add_trigger_selector(&mut self, selector: &str) -> Result<usize> {
        let triggers = query_all(&self.document, selector)?;
        for trigger in &triggers {
            self.add_trigger(trigger)?;
        }
        Ok(triggers.len())
    }

    fn resize_handler(&self) -> impl Fn() + 'static {
        let controller = self.controller.clone();
        let viewport = self.viewport.clone();
        let content = self.content.clone();
        move || controller.borrow_mut().resized(&viewport, &content)
    }

    // Container resizes don't fire `resize` events; a ResizeObserver catches them.
    fn observe_viewport(&mut self) -> Result<()> {
        let on_resize = self.resize_handler();
        let callback = Closure::wrap(Box::new(move || on_resize()) as Box<dyn FnMut()>);
        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref()).map_err(js_err)?;
        observer.observe(&self.viewport);
        self.observer = Some((observer, callback));
        Ok(())
    }
}

impl Drop for ZoomBinding {
    fn drop(&mut self) {
        if let Some((observer, _callback)) = self.observer.take() {
            observer.disconnect();
        }
        self.scheduler.unbind();
    }
}
