use lightbox_zoom::components::{App, AppProps};
use lightbox_zoom::config::ZoomConfig;

const ROOT_ID: &str = "lightbox-zoom";

fn attr(el: &web_sys::Element, name: &str, fallback: &str) -> String {
    el.get_attribute(name).unwrap_or_else(|| fallback.to_string())
}

// Props come from data-* attributes on the mount element
fn props_from(root: &web_sys::Element) -> AppProps {
    let config = match root.get_attribute("data-zoom-config") {
        Some(raw) => ZoomConfig::from_json(&raw).unwrap_or_else(|e| {
            log::error!("ignoring data-zoom-config: {}", e);
            ZoomConfig::default()
        }),
        None => ZoomConfig::default(),
    };
    AppProps {
        src: attr(root, "data-src", "thumb.jpg").into(),
        zoom_src: attr(root, "data-zoom-src", "full.jpg").into(),
        title: attr(root, "data-title", "").into(),
        config,
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    }

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ROOT_ID));
    match root {
        Some(root) => {
            let props = props_from(&root);
            yew::Renderer::<App>::with_root_and_props(root, props).render();
        }
        None => log::error!("no #{} element to mount into", ROOT_ID),
    }
}
