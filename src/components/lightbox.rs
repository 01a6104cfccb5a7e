use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::ZoomConfig;
use crate::web::ZoomBinding;

#[derive(Properties, PartialEq, Clone)]
pub struct LightboxZoomProps {
    /// Thumbnail shown inline; clicking it opens the zoom.
    pub src: AttrValue,
    /// Full-size image panned inside the viewport.
    pub zoom_src: AttrValue,
    #[prop_or_default]
    pub alt: AttrValue,
    #[prop_or_default]
    pub config: ZoomConfig,
}

#[function_component(LightboxZoom)]
pub fn lightbox_zoom(props: &LightboxZoomProps) -> Html {
    let trigger_ref = use_node_ref();
    let viewport_ref = use_node_ref();
    let content_ref = use_node_ref();

    {
        let trigger_ref = trigger_ref.clone();
        let viewport_ref = viewport_ref.clone();
        let content_ref = content_ref.clone();
        use_effect_with(props.config.clone(), move |config| {
            let binding = attach(&trigger_ref, &viewport_ref, &content_ref, config);
            move || drop(binding)
        });
    }

    html! {
        <>
            <img
                ref={trigger_ref}
                class="lightbox-zoom-trigger"
                src={props.src.clone()}
                alt={props.alt.clone()}
                style="cursor:zoom-in;"
            />
            <div
                ref={viewport_ref}
                class="lightbox-zoom-viewport"
                style="display:none; position:fixed; left:0; top:0; width:100vw; height:100vh; overflow:hidden; cursor:zoom-out; background:rgba(14,17,22,0.95); z-index:1000;"
            >
                <img
                    ref={content_ref}
                    src={props.zoom_src.clone()}
                    alt={props.alt.clone()}
                    style="position:absolute; left:0; top:0; max-width:none; max-height:none;"
                />
            </div>
        </>
    }
}

fn attach(
    trigger_ref: &NodeRef,
    viewport_ref: &NodeRef,
    content_ref: &NodeRef,
    config: &ZoomConfig,
) -> Option<ZoomBinding> {
    let window = web_sys::window()?;
    let (Some(trigger), Some(viewport), Some(content)) = (
        trigger_ref.cast::<HtmlElement>(),
        viewport_ref.cast::<HtmlElement>(),
        content_ref.cast::<HtmlElement>(),
    ) else {
        log::error!("lightbox zoom refs not attached");
        return None;
    };
    match ZoomBinding::attach(&window, trigger, viewport, content, config) {
        Ok(binding) => Some(binding),
        Err(e) => {
            log::error!("lightbox zoom disabled: {}", e);
            None
        }
    }
}
