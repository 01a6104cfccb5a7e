use super::lightbox::LightboxZoom;
use crate::config::ZoomConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub src: AttrValue,
    pub zoom_src: AttrValue,
    #[prop_or_default]
    pub title: AttrValue,
    #[prop_or_default]
    pub config: ZoomConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <div style="padding:12px; font-family:sans-serif; color:#c9d1d9; background:#0e1116; min-height:100vh;">
            if !props.title.is_empty() {
                <h2>{props.title.clone()}</h2>
            }
            <p>{"Click the image to zoom, move the pointer to pan, click again to close."}</p>
            <LightboxZoom
                src={props.src.clone()}
                zoom_src={props.zoom_src.clone()}
                alt={props.title.clone()}
                config={props.config.clone()}
            />
        </div>
    }
}
