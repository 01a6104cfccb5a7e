pub mod app;
pub mod lightbox;

pub use app::{App, AppProps};
pub use lightbox::{LightboxZoom, LightboxZoomProps};
