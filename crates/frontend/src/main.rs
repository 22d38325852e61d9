mod app;
mod config;
mod logging;
mod transport;

use app::{App, AppProps};
use config::PageConfig;
use std::rc::Rc;
use tracing::warn;
use web_sys::window;

/// Element the widget mounts into when the page provides one
const ROOT_ELEMENT_ID: &str = "fairchat";

fn main() {
    console_error_panic_hook::set_once();

    let loaded = PageConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init_logging(&config.log_level);
    if let Err(e) = &loaded {
        warn!("Ignoring page configuration: {e:#}");
    }

    let props = AppProps {
        config: Rc::new(config.resolve()),
    };

    let root = window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(ROOT_ELEMENT_ID));

    match root {
        Some(root) => yew::Renderer::<App>::with_root_and_props(root, props).render(),
        None => yew::Renderer::<App>::with_props(props).render(),
    };
}
