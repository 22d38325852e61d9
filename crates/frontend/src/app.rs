use crate::config::PageConfig;
use crate::transport::UnavailableTransport;
use fairchat_chat_ui::styles::{
    CARD_BG, HEADER_PADDING, LIGHT_SHADOW, PRIMARY_BORDER, PRIMARY_TEXT, combine_styles,
};
use fairchat_chat_ui::{ChatWidget, TransportHandle};
use fairchat_core::WidgetConfig;
use fairchat_http::RespondClient;
use std::rc::Rc;
use tracing::{error, info};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<PageConfig>,
}

fn build_transport(config: &WidgetConfig) -> TransportHandle {
    match RespondClient::builder()
        .base_url(&config.base_url)
        .endpoint(&config.endpoint)
        .build()
    {
        Ok(client) => {
            info!(url = %client.url(), layout = %config.layout, "Respond client ready");
            TransportHandle::new(client)
        }
        Err(e) => {
            error!(error = %e, "Could not build respond client");
            TransportHandle::new(UnavailableTransport::new(e.to_string()))
        }
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let widget_config = use_memo(props.config.clone(), |config| config.widget.clone());
    let transport = use_memo(widget_config.clone(), |config| build_transport(config));

    html! {
        <div class="min-h-screen flex flex-col bg-gray-100 dark:bg-gray-900">
            <header class={combine_styles(&[CARD_BG, HEADER_PADDING, LIGHT_SHADOW, "border-b", PRIMARY_BORDER])}>
                <h1 class={combine_styles(&["text-xl font-bold", PRIMARY_TEXT])}>{&props.config.title}</h1>
            </header>
            <main class="flex-1 flex flex-col p-4 max-w-4xl w-full mx-auto h-[calc(100vh-64px)]">
                <ChatWidget
                    config={widget_config}
                    transport={(*transport).clone()}
                />
            </main>
        </div>
    }
}
