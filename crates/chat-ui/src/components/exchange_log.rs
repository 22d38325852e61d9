use crate::render::renderer_for;
use crate::styles::{FLEX_COL_GAP_4, STANDARD_PADDING};
use fairchat_core::{LogEntry, WidgetConfig};
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ExchangeLogProps {
    pub entries: Vec<LogEntry>,
    /// Bumped by the widget whenever the newest entry should be in view
    pub scroll_requests: usize,
    pub config: Rc<WidgetConfig>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ExchangeLogView)]
pub fn exchange_log(props: &ExchangeLogProps) -> Html {
    let ExchangeLogProps {
        entries,
        scroll_requests,
        config,
        class,
    } = props;

    let container_ref = use_node_ref();

    // Effects run after render, so the new entry is already laid out
    use_effect_with(*scroll_requests, {
        let container_ref = container_ref.clone();
        move |_| {
            if let Some(element) = container_ref.cast::<Element>() {
                element.set_scroll_top(element.scroll_height());
            }
        }
    });

    let renderer = renderer_for(config.layout);
    let mut exchange_index = 0usize;
    let rows: Vec<(String, String)> = entries
        .iter()
        .map(|entry| match entry {
            LogEntry::Typing(id) => (format!("typing-{id}"), renderer.render_typing(config)),
            LogEntry::Exchange(exchange) => {
                exchange_index += 1;
                (
                    format!("exchange-{exchange_index}"),
                    renderer.render_exchange(exchange, config),
                )
            }
        })
        .collect();

    html! {
        <div
            ref={container_ref}
            id="chat-log"
            class={classes!(STANDARD_PADDING, FLEX_COL_GAP_4, "flex-1", "overflow-y-auto", class.clone())}
            aria-live="polite"
        >
            {for rows.into_iter().map(|(key, markup)| {
                html! {
                    <div key={key} class="contents">
                        {Html::from_html_unchecked(AttrValue::from(markup))}
                    </div>
                }
            })}
        </div>
    }
}
