use crate::components::{ChatForm, ExampleChips, ExchangeLogView, InputHandle};
use crate::live_log::LiveLog;
use crate::styles::{CONTAINER_BG, FLEX_COL, ROUNDED_STANDARD};
use fairchat_core::{ChatWidget as WidgetCore, RespondTransport, WidgetConfig};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Shared transport passed in as a prop; equal only to itself
#[derive(Clone)]
pub struct TransportHandle(Rc<dyn RespondTransport>);

impl TransportHandle {
    pub fn new<T: RespondTransport + 'static>(transport: T) -> Self {
        Self(Rc::new(transport))
    }
}

impl PartialEq for TransportHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ChatWidgetProps {
    pub config: Rc<WidgetConfig>,
    pub transport: TransportHandle,
    #[prop_or_default]
    pub class: Classes,
}

/// Log, example chips and input form wired to one request lifecycle
#[function_component(ChatWidget)]
pub fn chat_widget(props: &ChatWidgetProps) -> Html {
    let ChatWidgetProps {
        config,
        transport,
        class,
    } = props;

    let trigger = use_force_update();
    let log = use_mut_ref(move || {
        // The log is still borrowed when it notifies; render on the next tick
        LiveLog::new(Callback::from(move |()| {
            let trigger = trigger.clone();
            spawn_local(async move { trigger.force_update() });
        }))
    });

    let widget = {
        let log = log.clone();
        use_memo((transport.clone(), config.clone()), move |(transport, config)| {
            WidgetCore::new(transport.0.clone(), log, config.messages.clone())
        })
    };

    let on_submit = {
        let widget = widget.clone();
        Callback::from(move |input: InputHandle| {
            let widget = (*widget).clone();
            spawn_local(async move {
                widget.submit_form(&input).await;
            });
        })
    };

    let on_example = {
        let widget = widget.clone();
        Callback::from(move |example: String| {
            let widget = (*widget).clone();
            spawn_local(async move {
                widget.submit_example(&example).await;
            });
        })
    };

    let (entries, scroll_requests) = {
        let log = log.borrow();
        (log.entries().to_vec(), log.scroll_requests())
    };

    html! {
        <div class={classes!(FLEX_COL, "h-full", CONTAINER_BG, ROUNDED_STANDARD, "overflow-hidden", class.clone())}>
            <ExchangeLogView
                entries={entries}
                scroll_requests={scroll_requests}
                config={config.clone()}
            />
            <ExampleChips
                examples={config.examples.clone()}
                on_select={on_example}
            />
            <ChatForm
                on_submit={on_submit}
                placeholder={config.messages.placeholder.clone()}
                send_label={config.messages.send_label.clone()}
            />
        </div>
    }
}
