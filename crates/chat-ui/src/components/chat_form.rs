use crate::styles::{
    CARD_BG, FLEX_CENTER_GAP_2, INPUT_BASE, INPUT_COLORS, PRIMARY_BORDER, PRIMARY_BUTTON,
    STANDARD_PADDING, combine_styles,
};
use fairchat_core::InputField;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// The form's text field, handed to the widget on submit
#[derive(Clone, PartialEq)]
pub struct InputHandle(NodeRef);

impl InputField for InputHandle {
    fn value(&self) -> String {
        self.0
            .cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn clear(&self) {
        if let Some(input) = self.0.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatFormProps {
    pub on_submit: Callback<InputHandle>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("Send"))]
    pub send_label: AttrValue,
}

#[function_component(ChatForm)]
pub fn chat_form(props: &ChatFormProps) -> Html {
    let input_ref = use_node_ref();

    let onsubmit = {
        let input_ref = input_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(InputHandle(input_ref.clone()));
        })
    };

    html! {
        <form
            id="chat-form"
            class={combine_styles(&[FLEX_CENTER_GAP_2, "gap-3", STANDARD_PADDING, CARD_BG, "border-t", PRIMARY_BORDER])}
            {onsubmit}
        >
            <input
                ref={input_ref}
                id="chat-input"
                type="text"
                autocomplete="off"
                placeholder={props.placeholder.clone()}
                class={combine_styles(&[INPUT_BASE, INPUT_COLORS, "flex-1"])}
            />
            <button type="submit" class={PRIMARY_BUTTON}>{props.send_label.clone()}</button>
        </form>
    }
}
