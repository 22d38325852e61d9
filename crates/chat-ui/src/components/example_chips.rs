use crate::styles::{CHIP_BUTTON, FLEX_CENTER_GAP_2, HEADER_PADDING, combine_styles};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExampleChipsProps {
    pub examples: Vec<String>,
    pub on_select: Callback<String>,
}

/// One button per preset prompt
#[function_component(ExampleChips)]
pub fn example_chips(props: &ExampleChipsProps) -> Html {
    if props.examples.is_empty() {
        return html! {};
    }

    html! {
        <div class={combine_styles(&[FLEX_CENTER_GAP_2, "flex-wrap", HEADER_PADDING])}>
            {for props.examples.iter().map(|example| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    let example = example.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(example.clone()))
                };
                html! {
                    <button
                        type="button"
                        class={classes!("chip", CHIP_BUTTON)}
                        data-example={example.clone()}
                        {onclick}
                    >
                        {example}
                    </button>
                }
            })}
        </div>
    }
}
