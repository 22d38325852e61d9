//! Presentation strategies for exchanges
//!
//! Renderers build markup strings. Every interpolated value, including the
//! configured labels, passes through [`escape_html`] first, so the output can
//! be inserted with `Html::from_html_unchecked`.

mod bubbles;
mod cards;

pub use bubbles::BubbleRenderer;
pub use cards::CardRenderer;

use crate::styles::{FLEX_CENTER_GAP_2, NOTE_STYLE, TAG_STYLE, combine_styles};
use fairchat_core::{Exchange, Layout, WidgetConfig, escape_html};

/// Turns log entries into markup
pub trait ExchangeRenderer {
    /// Markup for one settled exchange
    fn render_exchange(&self, exchange: &Exchange, config: &WidgetConfig) -> String;

    /// Markup for the placeholder shown while a request is in flight
    fn render_typing(&self, config: &WidgetConfig) -> String;
}

static BUBBLES: BubbleRenderer = BubbleRenderer;
static CARDS: CardRenderer = CardRenderer;

/// The renderer for a configured layout
pub fn renderer_for(layout: Layout) -> &'static dyn ExchangeRenderer {
    match layout {
        Layout::Bubbles => &BUBBLES,
        Layout::Cards => &CARDS,
    }
}

/// Bias explanation, or nothing when the exchange has none
fn note_block(exchange: &Exchange, config: &WidgetConfig) -> String {
    if !exchange.has_bias_note() {
        return String::new();
    }
    format!(
        r#"<div class="note {}">{} {}</div>"#,
        NOTE_STYLE,
        escape_html(&config.messages.note_prefix),
        escape_html(&exchange.bias_note)
    )
}

/// Classification tags, rendered only when enabled and present
fn context_block(exchange: &Exchange, config: &WidgetConfig) -> String {
    if !config.show_context || exchange.context.is_empty() {
        return String::new();
    }
    let tags: String = exchange
        .context
        .iter()
        .map(|tag| format!(r#"<span class="tag {}">{}</span>"#, TAG_STYLE, escape_html(tag)))
        .collect();
    format!(
        r#"<div class="tags {}">{}</div>"#,
        combine_styles(&[FLEX_CENTER_GAP_2, "flex-wrap mt-1"]),
        tags
    )
}
