use super::{ExchangeRenderer, context_block, note_block};
use crate::styles::{
    BIASED_BUBBLE_COLORS, FAIR_BUBBLE_COLORS, FLEX_COL_GAP_2, LIGHT_SHADOW, ROUNDED_STANDARD,
    TERTIARY_TEXT, TYPING_BUBBLE_COLORS, USER_BUBBLE_COLORS, combine_styles,
};
use fairchat_core::{Exchange, WidgetConfig, escape_html};

/// Chat bubbles: the user line followed by a biased and a fair bubble
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleRenderer;

fn bubble(role: &str, colors: &str, label: &str, body: &str, extra: &str) -> String {
    format!(
        r#"<div class="message {role}"><div class="bubble {}"><div class="meta {}">{}</div><p class="leading-relaxed break-words">{}</p>{extra}</div></div>"#,
        combine_styles(&["p-4", ROUNDED_STANDARD, LIGHT_SHADOW, colors]),
        combine_styles(&["font-semibold text-sm", TERTIARY_TEXT]),
        escape_html(label),
        escape_html(body),
    )
}

impl ExchangeRenderer for BubbleRenderer {
    fn render_exchange(&self, exchange: &Exchange, config: &WidgetConfig) -> String {
        let messages = &config.messages;
        let biased_extra = note_block(exchange, config) + &context_block(exchange, config);

        format!(
            r#"<div class="exchange {}">{}{}{}</div>"#,
            FLEX_COL_GAP_2,
            bubble(
                "user",
                USER_BUBBLE_COLORS,
                &messages.you_label,
                &exchange.user_text,
                ""
            ),
            bubble(
                "bot biased",
                BIASED_BUBBLE_COLORS,
                &messages.biased_label,
                &exchange.biased,
                &biased_extra,
            ),
            bubble(
                "bot fair",
                FAIR_BUBBLE_COLORS,
                &messages.fair_label,
                &exchange.fair,
                ""
            ),
        )
    }

    fn render_typing(&self, config: &WidgetConfig) -> String {
        bubble(
            "bot typing",
            TYPING_BUBBLE_COLORS,
            &config.messages.typing_label,
            &config.messages.typing_text,
            "",
        )
    }
}
