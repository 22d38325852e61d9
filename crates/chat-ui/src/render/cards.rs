use super::{ExchangeRenderer, context_block, note_block};
use crate::styles::{
    BIASED_CARD_COLORS, CARD_BG, CARD_GRID, FAIR_CARD_COLORS, FLEX_COL_GAP_2, LIGHT_SHADOW,
    PRIMARY_BORDER, ROUNDED_STANDARD, SECONDARY_TEXT, STANDARD_PADDING, TERTIARY_TEXT,
    combine_styles,
};
use fairchat_core::{Exchange, WidgetConfig, escape_html};

/// Cards: the prompt on top, biased and fair answers side by side below
#[derive(Debug, Clone, Copy, Default)]
pub struct CardRenderer;

fn card(kind: &str, colors: &str, label: &str, body: &str, extra: &str) -> String {
    format!(
        r#"<section class="card {kind} {}"><h3 class="card-label {}">{}</h3><p class="leading-relaxed break-words">{}</p>{extra}</section>"#,
        combine_styles(&[STANDARD_PADDING, ROUNDED_STANDARD, "border", colors]),
        combine_styles(&["font-semibold text-sm mb-1", TERTIARY_TEXT]),
        escape_html(label),
        escape_html(body),
    )
}

impl ExchangeRenderer for CardRenderer {
    fn render_exchange(&self, exchange: &Exchange, config: &WidgetConfig) -> String {
        let messages = &config.messages;
        let biased_extra = note_block(exchange, config) + &context_block(exchange, config);

        format!(
            r#"<article class="exchange-card {}"><header class="prompt {}"><span class="card-label {}">{}</span><p>{}</p></header><div class="card-grid {}">{}{}</div></article>"#,
            combine_styles(&[FLEX_COL_GAP_2, STANDARD_PADDING, ROUNDED_STANDARD, CARD_BG, LIGHT_SHADOW, "border", PRIMARY_BORDER]),
            SECONDARY_TEXT,
            combine_styles(&["font-semibold text-sm", TERTIARY_TEXT]),
            escape_html(&messages.you_label),
            escape_html(&exchange.user_text),
            CARD_GRID,
            card(
                "biased",
                BIASED_CARD_COLORS,
                &messages.biased_label,
                &exchange.biased,
                &biased_extra,
            ),
            card(
                "fair",
                FAIR_CARD_COLORS,
                &messages.fair_label,
                &exchange.fair,
                ""
            ),
        )
    }

    fn render_typing(&self, config: &WidgetConfig) -> String {
        format!(
            r#"<article class="exchange-card typing {}"><span class="card-label {}">{}</span><p class="italic">{}</p></article>"#,
            combine_styles(&[STANDARD_PADDING, ROUNDED_STANDARD, CARD_BG, "border animate-pulse", PRIMARY_BORDER]),
            combine_styles(&["font-semibold text-sm", TERTIARY_TEXT]),
            escape_html(&config.messages.typing_label),
            escape_html(&config.messages.typing_text),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairchat_core::RespondResponse;

    #[test]
    fn test_cards_share_one_grid() {
        let exchange = Exchange::from_response("U", RespondResponse::new("B", "F"));
        let markup = CardRenderer.render_exchange(&exchange, &WidgetConfig::default());

        let grid = markup.find("card-grid").unwrap();
        assert!(markup.find("card biased").unwrap() > grid);
        assert!(markup.find("card fair").unwrap() > grid);
        assert!(markup.ends_with("</div></article>"));
    }
}
