// Plain-text rendering of the card container, for terminal output

use crate::render::{Card, Display, LINK_LABEL};

pub fn render_card(card: &Card) -> String {
    let mut lines = Vec::new();
    if let Some(image) = &card.image {
        lines.push(format!("[{}] {}", image.alt, image.src));
    }
    lines.push(card.age_label.clone());
    lines.push(card.heading.to_uppercase());
    lines.push(card.subheading.clone());
    lines.push(card.body.clone());
    lines.push(format!("{}: {}", LINK_LABEL, card.link));
    lines.join("\n")
}

pub fn render_display(display: &Display) -> String {
    match display {
        Display::Empty => String::new(),
        Display::Cards(cards) => cards
            .iter()
            .map(render_card)
            .collect::<Vec<_>>()
            .join("\n\n────────────────────────────────────────\n\n"),
        Display::Message(text) => format!("» {}", text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn test_card_text() {
        let record = Record::new("Coraline", "A Garota", "Exploradora", 11, "x");
        let text = render_card(&Card::from(&record));

        assert_eq!(
            text,
            "Idade aproximada: 11\nCORALINE\nA Garota\nExploradora\nSaiba mais: x"
        );
    }

    #[test]
    fn test_message_and_empty() {
        assert_eq!(render_display(&Display::Empty), "");
        assert_eq!(render_display(&Display::Message("oi".to_string())), "» oi");
    }
}
