// 🃏 View Renderer - records in, cards out
//
// The container owns what is currently displayed. Every render replaces the
// previous content wholesale, so repeating a render never accumulates cards.

use crate::record::Record;
use crate::screen::ScreenController;
use serde::Serialize;

/// Label of the outbound link on every card
pub const LINK_LABEL: &str = "Saiba mais";

// ============================================================================
// CARD
// ============================================================================

/// Optional card image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardImage {
    pub src: String,
    pub alt: String,
}

/// Display model of one record, fields in on-card order.
/// Text is kept raw; escaping happens in the output layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub image: Option<CardImage>,
    pub age_label: String,
    pub heading: String,
    pub subheading: String,
    pub body: String,
    pub link: String,
}

impl From<&Record> for Card {
    fn from(record: &Record) -> Self {
        Card {
            image: record.image_url.as_ref().map(|src| CardImage {
                src: src.clone(),
                alt: record.image_alt(),
            }),
            age_label: record.age_label(),
            heading: record.name.clone(),
            subheading: record.title.clone(),
            body: record.description.clone(),
            link: record.link.clone(),
        }
    }
}

// ============================================================================
// DISPLAY
// ============================================================================

/// What the card container shows. The three states never mix.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum Display {
    #[default]
    Empty,
    Cards(Vec<Card>),
    Message(String),
}

impl Display {
    pub fn card_count(&self) -> usize {
        match self {
            Display::Cards(cards) => cards.len(),
            Display::Empty | Display::Message(_) => 0,
        }
    }

    pub fn is_message(&self) -> bool {
        matches!(self, Display::Message(_))
    }
}

/// The area where cards (or a feedback message) are rendered
#[derive(Debug, Clone, Default)]
pub struct CardContainer {
    display: Display,
}

impl CardContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Replace the display with one card per record. No records means an
    /// empty area, not a message.
    pub fn render(&mut self, records: &[&Record]) {
        self.display = if records.is_empty() {
            Display::Empty
        } else {
            Display::Cards(records.iter().map(|record| Card::from(*record)).collect())
        };
    }

    /// Replace the display with a single feedback message.
    ///
    /// The catalog screen is made visible first, otherwise the message would
    /// land behind the intro screen.
    pub fn render_message(&mut self, text: impl Into<String>, screen: &mut impl ScreenController) {
        if !screen.is_catalog_visible() {
            screen.show_catalog();
        }
        self.display = Display::Message(text.into());
    }

    pub fn clear(&mut self) {
        self.display = Display::Empty;
    }
}

// ============================================================================
// TESTS
// ============================================================================
