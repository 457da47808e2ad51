// Screen Controller - which top-level screen is visible

/// Top-level screens. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Intro,
    Catalog,
}

impl Screen {
    pub fn title(&self) -> &str {
        match self {
            Screen::Intro => "Início",
            Screen::Catalog => "Personagens",
        }
    }
}

/// View-state collaborator the core drives before presenting output
pub trait ScreenController {
    fn show_intro(&mut self);
    fn show_catalog(&mut self);
    fn is_catalog_visible(&self) -> bool;
}

/// In-memory screen state machine: starts on the intro screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    current: Screen,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn is_intro_visible(&self) -> bool {
        self.current == Screen::Intro
    }
}

impl ScreenController for ScreenState {
    fn show_intro(&mut self) {
        self.current = Screen::Intro;
    }

    fn show_catalog(&mut self) {
        self.current = Screen::Catalog;
    }

    fn is_catalog_visible(&self) -> bool {
        self.current == Screen::Catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_intro() {
        let screen = ScreenState::new();
        assert_eq!(screen.current(), Screen::Intro);
        assert!(!screen.is_catalog_visible());
    }

    #[test]
    fn test_transitions() {
        let mut screen = ScreenState::new();

        screen.show_catalog();
        assert!(screen.is_catalog_visible());
        assert!(!screen.is_intro_visible());

        screen.show_intro();
        assert!(screen.is_intro_visible());
    }

    #[test]
    fn test_show_catalog_is_idempotent() {
        let mut screen = ScreenState::new();
        screen.show_catalog();
        screen.show_catalog();
        assert_eq!(screen.current(), Screen::Catalog);
    }
}
