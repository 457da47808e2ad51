use anyhow::Result;
use character_catalog::{Action, Browser, Card, Category, Display, Screen};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    pub browser: Browser,
    pub search: String,
    pub input_mode: InputMode,
    pub state: ListState,
}

impl App {
    pub fn new(browser: Browser) -> Self {
        Self {
            browser,
            search: String::new(),
            input_mode: InputMode::Normal,
            state: ListState::default(),
        }
    }

    /// Run an action and reset the selection to the first card
    pub fn dispatch(&mut self, action: Action) {
        let count = self.browser.dispatch(action).card_count();
        self.state.select(if count > 0 { Some(0) } else { None });
    }

    fn search_changed(&mut self) {
        self.dispatch(Action::Search(self.search.clone()));
    }

    /// Returns false when the user asked to quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        if self.input_mode == InputMode::Editing {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
                KeyCode::Backspace => {
                    self.search.pop();
                    self.search_changed();
                }
                KeyCode::Char(c) => {
                    self.search.push(c);
                    self.search_changed();
                }
                _ => {}
            }
            return true;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Enter if self.browser.screen() == Screen::Intro => self.dispatch(Action::Start),
            KeyCode::Char('/') | KeyCode::Char('s') => {
                if self.browser.screen() == Screen::Intro {
                    self.dispatch(Action::Start);
                }
                self.input_mode = InputMode::Editing;
            }
            KeyCode::Char('h') => self.dispatch(Action::Home),
            KeyCode::Char('r') => self.dispatch(Action::RealWorld),
            KeyCode::Char('o') => self.dispatch(Action::OtherWorld),
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Home => {
                if self.card_count() > 0 {
                    self.state.select(Some(0));
                }
            }
            KeyCode::End => {
                let len = self.card_count();
                if len > 0 {
                    self.state.select(Some(len - 1));
                }
            }
            _ => {}
        }
        true
    }

    fn card_count(&self) -> usize {
        self.browser.display().card_count()
    }

    pub fn next(&mut self) {
        let len = self.card_count();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.card_count();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && !app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let area = f.size();
    match app.browser.screen() {
        Screen::Intro => render_intro(f, area),
        Screen::Catalog => render_catalog(f, app),
    }
}

fn render_intro(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Personagens",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Conheça os personagens do mundo real e do outro mundo."),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" começar  "),
            Span::styled("r", Style::default().fg(Color::Yellow)),
            Span::raw(" mundo real  "),
            Span::styled("o", Style::default().fg(Color::Yellow)),
            Span::raw(" outro mundo  "),
            Span::styled("q", Style::default().fg(Color::Red)),
            Span::raw(" sair"),
        ]),
    ];

    let intro = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" {} ", Screen::Intro.title())),
        );

    f.render_widget(intro, area);
}

fn render_catalog(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search field
            Constraint::Min(0),    // Card container
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_search(f, chunks[0], app);

    match app.browser.display() {
        Display::Empty => {
            let empty = Paragraph::new("").block(container_block());
            f.render_widget(empty, chunks[1]);
        }
        Display::Message(text) => {
            let message = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    text.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(container_block());
            f.render_widget(message, chunks[1]);
        }
        Display::Cards(cards) => {
            let width = chunks[1].width.saturating_sub(6) as usize;
            let items: Vec<ListItem> = cards.iter().map(|card| card_item(card, width)).collect();
            let list = List::new(items)
                .block(container_block())
                .highlight_style(Style::default().bg(Color::DarkGray))
                .highlight_symbol("→ ");
            f.render_stateful_widget(list, chunks[1], &mut app.state);
        }
    }

    render_status_bar(f, chunks[2], app);
}

fn container_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(format!(" {} ", Screen::Catalog.title()))
}

fn render_search(f: &mut Frame, area: Rect, app: &App) {
    let style = match app.input_mode {
        InputMode::Editing => Style::default().fg(Color::Yellow),
        InputMode::Normal => Style::default().fg(Color::White),
    };

    let input = Paragraph::new(app.search.as_str()).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Buscar personagem "),
    );
    f.render_widget(input, area);

    if app.input_mode == InputMode::Editing {
        let x = area.x + 1 + app.search.chars().count() as u16;
        f.set_cursor(x.min(area.right().saturating_sub(2)), area.y + 1);
    }
}

fn card_item(card: &Card, width: usize) -> ListItem<'static> {
    let mut lines = Vec::new();

    if let Some(image) = &card.image {
        lines.push(Line::from(Span::styled(
            format!("🖼  {}", image.alt),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(Span::styled(
        card.age_label.clone(),
        Style::default().fg(Color::Cyan),
    )));
    lines.push(Line::from(Span::styled(
        card.heading.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        card.subheading.clone(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC),
    )));
    for line in wrap_text(&card.body, width.max(20)) {
        lines.push(Line::from(line));
    }
    lines.push(Line::from(vec![
        Span::styled("Saiba mais: ", Style::default().fg(Color::Green)),
        Span::styled(card.link.clone(), Style::default().fg(Color::Blue)),
    ]));
    lines.push(Line::from(""));

    ListItem::new(lines)
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.state.selected().map(|i| i + 1).unwrap_or(0);
    let total = app.card_count();

    let mut status_spans = vec![Span::styled(
        format!(" Card: {}/{} ", selected, total),
        Style::default().fg(Color::Cyan),
    )];

    if app.input_mode == InputMode::Editing {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled("Enter/Esc", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" fim da busca"));
    } else {
        for (key, label) in [
            ("/", " Buscar | ".to_string()),
            ("r", format!(" {} | ", Category::RealWorld.label())),
            ("o", format!(" {} | ", Category::OtherWorld.label())),
            ("h", " Início | ".to_string()),
            ("↑/↓", " Navegar | ".to_string()),
        ] {
            status_spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(label));
        }
        status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
        status_spans.push(Span::raw(" Sair"));
    }

    let status_bar = Paragraph::new(Line::from(status_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        let needed = current_line.chars().count() + word.chars().count() + 1;
        if !current_line.is_empty() && needed > width {
            lines.push(std::mem::take(&mut current_line));
        }
        if !current_line.is_empty() {
            current_line.push(' ');
        }
        current_line.push_str(word);
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    const CATALOG: &str = r#"[
        {"nome":"Coraline","titulo":"A Garota","descricao":"...","idade_aproximada":11,"link":"x"},
        {"nome":"Outra Mãe","titulo":"A Beldam","descricao":"...","idade_aproximada":"desconhecida","link":"y"}
    ]"#;

    fn app() -> App {
        let mut browser = Browser::new();
        browser.load_str(CATALOG).unwrap();
        App::new(browser)
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_enter_starts_catalog() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.browser.screen(), Screen::Catalog);
        assert_eq!(app.card_count(), 2);
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_typing_searches_on_every_keystroke() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Editing);

        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.card_count(), 1);

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.browser.display(), &Display::Empty);
        assert_eq!(app.state.selected(), None);
    }

    #[test]
    fn test_category_keys_work_from_intro() {
        let mut app = app();
        press(&mut app, KeyCode::Char('o'));

        assert_eq!(app.browser.screen(), Screen::Catalog);
        assert_eq!(app.card_count(), 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(press(&mut app, KeyCode::Char('r')));
        assert!(!press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.state.selected(), Some(1));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_draws_cards_and_message() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        press(&mut app, KeyCode::Enter);
        terminal.draw(|f| ui(f, &mut app)).unwrap();
        assert!(screen_text(&terminal).contains("Coraline"));

        press(&mut app, KeyCode::Char('/'));
        for c in "zz".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        terminal.draw(|f| ui(f, &mut app)).unwrap();
        assert!(screen_text(&terminal).contains("Nenhum personagem"));
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("um dois tres", 7), vec!["um dois", "tres"]);
        assert!(wrap_text("", 10).is_empty());
    }
}
