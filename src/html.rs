// HTML output for the card container and the full page.
// All record text is untrusted and goes through `escape` on the way out.

use crate::render::{Card, Display, LINK_LABEL};
use crate::screen::Screen;
use std::fmt::Write;

/// Escape text for use in element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Neutralize `javascript:` style links; anything else is only escaped.
///
/// The scheme is read the way browsers parse it: leading C0 controls and
/// spaces are skipped, and ASCII tab, LF and CR are dropped anywhere.
fn safe_href(url: &str) -> String {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();
    let scheme = cleaned
        .split_once(':')
        .map(|(scheme, _)| scheme.to_ascii_lowercase());
    match scheme.as_deref() {
        Some("javascript") | Some("data") | Some("vbscript") => "#".to_string(),
        _ => escape(url),
    }
}

/// One `<article class="card">`
pub fn render_card(card: &Card) -> String {
    let mut html = String::from("<article class=\"card\">\n");

    if let Some(image) = &card.image {
        let _ = writeln!(
            html,
            "  <img src=\"{}\" alt=\"{}\" class=\"card-img\">",
            safe_href(&image.src),
            escape(&image.alt)
        );
    }
    let _ = writeln!(html, "  <p class=\"idade\">{}</p>", escape(&card.age_label));
    let _ = writeln!(html, "  <h2>{}</h2>", escape(&card.heading));
    let _ = writeln!(html, "  <h4>{}</h4>", escape(&card.subheading));
    let _ = writeln!(html, "  <p>{}</p>", escape(&card.body));
    let _ = writeln!(
        html,
        "  <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        safe_href(&card.link),
        LINK_LABEL
    );

    html.push_str("</article>\n");
    html
}

/// Inner HTML of the card container
pub fn render_display(display: &Display) -> String {
    match display {
        Display::Empty => String::new(),
        Display::Cards(cards) => cards.iter().map(render_card).collect(),
        Display::Message(text) => format!(
            "<div class=\"mensagem-feedback\">\n  <h3>{}</h3>\n</div>\n",
            escape(text)
        ),
    }
}

fn hidden(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " escondido"
    }
}

/// Full document: intro screen, header with search and category buttons,
/// and the card container.
pub fn render_page(screen: Screen, display: &Display) -> String {
    let intro_hidden = hidden(screen == Screen::Intro);
    let catalog_hidden = hidden(screen == Screen::Catalog);

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Personagens</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <section id="intro-screen" class="intro{intro_hidden}">
    <h1>Personagens</h1>
    <button id="iniciar-app-btn">Começar</button>
  </section>
  <header>
    <input type="text" placeholder="Buscar personagem..." autocomplete="off">
    <nav>
      <button id="btn-inicio">Início</button>
      <button id="btn-mundo-real">Mundo Real</button>
      <button id="btn-outro-mundo">Outro Mundo</button>
    </nav>
  </header>
  <main class="card-container{catalog_hidden}">
{cards}  </main>
  <script src="/static/app.js"></script>
</body>
</html>
"#,
        cards = render_display(display),
    )
}
