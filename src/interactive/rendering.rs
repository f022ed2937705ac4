//! TUI rendering with ratatui

use super::app::{App, HistoryEntry, InputMode, MessageStyle};
use crate::config::StylePalette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Attempts
            Constraint::Percentage(50), // Messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let banner = &app.session.config().banner;
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", banner.title),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(0x36, 0xBB, 0x09))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(banner.tagline.clone(), Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(header, area);
}

/// One attempt as coloured letter tiles
fn attempt_line(entry: &HistoryEntry, palette: &StylePalette) -> Line<'static> {
    let spans: Vec<Span> = entry
        .guess
        .letters()
        .iter()
        .zip(&entry.feedback)
        .map(|(&letter, &feedback)| {
            Span::styled(
                format!(" {} ", char::from(letter).to_ascii_uppercase()),
                Style::default()
                    .fg(Color::Black)
                    .bg(to_tui_color(palette.color_for(feedback)))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let palette = &app.session.config().palette;
    let mut lines: Vec<Line> = app
        .history
        .iter()
        .map(|entry| attempt_line(entry, palette))
        .collect();

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "_ ".repeat(app.round.target().len()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let title = format!(" {} letters ", app.round.target().len());
    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match &app.input_mode {
        InputMode::WinCelebration(emoji) => (
            format!(" {emoji} {emoji} {emoji} | Enter: next word, q: quit "),
            String::new(),
            Color::Green,
        ),
        InputMode::Spelling => (
            format!(" {} ", app.round.prompt()),
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Enter: submit (empty = hint) | TAB: repeat word | Esc: quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// Map a terminal colour name onto ratatui's palette
#[allow(unreachable_patterns)] // colored may grow variants
fn to_tui_color(color: colored::Color) -> Color {
    use colored::Color as C;

    match color {
        C::Black => Color::Black,
        C::Red => Color::Red,
        C::Green => Color::Green,
        C::Yellow => Color::Yellow,
        C::Blue => Color::Blue,
        C::Magenta => Color::Magenta,
        C::Cyan => Color::Cyan,
        C::White => Color::Gray,
        C::BrightBlack => Color::DarkGray,
        C::BrightRed => Color::LightRed,
        C::BrightGreen => Color::LightGreen,
        C::BrightYellow => Color::LightYellow,
        C::BrightBlue => Color::LightBlue,
        C::BrightMagenta => Color::LightMagenta,
        C::BrightCyan => Color::LightCyan,
        C::BrightWhite => Color::White,
        C::TrueColor { r, g, b } => Color::Rgb(r, g, b),
        _ => Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::{Word, classify_guess};
    use crate::dictionary::OfflineLookup;
    use crate::game::Session;
    use crate::speech::SilentSpeaker;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn default_palette_maps_to_classic_tiles() {
        let palette = StylePalette::default();
        assert_eq!(to_tui_color(palette.exact), Color::Green);
        assert_eq!(to_tui_color(palette.present), Color::Yellow);
        assert_eq!(to_tui_color(palette.absent), Color::DarkGray);
        assert_eq!(
            to_tui_color(colored::Color::TrueColor { r: 1, g: 2, b: 3 }),
            Color::Rgb(1, 2, 3)
        );
    }

    #[test]
    fn attempt_line_has_one_tile_per_letter() {
        let word = Word::new("hotel").unwrap();
        let guess = Word::new("leath").unwrap();
        let entry = HistoryEntry {
            feedback: classify_guess(&word, &guess).unwrap(),
            guess,
        };

        let line = attempt_line(&entry, &StylePalette::default());
        assert_eq!(line.spans.len(), 5);
        assert_eq!(line.spans[0].content, " L ");
        assert_eq!(line.spans[0].style.bg, Some(Color::Yellow));
        assert_eq!(line.spans[2].style.bg, Some(Color::DarkGray));
    }

    #[test]
    fn full_screen_renders_board_and_prompt() {
        let mut config = GameConfig::default();
        config.dictionary.enabled = false;
        let mut session = Session::new(
            config,
            vec![Word::new("hotel").unwrap()],
            vec!["🎉".to_string()],
            Box::new(SilentSpeaker),
            Box::new(OfflineLookup),
            StdRng::seed_from_u64(3),
        )
        .unwrap();
        let mut app = App::new(&mut session).unwrap();
        app.input_buffer = "leath".to_string();
        app.submit();

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("1kwords"));
        assert!(text.contains("5 letters"));
        assert!(text.contains(" L  E  A  T  H "));
        assert!(text.contains("Try again"));
    }
}
