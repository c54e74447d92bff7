//! Coinlist TUI - Actor-based cryptocurrency price board
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async market data fetches

mod app;
mod constants;
mod messages;
mod models;
mod network;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::commands::currency_codes;
use app::store::UiState;
use app::AppActor;
use messages::ui_events::key_to_ui_event;
use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use models::CoinListItem;
use network::MarketActor;
use ui::{coin_row, currency_selector, price_line, tendency_color, tendency_text};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "coinlist.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn market actor
    let market_actor = MarketActor::new(net_resp_tx);
    tokio::spawn(market_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.show_help,
                    current_state.detail.is_some(),
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header: title + currency selector
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, state, main_chunks[0]);

    match &state.ui_state {
        UiState::Loading => draw_loading(f, main_chunks[1]),
        UiState::Error(cause) => draw_error(f, cause, main_chunks[1]),
        UiState::Success(items) => draw_coin_list(f, state, items, main_chunks[1]),
    }

    draw_status_bar(f, state, main_chunks[2]);

    // Popups
    if let Some(item) = &state.detail {
        draw_detail_popup(f, item, state, area);
    }

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let refreshing = if state.refreshing { " [refreshing]" } else { "" };
    let fetched = state
        .fetched_at
        .map(|t| format!(" updated {}", t.format("%H:%M:%S")))
        .unwrap_or_default();

    let title = Line::from(vec![
        Span::styled("Cryptocurrency prices", Style::default().bold()),
        Span::styled(fetched, Style::default().fg(Color::DarkGray)),
        Span::styled(refreshing, Style::default().fg(Color::Cyan)),
    ]);

    let lines = vec![
        title,
        currency_selector(&currency_codes(), state.chosen_currency),
    ];
    let header = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn draw_loading(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(area);

    let busy = Paragraph::new(Line::from(Span::styled(
        "Loading...",
        Style::default().fg(Color::Cyan).bold(),
    )))
    .centered();
    f.render_widget(busy, chunks[1]);
}

fn draw_error(f: &mut Frame, cause: &str, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Percentage(40),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            "Could not load coin list",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(Span::styled(
            cause.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Press Enter or 'r' to retry",
            Style::default().fg(Color::Yellow),
        )),
    ];
    let error = Paragraph::new(lines).centered().wrap(Wrap { trim: true });
    f.render_widget(error, chunks[1]);
}

fn draw_coin_list(f: &mut Frame, state: &RenderState, items: &[CoinListItem], area: Rect) {
    if items.is_empty() {
        let empty = Paragraph::new("No coins returned. Press 'r' to refresh.")
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| coin_row(item, area.width.saturating_sub(2)))
        .collect();

    let list = List::new(rows)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_coin));

    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = match &state.ui_state {
        UiState::Loading => " Loading... | q:quit ",
        UiState::Error(_) => " Enter/r:retry | 1/2:currency | ?:help | q:quit ",
        UiState::Success(_) => " ↑/↓:select | Enter:detail | r:refresh | 1/2:currency | ?:help | q:quit ",
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_detail_popup(f: &mut Frame, item: &CoinListItem, state: &RenderState, area: Rect) {
    let popup_area = centered_rect(60, 40, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", item.detail_id()))
        .style(Style::default().bg(Color::Black));

    let fetched = state
        .fetched_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| String::from("unknown"));

    let lines = vec![
        Line::from(vec![
            Span::styled("Name:     ", Style::default().fg(Color::DarkGray)),
            Span::styled(item.name.clone(), Style::default().bold()),
        ]),
        Line::from(vec![
            Span::styled("Symbol:   ", Style::default().fg(Color::DarkGray)),
            Span::raw(item.symbol.to_uppercase()),
        ]),
        Line::from(vec![
            Span::styled("Price:    ", Style::default().fg(Color::DarkGray)),
            Span::raw(price_line(item)),
        ]),
        Line::from(vec![
            Span::styled("24h:      ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                tendency_text(item.tendency),
                Style::default().fg(tendency_color(item.tendency)),
            ),
        ]),
        Line::from(vec![
            Span::styled("Image:    ", Style::default().fg(Color::DarkGray)),
            Span::raw(item.image_url.clone()),
        ]),
        Line::from(vec![
            Span::styled("Fetched:  ", Style::default().fg(Color::DarkGray)),
            Span::raw(fetched),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Esc to close",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let detail = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(detail, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(50, 55, area);

    let help_text = r#"
 COINLIST TUI - Keyboard Shortcuts

 LIST
   ↑ / ↓  or  k / j   Select coin
   Enter              Open coin detail

 DATA
   r                  Refresh list / retry after error
   1 / 2              Price in USD / RUB

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
