//! Terminal projection of a [`View`]: search field, grouped cards, status line.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::theme::{Theme, theme};
use super::view::{Card, Notice, NoticeKind, Section, View};
use crate::state::AppState;
use crate::util::truncate_to_width;

/// Indent applied to card detail lines.
const DETAIL_INDENT: &str = "    ";

/// What: Extract the host shown beside a card name.
fn card_host(card: &Card) -> String {
    url::Url::parse(&card.url)
        .ok()
        .and_then(|u| u.host_str().map(ToString::to_string))
        .unwrap_or_default()
}

/// What: Lay out grid sections as terminal lines.
///
/// Inputs:
/// - `sections`: Grid content.
/// - `selected`: Highlighted card index in reading order.
/// - `width`: Available columns.
/// - `th`: Palette.
///
/// Output:
/// - Lines to paint and the line index of the highlighted card's first line.
#[must_use]
pub fn grid_lines(
    sections: &[Section],
    selected: usize,
    width: usize,
    th: &Theme,
) -> (Vec<Line<'static>>, usize) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut selected_line = 0;
    let mut index = 0;
    for (si, section) in sections.iter().enumerate() {
        if si > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(vec![
            Span::styled(
                truncate_to_width(&section.title, width.saturating_sub(8)),
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({})", section.cards.len()),
                Style::default().fg(th.overlay1),
            ),
        ]));
        for card in &section.cards {
            let is_selected = index == selected;
            if is_selected {
                selected_line = lines.len();
            }
            let name_style = if is_selected {
                Style::default()
                    .fg(th.crust)
                    .bg(th.lavender)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(th.text).add_modifier(Modifier::BOLD)
            };
            let marker = if is_selected { "▸ " } else { "  " };
            let name = truncate_to_width(&card.name, width.saturating_sub(4));
            let host_budget = width.saturating_sub(4 + name.width());
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(th.lavender)),
                Span::styled(name, name_style),
                Span::styled(
                    format!("  {}", truncate_to_width(&card_host(card), host_budget)),
                    Style::default().fg(th.overlay1),
                ),
            ]));
            let detail_width = width.saturating_sub(DETAIL_INDENT.len());
            if !card.desc.is_empty() {
                lines.push(Line::from(vec![
                    Span::raw(DETAIL_INDENT),
                    Span::styled(
                        truncate_to_width(&card.desc, detail_width),
                        Style::default().fg(th.subtext0),
                    ),
                ]));
            }
            if !card.tags.is_empty() {
                let tags = card
                    .tags
                    .iter()
                    .map(|t| format!("#{t}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                lines.push(Line::from(vec![
                    Span::raw(DETAIL_INDENT),
                    Span::styled(
                        truncate_to_width(&tags, detail_width),
                        Style::default().fg(th.sapphire),
                    ),
                ]));
            }
            index += 1;
        }
    }
    (lines, selected_line)
}

/// What: Pick the first visible line so the highlighted card stays on screen.
///
/// Inputs:
/// - `selected_line`: Line index of the highlighted card.
/// - `height`: Visible rows.
///
/// Output:
/// - Scroll offset keeping a few rows of context below the selection.
#[must_use]
pub const fn scroll_offset(selected_line: usize, height: usize) -> usize {
    selected_line.saturating_sub(height.saturating_sub(4))
}

/// What: Paint the grid into `area`.
fn draw_grid(f: &mut Frame, area: Rect, sections: &[Section], selected: usize, th: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));
    let inner = block.inner(area);
    let (lines, selected_line) = grid_lines(sections, selected, usize::from(inner.width), th);
    let offset = scroll_offset(selected_line, usize::from(inner.height));
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    f.render_widget(paragraph, area);
}

/// What: Paint a notice card into `area`.
fn draw_notice(f: &mut Frame, area: Rect, notice: &Notice, th: &Theme) {
    let accent = match notice.kind {
        NoticeKind::Error => th.red,
        NoticeKind::Loading => th.yellow,
        NoticeKind::Empty => th.overlay1,
    };
    let text = vec![
        Line::from(Span::styled(
            notice.title.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            notice.body.clone(),
            Style::default().fg(th.subtext0),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(accent)),
        );
    f.render_widget(paragraph, area);
}

/// What: Render one full frame.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; only read.
///
/// Output:
/// - None (side effect: frame content replaced).
pub fn draw(f: &mut Frame, app: &AppState) {
    let th = theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let input_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(th.sapphire)),
        Span::styled(app.input.clone(), Style::default().fg(th.text)),
    ]);
    let search = Paragraph::new(input_line)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(" Search ", Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.sapphire)),
        );
    f.render_widget(search, chunks[0]);
    let cursor_col = u16::try_from(app.input.width() + 2).unwrap_or(u16::MAX);
    let max_x = chunks[0].right().saturating_sub(2);
    f.set_cursor_position(Position::new(
        chunks[0].x.saturating_add(1).saturating_add(cursor_col).min(max_x),
        chunks[0].y + 1,
    ));

    match &app.view {
        View::Grid(sections) => draw_grid(f, chunks[1], sections, app.selected, &th),
        View::Notice(notice) => draw_notice(f, chunks[1], notice, &th),
    }

    let status = Paragraph::new(Line::from(Span::styled(
        app.status_line(),
        Style::default().fg(th.overlay1),
    )))
    .style(Style::default().bg(th.base));
    f.render_widget(status, chunks[2]);
}
