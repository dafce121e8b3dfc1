//! Modal overlays drawn above the workspace.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use folio_engine::{App, ContactField, ContactStatus, Overlay, shortcut_rows};
use folio_types::{DraftInput, ThemeId};

use crate::theme::{Glyphs, Palette, styles};
use crate::{cursor_offset, file_icon};

const FIELD_PREFIX: &str = "> ";

/// Draw `overlay` and return the input cursor position when it has a text
/// field.
pub(crate) fn draw_overlay(
    frame: &mut Frame,
    app: &App,
    overlay: Overlay,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Option<Position> {
    match overlay {
        Overlay::Palette => Some(draw_palette(frame, app, palette)),
        Overlay::Find => Some(draw_find(frame, app, palette)),
        Overlay::Shortcuts => {
            draw_shortcuts(frame, app, palette);
            None
        }
        Overlay::ThemePicker => {
            draw_theme_picker(frame, app, palette, glyphs);
            None
        }
        Overlay::NewFile => Some(draw_new_file(frame, app, palette, glyphs)),
        Overlay::Contact => draw_contact(frame, app, palette, glyphs),
    }
}

/// Horizontally centered box, a third of the way down.
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4)).max(1);
    let height = height.min(area.height).max(1);
    let y = area.y + (area.height / 3).min(area.height.saturating_sub(height));
    Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y,
        width,
        height,
    }
}

fn popup_block<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::popup_border(palette))
        .style(Style::default().bg(palette.bg_popup))
        .title(Line::from(vec![Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )]))
}

/// Render `lines` inside a cleared, bordered popup and return the inner area.
fn render_popup(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'_>>,
    palette: &Palette,
) -> Rect {
    frame.render_widget(Clear, area);
    let block = popup_block(title, palette);
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
    inner
}

fn input_line(input: &DraftInput, placeholder: &str, palette: &Palette) -> Line<'static> {
    let prefix = Span::styled(FIELD_PREFIX, Style::default().fg(palette.accent));
    if input.is_empty() {
        Line::from(vec![
            prefix,
            Span::styled(
                placeholder.to_string(),
                styles::muted(palette).add_modifier(Modifier::ITALIC),
            ),
        ])
    } else {
        Line::from(vec![
            prefix,
            Span::styled(input.text().to_string(), Style::default().fg(palette.text)),
        ])
    }
}

fn input_cursor(inner: Rect, row: u16, input: &DraftInput) -> Position {
    let prefix = u16::try_from(FIELD_PREFIX.len()).unwrap_or(0);
    let x = inner.x.saturating_add(prefix).saturating_add(cursor_offset(input));
    Position::new(
        x.min(inner.right().saturating_sub(1)),
        inner.y.saturating_add(row),
    )
}

fn draw_palette(frame: &mut Frame, app: &App, palette: &Palette) -> Position {
    let state = app.palette();
    let matches = state.matches();

    let mut lines = vec![input_line(&state.filter, "Search files by name", palette)];
    lines.push(Line::from(""));
    if matches.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No matching files",
            styles::muted(palette),
        )));
    } else {
        for (idx, file) in matches.iter().enumerate() {
            let row = Line::from(vec![
                Span::raw("  "),
                file_icon(file.label, palette),
                Span::styled(file.label, Style::default().fg(palette.text)),
                Span::styled(format!("  {}", file.description), styles::muted(palette)),
            ]);
            if idx == state.selected_index() {
                lines.push(row.style(styles::selected_row(palette)));
            } else {
                lines.push(row);
            }
        }
    }

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = popup_area(frame.area(), 60, height);
    let inner = render_popup(frame, area, "Go to File", lines, palette);
    input_cursor(inner, 0, &state.filter)
}

fn draw_find(frame: &mut Frame, app: &App, palette: &Palette) -> Position {
    let find = app.find();
    let label_style = if find.total() == 0 && !find.query.is_empty() {
        Style::default().fg(palette.error)
    } else {
        styles::muted(palette)
    };

    let mut lines = vec![
        input_line(&find.query, "Find", palette),
        Line::from(Span::styled(format!("  {}", find.label()), label_style)),
    ];
    if find.show_replace {
        lines.push(input_line(&find.replace, "Replace", palette));
    }

    let width = 40.min(frame.area().width);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX) + 2;
    let screen = frame.area();
    let area = Rect {
        x: screen.right().saturating_sub(width + 1),
        y: screen.y + 1,
        width,
        height: height.min(screen.height),
    };
    let inner = render_popup(frame, area, "Find", lines, palette);
    input_cursor(inner, 0, &find.query)
}

fn draw_shortcuts(frame: &mut Frame, app: &App, palette: &Palette) {
    let key_style = Style::default().fg(palette.accent);
    let mut lines = vec![Line::from("")];
    for (keys, description) in shortcut_rows(app.settings().platform) {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<12}"), key_style),
            Span::styled(description, Style::default().fg(palette.text)),
        ]));
    }
    lines.push(Line::from(""));
    for (keys, description) in [
        ("Tab", "Switch explorer / content"),
        ("[ ]", "Previous / next tab"),
        ("v", "Cycle view mode"),
        ("e", "Edit scratch file"),
        ("n", "New file"),
        ("t", "Toggle terminal"),
        ("T", "Choose theme"),
        ("c", "Contact"),
        ("Ctrl+R", "Reload"),
        ("q", "Quit"),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<12}"), key_style),
            Span::styled(description, styles::muted(palette)),
        ]));
    }

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX) + 2;
    let area = popup_area(frame.area(), 50, height);
    render_popup(frame, area, "Keyboard Shortcuts", lines, palette);
}

fn draw_theme_picker(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let active = app.theme().active();
    let lines: Vec<Line> = ThemeId::ALL
        .iter()
        .enumerate()
        .map(|(idx, theme)| {
            let marker = if *theme == active { glyphs.check } else { " " };
            let row = Line::from(vec![
                Span::styled(format!(" {marker} "), Style::default().fg(palette.success)),
                Span::styled(theme.display_name(), Style::default().fg(palette.text)),
            ]);
            if idx == app.theme_cursor() {
                row.style(styles::selected_row(palette))
            } else {
                row
            }
        })
        .collect();

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX) + 2;
    let area = popup_area(frame.area(), 30, height);
    render_popup(frame, area, "Color Theme", lines, palette);
}

fn draw_new_file(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) -> Position {
    let dialog = app.new_file_dialog();
    let mut lines = vec![input_line(&dialog.name, "untitled.ts", palette)];
    match dialog.error() {
        Some(err) => lines.push(Line::from(Span::styled(
            format!("  {} {err}", glyphs.error),
            Style::default().fg(palette.error),
        ))),
        None => lines.push(Line::from("")),
    }
    lines.push(Line::from(Span::styled(
        "  .ts .json .md or plain text. Enter to create",
        styles::muted(palette),
    )));

    let area = popup_area(frame.area(), 50, 5);
    let inner = render_popup(frame, area, "New File", lines, palette);
    input_cursor(inner, 0, &dialog.name)
}

fn draw_contact(
    frame: &mut Frame,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Option<Position> {
    let form = app.contact();
    let mut lines = Vec::new();
    let mut cursor_row = 0;
    for field in ContactField::ALL {
        let focused = field == form.focus();
        let label_style = if focused {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            styles::muted(palette)
        };
        lines.push(Line::from(Span::styled(
            format!("  {}", field.label()),
            label_style,
        )));
        if focused {
            cursor_row = lines.len();
        }
        lines.push(input_line(form.field(field), "", palette));
    }
    lines.push(Line::from(""));

    let status = form.status();
    let status_style = match status {
        ContactStatus::Idle => Style::default().fg(palette.accent),
        ContactStatus::Sending => styles::muted(palette),
        ContactStatus::Success { .. } => Style::default().fg(palette.success),
        ContactStatus::Error { .. } => Style::default().fg(palette.error),
    };
    lines.push(Line::from(Span::styled(
        format!("  [ {} ]", status.label()),
        status_style.add_modifier(Modifier::BOLD),
    )));
    if let Some(message) = form.validation() {
        lines.push(Line::from(Span::styled(
            format!("  {} {message}", glyphs.warning),
            Style::default().fg(palette.warning),
        )));
    }

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX) + 2;
    let area = popup_area(frame.area(), 56, height);
    let inner = render_popup(frame, area, "Contact", lines, palette);
    let row = u16::try_from(cursor_row).unwrap_or(0);
    (status == ContactStatus::Idle).then(|| input_cursor(inner, row, form.field(form.focus())))
}
