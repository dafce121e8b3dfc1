//! TUI rendering for Folio using ratatui.

mod input;
mod markdown;
mod overlays;
mod source;
mod theme;

pub use input::{InputPump, handle_events, key_input};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use folio_engine::{
    App, Block as DocBlock, DocLine, Document, ExplorerRow, Focus, LineKind, LineRole,
    SessionState, TERMINAL_SCRIPT,
};
use folio_types::{DraftInput, FileKind};

pub use self::markdown::clear_render_cache;
use self::markdown::render_markdown;

const SIDEBAR_WIDTH: u16 = 30;
const TERMINAL_HEIGHT: u16 = 10;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = palette(app);
    let glyphs = glyphs(app.settings().ascii_only);

    let bg_block = Block::default().style(Style::default().bg(palette.bg).fg(palette.text));
    frame.render_widget(bg_block, frame.area());

    if let Some((percent, label)) = app.splash_stage() {
        draw_splash(frame, percent, label, &palette, &glyphs);
        return;
    }

    let [body, status] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let main = if app.sidebar_visible() {
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
                .areas(body);
        draw_sidebar(frame, app, sidebar, &palette, &glyphs);
        main
    } else {
        body
    };

    let terminal_height = if app.terminal().is_open() {
        TERMINAL_HEIGHT
    } else {
        0
    };
    let [tabs, breadcrumb, content, terminal] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(terminal_height),
    ])
    .areas(main);

    draw_tabs(frame, app, tabs, &palette, &glyphs);
    draw_breadcrumb(frame, app, breadcrumb, &palette, &glyphs);
    let mut cursor = draw_content(frame, app, content, &palette, &glyphs);
    if app.terminal().is_open() {
        draw_terminal(frame, app, terminal, &palette);
    }
    draw_status_bar(frame, app, status, &palette, &glyphs);

    let top = app.overlays().top();
    for overlay in app.overlays().iter() {
        let overlay_cursor = overlays::draw_overlay(frame, app, overlay, &palette, &glyphs);
        if Some(overlay) == top {
            cursor = overlay_cursor;
        }
    }
    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

/// Display width of the text before the draft's cursor.
fn cursor_offset(input: &DraftInput) -> u16 {
    let before = input.text().get(..input.byte_index()).unwrap_or_default();
    u16::try_from(before.width()).unwrap_or(u16::MAX)
}

fn truncate_with_ellipsis(raw: &str, max: usize) -> String {
    let max = max.max(3);
    if raw.width() <= max {
        return raw.to_string();
    }
    let mut out = String::new();
    for ch in raw.chars() {
        if out.width() + 4 > max {
            break;
        }
        out.push(ch);
    }
    format!("{out}...")
}

fn file_icon(name: &str, palette: &Palette) -> Span<'static> {
    let (icon, color) = match FileKind::from_name(name) {
        FileKind::TypeScript => ("TS", palette.number),
        FileKind::Json => ("{}", palette.warning),
        FileKind::Markdown => ("MD", palette.accent),
        FileKind::Text => ("--", palette.text_muted),
    };
    Span::styled(format!("{icon} "), Style::default().fg(color))
}

fn draw_splash(frame: &mut Frame, percent: u8, label: &str, palette: &Palette, glyphs: &Glyphs) {
    const BAR_WIDTH: usize = 32;
    let area = frame.area();
    let filled = BAR_WIDTH * usize::from(percent) / 100;
    let bar = format!(
        "{}{}",
        glyphs.bar_full.repeat(filled),
        glyphs.bar_empty.repeat(BAR_WIDTH - filled)
    );
    let lines = vec![
        Line::from(Span::styled("folio", styles::heading(palette))),
        Line::from(Span::styled("portfolio workspace", styles::muted(palette))),
        Line::from(""),
        Line::from(Span::styled(bar, Style::default().fg(palette.accent))),
        Line::from(Span::styled(format!("{percent}%"), Style::default().fg(palette.text))),
        Line::from(Span::styled(label.to_string(), styles::muted(palette))),
    ];
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let top = area.y + area.height.saturating_sub(height) / 2;
    let splash_area = Rect {
        x: area.x,
        y: top,
        width: area.width,
        height: height.min(area.height),
    };
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        splash_area,
    );
}

fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let focused = app.focus() == Focus::Explorer;
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg_sidebar))
        .title(Span::styled(" EXPLORER", styles::muted(palette)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let scratch = app.workspace().scratch();
    let active_path = match app.workspace().state() {
        SessionState::Routed(_) => app.active_path(),
        SessionState::Scratch(_) => None,
    };
    let width = usize::from(inner.width);

    let lines: Vec<Line> = app
        .explorer()
        .rows(scratch)
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let mut spans = match row {
                ExplorerRow::Folder { folder, expanded } => vec![Span::styled(
                    format!(
                        "{} {}",
                        if *expanded {
                            glyphs.folder_open
                        } else {
                            glyphs.folder_closed
                        },
                        folder.as_str()
                    ),
                    Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                )],
                ExplorerRow::File(file) => {
                    let style = if active_path == Some(file.path) {
                        Style::default().fg(palette.accent)
                    } else {
                        Style::default().fg(palette.text)
                    };
                    vec![
                        Span::raw("  "),
                        file_icon(file.label, palette),
                        Span::styled(file.label, style),
                    ]
                }
                ExplorerRow::ScratchFolder { expanded } => vec![Span::styled(
                    format!(
                        "{} {}",
                        if *expanded {
                            glyphs.folder_open
                        } else {
                            glyphs.folder_closed
                        },
                        folio_types::SCRATCH_FOLDER
                    ),
                    Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
                )],
                ExplorerRow::ScratchFile(name) => {
                    let style = if scratch.selected() == Some(name.as_str()) {
                        Style::default().fg(palette.accent)
                    } else {
                        Style::default().fg(palette.text)
                    };
                    vec![
                        Span::raw("  "),
                        file_icon(name, palette),
                        Span::styled(truncate_with_ellipsis(name, width.saturating_sub(6)), style),
                    ]
                }
                ExplorerRow::NewFileHint => vec![Span::styled(
                    "  + New file (n)",
                    styles::muted(palette).add_modifier(Modifier::ITALIC),
                )],
            };
            if focused && idx == app.explorer().cursor() {
                spans.insert(0, Span::styled(glyphs.selected, Style::default().fg(palette.accent)));
                Line::from(spans).style(styles::selected_row(palette))
            } else {
                spans.insert(0, Span::raw(" "));
                Line::from(spans)
            }
        })
        .collect();

    let cursor = u16::try_from(app.explorer().cursor()).unwrap_or(u16::MAX);
    let scroll = cursor.saturating_sub(inner.height.saturating_sub(1));
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let active = match app.workspace().state() {
        SessionState::Routed(_) => app.active_path(),
        SessionState::Scratch(_) => None,
    };
    let mut spans = Vec::new();
    for file in app.tabs().open_tabs() {
        let style = if active == Some(file.path) {
            Style::default()
                .fg(palette.text)
                .bg(palette.bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_muted).bg(palette.bg_sidebar)
        };
        spans.push(Span::styled(" ", style));
        spans.push(file_icon(file.label, palette).style(style.fg(palette.accent)));
        spans.push(Span::styled(format!("{} {} ", file.label, glyphs.close), style));
        spans.push(Span::styled(" ", Style::default().bg(palette.bg_sidebar)));
    }
    if let SessionState::Scratch(name) = app.workspace().state() {
        spans.push(Span::styled(
            format!(" {name} "),
            Style::default()
                .fg(palette.text)
                .bg(palette.bg)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg_sidebar)),
        area,
    );
}

fn draw_breadcrumb(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let separator = format!(" {} ", glyphs.separator);
    let crumbs = app.breadcrumb().join(&separator);
    let mut spans = vec![Span::styled(format!(" {crumbs}"), styles::muted(palette))];
    if app.editor().is_some() {
        spans.push(Span::styled("  [editing - Esc to stop]", Style::default().fg(palette.warning)));
    } else if let SessionState::Scratch(_) = app.workspace().state() {
        spans.push(Span::styled("  [e to edit]", styles::muted(palette)));
    } else if let Some(page) = app.page().page()
        && page.modes().len() > 1
    {
        spans.push(Span::styled(
            format!("  [v] {}", app.page().mode().label()),
            styles::muted(palette),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn role_style(role: LineRole, palette: &Palette) -> Style {
    match role {
        LineRole::Heading => styles::heading(palette),
        LineRole::Subheading => Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
        LineRole::Body | LineRole::Bullet => Style::default().fg(palette.text),
        LineRole::Muted => styles::muted(palette),
        LineRole::Accent => Style::default().fg(palette.accent),
        LineRole::Link => Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::UNDERLINED),
        LineRole::Tag => Style::default().fg(palette.keyword),
        LineRole::Error => Style::default().fg(palette.error),
    }
}

fn doc_line(
    line: &DocLine,
    selected: Option<usize>,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Line<'static> {
    let style = role_style(line.role, palette);
    let text = if line.role == LineRole::Bullet {
        format!("{} {}", glyphs.bullet, line.text)
    } else {
        line.text.clone()
    };
    match line.item {
        Some(item) if Some(item) == selected => Line::from(vec![
            Span::styled(format!("{} ", glyphs.selected), Style::default().fg(palette.accent)),
            Span::styled(text, style),
        ])
        .style(Style::default().bg(palette.bg_highlight)),
        _ => Line::from(vec![Span::raw("  "), Span::styled(text, style)]),
    }
}

/// Lines for a document plus the index of the first line of the selected
/// list row.
fn document_lines(
    doc: &Document,
    selected: Option<usize>,
    palette: &Palette,
    glyphs: &Glyphs,
) -> (Vec<Line<'static>>, Option<usize>) {
    let mut lines = Vec::new();
    let mut selected_line = None;
    for block in &doc.blocks {
        match block {
            DocBlock::Line(line) => {
                if selected_line.is_none() && line.item.is_some() && line.item == selected {
                    selected_line = Some(lines.len());
                }
                lines.push(doc_line(line, selected, palette, glyphs));
            }
            DocBlock::Source { language, text } => {
                lines.extend(source::numbered_lines(text, language, palette));
            }
            DocBlock::Markdown(text) => lines.extend(render_markdown(text, palette)),
        }
    }
    (lines, selected_line)
}

fn draw_content(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Option<Position> {
    if let Some(editor) = app.editor() {
        return Some(source::draw_editor(frame, editor, area, palette));
    }

    let doc = app.document();
    let selected = (!doc.selectable.is_empty()).then_some(app.page().selected);
    let (lines, selected_line) = document_lines(&doc, selected, palette, glyphs);
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });

    let total = u16::try_from(paragraph.line_count(area.width)).unwrap_or(u16::MAX);
    let max_scroll = total.saturating_sub(area.height);
    let mut scroll = app.page().scroll.min(max_scroll);
    if let Some(line) = selected_line.and_then(|l| u16::try_from(l).ok()) {
        if line < scroll {
            scroll = line;
        } else if line >= scroll.saturating_add(area.height) {
            scroll = (line + 1).saturating_sub(area.height);
        }
    }
    frame.render_widget(paragraph.scroll((scroll, 0)), area);
    None
}

fn draw_terminal(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(" TERMINAL ", styles::muted(palette)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let shown = app.terminal().visible_lines(app.now());
    let lines: Vec<Line> = TERMINAL_SCRIPT
        .iter()
        .take(shown)
        .map(|(kind, text)| {
            let style = match kind {
                LineKind::Command => Style::default().fg(palette.accent),
                LineKind::Output => Style::default().fg(palette.text),
                LineKind::Success => Style::default().fg(palette.success),
            };
            Line::from(Span::styled(format!(" {text}"), style))
        })
        .collect();
    let len = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let scroll = len.saturating_sub(inner.height);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let status = app.status_line();
    let base = styles::status_bar(palette);

    let mut left = format!(
        " {} {}  {} {}  {} {} ",
        glyphs.branch, status.branch, glyphs.error, status.errors, glyphs.warning, status.warnings
    );
    if let Some(message) = app.status_message() {
        left.push_str(&format!(" {message}"));
    }

    let mut right = vec![
        status.cursor.clone(),
        status.indent.to_string(),
        status.encoding.to_string(),
        status.language.to_string(),
    ];
    if let Some(mode) = status.mode {
        right.push(mode.label().to_string());
    }
    let right = format!("{} ", right.join("  "));

    let gap = usize::from(area.width).saturating_sub(left.width() + right.width());
    let line = Line::from(vec![
        Span::styled(left, base),
        Span::styled(" ".repeat(gap), base),
        Span::styled(right, base),
    ]);
    frame.render_widget(Paragraph::new(line).style(base), area);
}
