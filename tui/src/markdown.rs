//! Markdown to ratatui rendering for blog posts and scratch previews.
//!
//! Includes a small render cache so an unchanged post is parsed once per
//! theme rather than once per frame.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Palette;

const CACHE_MAX_ENTRIES: usize = 64;

const INDENT: &str = "  ";

/// Theme colors the renderer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MarkdownColors {
    text: Color,
    muted: Color,
    heading: Color,
    code: Color,
}

impl MarkdownColors {
    fn from_palette(palette: &Palette) -> Self {
        Self {
            text: palette.text,
            muted: palette.text_muted,
            heading: palette.accent,
            code: palette.string,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    content_hash: u64,
    colors: MarkdownColors,
}

impl CacheKey {
    fn new(content: &str, colors: MarkdownColors) -> Self {
        let mut hasher = DefaultHasher::new();
        content.hash(&mut hasher);
        Self {
            content_hash: hasher.finish(),
            colors,
        }
    }
}

thread_local! {
    static RENDER_CACHE: RefCell<HashMap<CacheKey, Vec<Line<'static>>>> = RefCell::new(HashMap::new());
}

/// Clear the render cache.
pub fn clear_render_cache() {
    RENDER_CACHE.with(|cache| cache.borrow_mut().clear());
}

/// Render markdown content to ratatui lines in the palette's colors.
pub fn render_markdown(content: &str, palette: &Palette) -> Vec<Line<'static>> {
    let colors = MarkdownColors::from_palette(palette);
    let key = CacheKey::new(content, colors);

    if let Some(lines) = RENDER_CACHE.with(|cache| cache.borrow().get(&key).cloned()) {
        return lines;
    }

    let lines = MarkdownRenderer::new(colors).render(content);

    RENDER_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.len() >= CACHE_MAX_ENTRIES {
            let evict: Vec<_> = cache.keys().take(CACHE_MAX_ENTRIES / 2).cloned().collect();
            for k in evict {
                cache.remove(&k);
            }
        }
        cache.insert(key, lines.clone());
    });

    lines
}

struct MarkdownRenderer {
    colors: MarkdownColors,
    lines: Vec<Line<'static>>,
    current_spans: Vec<Span<'static>>,

    // Counters, so `# Heading with **bold**` stays bold after the inner
    // strong ends.
    bold_count: usize,
    italic_count: usize,
    strike_count: usize,
    heading: Option<HeadingLevel>,
    link_count: usize,
    quote_depth: usize,

    in_code_block: bool,
    code_language: String,
    code_block_content: Vec<String>,

    in_table: bool,
    table_rows: Vec<Vec<String>>,
    current_row: Vec<String>,
    current_cell: String,

    list_stack: Vec<Option<u64>>,
}

impl MarkdownRenderer {
    fn new(colors: MarkdownColors) -> Self {
        Self {
            colors,
            lines: Vec::new(),
            current_spans: Vec::new(),
            bold_count: 0,
            italic_count: 0,
            strike_count: 0,
            heading: None,
            link_count: 0,
            quote_depth: 0,
            in_code_block: false,
            code_language: String::new(),
            code_block_content: Vec::new(),
            in_table: false,
            table_rows: Vec::new(),
            current_row: Vec::new(),
            current_cell: String::new(),
            list_stack: Vec::new(),
        }
    }

    fn render(mut self, content: &str) -> Vec<Line<'static>> {
        let options =
            Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
        for event in Parser::new_ext(content, options) {
            self.handle_event(event);
        }
        self.flush_line();
        while self.lines.last().is_some_and(|line| line.width() == 0) {
            self.lines.pop();
        }
        self.lines
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.handle_text(&text),
            Event::Code(code) => self.handle_inline_code(&code),
            Event::SoftBreak => self.handle_soft_break(),
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.lines.push(Line::from(Span::styled(
                    format!("{INDENT}{}", "-".repeat(40)),
                    Style::default().fg(self.colors.muted),
                )));
            }
            Event::TaskListMarker(done) => {
                let marker = if done { "[x] " } else { "[ ] " };
                self.current_spans.push(Span::styled(
                    marker,
                    Style::default().fg(self.colors.muted),
                ));
            }
            Event::Html(html) | Event::InlineHtml(html) => self.handle_text(&html),
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush_line();
                if !self.lines.is_empty() {
                    self.lines.push(Line::from(""));
                }
                self.heading = Some(level);
                self.bold_count += 1;
                if !matches!(level, HeadingLevel::H1 | HeadingLevel::H2) {
                    self.current_spans.push(Span::styled(
                        "#".repeat(level as usize) + " ",
                        Style::default().fg(self.colors.muted),
                    ));
                }
            }
            Tag::Strong => self.bold_count += 1,
            Tag::Emphasis => self.italic_count += 1,
            Tag::Strikethrough => self.strike_count += 1,
            Tag::Link { .. } => self.link_count += 1,
            Tag::CodeBlock(kind) => {
                self.flush_line();
                self.in_code_block = true;
                self.code_language = match kind {
                    CodeBlockKind::Fenced(lang) => lang.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                self.code_block_content.clear();
            }
            Tag::List(start) => {
                self.flush_line();
                self.list_stack.push(start);
            }
            Tag::Item => {
                let indent = "  ".repeat(self.list_stack.len().saturating_sub(1));
                let marker = match self.list_stack.last_mut() {
                    Some(Some(idx)) => {
                        let m = format!("{indent}{idx}. ");
                        *idx += 1;
                        m
                    }
                    _ => format!("{indent}- "),
                };
                self.current_spans
                    .push(Span::styled(marker, Style::default().fg(self.colors.heading)));
            }
            Tag::Table(_) => {
                self.flush_line();
                self.in_table = true;
                self.table_rows.clear();
            }
            Tag::TableHead | Tag::TableRow => self.current_row.clear(),
            Tag::TableCell => self.current_cell.clear(),
            Tag::Paragraph => {
                if !self.lines.is_empty() && self.list_stack.is_empty() {
                    self.lines.push(Line::from(""));
                }
            }
            Tag::BlockQuote { .. } => {
                self.flush_line();
                self.quote_depth += 1;
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                self.bold_count = self.bold_count.saturating_sub(1);
                self.flush_line();
                self.heading = None;
            }
            TagEnd::Strong => self.bold_count = self.bold_count.saturating_sub(1),
            TagEnd::Emphasis => self.italic_count = self.italic_count.saturating_sub(1),
            TagEnd::Strikethrough => self.strike_count = self.strike_count.saturating_sub(1),
            TagEnd::Link => self.link_count = self.link_count.saturating_sub(1),
            TagEnd::CodeBlock => {
                self.in_code_block = false;
                self.render_code_block();
            }
            TagEnd::List(_) => {
                self.list_stack.pop();
            }
            TagEnd::Item | TagEnd::Paragraph => self.flush_line(),
            TagEnd::Table => {
                self.in_table = false;
                self.render_table();
            }
            TagEnd::TableHead | TagEnd::TableRow => {
                if !self.current_row.is_empty() {
                    self.table_rows.push(std::mem::take(&mut self.current_row));
                }
            }
            TagEnd::TableCell => {
                self.current_row.push(std::mem::take(&mut self.current_cell));
            }
            TagEnd::BlockQuote { .. } => {
                self.flush_line();
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn handle_text(&mut self, text: &str) {
        if self.in_code_block {
            self.code_block_content.extend(text.lines().map(str::to_string));
            return;
        }
        if self.in_table {
            self.current_cell.push_str(text);
            return;
        }
        let style = self.current_style();
        self.current_spans.push(Span::styled(text.to_string(), style));
    }

    fn handle_inline_code(&mut self, code: &str) {
        if self.in_table {
            self.current_cell.push_str(code);
            return;
        }
        self.current_spans.push(Span::styled(
            code.to_string(),
            Style::default().fg(self.colors.code),
        ));
    }

    fn handle_soft_break(&mut self) {
        if !self.in_code_block && !self.in_table {
            self.current_spans.push(Span::raw(" "));
        }
    }

    fn current_style(&self) -> Style {
        let mut style = Style::default().fg(self.colors.text);
        if self.heading.is_some() {
            style = style.fg(self.colors.heading);
        }
        if self.heading == Some(HeadingLevel::H1) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if self.quote_depth > 0 {
            style = style.fg(self.colors.muted);
        }
        if self.bold_count > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic_count > 0 || self.quote_depth > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.strike_count > 0 {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        if self.link_count > 0 {
            style = style.fg(self.colors.heading).add_modifier(Modifier::UNDERLINED);
        }
        style
    }

    fn flush_line(&mut self) {
        if self.current_spans.is_empty() {
            return;
        }
        let mut spans = vec![Span::raw(INDENT)];
        if self.quote_depth > 0 {
            spans.push(Span::styled(
                "| ".repeat(self.quote_depth),
                Style::default().fg(self.colors.muted),
            ));
        }
        spans.append(&mut self.current_spans);
        self.lines.push(Line::from(spans));
    }

    fn render_code_block(&mut self) {
        let fence = Style::default().fg(self.colors.muted);
        let code = Style::default().fg(self.colors.code);

        self.lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(format!("```{}", self.code_language), fence),
        ]));
        for line in self.code_block_content.drain(..) {
            self.lines
                .push(Line::from(vec![Span::raw(INDENT), Span::styled(line, code)]));
        }
        self.lines
            .push(Line::from(vec![Span::raw(INDENT), Span::styled("```", fence)]));
    }

    fn render_table(&mut self) {
        if self.table_rows.is_empty() {
            return;
        }

        let num_cols = self.table_rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut col_widths = vec![3usize; num_cols];
        for row in &self.table_rows {
            for (i, cell) in row.iter().enumerate() {
                col_widths[i] = col_widths[i].max(cell.trim().width());
            }
        }

        let border = Style::default().fg(self.colors.muted);
        let header = Style::default()
            .fg(self.colors.heading)
            .add_modifier(Modifier::BOLD);
        let body = Style::default().fg(self.colors.text);

        let rows = std::mem::take(&mut self.table_rows);
        for (row_idx, row) in rows.iter().enumerate() {
            let style = if row_idx == 0 { header } else { body };
            self.lines
                .push(Line::from(table_row(row, &col_widths, style, border)));
            if row_idx == 0 {
                let rule: Vec<String> = col_widths.iter().map(|w| "-".repeat(w + 2)).collect();
                self.lines.push(Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled(format!("|{}|", rule.join("+")), border),
                ]));
            }
        }
    }
}

fn table_row(
    row: &[String],
    widths: &[usize],
    cell_style: Style,
    border_style: Style,
) -> Vec<Span<'static>> {
    let mut spans = vec![Span::raw(INDENT), Span::styled("|", border_style)];
    for (i, width) in widths.iter().enumerate() {
        let cell = row.get(i).map_or("", |s| s.trim());
        let padding = width.saturating_sub(cell.width());
        spans.push(Span::styled(
            format!(" {cell}{} ", " ".repeat(padding)),
            cell_style,
        ));
        spans.push(Span::styled("|", border_style));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::ThemeId;

    fn palette() -> Palette {
        Palette::from_colors(ThemeId::Dark.colors())
    }

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn heading_and_paragraph() {
        let lines = render_markdown("# hi\n\nbody text", &palette());
        assert_eq!(text_of(&lines), ["  hi", "", "  body text"]);
        assert!(lines[0].spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn nested_bold_in_heading_stays_bold() {
        clear_render_cache();
        let lines = render_markdown("## Intro **key** point", &palette());
        let point = lines[0]
            .spans
            .iter()
            .find(|s| s.content.contains("point"))
            .unwrap();
        assert!(point.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn fenced_code_keeps_language() {
        let lines = render_markdown("```rust\nfn main() {}\n```", &palette());
        assert_eq!(text_of(&lines), ["  ```rust", "  fn main() {}", "  ```"]);
    }

    #[test]
    fn lists_get_markers() {
        let lines = render_markdown("- one\n- two\n\n1. first", &palette());
        let text = text_of(&lines);
        assert!(text.contains(&"  - one".to_string()));
        assert!(text.contains(&"  1. first".to_string()));
    }

    #[test]
    fn table_renders_rows() {
        let lines = render_markdown("| A | B |\n|---|---|\n| 1 | 2 |", &palette());
        assert_eq!(lines.len(), 3);
        assert!(text_of(&lines)[2].contains("| 1   |"));
    }

    #[test]
    fn cache_is_keyed_by_theme() {
        clear_render_cache();
        let dark = render_markdown("plain", &palette());
        let light = render_markdown("plain", &Palette::from_colors(ThemeId::Light.colors()));
        assert_ne!(dark[0].spans[1].style, light[0].spans[1].style);
    }
}
