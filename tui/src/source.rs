//! Line-numbered source views and the scratch editor surface.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use folio_engine::ScratchEditor;

use crate::theme::{Palette, styles};

const KEYWORDS: &[&str] = &[
    "const", "let", "export", "default", "import", "from", "function", "return", "interface",
    "type", "true", "false", "null", "new", "throw", "if", "else",
];

fn gutter_width(line_count: usize) -> usize {
    line_count.to_string().len().max(3)
}

fn gutter(number: usize, width: usize, palette: &Palette) -> Span<'static> {
    Span::styled(format!("{number:>width$}  "), styles::muted(palette))
}

/// Split `line` into styled spans. JSON/TypeScript get string, number,
/// keyword and comment colors; markdown gets heading and bullet accents.
fn highlight_line(line: &str, language: &str, palette: &Palette) -> Vec<Span<'static>> {
    let text_style = Style::default().fg(palette.text);
    match language {
        "markdown" => {
            let trimmed = line.trim_start();
            let style = if trimmed.starts_with('#') {
                styles::heading(palette)
            } else if trimmed.starts_with("- ") || trimmed.starts_with("* ") {
                Style::default().fg(palette.keyword)
            } else if trimmed.starts_with("```") || trimmed.starts_with('>') {
                styles::muted(palette)
            } else {
                text_style
            };
            vec![Span::styled(line.to_string(), style)]
        }
        "typescript" | "json" => highlight_code(line, palette),
        _ => vec![Span::styled(line.to_string(), text_style)],
    }
}

fn highlight_code(line: &str, palette: &Palette) -> Vec<Span<'static>> {
    let text_style = Style::default().fg(palette.text);
    let mut spans = Vec::new();
    let mut rest = line;

    while !rest.is_empty() {
        if rest.starts_with("//") {
            spans.push(Span::styled(
                rest.to_string(),
                styles::muted(palette).add_modifier(Modifier::ITALIC),
            ));
            break;
        }
        let Some(first) = rest.chars().next() else {
            break;
        };
        let len = if first == '"' || first == '\'' || first == '`' {
            let end = rest[1..]
                .find(first)
                .map_or(rest.len(), |idx| idx + 2);
            spans.push(Span::styled(
                rest[..end].to_string(),
                Style::default().fg(palette.string),
            ));
            end
        } else if first.is_ascii_digit() {
            let end = rest
                .find(|c: char| !c.is_ascii_digit() && c != '.')
                .unwrap_or(rest.len());
            spans.push(Span::styled(
                rest[..end].to_string(),
                Style::default().fg(palette.number),
            ));
            end
        } else if first.is_alphabetic() || first == '_' {
            let end = rest
                .find(|c: char| !c.is_alphanumeric() && c != '_')
                .unwrap_or(rest.len());
            let word = &rest[..end];
            let style = if KEYWORDS.contains(&word) {
                Style::default().fg(palette.keyword)
            } else {
                text_style
            };
            spans.push(Span::styled(word.to_string(), style));
            end
        } else {
            let end = first.len_utf8();
            spans.push(Span::styled(rest[..end].to_string(), text_style));
            end
        };
        rest = &rest[len..];
    }
    spans
}

/// `text` as highlighted lines behind a line-number gutter.
pub(crate) fn numbered_lines(text: &str, language: &str, palette: &Palette) -> Vec<Line<'static>> {
    let lines: Vec<&str> = text.split('\n').collect();
    let width = gutter_width(lines.len());
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let mut spans = vec![gutter(idx + 1, width, palette)];
            spans.extend(highlight_line(line, language, palette));
            Line::from(spans)
        })
        .collect()
}

/// Draw the open scratch editor and return where the terminal cursor goes.
pub(crate) fn draw_editor(
    frame: &mut Frame,
    editor: &ScratchEditor,
    area: Rect,
    palette: &Palette,
) -> Position {
    let language = folio_types::FileKind::from_name(editor.name()).language();
    let text = editor.text();
    let (line, col) = editor.cursor();
    let width = gutter_width(text.split('\n').count());

    let mut lines = numbered_lines(text, language, palette);
    if let Some(current) = lines.get_mut(line) {
        *current = std::mem::take(current).style(Style::default().bg(palette.bg_highlight));
    }

    let height = usize::from(area.height.max(1));
    let scroll = (line + 1).saturating_sub(height);
    let scroll_u16 = u16::try_from(scroll).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((scroll_u16, 0)), area);

    let line_text = text.split('\n').nth(line).unwrap_or_default();
    let before: String = line_text.graphemes(true).take(col).collect();
    let x = width + 2 + before.width();
    let x = area.x.saturating_add(u16::try_from(x).unwrap_or(u16::MAX));
    let y = area
        .y
        .saturating_add(u16::try_from(line - scroll).unwrap_or(u16::MAX));
    Position::new(
        x.min(area.right().saturating_sub(1)),
        y.min(area.bottom().saturating_sub(1)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::ThemeId;

    fn palette() -> Palette {
        Palette::from_colors(ThemeId::Dark.colors())
    }

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn gutter_numbers_every_line() {
        let lines = numbered_lines("a\nb\nc", "text", &palette());
        assert_eq!(lines.len(), 3);
        assert_eq!(plain(&lines[0]), "  1  a");
        assert_eq!(plain(&lines[2]), "  3  c");
    }

    #[test]
    fn code_highlight_keeps_text_intact() {
        let source = "const x = \"hi\"; // note";
        let spans = highlight_code(source, &palette());
        let joined: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(joined, source);
        let p = palette();
        assert!(
            spans
                .iter()
                .any(|s| s.content == "\"hi\"" && s.style.fg == Some(p.string))
        );
        assert!(
            spans
                .iter()
                .any(|s| s.content == "const" && s.style.fg == Some(p.keyword))
        );
    }

    #[test]
    fn unterminated_string_runs_to_end_of_line() {
        let spans = highlight_code("\"open", &palette());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "\"open");
    }
}
