//! Walks manuscript body lines and drives an [`RtfDocument`].

use tracing::{debug, trace};

use crate::rtf::{LineOptions, RtfDocument, Style};
use crate::text::{escape_rtf, heading_level, is_comment, smart_replace, HeadingLevel};

/// Blank lines dropped in above each part or chapter heading.
pub const HEADING_DROP_LINES: usize = 8;
/// Visible marker rendered for a section break.
pub const SECTION_MARKER: &str = "#";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Pass body text through verbatim instead of smart-replacing it.
    pub monospace: bool,
    pub name_chapters: bool,
    pub name_parts: bool,
}

/// Which routine consumes the run starting at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    Headings,
    SectionBreaks,
    Body,
}

impl ParseState {
    pub fn for_level(level: HeadingLevel) -> Self {
        match level {
            HeadingLevel::Part | HeadingLevel::Chapter => Self::Headings,
            HeadingLevel::Section => Self::SectionBreaks,
            HeadingLevel::Body => Self::Body,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    pub parts: usize,
    pub chapters: usize,
    pub sections_rendered: usize,
    pub sections_hidden: usize,
    pub paragraphs: usize,
}

pub struct ManuscriptParser<'doc> {
    doc: &'doc mut RtfDocument,
    options: ParseOptions,
    summary: ParseSummary,
    new_division: bool,
}

impl<'doc> ManuscriptParser<'doc> {
    pub fn new(doc: &'doc mut RtfDocument, options: ParseOptions) -> Self {
        Self {
            doc,
            options,
            summary: ParseSummary::default(),
            new_division: true,
        }
    }

    /// Consumes every line exactly once and returns the running counters.
    pub fn parse<S: AsRef<str>>(mut self, lines: &[S]) -> ParseSummary {
        let mut cursor = 0;

        while let Some(line) = lines.get(cursor) {
            let state = ParseState::for_level(heading_level(line.as_ref()));
            debug!(?state, cursor, new_division = self.new_division, "parse run");

            cursor = match state {
                ParseState::Headings => {
                    let next = self.parse_headings(lines, cursor);
                    self.new_division = true;
                    next
                }
                ParseState::SectionBreaks => self.parse_section_breaks(lines, cursor),
                ParseState::Body => self.parse_body(lines, cursor),
            };
        }

        self.summary
    }

    fn parse_headings<S: AsRef<str>>(&mut self, lines: &[S], start: usize) -> usize {
        let mut cursor = start;

        while let Some(line) = lines.get(cursor) {
            let line = line.as_ref();
            let level = heading_level(line);
            if !level.is_division() {
                break;
            }

            let name = escape_rtf(line[level.depth()..].trim());
            let (label, style) = if level == HeadingLevel::Part {
                self.summary.parts += 1;
                let label = division_label("Part", self.summary.parts, &name, self.options.name_parts);
                (label, Style::Heading1)
            } else {
                self.summary.chapters += 1;
                let label = division_label(
                    "Chapter",
                    self.summary.chapters,
                    &name,
                    self.options.name_chapters,
                );
                (label, Style::Heading2)
            };
            trace!(%label, "heading");

            self.doc
                .add_lines(&[""; HEADING_DROP_LINES], LineOptions::page_break());
            self.doc.add_lines(&[label], LineOptions::styled(style));
            self.doc.add_lines(&[""], LineOptions::default());

            cursor += 1;
        }

        cursor
    }

    fn parse_section_breaks<S: AsRef<str>>(&mut self, lines: &[S], start: usize) -> usize {
        let mut cursor = start;

        while let Some(line) = lines.get(cursor) {
            if heading_level(line.as_ref()) != HeadingLevel::Section {
                break;
            }

            if self.new_division {
                self.summary.sections_hidden += 1;
            } else {
                self.doc
                    .add_lines(&[SECTION_MARKER], LineOptions::styled(Style::Centered));
                self.summary.sections_rendered += 1;
            }

            cursor += 1;
        }

        cursor
    }

    fn parse_body<S: AsRef<str>>(&mut self, lines: &[S], start: usize) -> usize {
        let mut cursor = start;
        let mut paragraphs = Vec::new();

        while let Some(line) = lines.get(cursor) {
            let line = line.as_ref();
            if heading_level(line) != HeadingLevel::Body {
                break;
            }
            cursor += 1;

            if is_comment(line) {
                continue;
            }

            let escaped = escape_rtf(line);
            paragraphs.push(if self.options.monospace {
                escaped.into_owned()
            } else {
                smart_replace(&escaped)
            });
        }

        if !paragraphs.is_empty() {
            self.summary.paragraphs += paragraphs.len();
            self.doc.add_lines(&paragraphs, LineOptions::default());
            self.new_division = false;
        }

        cursor
    }
}

fn division_label(kind: &str, number: usize, name: &str, show_name: bool) -> String {
    if show_name && !name.is_empty() {
        format!("{kind} {number}: {name}")
    } else {
        format!("{kind} {number}")
    }
}
