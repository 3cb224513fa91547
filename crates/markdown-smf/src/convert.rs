//! Manuscript validation and the end-to-end conversion.

use tracing::{debug, info, warn};

use crate::error::{ConvertError, ConvertResult};
use crate::line::prepare_lines;
use crate::parser::{ManuscriptParser, ParseOptions};
use crate::rtf::{DocumentOptions, LineOptions, RtfDocument, Style, PAGE_NUMBER_TOKEN};
use crate::text::{count_words, escape_rtf, heading_level, HeadingLevel};

/// Required first line of every manuscript.
pub const HEADER_SENTINEL: &str = "# HEAD";
/// Head block lines kept from a supplied address block.
pub const HEAD_LINE_LIMIT: usize = 7;
/// Head block is padded with blank lines to this length.
pub const HEAD_BLOCK_LINES: usize = 18;
/// From this many words on, the count moves from the head block to the title page.
pub const LONG_WORK_WORDS: usize = 20_000;

pub const PLACEHOLDER_HEAD: [&str; HEAD_LINE_LIMIT] = [
    "Your Name",
    "Address Line 1",
    "Address Line 2",
    "Address Line 3",
    "City, ST Zip",
    "email@example.com",
    "(555) 555 - 5555",
];

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub monospace: bool,
    pub name_chapters: bool,
    pub name_parts: bool,
    /// Sender's address block; the placeholder block is used when absent.
    pub head: Option<Vec<String>>,
}

impl ConvertOptions {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            monospace: self.monospace,
            name_chapters: self.name_chapters,
            name_parts: self.name_parts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManuscriptHeader {
    pub title: String,
    pub short_name: String,
    pub author: String,
}

impl ManuscriptHeader {
    pub fn author_last_name(&self) -> &str {
        self.author.rsplit(' ').next().unwrap_or(&self.author)
    }

    /// Running page header, e.g. `Doe / Short / _P#_`.
    pub fn page_header(&self) -> String {
        format!(
            "{} / {} / {PAGE_NUMBER_TOKEN}",
            escape_rtf(self.author_last_name()),
            escape_rtf(&self.short_name)
        )
    }
}

/// Body word count, reported truncated to a multiple of 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCount(usize);

impl WordCount {
    pub fn new(exact: usize) -> Self {
        Self(exact)
    }

    pub fn exact(self) -> usize {
        self.0
    }

    pub fn rounded(self) -> usize {
        self.0 / 100 * 100
    }

    pub fn is_long_work(self) -> bool {
        self.0 >= LONG_WORK_WORDS
    }

    pub fn label(self) -> String {
        format!("about {} words", group_thousands(self.rounded()))
    }
}

/// Splits the three required fields off the front of the prepared lines.
///
/// Returns the header and the remaining body lines. A field is missing when
/// its line is absent or is itself a heading.
pub fn parse_header(lines: &[String]) -> ConvertResult<(ManuscriptHeader, &[String])> {
    let (first, rest) = lines.split_first().ok_or(ConvertError::EmptyDocument)?;
    if first != HEADER_SENTINEL {
        return Err(ConvertError::MissingSentinel {
            found: first.clone(),
        });
    }

    let (title, rest) = take_field(rest).ok_or(ConvertError::MissingTitle)?;
    let (short_name, rest) = take_field(rest).ok_or(ConvertError::MissingShortName)?;
    let (author, rest) = take_field(rest).ok_or(ConvertError::MissingAuthor)?;

    let header = ManuscriptHeader {
        title: title.clone(),
        short_name: short_name.clone(),
        author: author.clone(),
    };
    Ok((header, rest))
}

fn take_field(lines: &[String]) -> Option<(&String, &[String])> {
    let (field, rest) = lines.split_first()?;
    if heading_level(field) != HeadingLevel::Body {
        return None;
    }
    Some((field, rest))
}

/// Converts a Markdown manuscript into a Standard Manuscript Format RTF document.
pub fn convert_to_smf(text: &str, options: &ConvertOptions) -> ConvertResult<String> {
    let lines = prepare_lines(text);
    let (header, body) = parse_header(&lines)?;
    let words = WordCount::new(count_words(body));
    debug!(
        title = %header.title,
        words = words.exact(),
        body_lines = body.len(),
        "manuscript header parsed"
    );

    let mut doc = RtfDocument::new(DocumentOptions {
        monospace: options.monospace,
        header_text: Some(header.page_header()),
        first_header_text: Some(String::new()),
    });

    let head = head_block(options.head.as_deref(), words);
    write_title_page(&mut doc, &header, &head, words);

    let summary = ManuscriptParser::new(&mut doc, options.parse_options()).parse(body);
    info!(
        parts = summary.parts,
        chapters = summary.chapters,
        paragraphs = summary.paragraphs,
        words = words.exact(),
        "manuscript converted"
    );

    Ok(doc.dump())
}

fn head_block(supplied: Option<&[String]>, words: WordCount) -> Vec<String> {
    let mut head: Vec<String> = match supplied {
        Some(lines) => {
            if lines.len() > HEAD_LINE_LIMIT {
                warn!(
                    supplied = lines.len(),
                    kept = HEAD_LINE_LIMIT,
                    "head block truncated"
                );
            }
            lines
                .iter()
                .take(HEAD_LINE_LIMIT)
                .map(|line| escape_rtf(line).into_owned())
                .collect()
        }
        None => PLACEHOLDER_HEAD.iter().map(|line| line.to_string()).collect(),
    };
    head.resize(HEAD_BLOCK_LINES, String::new());

    if !words.is_long_work() {
        head[0] = format!("{}\t{}", head[0], words.label());
    }
    head
}

fn write_title_page(
    doc: &mut RtfDocument,
    header: &ManuscriptHeader,
    head: &[String],
    words: WordCount,
) {
    doc.add_lines(
        head,
        LineOptions {
            indent: false,
            double_space: false,
            ..LineOptions::default()
        },
    );
    doc.add_lines(&[escape_rtf(&header.title)], LineOptions::styled(Style::Title));
    doc.add_lines(
        &[format!("By {}", escape_rtf(&header.author))],
        LineOptions::styled(Style::Subtitle),
    );

    if words.is_long_work() {
        let mut block = vec![String::new(); 9];
        block.push(words.label());
        doc.add_lines(&block, LineOptions::styled(Style::Centered));
    } else {
        doc.add_lines(&[""], LineOptions::default());
    }
}

fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
