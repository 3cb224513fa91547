use std::borrow::Cow;

/// Leading character that marks parts, chapters and section breaks.
pub const HEADING_MARKER: char = '#';
/// Leading character of a comment line.
pub const COMMENT_MARKER: char = '>';

pub const SINGLE_LEFT_QUOTE: &str = r"\lquote ";
pub const SINGLE_RIGHT_QUOTE: &str = r"\rquote ";
pub const DOUBLE_LEFT_QUOTE: &str = r"\ldblquote ";
pub const DOUBLE_RIGHT_QUOTE: &str = r"\rdblquote ";
pub const EM_DASH: &str = r"\emdash ";
pub const ITALICS_ON: &str = r"\i ";
pub const ITALICS_OFF: &str = r"\i0 ";

/// Structural role of a source line, decided by its leading markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    Body,
    Part,
    Chapter,
    Section,
}

impl HeadingLevel {
    pub fn depth(self) -> usize {
        match self {
            Self::Body => 0,
            Self::Part => 1,
            Self::Chapter => 2,
            Self::Section => 3,
        }
    }

    pub fn is_division(self) -> bool {
        matches!(self, Self::Part | Self::Chapter)
    }
}

/// Classifies a line by counting up to four leading markers.
///
/// Three or more markers are all section breaks. Lines shorter than the
/// scan window are only scanned as far as they go.
pub fn heading_level(line: &str) -> HeadingLevel {
    let markers = line
        .chars()
        .take(4)
        .take_while(|&ch| ch == HEADING_MARKER)
        .count();

    match markers {
        0 => HeadingLevel::Body,
        1 => HeadingLevel::Part,
        2 => HeadingLevel::Chapter,
        _ => HeadingLevel::Section,
    }
}

pub fn is_comment(line: &str) -> bool {
    line.starts_with(COMMENT_MARKER)
}

/// Counts whitespace-separated words, skipping heading and comment lines.
pub fn count_words<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.starts_with(HEADING_MARKER) && !is_comment(line))
        .map(|line| line.split_whitespace().count())
        .sum()
}

/// Escapes the characters RTF treats as syntax.
pub fn escape_rtf(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '{', '}']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        if matches!(ch, '\\' | '{' | '}') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    Cow::Owned(escaped)
}

/// Rewrites non-ASCII characters as `\uN ` control words (UTF-16 units, signed).
pub fn encode_unicode(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }

    let mut encoded = String::with_capacity(text.len() + 16);
    let mut units = [0u16; 2];
    for ch in text.chars() {
        if ch.is_ascii() {
            encoded.push(ch);
            continue;
        }
        for unit in ch.encode_utf16(&mut units) {
            encoded.push_str(&format!("\\u{} ", *unit as i16));
        }
    }
    Cow::Owned(encoded)
}

/// Typographic substitutions for a body line: em-dashes, space collapsing,
/// directional quotes and `*` italics.
///
/// The space collapse runs exactly twice, so runs of up to four spaces end up
/// single while longer runs keep two or more.
///
/// A quote opens when the character before it weighs less than the character
/// after it. The "before" side is read from the output written so far, which
/// matters after a substitution: every replacement token ends in a space.
pub fn smart_replace(line: &str) -> String {
    let line = line.replace("--", EM_DASH).replace("  ", " ").replace("  ", " ");
    let chars: Vec<char> = line.chars().collect();

    let mut output = String::with_capacity(line.len() + 32);
    let mut italics_on = false;

    for (idx, &ch) in chars.iter().enumerate() {
        match ch {
            '\'' | '"' => {
                let before = char_weight(output.chars().next_back());
                let after = char_weight(chars.get(idx + 1).copied());
                let token = match (ch, before < after) {
                    ('\'', true) => SINGLE_LEFT_QUOTE,
                    ('\'', false) => SINGLE_RIGHT_QUOTE,
                    (_, true) => DOUBLE_LEFT_QUOTE,
                    (_, false) => DOUBLE_RIGHT_QUOTE,
                };
                output.push_str(token);
            }
            '*' => {
                output.push_str(if italics_on { ITALICS_OFF } else { ITALICS_ON });
                italics_on = !italics_on;
            }
            _ => output.push(ch),
        }
    }

    if italics_on {
        output.push_str(ITALICS_OFF);
    }

    output
}

fn char_weight(ch: Option<char>) -> u8 {
    match ch {
        None | Some(' ') => 0,
        Some(ch) if ch.is_alphanumeric() => 2,
        Some(_) => 1,
    }
}
