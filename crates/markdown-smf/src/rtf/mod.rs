//! Incremental RTF document builder.
//!
//! Content is kept as an ordered list of rendered fragments that sit between
//! the fixed template prologue and epilogue, so every `add_lines` call lands
//! after all earlier ones and before the closing boilerplate.

mod template;

use crate::text::encode_unicode;
use template::{
    COURIER_STYLESHEET, EPILOGUE, HEADER, HEADING_STYLE, NORMAL_STYLE, PROLOGUE, TIMES_STYLESHEET,
};

/// Token in header text that becomes a live page-number field.
pub const PAGE_NUMBER_TOKEN: &str = "_P#_";

const PAGE_NUMBER_FIELD: &str = r"{\field{\*\fldinst{PAGE}}{\fldrslt}}";
const PAGE_BREAK: &str = r"\pagebb";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    TimesNewRoman,
    CourierNew,
}

impl Font {
    pub fn code(self) -> &'static str {
        match self {
            Self::TimesNewRoman => "f0",
            Self::CourierNew => "f3",
        }
    }

    fn stylesheet(self) -> &'static str {
        match self {
            Self::TimesNewRoman => TIMES_STYLESHEET,
            Self::CourierNew => COURIER_STYLESHEET,
        }
    }
}

/// Paragraph style applied to every line of one `add_lines` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Normal,
    Centered,
    Heading1,
    Heading2,
    Title,
    Subtitle,
}

impl Style {
    /// Stylesheet entry the style refers to.
    pub fn code(self) -> &'static str {
        match self {
            Self::Normal => "s0",
            Self::Heading1 => "s1",
            Self::Heading2 => "s2",
            Self::Centered => "s3",
            Self::Title => "s15",
            Self::Subtitle => "s16",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOptions {
    pub style: Style,
    /// Half-inch first-line indent. Only honoured for `Style::Normal`.
    pub indent: bool,
    pub double_space: bool,
    /// Break the page before the first line of the group.
    pub new_page: bool,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            style: Style::Normal,
            indent: true,
            double_space: true,
            new_page: false,
        }
    }
}

impl LineOptions {
    pub fn styled(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn page_break() -> Self {
        Self {
            new_page: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    pub monospace: bool,
    /// Header for every page. `_P#_` becomes the page number.
    pub header_text: Option<String>,
    /// Separate first-page header; setting it turns on title-page formatting.
    pub first_header_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderKind {
    Every,
    FirstPage,
}

impl HeaderKind {
    fn control_word(self) -> &'static str {
        match self {
            Self::Every => "header",
            Self::FirstPage => "headerf",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RtfDocument {
    font: Font,
    prologue: String,
    fragments: Vec<String>,
}

impl RtfDocument {
    pub fn new(options: DocumentOptions) -> Self {
        let font = if options.monospace {
            Font::CourierNew
        } else {
            Font::TimesNewRoman
        };
        let title_page = if options.first_header_text.is_some() {
            r"\titlepg"
        } else {
            ""
        };
        let prologue = PROLOGUE
            .replace("__STYLESHEET__", font.stylesheet())
            .replace("__TITLEPG__", title_page);

        let mut document = Self {
            font,
            prologue,
            fragments: Vec::new(),
        };

        if let Some(text) = &options.header_text {
            let header = document.render_header(text, HeaderKind::Every);
            document.fragments.push(header);
        }
        if let Some(text) = &options.first_header_text {
            let header = document.render_header(text, HeaderKind::FirstPage);
            document.fragments.push(header);
        }

        document
    }

    pub fn font(&self) -> Font {
        self.font
    }

    /// Appends one paragraph per line, all sharing the given options.
    ///
    /// With `new_page` only the first paragraph carries the page break. An
    /// empty slice appends nothing.
    pub fn add_lines<S: AsRef<str>>(&mut self, lines: &[S], options: LineOptions) {
        let Some((first, rest)) = lines.split_first() else {
            return;
        };

        let format = self.paragraph_format(&options);
        if options.new_page {
            self.fragments
                .push(format.replace("__PAGEBR__", PAGE_BREAK));
            self.fragments.push(paragraph(first.as_ref()));
            self.fragments.push(format.replace("__PAGEBR__", ""));
        } else {
            self.fragments.push(format.replace("__PAGEBR__", ""));
            self.fragments.push(paragraph(first.as_ref()));
        }

        self.fragments
            .extend(rest.iter().map(|line| paragraph(line.as_ref())));
    }

    /// Serializes the document. Pure: repeated calls return the same text,
    /// and lines added afterwards show up in the next dump.
    pub fn dump(&self) -> String {
        let content_len: usize = self.fragments.iter().map(|f| f.len() + 1).sum();
        let mut output =
            String::with_capacity(self.prologue.len() + content_len + EPILOGUE.len());

        output.push_str(&self.prologue);
        for fragment in &self.fragments {
            output.push_str(fragment);
            output.push('\n');
        }
        output.push_str(EPILOGUE);
        output
    }

    fn render_header(&self, text: &str, kind: HeaderKind) -> String {
        let text = encode_unicode(text).replace(PAGE_NUMBER_TOKEN, PAGE_NUMBER_FIELD);
        HEADER
            .replace("__HEADERTYPE__", kind.control_word())
            .replace("__FONT__", self.font.code())
            .replace("__TEXT__", &text)
    }

    fn paragraph_format(&self, options: &LineOptions) -> String {
        let format = match options.style {
            Style::Normal => {
                NORMAL_STYLE.replace("__INDENT__", if options.indent { "720" } else { "0" })
            }
            style => HEADING_STYLE.replace("__STYLE__", style.code()),
        };
        let spacing = if options.double_space { "480" } else { "240" };

        format
            .replace("__SPACING__", spacing)
            .replace("__FONT__", self.font.code())
    }
}

fn paragraph(line: &str) -> String {
    let line = line.replace('\n', r" \par ").replace('\t', r" \tab ");
    format!("{{{} \\par}}", encode_unicode(&line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> RtfDocument {
        RtfDocument::new(DocumentOptions::default())
    }

    #[test]
    fn empty_document_is_prologue_plus_epilogue() {
        let doc = document();
        let dumped = doc.dump();
        assert!(dumped.starts_with(r"{\rtf1\ansi"));
        assert!(dumped.ends_with("TOC Heading;}}}"));
        assert!(!dumped.contains("__HEAD__"));
        assert!(!dumped.contains("__STYLESHEET__"));
        assert!(!dumped.contains("__TITLEPG__"));
        assert!(!dumped.contains(r"\titlepg"));
    }

    #[test]
    fn monospace_selects_courier() {
        let mut doc = RtfDocument::new(DocumentOptions {
            monospace: true,
            ..DocumentOptions::default()
        });
        doc.add_lines(&["text"], LineOptions::default());
        let dumped = doc.dump();
        assert_eq!(doc.font(), Font::CourierNew);
        assert!(dumped.contains(r"\hich\f3"));
        assert!(dumped.contains(r"\af3\afs24\ltrch\b0\i0\fs24\f3"));
    }

    #[test]
    fn headers_and_title_page() {
        let doc = RtfDocument::new(DocumentOptions {
            monospace: false,
            header_text: Some("Doe / Short / _P#_".into()),
            first_header_text: Some(String::new()),
        });
        let dumped = doc.dump();
        assert!(dumped.contains(r"\sectd\titlepg\sectlinegrid360"));
        assert!(dumped.contains(r"{\header\pard"));
        assert!(dumped.contains(r"{\headerf\pard"));
        assert!(dumped.contains(r"{Doe / Short / {\field{\*\fldinst{PAGE}}{\fldrslt}}}}"));
        assert!(dumped.find(r"{\header\pard") < dumped.find(r"{\headerf\pard"));
    }

    #[test]
    fn page_break_only_on_first_line() {
        let mut doc = document();
        doc.add_lines(&["one", "two"], LineOptions::page_break());
        let dumped = doc.dump();
        assert_eq!(dumped.matches(PAGE_BREAK).count(), 1);

        let break_at = dumped.find(PAGE_BREAK).unwrap();
        let one_at = dumped.find("{one \\par}").unwrap();
        let two_at = dumped.find("{two \\par}").unwrap();
        assert!(break_at < one_at && one_at < two_at);
        assert_eq!(dumped.matches(r"\pard\plain\itap0\s0").count(), 2);
    }

    #[test]
    fn style_indent_and_spacing() {
        let mut doc = document();
        doc.add_lines(
            &["head"],
            LineOptions {
                indent: false,
                double_space: false,
                ..LineOptions::default()
            },
        );
        doc.add_lines(
            &["title"],
            LineOptions {
                indent: true,
                ..LineOptions::styled(Style::Title)
            },
        );
        let dumped = doc.dump();
        assert!(dumped.contains(r"\fi0\sb0\sa0"));
        assert!(dumped.contains(r"\sl240\slmult1"));
        assert!(dumped.contains(r"\pard\plain\itap0\s15\keep\keepn\ilvl0\fi0"));
    }

    #[test]
    fn translates_newlines_tabs_and_unicode() {
        let mut doc = document();
        doc.add_lines(&["a\tb\nc", "naïve"], LineOptions::default());
        let dumped = doc.dump();
        assert!(dumped.contains(r"{a \tab b \par c \par}"));
        assert!(dumped.contains(r"{na\u239 ve \par}"));
    }

    #[test]
    fn empty_group_appends_nothing() {
        let mut doc = document();
        let before = doc.dump();
        doc.add_lines::<&str>(&[], LineOptions::page_break());
        assert_eq!(doc.dump(), before);
    }

    #[test]
    fn content_keeps_call_order_and_dump_is_repeatable() {
        let mut doc = document();
        doc.add_lines(&["first"], LineOptions::default());
        doc.add_lines(&["second"], LineOptions::styled(Style::Centered));

        let once = doc.dump();
        let twice = doc.dump();
        assert_eq!(once, twice);
        assert!(once.find("{first \\par}") < once.find("{second \\par}"));
        assert!(once.find("{second \\par}") < once.find(r"{\*\latentstyles"));

        doc.add_lines(&["third"], LineOptions::default());
        assert!(doc.dump().contains("{third \\par}"));
    }
}
