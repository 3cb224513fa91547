//! Markdown manuscripts to Standard Manuscript Format RTF.
//!
//! The input is a narrow Markdown dialect: a `# HEAD` block carrying the
//! title, short name and author, then body text where `#` marks a part,
//! `##` a chapter, `###` a section break and `>` a comment.

pub mod convert;
pub mod error;
pub mod head;
pub mod line;
pub mod parser;
pub mod report;
pub mod rtf;
pub mod text;

pub use convert::{
    convert_to_smf, parse_header, ConvertOptions, ManuscriptHeader, WordCount, HEADER_SENTINEL,
};
pub use error::{ConvertError, ConvertResult, ExitCode};
pub use head::{load_head, HeadSource};
pub use line::prepare_lines;
pub use parser::{ManuscriptParser, ParseOptions, ParseState, ParseSummary};
pub use report::{word_report, WordReport};
pub use rtf::{DocumentOptions, LineOptions, RtfDocument, Style};
pub use text::{count_words, heading_level, smart_replace, HeadingLevel};
