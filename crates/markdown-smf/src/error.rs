use std::io;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    InvalidManuscript = 1,
    Io = 2,
    Config = 3,
}

impl ExitCode {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Success),
            1 => Some(Self::InvalidManuscript),
            2 => Some(Self::Io),
            3 => Some(Self::Config),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("manuscript is empty; the first line must be '# HEAD'")]
    EmptyDocument,

    #[error("first line of document must be '# HEAD', not '{found}'")]
    MissingSentinel { found: String },

    #[error("missing manuscript title")]
    MissingTitle,

    #[error("missing manuscript short name")]
    MissingShortName,

    #[error("missing author name")]
    MissingAuthor,

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl ConvertError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io(_) => ExitCode::Io,
            Self::EmptyDocument
            | Self::MissingSentinel { .. }
            | Self::MissingTitle
            | Self::MissingShortName
            | Self::MissingAuthor => ExitCode::InvalidManuscript,
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_error_names_offending_line() {
        let err = ConvertError::MissingSentinel {
            found: "Title".into(),
        };
        assert_eq!(
            err.to_string(),
            "first line of document must be '# HEAD', not 'Title'"
        );
        assert_eq!(err.exit_code(), ExitCode::InvalidManuscript);
    }

    #[test]
    fn exit_codes_round_trip_through_u8() {
        for code in [
            ExitCode::Success,
            ExitCode::InvalidManuscript,
            ExitCode::Io,
            ExitCode::Config,
        ] {
            assert_eq!(ExitCode::from_u8(code as u8), Some(code));
        }
        assert_eq!(ExitCode::from_u8(9), None);
    }
}
