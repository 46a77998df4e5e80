//! Command handlers for the `impc` CLI.
//!
//! Each submodule implements one command. Error rendering shared by all of
//! them lives here.

use std::error::Error;
use std::fmt::Write as _;

use imp_lexer_core::ScanError;

mod lex;
mod words;

pub use lex::{
    lex_files, parse_lex_options, render_report, scan_files, FileReport, LexOptions,
};
pub use words::{list_reserved_words, render_reserved_words};

/// `error[<kind>]: <message>: <cause>...` for a scan failure.
pub fn describe_error(err: &ScanError) -> String {
    let mut msg = format!("error[{}]: {err}", err.kind());
    let mut cause = err.source();
    while let Some(inner) = cause {
        let _ = write!(msg, ": {inner}");
        cause = inner.source();
    }
    msg
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use imp_lexer_core::ScanError;
    use pretty_assertions::assert_eq;

    use super::describe_error;

    #[test]
    fn error_includes_kind_and_cause() {
        let err = ScanError::SourceUnavailable {
            path: PathBuf::from("gone.imp"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            describe_error(&err),
            "error[source-unavailable]: cannot open 'gone.imp': no such file"
        );
    }

    #[test]
    fn error_without_cause() {
        let err = ScanError::UnterminatedComment { offset: 3 };
        assert_eq!(
            describe_error(&err),
            "error[unterminated-comment]: unterminated block comment starting at byte 3"
        );
    }
}
