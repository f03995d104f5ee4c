//=========================================================================
// Quiz Errors
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::PathBuf;

//=== External Crates =====================================================

use thiserror::Error;

//=== QuizError ===========================================================

/// Failures while loading the question set.
///
/// Loading is the only fallible quiz operation. Malformed rows stop the
/// load at the first offending record.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question file could not be opened.
    #[error("cannot open question file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record is missing columns or is otherwise unreadable.
    #[error("malformed question data: {0}")]
    Csv(#[from] csv::Error),

    /// `correct_answer` is not one of `a`, `b`, `c`.
    #[error("question {id} (line {line}): correct_answer {value:?} is not one of a, b, c")]
    InvalidAnswer {
        id: String,
        line: u64,
        value: String,
    },

    /// The file has a header but no questions.
    #[error("question file contains no questions")]
    Empty,
}
