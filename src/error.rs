use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between reading a citation and printing it.
///
/// All variants are fatal to the invocation; missing individual fields are
/// not errors and degrade to placeholder text in the rendered line.
#[derive(Error, Debug)]
pub enum CiteError {
    #[error("path {} does not exist", .0.display())]
    FileNotFound(PathBuf),

    #[error("cannot detect format of citation in clipboard")]
    UnknownClipboardFormat,

    #[error("cannot read contents of file with extension '{0}'; if .bib or .ris ensure file contents are correct")]
    UnknownFileFormat(String),

    #[error("cannot parse filetype '{0}'")]
    UnrecognizedFormat(String),

    #[error("author name '{0}' is not in 'Last, First' form")]
    MalformedAuthorName(String),

    #[error("no citation entries found in input")]
    EmptySource,

    #[error("malformed bibtex: {0}")]
    Bibtex(biblatex::ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
}
