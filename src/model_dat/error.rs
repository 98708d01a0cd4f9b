use std::fmt;

/// Parse failure in a `model.dat` file
///
/// Carries the 1-based line number the problem was detected on.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDatError {
    /// Line the error was detected on
    pub line: usize,
    /// What went wrong
    pub kind: ModelDatErrorKind,
}

impl ModelDatError {
    pub(crate) fn new(line: usize, kind: ModelDatErrorKind) -> Self {
        Self { line, kind }
    }
}

/// The individual ways a `model.dat` file can be malformed
#[derive(Debug, Clone, PartialEq)]
pub enum ModelDatErrorKind {
    /// Header line has fewer than the seven required fields
    ShortHeader {
        /// Number of fields found
        found: usize,
    },
    /// A field that should be numeric failed to parse
    InvalidNumber {
        /// Name of the field
        field: &'static str,
        /// The offending token
        value: String,
    },
    /// The model type is not one XSPEC defines
    UnknownModelType {
        /// The offending token
        value: String,
    },
    /// The file ended before all declared parameters were read
    MissingParameters {
        /// Model being read
        model: String,
        /// Parameters declared in the header
        expected: usize,
        /// Parameters actually read
        found: usize,
    },
    /// A parameter line is missing required fields
    ShortParameter {
        /// Parameter name
        name: String,
        /// Fields required for this kind of parameter
        expected: usize,
        /// Fields found
        found: usize,
    },
    /// A double-quoted unit is never closed
    UnterminatedQuote,
    /// The same model name appears twice
    DuplicateModel {
        /// Model name
        name: String,
    },
}

impl fmt::Display for ModelDatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ModelDatErrorKind::ShortHeader { found } => {
                write!(
                    f,
                    "model header needs at least 7 fields, found {}",
                    found
                )
            }
            ModelDatErrorKind::InvalidNumber { field, value } => {
                write!(f, "invalid {} value '{}'", field, value)
            }
            ModelDatErrorKind::UnknownModelType { value } => {
                write!(f, "unknown model type '{}'", value)
            }
            ModelDatErrorKind::MissingParameters {
                model,
                expected,
                found,
            } => {
                write!(
                    f,
                    "model {} declares {} parameters but only {} were found",
                    model, expected, found
                )
            }
            ModelDatErrorKind::ShortParameter {
                name,
                expected,
                found,
            } => {
                write!(
                    f,
                    "parameter {} needs {} fields, found {}",
                    name, expected, found
                )
            }
            ModelDatErrorKind::UnterminatedQuote => write!(f, "unterminated quoted unit"),
            ModelDatErrorKind::DuplicateModel { name } => {
                write!(f, "model {} is defined more than once", name)
            }
        }
    }
}

impl std::error::Error for ModelDatError {}
