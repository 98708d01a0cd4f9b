use crate::model_dat::ModelDatError;
use std::fmt;
use std::path::PathBuf;

/// Generation failure
///
/// Every check in the generator fails fast with one of these; nothing is
/// written once an error has been returned.
#[derive(Debug)]
pub enum GenerateError {
    /// The model description path is not an existing file
    MissingInputFile {
        /// Path that was supplied
        path: PathBuf,
    },
    /// The model description could not be parsed
    Parse {
        /// Model description path
        path: PathBuf,
        /// Underlying parse failure
        source: ModelDatError,
    },
    /// The model description contains no models at all
    ParseEmpty {
        /// Model description path
        path: PathBuf,
    },
    /// No additive or multiplicative models were found
    NoEligibleModels {
        /// Model description path
        path: PathBuf,
    },
    /// The output directory does not exist (or is not a directory)
    MissingOutputDir {
        /// Path that was supplied
        path: PathBuf,
    },
    /// A selected model uses a calling convention with no wrapper
    UnrecognizedBindingStyle {
        /// Model name
        model: String,
        /// Function name
        funcname: String,
        /// Language string from the model description
        language: String,
    },
    /// A required marker is absent from the template
    MissingTemplateMarker {
        /// The marker that was searched for
        marker: String,
    },
    /// Generated text contains a marker that has not been substituted yet
    MarkerCollision {
        /// The marker found in the generated text
        marker: String,
        /// The marker whose replacement contained it
        replacing: String,
    },
    /// A registration statement failed to render
    Render(askama::Error),
    /// Reading the template or writing the output failed
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::MissingInputFile { path } => {
                write!(f, "unable to find model.dat file: {}", path.display())
            }
            GenerateError::Parse { path, source } => {
                write!(
                    f,
                    "unable to parse model.dat file: {} ({})",
                    path.display(),
                    source
                )
            }
            GenerateError::ParseEmpty { path } => {
                write!(f, "unable to parse model.dat file: {}", path.display())
            }
            GenerateError::NoEligibleModels { path } => {
                write!(f, "unable to find any models in: {}", path.display())
            }
            GenerateError::MissingOutputDir { path } => {
                write!(f, "unable to find output directory: {}", path.display())
            }
            GenerateError::UnrecognizedBindingStyle {
                model,
                funcname,
                language,
            } => {
                write!(
                    f,
                    "model {} (function {}) uses unsupported language '{}'",
                    model, funcname, language
                )
            }
            GenerateError::MissingTemplateMarker { marker } => {
                write!(f, "unable to find {}", marker)
            }
            GenerateError::MarkerCollision { marker, replacing } => {
                write!(
                    f,
                    "text generated for {} contains the marker {}",
                    replacing, marker
                )
            }
            GenerateError::Render(err) => write!(f, "unable to render model: {}", err),
            GenerateError::Io { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Parse { source, .. } => Some(source),
            GenerateError::Render(err) => Some(err),
            GenerateError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<askama::Error> for GenerateError {
    fn from(err: askama::Error) -> Self {
        GenerateError::Render(err)
    }
}
