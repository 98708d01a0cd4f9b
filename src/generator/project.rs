use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::error::GenerateError;
use super::registration::{select_models, RegistrationSet};
use super::splice::{splice, ADD_MODELS_MARKER, MODELS_MARKER, MUL_MODELS_MARKER};
use crate::model_dat::parse_model_dat;

/// Default template location, relative to the working directory.
pub const TEMPLATE_PATH: &str = "template/xspec.cxx";
/// Name of the generated file inside the output directory.
pub const OUTPUT_FILE: &str = "xspec.cxx";

/// Inputs for one generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// The `model.dat` file to read
    pub model_dat: PathBuf,
    /// Existing directory that receives `xspec.cxx`
    pub out_dir: PathBuf,
    /// Template containing the three markers
    pub template: PathBuf,
}

impl GenerateOptions {
    /// Options using the default template location.
    pub fn new(model_dat: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dat: model_dat.into(),
            out_dir: out_dir.into(),
            template: PathBuf::from(TEMPLATE_PATH),
        }
    }

    /// Read the template from `template` instead of the default location.
    pub fn with_template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = template.into();
        self
    }
}

/// Summary of a generator run
///
/// Serialises with the key names downstream build scripts expect
/// (`outfile`, `models`, `allmodels`, `additive`, `multiplicative`, `C++`,
/// `C`, `f77`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    /// The file that was written
    pub outfile: PathBuf,
    /// Names of the models that were wrapped
    pub models: Vec<String>,
    /// Names of every model in the description file
    pub allmodels: Vec<String>,
    /// Additive model names
    pub additive: Vec<String>,
    /// Multiplicative model names
    pub multiplicative: Vec<String>,
    /// Function names of the C++-style models
    #[serde(rename = "C++")]
    pub cxx: Vec<String>,
    /// Function names of the C-style models
    #[serde(rename = "C")]
    pub c: Vec<String>,
    /// Function names of the Fortran models
    pub f77: Vec<String>,
}

/// Splice the registrations into the template text.
pub fn render_source(template: &str, set: &RegistrationSet) -> Result<String, GenerateError> {
    splice(
        template,
        &[
            (ADD_MODELS_MARKER, set.additive.join("\n")),
            (MUL_MODELS_MARKER, set.multiplicative.join("\n")),
            (MODELS_MARKER, set.statements.join("\n")),
        ],
    )
}

fn read(path: &Path) -> Result<String, GenerateError> {
    fs::read_to_string(path).map_err(|source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Generate `xspec.cxx` from a `model.dat` file
///
/// Checks are made in order and the first failure ends the run: the model
/// file must exist, parse, contain models and contain at least one additive
/// or multiplicative model; the output directory must exist; every selected
/// model must use a supported language; the template must contain all three
/// markers. The output file is only written once everything has succeeded.
///
/// # Errors
///
/// Returns the [`GenerateError`] for the first check that fails, or an I/O
/// error from reading the inputs or writing the output.
pub fn generate(opts: &GenerateOptions) -> Result<GenerationResult, GenerateError> {
    if !opts.model_dat.is_file() {
        return Err(GenerateError::MissingInputFile {
            path: opts.model_dat.clone(),
        });
    }

    let allmodels = parse_model_dat(&read(&opts.model_dat)?).map_err(|source| {
        GenerateError::Parse {
            path: opts.model_dat.clone(),
            source,
        }
    })?;
    if allmodels.is_empty() {
        return Err(GenerateError::ParseEmpty {
            path: opts.model_dat.clone(),
        });
    }

    let selected = select_models(&allmodels);
    if selected.is_empty() {
        return Err(GenerateError::NoEligibleModels {
            path: opts.model_dat.clone(),
        });
    }
    debug!(
        total = allmodels.len(),
        selected = selected.len(),
        "selected additive and multiplicative models"
    );

    if !opts.out_dir.is_dir() {
        return Err(GenerateError::MissingOutputDir {
            path: opts.out_dir.clone(),
        });
    }

    let set = RegistrationSet::collect(&selected)?;
    let source = render_source(&read(&opts.template)?, &set)?;

    let outfile = opts.out_dir.join(OUTPUT_FILE);
    if let Some(parent) = outfile.parent() {
        fs::create_dir_all(parent).map_err(|source| GenerateError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&outfile, source).map_err(|source| GenerateError::Io {
        path: outfile.clone(),
        source,
    })?;
    info!(
        outfile = %outfile.display(),
        additive = set.additive.len(),
        multiplicative = set.multiplicative.len(),
        "wrote model bindings"
    );

    Ok(GenerationResult {
        outfile,
        models: selected.iter().map(|m| m.record.name.clone()).collect(),
        allmodels: allmodels.iter().map(|m| m.name.clone()).collect(),
        additive: set.additive,
        multiplicative: set.multiplicative,
        cxx: set.cxx,
        c: set.c,
        f77: set.fortran,
    })
}
