//! Model selection and registration statements.
//!
//! Each selected model becomes one pybind11 `m.def(...)` line. Formatting a
//! model is a pure function; [`RegistrationSet::collect`] folds the results
//! into the per-category and per-language name lists.

use askama::Template;
use serde::Serialize;
use std::fmt;

use super::error::GenerateError;
use crate::model_dat::{ModelRecord, CXX_STYLE, C_STYLE, FORTRAN_SINGLE};

/// The two model categories that get bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModelCategory {
    Additive,
    Multiplicative,
}

impl ModelCategory {
    /// `"Add"` and `"Mul"` map to a category; every other type is skipped.
    pub fn from_model_type(modeltype: &str) -> Option<Self> {
        match modeltype {
            "Add" => Some(ModelCategory::Additive),
            "Mul" => Some(ModelCategory::Multiplicative),
            _ => None,
        }
    }

    /// Tag used in the generated docstring.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelCategory::Additive => "additive",
            ModelCategory::Multiplicative => "multiplicative",
        }
    }
}

impl fmt::Display for ModelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calling convention of the routine behind a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BindingStyle {
    /// Single-precision Fortran, called through `wrapper_f`
    Fortran,
    /// C++ routine exported with a `C_` prefix, called through `wrapper_C`
    Cxx,
    /// Plain C routine, called through `wrapper_C`
    C,
}

impl BindingStyle {
    /// Map a model description language string onto a style.
    pub fn from_language(language: &str) -> Option<Self> {
        match language {
            FORTRAN_SINGLE => Some(BindingStyle::Fortran),
            CXX_STYLE => Some(BindingStyle::Cxx),
            C_STYLE => Some(BindingStyle::C),
            _ => None,
        }
    }

    /// The `wrapper_*<symbol, npars>` template instantiation for a routine.
    pub fn wrapper(&self, funcname: &str, npars: usize) -> String {
        match self {
            BindingStyle::Fortran => format!("wrapper_f<{funcname}_, {npars}>"),
            BindingStyle::Cxx => format!("wrapper_C<C_{funcname}, {npars}>"),
            BindingStyle::C => format!("wrapper_C<{funcname}, {npars}>"),
        }
    }

    /// Only the C and C++ interfaces take an initialisation string.
    pub fn takes_init_string(&self) -> bool {
        !matches!(self, BindingStyle::Fortran)
    }
}

/// Template for a single registration line.
#[derive(Template)]
#[template(
    source = r#"    m.def("{{ name }}", {{ wrapper }}, "The XSPEC {{ category }} {{ name }} model ({{ npars }} parameters).","pars"_a,"energies"_a,"spectrum"_a=1{% if init_string %},"initStr"_a=""{% endif %});"#,
    ext = "txt",
    escape = "none"
)]
pub struct RegistrationTemplate<'a> {
    /// Model name as exposed to Python
    pub name: &'a str,
    /// Wrapper instantiation
    pub wrapper: String,
    /// Category tag
    pub category: ModelCategory,
    /// Number of parameters
    pub npars: usize,
    /// Whether to bind `initStr`
    pub init_string: bool,
}

/// A selected model paired with its category.
#[derive(Debug, Clone, Copy)]
pub struct SelectedModel<'a> {
    pub record: &'a ModelRecord,
    pub category: ModelCategory,
}

/// The formatted output for one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub funcname: String,
    pub category: ModelCategory,
    pub style: BindingStyle,
    pub statement: String,
}

/// Keep the additive and multiplicative models, in file order.
pub fn select_models(models: &[ModelRecord]) -> Vec<SelectedModel<'_>> {
    models
        .iter()
        .filter_map(|record| {
            ModelCategory::from_model_type(&record.modeltype)
                .map(|category| SelectedModel { record, category })
        })
        .collect()
}

/// Build the registration for one selected model.
///
/// # Errors
///
/// [`GenerateError::UnrecognizedBindingStyle`] when the model's language has
/// no wrapper.
pub fn format_model(selected: SelectedModel<'_>) -> Result<Registration, GenerateError> {
    let record = selected.record;
    let style = BindingStyle::from_language(&record.language).ok_or_else(|| {
        GenerateError::UnrecognizedBindingStyle {
            model: record.name.clone(),
            funcname: record.funcname.clone(),
            language: record.language.clone(),
        }
    })?;

    let npars = record.npars();
    let statement = RegistrationTemplate {
        name: &record.name,
        wrapper: style.wrapper(&record.funcname, npars),
        category: selected.category,
        npars,
        init_string: style.takes_init_string(),
    }
    .render()?;

    Ok(Registration {
        name: record.name.clone(),
        funcname: record.funcname.clone(),
        category: selected.category,
        style,
        statement,
    })
}

/// Registrations for every selected model plus the name buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationSet {
    pub additive: Vec<String>,
    pub multiplicative: Vec<String>,
    pub cxx: Vec<String>,
    pub c: Vec<String>,
    pub fortran: Vec<String>,
    pub statements: Vec<String>,
}

impl RegistrationSet {
    /// Format every selected model, stopping at the first failure.
    pub fn collect(selected: &[SelectedModel<'_>]) -> Result<Self, GenerateError> {
        let mut set = RegistrationSet::default();
        for model in selected {
            set.push(format_model(*model)?);
        }
        Ok(set)
    }

    fn push(&mut self, reg: Registration) {
        match reg.category {
            ModelCategory::Additive => self.additive.push(reg.name),
            ModelCategory::Multiplicative => self.multiplicative.push(reg.name),
        }
        match reg.style {
            BindingStyle::Fortran => self.fortran.push(reg.funcname),
            BindingStyle::Cxx => self.cxx.push(reg.funcname),
            BindingStyle::C => self.c.push(reg.funcname),
        }
        self.statements.push(reg.statement);
    }
}
