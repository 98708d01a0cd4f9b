use serde::Serialize;

/// Language string for routines with no prefix in `model.dat`.
pub const FORTRAN_SINGLE: &str = "Fortran - single precision";
/// Language string for `F_`-prefixed routines.
pub const FORTRAN_DOUBLE: &str = "Fortran - double precision";
/// Language string for `C_`-prefixed routines.
pub const CXX_STYLE: &str = "C++ style";
/// Language string for `c_`-prefixed routines.
pub const C_STYLE: &str = "C style";

/// One model block from a `model.dat` file.
///
/// `modeltype` and `language` are kept as the strings XSPEC documents
/// (`"Add"`, `"C++ style"`, ...) so that downstream consumers decide for
/// themselves which values they support.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelRecord {
    pub name: String,
    pub modeltype: String,
    pub language: String,
    pub funcname: String,
    pub elow: f64,
    pub ehigh: f64,
    pub calc_errors: bool,
    pub force_recalc: bool,
    pub pars: Vec<Parameter>,
}

impl ModelRecord {
    /// Number of parameters declared for the model.
    pub fn npars(&self) -> usize {
        self.pars.len()
    }
}

/// A parameter line from a model block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Parameter {
    /// A fittable parameter with hard and soft limits.
    Basic(BasicParameter),
    /// A `$`-prefixed integer switch.
    Switch(FlagParameter),
    /// A `*`-prefixed scale parameter; never varied in a fit.
    Scale(FlagParameter),
}

impl Parameter {
    pub fn name(&self) -> &str {
        match self {
            Parameter::Basic(p) => &p.name,
            Parameter::Switch(p) | Parameter::Scale(p) => &p.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicParameter {
    pub name: String,
    pub units: Option<String>,
    pub default: f64,
    pub hardmin: f64,
    pub softmin: f64,
    pub softmax: f64,
    pub hardmax: f64,
    pub delta: f64,
    /// Set when `delta` is negative.
    pub frozen: bool,
    pub periodic: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlagParameter {
    pub name: String,
    pub units: Option<String>,
    pub default: f64,
}
