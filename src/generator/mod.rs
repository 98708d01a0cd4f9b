//! # Generator Module
//!
//! Turns a parsed `model.dat` into `xspec.cxx`, the pybind11 module source
//! that exposes each additive and multiplicative XSPEC model to Python.
//!
//! ## Architecture
//!
//! ```text
//! model.dat → model_dat parser → select + format → splice into template → xspec.cxx
//! ```
//!
//! 1. **Selection** - only `Add` and `Mul` models are kept, in file order
//! 2. **Formatting** - each model becomes one `m.def(...)` registration line,
//!    rendered from an Askama template
//! 3. **Splicing** - the template's `@@ADDMODELS@@`, `@@MULMODELS@@` and
//!    `@@MODELS@@` markers are replaced, in that order, by the additive
//!    names, the multiplicative names and the registration lines
//!
//! ## Registration lines
//!
//! ```text
//!     m.def("apec", wrapper_C<C_apec, 3>, "The XSPEC additive apec model (3 parameters).","pars"_a,"energies"_a,"spectrum"_a=1,"initStr"_a="");
//!     m.def("phabs", wrapper_f<xsphab_, 1>, "The XSPEC multiplicative phabs model (1 parameters).","pars"_a,"energies"_a,"spectrum"_a=1);
//! ```
//!
//! Fortran routines take no initialisation string, so their line has no
//! `initStr` binding.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use xspec_modelgen::generator::{generate, GenerateOptions};
//!
//! let result = generate(&GenerateOptions::new("model.dat", "build"))?;
//! println!("wrote {} models to {}", result.models.len(), result.outfile.display());
//! # Ok::<(), xspec_modelgen::generator::GenerateError>(())
//! ```

mod error;
mod project;
mod registration;
mod splice;

pub use error::*;
pub use project::*;
pub use registration::*;
pub use splice::*;
