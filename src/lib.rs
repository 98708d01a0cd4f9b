//! # xspec-modelgen
//!
//! **xspec-modelgen** writes the pybind11 module source that exposes XSPEC's
//! additive and multiplicative spectral models to Python, driven by the
//! `model.dat` file that XSPEC ships with its model library.
//!
//! ## Architecture
//!
//! - **[`model_dat`]** - parser for the `model.dat` model description format
//! - **[`generator`]** - model selection, registration statements and template splicing
//! - **[`cli`]** - the `xspec-modelgen` command line
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`runtime_config`]** - environment variable configuration
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(xspec-modelgen)
//!     participant Parser as model_dat::parse_model_dat
//!     participant Registration as generator::registration
//!     participant Splice as generator::splice
//!     participant FS as File System
//!
//!     User->>CLI: generate --model-dat model.dat --output build
//!     CLI->>Parser: parse model.dat
//!     Parser-->>CLI: Vec<ModelRecord>
//!     CLI->>Registration: select Add/Mul models, render m.def lines
//!     Registration-->>CLI: RegistrationSet
//!     CLI->>Splice: replace @@ADDMODELS@@, @@MULMODELS@@, @@MODELS@@
//!     Splice-->>CLI: xspec.cxx source
//!     CLI->>FS: write build/xspec.cxx
//!     CLI-->>User: GenerationResult
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use xspec_modelgen::generator::{generate, GenerateOptions};
//!
//! let opts = GenerateOptions::new("heasoft/Xspec/src/manager/model.dat", "build")
//!     .with_template("template/xspec.cxx");
//! let result = generate(&opts)?;
//! println!("additive: {:?}", result.additive);
//! # Ok::<(), xspec_modelgen::generator::GenerateError>(())
//! ```

pub mod cli;
pub mod generator;
pub mod logging;
pub mod model_dat;
pub mod runtime_config;

pub use generator::{generate, GenerateError, GenerateOptions, GenerationResult};
pub use model_dat::{load_model_dat, parse_model_dat, ModelRecord};
