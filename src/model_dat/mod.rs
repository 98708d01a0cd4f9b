//! # Model Description Parser
//!
//! Reads the XSPEC `model.dat` format: a sequence of model blocks separated
//! by blank lines, each a header line followed by one line per parameter.
//!
//! ```text
//! apec           3  0.         1.e20           C_apec    add  0
//! kT      keV     1.   0.008   0.008   64.0      64.0       .01
//! Abundanc " "    1.   0.      0.      5.        5.         -0.001
//! Redshift " "    0.   -0.999  -0.999  10.       10.        -0.01
//! ```
//!
//! The header fields are name, parameter count, energy range, routine,
//! model type, the calculate-errors flag and an optional force-recalculate
//! flag. The routine prefix (`F_`, `c_`, `C_` or none) selects the calling
//! convention and is stripped from the stored function name.

mod error;
mod load;
mod types;

pub use error::*;
pub use load::*;
pub use types::*;
