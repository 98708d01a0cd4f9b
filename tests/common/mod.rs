#![allow(dead_code)]

pub mod fixtures {
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Template shipped with the crate.
    pub fn shipped_template() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("template")
            .join("xspec.cxx")
    }

    /// Minimal template with all three markers.
    pub const MINI_TEMPLATE: &str = "// add\n@@ADDMODELS@@\n// mul\n@@MULMODELS@@\n// defs\n@@MODELS@@\n";

    /// One additive model of each recognised language, two multiplicative
    /// ones and a convolution model that is never wrapped.
    pub const MODEL_DAT: &str = r#"apec           3  0.         1.e20           C_apec    add  0
kT      keV     1.   0.008   0.008   64.0      64.0       .01
Abundanc " "    1.   0.      0.      5.        5.         -0.001
Redshift " "    0.   -0.999  -0.999  10.       10.        -0.01

bbody          1  0.         1.e20           c_xsbbody add  0
kT      keV     3.0  1.e-2   1.e-2   1.e2      2.e2       0.01

phabs          1  0.03       1.e20           xsphab    mul  0
nH    10^22     1.   0.      0.      1.e5      1.e6       .001

cflux          3  0.         1.e20           C_cflux   con  0
Emin    keV     0.5  0.0     0.0     1e6       1e6        -0.1
Emax    keV     10.0 0.0     0.0     1e6       1e6        -0.1
lg10Flux cgs    -12  -100.0  -100.0  100.0     100.0      0.01

zphabs         2  0.03       1.e20           xszphb    mul  0
nH    10^22     1.   0.      0.      1.e5      1.e6       .001
Redshift " "    0.   -0.999  -0.999  10.       10.        -0.01
"#;

    /// A scratch directory holding a `model.dat`, a template and an empty
    /// `out/` directory.
    pub struct Workspace {
        pub dir: TempDir,
    }

    impl Workspace {
        pub fn new(model_dat: &str, template: &str) -> Self {
            let dir = tempfile::tempdir().unwrap();
            fs::write(dir.path().join("model.dat"), model_dat).unwrap();
            fs::write(dir.path().join("template.cxx"), template).unwrap();
            fs::create_dir(dir.path().join("out")).unwrap();
            Workspace { dir }
        }

        pub fn model_dat(&self) -> PathBuf {
            self.dir.path().join("model.dat")
        }

        pub fn template(&self) -> PathBuf {
            self.dir.path().join("template.cxx")
        }

        pub fn out_dir(&self) -> PathBuf {
            self.dir.path().join("out")
        }

        pub fn outfile(&self) -> PathBuf {
            self.out_dir().join("xspec.cxx")
        }
    }
}
