#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::fixtures::{shipped_template, Workspace, MINI_TEMPLATE, MODEL_DAT};
use std::fs;
use xspec_modelgen::generator::{
    generate, GenerateError, GenerateOptions, ADD_MODELS_MARKER, MARKERS, MODELS_MARKER,
};

fn options(ws: &Workspace) -> GenerateOptions {
    GenerateOptions::new(ws.model_dat(), ws.out_dir()).with_template(ws.template())
}

#[test]
fn test_generate_mixed_models() {
    let ws = Workspace::new(MODEL_DAT, MINI_TEMPLATE);
    let result = generate(&options(&ws)).unwrap();

    assert_eq!(result.outfile, ws.outfile());
    assert_eq!(result.allmodels, ["apec", "bbody", "phabs", "cflux", "zphabs"]);
    assert_eq!(result.models, ["apec", "bbody", "phabs", "zphabs"]);
    assert_eq!(result.additive, ["apec", "bbody"]);
    assert_eq!(result.multiplicative, ["phabs", "zphabs"]);
    assert_eq!(result.cxx, ["apec"]);
    assert_eq!(result.c, ["xsbbody"]);
    assert_eq!(result.f77, ["xsphab", "xszphb"]);

    let out = fs::read_to_string(ws.outfile()).unwrap();
    let expected = concat!(
        "// add\napec\nbbody\n",
        "// mul\nphabs\nzphabs\n",
        "// defs\n",
        r#"    m.def("apec", wrapper_C<C_apec, 3>, "The XSPEC additive apec model (3 parameters).","pars"_a,"energies"_a,"spectrum"_a=1,"initStr"_a="");"#,
        "\n",
        r#"    m.def("bbody", wrapper_C<xsbbody, 1>, "The XSPEC additive bbody model (1 parameters).","pars"_a,"energies"_a,"spectrum"_a=1,"initStr"_a="");"#,
        "\n",
        r#"    m.def("phabs", wrapper_f<xsphab_, 1>, "The XSPEC multiplicative phabs model (1 parameters).","pars"_a,"energies"_a,"spectrum"_a=1);"#,
        "\n",
        r#"    m.def("zphabs", wrapper_f<xszphb_, 2>, "The XSPEC multiplicative zphabs model (2 parameters).","pars"_a,"energies"_a,"spectrum"_a=1);"#,
        "\n",
    );
    assert_eq!(out, expected);
}

#[test]
fn test_scenario_a_single_c_additive_model() {
    let model_dat = "apec 3 0. 1.e20 c_apec add 0\n\
                     kT keV 1. 0.008 0.008 64.0 64.0 .01\n\
                     Abundanc \" \" 1. 0. 0. 5. 5. -0.001\n\
                     Redshift \" \" 0. -0.999 -0.999 10. 10. -0.01\n";
    let ws = Workspace::new(model_dat, MINI_TEMPLATE);
    let result = generate(&options(&ws)).unwrap();

    assert_eq!(result.additive, ["apec"]);
    assert!(result.multiplicative.is_empty());
    assert_eq!(result.c, ["apec"]);

    let out = fs::read_to_string(ws.outfile()).unwrap();
    assert!(out.contains("// add\napec\n"));
    assert!(out.contains("wrapper_C<apec, 3>"));
    assert!(out.contains("(3 parameters)"));
    assert!(out.contains("The XSPEC additive apec model"));
    assert!(out.contains(r#""initStr"_a="""#));
}

#[test]
fn test_scenario_b_single_fortran_multiplicative_model() {
    let model_dat = "phabs 1 0.03 1.e20 phabs mul 0\n\
                     nH 10^22 1. 0. 0. 1.e5 1.e6 .001\n";
    let ws = Workspace::new(model_dat, MINI_TEMPLATE);
    let result = generate(&options(&ws)).unwrap();

    assert_eq!(result.multiplicative, ["phabs"]);
    assert!(result.additive.is_empty());
    assert_eq!(result.f77, ["phabs"]);
    assert!(result.c.is_empty() && result.cxx.is_empty());

    let out = fs::read_to_string(ws.outfile()).unwrap();
    assert!(out.contains("wrapper_f<phabs_, 1>"));
    assert!(!out.contains("initStr"));
}

#[test]
fn test_scenario_c_only_convolution_models() {
    let model_dat = "cflux 3 0. 1.e20 C_cflux con 0\n\
                     Emin keV 0.5 0.0 0.0 1e6 1e6 -0.1\n\
                     Emax keV 10.0 0.0 0.0 1e6 1e6 -0.1\n\
                     lg10Flux cgs -12 -100.0 -100.0 100.0 100.0 0.01\n";
    let ws = Workspace::new(model_dat, MINI_TEMPLATE);
    let err = generate(&options(&ws)).unwrap_err();

    assert!(matches!(err, GenerateError::NoEligibleModels { .. }));
    assert!(err.to_string().starts_with("unable to find any models in: "));
    assert!(!ws.outfile().exists());
}

#[test]
fn test_scenario_d_template_missing_models_marker() {
    let ws = Workspace::new(MODEL_DAT, "@@ADDMODELS@@\n@@MULMODELS@@\n");
    let err = generate(&options(&ws)).unwrap_err();

    match &err {
        GenerateError::MissingTemplateMarker { marker } => assert_eq!(marker, MODELS_MARKER),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!ws.outfile().exists());
}

#[test]
fn test_scenario_e_output_path_is_a_file() {
    let ws = Workspace::new(MODEL_DAT, MINI_TEMPLATE);
    let not_a_dir = ws.dir.path().join("plain-file");
    fs::write(&not_a_dir, "").unwrap();

    // A missing template would be an I/O error if it were read first.
    let opts = GenerateOptions::new(ws.model_dat(), &not_a_dir)
        .with_template(ws.dir.path().join("does-not-exist.cxx"));
    let err = generate(&opts).unwrap_err();

    match &err {
        GenerateError::MissingOutputDir { path } => assert_eq!(path, &not_a_dir),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_input_file() {
    let ws = Workspace::new(MODEL_DAT, MINI_TEMPLATE);
    let opts = GenerateOptions::new(ws.dir.path().join("nope.dat"), ws.out_dir())
        .with_template(ws.template());
    let err = generate(&opts).unwrap_err();
    assert!(matches!(err, GenerateError::MissingInputFile { .. }));
}

#[test]
fn test_input_path_is_a_directory() {
    let ws = Workspace::new(MODEL_DAT, MINI_TEMPLATE);
    let opts = GenerateOptions::new(ws.out_dir(), ws.out_dir()).with_template(ws.template());
    let err = generate(&opts).unwrap_err();
    assert!(matches!(err, GenerateError::MissingInputFile { .. }));
}

#[test]
fn test_empty_model_file() {
    let ws = Workspace::new("\n\n", MINI_TEMPLATE);
    let err = generate(&options(&ws)).unwrap_err();
    assert!(matches!(err, GenerateError::ParseEmpty { .. }));
}

#[test]
fn test_malformed_model_file() {
    let ws = Workspace::new("apec 3 0. 1.e20 C_apec add 0\n", MINI_TEMPLATE);
    let err = generate(&options(&ws)).unwrap_err();
    match &err {
        GenerateError::Parse { source, .. } => assert_eq!(source.line, 1),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("declares 3 parameters"));
}

#[test]
fn test_double_precision_fortran_is_rejected() {
    let model_dat = "dblmod 0 0. 1.e20 F_dblmod add 0\n";
    let ws = Workspace::new(model_dat, MINI_TEMPLATE);
    let err = generate(&options(&ws)).unwrap_err();
    match &err {
        GenerateError::UnrecognizedBindingStyle {
            model,
            funcname,
            language,
        } => {
            assert_eq!(model, "dblmod");
            assert_eq!(funcname, "dblmod");
            assert_eq!(language, "Fortran - double precision");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!ws.outfile().exists());
}

#[test]
fn test_missing_template_file() {
    let ws = Workspace::new(MODEL_DAT, MINI_TEMPLATE);
    let opts = GenerateOptions::new(ws.model_dat(), ws.out_dir())
        .with_template(ws.dir.path().join("missing.cxx"));
    let err = generate(&opts).unwrap_err();
    assert!(matches!(err, GenerateError::Io { .. }));
    assert!(!ws.outfile().exists());
}

#[test]
fn test_only_first_marker_occurrence_replaced() {
    let template = format!("{MINI_TEMPLATE}{ADD_MODELS_MARKER}\n");
    let ws = Workspace::new(MODEL_DAT, &template);
    generate(&options(&ws)).unwrap();

    let out = fs::read_to_string(ws.outfile()).unwrap();
    assert!(out.starts_with("// add\napec\nbbody\n"));
    assert!(out.ends_with("@@ADDMODELS@@\n"));
}

#[test]
fn test_existing_output_is_overwritten() {
    let ws = Workspace::new(MODEL_DAT, MINI_TEMPLATE);
    let stale = "stale contents longer than the generated file ".repeat(100);
    fs::write(ws.outfile(), stale).unwrap();
    generate(&options(&ws)).unwrap();
    let out = fs::read_to_string(ws.outfile()).unwrap();
    assert!(out.starts_with("// add\n"));
    assert!(!out.contains("stale"));
}

#[test]
fn test_shipped_template_has_no_markers_left() {
    let ws = Workspace::new(MODEL_DAT, MINI_TEMPLATE);
    let opts = GenerateOptions::new(ws.model_dat(), ws.out_dir()).with_template(shipped_template());
    generate(&opts).unwrap();

    let out = fs::read_to_string(ws.outfile()).unwrap();
    for marker in MARKERS {
        assert!(!out.contains(marker), "{marker} left in output");
    }
    assert!(out.contains("PYBIND11_MODULE"));
    assert!(out.contains(r#"m.def("zphabs", wrapper_f<xszphb_, 2>"#));
}

#[test]
fn test_generation_result_json_keys() {
    let ws = Workspace::new(MODEL_DAT, MINI_TEMPLATE);
    let result = generate(&options(&ws)).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    for key in [
        "outfile",
        "models",
        "allmodels",
        "additive",
        "multiplicative",
        "C++",
        "C",
        "f77",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(value["C++"], serde_json::json!(["apec"]));
}
