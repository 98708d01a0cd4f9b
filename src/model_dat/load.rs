use super::error::{ModelDatError, ModelDatErrorKind};
use super::types::{
    BasicParameter, FlagParameter, ModelRecord, Parameter, CXX_STYLE, C_STYLE, FORTRAN_DOUBLE,
    FORTRAN_SINGLE,
};
use once_cell::sync::Lazy;
use regex::Regex;
use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// A double-quoted unit (which may contain spaces) or a bare token.
static TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"]*"|\S+"#).expect("token regex should be valid"));

/// Fields in a model header before the optional force-recalculate flag.
const HEADER_FIELDS: usize = 7;
/// Fields in a basic parameter line, excluding the periodic marker.
const BASIC_FIELDS: usize = 8;
/// Fields in a switch or scale parameter line.
const FLAG_FIELDS: usize = 3;

/// Read and parse a `model.dat` file.
pub fn load_model_dat(path: &Path) -> anyhow::Result<Vec<ModelRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("unable to read model.dat file: {}", path.display()))?;
    let models = parse_model_dat(&content)?;
    debug!(path = %path.display(), models = models.len(), "parsed model description");
    Ok(models)
}

/// Parse the text of a `model.dat` file into records, preserving file order.
///
/// Model blocks are separated by blank lines; an empty (or all blank) input
/// yields an empty vector rather than an error.
pub fn parse_model_dat(text: &str) -> Result<Vec<ModelRecord>, ModelDatError> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));
    let mut models = Vec::new();
    let mut seen = HashSet::new();
    let mut last_line = 0;

    loop {
        let Some((lineno, header)) = lines.by_ref().find(|(_, l)| !l.trim().is_empty()) else {
            break;
        };
        last_line = lineno;

        let (mut model, npars) = parse_header(lineno, header)?;
        if !seen.insert(model.name.clone()) {
            return Err(ModelDatError::new(
                lineno,
                ModelDatErrorKind::DuplicateModel { name: model.name },
            ));
        }

        while model.pars.len() < npars {
            let (n, line) = match lines.next() {
                Some((n, line)) if !line.trim().is_empty() => (n, line),
                other => {
                    let at = other.map_or(last_line, |(n, _)| n);
                    return Err(ModelDatError::new(
                        at,
                        ModelDatErrorKind::MissingParameters {
                            model: model.name,
                            expected: npars,
                            found: model.pars.len(),
                        },
                    ));
                }
            };
            last_line = n;
            model.pars.push(parse_parameter(n, line)?);
        }

        models.push(model);
    }

    Ok(models)
}

/// Map the routine prefix onto a language, returning the bare function name.
pub fn split_routine(routine: &str) -> (&'static str, &str) {
    if let Some(rest) = routine.strip_prefix("F_") {
        (FORTRAN_DOUBLE, rest)
    } else if let Some(rest) = routine.strip_prefix("c_") {
        (C_STYLE, rest)
    } else if let Some(rest) = routine.strip_prefix("C_") {
        (CXX_STYLE, rest)
    } else {
        (FORTRAN_SINGLE, routine)
    }
}

fn canonical_model_type(token: &str) -> Option<&'static str> {
    match token.to_ascii_lowercase().as_str() {
        "add" => Some("Add"),
        "mul" => Some("Mul"),
        "con" => Some("Con"),
        "mix" => Some("Mix"),
        "acn" => Some("Acn"),
        "amx" => Some("Amx"),
        _ => None,
    }
}

fn tokenize(lineno: usize, line: &str) -> Result<Vec<&str>, ModelDatError> {
    if line.matches('"').count() % 2 != 0 {
        return Err(ModelDatError::new(
            lineno,
            ModelDatErrorKind::UnterminatedQuote,
        ));
    }
    Ok(TOKEN_REGEX.find_iter(line).map(|m| m.as_str()).collect())
}

fn parse_number<T: std::str::FromStr>(
    lineno: usize,
    field: &'static str,
    token: &str,
) -> Result<T, ModelDatError> {
    token.parse().map_err(|_| {
        ModelDatError::new(
            lineno,
            ModelDatErrorKind::InvalidNumber {
                field,
                value: token.to_string(),
            },
        )
    })
}

fn parse_flag(lineno: usize, field: &'static str, token: &str) -> Result<bool, ModelDatError> {
    parse_number::<i64>(lineno, field, token).map(|v| v != 0)
}

fn parse_units(token: &str) -> Option<String> {
    let units = token.trim_matches('"').trim();
    if units.is_empty() {
        None
    } else {
        Some(units.to_string())
    }
}

/// Returns the record with no parameters yet, plus the declared count.
fn parse_header(lineno: usize, line: &str) -> Result<(ModelRecord, usize), ModelDatError> {
    let toks = tokenize(lineno, line)?;
    if toks.len() < HEADER_FIELDS {
        return Err(ModelDatError::new(
            lineno,
            ModelDatErrorKind::ShortHeader { found: toks.len() },
        ));
    }

    let npars: usize = parse_number(lineno, "npars", toks[1])?;
    let elow = parse_number(lineno, "elow", toks[2])?;
    let ehigh = parse_number(lineno, "ehigh", toks[3])?;
    let (language, funcname) = split_routine(toks[4]);
    let modeltype = canonical_model_type(toks[5]).ok_or_else(|| {
        ModelDatError::new(
            lineno,
            ModelDatErrorKind::UnknownModelType {
                value: toks[5].to_string(),
            },
        )
    })?;
    let calc_errors = parse_flag(lineno, "calc_errors", toks[6])?;
    let force_recalc = match toks.get(HEADER_FIELDS) {
        Some(tok) => parse_flag(lineno, "force_recalc", tok)?,
        None => false,
    };

    let model = ModelRecord {
        name: toks[0].to_string(),
        modeltype: modeltype.to_string(),
        language: language.to_string(),
        funcname: funcname.to_string(),
        elow,
        ehigh,
        calc_errors,
        force_recalc,
        pars: Vec::new(),
    };
    Ok((model, npars))
}

fn parse_parameter(lineno: usize, line: &str) -> Result<Parameter, ModelDatError> {
    let toks = tokenize(lineno, line)?;
    let name = toks[0];

    let short = |expected| {
        ModelDatError::new(
            lineno,
            ModelDatErrorKind::ShortParameter {
                name: name.to_string(),
                expected,
                found: toks.len(),
            },
        )
    };

    let flag = |stripped: &str| -> Result<FlagParameter, ModelDatError> {
        if toks.len() < FLAG_FIELDS {
            return Err(short(FLAG_FIELDS));
        }
        Ok(FlagParameter {
            name: stripped.to_string(),
            units: parse_units(toks[1]),
            default: parse_number(lineno, "default", toks[2])?,
        })
    };

    if let Some(stripped) = name.strip_prefix('$') {
        return Ok(Parameter::Switch(flag(stripped)?));
    }
    if let Some(stripped) = name.strip_prefix('*') {
        return Ok(Parameter::Scale(flag(stripped)?));
    }

    if toks.len() < BASIC_FIELDS {
        return Err(short(BASIC_FIELDS));
    }
    let delta: f64 = parse_number(lineno, "delta", toks[7])?;
    Ok(Parameter::Basic(BasicParameter {
        name: name.to_string(),
        units: parse_units(toks[1]),
        default: parse_number(lineno, "default", toks[2])?,
        hardmin: parse_number(lineno, "hardmin", toks[3])?,
        softmin: parse_number(lineno, "softmin", toks[4])?,
        softmax: parse_number(lineno, "softmax", toks[5])?,
        hardmax: parse_number(lineno, "hardmax", toks[6])?,
        delta,
        frozen: delta < 0.0,
        periodic: toks
            .get(BASIC_FIELDS)
            .is_some_and(|t| t.eq_ignore_ascii_case("P")),
    }))
}
