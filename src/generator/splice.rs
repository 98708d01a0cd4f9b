use super::error::GenerateError;

/// Replaced by the newline-separated additive model names.
pub const ADD_MODELS_MARKER: &str = "@@ADDMODELS@@";
/// Replaced by the newline-separated multiplicative model names.
pub const MUL_MODELS_MARKER: &str = "@@MULMODELS@@";
/// Replaced by the registration statements.
pub const MODELS_MARKER: &str = "@@MODELS@@";

/// Substitution order.
pub const MARKERS: [&str; 3] = [ADD_MODELS_MARKER, MUL_MODELS_MARKER, MODELS_MARKER];

/// Replace the first occurrence of `marker` in `text`.
///
/// Later occurrences are left untouched.
pub fn replace_first(text: &str, marker: &str, replacement: &str) -> Result<String, GenerateError> {
    let idx = text
        .find(marker)
        .ok_or_else(|| GenerateError::MissingTemplateMarker {
            marker: marker.to_string(),
        })?;

    let mut out = String::with_capacity(text.len() - marker.len() + replacement.len());
    out.push_str(&text[..idx]);
    out.push_str(replacement);
    out.push_str(&text[idx + marker.len()..]);
    Ok(out)
}

/// Apply each `(marker, replacement)` pair in order, each to the result of
/// the previous one.
///
/// A replacement may not contain any marker that is still to be
/// substituted, since the later search would find it instead of the
/// template's own marker.
pub fn splice(template: &str, substitutions: &[(&str, String)]) -> Result<String, GenerateError> {
    let mut out = template.to_string();
    for (i, (marker, replacement)) in substitutions.iter().enumerate() {
        if let Some((pending, _)) = substitutions[i + 1..]
            .iter()
            .find(|(pending, _)| replacement.contains(pending))
        {
            return Err(GenerateError::MarkerCollision {
                marker: pending.to_string(),
                replacing: marker.to_string(),
            });
        }
        out = replace_first(&out, marker, replacement)?;
    }
    Ok(out)
}
