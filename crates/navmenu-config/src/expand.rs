//! `${VAR}` expansion in `source.path` and `render.link_prefix`.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` in `value` from the process
/// environment.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    expand_with(value, field, |name| std::env::var(name).ok())
}

/// Expand `value` resolving variables through `lookup`.
///
/// A `${VAR}` whose lookup yields `None` is an error naming `field`; with
/// `${VAR:-default}` the default is used instead. A bare `$VAR` is kept.
fn expand_with(
    value: &str,
    field: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    // `$$` is shellexpand's escape for a literal `$`
    let braced_only = value.replace('$', "$$").replace("$${", "${");
    shellexpand::env_with_context(&braced_only, |name| lookup(name).map(Some).ok_or(()))
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}
