use crate::error::{GmpError, Result};
use std::env;

/// Environment variable holding the Google Maps Platform API key
pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";

/// Variables the demo binary needs before it can build a `MapsHandler`
const REQUIRED_ENV_VARS: &[&str] = &[API_KEY_VAR];

/// Check that the Maps credentials are present before any request is built.
///
/// # Errors
/// `GmpError::MissingEnvVar` listing every absent variable, comma-separated.
pub fn validate_env_vars() -> Result<()> {
    let missing_vars: Vec<&str> = REQUIRED_ENV_VARS
        .iter()
        .copied()
        .filter(|var_name| env::var(var_name).is_err())
        .collect();

    if !missing_vars.is_empty() {
        return Err(GmpError::MissingEnvVar(missing_vars.join(", ")));
    }

    Ok(())
}

/// Read one variable, e.g. [`API_KEY_VAR`] for `MapsHandler::from_env`.
///
/// # Errors
/// `GmpError::MissingEnvVar` naming the variable when it is unset or not
/// valid unicode.
pub fn get_required_env_var(var_name: &str) -> Result<String> {
    env::var(var_name).map_err(|_| GmpError::MissingEnvVar(var_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_reported_by_name() {
        let err = get_required_env_var("ASYNC_GMP_SURELY_UNSET_VAR").unwrap_err();
        assert!(matches!(err, GmpError::MissingEnvVar(ref name) if name == "ASYNC_GMP_SURELY_UNSET_VAR"));
    }

    #[test]
    fn present_variable_is_returned() {
        let path = get_required_env_var("PATH").map(|v| v.is_empty());
        assert!(matches!(path, Ok(false)));
    }
}
