//! Prefix template expansion.
//!
//! Configured prefixes may carry `${NAME}` placeholders resolved before
//! use, so one config serves several deployments:
//!
//! ```toml
//! [fetch]
//! prefix = "/myapp/${STAGE}/"
//! ```
//!
//! Placeholders resolve from the process environment. `$$` escapes a
//! literal dollar sign; a `$` not followed by `{` passes through as-is.

use crate::error::ConfigError;

/// Expand `${NAME}` placeholders using the process environment.
///
/// # Errors
///
/// Returns `ConfigError::UndefinedVariable` for a placeholder the
/// environment doesn't define, and `ConfigError::UnterminatedPlaceholder`
/// for a `${` without a closing brace.
pub fn expand_from_env(template: &str) -> std::result::Result<String, ConfigError> {
    expand(template, |name| std::env::var(name).ok())
}

/// Expand `${NAME}` placeholders using an arbitrary lookup.
pub fn expand<F>(template: &str, lookup: F) -> std::result::Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        output.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(stripped) = after.strip_prefix('$') {
            output.push('$');
            rest = stripped;
        } else if let Some(body) = after.strip_prefix('{') {
            let end = body
                .find('}')
                .ok_or_else(|| ConfigError::UnterminatedPlaceholder(template.to_string()))?;
            let name = &body[..end];
            if name.is_empty() {
                return Err(ConfigError::UnterminatedPlaceholder(template.to_string()));
            }
            let value =
                lookup(name).ok_or_else(|| ConfigError::UndefinedVariable(name.to_string()))?;
            output.push_str(&value);
            rest = &body[end + 1..];
        } else {
            output.push('$');
            rest = after;
        }
    }

    output.push_str(rest);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(name: &str) -> Option<String> {
        match name {
            "STAGE" => Some("prod".to_string()),
            "SERVICE" => Some("billing".to_string()),
            _ => None,
        }
    }

    #[test]
    fn plain_strings_pass_through() {
        assert_eq!(expand("/myapp/prod/", vars).unwrap(), "/myapp/prod/");
    }

    #[test]
    fn substitutes_placeholders() {
        assert_eq!(expand("/myapp/${STAGE}/", vars).unwrap(), "/myapp/prod/");
        assert_eq!(
            expand("/${SERVICE}/${STAGE}/", vars).unwrap(),
            "/billing/prod/"
        );
    }

    #[test]
    fn undefined_variable_is_an_error() {
        let err = expand("/myapp/${REGION}/", vars).unwrap_err();
        assert!(matches!(err, ConfigError::UndefinedVariable(name) if name == "REGION"));
    }

    #[test]
    fn unterminated_placeholder_is_an_error() {
        assert!(matches!(
            expand("/myapp/${STAGE", vars),
            Err(ConfigError::UnterminatedPlaceholder(_))
        ));
        assert!(matches!(
            expand("/myapp/${}/", vars),
            Err(ConfigError::UnterminatedPlaceholder(_))
        ));
    }

    #[test]
    fn double_dollar_escapes() {
        assert_eq!(expand("cost$$center", vars).unwrap(), "cost$center");
    }

    #[test]
    fn lone_dollar_passes_through() {
        assert_eq!(expand("pre$fix", vars).unwrap(), "pre$fix");
    }
}
