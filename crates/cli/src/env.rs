use crate::error::CliError;
use std::collections::HashMap;
use std::fs;

const URI_VAR: &str = "MONGO_URL";

/// Resolves the connection string: explicit flag, then the process
/// environment, then an optional env file.
pub fn resolve_uri(cli_uri: Option<String>, env_file: Option<&str>) -> Result<String, CliError> {
    if let Some(uri) = cli_uri {
        return Ok(uri);
    }
    if let Ok(uri) = std::env::var(URI_VAR) {
        return Ok(uri);
    }
    if let Some(path) = env_file {
        let content = fs::read_to_string(path)?;
        if let Some(uri) = parse_env_content(&content)?.remove(URI_VAR) {
            return Ok(uri);
        }
    }
    Err(CliError::MissingConnectionString)
}

/// Parses KEY=VALUE lines; blank lines and `#` comments are skipped.
fn parse_env_content(content: &str) -> Result<HashMap<String, String>, CliError> {
    let mut vars = HashMap::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(CliError::EnvFileParse(format!(
                "malformed line {} (expected KEY=VALUE)",
                line_num + 1
            )));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(CliError::EnvFileParse(format!(
                "empty key at line {}",
                line_num + 1
            )));
        }

        vars.insert(key.to_string(), unquote(value.trim()).to_string());
    }

    Ok(vars)
}

fn unquote(value: &str) -> &str {
    let stripped = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
    stripped.unwrap_or(value)
}
