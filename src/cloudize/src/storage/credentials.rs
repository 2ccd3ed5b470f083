use crate::error::CredentialsError;
use std::process::Command;

const TOKEN_VARIABLES: [&str; 2] = ["CLOUDIZE_ACCESS_TOKEN", "GOOGLE_OAUTH_ACCESS_TOKEN"];

/// An OAuth access token from the environment, or from the gcloud CLI.
pub(crate) fn access_token() -> Result<String, CredentialsError> {
    match token_from_env(|name| std::env::var(name).ok()) {
        Some(token) => Ok(token),
        None => gcloud_access_token(),
    }
}

fn token_from_env(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    TOKEN_VARIABLES
        .iter()
        .filter_map(|name| lookup(*name))
        .map(|token| token.trim().to_string())
        .find(|token| !token.is_empty())
}

fn gcloud_access_token() -> Result<String, CredentialsError> {
    let output = Command::new("gcloud")
        .args(["auth", "print-access-token"])
        .output()
        .map_err(CredentialsError::GcloudNotAvailable)?;
    if !output.status.success() {
        return Err(CredentialsError::GcloudFailed {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        Err(CredentialsError::EmptyToken)
    } else {
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_non_blank_variable_wins() {
        let token = token_from_env(|name| match name {
            "CLOUDIZE_ACCESS_TOKEN" => Some("  \n".to_string()),
            "GOOGLE_OAUTH_ACCESS_TOKEN" => Some("ya29.token\n".to_string()),
            _ => None,
        });
        assert_eq!(token.as_deref(), Some("ya29.token"));
    }

    #[test]
    fn no_variables_no_token() {
        assert_eq!(token_from_env(|_| None), None);
    }
}
