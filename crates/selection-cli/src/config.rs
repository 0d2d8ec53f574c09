//! Client configuration from `--config` and `--base-url`

use anyhow::Context;
use selection_client::ClientConfig;
use std::path::Path;

/// Load `config_path` (or the defaults), then rebase onto `base_url` if given
pub fn client_config(
    config_path: Option<&Path>,
    base_url: Option<&str>,
) -> anyhow::Result<ClientConfig> {
    let config = match config_path {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::new(),
    };
    match base_url {
        Some(base) => config
            .with_base_url(base)
            .with_context(|| format!("invalid --base-url {base}")),
        None => Ok(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selection_client::config::DEFAULT_USERS_URL;
    use std::io::Write;

    #[test]
    fn defaults_without_flags() {
        let config = client_config(None, None).unwrap();
        assert_eq!(config.users.url, DEFAULT_USERS_URL);
    }

    #[test]
    fn base_url_rebases_file_endpoints() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = 3\n\n[users]\nurl = \"https://example.com/people\"").unwrap();

        let config = client_config(Some(file.path()), Some("http://127.0.0.1:9000")).unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.users.url, "http://127.0.0.1:9000/people");
    }

    #[test]
    fn bad_inputs_are_errors() {
        let err = client_config(None, Some("not a url")).unwrap_err();
        assert!(err.to_string().contains("--base-url"));
        assert!(client_config(Some(Path::new("/nonexistent/selection.toml")), None).is_err());
    }
}
