use std::path::PathBuf;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("perfctl/", env!("CARGO_PKG_VERSION"));

pub(crate) const DEFAULT_SERVER_URL: &str = "http://localhost:9081";
pub(crate) const DEFAULT_DURATION: &str = "30s";
pub(crate) const DEFAULT_CONCURRENT_REQUESTS: &str = "1";
pub(crate) const DEFAULT_QPS: &str = "0";
pub(crate) const DEFAULT_LOAD_GENERATOR: &str = "fortio";

/// Auth file written by the Meshery UI login flow.
pub(crate) fn default_token_path() -> String {
    default_base_dir()
        .join("auth.json")
        .to_string_lossy()
        .into_owned()
}

fn default_base_dir() -> PathBuf {
    if let Some(home) = user_home_dir() {
        return home.join(".meshery");
    }

    PathBuf::from(".meshery")
}

fn user_home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        if let Some(value) = std::env::var_os("USERPROFILE") {
            return Some(PathBuf::from(value));
        }
        let drive = std::env::var_os("HOMEDRIVE");
        let path = std::env::var_os("HOMEPATH");
        match (drive, path) {
            (Some(drive), Some(path)) => {
                let mut full = PathBuf::from(drive);
                full.push(path);
                return Some(full);
            }
            _ => {}
        }
    }

    if let Some(value) = std::env::var_os("HOME") {
        return Some(PathBuf::from(value));
    }

    None
}
