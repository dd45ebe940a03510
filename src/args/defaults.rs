use std::path::PathBuf;

pub(crate) fn default_store_path() -> String {
    default_base_dir()
        .join("checkpoints.json")
        .to_string_lossy()
        .into_owned()
}

fn default_base_dir() -> PathBuf {
    if let Some(home) = user_home_dir() {
        return home.join(".scroll-assist");
    }

    PathBuf::from(".scroll-assist")
}

fn user_home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        if let Some(value) = std::env::var_os("USERPROFILE") {
            return Some(PathBuf::from(value));
        }
    }

    std::env::var_os("HOME").map(PathBuf::from)
}
