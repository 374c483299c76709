use std::env;

const DEFAULT_LOG_LIMIT: usize = 100;
const DEFAULT_REFLOG_LIMIT: usize = 50;
const DEFAULT_FZF_LAYOUT: &str = "reverse";

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Maximum number of commits fed to the picker (GIT_PICKER_LOG_LIMIT)
    pub log_limit: usize,
    /// Maximum number of reflog entries fed to the picker (GIT_PICKER_REFLOG_LIMIT)
    pub reflog_limit: usize,
    /// fzf --layout value (GIT_PICKER_FZF_LAYOUT)
    pub fzf_layout: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Settings {
            log_limit: env_usize("GIT_PICKER_LOG_LIMIT", DEFAULT_LOG_LIMIT),
            reflog_limit: env_usize("GIT_PICKER_REFLOG_LIMIT", DEFAULT_REFLOG_LIMIT),
            fzf_layout: validated_layout(env_string("GIT_PICKER_FZF_LAYOUT", DEFAULT_FZF_LAYOUT)),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_limit: DEFAULT_LOG_LIMIT,
            reflog_limit: DEFAULT_REFLOG_LIMIT,
            fzf_layout: DEFAULT_FZF_LAYOUT.to_string(),
        }
    }
}

fn env_string(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

fn env_usize(name: &str, default: usize) -> usize {
    match env::var(name) {
        Ok(value) if !value.is_empty() => value.parse().unwrap_or_else(|_| {
            log::warn!("{name} is not a number ({value}), using default {default}");
            default
        }),
        _ => default,
    }
}

/// Only layouts fzf actually understands; anything else falls back to reverse.
fn validated_layout(layout: String) -> String {
    match layout.as_str() {
        "default" | "reverse" | "reverse-list" => layout,
        other => {
            log::warn!(
                "Invalid fzf layout '{other}', using 'reverse'. Set GIT_PICKER_FZF_LAYOUT to 'default', 'reverse' or 'reverse-list'."
            );
            DEFAULT_FZF_LAYOUT.to_string()
        }
    }
}
