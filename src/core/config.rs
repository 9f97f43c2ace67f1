use clap::ValueEnum;
use serde::Serialize;
use std::path::PathBuf;

/// How a new copy/cut treats whatever is already pending on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardMode {
    /// One pending path; a new copy/cut replaces it.
    #[default]
    Single,
    /// Copy/cut with the same operation appends to the pending paths.
    Multi,
}

/// What paste does when a destination file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Overwrite same-named files silently while merging.
    #[default]
    Overwrite,
    /// List the conflicting files and wait for the user to confirm.
    Confirm,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExplorerConfig {
    pub start_dir: PathBuf,
    pub show_hidden: bool,
    pub clipboard_mode: ClipboardMode,
    pub conflict_policy: ConflictPolicy,
    pub warn_on_clipboard_replace: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            start_dir: default_start_dir(),
            show_hidden: false,
            clipboard_mode: ClipboardMode::default(),
            conflict_policy: ConflictPolicy::default(),
            warn_on_clipboard_replace: false,
        }
    }
}

/// Command-line overrides shared by the GUI and headless binaries.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Show entries whose name starts with a dot.
    #[arg(long)]
    pub show_hidden: bool,
    #[arg(long, value_enum)]
    pub clipboard_mode: Option<ClipboardMode>,
    #[arg(long, value_enum)]
    pub conflict_policy: Option<ConflictPolicy>,
    /// Report in the status line when a copy/cut replaces pending clipboard contents.
    #[arg(long)]
    pub warn_on_clipboard_replace: bool,
}

impl ExplorerConfig {
    pub fn from_args(start_dir: Option<PathBuf>, args: &ConfigArgs) -> Self {
        let defaults = Self::default();
        Self {
            start_dir: start_dir.unwrap_or(defaults.start_dir),
            show_hidden: args.show_hidden || defaults.show_hidden,
            clipboard_mode: args.clipboard_mode.unwrap_or(defaults.clipboard_mode),
            conflict_policy: args.conflict_policy.unwrap_or(defaults.conflict_policy),
            warn_on_clipboard_replace: args.warn_on_clipboard_replace
                || defaults.warn_on_clipboard_replace,
        }
    }
}

fn default_start_dir() -> PathBuf {
    dirs::home_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
