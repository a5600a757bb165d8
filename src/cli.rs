use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "quill")]
#[command(version = "0.1.0")]
#[command(about = "A terminal code editor with a project tree, git status and fuzzy file search")]
pub struct CliArgs {
    /// Project directory to open
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Read settings from this file instead of the default locations
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Syntax theme to use, overriding the config file
    #[arg(long, short = 'T')]
    pub theme: Option<String>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the bundled syntax themes and exit
    #[arg(long)]
    pub list_themes: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            config: None,
            theme: None,
            log_file: None,
            list_themes: false,
        }
    }
}

impl CliArgs {
    /// Check if the provided path is a directory (following symlinks)
    pub fn is_directory(&self) -> bool {
        std::fs::metadata(&self.path)
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }

    /// Check if the provided path exists (following symlinks)
    pub fn exists(&self) -> bool {
        std::fs::metadata(&self.path).is_ok()
    }
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
