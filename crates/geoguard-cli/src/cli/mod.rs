//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "geoguard",
    bin_name = "geoguard",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate GeoJSON location fields before they reach the database",
    long_about = "geoguard checks GeoJSON documents and project records against \
                  the structural rules enforced on project location fields: \
                  known types, required members, coordinate ranges and closed rings.",
    after_help = "EXAMPLES:\n\
        \x20 geoguard validate sites/\n\
        \x20 geoguard validate boundary.geojson --output-format json\n\
        \x20 cat plot.geojson | geoguard validate --stdin\n\
        \x20 geoguard check-record project.json --schema schema.toml",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate GeoJSON files and directories.
    #[command(
        visible_alias = "v",
        about = "Validate GeoJSON documents",
        after_help = "EXAMPLES:\n\
            \x20 geoguard validate site.geojson\n\
            \x20 geoguard validate exports/ --ext geojson\n\
            \x20 geoguard validate --stdin < plot.geojson"
    )]
    Validate(ValidateArgs),

    /// Validate project records against a field schema.
    #[command(
        name = "check-record",
        visible_alias = "cr",
        about = "Validate JSON records against a schema",
        after_help = "EXAMPLES:\n\
            \x20 geoguard check-record project.json\n\
            \x20 geoguard check-record projects.json --schema schema.toml\n\
            \x20 geoguard check-record - < project.json"
    )]
    CheckRecord(CheckRecordArgs),

    /// Initialise a geoguard configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 geoguard init           # user config location\n\
            \x20 geoguard init --local   # .geoguard.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 geoguard completions bash > ~/.local/share/bash-completion/completions/geoguard\n\
            \x20 geoguard completions zsh  > ~/.zfunc/_geoguard\n\
            \x20 geoguard completions fish > ~/.config/fish/completions/geoguard.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the geoguard configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 geoguard config get validation.extensions\n\
            \x20 geoguard config list\n\
            \x20 geoguard config path"
    )]
    Config(ConfigCommands),
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `geoguard validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Files or directories to validate. Directories are walked recursively.
    #[arg(
        value_name = "PATH",
        required_unless_present = "stdin",
        conflicts_with = "stdin",
        help = "Files or directories to validate"
    )]
    pub paths: Vec<PathBuf>,

    /// Read a single document from standard input.
    #[arg(long = "stdin", help = "Read one document from standard input")]
    pub stdin: bool,

    /// Extensions picked up when walking directories.
    #[arg(
        short = 'e',
        long = "ext",
        value_name = "EXT",
        value_delimiter = ',',
        help = "File extensions to walk (default from config: geojson,json)"
    )]
    pub extensions: Vec<String>,
}

// ── check-record ──────────────────────────────────────────────────────────────

/// Arguments for `geoguard check-record`.
#[derive(Debug, Args)]
pub struct CheckRecordArgs {
    /// JSON file holding one record object or an array of records. `-` reads
    /// standard input.
    #[arg(value_name = "FILE", help = "Record file (`-` for stdin)")]
    pub file: PathBuf,

    /// TOML schema file; defaults to `validation.schema` from the config,
    /// then to the built-in project schema.
    #[arg(
        short = 's',
        long = "schema",
        value_name = "FILE",
        help = "Record schema (TOML)"
    )]
    pub schema: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `geoguard init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.geoguard.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `geoguard completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `geoguard config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the user configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_validate_with_paths() {
        let cli = Cli::parse_from(["geoguard", "validate", "a.geojson", "sites/"]);
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.paths.len(), 2);
                assert!(!args.stdin);
                assert!(args.extensions.is_empty());
            }
            other => panic!("expected Validate, got {other:?}"),
        }
    }

    #[test]
    fn validate_requires_paths_or_stdin() {
        assert!(Cli::try_parse_from(["geoguard", "validate"]).is_err());
        assert!(Cli::try_parse_from(["geoguard", "validate", "--stdin"]).is_ok());
        assert!(Cli::try_parse_from(["geoguard", "validate", "--stdin", "a.json"]).is_err());
    }

    #[test]
    fn extensions_are_comma_separated() {
        let cli = Cli::parse_from(["geoguard", "validate", "-e", "geojson,json", "."]);
        let Commands::Validate(args) = cli.command else {
            panic!("expected Validate");
        };
        assert_eq!(args.extensions, vec!["geojson", "json"]);
    }

    #[test]
    fn check_record_alias() {
        let cli = Cli::parse_from(["geoguard", "cr", "record.json", "-s", "schema.toml"]);
        let Commands::CheckRecord(args) = cli.command else {
            panic!("expected CheckRecord");
        };
        assert_eq!(args.schema, Some(PathBuf::from("schema.toml")));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["geoguard", "--quiet", "--verbose", "config", "path"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["geoguard", "validate", "x.geojson", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }
}
