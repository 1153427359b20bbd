//! CLI definitions for ansiboard
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be reused by tests and completion generation.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

/// Build clap styles for help output.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "ansiboard")]
#[command(about = "[ ANSI Board Renderer ] - turn BBS ANSI art and colored posts into safe HTML")]
#[command(
    long_about = "ANSI Board Renderer - turn BBS-style ANSI/SGR text into safe, styled HTML.

Reads posts, mail bodies or chat logs containing ANSI color sequences
(ESC[...m, or the legacy ^[[...m notation) and writes HTML where every
style run is wrapped in a <span style=\"...\">. Literal text is always
HTML-escaped; cursor and erase sequences are dropped.

QUICK START:
    ansiboard render post.ans            Render a file to HTML on stdout
    cat post.ans | ansiboard render      Render stdin
    ansiboard strip post.ans             Print the text without sequences
    ansiboard detect post.ans            Exit 0 if the file has sequences"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Config file to use instead of ~/.config/ansiboard/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render ANSI text to HTML
    #[command(long_about = "Render ANSI text to HTML.

Each input is rendered independently; with several files they are rendered
in parallel and printed in the order given. Without files, stdin is read.

EXAMPLES:
    ansiboard render welcome.ans
    ansiboard render --wrap a.ans b.ans > boards.html")]
    Render {
        /// Input files (stdin when omitted)
        #[arg(help = "Input files (reads stdin when omitted)")]
        files: Vec<PathBuf>,
        /// Wrap each rendered input in <pre class="ansi">
        #[arg(long, help = "Wrap each rendered input in <pre class=\"ansi\">")]
        wrap: bool,
    },

    /// Print text with every escape sequence removed
    Strip {
        /// Input files (stdin when omitted)
        #[arg(help = "Input files (reads stdin when omitted)")]
        files: Vec<PathBuf>,
    },

    /// Check whether inputs contain escape sequences
    #[command(long_about = "Check whether inputs contain escape sequences.

Exits with status 0 when at least one input contains ESC[ or the ^[ alias,
and 1 otherwise.

EXAMPLES:
    ansiboard detect post.txt && echo styled
    ansiboard detect --json a.txt b.txt")]
    Detect {
        /// Input files (stdin when omitted)
        #[arg(help = "Input files (reads stdin when omitted)")]
        files: Vec<PathBuf>,
        /// Print per-input results as JSON
        #[arg(long, help = "Print per-input results as JSON")]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
}
