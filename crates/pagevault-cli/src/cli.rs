use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pagevault_types::PageId;

#[derive(Parser)]
#[command(
    name = "pagevault",
    about = "Pagevault — content engine for small managed sites",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Data directory for the embedded store.
    #[arg(long, global = true, default_value = ".pagevault")]
    pub data_dir: PathBuf,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a page's content
    Show(ShowArgs),
    /// Edit one field of a page's draft
    Set(SetArgs),
    /// Promote a page's draft over its published content
    Publish(PublishArgs),
    /// List pages with unpublished drafts
    Drafts(DraftsArgs),
    /// Discard a page's draft
    Revert(RevertArgs),
    /// Get or set a site settings field
    Settings(SettingsArgs),
    /// Open an editor session
    Login(LoginArgs),
    /// Close the editor session
    Logout(LogoutArgs),
    /// Show the current editor session
    Whoami(WhoamiArgs),
    /// Export the whole site to a backup bundle
    Export(ExportArgs),
    /// Import a backup bundle
    Import(ImportArgs),
    /// Drop all content and restore defaults
    Reset(ResetArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    pub page: PageId,
    /// Show the draft (if any) instead of the published content.
    #[arg(long)]
    pub draft: bool,
}

#[derive(Args)]
pub struct SetArgs {
    pub page: PageId,
    /// Dotted field path, e.g. `hero.title`.
    pub path: String,
    /// New value; parsed as JSON, falling back to a plain string.
    pub value: String,
}

#[derive(Args)]
pub struct PublishArgs {
    pub page: PageId,
}

#[derive(Args)]
pub struct DraftsArgs {}

#[derive(Args)]
pub struct RevertArgs {
    pub page: PageId,
}

#[derive(Args)]
pub struct SettingsArgs {
    /// Dotted field path; omit to print the whole document.
    pub path: Option<String>,
    /// New value; omit to read.
    pub value: Option<String>,
}

#[derive(Args)]
pub struct LoginArgs {
    pub email: String,
    pub password: String,
}

#[derive(Args)]
pub struct LogoutArgs {}

#[derive(Args)]
pub struct WhoamiArgs {}

#[derive(Args)]
pub struct ExportArgs {
    /// Write the bundle here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    pub input: PathBuf,
}

#[derive(Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt.
    #[arg(short = 'y', long)]
    pub yes: bool,
}
