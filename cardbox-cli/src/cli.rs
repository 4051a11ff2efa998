use clap::Parser;

/// Startup flags for the interactive interpreter
#[derive(Parser)]
#[command(name = "cardbox")]
#[command(about = "An interactive card tracker for your terminal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Start with a handful of sample cards
    #[arg(long)]
    pub demo: bool,
}
