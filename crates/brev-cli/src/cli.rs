use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "brev - fish shell-style abbreviations for bash",
    long_about = "brev expands short abbreviations into full commands as you type in bash."
)]
pub struct Brev {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// (Internal) Expand an abbreviation based on buffer content
    Expand {
        #[clap(long, default_value = "", help = "Left buffer content")]
        lbuffer: String,

        #[clap(long, default_value = "", help = "Right buffer content")]
        rbuffer: String,
    },
    /// List all configured abbreviations
    List,
    /// Generate shell integration code to be evaluated in bash
    Init,
}
