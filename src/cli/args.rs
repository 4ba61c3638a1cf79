use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "repvox")]
#[command(about = "Voice command logging for workout sets", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Parse a transcript into a structured set command
    Parse(ParseCliArgs),
    /// Resolve a spoken exercise name against the built-in catalog
    Match(MatchCliArgs),
    /// List the built-in exercise catalog
    Catalog,
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug)]
pub struct ParseCliArgs {
    /// Transcript text, e.g. "Bench Press 100 kg 5 reps"
    #[arg(required = true, trailing_var_arg = true)]
    pub text: Vec<String>,
    /// Print the parsed command as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(ClapArgs, Debug)]
pub struct MatchCliArgs {
    /// Spoken exercise name to resolve
    #[arg(required = true, trailing_var_arg = true)]
    pub name: Vec<String>,
    /// Override the configured acceptance threshold
    #[arg(long)]
    pub threshold: Option<f64>,
}
