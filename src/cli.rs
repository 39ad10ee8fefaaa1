use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "cpup",
    about = "Cordova Plugin Updater - check installed plugins against npm and update them",
    version,
    author
)]
pub struct Cli {
    /// Path to the Cordova project (defaults to current directory)
    #[arg(value_name = "PROJECT_PATH", default_value = ".")]
    pub path: String,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
