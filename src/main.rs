use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use bubbl2struct::Format;

#[derive(Parser)]
#[command(
    name = "bubbl2struct",
    about = "Convert a bubbl.us HTML concept map export to JSON or an adjacency matrix"
)]
struct Cli {
    /// bubbl.us HTML export
    file: std::path::PathBuf,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, short = 'p')]
    pretty: bool,

    /// Log extraction details to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Nodes keyed by id plus a list of edges
    Json,
    /// Adjacency matrix with node and edge labels, as JSON
    Adj,
    /// Adjacency matrix as an aligned text table
    Table,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Format::Json,
            OutputFormat::Adj => Format::Adj,
            OutputFormat::Table => Format::Table,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "bubbl2struct=debug" } else { "bubbl2struct=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match bubbl2struct::convert_with_options(&cli.file, cli.format.into(), cli.pretty) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    }
}
