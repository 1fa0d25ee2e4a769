use clap::Parser;

use simreport::cli::command::Cli;
use simreport::cli::output;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Err(err) = simreport::cli::execute(cli) {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}
