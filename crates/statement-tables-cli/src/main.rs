mod cli;
mod extract_cmd;
mod inspect_cmd;
mod logging;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result = match cli.command {
        cli::Commands::Extract {
            ref input_dir,
            ref marker,
            keep_going,
        } => extract_cmd::run(input_dir, marker, keep_going),
        cli::Commands::Inspect {
            ref file,
            ref marker,
            ref format,
        } => inspect_cmd::run(file, marker, format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
