use clap::Parser;
use sigtrader::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    sigtrader::logging::init_logging(cli.verbose);
    run(cli)
}
