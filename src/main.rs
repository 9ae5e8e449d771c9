use clap::Parser;

use binobj_clean::cli::Cli;
use binobj_clean::commands::run_clean;

fn main() {
    let cli = Cli::parse();
    let exit_code = run_clean(&cli);
    std::process::exit(exit_code);
}
