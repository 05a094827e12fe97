//! timeclock main entrypoint.

use clap::CommandFactory;
use timeclock::cli::parser::Cli;
use timeclock::errors::AppError;
use timeclock::run;
use timeclock::ui::messages;

fn main() {
    pretty_env_logger::init();

    if let Err(e) = run() {
        messages::error(&e);
        if let AppError::Usage(_) = e {
            eprintln!("\n{}", Cli::command().render_help());
        }
        std::process::exit(1);
    }
}
