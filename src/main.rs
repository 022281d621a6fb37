//! `speckit-install` binary entry point.
use std::process::ExitCode;

use clap::Parser;
use speckit_installer::cli::Cli;
use speckit_installer::commands;
use speckit_installer::config::InstallOptions;
use speckit_installer::logging::{self, Log as _, Logger};
use speckit_installer::prompt::StdioPrompter;

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = Logger::new();

    let opts = InstallOptions::from(&args);
    match commands::install::run(&opts, &StdioPrompter, &log) {
        Ok(_) => {
            log.debug(&format!(
                "finished with {} warning(s) and {} error(s)",
                log.warning_count(),
                log.error_count()
            ));
            ExitCode::SUCCESS
        }
        Err(err) => {
            let code = commands::exit_code(&err);
            if code == 0 {
                log.warn(&format!("{err}."));
            } else {
                log.error(&format!("Installation failed: {err:#}"));
            }
            ExitCode::from(code)
        }
    }
}
