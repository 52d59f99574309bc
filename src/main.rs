use std::process::ExitCode;

use mazewalk::app::{App, RunConfig};

const USAGE: &str = "Usage: mazewalk [mainroad|natual|simple] [rows [cols]]";

fn main() -> ExitCode {
    let _log_guard = init_logging();

    let config = match RunConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    match App::default().run(&config) {
        // A maze with no route still animates to completion
        Ok(_goal_reached) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Set up file logging when `MAZEWALK_LOG` names a directory. The terminal
/// belongs to the animation, so logs never go there.
fn init_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let dir = std::env::var_os("MAZEWALK_LOG")?;
    let file_appender = tracing_appender::rolling::never(dir, "mazewalk.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}
