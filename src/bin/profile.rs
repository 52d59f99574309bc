use std::time::{Duration, Instant};

use mazewalk::{
    RunError,
    app::{App, RunConfig},
};

/// Runs the generate-and-solve pipeline with a zero-delay sink instead of
/// the terminal, so the computation can be timed on its own.
fn main() -> Result<(), RunError> {
    let mut args = std::env::args().skip(1).peekable();
    // A leading number is the iteration count; anything else falls through
    // to the regular argument parsing
    let iterations = match args.peek().and_then(|word| word.parse::<usize>().ok()) {
        Some(n) => {
            args.next();
            n
        }
        None => 1,
    };
    let config = RunConfig::from_args(args)?;

    let app = App::with_refresh_time(Duration::ZERO);
    let started = Instant::now();
    app.profile(&config, iterations)?;
    println!(
        "{} iterations of {} on a {}x{} board in {:?}",
        iterations,
        config.generator,
        config.rows,
        config.cols,
        started.elapsed()
    );
    Ok(())
}
