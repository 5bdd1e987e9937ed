use std::thread;
use std::time::Duration;

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;

mod cli;
mod worm;

/// Plain `LEVEL message fields` lines, the way `warn(3)` output reads in a
/// captured stream: no colour, no timestamps, no targets.
fn logger<W>(writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .with_writer(writer)
        .without_time()
        .finish()
}

fn main() {
    let _ = tracing::subscriber::set_global_default(logger(std::io::stderr));

    let seconds = cli::Args::from_env().seconds();

    for _ in 0..worm::CHAINS {
        worm::worm(worm::DEPTH);
    }

    thread::sleep(Duration::from_secs(seconds));
}
