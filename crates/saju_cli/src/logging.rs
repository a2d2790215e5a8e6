//! stderr logging for the CLI.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr logger. `RUST_LOG` overrides the verbosity flag.
pub fn init(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "saju_config=info,saju_rs=info,warn",
        2 => "saju_engine=debug,saju_config=debug,saju_rs=debug,info",
        _ => "saju_engine=trace,saju_calendar=trace,debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
