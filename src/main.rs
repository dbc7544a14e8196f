// SPDX-License-Identifier: MPL-2.0
use marquee::app::{self, Flags};
use marquee::infrastructure::GstPlaybackEngine;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        config_path: args.opt_value_from_str("--config").ok().flatten(),
        start_paths: args
            .finish()
            .into_iter()
            .map(PathBuf::from)
            .collect(),
    };

    let engine = match GstPlaybackEngine::new() {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("marquee: {err}");
            std::process::exit(1);
        }
    };

    app::run(flags, Box::new(engine))
}
