// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::{self, paths, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_carousel - modal image gallery viewer

USAGE:
  iced_carousel [OPTIONS]

OPTIONS:
  --lang <ID>          Interface language (e.g. en-US, fr)
  --gallery <FILE>     Gallery TOML file to show instead of the demo images
  --config-dir <DIR>   Directory holding settings.toml
  --open               Start with the gallery open
  -h, --help           Print this help

ENVIRONMENT:
  ICED_CAROUSEL_CONFIG_DIR   Config directory (overridden by --config-dir)
  RUST_LOG                   Log filter (default: info)
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        gallery: args.opt_value_from_str::<_, PathBuf>("--gallery")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        open: args.contains("--open"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting iced_carousel");

    app::run(flags)
}
