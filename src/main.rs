// SPDX-License-Identifier: MPL-2.0
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use iced_gallery::app::{self, paths, Flags};

const HELP: &str = "\
IcedGallery - student project submission gallery

USAGE:
  iced_gallery [OPTIONS]

OPTIONS:
  --lang <LOCALE>          UI language override (e.g. fr, en-US)
  --manifest <LOCATION>    Manifest path or http(s) URL
  --media-prefix <PREFIX>  Prefix for per-submission resources
  --config-dir <DIR>       Directory holding settings.toml
  -h, --help               Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        manifest: args.opt_value_from_str("--manifest").unwrap_or(None),
        media_prefix: args.opt_value_from_str("--media-prefix").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
    };

    let leftovers = args.finish();
    if !leftovers.is_empty() {
        eprintln!("Ignoring unexpected arguments: {leftovers:?}");
    }

    // Config path overrides must be in place before the first config read.
    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}
