// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "\
Usage: iced_folio [--lang <id>] [--config-dir <dir>] [PATH]

  --lang <id>         Interface language (e.g. en-US, fr)
  --config-dir <dir>  Directory holding settings.toml
  PATH                Location to open, e.g. /blogs/hello-world
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_folio=info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --lang");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --config-dir");
        None
    });
    let start_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    app::run(Flags {
        lang,
        start_path,
        config_dir,
    })
}
