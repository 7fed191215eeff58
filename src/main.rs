use std::env;
use std::io;
use std::process::exit;

use tinycmd::{Settings, TinyResult};

#[macro_use]
extern crate log;

fn main() {
    let settings = Settings::load();

    let filter = settings.as_ref().map_or("warn", |s| s.log.as_str());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();

    let result = settings
        .map_err(anyhow::Error::from)
        .and_then(|settings| try_main(&settings));

    if let Err(e) = result {
        error!("{:#}", e);
        exit(1);
    }
}

fn try_main(settings: &Settings) -> TinyResult<()> {
    debug!("Settings: {:?}", settings);

    let registry = tinycmd::default_registry();
    let mut stdout = io::stdout().lock();
    let outcome = tinycmd::run_with(&registry, env::args_os(), settings, &mut stdout)?;

    debug!("Dispatch finished: {:?}", outcome);
    Ok(())
}
