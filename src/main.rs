mod address;
mod api;
mod app;
mod config;
mod error;
mod events;
mod logger;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use clap::{crate_description, crate_name, crate_version, App as Cli, Arg};
use config::Config;
use log::LevelFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("debug")
                .short("d")
                .long("debug")
                .help("Show debug messages in the log panel"),
        )
        .arg(
            Arg::with_name("api-url")
                .short("u")
                .long("api-url")
                .value_name("URL")
                .help("Base URL of the storefront API")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::default();
    config.load(matches.value_of("config"))?;
    if let Some(api_url) = matches.value_of("api-url") {
        config.api_url = api_url.trim_end_matches('/').to_owned();
    }

    let log_level = if matches.is_present("debug") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    App::start(config, log_level).await
}
