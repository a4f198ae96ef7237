use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use log::LevelFilter;
use todo_tui::app::App;
use todo_tui::config::{Config, API_URL_ENV};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("todo-tui")
        .version(crate_version!())
        .about("A terminal user interface for a REST todo list")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("api-url")
                .short("u")
                .long("api-url")
                .value_name("URL")
                .help("Base URL of the todo API")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("dark")
                .long("dark")
                .help("Start in dark mode"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log debug messages"),
        )
        .get_matches();

    let level = if matches.is_present("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_buffer = todo_tui::logger::init(level)?;

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    config.override_api_url(std::env::var(API_URL_ENV).ok());
    config.override_api_url(matches.value_of("api-url").map(str::to_owned));
    if matches.is_present("dark") {
        config.dark_mode = true;
    }
    config.validate()?;

    App::start(config, log_buffer).await
}
