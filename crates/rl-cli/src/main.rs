//! relmin: minimize positive, negative and fact literal files.

mod cli;
mod run;

use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    let matches = cli::cli().get_matches();
    let config = cli::config_from_args(&matches)?;

    env_logger::Builder::new()
        .filter_level(if config.output.verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .format_target(false)
        .parse_default_env()
        .init();

    let stdout = std::io::stdout();
    run::run(&config, &mut stdout.lock())
}
