use std::path::PathBuf;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use rl_core::RelminConfig;

pub fn cli() -> Command {
    Command::new("relmin")
        .about("Minimizes positive examples, negative examples and relational facts into integer-coded literals")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::SetTrue)
            .help("Log parsed literals and dictionary sizes."))

        .arg(Arg::new("positive")
            .short('p')
            .long("pos")
            .value_parser(value_parser!(PathBuf))
            .num_args(1)
            .help("Path to positive examples."))

        .arg(Arg::new("negative")
            .short('n')
            .long("neg")
            .value_parser(value_parser!(PathBuf))
            .num_args(1)
            .help("Path to negative examples."))

        .arg(Arg::new("facts")
            .short('f')
            .long("facts")
            .value_parser(value_parser!(PathBuf))
            .num_args(1)
            .help("Path to relational facts."))

        .arg(Arg::new("config")
            .short('c')
            .long("config")
            .value_parser(value_parser!(PathBuf))
            .num_args(1)
            .help("JSON configuration file. Flags given on the command line take precedence."))

        .arg(Arg::new("output_dir")
            .short('o')
            .long("output-dir")
            .value_parser(value_parser!(PathBuf))
            .num_args(1)
            .help("Write positive.txt, negative.txt and facts.txt here instead of stdout."))

        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help("Treat blank lines as malformed literals."))
}

pub fn config_from_args(matches: &ArgMatches) -> anyhow::Result<RelminConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => RelminConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => RelminConfig::default(),
    };

    if let Some(path) = matches.get_one::<PathBuf>("positive") {
        config.input.positive = Some(path.clone());
    }
    if let Some(path) = matches.get_one::<PathBuf>("negative") {
        config.input.negative = Some(path.clone());
    }
    if let Some(path) = matches.get_one::<PathBuf>("facts") {
        config.input.facts = Some(path.clone());
    }
    if let Some(dir) = matches.get_one::<PathBuf>("output_dir") {
        config.output.output_dir = Some(dir.clone());
    }
    if matches.get_flag("verbose") {
        config.output.verbose = true;
    }
    if matches.get_flag("strict") {
        config.reader.skip_blank_lines = false;
    }

    Ok(config)
}
