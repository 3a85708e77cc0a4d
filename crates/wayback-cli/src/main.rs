//! `wayback`: browse a decade of specialism commentary from the terminal

use anyhow::Context;
use clap::{value_parser, Arg, ArgMatches, Command};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wayback_cli::{OutputFormat, Shell, ShellConfig, ShellError, EMPTY_STORE};
use wayback_content::ContentStore;

fn selection_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("specialism")
            .required(true)
            .help("Specialism name, exactly as listed by `specialisms`"),
    )
    .arg(
        Arg::new("year")
            .long("year")
            .short('y')
            .help("Year to show [default: first year of the specialism]"),
    )
}

fn cli() -> Command {
    Command::new("wayback")
        .version(env!("CARGO_PKG_VERSION"))
        .about("The Specialism Wayback Machine")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("data")
                .long("data")
                .global(true)
                .env("WAYBACK_DATA")
                .value_parser(value_parser!(PathBuf))
                .help("Content store [default: config data_path, then data/content.json]"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .env("WAYBACK_CONFIG")
                .value_parser(value_parser!(PathBuf))
                .help("TOML file overriding page copy, sources and links"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .default_value("text")
                .value_parser(["text", "markdown", "html", "json"])
                .help("Output format"),
        )
        .subcommand(Command::new("specialisms").about("List specialisms alphabetically"))
        .subcommand(
            Command::new("years")
                .about("List the years recorded for a specialism")
                .arg(Arg::new("specialism").required(true)),
        )
        .subcommand(selection_args(
            Command::new("show").about("Render one specialism and year"),
        ))
        .subcommand(selection_args(
            Command::new("page").about("Render the full page for one selection"),
        ))
        .subcommand(Command::new("sources").about("Render the bibliography"))
        .subcommand(Command::new("links").about("Render the navigation links"))
        .subcommand(
            Command::new("browse")
                .about("Pick specialisms and years interactively until end of input or `quit`"),
        )
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli().get_matches()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ShellError>() {
            Some(ShellError::EmptyStore) => {
                eprintln!("warning: {EMPTY_STORE}");
                ExitCode::SUCCESS
            }
            Some(shell) if shell.is_fatal_load() => {
                eprintln!("error: {err:#}");
                ExitCode::from(2)
            }
            _ => {
                eprintln!("error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ShellConfig::from_path(path)?,
        None => ShellConfig::default(),
    };
    let data = config.resolve_data_path(matches.get_one::<PathBuf>("data").map(PathBuf::as_path));
    let format: OutputFormat = matches
        .get_one::<String>("format")
        .map_or(Ok(OutputFormat::default()), |name| name.parse())?;

    tracing::debug!(data = %data.display(), %format, "starting shell");
    let shell = Shell::new(config, ContentStore::new(&data), format);
    let mut out = io::stdout().lock();

    let result = match matches.subcommand() {
        Some(("specialisms", _)) => shell.specialisms(&mut out),
        Some(("years", args)) => shell.years(required(args, "specialism")?, &mut out),
        Some(("show", args)) => shell.show(
            required(args, "specialism")?,
            args.get_one::<String>("year").map(String::as_str),
            &mut out,
        ),
        Some(("page", args)) => shell.page(
            required(args, "specialism")?,
            args.get_one::<String>("year").map(String::as_str),
            &mut out,
        ),
        Some(("sources", _)) => shell.sources(&mut out),
        Some(("links", _)) => shell.links(&mut out),
        Some(("browse", _)) => shell.browse(io::stdin().lock(), &mut out),
        _ => unreachable!("subcommand_required is set"),
    };

    Ok(result?)
}

fn required<'a>(args: &'a ArgMatches, name: &str) -> anyhow::Result<&'a str> {
    args.get_one::<String>(name)
        .map(String::as_str)
        .with_context(|| format!("missing <{name}>"))
}
