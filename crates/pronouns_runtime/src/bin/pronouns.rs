//! Pronouns CLI entry point.

use std::env;
use std::process::ExitCode;

use pronouns_runtime::{Repl, RuntimeConfig, Session};
use pronouns_template::Format;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    paths: Vec<String>,
    batch_mode: bool,
    debug: bool,
    show_help: bool,
    show_version: bool,
    format: Option<Format>,
    base_url: Option<String>,
    full_links: bool,
    log_filter: Option<String>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-d" | "--debug" => config.debug = true,
            "--full" => config.full_links = true,
            "--format" => {
                let value = args.next().ok_or("--format requires a value")?;
                config.format = Some(value.parse()?);
            }
            "--base-url" => {
                config.base_url = Some(args.next().ok_or("--base-url requires a value")?);
            }
            "--log" => {
                config.log_filter = Some(args.next().ok_or("--log requires a value")?);
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}").into());
            }
            _ => config.paths.push(arg),
        }
    }

    Ok(config)
}

fn runtime_config(cli: &CliConfig) -> RuntimeConfig {
    let mut config = if cli.debug {
        RuntimeConfig::debug()
    } else if cli.batch_mode {
        RuntimeConfig::batch()
    } else {
        RuntimeConfig::default()
    };
    if let Some(format) = cli.format {
        config = config.with_format(format);
    }
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str());
    }
    if cli.full_links {
        config = config.with_shorten_links(false);
    }
    if let Some(filter) = &cli.log_filter {
        config = config.with_log_filter(filter.as_str());
    }
    config
}

/// Installs a stderr subscriber: `--log` or `--debug`, else `RUST_LOG`, else the config default.
fn init_logging(explicit: bool, filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = if explicit {
        EnvFilter::try_new(filter)?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(filter))?
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("pronouns {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = runtime_config(&cli);
    init_logging(cli.log_filter.is_some() || cli.debug, &config.log_filter)?;

    let mut session = Session::new(config)?;

    if cli.batch_mode {
        for path in &cli.paths {
            session.set_path(path)?;
            print_record(&session)?;
        }
        return Ok(());
    }

    for path in &cli.paths {
        session.set_path(path)?;
    }

    let mut repl = Repl::new(session)?;
    // Paths given up front establish context
    if !cli.paths.is_empty() {
        repl = repl.without_banner();
    }
    repl.run()?;
    Ok(())
}

fn print_record(session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    println!("\x1b[1m{}\x1b[0m", session.title());
    match session.share_url() {
        Some(url) => println!("{url}"),
        None => println!("(not shareable)"),
    }
    println!();
    println!("{}", session.render_example(0)?);
    println!();
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mpronouns\x1b[0m - Resolve, shorten, and preview pronoun sets

\x1b[1mUSAGE:\x1b[0m
    pronouns [OPTIONS] [PATHS...]

\x1b[1mARGUMENTS:\x1b[0m
    [PATHS...]    Pronoun paths, e.g. `they` or `xe/xem/xir/singular`

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -b, --batch            Print each path's link and example, then exit
    -d, --debug            Trace resolution and encoding (same as --log pronouns=trace)
    --format <FORMAT>      Example format: plain, markdown, html
    --base-url <URL>       Site that share links point at [default: https://pronouns.me]
    --full                 Use full five-value paths in links
    --log <FILTER>         tracing filter, e.g. `pronouns=debug` [default: RUST_LOG or warn]

\x1b[1mEXAMPLES:\x1b[0m
    pronouns                         Start interactive REPL
    pronouns ze/hir                  Select ze/hir, then start REPL
    pronouns -b they xe/xem/xir      Print links and examples and exit
    pronouns -b --format md she      Markdown output
    pronouns --log pronouns=trace    Trace resolution and encoding

\x1b[1mREPL COMMANDS:\x1b[0m
    <path>                     Select a pronoun set
    :show                      List values with usage hints
    :set <declension> <value>  Replace one value
    :number <singular|plural>  Set the grammatical number
    :format <format>           Set the example format
    :share  :presets  :paths   Links and listings
    :example [n]  :help  :quit
    Ctrl+D                     Exit REPL"
    );
}
