use colored::Colorize;
use optional_examples::{Demo, Error, Result, Settings, Trace};
use std::env;
use std::path::PathBuf;
use std::process;

/// Parsed command line: which routines to run and an optional settings file.
#[derive(Debug, PartialEq)]
struct CliArgs {
    demos: Vec<Demo>,
    config: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut demos = Vec::new();
    let mut config = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| Error::invalid_argument("--config requires a path"))?;
                config = Some(PathBuf::from(path));
            }
            "all" => demos.extend(Demo::ALL),
            name => demos.push(name.parse()?),
        }
    }

    if demos.is_empty() {
        demos.push(Demo::Main);
    }
    Ok(CliArgs { demos, config })
}

fn print_trace(trace: &Trace, color: bool) {
    for line in trace.take() {
        println!("{}", line.render(color));
    }
}

fn run() -> Result<()> {
    let cli = parse_args(env::args().skip(1))?;
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if !settings.color {
        colored::control::set_override(false);
    }

    let trace = Trace::new();
    let keep_going = cli.demos.len() > 1;
    for demo in cli.demos {
        let result = demo.run(&settings, &trace);
        print_trace(&trace, settings.color);
        match result {
            // ex05 fails on purpose; when running several routines, report and move on
            Err(err) if keep_going && err.is_user_raised() => {
                println!("{}", format!("{} aborted: {}", demo.name(), err).dimmed());
            }
            other => other?,
        }
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}
