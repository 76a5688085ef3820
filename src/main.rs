use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tally::{
    Formatter, Fragments, TestResults,
    args::Args,
    config::Config,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    results: TestResults,
    line: &'a str,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("{}", format_error(&err));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::load(args.config.as_deref()).context("failed to load config")?;

    let fragments = match &args.template {
        Some(t) => Fragments::parse(t).context("invalid --template")?,
        None => config.template,
    };

    // Escape codes would end up inside the JSON string
    let style = (!args.json && args.color.enabled()).then_some(config.style);

    let formatter = Formatter::new(fragments)
        .mode(args.mode.unwrap_or(config.mode))
        .exclamation(config.exclamation)
        .style(style);

    let results = TestResults::new(args.passed, args.failed);
    let line = formatter.render(&results)?;

    if args.json {
        let report = JsonReport {
            results,
            line: &line,
        };

        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", line);
    }

    Ok(())
}

fn format_error(err: &anyhow::Error) -> String {
    let mut msg = format!("error: {err}");
    for cause in err.chain().skip(1) {
        msg.push_str(&format!("\n  caused by: {cause}"));
    }
    msg
}
