use std::process;

use anyhow::{self, format_err};
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;

use crystsym::interfaces::cli::{log_heading, Cli};
use crystsym::interfaces::input::Input;
use crystsym::interfaces::InputHandle;
use crystsym::io::read_crystsym_yaml;

/// Configures `log4rs` so that the `crystsym-output` target is written plainly to the console
/// and, if requested, to an output file. Everything else goes to standard error at the
/// warning level.
fn configure_logging(cli: &Cli) -> Result<(), anyhow::Error> {
    let mut output_appenders = vec!["output_console".to_string()];
    let mut builder = Config::builder()
        .appender(
            Appender::builder().build(
                "output_console",
                Box::new(
                    ConsoleAppender::builder()
                        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
                        .build(),
                ),
            ),
        )
        .appender(
            Appender::builder().build(
                "stderr",
                Box::new(
                    ConsoleAppender::builder()
                        .target(log4rs::append::console::Target::Stderr)
                        .encoder(Box::new(PatternEncoder::new("[{l}] {t}: {m}{n}")))
                        .build(),
                ),
            ),
        );
    if let Some(output) = cli.output.as_ref() {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{m}{n}")))
            .append(false)
            .build(output)?;
        builder = builder.appender(Appender::builder().build("output_file", Box::new(file)));
        output_appenders.push("output_file".to_string());
    }
    let config = builder
        .logger(
            Logger::builder()
                .appenders(output_appenders)
                .additive(false)
                .build("crystsym-output", LevelFilter::Info),
        )
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .map_err(|err| format_err!(err))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn run(cli: &Cli) -> Result<(), anyhow::Error> {
    configure_logging(cli)?;
    log_heading();
    let input: Input = read_crystsym_yaml(&cli.config)?;
    input.handle()
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("crystsym: {err}");
        process::exit(1);
    }
}
