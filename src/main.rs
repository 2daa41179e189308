use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use pdf_translator::cli::commands::translate;
use pdf_translator::cli::{Args, Command};
use pdf_translator::config::{EnvVars, load_env_file, resolve_settings};
use pdf_translator::error::{ConfigError, Error};
use pdf_translator::output::{self, OutputConfig};
use pdf_translator::translation::print_languages;
use pdf_translator::ui::Style;
use pdf_translator::report_error;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version arrive here too and go to stdout.
            let code = if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });
    init_tracing(args.verbose);

    if matches!(args.command, Some(Command::Languages)) {
        print_languages();
        return ExitCode::SUCCESS;
    }

    match run(&args).await {
        Ok(output_path) => {
            println!(
                "{} {}",
                Style::success("Translation successfully saved to:"),
                Style::value(output_path.display())
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_failure(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(args: &Args) -> Result<std::path::PathBuf, Error> {
    if load_env_file(&args.env_file)? {
        tracing::debug!(path = %args.env_file.display(), "loaded env file");
    }

    let settings = resolve_settings(&args.resolve_options(), &EnvVars::from_process())?;
    translate::run_translate(&settings).await
}

fn report_failure(err: &Error) {
    report_error!("{} {err}", Style::error("Error:"));

    if matches!(
        err,
        Error::NotConfigured | Error::Config(ConfigError::MissingCredential)
    ) {
        report_error!(
            "\nPlease set the API key via:\n  \
             1. Environment variable PDFT_API_KEY (or OPENAI_API_KEY)\n  \
             2. .env file with PDFT_API_KEY=your-key\n  \
             3. Command line argument --api-key"
        );
    } else if matches!(err, Error::Config(ConfigError::MissingInput)) {
        report_error!(
            "\n{}",
            Style::hint("Pass the PDF as an argument: pdf-translator <file.pdf>")
        );
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pdf_translator=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
