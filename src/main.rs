use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
mod core;
mod error;
mod grok;
mod models;
use grok::*;

/// Ask Grok a question with real-time X search over a recent window.
#[derive(Debug, Parser)]
#[command(name = "xsearch", version)]
struct Cli {
    /// The prompt to send.
    #[arg(allow_hyphen_values = true)]
    prompt: String,

    /// How many hours back the search window starts.
    #[arg(default_value_t = HOURS_BACK, allow_negative_numbers = true)]
    hours_back: i64,

    /// Trailing arguments, ignored.
    #[arg(hide = true)]
    rest: Vec<String>,

    /// Model identifier.
    #[arg(long, default_value = MODEL)]
    model: String,

    /// File holding the API key.
    #[arg(long, default_value = KEY_PTH)]
    key_file: PathBuf,

    /// Chat completions endpoint.
    #[arg(long, default_value = URL)]
    endpoint: String,

    /// Log more (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
pub async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    let lvl = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(lvl).init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    if !cli.rest.is_empty() {
        log::debug!("ignoring extra arguments {:?}", cli.rest);
    }
    let grok = Grok {
        key_path: cli.key_file.clone(),
        url: cli.endpoint.clone(),
        ..Grok::default()
    };
    let res = grok
        .call_grok_with_x_search(&cli.prompt, cli.hours_back, &cli.model)
        .await?;
    println!("{}", serde_json::to_string_pretty(&res)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["xsearch", "latest AI news"]).unwrap();
        assert_eq!(cli.prompt, "latest AI news");
        assert_eq!(cli.hours_back, 24);
        assert_eq!(cli.model, "grok-beta");
        assert_eq!(cli.key_file, PathBuf::from(KEY_PTH));
        assert_eq!(cli.endpoint, URL);
    }

    #[test]
    fn test_cli_hours_back() {
        let cli = Cli::try_parse_from(["xsearch", "q", "6"]).unwrap();
        assert_eq!(cli.hours_back, 6);
        let cli = Cli::try_parse_from(["xsearch", "q", "-12"]).unwrap();
        assert_eq!(cli.hours_back, -12);
    }

    #[test]
    fn test_cli_hyphen_prompt() {
        let cli = Cli::try_parse_from(["xsearch", "-x trending"]).unwrap();
        assert_eq!(cli.prompt, "-x trending");
        let cli = Cli::try_parse_from(["xsearch", "-5 reasons AI is hot", "-3"]).unwrap();
        assert_eq!(cli.prompt, "-5 reasons AI is hot");
        assert_eq!(cli.hours_back, -3);
    }

    #[test]
    fn test_cli_flags_after_hyphen_prompt() {
        let cli = Cli::try_parse_from(["xsearch", "-x trending", "--model", "grok-2"]).unwrap();
        assert_eq!(cli.prompt, "-x trending");
        assert_eq!(cli.model, "grok-2");
    }

    #[test]
    fn test_cli_extra_args_ignored() {
        let cli = Cli::try_parse_from(["xsearch", "q", "24", "extra", "more"]).unwrap();
        assert_eq!(cli.prompt, "q");
        assert_eq!(cli.hours_back, 24);
        assert_eq!(cli.rest, ["extra", "more"]);
    }

    #[test]
    fn test_cli_about_from_doc() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("Ask Grok a question"), "{help}");
    }

    #[test]
    fn test_cli_missing_prompt() {
        let err = Cli::try_parse_from(["xsearch"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_cli_bad_hours_back() {
        let err = Cli::try_parse_from(["xsearch", "q", "yesterday"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
