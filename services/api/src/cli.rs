use crate::demo::{run_brief, run_demo, BriefArgs, DemoArgs};
use crate::server;
use ai_readiness::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "AI Readiness Assessment",
    about = "Score AI readiness assessments and serve the assessment API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a submission JSON file and print its consultant brief
    Brief(BriefArgs),
    /// Walk a sample assessment through the wizard, scoring, and exports
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Brief(args) => run_brief(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["ai-readiness"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn brief_requires_an_input_file() {
        assert!(Cli::try_parse_from(["ai-readiness", "brief"]).is_err());
        let cli = Cli::try_parse_from([
            "ai-readiness",
            "brief",
            "--input",
            "submission.json",
            "--json",
            "--timezone",
            "+02:00",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Brief(args)) => {
                assert!(args.json);
                assert_eq!(args.input.to_string_lossy(), "submission.json");
                assert!(args.timezone.is_some());
            }
            other => panic!("expected brief command, got {other:?}"),
        }
    }

    #[test]
    fn timezone_flag_rejects_region_names() {
        assert!(Cli::try_parse_from(["ai-readiness", "demo", "--timezone", "Europe/Dublin"]).is_err());
    }
}
