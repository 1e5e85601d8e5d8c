//! `ssopilot` 바이너리 진입점.

use ssopilot::interface::cli::{AppComposition, Cli, CliAction, run_interactive, run_login};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = Cli::parse_action();
    let composition = AppComposition::default();

    let result = match action {
        CliAction::InspectConfig => composition.inspect_config_usecase().execute().map(|report| {
            println!("{}", report.pretty_json);
            if let Some(err) = report.connection_error {
                eprintln!("warning: {err}");
            }
            true
        }),
        CliAction::Resolve(email) => composition.resolve_usecase().execute(&email).map(|_| true),
        CliAction::Login(email) => run_login(&composition, email).await,
        CliAction::Interactive => run_interactive(&composition).await.map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
