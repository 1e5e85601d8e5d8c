//! CLI 명령 파싱 모듈.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ssopilot")]
#[command(about = "Match emails to enterprise SSO connections and launch their login flow")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and backend readiness
    Config,
    /// Show which enterprise connection an email resolves to
    Resolve {
        /// Email address (user@domain)
        email: String,
    },
    /// Log in through the matched enterprise connection
    Login {
        /// Email address; may be omitted when only one connection is configured
        email: Option<String>,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    Interactive,
    InspectConfig,
    Resolve(String),
    Login(Option<String>),
}

impl Cli {
    /// 인자를 파싱한다. 잘못된 인자/`--help`는 clap이 직접 출력 후 종료한다.
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    fn into_action(self) -> CliAction {
        match self.command {
            None => CliAction::Interactive,
            Some(Commands::Config) => CliAction::InspectConfig,
            Some(Commands::Resolve { email }) => CliAction::Resolve(email),
            Some(Commands::Login { email }) => CliAction::Login(email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(args: &[&str]) -> CliAction {
        Cli::try_parse_from(args).unwrap().into_action()
    }

    #[test]
    fn parses_subcommands() {
        assert_eq!(action(&["ssopilot"]), CliAction::Interactive);
        assert_eq!(action(&["ssopilot", "config"]), CliAction::InspectConfig);
        assert_eq!(
            action(&["ssopilot", "resolve", "bob@acme.com"]),
            CliAction::Resolve("bob@acme.com".into())
        );
        assert_eq!(action(&["ssopilot", "login"]), CliAction::Login(None));
        assert_eq!(
            action(&["ssopilot", "login", "bob@acme.com"]),
            CliAction::Login(Some("bob@acme.com".into()))
        );
    }

    #[test]
    fn resolve_requires_email() {
        assert!(Cli::try_parse_from(["ssopilot", "resolve"]).is_err());
    }
}
