//! 로그인 세션(1회 실행/대화형) 인터페이스.

use anyhow::{Result, bail};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::ports::Reporter;
use crate::application::usecases::enterprise_login::{EnterpriseLoginUseCase, SubmitOutcome};
use crate::interface::cli::composition::AppComposition;

/// 이메일(또는 단일 연결 버튼)로 1회 로그인한다. 로그인 실패 시 false.
pub async fn run_login(composition: &AppComposition, email: Option<String>) -> Result<bool> {
    let use_case = composition.login_usecase()?;
    let reporter = composition.reporter();

    let outcome = match email {
        Some(email) => {
            use_case.email_changed(&email)?;
            use_case.submit().await
        }
        None if use_case.single_connection().is_some() => {
            use_case.press_connection_button().await
        }
        None => {
            bail!("several enterprise connections are configured; pass an email to pick one")
        }
    };

    Ok(report_outcome(reporter, &outcome))
}

/// 한 줄 입력 = 이메일 입력 변경, 빈 줄 = 제출, `:q` = 종료.
pub async fn run_interactive(composition: &AppComposition) -> Result<()> {
    let use_case = composition.login_usecase()?;
    let reporter = composition.reporter();
    print_welcome(composition, &use_case)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input {
            ":q" | ":quit" | ":exit" => break,
            "" => {
                let outcome = if use_case.snapshot().email.is_none()
                    && use_case.single_connection().is_some()
                {
                    use_case.press_connection_button().await
                } else {
                    use_case.submit().await
                };
                report_outcome(reporter, &outcome);
            }
            text => {
                // 매칭 시에는 presenter가 SSO 표시줄을 그린다.
                match use_case.email_changed(text) {
                    Ok(Some(connection)) => reporter.kv("Connection", &connection.to_string()),
                    Ok(None) => {
                        reporter.status("Match", "no enterprise connection for this domain")
                    }
                    Err(_) => {}
                }
            }
        }
    }

    Ok(())
}

fn print_welcome(
    composition: &AppComposition,
    use_case: &EnterpriseLoginUseCase<'_>,
) -> Result<()> {
    let reporter = composition.reporter();
    reporter.section("Enterprise Login");
    match composition.single_button_title()? {
        Some(title) => reporter.kv("Button", &title),
        None => {
            for connection in use_case.connections() {
                reporter.kv("Connection", &connection.to_string());
            }
        }
    }
    reporter.raw("type an email to match a connection, an empty line to log in, :q to quit");
    Ok(())
}

fn report_outcome(reporter: &dyn Reporter, outcome: &SubmitOutcome) -> bool {
    match outcome {
        SubmitOutcome::Completed(Ok(())) => {
            reporter.status("Login", "enterprise authenticator launched");
            true
        }
        SubmitOutcome::Completed(Err(_)) => false,
        SubmitOutcome::HandledElsewhere(connection) => {
            reporter.status(
                "Login",
                &format!("handed off to credential login for {}", connection.name()),
            );
            true
        }
        SubmitOutcome::Ignored => {
            reporter.status("Login", "a login is already in progress");
            true
        }
    }
}
