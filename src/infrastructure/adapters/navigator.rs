//! 화면 전환 포트 구현 어댑터.
//!
//! 자격증명 입력 화면은 이 도구 밖에서 처리하므로, 전환 요청을 안내만 한다.

use anyhow::Result;

use crate::application::ports::{Navigator, Reporter};
use crate::domain::login::Route;
use crate::infrastructure::adapters::ConsoleReporter;

#[derive(Default)]
pub struct ConsoleNavigator {
    reporter: ConsoleReporter,
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: Route) -> Result<()> {
        match route {
            Route::EnterpriseActiveAuth { connection } => {
                tracing::info!(connection = %connection, "routing to active auth");
                self.reporter.status(
                    "Navigate",
                    &format!(
                        "'{}' uses credential login; continue with username/password for this connection",
                        connection.name()
                    ),
                );
            }
        }
        Ok(())
    }
}
