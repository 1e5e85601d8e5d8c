//! 콘솔 리포터/로그인 화면 표시 포트 구현 어댑터.

use std::io::{self, IsTerminal};
use std::sync::Mutex;

use crate::application::ports::{LoginPresenter, Reporter};
use crate::domain::login::LoginError;

/// 마지막으로 표시한 화면 상태. 바뀐 경우에만 출력한다.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct ScreenState {
    email_valid: Option<bool>,
    sso_bar_visible: bool,
    in_progress: bool,
    message_visible: bool,
}

/// 콘솔 전용 리포터 어댑터.
pub struct ConsoleReporter {
    interactive: bool,
    state: Mutex<ScreenState>,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// stdout이 TTY일 때만 색상을 사용한다.
    pub fn new() -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
            state: Mutex::new(ScreenState::default()),
        }
    }

    fn update(&self, f: impl FnOnce(&mut ScreenState)) -> Option<ScreenState> {
        let mut state = self.state.lock().ok()?;
        let before = *state;
        f(&mut state);
        (*state != before).then_some(*state)
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.interactive {
            format!("\x1b[{color}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        println!();
        println!("==================== {} ====================", name);
    }

    fn kv(&self, key: &str, value: &str) {
        println!("{:<12}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        println!("[{:<12}] {}", scope, message);
    }

    fn raw(&self, line: &str) {
        println!("{}", line);
    }
}

impl LoginPresenter for ConsoleReporter {
    fn hide_message(&self) {
        self.update(|s| s.message_visible = false);
    }

    fn show_error(&self, error: &LoginError) {
        self.update(|s| s.message_visible = true);
        eprintln!("{} {}", self.paint("[error]", "31"), error);
    }

    fn set_email_valid(&self, valid: bool) {
        if self.update(|s| s.email_valid = Some(valid)).is_some() && !valid {
            self.status("Email", &self.paint("invalid email", "33"));
        }
    }

    fn set_sso_bar_visible(&self, visible: bool) {
        if self.update(|s| s.sso_bar_visible = visible).is_some() && visible {
            self.status("SSO", &self.paint("single sign-on enabled", "36"));
        }
    }

    fn set_in_progress(&self, in_progress: bool) {
        if self.update(|s| s.in_progress = in_progress).is_some() {
            let label = if in_progress {
                self.paint("logging in...", "33")
            } else {
                self.paint("ready", "32")
            };
            self.status("Login", &label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_reports_only_changes() {
        let reporter = ConsoleReporter {
            interactive: false,
            state: Mutex::new(ScreenState::default()),
        };

        assert!(reporter.update(|s| s.in_progress = true).is_some());
        assert!(reporter.update(|s| s.in_progress = true).is_none());
        assert_eq!(reporter.paint("ready", "32"), "ready");
    }

    #[test]
    fn sso_bar_shows_again_after_each_rematch() {
        let reporter = ConsoleReporter {
            interactive: false,
            state: Mutex::new(ScreenState::default()),
        };

        assert!(reporter.update(|s| s.sso_bar_visible = false).is_none());
        let shown = reporter.update(|s| s.sso_bar_visible = true);
        assert!(shown.is_some_and(|s| s.sso_bar_visible));
        assert!(reporter.update(|s| s.sso_bar_visible = true).is_none());
        assert!(reporter.update(|s| s.sso_bar_visible = false).is_some());
        assert!(reporter.update(|s| s.sso_bar_visible = true).is_some());
    }
}
