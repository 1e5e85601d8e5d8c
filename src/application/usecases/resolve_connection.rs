//! 이메일이 어떤 엔터프라이즈 연결로 해석되는지 확인하는 유스케이스.

use anyhow::{Context, Result};

use crate::application::ports::{ConfigRepository, Reporter};
use crate::domain::connection::EnterpriseConnection;
use crate::domain::resolver::{EnterpriseConnectionResolver, requires_active_auth};

/// 해석 결과.
#[derive(Debug, Clone)]
pub struct ConnectionMatch {
    pub email: String,
    pub connection: Option<EnterpriseConnection>,
    /// 매칭된 연결이 active auth 대상인지
    pub active_auth: bool,
    /// 연결이 하나뿐이라 단일 버튼으로 표시되는지
    pub single_button: Option<String>,
}

pub struct ResolveConnectionUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ResolveConnectionUseCase<'a> {
    pub fn execute(&self, email: &str) -> Result<ConnectionMatch> {
        let config = self.config_repo.load()?;
        let connections = config
            .enterprise_connections()
            .context("invalid enterprise connection config")?;
        let active_auth = config.active_auth_set();

        let mut resolver = EnterpriseConnectionResolver::new(connections);
        let single_button = resolver
            .single_connection()
            .map(|c| c.button_title(&config.custom_styles, true));
        let connection = resolver.update_email(email)?.cloned();
        let email = resolver.email().unwrap_or(email).to_string();
        let active = connection
            .as_ref()
            .is_some_and(|c| requires_active_auth(c, &active_auth));

        self.reporter.section("Resolve");
        self.reporter.kv("Email", &email);
        match &connection {
            Some(c) => self.reporter.kv("Connection", &c.to_string()),
            None => self.reporter.kv("Connection", "no match"),
        }
        self.reporter
            .kv("Flow", if active { "active auth" } else { "redirect" });
        if let Some(title) = &single_button {
            self.reporter.kv("Button", title);
        }

        Ok(ConnectionMatch {
            email,
            connection,
            active_auth: active,
            single_button,
        })
    }
}
