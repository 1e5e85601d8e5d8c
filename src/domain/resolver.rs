//! 이메일 입력을 엔터프라이즈 연결로 해석하는 resolver.
//!
//! 순서: (1) 형식 검증 (2) 도메인 추출 (3) 설정 순서대로 선형 탐색, 첫 일치 채택.

use crate::domain::connection::{ActiveAuthSet, EnterpriseConnection};
use crate::domain::email::{ValidationError, email_domain, validate_email};

/// 연결이 정확히 하나일 때만 그 연결을 반환한다(단일 버튼 경로).
pub fn resolve_single_connection(
    connections: &[EnterpriseConnection],
) -> Option<&EnterpriseConnection> {
    match connections {
        [only] => Some(only),
        _ => None,
    }
}

pub fn requires_active_auth(connection: &EnterpriseConnection, active: &ActiveAuthSet) -> bool {
    active.contains(connection.name())
}

/// 로그인 화면 인스턴스 단위로 생성되며, 마지막으로 유효했던 이메일/연결 쌍만 보관한다.
#[derive(Debug, Clone)]
pub struct EnterpriseConnectionResolver {
    connections: Vec<EnterpriseConnection>,
    email: Option<String>,
    connection: Option<EnterpriseConnection>,
}

impl EnterpriseConnectionResolver {
    pub fn new(connections: Vec<EnterpriseConnection>) -> Self {
        let connection = resolve_single_connection(&connections).cloned();
        Self {
            connections,
            email: None,
            connection,
        }
    }

    pub fn connections(&self) -> &[EnterpriseConnection] {
        &self.connections
    }

    pub fn single_connection(&self) -> Option<&EnterpriseConnection> {
        resolve_single_connection(&self.connections)
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn connection(&self) -> Option<&EnterpriseConnection> {
        self.connection.as_ref()
    }

    /// 입력이 바뀔 때마다 호출한다.
    /// 형식 오류면 이전 상태를 그대로 두고 오류만 반환한다.
    pub fn update_email(
        &mut self,
        text: &str,
    ) -> Result<Option<&EnterpriseConnection>, ValidationError> {
        let email = validate_email(text)?;
        let matched = email_domain(&email).and_then(|domain| self.match_domain(&domain).cloned());

        self.email = Some(email);
        self.connection = matched;
        Ok(self.connection.as_ref())
    }

    fn match_domain(&self, domain: &str) -> Option<&EnterpriseConnection> {
        self.connections.iter().find(|c| c.matches_domain(domain))
    }
}
