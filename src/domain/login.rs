//! 로그인 요청/결과와 화면 전환 대상.

use thiserror::Error;

use crate::domain::connection::EnterpriseConnection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub connection: EnterpriseConnection,
    /// 단일 연결 버튼 경로에서는 이메일 없이 로그인할 수 있다.
    pub email: Option<String>,
}

/// 로그인 실패 사유. 재시도 없이 그대로 표시 계층에 전달한다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("no enterprise connection matches the entered email")]
    NoConnection,
    #[error("network error: {0}")]
    Network(String),
    #[error("credentials rejected: {0}")]
    Rejected(String),
    #[error("login cancelled")]
    Cancelled,
    #[error("authentication backend failed: {0}")]
    Backend(String),
}

pub type LoginOutcome = Result<(), LoginError>;

/// 외부 네비게이터가 처리하는 화면 전환 대상.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    EnterpriseActiveAuth { connection: EnterpriseConnection },
}
