//! 엔터프라이즈 도메인 로그인 화면의 흐름을 조율하는 유스케이스.
//!
//! 이메일 입력 → 연결 매칭 → (active auth면 화면 전환) → 백엔드 로그인 → 결과 표시.

mod dispatch;

use std::sync::Mutex;
use std::sync::atomic::AtomicBool;

use tracing::{debug, warn};

use crate::application::ports::{AuthBackend, LoginPresenter, Navigator};
use crate::domain::connection::{ActiveAuthSet, EnterpriseConnection};
use crate::domain::email::ValidationError;
use crate::domain::login::{LoginOutcome, Route};
use crate::domain::resolver::{EnterpriseConnectionResolver, requires_active_auth};

/// 제출(submit/버튼) 처리 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 이미 로그인이 진행 중이라 무시됨
    Ignored,
    /// active auth 화면으로 넘겨 이 유스케이스는 로그인을 호출하지 않음
    HandledElsewhere(EnterpriseConnection),
    /// 백엔드 호출 완료(성공/실패)
    Completed(LoginOutcome),
}

/// 현재 입력 상태 스냅샷.
#[derive(Debug, Clone, Default)]
pub struct LoginSnapshot {
    pub email: Option<String>,
    pub connection: Option<EnterpriseConnection>,
    pub in_progress: bool,
}

/// 로그인 화면 인스턴스 하나에 대응한다. 화면이 닫히면 함께 버린다.
pub struct EnterpriseLoginUseCase<'a> {
    backend: Box<dyn AuthBackend>,
    navigator: &'a dyn Navigator,
    presenter: &'a dyn LoginPresenter,
    active_auth: ActiveAuthSet,
    resolver: Mutex<EnterpriseConnectionResolver>,
    in_progress: AtomicBool,
}

impl<'a> EnterpriseLoginUseCase<'a> {
    pub fn new(
        connections: Vec<EnterpriseConnection>,
        active_auth: ActiveAuthSet,
        backend: Box<dyn AuthBackend>,
        navigator: &'a dyn Navigator,
        presenter: &'a dyn LoginPresenter,
    ) -> Self {
        Self {
            backend,
            navigator,
            presenter,
            active_auth,
            resolver: Mutex::new(EnterpriseConnectionResolver::new(connections)),
            in_progress: AtomicBool::new(false),
        }
    }

    pub fn connections(&self) -> Vec<EnterpriseConnection> {
        self.with_resolver(|r| r.connections().to_vec())
    }

    /// 연결이 하나뿐이면 단일 버튼으로 표시할 연결을 반환한다.
    pub fn single_connection(&self) -> Option<EnterpriseConnection> {
        self.with_resolver(|r| r.single_connection().cloned())
    }

    pub fn snapshot(&self) -> LoginSnapshot {
        let (email, connection) = self.with_resolver(|r| {
            (r.email().map(ToString::to_string), r.connection().cloned())
        });
        LoginSnapshot {
            email,
            connection,
            in_progress: self.is_in_progress(),
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress.load(std::sync::atomic::Ordering::Acquire)
    }

    /// 이메일 입력이 바뀔 때마다 호출한다.
    /// 형식 오류면 입력만 invalid로 표시하고 이전 이메일/연결은 유지한다.
    pub fn email_changed(
        &self,
        text: &str,
    ) -> Result<Option<EnterpriseConnection>, ValidationError> {
        self.presenter.hide_message();
        self.presenter.set_sso_bar_visible(false);

        let result = self.with_resolver(|r| r.update_email(text).map(|c| c.cloned()));
        match &result {
            Ok(Some(connection)) => {
                self.presenter.set_email_valid(true);
                debug!(connection = %connection, "enterprise connection match");
                self.presenter.set_sso_bar_visible(true);
            }
            Ok(None) => self.presenter.set_email_valid(true),
            Err(_) => self.presenter.set_email_valid(false),
        }
        result
    }

    /// 현재 연결이 active auth 대상이면 해당 화면으로 전환하고 true를 반환한다.
    pub fn auth_mode_switch(&self) -> bool {
        let Some(connection) = self.with_resolver(|r| r.connection().cloned()) else {
            return false;
        };
        self.route_to_active_auth(&connection)
    }

    fn route_to_active_auth(&self, connection: &EnterpriseConnection) -> bool {
        if !requires_active_auth(connection, &self.active_auth) {
            return false;
        }

        match self.navigator.navigate(Route::EnterpriseActiveAuth {
            connection: connection.clone(),
        }) {
            Ok(()) => true,
            Err(err) => {
                // 전환 실패 시 일반 로그인으로 진행한다.
                warn!(
                    connection = %connection,
                    error = %format!("{err:#}"),
                    "active auth navigation failed"
                );
                false
            }
        }
    }

    fn with_resolver<T>(&self, f: impl FnOnce(&mut EnterpriseConnectionResolver) -> T) -> T {
        // poison 상태여도 마지막 resolver 값을 그대로 사용한다.
        let mut guard = self
            .resolver
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}
