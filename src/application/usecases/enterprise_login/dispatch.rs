//! 로그인 제출/단일 연결 버튼 처리 단계.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, error, info};

use super::{EnterpriseLoginUseCase, SubmitOutcome};
use crate::application::ports::LoginPresenter;
use crate::domain::connection::EnterpriseConnection;
use crate::domain::login::{LoginError, LoginOutcome, LoginRequest};

impl EnterpriseLoginUseCase<'_> {
    /// 폼 제출(버튼/리턴 키). 현재 매칭된 연결로 로그인한다.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.ignore_while_in_progress() {
            return SubmitOutcome::Ignored;
        }

        let (email, connection) = self.with_resolver(|r| {
            (r.email().map(ToString::to_string), r.connection().cloned())
        });

        if let Some(connection) = &connection
            && self.route_to_active_auth(connection)
        {
            return SubmitOutcome::HandledElsewhere(connection.clone());
        }

        self.dispatch(connection, email).await
    }

    /// 연결이 하나뿐일 때 표시되는 단일 버튼 처리.
    pub async fn press_connection_button(&self) -> SubmitOutcome {
        if self.ignore_while_in_progress() {
            return SubmitOutcome::Ignored;
        }

        let Some(connection) = self.single_connection() else {
            return SubmitOutcome::Completed(Err(LoginError::NoConnection));
        };

        if self.route_to_active_auth(&connection) {
            return SubmitOutcome::HandledElsewhere(connection);
        }

        let email = self.with_resolver(|r| r.email().map(ToString::to_string));
        self.dispatch(Some(connection), email).await
    }

    /// 진행 중이면 active auth 라우팅도 하지 않는다.
    fn ignore_while_in_progress(&self) -> bool {
        let busy = self.is_in_progress();
        if busy {
            debug!("enterprise login already in progress; ignoring submit");
        }
        busy
    }

    async fn dispatch(
        &self,
        connection: Option<EnterpriseConnection>,
        email: Option<String>,
    ) -> SubmitOutcome {
        let Some(guard) = InProgressGuard::acquire(&self.in_progress, self.presenter) else {
            debug!("enterprise login already in progress; ignoring submit");
            return SubmitOutcome::Ignored;
        };

        self.presenter.hide_message();
        info!(
            email = email.as_deref().unwrap_or("-"),
            connection = connection.as_ref().map(EnterpriseConnection::name).unwrap_or("-"),
            "enterprise connection started"
        );

        let outcome = match connection {
            Some(connection) => {
                let request = LoginRequest { connection, email };
                self.backend
                    .login(request.connection.name(), request.email.as_deref())
                    .await
            }
            None => Err(LoginError::NoConnection),
        };

        drop(guard);
        self.report(&outcome);
        SubmitOutcome::Completed(outcome)
    }

    fn report(&self, outcome: &LoginOutcome) {
        match outcome {
            Ok(()) => debug!("enterprise authenticator launched"),
            Err(err) => {
                self.presenter.show_error(err);
                error!(error = %err, "enterprise connection failed");
            }
        }
    }
}

/// 진행 중 플래그를 잡고, drop 시 해제 + 컨트롤 재활성화한다.
struct InProgressGuard<'g> {
    flag: &'g AtomicBool,
    presenter: &'g dyn LoginPresenter,
}

impl<'g> InProgressGuard<'g> {
    fn acquire(flag: &'g AtomicBool, presenter: &'g dyn LoginPresenter) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        presenter.set_in_progress(true);
        Some(Self { flag, presenter })
    }
}

impl Drop for InProgressGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        self.presenter.set_in_progress(false);
    }
}
