//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;
use crate::domain::login::{LoginError, Route};

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 외부 인증 백엔드 포트.
/// 호출 1회당 결과는 정확히 한 번 반환되며, 이 계층에서 재시도하지 않는다.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, connection: &str, email: Option<&str>) -> Result<(), LoginError>;
}

/// 설정에 맞는 인증 백엔드를 생성하는 팩토리 포트.
pub trait BackendFactory: Send + Sync {
    fn build(&self, config: &Config) -> Result<Box<dyn AuthBackend>>;
}

/// 화면 전환 포트. active auth 연결은 이 경로로 넘긴다.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route) -> Result<()>;
}

/// 로그인 화면 상태 표시 포트.
pub trait LoginPresenter: Send + Sync {
    fn hide_message(&self);
    fn show_error(&self, error: &LoginError);
    fn set_email_valid(&self, valid: bool);
    /// 매칭된 연결 안내 바(SSO bar) 표시 여부
    fn set_sso_bar_visible(&self, visible: bool);
    /// 로그인 진행 중 제출 컨트롤 비활성화
    fn set_in_progress(&self, in_progress: bool);
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn raw(&self, line: &str);
}
