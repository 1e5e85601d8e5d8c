//! 애플리케이션 조립(composition root) 모듈.

use anyhow::{Context, Result};

use crate::application::ports::{BackendFactory, ConfigRepository};
use crate::application::usecases::enterprise_login::EnterpriseLoginUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::resolve_connection::ResolveConnectionUseCase;
use crate::domain::resolver::resolve_single_connection;
use crate::infrastructure::adapters::{
    BackendFactoryAdapter, ConsoleNavigator, ConsoleReporter, JsonConfigRepository,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    backend_factory: BackendFactoryAdapter,
    navigator: ConsoleNavigator,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository,
            backend_factory: BackendFactoryAdapter,
            navigator: ConsoleNavigator::default(),
            reporter: ConsoleReporter::new(),
        }
    }
}

impl AppComposition {
    pub fn reporter(&self) -> &ConsoleReporter {
        &self.reporter
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 이메일 → 연결 해석 유스케이스를 생성한다.
    pub fn resolve_usecase(&self) -> ResolveConnectionUseCase<'_> {
        ResolveConnectionUseCase {
            config_repo: &self.config_repo,
            reporter: &self.reporter,
        }
    }

    /// 로그인 화면 1개 분량의 유스케이스를 생성한다.
    /// 설정/백엔드가 올바르지 않으면 화면을 열기 전에 실패한다.
    pub fn login_usecase(&self) -> Result<EnterpriseLoginUseCase<'_>> {
        let config = self.config_repo.load()?;
        let connections = config
            .enterprise_connections()
            .context("invalid enterprise connection config")?;
        let backend = self.backend_factory.build(&config)?;

        Ok(EnterpriseLoginUseCase::new(
            connections,
            config.active_auth_set(),
            backend,
            &self.navigator,
            &self.reporter,
        ))
    }

    /// 단일 연결 버튼 제목(연결이 하나일 때만).
    pub fn single_button_title(&self) -> Result<Option<String>> {
        let config = self.config_repo.load()?;
        let connections = config.enterprise_connections()?;
        Ok(resolve_single_connection(&connections)
            .map(|only| only.button_title(&config.custom_styles, true)))
    }
}
