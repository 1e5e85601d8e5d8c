//! 적용 설정 진단 유스케이스.

use anyhow::Result;

use crate::application::ports::ConfigRepository;

/// 설정 점검 결과: 병합 JSON과 연결 정의 검증 결과.
#[derive(Debug, Clone)]
pub struct ConfigReport {
    pub pretty_json: String,
    /// 연결 정의 오류(없으면 None)
    pub connection_error: Option<String>,
}

/// 현재 적용 중인 설정을 사람이 읽기 쉬운 JSON으로 반환하고 연결 정의를 검증한다.
pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> InspectConfigUseCase<'a> {
    pub fn execute(&self) -> Result<ConfigReport> {
        let pretty_json = self.config_repo.inspect_pretty_json()?;
        let connection_error = self
            .config_repo
            .load()?
            .enterprise_connections()
            .err()
            .map(|err| err.to_string());

        Ok(ConfigReport {
            pretty_json,
            connection_error,
        })
    }
}
