//! ssopilot library root.
//! 엔터프라이즈(SSO) 연결 매칭/로그인 흐름을 Clean Architecture 계층으로 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use interface::cli::AppComposition;

/// 라이브러리 직접 호출용 1회 로그인 함수. 로그인 실패 시 false.
pub async fn login(email: Option<String>) -> Result<bool> {
    let composition = AppComposition::default();
    interface::cli::run_login(&composition, email).await
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    let composition = AppComposition::default();
    Ok(composition.inspect_config_usecase().execute()?.pretty_json)
}
