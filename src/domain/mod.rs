//! Domain layer
//! 엔터프라이즈 연결 매칭/로그인 규칙을 외부 의존성 없이 표현한다.

pub mod connection;
pub mod email;
pub mod login;
pub mod resolver;
