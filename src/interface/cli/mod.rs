//! CLI 인터페이스 모듈 묶음.
//! 입력 파싱/대화형 세션/조립을 한 네임스페이스로 관리한다.

pub mod command;
pub mod composition;
pub mod session;

pub use command::{Cli, CliAction};
pub use composition::AppComposition;
pub use session::{run_interactive, run_login};
