//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod backend_factory;
mod config_repository;
mod navigator;
mod reporter;

pub use backend_factory::BackendFactoryAdapter;
pub use config_repository::JsonConfigRepository;
pub use navigator::ConsoleNavigator;
pub use reporter::ConsoleReporter;
