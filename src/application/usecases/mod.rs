pub mod enterprise_login;
pub mod inspect_config;
pub mod resolve_connection;
