pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::app::{build_login_deps, build_state, run};
pub use frameworks::config::AppConfig;
