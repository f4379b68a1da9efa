pub mod client_env;
pub mod use_identity;
pub mod use_viewport;
pub mod use_route_selection;

pub use client_env::{ClientEnvProvider, use_client_env, use_app_config};
pub use use_identity::use_identity;
pub use use_viewport::use_viewport;
pub use use_route_selection::use_route_selection;
