pub mod app;
pub mod header;
pub mod controls;
pub mod identity_modal;
pub mod side_menu;
pub mod route_panel;
pub mod map_view;

pub use app::App;
pub use header::Header;
pub use controls::Controls;
pub use identity_modal::IdentityModal;
pub use side_menu::SideMenu;
pub use route_panel::RoutePanel;
pub use map_view::MapView;
