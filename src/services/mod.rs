// Services: almacenamiento local, despacho de SMS y datos de rutas

pub mod identity_store;
pub mod sms_service;
pub mod route_generator;

pub use identity_store::DeviceIdentityStore;
pub use sms_service::SmsService;
pub use route_generator::RouteGenerator;
