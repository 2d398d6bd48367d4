mod sesion_service;

pub use sesion_service::SesionService;
