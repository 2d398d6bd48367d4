mod archivo_service;

pub use archivo_service::ArchivoService;
