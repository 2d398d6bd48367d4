mod grupo_service;

pub use grupo_service::GrupoService;
