mod materia_service;

pub use materia_service::MateriaService;
