mod tarea_service;

pub use tarea_service::TareaService;
