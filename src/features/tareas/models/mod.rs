mod tarea;

pub use tarea::Tarea;
