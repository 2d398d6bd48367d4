mod tarea_handler;

pub use tarea_handler::*;
