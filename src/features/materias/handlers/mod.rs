mod materia_handler;

pub use materia_handler::*;
