mod materia;

pub use materia::Materia;
