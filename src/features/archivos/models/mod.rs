mod archivo;

pub use archivo::Archivo;
