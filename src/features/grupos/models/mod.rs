mod grupo;

pub use grupo::{Grupo, GrupoMiembro};
