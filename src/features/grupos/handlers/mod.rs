mod grupo_handler;

pub use grupo_handler::*;
