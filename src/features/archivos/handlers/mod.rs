mod archivo_handler;

pub use archivo_handler::*;
