mod sesion_handler;

pub use sesion_handler::*;
