mod sesion;

pub use sesion::SesionPomodoro;
