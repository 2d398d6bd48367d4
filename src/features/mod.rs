pub mod archivos;
pub mod auth;
pub mod grupos;
pub mod materias;
pub mod pomodoro;
pub mod tareas;
pub mod users;
