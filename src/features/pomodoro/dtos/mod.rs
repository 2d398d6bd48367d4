mod sesion_dto;

pub use sesion_dto::{CreateSesionDto, SesionResponseDto};
