mod grupo_dto;

pub use grupo_dto::{
    AddMiembroDto, CreateGrupoDto, GrupoResponseDto, MiembroResponseDto, UpdateGrupoDto,
};
