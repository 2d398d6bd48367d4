mod tarea_dto;

pub use tarea_dto::{CreateTareaDto, TareaListQuery, TareaResponseDto, UpdateTareaDto};
