mod materia_dto;

pub use materia_dto::{CreateMateriaDto, MateriaResponseDto, UpdateMateriaDto};
