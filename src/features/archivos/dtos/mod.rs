mod archivo_dto;

pub use archivo_dto::{
    derive_extension, ArchivoResponseDto, ArchivoStatusDto, DeleteArchivoResponseDto,
    UpdateArchivoDto, UploadArchivoDto,
};
