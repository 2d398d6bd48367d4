use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::archivos::{dtos as archivos_dtos, handlers as archivos_handlers};
use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers, model as auth_model};
use crate::features::grupos::{dtos as grupos_dtos, handlers as grupos_handlers};
use crate::features::materias::{dtos as materias_dtos, handlers as materias_handlers};
use crate::features::pomodoro::{dtos as pomodoro_dtos, handlers as pomodoro_handlers};
use crate::features::tareas::{dtos as tareas_dtos, handlers as tareas_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::register,
        auth_handlers::login,
        auth_handlers::get_me,
        // Users
        users_handlers::get_user,
        users_handlers::update_user,
        // Archivos
        archivos_handlers::upload_archivo,
        archivos_handlers::list_archivos,
        archivos_handlers::get_archivo,
        archivos_handlers::update_archivo,
        archivos_handlers::delete_archivo,
        // Materias
        materias_handlers::create_materia,
        materias_handlers::list_materias,
        materias_handlers::get_materia,
        materias_handlers::update_materia,
        materias_handlers::delete_materia,
        // Grupos
        grupos_handlers::create_grupo,
        grupos_handlers::list_grupos,
        grupos_handlers::get_grupo,
        grupos_handlers::update_grupo,
        grupos_handlers::delete_grupo,
        grupos_handlers::add_miembro,
        grupos_handlers::list_miembros,
        grupos_handlers::remove_miembro,
        // Tareas
        tareas_handlers::create_tarea,
        tareas_handlers::list_tareas,
        tareas_handlers::get_tarea,
        tareas_handlers::update_tarea,
        tareas_handlers::delete_tarea,
        // Pomodoro
        pomodoro_handlers::create_sesion,
        pomodoro_handlers::list_sesiones_by_usuario,
        pomodoro_handlers::list_sesiones_by_materia,
        pomodoro_handlers::list_sesiones_by_tarea,
        pomodoro_handlers::delete_sesion,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_model::AuthenticatedUser,
            auth_dtos::RegisterRequestDto,
            auth_dtos::LoginRequestDto,
            auth_dtos::AuthResponseDto,
            auth_dtos::AuthUserDto,
            ApiResponse<auth_dtos::AuthResponseDto>,
            ApiResponse<auth_model::AuthenticatedUser>,
            // Users
            users_dtos::UserResponseDto,
            users_dtos::UpdateUserDto,
            ApiResponse<users_dtos::UserResponseDto>,
            // Archivos
            archivos_dtos::ArchivoStatusDto,
            archivos_dtos::UploadArchivoDto,
            archivos_dtos::UpdateArchivoDto,
            archivos_dtos::ArchivoResponseDto,
            archivos_dtos::DeleteArchivoResponseDto,
            ApiResponse<archivos_dtos::ArchivoResponseDto>,
            ApiResponse<Vec<archivos_dtos::ArchivoResponseDto>>,
            ApiResponse<archivos_dtos::DeleteArchivoResponseDto>,
            // Materias
            materias_dtos::CreateMateriaDto,
            materias_dtos::UpdateMateriaDto,
            materias_dtos::MateriaResponseDto,
            ApiResponse<materias_dtos::MateriaResponseDto>,
            ApiResponse<Vec<materias_dtos::MateriaResponseDto>>,
            // Grupos
            grupos_dtos::CreateGrupoDto,
            grupos_dtos::UpdateGrupoDto,
            grupos_dtos::AddMiembroDto,
            grupos_dtos::GrupoResponseDto,
            grupos_dtos::MiembroResponseDto,
            ApiResponse<grupos_dtos::GrupoResponseDto>,
            ApiResponse<Vec<grupos_dtos::GrupoResponseDto>>,
            ApiResponse<grupos_dtos::MiembroResponseDto>,
            ApiResponse<Vec<grupos_dtos::MiembroResponseDto>>,
            // Tareas
            tareas_dtos::CreateTareaDto,
            tareas_dtos::UpdateTareaDto,
            tareas_dtos::TareaResponseDto,
            ApiResponse<tareas_dtos::TareaResponseDto>,
            ApiResponse<Vec<tareas_dtos::TareaResponseDto>>,
            // Pomodoro
            pomodoro_dtos::CreateSesionDto,
            pomodoro_dtos::SesionResponseDto,
            ApiResponse<pomodoro_dtos::SesionResponseDto>,
            ApiResponse<Vec<pomodoro_dtos::SesionResponseDto>>,
        )
    ),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "User profile management"),
        (name = "archivos", description = "Document upload and management"),
        (name = "materias", description = "Course management"),
        (name = "grupos", description = "Class groups and membership"),
        (name = "tareas", description = "Task tracking"),
        (name = "pomodoro", description = "Pomodoro study-session logging"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "AcadexPro API",
        version = "0.1.0",
        description = "API documentation for AcadexPro",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
