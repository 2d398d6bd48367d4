use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::pomodoro::models::SesionPomodoro;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSesionDto {
    pub id_tarea: Uuid,
    #[validate(range(min = 1, message = "duracion_segundos must be greater than zero"))]
    pub duracion_segundos: i32,
    pub fecha: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SesionResponseDto {
    pub id: Uuid,
    pub id_tarea: Uuid,
    pub duracion_segundos: i32,
    pub fecha: DateTime<Utc>,
}

impl From<SesionPomodoro> for SesionResponseDto {
    fn from(s: SesionPomodoro) -> Self {
        Self {
            id: s.id,
            id_tarea: s.id_tarea,
            duracion_segundos: s.duracion_segundos,
            fecha: s.fecha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_fails_validation() {
        let dto = CreateSesionDto {
            id_tarea: Uuid::nil(),
            duracion_segundos: 0,
            fecha: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn negative_duration_fails_validation() {
        let dto = CreateSesionDto {
            id_tarea: Uuid::nil(),
            duracion_segundos: -25,
            fecha: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn one_second_is_accepted() {
        let dto = CreateSesionDto {
            id_tarea: Uuid::nil(),
            duracion_segundos: 1,
            fecha: None,
        };
        assert!(dto.validate().is_ok());
    }
}
