//! Handlers for student endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::api::dto::student::{
    CreateStudentRequest, StudentItem, StudentResponse, UpdateStudentRequest,
};
use crate::api::extractors::{PathParam, ValidatedJson};
use crate::domain::entities::{NewStudent, StudentPatch};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /students`
pub async fn list_students_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentItem>>, AppError> {
    let students = state.student_service.list_students().await?;

    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// `GET /students/{id}`
pub async fn get_student_handler(
    PathParam(id): PathParam<i64>,
    State(state): State<AppState>,
) -> Result<Json<StudentItem>, AppError> {
    let student = state.student_service.get_student(id).await?;

    Ok(Json(student.into()))
}

/// Registers a student.
///
/// # Endpoint
///
/// `POST /students`
///
/// # Errors
///
/// Returns 400 if a field is missing or empty, or `birth` is not a date.
pub async fn create_student_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), AppError> {
    let new_student = NewStudent {
        name: payload.name,
        surname: payload.surname,
        user_id: payload.user_id,
        birth: payload.birth,
        sex: payload.sex,
    };

    let student = state.student_service.create_student(new_student).await?;

    Ok((
        StatusCode::CREATED,
        Json(StudentResponse {
            success: true,
            student: student.into(),
        }),
    ))
}

/// `PATCH /students/{id}`
pub async fn update_student_handler(
    PathParam(id): PathParam<i64>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateStudentRequest>,
) -> Result<Json<StudentResponse>, AppError> {
    let patch = StudentPatch {
        name: payload.name,
        surname: payload.surname,
        user_id: payload.user_id,
        birth: payload.birth,
        sex: payload.sex,
    };

    let student = state.student_service.update_student(id, patch).await?;

    Ok(Json(StudentResponse {
        success: true,
        student: student.into(),
    }))
}

/// `DELETE /students/{id}`
pub async fn delete_student_handler(
    PathParam(id): PathParam<i64>,
    State(state): State<AppState>,
) -> Result<Json<StudentResponse>, AppError> {
    let student = state.student_service.delete_student(id).await?;

    Ok(Json(StudentResponse {
        success: true,
        student: student.into(),
    }))
}
