//! DTOs for student endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Student;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 255))]
    pub surname: String,

    pub user_id: i64,

    pub birth: NaiveDate,

    #[validate(length(min = 1, max = 255))]
    pub sex: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub surname: Option<String>,

    pub user_id: Option<i64>,

    pub birth: Option<NaiveDate>,

    #[validate(length(min = 1, max = 255))]
    pub sex: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentItem {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub user_id: i64,
    pub birth: NaiveDate,
    pub sex: String,
}

impl From<Student> for StudentItem {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
            surname: s.surname,
            user_id: s.user_id,
            birth: s.birth,
            sex: s.sex,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub success: bool,
    pub student: StudentItem,
}
