//! Domain entity representing a registered student (user) of the store.

use chrono::NaiveDate;

/// A student record from the `users` table.
///
/// `user_id` is an external identifier supplied by the client, distinct from
/// the generated primary key.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub user_id: i64,
    pub birth: NaiveDate,
    pub sex: String,
}

#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub surname: String,
    pub user_id: i64,
    pub birth: NaiveDate,
    pub sex: String,
}

#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub user_id: Option<i64>,
    pub birth: Option<NaiveDate>,
    pub sex: Option<String>,
}
