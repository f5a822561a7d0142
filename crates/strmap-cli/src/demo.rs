//! Sample data for `strmap demo`

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub name: String,
    pub age: u32,
    pub is_admin: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Response {
    pub users: Vec<User>,
    pub length: i64,
    pub status: String,
    pub nil: Option<Box<i64>>,
}

pub fn sample_response() -> Response {
    let users: Vec<User> = [
        ("Alice", 60, true),
        ("Bob", 60, true),
        ("Carol", 50, false),
        ("Dave", 60, false),
    ]
    .into_iter()
    .map(|(name, age, is_admin)| User {
        name: name.to_string(),
        age,
        is_admin,
    })
    .collect();

    Response {
        length: users.len() as i64,
        users,
        status: "OK".to_string(),
        nil: None,
    }
}
