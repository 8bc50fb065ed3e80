use serde::Serialize;

/// A mobilographer whose attendance is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: i64,
    pub name: String,       // ⇔ people.name (TEXT UNIQUE)
    pub created_at: String, // ⇔ people.created_at (TEXT, ISO8601)
}
