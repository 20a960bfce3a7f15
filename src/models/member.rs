use serde::Serialize;

/// A family member.
///
/// Roster order is ascending `id` (insertion order). The rotation
/// scheduler depends on that order being stable, so members are always
/// loaded with `ORDER BY id ASC`.
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub role: String,           // ⇔ members.role (free text: "Father", "Daughter", ...)
    pub color: String,          // ⇔ members.color (hex, display only)
    pub birthday: Option<String>,
    pub job: Option<String>,
    pub points: i64,
    pub tasks_completed: i64,
    pub streak: i64,
    pub debt: i64,              // ⇔ members.debt (fines for skipped turns)
    pub created_at: String,     // ISO8601
}

impl Member {
    pub fn display_label(&self) -> String {
        if self.role.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.role)
        }
    }
}
