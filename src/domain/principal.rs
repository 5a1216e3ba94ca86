/// The authenticated caller's identity and role, as resolved by the external
/// credential gate before a request reaches this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    pub id: String,
    pub name: String,
    pub is_admin: bool,
}

impl Principal {
    /// A regular customer principal.
    pub fn user(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_admin: false,
        }
    }

    /// An administrator principal.
    pub fn admin(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_admin: true,
        }
    }
}
