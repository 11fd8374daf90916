#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct CreateUser {
    pub username: Option<String>,
}
