use serde::Deserialize;
use serde::Serialize;

/// The local profile created by the login form. There is no verification of
/// any kind; this gates the dashboard and nothing else.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub contact: String,
    pub last_login: String,
}
