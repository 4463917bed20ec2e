use serde::Serialize;

/// Kinds of entry the import format understands.
///
/// Browser exports only ever carry username/password pairs, so the
/// converter produces [UsernamePassword](RecordType::UsernamePassword)
/// exclusively; the other variants exist in the format for entries
/// created by other means.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum RecordType {
    /// A password alone
    Password,
    /// A username and password pair
    UsernamePassword,
    /// Arbitrary labeled fields
    Generic,
}

/// A single importable credential entry
///
/// `data` is an ordered list of labeled fields. The order is part of the
/// output format and is preserved exactly as constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    ty: RecordType,
    data: Vec<(String, String)>,
}

impl Record {
    pub fn new(ty: RecordType, data: Vec<(String, String)>) -> Self {
        Self { ty, data }
    }

    /// Entry holding a password alone
    pub fn password(password: impl Into<String>) -> Self {
        Self {
            ty: RecordType::Password,
            data: vec![("Password".into(), password.into())],
        }
    }

    /// Entry holding a username and password, in that order
    pub fn username_password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ty: RecordType::UsernamePassword,
            data: vec![
                ("Username".into(), username.into()),
                ("Password".into(), password.into()),
            ],
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.ty
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(k, _)| k == field)
            .map(|(_, v)| v.as_str())
    }

    /// Iterator across field labels in output order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(|(k, _)| k.as_str())
    }
}
