//! Request DTOs.

use serde::Deserialize;

/// Body of `POST /api/folders`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFolderRequest {
    /// Folder name; `nome` is accepted for existing clients.
    #[serde(default, alias = "nome")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_both_field_names() {
        let a: CreateFolderRequest = serde_json::from_str(r#"{"name":"movies"}"#).unwrap();
        let b: CreateFolderRequest = serde_json::from_str(r#"{"nome":"movies"}"#).unwrap();
        let c: CreateFolderRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(a.name.as_deref(), Some("movies"));
        assert_eq!(b.name.as_deref(), Some("movies"));
        assert!(c.name.is_none());
    }
}
