//! Frontend Models
//!
//! Records returned by the remote posts endpoint.

use serde::Deserialize;

/// One post. Extra fields sent by the endpoint (e.g. `userId`) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_page_ignores_extra_fields() {
        let json = r#"[
            {"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit"},
            {"userId": 1, "id": 2, "title": "qui est esse", "body": "est rerum tempore"}
        ]"#;

        let posts: Vec<Post> = serde_json::from_str(json).expect("page should decode");

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[1].title, "qui est esse");
    }

    #[test]
    fn test_decode_empty_page() {
        let posts: Vec<Post> = serde_json::from_str("[]").expect("empty page should decode");
        assert!(posts.is_empty());
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        assert!(serde_json::from_str::<Vec<Post>>(r#"{"error": "nope"}"#).is_err());
        assert!(serde_json::from_str::<Vec<Post>>(r#"[{"id": 1}]"#).is_err());
    }
}
