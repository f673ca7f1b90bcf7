use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeStatus {
    Liked,
    Unliked,
}

// Ответ эндпоинта POST /review/{id}/like
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResponse {
    pub status: LikeStatus,
    pub likes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_liked_response() {
        let resp: LikeResponse = serde_json::from_str(r#"{"status":"liked","likes":5}"#).unwrap();
        assert_eq!(resp, LikeResponse { status: LikeStatus::Liked, likes: 5 });
    }

    #[test]
    fn rejects_unknown_status() {
        let resp = serde_json::from_str::<LikeResponse>(r#"{"status":"maybe","likes":1}"#);
        assert!(resp.is_err());
    }
}
