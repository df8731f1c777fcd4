use reqwest::Method;
use serde;

use crate::api::{ApiError, Client};
use crate::params::BadgesBadgeParams;

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Badge {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(rename="picture_url")]
    pub image: String,
    pub width: i64,
    pub height: i64,
    pub level: Option<i64>,
}

#[derive(serde::Deserialize)]
struct BadgeResponse {
    badge: Badge,
}

/// Endpoints under `/badges`.
pub struct BadgeService<'a> {
    client: &'a Client,
}

impl<'a> BadgeService<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn badge(&self, params: BadgesBadgeParams) -> Result<Badge, ApiError> {
        let res: BadgeResponse = self.client.execute(Method::GET, "badges/badge", &params).await?;
        Ok(res.badge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn badge_without_level() {
        let badge: Badge = serde_json::from_str(r#"{
            "id": 42,
            "name": "Marathon",
            "description": "Watch 100 episodes",
            "picture_url": "https://pictures.betaseries.com/badges/42.png",
            "width": 120,
            "height": 120,
            "level": null
        }"#).unwrap();
        assert_eq!(badge.id, 42);
        assert_eq!(badge.image, "https://pictures.betaseries.com/badges/42.png");
        assert_eq!(badge.level, None);
    }

    #[test]
    fn badge_with_level() {
        let badge: Badge = serde_json::from_str(r#"{"id":1,"level":3}"#).unwrap();
        assert_eq!(badge.level, Some(3));
        assert_eq!(badge.name, "");
    }
}
