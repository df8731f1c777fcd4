//! Parameter records, one per endpoint.
//!
//! Field names are the wire names. `None` fields are left out of the query,
//! so `..Default::default()` is enough for everything not needed.

use chrono::{DateTime, Utc};
use serde;
use serde_with;

use crate::types::{
    FormatType, Locale, OrderDateType, OrderFavoriteType, OrderShowMemberType, OrderType,
    RecommendationStatus, StatusFavoriteType, StatusShowMemberType,
};

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsAddNoteParams {
    pub id: Option<i64>,
    pub thetvdb_id: Option<i64>,
    pub note: i64,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsDeleteNoteParams {
    pub id: Option<i64>,
    pub thetvdb_id: Option<i64>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsSearchParams {
    pub title: Option<String>,
    pub summary: Option<bool>,
    pub order: Option<OrderType>,
    pub recent: Option<bool>,
    /// Platform ids, sent comma separated.
    pub platforms: Vec<i64>,
    pub country: Option<String>,
    #[serde(rename="nbpp")]
    pub per_page: Option<i64>,
    pub page: Option<i64>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsDisplayParams {
    pub id: Option<i64>,
    pub thetvdb_id: Option<i64>,
    pub imdb_id: Option<String>,
    pub url: Option<String>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsListParams {
    pub order: Option<OrderType>,
    #[serde(with="chrono::serde::ts_seconds_option")]
    pub since: Option<DateTime<Utc>>,
    pub recent: Option<bool>,
    pub starting: Option<String>,
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub filter: Option<String>,
    pub platforms: Option<String>,
    pub country: Option<String>,
    pub summary: Option<bool>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsRandomParams {
    #[serde(rename="nb")]
    pub number: Option<i64>,
    pub summary: Option<bool>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsEpisodesParams {
    pub id: Option<i64>,
    pub thetvdb_id: Option<i64>,
    pub season: Option<i64>,
    pub episode: Option<i64>,
    pub subtitles: Option<bool>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsAddParams {
    pub id: Option<i64>,
    pub thetvdb_id: Option<i64>,
    pub imdb_id: Option<String>,
    pub episode_id: Option<i64>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsDeleteParams {
    pub id: Option<i64>,
    pub thetvdb_id: Option<i64>,
    pub imdb_id: Option<String>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsArchiveParams {
    pub id: Option<i64>,
    pub thetvdb_id: Option<i64>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsUnarchiveParams {
    pub id: Option<i64>,
    pub thetvdb_id: Option<i64>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsCreateRecommendationParams {
    pub id: Option<i64>,
    pub thetvdb_id: Option<i64>,
    /// Member id of the friend.
    pub to: i64,
    #[serde(rename="comments")]
    pub comment: Option<String>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct ShowsUpdateRecommendationParams {
    pub id: i64,
    pub status: RecommendationStatus,
    pub locale: Option<Locale>,
}

impl ShowsUpdateRecommendationParams {
    pub fn new(id: i64, status: RecommendationStatus) -> Self {
        Self {
            id,
            status,
            locale: None,
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsDeleteRecommendationParams {
    pub id: i64,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsRecommendationsParams {
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsSimilarsParams {
    pub id: Option<i64>,
    pub thetvdb_id: Option<i64>,
    pub details: Option<bool>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsVideosParams {
    pub id: Option<i64>,
    pub thetvdb_id: Option<i64>,
    pub order: Option<OrderDateType>,
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub details: Option<bool>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsCharactersParams {
    pub id: Option<i64>,
    pub thetvdb_id: Option<i64>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsPicturesParams {
    pub id: Option<i64>,
    pub thetvdb_id: Option<i64>,
    pub order: Option<OrderDateType>,
    pub start: Option<i64>,
    pub limit: Option<i64>,
    pub format: Option<FormatType>,
    pub locale: Option<Locale>,
}

/// `id` is a member id and takes priority over the token.
#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsFavoritesParams {
    pub id: Option<i64>,
    pub order: Option<OrderFavoriteType>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub status: Option<StatusFavoriteType>,
    pub summary: Option<bool>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsAddFavoriteParams {
    pub id: i64,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsDeleteFavoriteParams {
    pub id: i64,
    pub locale: Option<Locale>,
}

#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsUpdateTagsParams {
    pub id: i64,
    /// Sent comma separated. An empty list sends no `tags` key at all.
    pub tags: Vec<String>,
}

/// `id` is a member id and takes priority over the token.
#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsMemberParams {
    pub id: Option<i64>,
    pub order: Option<OrderShowMemberType>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub status: Option<StatusShowMemberType>,
    pub excluded_genres: Option<String>,
    pub excluded_networks: Option<String>,
    pub excluded_status: Option<String>,
    pub tags: Option<String>,
    pub excluded_tags: Option<String>,
    pub summary: Option<bool>,
    pub platforms: Option<String>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsDiscoverParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub summary: Option<bool>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsDiscoverPlatformsParams {
    pub summary: Option<bool>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsGenresParams {
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsSeasonsParams {
    pub id: Option<i64>,
    pub thetvdb_id: Option<i64>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsArticlesParams {
    pub id: i64,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShowsUnratedParams {
    #[serde(rename="nbpp")]
    pub per_page: Option<i64>,
    pub page: Option<i64>,
    pub date: Option<String>,
    pub locale: Option<Locale>,
}

#[serde_with::skip_serializing_none]
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq)]
pub struct BadgesBadgeParams {
    pub id: i64,
    pub locale: Option<Locale>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::encode_query;
    use chrono::TimeZone;

    #[test]
    fn display_by_id_only() {
        let params = ShowsDisplayParams {
            id: Some(1161),
            ..Default::default()
        };
        assert_eq!(encode_query(&params, None), "id=1161");
    }

    #[test]
    fn display_with_locale() {
        let params = ShowsDisplayParams {
            id: Some(1161),
            locale: Some(Locale::En),
            ..Default::default()
        };
        assert_eq!(encode_query(&params, None), "id=1161&locale=en");
    }

    #[test]
    fn episodes_query() {
        let params = ShowsEpisodesParams {
            id: Some(1161),
            season: Some(1),
            episode: Some(1),
            subtitles: Some(true),
            ..Default::default()
        };
        assert_eq!(encode_query(&params, None), "episode=1&id=1161&season=1&subtitles=true");
    }

    #[test]
    fn search_platforms_and_paging() {
        let params = ShowsSearchParams {
            title: Some("dark".to_string()),
            platforms: vec![1, 221],
            per_page: Some(5),
            ..Default::default()
        };
        assert_eq!(encode_query(&params, None), "nbpp=5&platforms=1%2C221&title=dark");
        assert_eq!(encode_query(&ShowsSearchParams::default(), None), "");
    }

    #[test]
    fn list_since_is_epoch_seconds() {
        let params = ShowsListParams {
            since: Some(Utc.with_ymd_and_hms(2023, 1, 22, 15, 29, 5).unwrap()),
            ..Default::default()
        };
        assert_eq!(encode_query(&params, None), "since=1674401345");
    }

    #[test]
    fn pictures_query() {
        let params = ShowsPicturesParams {
            id: Some(1161),
            order: Some(OrderDateType::Descending),
            format: Some(FormatType::Hd),
            ..Default::default()
        };
        assert_eq!(encode_query(&params, None), "format=hd&id=1161&order=-date");
    }

    #[test]
    fn update_recommendation_query() {
        let params = ShowsUpdateRecommendationParams::new(106618, RecommendationStatus::Accept);
        assert_eq!(encode_query(&params, Some(Locale::Fr)), "id=106618&locale=fr&status=accept");
    }

    #[test]
    fn required_zero_values_are_sent() {
        let params = ShowsAddNoteParams {
            id: Some(1),
            note: 0,
            ..Default::default()
        };
        assert_eq!(encode_query(&params, None), "id=1&note=0");
    }

    #[test]
    fn update_tags_query() {
        let params = ShowsUpdateTagsParams {
            id: 1161,
            tags: vec!["fav".to_string(), "to watch".to_string()],
        };
        assert_eq!(encode_query(&params, None), "id=1161&tags=fav%2Cto+watch");
        let params = ShowsUpdateTagsParams {
            id: 1161,
            tags: vec![],
        };
        assert_eq!(encode_query(&params, None), "id=1161");
    }
}
