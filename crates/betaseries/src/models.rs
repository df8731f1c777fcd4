use chrono::{NaiveDate, NaiveDateTime};
use serde;
use serde_with::{serde_as, DefaultOnNull, DisplayFromStr};
use std::collections::BTreeMap;

use crate::decode;
use crate::types::RecommendationStatus;

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Note {
    pub total: i64,
    pub mean: f64,
    pub user: i64,
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SeasonsDetail {
    pub number: i64,
    pub episodes: i64,
}

#[serde_as]
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Showrunner {
    #[serde_as(as="DisplayFromStr")]
    pub id: i64,
    pub name: String,
    pub picture: Option<String>,
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Available {
    pub last: i64,
    pub first: i64,
}

/// A streaming platform a show is available on.
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Svod {
    pub id: i64,
    pub name: String,
    pub tag: Option<String>,
    pub color: String,
    pub link_url: String,
    pub available: Available,
    pub logo: Option<String>,
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Platforms {
    pub svods: Vec<Svod>,
    pub svod: Option<Svod>,
    #[serde(rename="vod")]
    pub vods: Vec<Svod>,
}

#[serde_as]
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ShowLogo {
    pub url: String,
    #[serde_as(as="DisplayFromStr")]
    pub width: i64,
    #[serde_as(as="DisplayFromStr")]
    pub height: i64,
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ShowImages {
    pub show: Option<String>,
    pub banner: Option<String>,
    #[serde(rename="box")]
    pub box_art: Option<String>,
    pub poster: Option<String>,
    #[serde(rename="clearlogo")]
    pub logo: Option<ShowLogo>,
}

#[serde_as]
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SocialLink {
    #[serde(rename="type")]
    pub kind: String,
    #[serde_as(as="DefaultOnNull")]
    pub external_id: String,
}

#[serde_as]
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct NextEpisode {
    pub id: Option<i64>,
    #[serde_as(as="DefaultOnNull")]
    pub code: String,
    #[serde(deserialize_with="decode::date::option::deserialize")]
    pub date: Option<NaiveDate>,
    pub title: Option<String>,
    pub image: Option<String>,
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct FriendWatching {
    pub id: i64,
    pub login: String,
    pub note: Option<i64>,
    pub avatar: Option<String>,
}

/// Member specific data, only filled when the client has a token.
#[serde_as]
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ShowUser {
    pub archived: bool,
    pub favorited: bool,
    pub remaining: i64,
    pub status: f64,
    #[serde_as(as="DefaultOnNull")]
    pub last: String,
    #[serde(deserialize_with="decode::csv_list::deserialize")]
    pub tags: Vec<String>,
    pub next: NextEpisode,
    pub friends_watching: Vec<FriendWatching>,
}

#[serde_as]
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Show {
    pub id: i64,
    pub thetvdb_id: i64,
    #[serde_as(as="DefaultOnNull")]
    pub imdb_id: String,
    #[serde(rename="themoviedb_id")]
    pub moviedb_id: i64,
    #[serde_as(as="DefaultOnNull")]
    pub slug: String,
    pub title: String,
    pub original_title: Option<String>,
    #[serde_as(as="DefaultOnNull")]
    pub description: String,
    #[serde_as(as="DisplayFromStr")]
    pub seasons: i64,
    pub seasons_details: Vec<SeasonsDetail>,
    #[serde_as(as="DisplayFromStr")]
    pub episodes: i64,
    #[serde_as(as="DisplayFromStr")]
    pub followers: i64,
    pub poster: Option<String>,
    pub comments: i64,
    #[serde_as(as="DisplayFromStr")]
    pub similars: i64,
    #[serde_as(as="DisplayFromStr")]
    pub characters: i64,
    #[serde_as(as="DisplayFromStr")]
    pub creation: i32,
    pub showrunner: Option<Showrunner>,
    pub showrunners: Vec<Showrunner>,
    #[serde(deserialize_with="decode::object_values::deserialize")]
    pub genres: Vec<String>,
    #[serde_as(as="DisplayFromStr")]
    pub length: i64,
    pub network: Option<String>,
    pub country: Option<String>,
    pub rating: Option<String>,
    #[serde_as(as="DefaultOnNull")]
    pub status: String,
    pub language: Option<String>,
    pub notes: Note,
    pub in_account: bool,
    pub images: ShowImages,
    #[serde(deserialize_with="decode::int_keyed_map::deserialize")]
    pub aliases: BTreeMap<i64, String>,
    pub social_links: Vec<SocialLink>,
    pub user: Option<ShowUser>,
    pub next_trailer: Option<String>,
    pub next_trailer_host: Option<String>,
    #[serde_as(as="DefaultOnNull")]
    pub resource_url: String,
    pub platforms: Option<Platforms>,
}

#[serde_as]
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EpisodeShow {
    pub id: i64,
    pub thetvdb_id: i64,
    pub title: String,
    #[serde_as(as="DefaultOnNull")]
    pub slug: String,
    #[serde_as(as="DisplayFromStr")]
    pub creation: i32,
    #[serde_as(as="DefaultOnNull")]
    pub status: String,
    #[serde_as(as="DefaultOnNull")]
    pub description: String,
}

#[serde_as]
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PlatformLink {
    #[serde_as(as="DisplayFromStr")]
    pub platform_id: i64,
    pub platform: String,
    pub color: String,
    #[serde(rename="type")]
    pub kind: String,
    pub logo: Option<String>,
    pub link: String,
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Subtitle {
    pub id: i64,
    pub language: String,
    pub source: String,
    pub file: String,
    #[serde(deserialize_with="decode::date_time::deserialize")]
    pub date: NaiveDateTime,
    pub url: String,
    pub quality: i64,
}

#[serde_as]
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Episode {
    pub id: i64,
    pub thetvdb_id: i64,
    pub youtube_id: Option<String>,
    pub title: String,
    pub season: i64,
    pub episode: i64,
    #[serde_as(as="DefaultOnNull")]
    pub code: String,
    pub global: i64,
    #[serde_as(as="DefaultOnNull")]
    pub description: String,
    pub director: Option<String>,
    pub writers: Vec<String>,
    #[serde(deserialize_with="decode::bool_from_int::deserialize")]
    pub special: bool,
    pub comments: i64,
    #[serde_as(as="DefaultOnNull")]
    pub show_slug: String,
    #[serde_as(as="DefaultOnNull")]
    pub resource_url: String,
    pub note: Note,
    #[serde(deserialize_with="decode::date::deserialize")]
    pub date: NaiveDate,
    pub seen_total: i64,
    pub show: EpisodeShow,
    pub platform_links: Vec<PlatformLink>,
    pub subtitles: Vec<Subtitle>,
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Season {
    pub number: i64,
    pub episodes: i64,
    pub seen: bool,
    pub hidden: bool,
    pub image: Option<String>,
    #[serde(rename="subtitles")]
    pub has_subtitles: bool,
    pub notes: Note,
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub id: i64,
    #[serde(rename="from_id")]
    pub from: i64,
    #[serde(rename="to_id")]
    pub to: i64,
    pub show_id: i64,
    pub status: RecommendationStatus,
    #[serde(rename="comments", default)]
    pub comment: Option<String>,
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SimilarShow {
    pub id: i64,
    #[serde(rename="show_title")]
    pub title: String,
    pub show_id: i64,
    pub thetvdb_id: i64,
    pub notes: Option<String>,
    pub show: Option<Show>,
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct VideoShow {
    pub id: i64,
    pub show_id: i64,
    pub host: String,
    pub slug: String,
    pub url: String,
    #[serde(deserialize_with="decode::date_time::deserialize")]
    pub date: NaiveDateTime,
    pub title: String,
    #[serde(rename="type")]
    pub kind: String,
    pub season: i64,
    pub episode: i64,
}

#[serde_as]
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CharacterShow {
    pub show_id: i64,
    #[serde_as(as="DisplayFromStr")]
    pub person_id: i64,
    pub name: String,
    pub actor: String,
    pub picture: Option<String>,
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PictureShow {
    pub id: i64,
    pub show_id: i64,
    pub url: String,
    pub width: i64,
    pub height: i64,
    #[serde(deserialize_with="decode::date_time::deserialize")]
    pub date: NaiveDateTime,
    pub picked: String,
}

#[serde_as]
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Article {
    #[serde_as(as="DisplayFromStr")]
    pub id: i64,
    #[serde(deserialize_with="decode::date_time::deserialize")]
    pub date: NaiveDateTime,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub slug: String,
    pub image: Option<String>,
    #[serde(deserialize_with="decode::bool_from_string::deserialize")]
    pub sticky: bool,
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FavoritesPage {
    pub shows: Vec<Show>,
    #[serde(default)]
    pub total: i64,
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MemberShowsPage {
    pub shows: Vec<Show>,
    #[serde(default)]
    pub total: i64,
    #[serde(rename="totalMissingShows", default)]
    pub total_missing_shows: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn show_with_irregular_fields() {
        let show: Show = serde_json::from_value(json!({
            "id": 1161,
            "thetvdb_id": 121361,
            "imdb_id": "tt0944947",
            "themoviedb_id": 1399,
            "title": "Game of Thrones",
            "seasons": "8",
            "episodes": "73",
            "followers": "180000",
            "similars": "40",
            "characters": "35",
            "creation": "2011",
            "length": "55",
            "status": "Ended",
            "genres": {"Drama": "Drame", "Fantasy": "Fantastique"},
            "aliases": {"12": "GoT"},
            "showrunner": {"id": "42", "name": "David Benioff", "picture": null},
            "images": {"show": null, "box": "box.jpg", "clearlogo": {"url": "logo.png", "width": "800", "height": "310"}},
            "user": {"archived": false, "tags": "fav, rewatch", "next": {"id": null, "code": "", "date": null}},
            "platforms": {"svods": [{"id": 1, "name": "Netflix", "available": {"first": 1}}], "vod": []},
        }))
        .unwrap();

        assert_eq!(show.seasons, 8);
        assert_eq!(show.creation, 2011);
        assert_eq!(show.followers, 180000);
        assert_eq!(show.genres.len(), 2);
        assert_eq!(show.aliases.get(&12).map(String::as_str), Some("GoT"));
        assert_eq!(show.showrunner.unwrap().id, 42);
        assert_eq!(show.images.box_art.as_deref(), Some("box.jpg"));
        assert_eq!(show.images.logo.unwrap().width, 800);
        assert_eq!(show.user.unwrap().tags, vec!["fav", "rewatch"]);
        assert_eq!(show.platforms.unwrap().svods[0].available.first, 1);
    }

    #[test]
    fn show_empty_collections_as_arrays() {
        let show: Show = serde_json::from_value(json!({
            "id": 1,
            "seasons": "1",
            "genres": [],
            "aliases": [],
        }))
        .unwrap();
        assert!(show.genres.is_empty());
        assert!(show.aliases.is_empty());
        assert_eq!(show.platforms, None);
    }

    #[test]
    fn null_text_fields_decode_as_empty() {
        let shows: Vec<Show> = serde_json::from_value(json!([
            {"id": 1, "title": "Dark"},
            {
                "id": 2,
                "title": "Lost",
                "imdb_id": null,
                "slug": null,
                "description": null,
                "status": null,
                "resource_url": null,
                "social_links": [{"type": "twitter", "external_id": null}],
                "user": {"last": null, "tags": null, "next": {"code": null}},
            },
        ]))
        .unwrap();
        assert_eq!(shows.len(), 2);
        let show = &shows[1];
        assert_eq!(show.imdb_id, "");
        assert_eq!(show.description, "");
        assert_eq!(show.social_links[0].external_id, "");
        let user = show.user.as_ref().unwrap();
        assert_eq!(user.last, "");
        assert!(user.tags.is_empty());
        assert_eq!(user.next.code, "");

        let episode: Episode = serde_json::from_value(json!({
            "id": 3,
            "code": null,
            "description": null,
            "show_slug": null,
            "resource_url": null,
            "date": "2011-04-17",
            "show": {"id": 2, "slug": null, "status": null, "description": null},
        }))
        .unwrap();
        assert_eq!(episode.code, "");
        assert_eq!(episode.description, "");
        assert_eq!(episode.show.description, "");
    }

    #[test]
    fn show_seasons_must_be_stringified() {
        assert!(serde_json::from_value::<Show>(json!({"seasons": 8})).is_err());
        assert!(serde_json::from_value::<Show>(json!({"seasons": "eight"})).is_err());
    }

    #[test]
    fn episode_flags_and_dates() {
        let episode: Episode = serde_json::from_value(json!({
            "id": 253279,
            "title": "Winter Is Coming",
            "season": 1,
            "episode": 1,
            "code": "S01E01",
            "special": 0,
            "date": "2011-04-17",
            "show": {"id": 1161, "creation": "2011"},
            "platform_links": [{"platform_id": "3", "platform": "Amazon Video", "type": "vod", "link": "l"}],
            "subtitles": [{"id": 1, "language": "VO", "date": "2023-01-22 15:29:05"}],
        }))
        .unwrap();
        assert!(!episode.special);
        assert_eq!(episode.date.to_string(), "2011-04-17");
        assert_eq!(episode.show.creation, 2011);
        assert_eq!(episode.platform_links[0].platform_id, 3);
        assert_eq!(episode.subtitles[0].date.to_string(), "2023-01-22 15:29:05");
    }

    #[test]
    fn recommendation_status_is_validated() {
        let recommendation: Recommendation = serde_json::from_value(json!({
            "id": 106602, "from_id": 5678, "to_id": 1234, "show_id": 1456,
            "status": "wait", "comments": "Test",
        }))
        .unwrap();
        assert_eq!(recommendation.status, RecommendationStatus::Wait);
        assert_eq!(recommendation.comment.as_deref(), Some("Test"));

        let result = serde_json::from_value::<Recommendation>(json!({
            "id": 1, "from_id": 1, "to_id": 2, "show_id": 3, "status": "test",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn article_sticky_from_string() {
        let article: Article = serde_json::from_value(json!({
            "id": "98", "date": "2023-01-22 15:29:05", "sticky": "1",
        }))
        .unwrap();
        assert_eq!(article.id, 98);
        assert!(article.sticky);
    }
}
