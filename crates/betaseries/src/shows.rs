use reqwest::Method;
use serde;

use crate::api::{ApiError, Client};
use crate::decode;
use crate::models::{
    Article, CharacterShow, Episode, FavoritesPage, MemberShowsPage, PictureShow, Recommendation,
    Season, Show, SimilarShow, VideoShow,
};
use crate::params::*;

#[derive(serde::Deserialize)]
struct ShowResponse {
    show: Show,
}

#[derive(serde::Deserialize)]
struct ShowsResponse {
    #[serde(default)]
    shows: Vec<Show>,
}

#[derive(serde::Deserialize)]
struct EpisodesResponse {
    #[serde(default)]
    episodes: Vec<Episode>,
}

#[derive(serde::Deserialize)]
struct RecommendationResponse {
    recommendation: Recommendation,
}

#[derive(serde::Deserialize)]
struct RecommendationsResponse {
    #[serde(default)]
    recommendations: Vec<Recommendation>,
}

#[derive(serde::Deserialize)]
struct SimilarsResponse {
    #[serde(default)]
    similars: Vec<SimilarShow>,
}

#[derive(serde::Deserialize)]
struct VideosResponse {
    #[serde(default)]
    videos: Vec<VideoShow>,
}

#[derive(serde::Deserialize)]
struct CharactersResponse {
    #[serde(default)]
    characters: Vec<CharacterShow>,
}

#[derive(serde::Deserialize)]
struct PicturesResponse {
    #[serde(default)]
    pictures: Vec<PictureShow>,
}

#[derive(serde::Deserialize)]
struct GenresResponse {
    #[serde(default, deserialize_with="decode::object_values::deserialize")]
    genres: Vec<String>,
}

#[derive(serde::Deserialize)]
struct SeasonsResponse {
    #[serde(default)]
    seasons: Vec<Season>,
}

#[derive(serde::Deserialize)]
struct ArticlesResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

/// Endpoints under `/shows`.
pub struct ShowService<'a> {
    client: &'a Client,
}

impl<'a> ShowService<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    async fn show(&self, method: Method, path: &str, params: &impl serde::Serialize) -> Result<Show, ApiError> {
        let res: ShowResponse = self.client.execute(method, path, params).await?;
        Ok(res.show)
    }

    async fn shows(&self, path: &str, params: &impl serde::Serialize) -> Result<Vec<Show>, ApiError> {
        let res: ShowsResponse = self.client.execute(Method::GET, path, params).await?;
        Ok(res.shows)
    }

    async fn recommendation(&self, method: Method, params: &impl serde::Serialize) -> Result<Recommendation, ApiError> {
        let res: RecommendationResponse = self.client.execute(method, "shows/recommendation", params).await?;
        Ok(res.recommendation)
    }

    /// Rates a show for the authenticated member.
    pub async fn add_note(&self, params: ShowsAddNoteParams) -> Result<Show, ApiError> {
        self.show(Method::POST, "shows/note", &params).await
    }

    pub async fn delete_note(&self, params: ShowsDeleteNoteParams) -> Result<Show, ApiError> {
        self.show(Method::DELETE, "shows/note", &params).await
    }

    pub async fn search(&self, params: ShowsSearchParams) -> Result<Vec<Show>, ApiError> {
        self.shows("shows/search", &params).await
    }

    pub async fn display(&self, params: ShowsDisplayParams) -> Result<Show, ApiError> {
        self.show(Method::GET, "shows/display", &params).await
    }

    pub async fn list(&self, params: ShowsListParams) -> Result<Vec<Show>, ApiError> {
        self.shows("shows/list", &params).await
    }

    pub async fn random(&self, params: ShowsRandomParams) -> Result<Vec<Show>, ApiError> {
        self.shows("shows/random", &params).await
    }

    pub async fn episodes(&self, params: ShowsEpisodesParams) -> Result<Vec<Episode>, ApiError> {
        let res: EpisodesResponse = self.client.execute(Method::GET, "shows/episodes", &params).await?;
        Ok(res.episodes)
    }

    /// Adds a show to the member's account.
    pub async fn add(&self, params: ShowsAddParams) -> Result<Show, ApiError> {
        self.show(Method::POST, "shows/show", &params).await
    }

    pub async fn delete(&self, params: ShowsDeleteParams) -> Result<Show, ApiError> {
        self.show(Method::DELETE, "shows/show", &params).await
    }

    pub async fn archive(&self, params: ShowsArchiveParams) -> Result<Show, ApiError> {
        self.show(Method::POST, "shows/archive", &params).await
    }

    pub async fn unarchive(&self, params: ShowsUnarchiveParams) -> Result<Show, ApiError> {
        self.show(Method::DELETE, "shows/archive", &params).await
    }

    pub async fn create_recommendation(&self, params: ShowsCreateRecommendationParams) -> Result<Recommendation, ApiError> {
        self.recommendation(Method::POST, &params).await
    }

    pub async fn update_recommendation(&self, params: ShowsUpdateRecommendationParams) -> Result<Recommendation, ApiError> {
        self.recommendation(Method::PUT, &params).await
    }

    pub async fn delete_recommendation(&self, params: ShowsDeleteRecommendationParams) -> Result<Recommendation, ApiError> {
        self.recommendation(Method::DELETE, &params).await
    }

    /// Recommendations received by the authenticated member.
    pub async fn recommendations(&self, params: ShowsRecommendationsParams) -> Result<Vec<Recommendation>, ApiError> {
        let res: RecommendationsResponse = self.client.execute(Method::GET, "shows/recommendations", &params).await?;
        Ok(res.recommendations)
    }

    pub async fn similars(&self, params: ShowsSimilarsParams) -> Result<Vec<SimilarShow>, ApiError> {
        let res: SimilarsResponse = self.client.execute(Method::GET, "shows/similars", &params).await?;
        Ok(res.similars)
    }

    pub async fn videos(&self, params: ShowsVideosParams) -> Result<Vec<VideoShow>, ApiError> {
        let res: VideosResponse = self.client.execute(Method::GET, "shows/videos", &params).await?;
        Ok(res.videos)
    }

    pub async fn characters(&self, params: ShowsCharactersParams) -> Result<Vec<CharacterShow>, ApiError> {
        let res: CharactersResponse = self.client.execute(Method::GET, "shows/characters", &params).await?;
        Ok(res.characters)
    }

    pub async fn pictures(&self, params: ShowsPicturesParams) -> Result<Vec<PictureShow>, ApiError> {
        let res: PicturesResponse = self.client.execute(Method::GET, "shows/pictures", &params).await?;
        Ok(res.pictures)
    }

    pub async fn favorites(&self, params: ShowsFavoritesParams) -> Result<FavoritesPage, ApiError> {
        self.client.execute(Method::GET, "shows/favorites", &params).await
    }

    pub async fn add_favorite(&self, params: ShowsAddFavoriteParams) -> Result<Show, ApiError> {
        self.show(Method::POST, "shows/favorite", &params).await
    }

    pub async fn delete_favorite(&self, params: ShowsDeleteFavoriteParams) -> Result<Show, ApiError> {
        self.show(Method::DELETE, "shows/favorite", &params).await
    }

    pub async fn update_tags(&self, params: ShowsUpdateTagsParams) -> Result<Show, ApiError> {
        self.show(Method::POST, "shows/tags", &params).await
    }

    pub async fn member(&self, params: ShowsMemberParams) -> Result<MemberShowsPage, ApiError> {
        self.client.execute(Method::GET, "shows/member", &params).await
    }

    pub async fn discover(&self, params: ShowsDiscoverParams) -> Result<Vec<Show>, ApiError> {
        self.shows("shows/discover", &params).await
    }

    pub async fn discover_platforms(&self, params: ShowsDiscoverPlatformsParams) -> Result<Vec<Show>, ApiError> {
        self.shows("shows/discover_platform", &params).await
    }

    pub async fn genres(&self, params: ShowsGenresParams) -> Result<Vec<String>, ApiError> {
        let res: GenresResponse = self.client.execute(Method::GET, "shows/genres", &params).await?;
        Ok(res.genres)
    }

    pub async fn seasons(&self, params: ShowsSeasonsParams) -> Result<Vec<Season>, ApiError> {
        let res: SeasonsResponse = self.client.execute(Method::GET, "shows/seasons", &params).await?;
        Ok(res.seasons)
    }

    pub async fn articles(&self, params: ShowsArticlesParams) -> Result<Vec<Article>, ApiError> {
        let res: ArticlesResponse = self.client.execute(Method::GET, "shows/articles", &params).await?;
        Ok(res.articles)
    }

    /// Shows the member has watched but not rated yet.
    pub async fn unrated(&self, params: ShowsUnratedParams) -> Result<Vec<Show>, ApiError> {
        self.shows("shows/unrated", &params).await
    }
}
