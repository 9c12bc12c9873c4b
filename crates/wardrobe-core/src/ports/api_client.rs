//! 옷장 백엔드 API 포트.
//!
//! 구현: `wardrobe-network` crate (reqwest)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::clothing::{
    ClothingAnalysis, ClothingDraft, ClothingItem, ClothingUpdate, PhotoUpload,
};
use crate::models::envelope::HealthStatus;
use crate::models::outfit::{
    FavoriteOutfit, FavoriteRequest, RecommendationRequest, RecommendationResult,
};
use crate::models::stats::WardrobeStats;
use crate::models::weather::WeatherSnapshot;

/// 옷장 백엔드 HTTP API
#[async_trait]
pub trait WardrobeApi: Send + Sync {
    /// 백엔드 헬스 체크
    ///
    /// 시작 시 한 번 호출하여 UI 전체를 띄울지 결정한다.
    async fn health(&self) -> Result<HealthStatus, CoreError>;

    /// 사용자 衣物 목록
    async fn list_clothing(&self, user_id: i64) -> Result<Vec<ClothingItem>, CoreError>;

    /// 衣物 등록 (multipart, 사진 선택)
    async fn add_clothing(
        &self,
        user_id: i64,
        draft: &ClothingDraft,
        photo: Option<&PhotoUpload>,
    ) -> Result<ClothingItem, CoreError>;

    /// 衣物 부분 수정
    async fn update_clothing(
        &self,
        item_id: i64,
        update: &ClothingUpdate,
    ) -> Result<ClothingItem, CoreError>;

    /// 衣物 삭제
    async fn delete_clothing(&self, item_id: i64) -> Result<(), CoreError>;

    /// 사진 AI 분석
    async fn analyze_photo(&self, photo: &PhotoUpload) -> Result<ClothingAnalysis, CoreError>;

    /// 도시 이름으로 날씨 조회
    async fn weather(&self, city: &str) -> Result<WeatherSnapshot, CoreError>;

    /// 穿搭 추천 생성
    async fn generate_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResult, CoreError>;

    /// 穿搭 즐겨찾기 저장
    async fn save_favorite(&self, request: &FavoriteRequest)
        -> Result<FavoriteOutfit, CoreError>;

    /// 즐겨찾기 목록 (최신순)
    async fn list_favorites(&self, user_id: i64) -> Result<Vec<FavoriteOutfit>, CoreError>;

    /// 즐겨찾기 삭제
    async fn delete_favorite(&self, favorite_id: i64) -> Result<(), CoreError>;

    /// 옷장 통계
    async fn wardrobe_stats(&self, user_id: i64) -> Result<WardrobeStats, CoreError>;
}
