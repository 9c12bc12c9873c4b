//! 페이지 테스트용 API 대역.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use wardrobe_core::error::CoreError;
use wardrobe_core::models::clothing::{
    ClothingAnalysis, ClothingDraft, ClothingItem, ClothingUpdate, PhotoUpload,
};
use wardrobe_core::models::envelope::HealthStatus;
use wardrobe_core::models::outfit::{
    FavoriteOutfit, FavoriteRequest, Outfit, RecommendationRequest, RecommendationResult,
};
use wardrobe_core::models::stats::WardrobeStats;
use wardrobe_core::models::weather::WeatherSnapshot;
use wardrobe_core::ports::api_client::WardrobeApi;

pub(crate) fn sample_item(id: i64, name: &str) -> ClothingItem {
    ClothingItem {
        id,
        user_id: 1,
        name: name.to_string(),
        category: "上衣".to_string(),
        primary_color: Some("白色".to_string()),
        style: Some("休閒".to_string()),
        material: None,
        suitable_seasons: vec!["夏季".to_string()],
        suitable_occasions: vec!["日常".to_string()],
        photo_path: None,
        usage_count: 0,
        created_at: None,
    }
}

pub(crate) fn sample_outfit(id: &str, score: f64) -> Outfit {
    Outfit {
        id: id.to_string(),
        items: vec![sample_item(1, "白T")],
        score,
        explanation: String::new(),
    }
}

/// 고정 응답을 돌려주는 API 대역
///
/// `fail`이 켜지면 모든 호출이 네트워크 에러로 실패한다.
#[derive(Default)]
pub(crate) struct MockApi {
    pub fail: AtomicBool,
    pub items: Mutex<Vec<ClothingItem>>,
    pub favorites: Mutex<Vec<FavoriteOutfit>>,
    pub recommendation: Mutex<RecommendationResult>,
    pub analysis: Mutex<ClothingAnalysis>,
    pub weather_fails: AtomicBool,
    /// 호출된 메서드 이름 기록
    pub calls: Mutex<Vec<&'static str>>,
    /// 마지막 추천 요청
    pub last_request: Mutex<Option<RecommendationRequest>>,
}

impl MockApi {
    pub fn failing() -> Self {
        let api = Self::default();
        api.fail.store(true, Ordering::SeqCst);
        api
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    fn enter(&self, name: &'static str) -> Result<(), CoreError> {
        self.calls.lock().push(name);
        if self.fail.load(Ordering::SeqCst) {
            Err(CoreError::Network("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl WardrobeApi for MockApi {
    async fn health(&self) -> Result<HealthStatus, CoreError> {
        self.enter("health")?;
        Ok(HealthStatus {
            status: "healthy".to_string(),
            message: String::new(),
        })
    }

    async fn list_clothing(&self, _user_id: i64) -> Result<Vec<ClothingItem>, CoreError> {
        self.enter("list_clothing")?;
        Ok(self.items.lock().clone())
    }

    async fn add_clothing(
        &self,
        _user_id: i64,
        draft: &ClothingDraft,
        _photo: Option<&PhotoUpload>,
    ) -> Result<ClothingItem, CoreError> {
        self.enter("add_clothing")?;
        draft.validate()?;
        let mut items = self.items.lock();
        let item = sample_item(items.len() as i64 + 1, &draft.name);
        items.push(item.clone());
        Ok(item)
    }

    async fn update_clothing(
        &self,
        item_id: i64,
        update: &ClothingUpdate,
    ) -> Result<ClothingItem, CoreError> {
        self.enter("update_clothing")?;
        let mut items = self.items.lock();
        let item = items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| CoreError::NotFound {
                resource_type: "clothing".to_string(),
                id: item_id.to_string(),
            })?;
        if let Some(name) = &update.name {
            item.name = name.clone();
        }
        Ok(item.clone())
    }

    async fn delete_clothing(&self, item_id: i64) -> Result<(), CoreError> {
        self.enter("delete_clothing")?;
        self.items.lock().retain(|i| i.id != item_id);
        Ok(())
    }

    async fn analyze_photo(&self, _photo: &PhotoUpload) -> Result<ClothingAnalysis, CoreError> {
        self.enter("analyze_photo")?;
        Ok(self.analysis.lock().clone())
    }

    async fn weather(&self, city: &str) -> Result<WeatherSnapshot, CoreError> {
        self.enter("weather")?;
        if self.weather_fails.load(Ordering::SeqCst) {
            return Err(CoreError::Backend("weather api key missing".to_string()));
        }
        let mut weather = WeatherSnapshot::fallback(city);
        weather.temperature = 18.0;
        weather.weather_description = "小雨".to_string();
        Ok(weather)
    }

    async fn generate_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResult, CoreError> {
        self.enter("generate_recommendations")?;
        *self.last_request.lock() = Some(request.clone());
        Ok(self.recommendation.lock().clone())
    }

    async fn save_favorite(
        &self,
        request: &FavoriteRequest,
    ) -> Result<FavoriteOutfit, CoreError> {
        self.enter("save_favorite")?;
        let mut favorites = self.favorites.lock();
        let favorite = FavoriteOutfit {
            id: favorites.len() as i64 + 1,
            user_id: request.user_id,
            outfit_data: serde_json::to_value(&request.outfit_data)?,
            score: Some(request.score),
            created_at: None,
        };
        favorites.push(favorite.clone());
        Ok(favorite)
    }

    async fn list_favorites(&self, _user_id: i64) -> Result<Vec<FavoriteOutfit>, CoreError> {
        self.enter("list_favorites")?;
        Ok(self.favorites.lock().clone())
    }

    async fn delete_favorite(&self, favorite_id: i64) -> Result<(), CoreError> {
        self.enter("delete_favorite")?;
        self.favorites.lock().retain(|f| f.id != favorite_id);
        Ok(())
    }

    async fn wardrobe_stats(&self, _user_id: i64) -> Result<WardrobeStats, CoreError> {
        self.enter("wardrobe_stats")?;
        let items = self.items.lock();
        Ok(WardrobeStats {
            total_items: items.len() as u32,
            ..Default::default()
        })
    }
}

/// 기본 설정의 알림 큐를 붙인 컨텍스트 (런타임 안에서 호출)
pub(crate) fn context(api: std::sync::Arc<MockApi>) -> super::PageContext {
    let toasts = wardrobe_toast::NotificationQueue::new(
        &wardrobe_core::config::NotificationConfig::default(),
    )
    .unwrap();
    super::PageContext::new(api, toasts, 1)
}

/// 큐에 남은 토스트를 (제목, 설명, 실패 여부)로
pub(crate) fn toasts(ctx: &super::PageContext) -> Vec<(String, String, bool)> {
    ctx.toasts
        .snapshot()
        .iter()
        .map(|n| {
            (
                n.title.clone(),
                n.body().to_string(),
                n.severity.is_destructive(),
            )
        })
        .collect()
}
