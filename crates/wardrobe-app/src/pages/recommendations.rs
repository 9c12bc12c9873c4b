//! 추천 페이지.
//!
//! 날씨 조회(실패 시 대체 스냅샷) → 추천 생성 → 즐겨찾기 저장.

use tracing::{debug, error, warn};
use wardrobe_core::config::ProfileConfig;
use wardrobe_core::models::outfit::{
    FavoriteOutfit, FavoriteRequest, Outfit, RecommendationRequest, StyleLevel,
};
use wardrobe_core::models::weather::WeatherSnapshot;

use super::{PageContext, ERROR_TITLE, SUCCESS_TITLE};

/// 빈 결과인데 서버 메시지도 없을 때 안내 문구
const EMPTY_RESULT_HINT: &str = "找不到適合的搭配組合，請嘗試調整設定或新增更多衣物";

/// 추천 페이지 상태
pub struct RecommendationsPage {
    ctx: PageContext,
    location: String,
    occasion: String,
    style_level: StyleLevel,
    weather: Option<WeatherSnapshot>,
    outfits: Vec<Outfit>,
}

impl RecommendationsPage {
    pub fn new(ctx: PageContext, profile: &ProfileConfig) -> Self {
        Self {
            ctx,
            location: profile.location.clone(),
            occasion: profile.occasion.clone(),
            style_level: profile.style_level,
            weather: None,
            outfits: Vec::new(),
        }
    }

    /// 도시 변경. 날씨는 다음 조회 때 다시 받는다.
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
        self.weather = None;
    }

    pub fn set_occasion(&mut self, occasion: impl Into<String>) {
        self.occasion = occasion.into();
    }

    pub fn set_style_level(&mut self, style_level: StyleLevel) {
        self.style_level = style_level;
    }

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.weather.as_ref()
    }

    pub fn outfits(&self) -> &[Outfit] {
        &self.outfits
    }

    /// 날씨 조회. 실패하면 토스트 없이 대체 스냅샷을 쓴다.
    pub async fn refresh_weather(&mut self) -> &WeatherSnapshot {
        let weather = match self.ctx.api.weather(&self.location).await {
            Ok(weather) => weather,
            Err(e) => {
                warn!("날씨 조회 실패, 대체 값 사용: {}: {e}", self.location);
                WeatherSnapshot::fallback(&self.location)
            }
        };
        debug!("날씨: {}", weather.summary());
        self.weather.insert(weather)
    }

    /// 추천 생성
    ///
    /// 빈 결과는 안내 토스트, 실패는 실패 토스트. 실패 시 이전 결과는 유지한다.
    pub async fn generate(&mut self) -> &[Outfit] {
        if self.weather.is_none() {
            self.refresh_weather().await;
        }
        let weather = self
            .weather
            .clone()
            .unwrap_or_else(|| WeatherSnapshot::fallback(&self.location));
        let request = RecommendationRequest {
            user_id: self.ctx.user_id,
            weather,
            occasion: self.occasion.clone(),
            style_level: self.style_level,
        };

        match self.ctx.api.generate_recommendations(&request).await {
            Ok(result) => {
                if result.outfits.is_empty() {
                    let hint = result
                        .message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| EMPTY_RESULT_HINT.to_string());
                    self.ctx.toasts.info("提示", hint);
                }
                self.outfits = result.outfits;
            }
            Err(e) => {
                error!("추천 생성 실패: {e}");
                self.ctx.toasts.error(ERROR_TITLE, "生成推薦失敗，請稍後再試");
            }
        }
        &self.outfits
    }

    /// 穿搭 즐겨찾기 저장
    pub async fn save_favorite(&self, outfit: &Outfit) -> Option<FavoriteOutfit> {
        let request = FavoriteRequest::new(self.ctx.user_id, outfit.clone());
        match self.ctx.api.save_favorite(&request).await {
            Ok(favorite) => {
                self.ctx.toasts.info(SUCCESS_TITLE, "穿搭已收藏");
                Some(favorite)
            }
            Err(e) => {
                error!("즐겨찾기 저장 실패: {e}");
                self.ctx.toasts.error(ERROR_TITLE, "收藏失敗，請稍後再試");
                None
            }
        }
    }
}
