//! 穿搭 추천/즐겨찾기 모델.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;
use crate::models::clothing::ClothingItem;
use crate::models::weather::WeatherSnapshot;

/// 스타일 대담함 레벨 (1 ~ 5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StyleLevel(u8);

impl StyleLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self, CoreError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(CoreError::validation(
                "style_level",
                format!("{level}은(는) {}~{} 범위 밖", Self::MIN, Self::MAX),
            ))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "保守經典",
            2 => "簡約實用",
            3 => "日常時尚",
            4 => "潮流前衛",
            _ => "大膽創新",
        }
    }
}

impl Default for StyleLevel {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for StyleLevel {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StyleLevel> for u8 {
    fn from(level: StyleLevel) -> Self {
        level.0
    }
}

impl fmt::Display for StyleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.label())
    }
}

/// 추천 생성 요청
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub user_id: i64,
    pub weather: WeatherSnapshot,
    pub occasion: String,
    pub style_level: StyleLevel,
}

/// 점수가 매겨진 穿搭 조합
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    pub id: String,
    pub items: Vec<ClothingItem>,
    /// 0 ~ 100
    pub score: f64,
    /// 서버가 생성한 설명 (markdown)
    #[serde(default)]
    pub explanation: String,
}

/// 추천 결과. 빈 목록이면 `message`에 사유가 담긴다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationResult {
    pub outfits: Vec<Outfit>,
    pub message: Option<String>,
}

/// 즐겨찾기 저장 요청
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteRequest {
    pub user_id: i64,
    pub outfit_data: Outfit,
    pub score: f64,
}

impl FavoriteRequest {
    pub fn new(user_id: i64, outfit: Outfit) -> Self {
        Self {
            user_id,
            score: outfit.score,
            outfit_data: outfit,
        }
    }
}

/// 저장된 즐겨찾기
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteOutfit {
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    /// 객체 또는 JSON 인코딩 문자열로 내려온다
    pub outfit_data: serde_json::Value,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl FavoriteOutfit {
    /// `outfit_data`를 `Outfit`으로 해석
    pub fn outfit(&self) -> Result<Outfit, CoreError> {
        match &self.outfit_data {
            serde_json::Value::String(raw) => Ok(serde_json::from_str(raw)?),
            value => Ok(serde_json::from_value(value.clone())?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_outfit() -> Outfit {
        Outfit {
            id: "outfit_1234".to_string(),
            items: vec![],
            score: 82.5,
            explanation: "同色系搭配".to_string(),
        }
    }

    #[test]
    fn style_level_range() {
        assert!(StyleLevel::new(0).is_err());
        assert!(StyleLevel::new(6).is_err());
        assert_eq!(StyleLevel::new(1).unwrap().label(), "保守經典");
        assert_eq!(StyleLevel::new(5).unwrap().label(), "大膽創新");
        assert_eq!(StyleLevel::default().value(), 3);
    }

    #[test]
    fn style_level_serde_validates() {
        assert_eq!(serde_json::to_string(&StyleLevel::new(4).unwrap()).unwrap(), "4");
        assert!(serde_json::from_str::<StyleLevel>("9").is_err());
    }

    #[test]
    fn request_shape() {
        let req = RecommendationRequest {
            user_id: 1,
            weather: WeatherSnapshot::fallback("台北市"),
            occasion: "日常".to_string(),
            style_level: StyleLevel::default(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["style_level"], 3);
        assert_eq!(json["weather"]["temperature"], 27.0);
        assert_eq!(json["occasion"], "日常");
    }

    #[test]
    fn favorite_request_copies_score() {
        let req = FavoriteRequest::new(1, sample_outfit());
        assert_eq!(req.score, 82.5);
    }

    #[test]
    fn favorite_outfit_from_object_or_string() {
        let object = FavoriteOutfit {
            id: 1,
            user_id: 1,
            outfit_data: serde_json::to_value(sample_outfit()).unwrap(),
            score: Some(82.5),
            created_at: None,
        };
        assert_eq!(object.outfit().unwrap().id, "outfit_1234");

        let encoded = FavoriteOutfit {
            outfit_data: serde_json::Value::String(
                serde_json::to_string(&sample_outfit()).unwrap(),
            ),
            ..object.clone()
        };
        assert_eq!(encoded.outfit().unwrap().score, 82.5);

        let broken = FavoriteOutfit {
            outfit_data: serde_json::Value::String("not json".to_string()),
            ..object
        };
        assert!(broken.outfit().is_err());
    }
}
