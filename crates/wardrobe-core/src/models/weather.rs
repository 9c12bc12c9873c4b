//! 날씨 모델.
//!
//! `GET /api/weather/{city}` 응답. 추천 요청에 그대로 되돌려 보내므로
//! 알 수 없는 필드도 `extra`에 보존한다.

use serde::{Deserialize, Serialize};

/// 날씨 스냅샷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// 기온 (°C)
    pub temperature: f64,
    /// 습도 (%)
    #[serde(default)]
    pub humidity: f64,
    #[serde(default)]
    pub weather_description: String,
    /// 풍속 (m/s)
    #[serde(default)]
    pub wind_speed: f64,
    #[serde(default)]
    pub city: String,
    /// 기온 구간 라벨 (예: "舒適")
    #[serde(default)]
    pub temperature_category: String,
    /// 서버가 덧붙이는 기타 필드 (comfort_level 등)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl WeatherSnapshot {
    /// 날씨 조회 실패 시 사용하는 대체 스냅샷
    pub fn fallback(city: &str) -> Self {
        Self {
            temperature: 27.0,
            humidity: 65.0,
            weather_description: "多雲".to_string(),
            wind_speed: 1.03,
            city: city.to_string(),
            temperature_category: "舒適".to_string(),
            extra: serde_json::Map::new(),
        }
    }

    /// 한 줄 요약
    pub fn summary(&self) -> String {
        format!(
            "{} {:.1}°C {} (濕度 {:.0}%, 風速 {:.2}m/s, {})",
            self.city,
            self.temperature,
            self.weather_description,
            self.humidity,
            self.wind_speed,
            self.temperature_category
        )
    }
}
