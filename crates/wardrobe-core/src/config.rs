//! 애플리케이션 설정 구조체.
//!
//! 백엔드 URL, 알림(토스트) 수명/용량, 기본 사용자 프로필 등
//! 런타임 설정을 정의한다. `config` crate를 통해 파일/환경변수에서 로드.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::CoreError;
use crate::models::outfit::StyleLevel;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 백엔드 연결 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 알림 큐 설정
    #[serde(default)]
    pub notification: NotificationConfig,
    /// 기본 사용자 프로필
    #[serde(default)]
    pub profile: ProfileConfig,
}

// ============================================================
// 서버 설정
// ============================================================

/// 백엔드 연결 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// API 서버 기본 URL (예: "http://localhost:5000")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 요청 타임아웃 (밀리초)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// 조회성 요청 재시도 횟수
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
            max_retries: default_max_retries(),
        }
    }
}

// ============================================================
// 알림 설정
// ============================================================

/// 알림 큐 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// 알림 표시 수명 (밀리초)
    #[serde(default = "default_lifetime_ms")]
    pub lifetime_ms: u64,
    /// 큐 최대 길이 (초과 시 가장 오래된 알림 제거)
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
    /// 알림마다 즉시 확인 표시(모달 대체)를 띄울지
    #[serde(default)]
    pub acknowledge: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: default_lifetime_ms(),
            max_visible: default_max_visible(),
            acknowledge: false,
        }
    }
}

impl NotificationConfig {
    /// 알림 수명을 Duration으로 반환
    pub fn lifetime(&self) -> Duration {
        Duration::from_millis(self.lifetime_ms)
    }
}

// ============================================================
// 프로필 설정
// ============================================================

/// 기본 사용자 프로필 (백엔드는 단일 사용자 1번을 가정)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_user_id")]
    pub user_id: i64,
    /// 날씨 조회 도시
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub style_level: StyleLevel,
    #[serde(default = "default_occasion")]
    pub occasion: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            location: default_location(),
            style_level: StyleLevel::default(),
            occasion: default_occasion(),
        }
    }
}

// ============================================================
// AppConfig impl
// ============================================================

impl AppConfig {
    /// 기본 설정 생성
    pub fn default_config() -> Self {
        Self::default()
    }

    /// 서버 요청 타임아웃을 Duration으로 반환
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.server.request_timeout_ms)
    }

    /// 값 범위 검증
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.server.base_url.starts_with("http://")
            || self.server.base_url.starts_with("https://"))
        {
            return Err(CoreError::Config(format!(
                "base_url은 http(s) URL이어야 함: {}",
                self.server.base_url
            )));
        }
        if self.server.request_timeout_ms == 0 {
            return Err(CoreError::Config(
                "server.request_timeout_ms는 0보다 커야 함".to_string(),
            ));
        }
        if self.notification.lifetime_ms == 0 {
            return Err(CoreError::Config(
                "notification.lifetime_ms는 0보다 커야 함".to_string(),
            ));
        }
        if self.notification.max_visible == 0 {
            return Err(CoreError::Config(
                "notification.max_visible은 0보다 커야 함".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================
// 기본값 함수
// ============================================================

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_max_retries() -> u32 {
    3
}

fn default_lifetime_ms() -> u64 {
    5_000
}

fn default_max_visible() -> usize {
    20
}

fn default_user_id() -> i64 {
    1
}

fn default_location() -> String {
    "台北市".to_string()
}

fn default_occasion() -> String {
    "日常".to_string()
}
