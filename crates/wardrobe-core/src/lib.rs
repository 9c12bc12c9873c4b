//! # wardrobe-core
//!
//! 옷장 클라이언트 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] 도메인/와이어 데이터 구조체 (serde Serialize/Deserialize)
//! - [`ports`] Hexagonal Architecture 포트 인터페이스 (async_trait)
//! - [`error`] 핵심 에러 타입 (thiserror)
//! - [`config`] 애플리케이션 설정 구조체
//! - [`config_manager`] 설정 파일 관리 (로드/저장)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;

#[cfg(test)]
mod tests {
    use crate::models::notification::Severity;

    #[test]
    fn config_defaults() {
        let config = crate::config::AppConfig::default_config();
        assert_eq!(config.server.base_url, "http://localhost:5000");
        assert_eq!(config.server.request_timeout_ms, 30_000);
        assert_eq!(config.notification.lifetime_ms, 5_000);
        assert_eq!(config.notification.max_visible, 20);
        assert!(!config.notification.acknowledge);
        assert_eq!(config.profile.user_id, 1);
        assert_eq!(config.profile.location, "台北市");
    }

    #[test]
    fn severity_default_is_not_destructive() {
        assert_eq!(Severity::default(), Severity::Default);
        assert!(!Severity::default().is_destructive());
    }
}
