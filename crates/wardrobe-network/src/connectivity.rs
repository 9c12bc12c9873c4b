//! 백엔드 연결 판정.
//!
//! 시작 시 헬스 체크 한 번으로 UI 전체를 띄울지 결정한다.
//! 실패하면 페이지 명령을 막고 연결 실패 화면을 보여준다.

use tokio::sync::watch;
use tracing::{info, warn};
use wardrobe_core::ports::api_client::WardrobeApi;

/// 백엔드 연결 상태
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendStatus {
    /// 헬스 체크 진행 중
    Checking,
    /// 연결됨
    Connected,
    /// 연결 실패 (사유 포함)
    Unreachable(String),
}

impl BackendStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, BackendStatus::Connected)
    }
}

impl std::fmt::Display for BackendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendStatus::Checking => write!(f, "Checking"),
            BackendStatus::Connected => write!(f, "Connected"),
            BackendStatus::Unreachable(reason) => write!(f, "Unreachable: {reason}"),
        }
    }
}

/// 연결 게이트
///
/// 상태는 watch 채널로 공개되어 렌더러가 구독할 수 있다.
pub struct ConnectionGate {
    status_tx: watch::Sender<BackendStatus>,
    status_rx: watch::Receiver<BackendStatus>,
}

impl ConnectionGate {
    pub fn new() -> Self {
        let (status_tx, status_rx) = watch::channel(BackendStatus::Checking);
        Self {
            status_tx,
            status_rx,
        }
    }

    /// 헬스 체크 실행 후 상태 갱신
    ///
    /// 에러와 `status != healthy` 응답 모두 연결 실패로 본다.
    pub async fn check(&self, api: &dyn WardrobeApi) -> BackendStatus {
        self.status_tx.send_replace(BackendStatus::Checking);

        let status = match api.health().await {
            Ok(health) if health.is_healthy() => {
                info!("백엔드 연결됨: {}", health.message);
                BackendStatus::Connected
            }
            Ok(health) => {
                warn!("백엔드 상태 비정상: {}", health.status);
                BackendStatus::Unreachable(format!("status={}", health.status))
            }
            Err(e) => {
                warn!("백엔드 연결 실패: {e}");
                BackendStatus::Unreachable(e.to_string())
            }
        };

        self.status_tx.send_replace(status.clone());
        status
    }

    /// 현재 연결 상태
    pub fn status(&self) -> BackendStatus {
        self.status_rx.borrow().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.status_rx.borrow().is_connected()
    }

    /// 상태 변경 수신기 생성
    pub fn subscribe(&self) -> watch::Receiver<BackendStatus> {
        self.status_rx.clone()
    }
}

impl Default for ConnectionGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::HttpWardrobeClient;
    use std::time::Duration;

    #[test]
    fn starts_checking() {
        let gate = ConnectionGate::new();
        assert_eq!(gate.status(), BackendStatus::Checking);
        assert!(!gate.is_connected());
    }

    #[tokio::test]
    async fn healthy_backend_connects() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/health")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status": "healthy", "message": "AI Wardrobe Backend is running"}"#)
            .create_async()
            .await;

        let client = HttpWardrobeClient::new(&server.url(), Duration::from_secs(5)).unwrap();
        let gate = ConnectionGate::new();
        let mut rx = gate.subscribe();

        let status = gate.check(&client).await;
        assert_eq!(status, BackendStatus::Connected);
        assert!(gate.is_connected());
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), BackendStatus::Connected);
    }

    #[tokio::test]
    async fn unhealthy_status_is_unreachable() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/health")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status": "degraded"}"#)
            .create_async()
            .await;

        let client = HttpWardrobeClient::new(&server.url(), Duration::from_secs(5)).unwrap();
        let gate = ConnectionGate::new();
        let status = gate.check(&client).await;
        assert_eq!(status, BackendStatus::Unreachable("status=degraded".to_string()));
    }

    #[tokio::test]
    async fn server_error_is_unreachable() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/health")
            .with_status(500)
            .create_async()
            .await;

        let client = HttpWardrobeClient::new(&server.url(), Duration::from_secs(5)).unwrap();
        let gate = ConnectionGate::new();
        let status = gate.check(&client).await;
        assert!(matches!(status, BackendStatus::Unreachable(_)));
        assert!(!gate.is_connected());
    }

    #[test]
    fn display() {
        assert_eq!(BackendStatus::Connected.to_string(), "Connected");
        assert_eq!(
            BackendStatus::Unreachable("timeout".into()).to_string(),
            "Unreachable: timeout"
        );
    }
}
