//! 설정 및 DI 와이어링 통합 테스트.
//!
//! AppConfig → 어댑터/알림 큐 생성, 확인 표시 연결 검증.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use wardrobe_core::config::AppConfig;
use wardrobe_core::config_manager::ConfigManager;
use wardrobe_core::models::notification::{Notification, Severity};
use wardrobe_core::ports::acknowledger::Acknowledger;
use wardrobe_network::http_client::HttpWardrobeClient;
use wardrobe_toast::acknowledger::acknowledgment_text;
use wardrobe_toast::NotificationQueue;

/// 확인 표시 기록용 대역
#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<(Severity, String)>>,
}

impl Acknowledger for Recorder {
    fn acknowledge(&self, notification: &Notification) {
        self.seen
            .lock()
            .push((notification.severity, acknowledgment_text(notification)));
    }
}

#[test]
fn config_defaults_are_valid() {
    let config = AppConfig::default_config();
    assert!(config.validate().is_ok());
    assert!(config.server.request_timeout_ms > 0);
    assert_eq!(config.notification.lifetime(), Duration::from_millis(5_000));
    assert!(!config.notification.acknowledge);
}

#[tokio::test]
async fn adapters_instantiate_from_saved_config() {
    let temp_dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(temp_dir.path().join("config.json")).unwrap();
    manager
        .update_with(|c| {
            c.server.base_url = "http://192.168.0.10:5000".to_string();
            c.notification.lifetime_ms = 1_500;
        })
        .unwrap();

    let config = manager.get();
    let client = HttpWardrobeClient::from_config(&config).unwrap();
    assert_eq!(client.base_url(), "http://192.168.0.10:5000");

    let queue = NotificationQueue::new(&config.notification).unwrap();
    assert_eq!(queue.lifetime(), Duration::from_millis(1_500));
}

#[tokio::test(start_paused = true)]
async fn acknowledgment_follows_severity() {
    let recorder = Arc::new(Recorder::default());
    let queue = NotificationQueue::new(&AppConfig::default_config().notification)
        .unwrap()
        .with_acknowledger(recorder.clone())
        .unwrap();

    queue.info("成功", "衣物新增成功");
    queue.error("錯誤", "刪除衣物失敗");

    {
        let seen = recorder.seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], (Severity::Default, "成功\n衣物新增成功".to_string()));
        assert_eq!(
            seen[1],
            (Severity::Destructive, "錯誤: 錯誤\n刪除衣物失敗".to_string())
        );
    }

    tokio::time::sleep(Duration::from_millis(5_001)).await;
    assert!(queue.is_empty());
    // 만료는 확인 표시를 다시 부르지 않는다
    assert_eq!(recorder.seen.lock().len(), 2);
}
