//! 토스트 프레젠터.
//!
//! Notification → 렌더러 표시용 데이터 변환, 스냅샷 간 변경분 계산.

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use wardrobe_core::models::notification::{Notification, NotificationId, Severity};

/// 렌더러 표시용 토스트 데이터
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub id: NotificationId,
    pub title: String,
    /// 설명 (없으면 빈 문자열)
    pub body: String,
    /// 심각도 라벨
    pub severity_label: String,
    /// 강조 색상 (#RRGGBB)
    pub accent_color: String,
    /// 시간 텍스트 (상대)
    pub time_text: String,
}

/// Notification → ToastView 변환
pub fn present(notification: &Notification) -> ToastView {
    present_at(notification, Utc::now())
}

/// 여러 알림 일괄 변환
pub fn present_all(notifications: &[Notification]) -> Vec<ToastView> {
    let now = Utc::now();
    notifications.iter().map(|n| present_at(n, now)).collect()
}

fn present_at(notification: &Notification, now: DateTime<Utc>) -> ToastView {
    ToastView {
        id: notification.id,
        title: notification.title.clone(),
        body: notification.body().to_string(),
        severity_label: severity_to_label(notification.severity),
        accent_color: severity_to_color(notification.severity),
        time_text: format_relative_time(notification.created_at, now),
    }
}

/// 두 스냅샷 사이에 새로 생긴 알림과 사라진 ID
///
/// 렌더러는 스냅샷을 통째로 교체하지만 애니메이션/로그용으로 변경분이 필요하다.
pub fn diff<'a>(
    previous: &[Notification],
    current: &'a [Notification],
) -> (Vec<&'a Notification>, Vec<NotificationId>) {
    let before: HashSet<NotificationId> = previous.iter().map(|n| n.id).collect();
    let after: HashSet<NotificationId> = current.iter().map(|n| n.id).collect();

    let added = current.iter().filter(|n| !before.contains(&n.id)).collect();
    let removed = previous
        .iter()
        .map(|n| n.id)
        .filter(|id| !after.contains(id))
        .collect();
    (added, removed)
}

fn severity_to_label(severity: Severity) -> String {
    match severity {
        Severity::Default => "通知".to_string(),
        Severity::Destructive => "錯誤".to_string(),
    }
}

fn severity_to_color(severity: Severity) -> String {
    match severity {
        Severity::Default => "#3B82F6".to_string(),     // blue-500
        Severity::Destructive => "#EF4444".to_string(), // red-500
    }
}

fn format_relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now - created_at;
    if diff.num_seconds() < 1 {
        "剛剛".to_string()
    } else {
        format!("{}秒前", diff.num_seconds())
    }
}
