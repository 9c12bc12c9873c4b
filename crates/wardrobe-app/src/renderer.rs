//! 터미널 토스트 렌더러.
//!
//! 알림 큐의 스냅샷 채널을 구독해 새로 뜬 토스트를 한 줄씩 출력한다.
//! 사라진 토스트는 로그로만 남긴다.

use std::io::Write;
use std::sync::Arc;
use tokio::sync::{oneshot, watch};
use tracing::{debug, warn};
use wardrobe_core::models::notification::Notification;
use wardrobe_toast::presenter::{diff, present, ToastView};
use wardrobe_toast::queue::Snapshot;

/// 토스트 한 줄 형식
pub fn toast_line(view: &ToastView) -> String {
    if view.body.is_empty() {
        format!("[{}] {}", view.severity_label, view.title)
    } else {
        format!("[{}] {}: {}", view.severity_label, view.title, view.body)
    }
}

/// 두 스냅샷 사이에 새로 출력할 줄
pub fn render_changes(previous: &[Notification], current: &[Notification]) -> Vec<String> {
    let (added, removed) = diff(previous, current);
    for id in removed {
        debug!("토스트 사라짐: {id}");
    }
    added
        .into_iter()
        .map(|notification| toast_line(&present(notification)))
        .collect()
}

/// 스냅샷 구독 렌더러
pub struct ToastRenderer<W: Write> {
    rx: watch::Receiver<Snapshot>,
    shown: Snapshot,
    out: W,
}

impl<W: Write> ToastRenderer<W> {
    pub fn new(rx: watch::Receiver<Snapshot>, out: W) -> Self {
        Self {
            rx,
            shown: Arc::new(Vec::new()),
            out,
        }
    }

    /// 최신 스냅샷을 반영해 새 토스트 출력
    pub fn render_latest(&mut self) {
        let current = self.rx.borrow_and_update().clone();
        for line in render_changes(&self.shown, &current) {
            if let Err(e) = writeln!(self.out, "{line}") {
                warn!("토스트 출력 실패: {e}");
            }
        }
        if let Err(e) = self.out.flush() {
            warn!("토스트 출력 flush 실패: {e}");
        }
        self.shown = current;
    }

    /// 종료 신호나 큐 소멸까지 스냅샷 변경을 그린다.
    ///
    /// 종료 신호를 받으면 밀린 변경을 한 번 더 그리고 출력 대상을 돌려준다.
    pub async fn run(mut self, mut shutdown: oneshot::Receiver<()>) -> W {
        loop {
            tokio::select! {
                changed = self.rx.changed() => {
                    if changed.is_err() {
                        debug!("알림 큐 종료, 렌더러 중지");
                        break;
                    }
                    self.render_latest();
                }
                _ = &mut shutdown => {
                    self.render_latest();
                    break;
                }
            }
        }
        self.out
    }
}
