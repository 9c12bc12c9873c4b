//! 확인 표시 어댑터.
//!
//! `Acknowledger` 포트 구현. 원래 모달 경고창을 대신하는 디버그용 출력.

use parking_lot::Mutex;
use std::io::Write;
use tracing::warn;
use wardrobe_core::models::notification::Notification;
use wardrobe_core::ports::acknowledger::Acknowledger;

/// 실패 알림 앞에 붙는 접두사
const DESTRUCTIVE_PREFIX: &str = "錯誤: ";

/// 확인 표시 문구 (제목 + 줄바꿈 + 설명)
pub fn acknowledgment_text(notification: &Notification) -> String {
    let prefix = if notification.severity.is_destructive() {
        DESTRUCTIVE_PREFIX
    } else {
        ""
    };
    format!("{prefix}{}\n{}", notification.title, notification.body())
}

/// 콘솔 확인 표시: 기본은 stderr
///
/// 입력을 기다리지 않으므로 호출자를 막지 않는다.
pub struct ConsoleAcknowledger<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleAcknowledger<std::io::Stderr> {
    /// stderr로 출력하는 어댑터 생성
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> ConsoleAcknowledger<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// 출력 대상 회수 (테스트용)
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> Acknowledger for ConsoleAcknowledger<W> {
    fn acknowledge(&self, notification: &Notification) {
        let text = acknowledgment_text(notification);
        let mut out = self.out.lock();
        if let Err(e) = writeln!(out, "{text}").and_then(|_| out.flush()) {
            warn!("확인 표시 출력 실패: {e}");
        }
    }
}
