//! 시한부 알림 큐.
//!
//! 삽입 순서를 유지하는 알림 목록. 알림마다 독립된 만료 타이머를 가지며
//! 변경될 때마다 새 불변 스냅샷(`Arc<Vec<Notification>>`)을 `watch` 채널로 발행한다.
//! 최대 길이를 넘으면 가장 오래된 알림부터 제거한다.

use chrono::Utc;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tracing::debug;
use wardrobe_core::config::NotificationConfig;
use wardrobe_core::error::CoreError;
use wardrobe_core::models::notification::{Notification, NotificationId, Severity};
use wardrobe_core::ports::acknowledger::Acknowledger;

/// 큐 스냅샷 (렌더러가 통째로 교체해 그린다)
pub type Snapshot = Arc<Vec<Notification>>;

/// 알림이 큐에서 빠진 이유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Removal {
    Expired,
    Dismissed,
}

#[derive(Debug, Default)]
struct QueueState {
    /// 마지막으로 발급한 ID
    last_id: u64,
    /// 생성 순 알림 목록
    entries: Vec<Notification>,
    /// 대기 중인 만료 타이머
    timers: HashMap<NotificationId, AbortHandle>,
}

struct Inner {
    state: Mutex<QueueState>,
    snapshot_tx: watch::Sender<Snapshot>,
    runtime: Handle,
    lifetime: Duration,
    max_visible: usize,
    acknowledger: Option<Arc<dyn Acknowledger>>,
}

impl Inner {
    fn publish(&self, state: &QueueState) {
        self.snapshot_tx.send_replace(Arc::new(state.entries.clone()));
    }

    fn remove(&self, id: NotificationId, reason: Removal) -> bool {
        let mut state = self.state.lock();
        let Some(pos) = state.entries.iter().position(|n| n.id == id) else {
            return false;
        };
        state.entries.remove(pos);
        if let Some(timer) = state.timers.remove(&id) {
            timer.abort();
        }
        self.publish(&state);
        debug!("알림 제거 ({reason:?}): {id}, 남은 {}개", state.entries.len());
        true
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        for (_, timer) in self.state.get_mut().timers.drain() {
            timer.abort();
        }
    }
}

/// 시한부 알림 큐
///
/// 복제해도 같은 큐를 가리킨다. 마지막 복제본이 사라지면
/// 대기 중인 만료 타이머도 모두 취소된다.
#[derive(Clone)]
pub struct NotificationQueue {
    inner: Arc<Inner>,
}

impl NotificationQueue {
    /// 새 큐 생성
    ///
    /// 만료 타이머를 돌릴 tokio 런타임 안에서 호출해야 한다.
    /// 생성 후에는 런타임 밖 스레드에서도 `notify`할 수 있다.
    pub fn new(config: &NotificationConfig) -> Result<Self, CoreError> {
        let runtime = Handle::try_current().map_err(|e| {
            CoreError::Internal(format!("tokio 런타임 밖에서 알림 큐 생성: {e}"))
        })?;
        if config.max_visible == 0 {
            return Err(CoreError::Config(
                "notification.max_visible은 0보다 커야 함".to_string(),
            ));
        }

        let (snapshot_tx, _) = watch::channel(Arc::new(Vec::new()));
        Ok(Self {
            inner: Arc::new(Inner {
                state: Mutex::new(QueueState::default()),
                snapshot_tx,
                runtime,
                lifetime: config.lifetime(),
                max_visible: config.max_visible,
                acknowledger: None,
            }),
        })
    }

    /// 확인 표시 채널 연결
    ///
    /// 복제되거나 알림을 받기 전, 생성 직후의 큐에만 연결할 수 있다.
    /// 이미 공유된 큐면 `CoreError::Config`를 돌려준다.
    pub fn with_acknowledger(
        mut self,
        acknowledger: Arc<dyn Acknowledger>,
    ) -> Result<Self, CoreError> {
        match Arc::get_mut(&mut self.inner) {
            Some(inner) => {
                inner.acknowledger = Some(acknowledger);
                Ok(self)
            }
            None => Err(CoreError::Config(
                "이미 공유된 알림 큐에는 확인 표시를 연결할 수 없음".to_string(),
            )),
        }
    }

    /// 알림 추가
    ///
    /// 새 ID를 발급해 큐 끝에 붙이고 수명 뒤 자동 제거를 예약한다.
    /// 실패하지 않으며 I/O도 하지 않는다.
    pub fn notify(
        &self,
        title: impl Into<String>,
        description: Option<String>,
        severity: Severity,
    ) -> NotificationId {
        let notification = {
            let mut state = self.inner.state.lock();
            state.last_id += 1;
            let id = NotificationId(state.last_id);
            let notification = Notification {
                id,
                title: title.into(),
                description,
                severity,
                created_at: Utc::now(),
            };
            state.entries.push(notification.clone());

            while state.entries.len() > self.inner.max_visible {
                let oldest = state.entries.remove(0);
                if let Some(timer) = state.timers.remove(&oldest.id) {
                    timer.abort();
                }
                debug!("알림 큐 가득 참, 가장 오래된 알림 제거: {}", oldest.id);
            }

            let timer = self.schedule_expiry(id);
            state.timers.insert(id, timer);
            self.inner.publish(&state);
            notification
        };

        debug!(
            "알림 추가: {} [{}] {}",
            notification.id, notification.severity, notification.title
        );

        if let Some(acknowledger) = &self.inner.acknowledger {
            acknowledger.acknowledge(&notification);
        }

        notification.id
    }

    /// 일반 알림
    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) -> NotificationId {
        self.notify(title, Some(description.into()), Severity::Default)
    }

    /// 실패 알림
    pub fn error(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> NotificationId {
        self.notify(title, Some(description.into()), Severity::Destructive)
    }

    /// 만료 처리. 이미 제거된 ID면 아무것도 하지 않고 false.
    pub fn expire(&self, id: NotificationId) -> bool {
        self.inner.remove(id, Removal::Expired)
    }

    /// 수명 전에 즉시 닫기. 대기 중인 타이머를 취소한다.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.inner.remove(id, Removal::Dismissed)
    }

    /// 모든 알림 제거 및 타이머 취소
    pub fn clear(&self) {
        let mut state = self.inner.state.lock();
        for (_, timer) in state.timers.drain() {
            timer.abort();
        }
        state.entries.clear();
        self.inner.publish(&state);
    }

    /// 현재 스냅샷
    pub fn snapshot(&self) -> Snapshot {
        self.inner.snapshot_tx.borrow().clone()
    }

    /// 스냅샷 변경 수신기 생성
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.inner.snapshot_tx.subscribe()
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.inner.state.lock().entries.iter().any(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.inner.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.state.lock().entries.is_empty()
    }

    /// 알림 수명
    pub fn lifetime(&self) -> Duration {
        self.inner.lifetime
    }

    /// 대기 중인 만료 타이머 수
    pub fn pending_timers(&self) -> usize {
        self.inner.state.lock().timers.len()
    }

    fn schedule_expiry(&self, id: NotificationId) -> AbortHandle {
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        let lifetime = self.inner.lifetime;
        self.inner
            .runtime
            .spawn(async move {
                tokio::time::sleep(lifetime).await;
                // 큐가 이미 사라졌으면 할 일 없음
                if let Some(inner) = weak.upgrade() {
                    inner.remove(id, Removal::Expired);
                }
            })
            .abort_handle()
    }
}

impl std::fmt::Debug for NotificationQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationQueue")
            .field("len", &self.len())
            .field("lifetime", &self.inner.lifetime)
            .field("max_visible", &self.inner.max_visible)
            .finish()
    }
}
