//! 알림 확인 표시 포트.
//!
//! 알림 큐가 새 알림을 만들 때 즉시 한 번 보여주는 동기 채널.
//! 기본 렌더링은 큐 스냅샷 구독으로 하고, 이 포트는 명시적으로 켤 때만 쓴다.
//!
//! 구현: `wardrobe-toast` crate (콘솔 출력, 기록용 테스트 더블)

use crate::models::notification::Notification;

/// 알림 확인 표시 인터페이스
///
/// 큐 잠금 밖에서 호출되며 실패를 돌려주지 않는다 (알림 생성은 실패하지 않음).
pub trait Acknowledger: Send + Sync {
    /// 알림 하나를 즉시 표시
    fn acknowledge(&self, notification: &Notification);
}
