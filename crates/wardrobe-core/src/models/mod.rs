//! 옷장 도메인 모델.
//!
//! 백엔드와 주고받는 데이터 구조체와 클라이언트 내부 알림 모델을 정의한다.
//! 와이어 모델은 모두 `serde` Serialize/Deserialize를 구현한다.

pub mod clothing;
pub mod envelope;
pub mod notification;
pub mod outfit;
pub mod stats;
pub mod weather;
