//! # wardrobe-toast
//!
//! 알림(토스트) 파이프라인.
//! 페이지에서 올라온 성공/실패 메시지를 시한부 큐에 넣고,
//! 스냅샷 채널로 렌더러에 전달하며 수명이 지나면 자동으로 제거한다.
//! 모달을 대신하는 확인 표시는 [`acknowledger`]로 선택적으로 켠다.

pub mod acknowledger;
pub mod presenter;
pub mod queue;

pub use queue::NotificationQueue;
