//! # wardrobe-app
//!
//! 옷장 클라이언트 앱 계층.
//! 페이지 컨트롤러는 백엔드 호출 실패를 토스트로 낮춰 보고하고,
//! 렌더러는 알림 큐 스냅샷을 터미널에 그린다.

pub mod pages;
pub mod renderer;
pub mod view;

pub use pages::PageContext;
