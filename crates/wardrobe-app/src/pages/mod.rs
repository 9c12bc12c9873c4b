//! 페이지 컨트롤러.
//!
//! 각 페이지는 백엔드 호출을 감싸 실패를 에러로 올리지 않고
//! 사람이 읽을 수 있는 실패 토스트로 바꾼다.

pub mod analytics;
pub mod favorites;
pub mod recommendations;
pub mod wardrobe;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;
use wardrobe_core::ports::api_client::WardrobeApi;
use wardrobe_toast::NotificationQueue;

pub use analytics::AnalyticsPage;
pub use favorites::FavoritesPage;
pub use recommendations::RecommendationsPage;
pub use wardrobe::WardrobePage;

/// 실패 토스트 제목
pub(crate) const ERROR_TITLE: &str = "錯誤";
/// 성공 토스트 제목
pub(crate) const SUCCESS_TITLE: &str = "成功";

/// 페이지 공통 의존성
#[derive(Clone)]
pub struct PageContext {
    pub api: Arc<dyn WardrobeApi>,
    pub toasts: NotificationQueue,
    pub user_id: i64,
}

impl PageContext {
    pub fn new(api: Arc<dyn WardrobeApi>, toasts: NotificationQueue, user_id: i64) -> Self {
        Self {
            api,
            toasts,
            user_id,
        }
    }
}
