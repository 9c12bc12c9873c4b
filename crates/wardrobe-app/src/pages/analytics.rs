//! 통계 페이지.
//!
//! 조회 실패는 로그만 남기고 토스트는 띄우지 않는다.

use tracing::error;
use wardrobe_core::models::stats::WardrobeStats;

use super::PageContext;

pub struct AnalyticsPage {
    ctx: PageContext,
    stats: Option<WardrobeStats>,
}

impl AnalyticsPage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx, stats: None }
    }

    pub fn stats(&self) -> Option<&WardrobeStats> {
        self.stats.as_ref()
    }

    pub async fn load(&mut self) -> Option<&WardrobeStats> {
        match self.ctx.api.wardrobe_stats(self.ctx.user_id).await {
            Ok(stats) => {
                self.stats = Some(stats);
            }
            Err(e) => {
                error!("옷장 통계 조회 실패: {e}");
            }
        }
        self.stats.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::{context, sample_item, MockApi};
    use std::sync::Arc;

    #[tokio::test]
    async fn load_stats() {
        let api = Arc::new(MockApi::default());
        api.items.lock().push(sample_item(1, "白T"));
        let mut page = AnalyticsPage::new(context(api));
        assert_eq!(page.load().await.unwrap().total_items, 1);
    }

    #[tokio::test]
    async fn failure_is_silent() {
        let ctx = context(Arc::new(MockApi::failing()));
        let mut page = AnalyticsPage::new(ctx.clone());
        assert!(page.load().await.is_none());
        assert!(ctx.toasts.is_empty());
    }
}
