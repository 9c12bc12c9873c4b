//! 옷장 페이지.
//!
//! 衣物 목록 조회, 사진 AI 분석으로 폼 채우기, 등록/수정/삭제.

use tracing::{debug, error};
use wardrobe_core::models::clothing::{ClothingDraft, ClothingItem, ClothingUpdate, PhotoUpload};

use super::{PageContext, ERROR_TITLE, SUCCESS_TITLE};

/// 옷장 페이지 상태
pub struct WardrobePage {
    ctx: PageContext,
    items: Vec<ClothingItem>,
    draft: ClothingDraft,
    photo: Option<PhotoUpload>,
}

impl WardrobePage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            items: Vec::new(),
            draft: ClothingDraft::default(),
            photo: None,
        }
    }

    /// 마지막으로 불러온 衣物 목록
    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    pub fn draft(&self) -> &ClothingDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ClothingDraft {
        &mut self.draft
    }

    /// 등록/분석에 쓸 사진 선택 (None이면 선택 해제)
    pub fn select_photo(&mut self, photo: Option<PhotoUpload>) {
        self.photo = photo;
    }

    pub fn selected_photo(&self) -> Option<&PhotoUpload> {
        self.photo.as_ref()
    }

    /// 목록 새로고침. 실패하면 이전 목록을 유지한다.
    pub async fn load(&mut self) -> bool {
        match self.ctx.api.list_clothing(self.ctx.user_id).await {
            Ok(items) => {
                debug!("衣物 {}건 로드", items.len());
                self.items = items;
                true
            }
            Err(e) => {
                error!("衣物 목록 조회 실패: {e}");
                self.ctx.toasts.error(ERROR_TITLE, "無法載入衣物資料");
                false
            }
        }
    }

    /// 선택한 사진을 AI로 분석해 폼을 채운다
    pub async fn analyze(&mut self) -> bool {
        let Some(photo) = &self.photo else {
            self.ctx.toasts.error(ERROR_TITLE, "請先選擇圖片");
            return false;
        };

        match self.ctx.api.analyze_photo(photo).await {
            Ok(analysis) => {
                self.draft.apply_analysis(&analysis);
                self.ctx
                    .toasts
                    .info("AI分析完成", "已自動填入分析結果，您可以進行調整");
                true
            }
            Err(e) => {
                error!("AI 분석 실패: {e}");
                self.ctx.toasts.error("AI分析失敗", "請手動填入衣物資訊");
                false
            }
        }
    }

    /// 폼 제출. 성공하면 폼/사진을 비우고 목록을 다시 불러온다.
    pub async fn submit(&mut self) -> Option<ClothingItem> {
        let result = self
            .ctx
            .api
            .add_clothing(self.ctx.user_id, &self.draft, self.photo.as_ref())
            .await;

        match result {
            Ok(item) => {
                self.ctx.toasts.info(SUCCESS_TITLE, "衣物新增成功");
                self.draft.reset();
                self.photo = None;
                self.load().await;
                Some(item)
            }
            Err(e) => {
                error!("衣物 등록 실패: {e}");
                self.ctx.toasts.error(ERROR_TITLE, "新增衣物失敗");
                None
            }
        }
    }

    /// 부분 수정
    pub async fn update(&mut self, item_id: i64, update: &ClothingUpdate) -> Option<ClothingItem> {
        match self.ctx.api.update_clothing(item_id, update).await {
            Ok(item) => {
                self.ctx.toasts.info(SUCCESS_TITLE, "衣物更新成功");
                if let Some(slot) = self.items.iter_mut().find(|i| i.id == item.id) {
                    *slot = item.clone();
                }
                Some(item)
            }
            Err(e) => {
                error!("衣物 수정 실패: id={item_id}: {e}");
                self.ctx.toasts.error(ERROR_TITLE, "更新衣物失敗");
                None
            }
        }
    }

    /// 삭제 후 목록 새로고침
    pub async fn delete(&mut self, item_id: i64) -> bool {
        match self.ctx.api.delete_clothing(item_id).await {
            Ok(()) => {
                self.ctx.toasts.info(SUCCESS_TITLE, "衣物刪除成功");
                self.load().await;
                true
            }
            Err(e) => {
                error!("衣物 삭제 실패: id={item_id}: {e}");
                self.ctx.toasts.error(ERROR_TITLE, "刪除衣物失敗");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::{context, sample_item, toasts, MockApi};
    use std::sync::atomic::Ordering;
    use std::sync::Arc;
    use wardrobe_core::models::clothing::ClothingAnalysis;

    fn photo() -> PhotoUpload {
        PhotoUpload::new("shirt.png", b"PNG".to_vec()).unwrap()
    }

    #[tokio::test]
    async fn load_failure_becomes_destructive_toast() {
        let api = Arc::new(MockApi::failing());
        let ctx = context(api);
        let mut page = WardrobePage::new(ctx.clone());

        assert!(!page.load().await);
        assert!(page.items().is_empty());
        assert_eq!(
            toasts(&ctx),
            vec![("錯誤".to_string(), "無法載入衣物資料".to_string(), true)]
        );
    }

    #[tokio::test]
    async fn load_keeps_previous_items_on_failure() {
        let api = Arc::new(MockApi::default());
        api.items.lock().push(sample_item(1, "白T"));
        let mut page = WardrobePage::new(context(api.clone()));

        assert!(page.load().await);
        api.fail.store(true, Ordering::SeqCst);
        assert!(!page.load().await);
        assert_eq!(page.items().len(), 1);
    }

    #[tokio::test]
    async fn analyze_without_photo_asks_for_one() {
        let api = Arc::new(MockApi::default());
        let ctx = context(api.clone());
        let mut page = WardrobePage::new(ctx.clone());

        assert!(!page.analyze().await);
        assert_eq!(
            toasts(&ctx),
            vec![("錯誤".to_string(), "請先選擇圖片".to_string(), true)]
        );
        // 백엔드는 호출하지 않는다
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn analyze_fills_draft() {
        let api = Arc::new(MockApi::default());
        *api.analysis.lock() = ClothingAnalysis {
            name: Some("牛仔外套".to_string()),
            category: Some("外套".to_string()),
            suitable_seasons: Some(vec!["秋季".to_string()]),
            ..Default::default()
        };
        let ctx = context(api);
        let mut page = WardrobePage::new(ctx.clone());
        page.draft_mut().material = "棉".to_string();
        page.select_photo(Some(photo()));

        assert!(page.analyze().await);
        assert_eq!(page.draft().name, "牛仔外套");
        assert_eq!(page.draft().category, "外套");
        // 분석 결과에 없는 필드는 비워진다
        assert_eq!(page.draft().material, "");
        assert_eq!(page.draft().suitable_seasons, vec!["秋季".to_string()]);

        let shown = toasts(&ctx);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].0, "AI分析完成");
        assert!(!shown[0].2);
    }

    #[tokio::test]
    async fn analyze_failure() {
        let ctx = context(Arc::new(MockApi::failing()));
        let mut page = WardrobePage::new(ctx.clone());
        page.select_photo(Some(photo()));

        assert!(!page.analyze().await);
        assert_eq!(
            toasts(&ctx),
            vec![("AI分析失敗".to_string(), "請手動填入衣物資訊".to_string(), true)]
        );
    }

    #[tokio::test]
    async fn submit_resets_form_and_reloads() {
        let api = Arc::new(MockApi::default());
        let ctx = context(api.clone());
        let mut page = WardrobePage::new(ctx.clone());
        *page.draft_mut() = ClothingDraft::new("白T", "上衣");
        page.select_photo(Some(photo()));

        let item = page.submit().await.unwrap();
        assert_eq!(item.name, "白T");
        assert_eq!(page.draft(), &ClothingDraft::default());
        assert!(page.selected_photo().is_none());
        assert_eq!(page.items().len(), 1);
        assert_eq!(api.calls(), vec!["add_clothing", "list_clothing"]);
        assert_eq!(
            toasts(&ctx),
            vec![("成功".to_string(), "衣物新增成功".to_string(), false)]
        );
    }

    #[tokio::test]
    async fn submit_invalid_draft_is_toast_not_fault() {
        let ctx = context(Arc::new(MockApi::default()));
        let mut page = WardrobePage::new(ctx.clone());
        page.draft_mut().category = "上衣".to_string();

        assert!(page.submit().await.is_none());
        // 실패하면 폼은 그대로
        assert_eq!(page.draft().category, "上衣");
        assert_eq!(
            toasts(&ctx),
            vec![("錯誤".to_string(), "新增衣物失敗".to_string(), true)]
        );
    }

    #[tokio::test]
    async fn update_replaces_loaded_item() {
        let api = Arc::new(MockApi::default());
        api.items.lock().push(sample_item(1, "白T"));
        let ctx = context(api);
        let mut page = WardrobePage::new(ctx.clone());
        page.load().await;

        let update = ClothingUpdate {
            name: Some("黑T".to_string()),
            ..Default::default()
        };
        assert!(page.update(1, &update).await.is_some());
        assert_eq!(page.items()[0].name, "黑T");
        assert_eq!(toasts(&ctx)[0].1, "衣物更新成功");

        assert!(page.update(42, &update).await.is_none());
        assert_eq!(toasts(&ctx)[1].1, "更新衣物失敗");
    }

    #[tokio::test]
    async fn delete_success_and_failure() {
        let api = Arc::new(MockApi::default());
        api.items.lock().push(sample_item(1, "白T"));
        let ctx = context(api.clone());
        let mut page = WardrobePage::new(ctx.clone());

        assert!(page.delete(1).await);
        assert!(page.items().is_empty());

        api.fail.store(true, Ordering::SeqCst);
        assert!(!page.delete(2).await);

        assert_eq!(
            toasts(&ctx),
            vec![
                ("成功".to_string(), "衣物刪除成功".to_string(), false),
                ("錯誤".to_string(), "刪除衣物失敗".to_string(), true),
            ]
        );
    }
}
