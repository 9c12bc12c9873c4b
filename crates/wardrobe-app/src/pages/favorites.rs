//! 즐겨찾기 페이지.

use tracing::error;
use wardrobe_core::models::outfit::FavoriteOutfit;

use super::{PageContext, ERROR_TITLE, SUCCESS_TITLE};

pub struct FavoritesPage {
    ctx: PageContext,
    favorites: Vec<FavoriteOutfit>,
}

impl FavoritesPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            favorites: Vec::new(),
        }
    }

    /// 최신순 즐겨찾기
    pub fn favorites(&self) -> &[FavoriteOutfit] {
        &self.favorites
    }

    pub async fn load(&mut self) -> bool {
        match self.ctx.api.list_favorites(self.ctx.user_id).await {
            Ok(favorites) => {
                self.favorites = favorites;
                true
            }
            Err(e) => {
                error!("즐겨찾기 목록 조회 실패: {e}");
                self.ctx.toasts.error(ERROR_TITLE, "無法載入收藏列表");
                false
            }
        }
    }

    /// 삭제 후 목록 새로고침
    pub async fn delete(&mut self, favorite_id: i64) -> bool {
        match self.ctx.api.delete_favorite(favorite_id).await {
            Ok(()) => {
                self.ctx.toasts.info(SUCCESS_TITLE, "收藏刪除成功");
                self.load().await;
                true
            }
            Err(e) => {
                error!("즐겨찾기 삭제 실패: id={favorite_id}: {e}");
                self.ctx.toasts.error(ERROR_TITLE, "刪除收藏失敗");
                false
            }
        }
    }
}
