//! HTTP REST API 클라이언트.
//!
//! `WardrobeApi` 포트 구현. 응답 봉투 해제 + 재시도 로직.
//! 재시도는 멱등 요청(GET/DELETE)에만 적용하고, 생성/수정 요청은 한 번만 보낸다.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;
use wardrobe_core::config::AppConfig;
use wardrobe_core::error::CoreError;
use wardrobe_core::models::clothing::{
    ClothingAnalysis, ClothingDraft, ClothingItem, ClothingUpdate, PhotoUpload,
};
use wardrobe_core::models::envelope::{ApiEnvelope, HealthStatus};
use wardrobe_core::models::outfit::{
    FavoriteOutfit, FavoriteRequest, Outfit, RecommendationRequest, RecommendationResult,
};
use wardrobe_core::models::stats::WardrobeStats;
use wardrobe_core::models::weather::WeatherSnapshot;
use wardrobe_core::ports::api_client::WardrobeApi;

/// 기본 재시도 횟수
const DEFAULT_MAX_RETRIES: u32 = 3;

/// 최대 backoff 대기 시간
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// 재시도 가능한 에러인지 판별
fn is_retryable(error: &CoreError) -> bool {
    matches!(
        error,
        CoreError::Network(_) | CoreError::ServiceUnavailable(_) | CoreError::RateLimit { .. }
    )
}

/// 에러 응답 본문에서 사람이 읽을 사유 추출
///
/// 백엔드는 실패도 `{ success: false, error }` 봉투로 내려주므로 가능하면 그 문구를 쓴다.
fn error_text(body: &str) -> String {
    serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
        .ok()
        .and_then(|env| env.error.or(env.message))
        .unwrap_or_else(|| body.trim().to_string())
}

/// REST API 클라이언트: `WardrobeApi` 포트 구현
#[derive(Debug)]
pub struct HttpWardrobeClient {
    client: reqwest::Client,
    base_url: Url,
    max_retries: u32,
}

impl HttpWardrobeClient {
    /// 새 HTTP API 클라이언트 생성
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Network(format!("HTTP 클라이언트 빌드 실패: {}", e)))?;

        let parsed = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| CoreError::Config(format!("잘못된 서버 주소: {base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(CoreError::Config(format!(
                "경로를 붙일 수 없는 서버 주소: {base_url}"
            )));
        }

        Ok(Self {
            client,
            base_url: parsed,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// 설정의 server 섹션으로 생성
    pub fn from_config(config: &AppConfig) -> Result<Self, CoreError> {
        Ok(Self::new(&config.server.base_url, config.request_timeout())?
            .with_max_retries(config.server.max_retries))
    }

    /// 재시도 횟수 설정
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// 정규화된 서버 주소 (끝 `/` 제거)
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// `/api/...` 엔드포인트 URL
    ///
    /// 세그먼트는 퍼센트 인코딩된다 (도시 이름 등 비ASCII 포함).
    fn endpoint(&self, segments: &[&str]) -> Result<Url, CoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CoreError::Config(format!("잘못된 서버 주소: {}", self.base_url)))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    /// `?user_id=` 쿼리가 붙은 엔드포인트
    fn user_endpoint(&self, segments: &[&str], user_id: i64) -> Result<Url, CoreError> {
        let mut url = self.endpoint(segments)?;
        url.query_pairs_mut()
            .append_pair("user_id", &user_id.to_string());
        Ok(url)
    }

    /// 응답 상태 코드 확인 및 에러 매핑
    async fn check_response(
        &self,
        resp: reqwest::Response,
    ) -> Result<reqwest::Response, CoreError> {
        let status = resp.status();

        if status.is_success() {
            return Ok(resp);
        }

        let retry_after = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        let body = resp.text().await.unwrap_or_else(|e| {
            warn!("응답 본문 읽기 실패: {e}");
            String::new()
        });
        let text = error_text(&body);

        match status.as_u16() {
            404 => Err(CoreError::NotFound {
                resource_type: "API".to_string(),
                id: text,
            }),
            429 => Err(CoreError::RateLimit {
                // Retry-After 헤더 없으면 60초
                retry_after_secs: retry_after.unwrap_or(60),
            }),
            503 => Err(CoreError::ServiceUnavailable(text)),
            _ => Err(CoreError::Internal(format!("API 에러 ({status}): {text}"))),
        }
    }

    /// 요청 전송 + 상태 코드 확인
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        what: &str,
    ) -> Result<reqwest::Response, CoreError> {
        let resp = request
            .send()
            .await
            .map_err(|e| CoreError::Network(format!("{what} 요청 실패: {e}")))?;
        self.check_response(resp).await
    }

    async fn read_envelope<T: DeserializeOwned>(
        resp: reqwest::Response,
        what: &str,
    ) -> Result<ApiEnvelope<T>, CoreError> {
        resp.json::<ApiEnvelope<T>>()
            .await
            .map_err(|e| CoreError::Internal(format!("{what} 응답 파싱 실패: {e}")))
    }

    /// GET + 봉투 파싱 (재시도)
    async fn get_envelope<T: DeserializeOwned>(
        &self,
        url: Url,
        what: &str,
    ) -> Result<ApiEnvelope<T>, CoreError> {
        self.execute_with_retry(|| async {
            let resp = self.send(self.client.get(url.clone()), what).await?;
            Self::read_envelope(resp, what).await
        })
        .await
    }

    /// DELETE + 성공 플래그 확인 (재시도)
    async fn delete_ack(&self, url: Url, what: &str) -> Result<Option<String>, CoreError> {
        let envelope: ApiEnvelope<serde_json::Value> = self
            .execute_with_retry(|| async {
                let resp = self.send(self.client.delete(url.clone()), what).await?;
                Self::read_envelope(resp, what).await
            })
            .await?;
        envelope.into_ack()
    }

    /// JSON 본문 요청 (재시도 없음)
    async fn send_json<B, T>(
        &self,
        method: Method,
        url: Url,
        body: &B,
        what: &str,
    ) -> Result<ApiEnvelope<T>, CoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .send(self.client.request(method, url).json(body), what)
            .await?;
        Self::read_envelope(resp, what).await
    }

    /// multipart 요청 (재시도 없음)
    async fn send_multipart<T: DeserializeOwned>(
        &self,
        url: Url,
        form: Form,
        what: &str,
    ) -> Result<ApiEnvelope<T>, CoreError> {
        let resp = self.send(self.client.post(url).multipart(form), what).await?;
        Self::read_envelope(resp, what).await
    }

    /// 재시도가 포함된 요청 실행
    ///
    /// exponential backoff: 1s → 2s → 4s … (최대 30s)
    async fn execute_with_retry<F, Fut, T>(&self, operation: F) -> Result<T, CoreError>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T, CoreError>>,
    {
        let mut last_error = CoreError::Internal("요청 실패".to_string());
        let mut delay = Duration::from_secs(1);

        for attempt in 0..=self.max_retries {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    if !is_retryable(&e) || attempt == self.max_retries {
                        return Err(e);
                    }

                    warn!(
                        "요청 실패 (시도 {}/{}): {e}, {delay:?} 후 재시도",
                        attempt + 1,
                        self.max_retries + 1
                    );

                    // RateLimit의 경우 서버 지정 대기 시간 사용
                    if let CoreError::RateLimit { retry_after_secs } = &e {
                        delay = Duration::from_secs(*retry_after_secs).min(MAX_BACKOFF);
                    }

                    last_error = e;
                    tokio::time::sleep(delay).await;
                    delay = (delay * 2).min(MAX_BACKOFF);
                }
            }
        }

        Err(last_error)
    }
}

/// 사진 multipart 파트
fn photo_part(photo: &PhotoUpload) -> Result<Part, CoreError> {
    Part::bytes(photo.bytes.clone())
        .file_name(photo.file_name.clone())
        .mime_str(&photo.mime())
        .map_err(|e| CoreError::Internal(format!("사진 MIME 설정 실패: {e}")))
}

#[async_trait]
impl WardrobeApi for HttpWardrobeClient {
    async fn health(&self) -> Result<HealthStatus, CoreError> {
        // 연결 판정용이라 재시도하지 않는다
        let url = self.endpoint(&["health"])?;
        let resp = self.send(self.client.get(url), "헬스 체크").await?;
        resp.json::<HealthStatus>()
            .await
            .map_err(|e| CoreError::Internal(format!("헬스 체크 응답 파싱 실패: {e}")))
    }

    async fn list_clothing(&self, user_id: i64) -> Result<Vec<ClothingItem>, CoreError> {
        debug!("衣物 목록 요청: user_id={user_id}");
        let url = self.user_endpoint(&["clothing"], user_id)?;
        let items: Vec<ClothingItem> = self.get_envelope(url, "衣物 목록").await?.into_data()?;
        debug!("衣物 {}건 수신", items.len());
        Ok(items)
    }

    async fn add_clothing(
        &self,
        user_id: i64,
        draft: &ClothingDraft,
        photo: Option<&PhotoUpload>,
    ) -> Result<ClothingItem, CoreError> {
        draft.validate()?;
        debug!("衣物 등록: {} ({})", draft.name, draft.category);

        let mut form = draft
            .form_fields(user_id)
            .into_iter()
            .fold(Form::new(), |form, (key, value)| form.text(key, value));
        if let Some(photo) = photo {
            photo.validate()?;
            form = form.part("photo", photo_part(photo)?);
        }

        let url = self.endpoint(&["clothing"])?;
        self.send_multipart(url, form, "衣物 등록")
            .await?
            .into_data()
    }

    async fn update_clothing(
        &self,
        item_id: i64,
        update: &ClothingUpdate,
    ) -> Result<ClothingItem, CoreError> {
        if update.is_empty() {
            return Err(CoreError::validation("update", "변경할 필드 없음"));
        }
        debug!("衣物 수정: id={item_id}");

        let url = self.endpoint(&["clothing", &item_id.to_string()])?;
        self.send_json(Method::PUT, url, update, "衣物 수정")
            .await?
            .into_data()
    }

    async fn delete_clothing(&self, item_id: i64) -> Result<(), CoreError> {
        debug!("衣物 삭제: id={item_id}");
        let url = self.endpoint(&["clothing", &item_id.to_string()])?;
        self.delete_ack(url, "衣物 삭제").await?;
        Ok(())
    }

    async fn analyze_photo(&self, photo: &PhotoUpload) -> Result<ClothingAnalysis, CoreError> {
        photo.validate()?;
        debug!("사진 분석 요청: {}", photo.file_name);

        let form = Form::new().part("photo", photo_part(photo)?);
        let url = self.endpoint(&["clothing", "analyze"])?;
        self.send_multipart(url, form, "사진 분석")
            .await?
            .into_data()
    }

    async fn weather(&self, city: &str) -> Result<WeatherSnapshot, CoreError> {
        debug!("날씨 조회: {city}");
        let url = self.endpoint(&["weather", city])?;
        self.get_envelope(url, "날씨 조회").await?.into_data()
    }

    async fn generate_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResult, CoreError> {
        debug!(
            "추천 생성: occasion={}, style_level={}",
            request.occasion, request.style_level
        );
        let url = self.endpoint(&["recommendations", "generate"])?;
        let (outfits, message): (Vec<Outfit>, Option<String>) = self
            .send_json(Method::POST, url, request, "추천 생성")
            .await?
            .into_parts()?;
        debug!("추천 {}건 수신", outfits.len());
        Ok(RecommendationResult { outfits, message })
    }

    async fn save_favorite(
        &self,
        request: &FavoriteRequest,
    ) -> Result<FavoriteOutfit, CoreError> {
        debug!("즐겨찾기 저장: outfit={}", request.outfit_data.id);
        let url = self.endpoint(&["outfits", "favorite"])?;
        self.send_json(Method::POST, url, request, "즐겨찾기 저장")
            .await?
            .into_data()
    }

    async fn list_favorites(&self, user_id: i64) -> Result<Vec<FavoriteOutfit>, CoreError> {
        let url = self.user_endpoint(&["outfits", "favorites"], user_id)?;
        self.get_envelope(url, "즐겨찾기 목록").await?.into_data()
    }

    async fn delete_favorite(&self, favorite_id: i64) -> Result<(), CoreError> {
        debug!("즐겨찾기 삭제: id={favorite_id}");
        let url = self.endpoint(&["outfits", "favorites", &favorite_id.to_string()])?;
        self.delete_ack(url, "즐겨찾기 삭제").await?;
        Ok(())
    }

    async fn wardrobe_stats(&self, user_id: i64) -> Result<WardrobeStats, CoreError> {
        let url = self.user_endpoint(&["stats", "wardrobe"], user_id)?;
        self.get_envelope(url, "옷장 통계").await?.into_data()
    }
}
