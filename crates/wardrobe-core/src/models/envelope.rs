//! 백엔드 응답 봉투.
//!
//! 모든 엔드포인트는 `{ success, data?, message?, error? }` 형태로 응답한다.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// 공통 응답 봉투
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// 성공 플래그 (누락 시 실패로 간주)
    #[serde(default)]
    pub success: bool,
    /// 누락 시 None (serde Option 기본 동작)
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// 실패 사유 텍스트
    fn failure_reason(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "success 플래그 없음".to_string())
    }

    /// 성공 여부만 확인 (데이터 없는 응답용)
    pub fn into_ack(self) -> Result<Option<String>, CoreError> {
        if self.success {
            Ok(self.message)
        } else {
            Err(CoreError::Backend(self.failure_reason()))
        }
    }

    /// 데이터와 메시지를 함께 꺼낸다. 성공인데 데이터가 없으면 에러.
    pub fn into_parts(self) -> Result<(T, Option<String>), CoreError> {
        if !self.success {
            return Err(CoreError::Backend(self.failure_reason()));
        }
        match self.data {
            Some(data) => Ok((data, self.message)),
            None => Err(CoreError::Backend("응답에 data 필드 없음".to_string())),
        }
    }

    /// 데이터만 꺼낸다
    pub fn into_data(self) -> Result<T, CoreError> {
        self.into_parts().map(|(data, _)| data)
    }
}

/// `GET /api/health` 응답 (봉투 없이 내려온다)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}
