//! 알림(토스트) 모델.
//!
//! 사용자에게 잠시 표시되는 상태 메시지. 백엔드와 주고받지 않는 순수 클라이언트 모델이다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// 알림 식별자 (생성 순 단조 증가 카운터)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast#{}", self.0)
    }
}

/// 알림 심각도. 닫힌 집합 {default, destructive}.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// 일반 안내
    #[default]
    Default,
    /// 실패/오류 강조
    Destructive,
}

impl Severity {
    pub fn is_destructive(self) -> bool {
        matches!(self, Severity::Destructive)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Default => "default",
            Severity::Destructive => "destructive",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    /// 알 수 없는 값은 기본값으로 바꾸지 않고 즉시 거부한다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Severity::Default),
            "destructive" => Ok(Severity::Destructive),
            other => Err(CoreError::validation(
                "severity",
                format!("허용되지 않는 값 '{other}' (default | destructive)"),
            )),
        }
    }
}

/// 사용자에게 표시할 알림 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// 제거 조회용 식별자
    pub id: NotificationId,
    /// 짧은 요약
    pub title: String,
    /// 상세 설명 (선택)
    pub description: Option<String>,
    /// 심각도
    pub severity: Severity,
    /// 생성 시각
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// 표시용 본문 (설명이 없으면 빈 문자열)
    pub fn body(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
