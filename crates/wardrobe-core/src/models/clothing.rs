//! 衣物 모델.
//!
//! 백엔드 `/api/clothing` 계열 엔드포인트의 와이어 모델과
//! 衣物 등록 폼 상태(`ClothingDraft`)를 정의한다.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CoreError;

/// 衣物 분류
pub const CATEGORIES: [&str; 5] = ["上衣", "下著", "外套", "鞋子", "配件"];

/// 스타일
pub const STYLES: [&str; 6] = ["正式", "休閒", "運動", "浪漫", "復古", "現代"];

/// 계절 태그
pub const SEASONS: [&str; 4] = ["春季", "夏季", "秋季", "冬季"];

/// 장소/상황 태그
pub const OCCASIONS: [&str; 5] = ["日常", "正式", "運動", "約會", "工作"];

/// 업로드 허용 이미지 확장자
pub const ALLOWED_PHOTO_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// 옷장에 등록된 衣物
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: i64,
    #[serde(default = "default_user_id")]
    pub user_id: i64,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub suitable_seasons: Vec<String>,
    #[serde(default)]
    pub suitable_occasions: Vec<String>,
    /// 서버 상대 경로 (예: "/uploads/abc.png")
    #[serde(default)]
    pub photo_path: Option<String>,
    #[serde(default)]
    pub usage_count: u32,
    /// 서버가 타임존 없이 내려주는 ISO-8601 시각
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

fn default_user_id() -> i64 {
    1
}

/// AI 사진 분석 결과. 모든 필드는 누락될 수 있다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClothingAnalysis {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub suitable_seasons: Option<Vec<String>>,
    #[serde(default)]
    pub suitable_occasions: Option<Vec<String>>,
}

/// 衣物 등록 폼 상태
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClothingDraft {
    pub name: String,
    pub category: String,
    pub style: String,
    pub material: String,
    pub suitable_seasons: Vec<String>,
    pub suitable_occasions: Vec<String>,
}

impl ClothingDraft {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    /// 계절 태그 토글 (없으면 추가, 있으면 제거)
    pub fn toggle_season(&mut self, season: &str) {
        toggle_tag(&mut self.suitable_seasons, season);
    }

    /// 상황 태그 토글 (없으면 추가, 있으면 제거)
    pub fn toggle_occasion(&mut self, occasion: &str) {
        toggle_tag(&mut self.suitable_occasions, occasion);
    }

    /// AI 분석 결과로 폼 전체를 채운다. 누락 필드는 비운다.
    pub fn apply_analysis(&mut self, analysis: &ClothingAnalysis) {
        self.name = analysis.name.clone().unwrap_or_default();
        self.category = analysis.category.clone().unwrap_or_default();
        self.style = analysis.style.clone().unwrap_or_default();
        self.material = analysis.material.clone().unwrap_or_default();
        self.suitable_seasons = analysis.suitable_seasons.clone().unwrap_or_default();
        self.suitable_occasions = analysis.suitable_occasions.clone().unwrap_or_default();
    }

    /// 폼 초기화
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 제출 전 필수 필드 확인
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name", "衣物 이름이 비어 있음"));
        }
        if self.category.trim().is_empty() {
            return Err(CoreError::validation("category", "분류가 비어 있음"));
        }
        Ok(())
    }

    /// multipart 텍스트 필드 목록 (반복 필드는 값마다 한 번씩)
    pub fn form_fields(&self, user_id: i64) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("user_id", user_id.to_string()),
            ("name", self.name.clone()),
            ("category", self.category.clone()),
            ("style", self.style.clone()),
            ("material", self.material.clone()),
        ];
        fields.extend(
            self.suitable_seasons
                .iter()
                .map(|s| ("suitable_seasons", s.clone())),
        );
        fields.extend(
            self.suitable_occasions
                .iter()
                .map(|o| ("suitable_occasions", o.clone())),
        );
        fields
    }
}

fn toggle_tag(tags: &mut Vec<String>, tag: &str) {
    if let Some(pos) = tags.iter().position(|t| t == tag) {
        tags.remove(pos);
    } else {
        tags.push(tag.to_string());
    }
}

/// 衣物 부분 수정 요청 (PUT). 비어 있는 필드는 전송하지 않는다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClothingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suitable_seasons: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suitable_occasions: Option<Vec<String>>,
}

impl ClothingUpdate {
    /// 변경할 필드가 하나도 없는지
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// 업로드할 사진
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    /// 메모리 버퍼로 생성 (확장자 검증 포함)
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, CoreError> {
        let photo = Self {
            file_name: file_name.into(),
            bytes,
        };
        photo.validate()?;
        Ok(photo)
    }

    /// 파일에서 읽어 생성
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| CoreError::validation("photo", "파일 이름을 읽을 수 없음"))?
            .to_string();
        let bytes = std::fs::read(path)?;
        Self::new(file_name, bytes)
    }

    /// 소문자 확장자
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }

    /// 확장자 허용 목록 확인
    pub fn validate(&self) -> Result<(), CoreError> {
        match self.extension() {
            Some(ext) if ALLOWED_PHOTO_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            _ => Err(CoreError::validation(
                "photo",
                format!("지원하지 않는 이미지 파일: {}", self.file_name),
            )),
        }
    }

    /// MIME 타입 추정
    pub fn mime(&self) -> String {
        mime_guess::from_path(&self.file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }
}
