//! 옷장 통계 모델 (`GET /api/stats/wardrobe`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::clothing::ClothingItem;

/// 옷장 집계 통계
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WardrobeStats {
    pub total_items: u32,
    /// 평균 착용 횟수 (소수점 1자리)
    pub average_usage: f64,
    #[serde(default)]
    pub category_distribution: BTreeMap<String, u32>,
    #[serde(default)]
    pub color_distribution: BTreeMap<String, u32>,
    #[serde(default)]
    pub style_distribution: BTreeMap<String, u32>,
    /// 착용 횟수 상위 (최대 5개)
    #[serde(default)]
    pub most_worn_items: Vec<ClothingItem>,
}

/// 분포를 개수 내림차순(동률이면 이름순)으로 정렬
pub fn ranked(distribution: &BTreeMap<String, u32>) -> Vec<(&str, u32)> {
    let mut entries: Vec<(&str, u32)> = distribution
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_orders_by_count_then_name() {
        let mut dist = BTreeMap::new();
        dist.insert("黑色".to_string(), 2);
        dist.insert("白色".to_string(), 5);
        dist.insert("藍色".to_string(), 2);

        let ranked = ranked(&dist);
        assert_eq!(ranked[0], ("白色", 5));
        assert_eq!(ranked[1].1, 2);
        assert!(ranked[1].0 < ranked[2].0);
    }

    #[test]
    fn stats_decode() {
        let json = r#"{
            "total_items": 2, "average_usage": 1.5,
            "category_distribution": {"上衣": 1, "下著": 1},
            "color_distribution": {"白色": 2},
            "style_distribution": {"休閒": 2},
            "most_worn_items": []
        }"#;
        let stats: WardrobeStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_items, 2);
        assert_eq!(stats.category_distribution["上衣"], 1);
    }
}
