//! 페이지 데이터의 터미널 표시 형식.

use wardrobe_core::models::clothing::ClothingItem;
use wardrobe_core::models::outfit::{FavoriteOutfit, Outfit};
use wardrobe_core::models::stats::{ranked, WardrobeStats};
use wardrobe_core::models::weather::WeatherSnapshot;

/// 누락 필드 표시
const UNKNOWN: &str = "-";

/// 衣物 한 줄 요약
pub fn item_line(item: &ClothingItem) -> String {
    let mut line = format!(
        "#{:<4} {} [{}] {}/{}/{}",
        item.id,
        item.name,
        item.category,
        item.primary_color.as_deref().unwrap_or(UNKNOWN),
        item.style.as_deref().unwrap_or(UNKNOWN),
        item.material.as_deref().unwrap_or(UNKNOWN),
    );
    let tags: Vec<&str> = item
        .suitable_seasons
        .iter()
        .chain(&item.suitable_occasions)
        .map(String::as_str)
        .collect();
    if !tags.is_empty() {
        line.push_str(&format!(" ({})", tags.join(", ")));
    }
    line.push_str(&format!(" 已穿 {} 次", item.usage_count));
    line
}

/// 추천 穿搭 블록 (번호는 1부터)
pub fn outfit_block(index: usize, outfit: &Outfit) -> String {
    let mut lines = vec![format!(
        "{}. {} ({:.1} 分)",
        index + 1,
        outfit.id,
        outfit.score
    )];
    lines.extend(outfit.items.iter().map(|item| format!("   - {}", item_line(item))));
    if !outfit.explanation.is_empty() {
        lines.push(String::new());
        lines.extend(outfit.explanation.lines().map(|l| format!("   {l}")));
    }
    lines.join("\n")
}

/// 즐겨찾기 한 줄 요약
pub fn favorite_line(favorite: &FavoriteOutfit) -> String {
    let saved_at = favorite
        .created_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());
    let detail = match favorite.outfit() {
        Ok(outfit) => {
            let names: Vec<&str> = outfit.items.iter().map(|i| i.name.as_str()).collect();
            format!("{} ({})", outfit.id, names.join(" + "))
        }
        Err(_) => "(無法解析的穿搭資料)".to_string(),
    };
    let score = favorite
        .score
        .map(|s| format!("{s:.1} 分"))
        .unwrap_or_else(|| UNKNOWN.to_string());
    format!("#{:<4} {detail} {score} @ {saved_at}", favorite.id)
}

/// 날씨 한 줄
pub fn weather_line(weather: &WeatherSnapshot) -> String {
    weather.summary()
}

/// 통계 블록 (분포는 개수 내림차순)
pub fn stats_block(stats: &WardrobeStats) -> String {
    let mut lines = vec![
        format!("衣物總數: {}", stats.total_items),
        format!("平均穿著: {:.1} 次", stats.average_usage),
    ];

    for (title, distribution) in [
        ("類別分布", &stats.category_distribution),
        ("顏色分布", &stats.color_distribution),
        ("風格分布", &stats.style_distribution),
    ] {
        lines.push(format!("{title}:"));
        lines.extend(
            ranked(distribution)
                .into_iter()
                .map(|(name, count)| format!("  {name:<6} {count}")),
        );
    }

    if !stats.most_worn_items.is_empty() {
        lines.push("最常穿著:".to_string());
        lines.extend(
            stats
                .most_worn_items
                .iter()
                .map(|item| format!("  {}", item_line(item))),
        );
    }
    lines.join("\n")
}
