//! # wardrobe
//!
//! 옷장 클라이언트 바이너리 진입점.
//! 설정 로드, 백엔드 연결 판정, DI 와이어링 후 한 번의 페이지 명령을 실행한다.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use wardrobe_app::pages::{
    AnalyticsPage, FavoritesPage, PageContext, RecommendationsPage, WardrobePage,
};
use wardrobe_app::renderer::ToastRenderer;
use wardrobe_app::view;
use wardrobe_core::config::AppConfig;
use wardrobe_core::config_manager::ConfigManager;
use wardrobe_core::models::clothing::{ClothingUpdate, PhotoUpload};
use wardrobe_core::models::outfit::StyleLevel;
use wardrobe_core::ports::api_client::WardrobeApi;
use wardrobe_network::connectivity::ConnectionGate;
use wardrobe_network::http_client::HttpWardrobeClient;
use wardrobe_toast::acknowledger::ConsoleAcknowledger;
use wardrobe_toast::NotificationQueue;

/// AI 옷장 클라이언트
///
/// 衣物 관리, 날씨 기반 穿搭 추천, 즐겨찾기, 통계
#[derive(Parser, Debug)]
#[command(name = "wardrobe")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 서버 URL 지정 (기본: 설정 파일 또는 http://localhost:5000)
    #[arg(long, short = 's', global = true)]
    server: Option<String>,

    /// 설정 파일 경로 (기본: 플랫폼별 설정 디렉토리)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "warn", global = true)]
    log_level: String,

    /// 토스트마다 확인 표시를 stderr로 출력
    #[arg(long, global = true)]
    acknowledge: bool,

    /// 사용자 ID (기본: 설정 파일)
    #[arg(long, short = 'u', global = true)]
    user: Option<i64>,

    /// 종료 전 모든 토스트가 만료될 때까지 대기
    #[arg(long, short = 'w', global = true)]
    wait: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 衣物 목록
    Items,
    /// 衣物 등록
    Add {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        style: Option<String>,
        #[arg(long)]
        material: Option<String>,
        /// 계절 태그 (반복 가능)
        #[arg(long = "season")]
        seasons: Vec<String>,
        /// 상황 태그 (반복 가능)
        #[arg(long = "occasion")]
        occasions: Vec<String>,
        /// 사진 파일 (png, jpg, jpeg, gif)
        #[arg(long)]
        photo: Option<PathBuf>,
        /// 등록 전에 사진을 AI로 분석해 빈 필드를 채운다
        #[arg(long)]
        analyze: bool,
    },
    /// 衣物 부분 수정
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        style: Option<String>,
        #[arg(long)]
        material: Option<String>,
        #[arg(long = "season")]
        seasons: Vec<String>,
        #[arg(long = "occasion")]
        occasions: Vec<String>,
    },
    /// 衣物 삭제
    Delete { id: i64 },
    /// 사진 AI 분석
    Analyze { photo: PathBuf },
    /// 날씨 조회
    Weather { city: Option<String> },
    /// 穿搭 추천 생성
    Recommend {
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        occasion: Option<String>,
        /// 스타일 대담함 (1~5)
        #[arg(long)]
        style_level: Option<u8>,
        /// N번째 추천을 즐겨찾기에 저장 (1부터)
        #[arg(long)]
        save: Option<usize>,
    },
    /// 즐겨찾기 목록
    Favorites,
    /// 즐겨찾기 삭제
    Unfavorite { id: i64 },
    /// 옷장 통계
    Stats,
}

/// 연결 실패 화면
fn print_connection_failure(server: &str, reason: &str) {
    eprintln!();
    eprintln!("  ⚠️  服務連接失敗");
    eprintln!("  無法連接到後端服務，請確保後端服務正在運行。");
    eprintln!("  伺服器: {server}");
    eprintln!("  原因: {reason}");
    eprintln!();
}

/// 설정 로드 + CLI 인자 덮어쓰기
fn load_config(args: &Args) -> Result<AppConfig> {
    let manager = match &args.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    }
    .context("설정 로드 실패")?;
    debug!("설정 파일: {}", manager.config_path().display());

    let mut config = manager.get();
    if let Some(server) = &args.server {
        config.server.base_url = server.clone();
    }
    if let Some(user) = args.user {
        config.profile.user_id = user;
    }
    if args.acknowledge {
        config.notification.acknowledge = true;
    }
    config.validate().context("설정 검증 실패")?;
    Ok(config)
}

/// 알림 큐 생성 (설정에 따라 확인 표시 연결)
fn build_queue(config: &AppConfig) -> Result<NotificationQueue> {
    let queue = NotificationQueue::new(&config.notification)?;
    Ok(if config.notification.acknowledge {
        queue.with_acknowledger(Arc::new(ConsoleAcknowledger::stderr()))?
    } else {
        queue
    })
}

/// 모든 토스트가 사라질 때까지 대기
async fn wait_until_drained(queue: &NotificationQueue) {
    let mut rx = queue.subscribe();
    while !rx.borrow_and_update().is_empty() {
        if rx.changed().await.is_err() {
            break;
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // tracing 초기화
    let log_filter = format!(
        "wardrobe={},wardrobe_app={},wardrobe_core={},wardrobe_toast={},wardrobe_network={}",
        args.log_level, args.log_level, args.log_level, args.log_level, args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&args)?;
    info!("서버: {}", config.server.base_url);

    // ── 백엔드 어댑터 + 연결 판정 ──
    let api: Arc<dyn WardrobeApi> = Arc::new(HttpWardrobeClient::from_config(&config)?);
    let gate = ConnectionGate::new();
    let status = gate.check(api.as_ref()).await;
    if !status.is_connected() {
        print_connection_failure(&config.server.base_url, &status.to_string());
        return Ok(ExitCode::from(2));
    }

    // ── 알림 큐 + 렌더러 ──
    let queue = build_queue(&config)?;
    let renderer = ToastRenderer::new(queue.subscribe(), std::io::stdout());
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let render_task = tokio::spawn(renderer.run(shutdown_rx));

    let ctx = PageContext::new(api, queue.clone(), config.profile.user_id);
    let ok = run_command(args.command, ctx, &config).await?;

    if args.wait {
        wait_until_drained(&queue).await;
    }
    if shutdown_tx.send(()).is_err() {
        warn!("렌더러가 이미 종료됨");
    }
    render_task.await.context("렌더러 태스크 실패")?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// 페이지 명령 실행. 실패는 토스트로 이미 보고되었으므로 여부만 돌려준다.
async fn run_command(command: Command, ctx: PageContext, config: &AppConfig) -> Result<bool> {
    match command {
        Command::Items => {
            let mut page = WardrobePage::new(ctx);
            let ok = page.load().await;
            for item in page.items() {
                println!("{}", view::item_line(item));
            }
            Ok(ok)
        }
        Command::Add {
            name,
            category,
            style,
            material,
            seasons,
            occasions,
            photo,
            analyze,
        } => {
            let mut page = WardrobePage::new(ctx);
            if let Some(path) = photo {
                let photo = PhotoUpload::from_path(&path)
                    .with_context(|| format!("사진 읽기 실패: {}", path.display()))?;
                page.select_photo(Some(photo));
            }
            if analyze && !page.analyze().await {
                return Ok(false);
            }

            let draft = page.draft_mut();
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(style) = style {
                draft.style = style;
            }
            if let Some(material) = material {
                draft.material = material;
            }
            for season in &seasons {
                if !draft.suitable_seasons.contains(season) {
                    draft.toggle_season(season);
                }
            }
            for occasion in &occasions {
                if !draft.suitable_occasions.contains(occasion) {
                    draft.toggle_occasion(occasion);
                }
            }

            let added = page.submit().await;
            if let Some(item) = &added {
                println!("{}", view::item_line(item));
            }
            Ok(added.is_some())
        }
        Command::Update {
            id,
            name,
            category,
            color,
            style,
            material,
            seasons,
            occasions,
        } => {
            let update = ClothingUpdate {
                name,
                category,
                primary_color: color,
                style,
                material,
                suitable_seasons: (!seasons.is_empty()).then_some(seasons),
                suitable_occasions: (!occasions.is_empty()).then_some(occasions),
            };
            let mut page = WardrobePage::new(ctx);
            let updated = page.update(id, &update).await;
            if let Some(item) = &updated {
                println!("{}", view::item_line(item));
            }
            Ok(updated.is_some())
        }
        Command::Delete { id } => Ok(WardrobePage::new(ctx).delete(id).await),
        Command::Analyze { photo } => {
            let photo = PhotoUpload::from_path(&photo)
                .with_context(|| format!("사진 읽기 실패: {}", photo.display()))?;
            let mut page = WardrobePage::new(ctx);
            page.select_photo(Some(photo));
            let ok = page.analyze().await;
            if ok {
                let draft = page.draft();
                println!("名稱: {}", draft.name);
                println!("類別: {}", draft.category);
                println!("風格: {}", draft.style);
                println!("材質: {}", draft.material);
                println!("季節: {}", draft.suitable_seasons.join(", "));
                println!("場合: {}", draft.suitable_occasions.join(", "));
            }
            Ok(ok)
        }
        Command::Weather { city } => {
            let mut page = RecommendationsPage::new(ctx, &config.profile);
            if let Some(city) = city {
                page.set_location(city);
            }
            println!("{}", view::weather_line(page.refresh_weather().await));
            Ok(true)
        }
        Command::Recommend {
            city,
            occasion,
            style_level,
            save,
        } => {
            let mut page = RecommendationsPage::new(ctx, &config.profile);
            if let Some(city) = city {
                page.set_location(city);
            }
            if let Some(occasion) = occasion {
                page.set_occasion(occasion);
            }
            if let Some(level) = style_level {
                page.set_style_level(StyleLevel::new(level)?);
            }

            let weather = page.refresh_weather().await.clone();
            println!("{}", view::weather_line(&weather));
            let outfits = page.generate().await.to_vec();
            for (index, outfit) in outfits.iter().enumerate() {
                println!("{}", view::outfit_block(index, outfit));
            }

            match save {
                Some(n) => {
                    let outfit = n
                        .checked_sub(1)
                        .and_then(|i| outfits.get(i))
                        .ok_or_else(|| anyhow!("{n}번째 추천이 없습니다 (총 {}개)", outfits.len()))?;
                    Ok(page.save_favorite(outfit).await.is_some())
                }
                None => Ok(true),
            }
        }
        Command::Favorites => {
            let mut page = FavoritesPage::new(ctx);
            let ok = page.load().await;
            for favorite in page.favorites() {
                println!("{}", view::favorite_line(favorite));
            }
            Ok(ok)
        }
        Command::Unfavorite { id } => Ok(FavoritesPage::new(ctx).delete(id).await),
        Command::Stats => {
            let mut page = AnalyticsPage::new(ctx);
            match page.load().await {
                Some(stats) => {
                    println!("{}", view::stats_block(stats));
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }
}
