//! # wardrobe-network
//!
//! 옷장 백엔드 HTTP 어댑터.
//! `WardrobeApi` 포트를 reqwest로 구현하고, 시작 시 백엔드 연결 여부를 판정한다.
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use wardrobe_network::http_client::HttpWardrobeClient;
//! use wardrobe_network::connectivity::ConnectionGate;
//! ```

pub mod connectivity;
pub mod http_client;
