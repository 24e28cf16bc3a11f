use std::net::{IpAddr, Ipv4Addr};

use axum::Router;

use geoquiz_backend::config::Config;
use geoquiz_backend::routes::build_router;
use geoquiz_backend::state::AppState;

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

/// Builds the router against an explicit Config; env vars are not touched so
/// parallel tests cannot race on them.
pub fn spawn_test_app() -> TestApp {
    let config = Config {
        host: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
        port: 3000,
        log_level: "info".to_string(),
        enable_file_logs: false,
        log_dir: "./logs".to_string(),
        cors_origin: "http://localhost:5173".to_string(),
        max_sessions: 64,
    };

    let state = AppState::new(&config);
    TestApp {
        app: build_router(state.clone()),
        state,
    }
}
