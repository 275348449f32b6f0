// 목적:
// - 브릿지 로그 구독자(tracing subscriber)를 설치한다.
//
// 설명:
// - 호스트 앱이 이미 구독자를 설치했다면 그것을 존중한다.
// - 프로세스당 한 번만 시도한다.
//
// 참조:
// - src_rs/core/config.rs

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// 주어진 필터 문자열로 fmt 구독자를 설치한다.
///
/// 필터 파싱에 실패하면 기본 필터(`warn`)로 대체한다.
pub fn init_tracing(filter: &str) {
    TRACING_INIT.call_once(|| {
        let env_filter = EnvFilter::try_new(filter)
            .unwrap_or_else(|_| EnvFilter::new(crate::core::config::DEFAULT_LOG_FILTER));

        let installed = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .try_init()
            .is_ok();

        if installed {
            tracing::debug!(filter, "브릿지 로그 구독자를 설치했습니다");
        }
    });
}
