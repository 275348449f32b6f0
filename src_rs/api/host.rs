// 목적:
// - 모든 호스트 바인딩(C, JNI, Python)이 공유하는 전역 브릿지와 진입 헬퍼를 제공한다.
//
// 설명:
// - 로그 구독자는 IB_BRIDGE_LOG만으로 먼저 설치하고, 나머지 설정은 그 뒤에 해석한다.
//   잘못된 IB_BRIDGE_* 값에 대한 경고는 구독자 설치 이후에 기록된다.
// - 초기화 실패는 호스트와 무관하게 같은 정책(abort/reset)을 따른다.
//
// 디자인 패턴:
// - 전역 싱글턴(Process-wide Singleton).
//
// 참조:
// - src_rs/api/c_bridge.rs
// - src_rs/api/jni_bridge.rs
// - src_rs/core/bridge.rs

use crate::core::bridge::Bridge;
use crate::core::config::BridgeConfig;
use crate::core::errors::CoreError;
use crate::core::telemetry::init_tracing;
use crate::index::text_index::TextIndex;

static BRIDGE: Bridge<TextIndex> = Bridge::new();

/// 호스트 바인딩이 공유하는 전역 브릿지다.
pub fn global_bridge() -> &'static Bridge<TextIndex> {
    &BRIDGE
}

/// 로그 구독자를 설치한 뒤 브릿지 설정을 확정한다.
pub fn prepare() -> &'static BridgeConfig {
    init_tracing(&BridgeConfig::log_filter_from_env());
    BRIDGE.config()
}

/// 페이로드로 전역 인덱스를 교체한다. 실패하면 설정된 정책을 적용한다.
pub fn init_from_host(payload: &[u8]) {
    prepare();
    BRIDGE.initialize_or_apply_policy(payload);
}

/// 페이로드를 받기 전 단계에서 실패한 초기화를 정책으로 처리한다.
pub fn fail_init_from_host(error: CoreError) {
    prepare();
    BRIDGE.apply_init_failure(error);
}

/// 질의를 실행한다. 실패는 빈 벡터다.
pub fn search_from_host(query: &str) -> Vec<u8> {
    BRIDGE.search(query)
}
