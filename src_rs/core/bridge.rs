// 목적:
// - 초기화/검색 정책을 한곳에 모은 브릿지 파사드를 제공한다.
//
// 설명:
// - 페이로드 해석은 스냅샷 쓰기 락 밖에서 끝내고, 완성된 인덱스만 스냅샷으로 교체한다.
// - 초기화끼리는 전용 뮤텍스로 직렬화한다(마지막 호출이 이긴다). 검색은 이 뮤텍스를 잡지 않는다.
// - 검색은 선행 조건 위반, 엔진 오류, 엔진 panic을 모두 빈 결과로 흡수한다.
// - 손상된 초기화 페이로드는 설정된 정책(abort/reset)으로 처리한다.
//
// 디자인 패턴:
// - 파사드(Facade) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/core/state.rs
// - src_rs/core/engine.rs
// - src_rs/api/c_bridge.rs

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::Instant;

use tracing::{debug, error, info, warn};

use crate::core::config::{BridgeConfig, InitFailurePolicy};
use crate::core::engine::SearchEngine;
use crate::core::errors::{CoreError, CoreResult};
use crate::core::state::IndexState;

pub struct Bridge<E> {
    state: IndexState<E>,
    config: OnceLock<BridgeConfig>,
    init_lock: Mutex<()>,
}

impl<E: SearchEngine> Bridge<E> {
    /// 설정을 처음 사용할 때 환경 변수에서 읽는 브릿지를 만든다.
    pub const fn new() -> Self {
        Self {
            state: IndexState::new(),
            config: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    pub fn with_config(config: BridgeConfig) -> Self {
        let bridge = Self::new();
        let _ = bridge.config.set(config);
        bridge
    }

    pub fn config(&self) -> &BridgeConfig {
        self.config.get_or_init(|| {
            BridgeConfig::from_env().unwrap_or_else(|error| {
                warn!(%error, "브릿지 설정을 읽지 못해 기본값을 사용합니다");
                BridgeConfig::default()
            })
        })
    }

    /// 페이로드를 로드해 현재 스냅샷을 교체하고 새 세대 번호를 반환한다.
    ///
    /// 로드에 실패하면 기존 스냅샷은 그대로 남는다.
    pub fn initialize(&self, payload: &[u8]) -> CoreResult<u64> {
        let _guard = self.lock_init();
        self.load_and_install(payload)
    }

    /// 초기화에 실패하면 설정된 정책을 적용한다. 반환값이 없는 호스트 경계용이다.
    ///
    /// 로드와 실패 정책이 같은 초기화 락 안에서 실행되므로, reset이 다른 초기화가
    /// 방금 설치한 스냅샷을 지우지 않는다.
    pub fn initialize_or_apply_policy(&self, payload: &[u8]) {
        let _guard = self.lock_init();
        if let Err(error) = self.load_and_install(payload) {
            self.apply_policy_locked(error);
        }
    }

    /// 초기화 실패를 설정된 정책(abort/reset)으로 처리한다.
    pub fn apply_init_failure(&self, error: CoreError) {
        let _guard = self.lock_init();
        self.apply_policy_locked(error);
    }

    fn lock_init(&self) -> MutexGuard<'_, ()> {
        // 보호 대상이 없는 직렬화용 락이므로 poison 상태여도 그대로 사용한다.
        self.init_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load_and_install(&self, payload: &[u8]) -> CoreResult<u64> {
        let started = Instant::now();
        let engine = catch_unwind(AssertUnwindSafe(|| E::load(payload, self.config())))
            .map_err(|_| CoreError::Payload("페이로드 로드 중 panic이 발생했습니다".to_string()))??;
        let summary = engine.describe();
        let generation = self.state.install(engine);

        info!(
            generation,
            payload_bytes = payload.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            engine = %summary,
            "검색 인덱스를 설치했습니다"
        );
        Ok(generation)
    }

    fn apply_policy_locked(&self, error: CoreError) {
        match self.config().init_failure {
            InitFailurePolicy::Abort => {
                error!(%error, "초기화 페이로드가 손상되어 프로세스를 중단합니다");
                std::process::abort();
            }
            InitFailurePolicy::Reset => {
                error!(%error, "초기화 페이로드가 손상되어 미초기화 상태로 되돌립니다");
                self.state.clear();
            }
        }
    }

    /// 미초기화 센티널 상태로 되돌린다.
    pub fn reset(&self) {
        let _guard = self.lock_init();
        self.state.clear();
    }

    /// 검색을 실행하고 실패 원인을 그대로 돌려준다.
    pub fn try_search(&self, query: &str) -> CoreResult<Vec<u8>> {
        let engine: Arc<E> = self.state.snapshot().ok_or(CoreError::NotInitialized)?;

        catch_unwind(AssertUnwindSafe(|| engine.search(query))).map_err(|_| {
            CoreError::Runtime("검색 엔진 내부에서 panic이 발생했습니다".to_string())
        })?
    }

    /// 검색을 실행한다. 어떤 실패도 빈 결과로 흡수한다.
    pub fn search(&self, query: &str) -> Vec<u8> {
        match self.try_search(query) {
            Ok(bytes) => bytes,
            Err(CoreError::NotInitialized) => {
                debug!("초기화 전에 검색이 호출되어 빈 결과를 반환합니다");
                Vec::new()
            }
            Err(error) => {
                warn!(%error, "검색에 실패해 빈 결과를 반환합니다");
                Vec::new()
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_initialized()
    }

    pub fn generation(&self) -> u64 {
        self.state.generation()
    }
}

impl<E: SearchEngine> Default for Bridge<E> {
    fn default() -> Self {
        Self::new()
    }
}
