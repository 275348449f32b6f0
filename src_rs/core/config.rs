// 목적:
// - 브릿지 런타임 설정값을 정의하고 로드한다.
//
// 설명:
// - C 경계에는 설정 인자가 없으므로 환경 변수에서 읽는다.
// - 설정을 직접 넘길 수 있는 호스트는 JSON 문자열을 사용한다.
//
// 디자인 패턴:
// - 설정 페이로드(Config Payload) + 검증 가드(Guard Function).
//
// 참조:
// - src_rs/api/c_bridge.rs
// - src_rs/core/telemetry.rs

use serde::{Deserialize, Serialize};

use crate::core::errors::{CoreError, CoreResult};

pub const ENV_MAX_RESULTS: &str = "IB_BRIDGE_MAX_RESULTS";
pub const ENV_LOG_FILTER: &str = "IB_BRIDGE_LOG";
pub const ENV_INIT_FAILURE: &str = "IB_BRIDGE_INIT_FAILURE";

pub const DEFAULT_MAX_RESULTS: usize = 20;
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// 손상된 초기화 페이로드를 만났을 때의 처리 방식이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitFailurePolicy {
    /// 로그를 남기고 프로세스를 중단한다.
    #[default]
    Abort,
    /// 미초기화 상태로 되돌려 이후 검색이 빈 버퍼를 반환하게 한다.
    Reset,
}

impl InitFailurePolicy {
    pub fn parse(value: &str) -> CoreResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "reset" => Ok(Self::Reset),
            other => Err(CoreError::InvalidConfig(format!(
                "{}는 abort 또는 reset이어야 합니다: {}",
                ENV_INIT_FAILURE, other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub max_results: usize,
    pub log_filter: String,
    pub init_failure: InitFailurePolicy,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            init_failure: InitFailurePolicy::default(),
        }
    }
}

impl BridgeConfig {
    /// 프로세스 환경 변수에서 설정을 읽는다.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 키 조회 함수로 설정을 구성한다. 값이 없으면 기본값을 쓴다.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_RESULTS) {
            config.max_results = raw.trim().parse::<usize>().map_err(|error| {
                CoreError::InvalidConfig(format!(
                    "{} 파싱 실패: value={}, error={}",
                    ENV_MAX_RESULTS, raw, error
                ))
            })?;
        }

        config.log_filter = Self::log_filter_from_lookup(&lookup);

        if let Some(raw) = lookup(ENV_INIT_FAILURE) {
            config.init_failure = InitFailurePolicy::parse(&raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// 로그 필터만 읽는다. 다른 설정값이 잘못되어도 구독자는 먼저 설치할 수 있어야 한다.
    pub fn log_filter_from_env() -> String {
        Self::log_filter_from_lookup(|key| std::env::var(key).ok())
    }

    pub fn log_filter_from_lookup<F>(lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(ENV_LOG_FILTER)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }

    /// JSON 문자열에서 설정을 읽는다. 누락된 필드는 기본값을 쓴다.
    pub fn from_json(payload_json: &str) -> CoreResult<Self> {
        let config: Self = serde_json::from_str(payload_json).map_err(|error| {
            CoreError::InvalidConfig(format!("설정 JSON 파싱에 실패했습니다: {}", error))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.max_results == 0 {
            return Err(CoreError::InvalidConfig(
                "max_results는 1 이상이어야 합니다".to_string(),
            ));
        }

        if self.log_filter.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "log_filter는 비어 있을 수 없습니다".to_string(),
            ));
        }

        Ok(())
    }
}
