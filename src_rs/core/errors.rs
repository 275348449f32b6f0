// 목적:
// - 브릿지 코어 계층의 표준 오류 타입을 정의한다.
//
// 설명:
// - 입력/설정/페이로드/초기화 상태/직렬화 오류를 명시적으로 구분한다.
// - C 경계에서는 오류를 넘기지 않고 로그 후 빈 버퍼나 abort 정책으로 흡수한다.
//
// 디자인 패턴:
// - 도메인 오류 열거형(Domain Error Enum).
//
// 참조:
// - src_rs/core/bridge.rs
// - src_rs/api/c_bridge.rs

use thiserror::Error;

/// 코어 계층에서 공통으로 사용하는 오류 열거형이다.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("입력값이 유효하지 않습니다: {0}")]
    InvalidInput(String),
    #[error("설정값이 유효하지 않습니다: {0}")]
    InvalidConfig(String),
    #[error("인덱스 페이로드가 손상되었습니다: {0}")]
    Payload(String),
    #[error("검색 인덱스가 아직 초기화되지 않았습니다")]
    NotInitialized,
    #[error("직렬화/역직렬화에 실패했습니다: {0}")]
    Serialization(String),
    #[error("런타임 처리 중 오류가 발생했습니다: {0}")]
    Runtime(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
