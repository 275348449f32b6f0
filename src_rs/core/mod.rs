// 목적:
// - 브릿지 코어 계층 모듈을 선언한다.
//
// 설명:
// - 전달 버퍼, 전역 스냅샷, 엔진 경계, 정책 파사드를 분리해 호스트별 바인딩이 공유한다.
//
// 디자인 패턴:
// - 계층 분리(Layered Modules).
//
// 참조:
// - src_rs/core/errors.rs
// - src_rs/core/bridge.rs

pub mod bridge;
pub mod buffer;
pub mod config;
pub mod engine;
pub mod errors;
pub mod state;
pub mod telemetry;
