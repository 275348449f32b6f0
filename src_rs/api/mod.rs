// 목적:
// - 호스트 FFI 경계 모듈을 선언한다.
//
// 설명:
// - C ABI 심볼은 항상 빌드한다.
// - JNI 심볼은 `jni`, Python 브릿지는 `python` 기능을 켰을 때만 빌드한다.
// - 모든 바인딩은 host 모듈의 전역 브릿지를 공유한다.
//
// 디자인 패턴:
// - 모듈 분리(Module Separation).
//
// 참조:
// - src_rs/api/host.rs
// - src_rs/api/c_bridge.rs
// - src_rs/api/search_bridge.rs

pub mod c_bridge;
pub mod host;
#[cfg(feature = "jni")]
pub mod jni_bridge;
#[cfg(feature = "python")]
pub mod search_bridge;
