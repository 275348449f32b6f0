#![cfg_attr(feature = "python", allow(non_local_definitions))]

// 목적:
// - 검색 인덱스 네이티브 브릿지의 진입점을 제공한다.
//
// 설명:
// - 호스트 앱은 C ABI(bridge_init/bridge_search/bridge_search_free)로 인덱스를 올리고 검색한다.
// - Android 호스트는 `jni` 기능의 JNI 심볼로 같은 전역 상태를 사용한다.
// - 초기화 페이로드와 검색 결과는 브릿지 입장에서 불투명한 바이트다.
// - `python` 기능을 켜면 같은 브릿지를 Python 클래스로도 노출한다.
//
// 디자인 패턴:
// - 계층형 모듈 구조(api/core/index).
//
// 참조:
// - src_rs/api/c_bridge.rs
// - include/ib_bridge.h

pub mod api;
pub mod core;
pub mod index;

pub use crate::api::c_bridge::{bridge_init, bridge_search, bridge_search_free};
pub use crate::api::host::global_bridge;
pub use crate::core::buffer::ByteBuffer;

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::types::PyModule;

#[cfg(feature = "python")]
#[pymodule]
fn ib_bridge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<api::search_bridge::PySearchBridge>()?;
    Ok(())
}
