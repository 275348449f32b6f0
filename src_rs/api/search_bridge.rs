// 목적:
// - Python에서 호출 가능한 검색 브릿지 클래스를 제공한다.
//
// 설명:
// - C 심볼과 같은 전역 브릿지를 공유한다.
// - Python 호스트에는 예외 채널이 있으므로 손상된 페이로드는 RuntimeError로 알린다.
// - 검색 결과 바이트는 엔진 형식 그대로 bytes로 반환한다.
//
// 디자인 패턴:
// - 파사드(Facade) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/api/host.rs
// - src_rs/core/bridge.rs

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::api::host::{global_bridge, prepare};

/// Python에 노출되는 검색 브릿지 클래스다.
#[pyclass(name = "SearchBridge")]
pub struct PySearchBridge;

#[pymethods]
impl PySearchBridge {
    /// 검색 브릿지 객체를 생성한다.
    #[new]
    pub fn new() -> Self {
        prepare();
        Self
    }

    /// 인덱스 페이로드를 로드하고 새 세대 번호를 반환한다.
    pub fn initialize(&self, py: Python<'_>, data: &[u8]) -> PyResult<u64> {
        let payload = data.to_vec();
        py.detach(move || global_bridge().initialize(&payload))
            .map_err(|error| PyRuntimeError::new_err(error.to_string()))
    }

    /// 질의를 실행하고 엔진이 직렬화한 결과 바이트를 반환한다.
    pub fn search<'py>(&self, py: Python<'py>, query: &str) -> Bound<'py, PyBytes> {
        let owned = query.to_string();
        let bytes = py.detach(move || global_bridge().search(&owned));
        PyBytes::new(py, &bytes)
    }

    /// 인덱스가 로드되어 있는지 반환한다.
    pub fn is_ready(&self) -> bool {
        global_bridge().is_initialized()
    }

    /// 지금까지 설치된 인덱스 세대 번호를 반환한다.
    pub fn generation(&self) -> u64 {
        global_bridge().generation()
    }
}
