// 목적:
// - 모바일 호스트가 호출하는 C ABI 함수 세 개를 노출한다.
//
// 설명:
// - bridge_init: 인덱스 페이로드를 로드해 전역 스냅샷을 교체한다.
// - bridge_search: 질의 결과를 소유권 이전 버퍼로 반환한다.
// - bridge_search_free: bridge_search가 반환한 버퍼를 해제한다.
// - 어떤 오류도 경계를 넘지 않는다. 검색 실패는 빈 버퍼, 초기화 실패는 설정 정책을 따른다.
//
// 디자인 패턴:
// - 파사드(Facade) + 전역 싱글턴(Process-wide Singleton).
//
// 참조:
// - include/ib_bridge.h
// - src_rs/api/host.rs
// - src_rs/core/buffer.rs

use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{error, warn};

use crate::api::host::{fail_init_from_host, init_from_host, search_from_host};
use crate::core::buffer::ByteBuffer;
use crate::core::errors::CoreError;

/// 인덱스 페이로드를 로드해 현재 검색 상태를 교체한다.
///
/// `raw_data`가 null이고 `len`이 0이면 빈 페이로드로 취급한다.
///
/// # Safety
/// `raw_data`가 null이 아니면 `len` 바이트를 읽을 수 있어야 한다.
#[no_mangle]
pub unsafe extern "C" fn bridge_init(raw_data: *const u8, len: usize) {
    let payload: &[u8] = match (raw_data.is_null(), len) {
        (true, 0) => &[],
        (true, _) => {
            fail_init_from_host(CoreError::InvalidInput(format!(
                "null 페이로드 포인터에 0이 아닌 길이가 전달되었습니다: len={}",
                len
            )));
            return;
        }
        (false, _) => std::slice::from_raw_parts(raw_data, len),
    };

    init_from_host(payload);
}

/// 질의를 실행하고 결과 버퍼의 소유권을 호출자에게 넘긴다.
///
/// 초기화 전 호출, null 포인터, UTF-8이 아닌 질의는 `{len: 0, data: NULL}`을 반환한다.
///
/// # Safety
/// `bytes`가 null이 아니면 null로 끝나는 유효한 C 문자열이어야 한다.
#[no_mangle]
pub unsafe extern "C" fn bridge_search(bytes: *const c_char) -> ByteBuffer {
    if bytes.is_null() {
        warn!("null 질의 포인터가 전달되어 빈 버퍼를 반환합니다");
        return ByteBuffer::empty();
    }

    let query = match CStr::from_ptr(bytes).to_str() {
        Ok(query) => query,
        Err(error) => {
            warn!(%error, "질의가 UTF-8이 아니어서 빈 버퍼를 반환합니다");
            return ByteBuffer::empty();
        }
    };

    ByteBuffer::from_vec(search_from_host(query))
}

/// `bridge_search`가 반환한 버퍼를 해제한다. data가 null이면 아무것도 하지 않는다.
///
/// # Safety
/// `buf`는 `bridge_search`가 반환했고 아직 해제되지 않은 버퍼여야 한다.
#[no_mangle]
pub unsafe extern "C" fn bridge_search_free(buf: ByteBuffer) {
    if buf.is_null() {
        return;
    }

    let released = catch_unwind(AssertUnwindSafe(|| buf.destroy()));
    if released.is_err() {
        error!("버퍼 해제 중 panic이 발생해 프로세스를 중단합니다");
        std::process::abort();
    }
}
