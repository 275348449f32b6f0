// 목적:
// - 네이티브/호스트 경계를 건너는 바이트 버퍼 전달 객체를 정의한다.
//
// 설명:
// - C 헤더의 `IbRustBuffer { int64_t len; uint8_t *data; }`와 메모리 배치가 같다.
// - 버퍼는 boxed slice에서 만들어지므로 len이 곧 할당 크기다.
// - data가 null이면 len 값과 무관하게 빈 버퍼로 취급한다.
// - 살아 있는 버퍼 수를 세어 검색/해제 반복에서 누수가 없는지 확인할 수 있다.
//
// 디자인 패턴:
// - 소유권 이전 객체(Owned Transfer Object).
//
// 참조:
// - src_rs/api/c_bridge.rs
// - include/ib_bridge.h

use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};

static LIVE_BUFFERS: AtomicUsize = AtomicUsize::new(0);

/// 경계를 건너는 바이트 버퍼다. C 쪽 이름은 `IbRustBuffer`다.
///
/// `from_vec`로 만든 버퍼는 반드시 한 번만 `destroy`(C에서는
/// `bridge_search_free`)로 해제해야 한다.
#[repr(C)]
#[derive(Debug)]
pub struct ByteBuffer {
    len: i64,
    data: *mut u8,
}

impl ByteBuffer {
    /// null 데이터와 길이 0을 갖는 센티널 버퍼다.
    pub const fn empty() -> Self {
        Self {
            len: 0,
            data: ptr::null_mut(),
        }
    }

    /// 벡터의 소유권을 넘겨받아 버퍼를 만든다. 빈 벡터는 센티널이 된다.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        if bytes.is_empty() {
            return Self::empty();
        }

        let Ok(len) = i64::try_from(bytes.len()) else {
            tracing::error!(size = bytes.len(), "버퍼 길이가 i64 범위를 넘어 빈 버퍼로 대체합니다");
            return Self::empty();
        };

        let data = Box::into_raw(bytes.into_boxed_slice()) as *mut u8;
        LIVE_BUFFERS.fetch_add(1, Ordering::Relaxed);
        Self { len, data }
    }

    /// 소비자가 보는 길이다. data가 null이면 항상 0이다.
    pub fn len(&self) -> usize {
        if self.data.is_null() || self.len <= 0 {
            0
        } else {
            self.len as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_null(&self) -> bool {
        self.data.is_null()
    }

    /// 저장된 원시 길이 필드다.
    pub fn raw_len(&self) -> i64 {
        self.len
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.data
    }

    /// 버퍼 내용을 빌린다.
    ///
    /// # Safety
    /// 이 버퍼는 `from_vec`로 만들어졌고 아직 해제되지 않았어야 한다.
    pub unsafe fn as_slice(&self) -> &[u8] {
        if self.data.is_null() {
            return &[];
        }
        std::slice::from_raw_parts(self.data, self.len())
    }

    /// 버퍼가 가리키는 메모리를 해제한다. null 버퍼는 아무것도 하지 않는다.
    ///
    /// # Safety
    /// 이 버퍼는 `from_vec`로 만들어졌고 아직 해제되지 않았어야 한다.
    pub unsafe fn destroy(self) {
        if self.data.is_null() {
            return;
        }
        let slice = ptr::slice_from_raw_parts_mut(self.data, self.len());
        drop(Box::from_raw(slice));
        LIVE_BUFFERS.fetch_sub(1, Ordering::Relaxed);
    }

    /// 버퍼를 다시 Rust 벡터로 되돌린다. null 버퍼는 빈 벡터가 된다.
    ///
    /// # Safety
    /// 이 버퍼는 `from_vec`로 만들어졌고 아직 해제되지 않았어야 한다.
    pub unsafe fn into_vec(self) -> Vec<u8> {
        if self.data.is_null() {
            return Vec::new();
        }
        let slice = ptr::slice_from_raw_parts_mut(self.data, self.len());
        LIVE_BUFFERS.fetch_sub(1, Ordering::Relaxed);
        Box::from_raw(slice).into_vec()
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

/// 아직 해제되지 않은 버퍼 수를 반환한다.
pub fn live_buffer_count() -> usize {
    LIVE_BUFFERS.load(Ordering::Relaxed)
}
