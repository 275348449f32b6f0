// 목적:
// - 프로세스 전역 인덱스 스냅샷을 보관한다.
//
// 설명:
// - 스냅샷은 `Arc<E>` 하나이며 초기화 시 통째로 교체된다.
// - 읽기 측은 락을 Arc 복제 동안만 잡으므로 읽기끼리 직렬화되지 않는다.
// - 진행 중인 검색은 시작 시점의 스냅샷을 끝까지 사용한다.
//
// 디자인 패턴:
// - 스냅샷 교체(Atomic Snapshot Swap).
//
// 참조:
// - src_rs/core/bridge.rs

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

pub struct IndexState<E> {
    slot: RwLock<Option<Arc<E>>>,
    generation: AtomicU64,
}

impl<E> IndexState<E> {
    pub const fn new() -> Self {
        Self {
            slot: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// 새 스냅샷을 설치하고 새 세대 번호를 반환한다.
    ///
    /// 세대 번호는 쓰기 락 안에서 증가하므로 설치 순서와 일치한다.
    pub fn install(&self, engine: E) -> u64 {
        let next = Arc::new(engine);
        let (previous, generation) = {
            // 스냅샷 전체가 한 번에 교체되므로 poison 상태여도 찢어진 값은 없다.
            let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
            let previous = slot.replace(next);
            (previous, self.generation.fetch_add(1, Ordering::AcqRel) + 1)
        };
        // 이전 스냅샷은 락 밖에서 해제한다.
        drop(previous);
        generation
    }

    /// 미초기화 상태로 되돌린다.
    pub fn clear(&self) {
        let previous = {
            let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
            slot.take()
        };
        drop(previous);
    }

    pub fn snapshot(&self) -> Option<Arc<E>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
    }

    pub fn is_initialized(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// 지금까지 설치된 스냅샷 수다. 0이면 한 번도 초기화되지 않았다.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

impl<E> Default for IndexState<E> {
    fn default() -> Self {
        Self::new()
    }
}
