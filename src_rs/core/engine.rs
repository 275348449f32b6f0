// 목적:
// - 브릿지 뒤에 놓이는 검색 엔진의 경계 트레이트를 정의한다.
//
// 설명:
// - 브릿지는 초기화 페이로드와 검색 결과를 불투명한 바이트로만 다룬다.
// - 페이로드 해석과 결과 직렬화는 전적으로 엔진 구현의 책임이다.
//
// 디자인 패턴:
// - 어댑터 트레이트(Adapter Trait).
//
// 참조:
// - src_rs/core/bridge.rs
// - src_rs/index/text_index.rs

use crate::core::config::BridgeConfig;
use crate::core::errors::CoreResult;

pub trait SearchEngine: Send + Sync + Sized + 'static {
    /// 초기화 페이로드를 해석해 불변 인덱스를 만든다.
    fn load(payload: &[u8], config: &BridgeConfig) -> CoreResult<Self>;

    /// 질의를 실행하고 엔진 정의 형식으로 직렬화된 결과를 반환한다.
    fn search(&self, query: &str) -> CoreResult<Vec<u8>>;

    /// 로그용 한 줄 요약.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}
