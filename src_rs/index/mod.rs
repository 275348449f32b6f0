// 목적:
// - 참조 검색 엔진 계층 모듈을 선언한다.
//
// 설명:
// - 페이로드 형식, 토큰화, 역색인 검색을 분리한다.
// - 브릿지는 이 계층을 `SearchEngine` 트레이트로만 사용한다.
//
// 참조:
// - src_rs/index/text_index.rs
// - src_rs/core/engine.rs

pub mod payload;
pub mod text_index;
pub mod tokenize;
