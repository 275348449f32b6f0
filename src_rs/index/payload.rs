// 목적:
// - 참조 엔진의 초기화 페이로드와 검색 응답 형식을 정의한다.
//
// 설명:
// - 두 형식 모두 JSON이다. 브릿지는 이 형식을 해석하지 않는다.
// - 페이로드 구조 검증은 인덱스 빌드 전에 끝낸다.
//
// 참조:
// - src_rs/index/text_index.rs

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::errors::{CoreError, CoreResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentPayload {
    pub key: String,
    /// 번역본 순서대로 나열한 본문. 빈 문자열은 해당 번역본에 없는 절이다.
    pub texts: Vec<String>,
    #[serde(default)]
    pub popularity: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexPayload {
    pub translations: Vec<String>,
    pub documents: Vec<DocumentPayload>,
}

impl IndexPayload {
    pub fn decode(bytes: &[u8]) -> CoreResult<Self> {
        let payload: Self = serde_json::from_slice(bytes).map_err(|error| {
            CoreError::Payload(format!("인덱스 JSON 파싱에 실패했습니다: {}", error))
        })?;
        payload.validate()?;
        Ok(payload)
    }

    pub fn encode(&self) -> CoreResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|error| {
            CoreError::Serialization(format!("인덱스 JSON 직렬화 실패: {}", error))
        })
    }

    fn validate(&self) -> CoreResult<()> {
        if self.translations.is_empty() {
            return Err(CoreError::Payload(
                "translations는 최소 1개 이상이어야 합니다".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(self.documents.len());
        for document in &self.documents {
            if document.key.trim().is_empty() {
                return Err(CoreError::Payload(
                    "document.key는 비어 있을 수 없습니다".to_string(),
                ));
            }

            if document.texts.len() != self.translations.len() {
                return Err(CoreError::Payload(format!(
                    "번역본 수와 본문 수가 다릅니다: key={}, expected={}, actual={}",
                    document.key,
                    self.translations.len(),
                    document.texts.len()
                )));
            }

            if !seen.insert(document.key.as_str()) {
                return Err(CoreError::Payload(format!(
                    "중복된 document.key입니다: {}",
                    document.key
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub key: String,
    pub top_translation: usize,
    pub texts: Vec<String>,
    /// 번역본별로 일치한 질의 단어 수.
    pub words: Vec<u32>,
    /// 번역본별로 접두어가 아닌 정확히 일치한 질의 단어 수.
    pub exact: Vec<u32>,
    pub highlights: Vec<String>,
    pub popularity: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTimings {
    pub tokenize_us: u64,
    pub lookup_us: u64,
    pub score_us: u64,
    pub rank_us: u64,
    pub total_us: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    pub timings: Option<SearchTimings>,
}

impl SearchResponse {
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            timings: None,
        }
    }

    pub fn encode(&self) -> CoreResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|error| {
            CoreError::Serialization(format!("검색 응답 직렬화 실패: {}", error))
        })
    }

    pub fn decode(bytes: &[u8]) -> CoreResult<Self> {
        serde_json::from_slice(bytes).map_err(|error| {
            CoreError::Serialization(format!("검색 응답 파싱 실패: {}", error))
        })
    }
}
