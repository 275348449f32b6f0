// 목적:
// - 브릿지에 탑재되는 참조 검색 엔진(TextIndex)을 구현한다.
//
// 설명:
// - 토큰 -> 문서별 번역본 출현 횟수의 역색인을 정렬 맵으로 유지한다.
// - 3글자 미만 질의 토큰은 접두어 범위 탐색, 그 외는 정확 일치로 찾는다.
// - 후보는 충분히 긴 게시 목록 하나에서 고르고, 일치 단어 수와 인기도로 정렬한다.
// - 처리 순서: 토큰화 -> 조회 -> 점수 -> 정렬 -> JSON 직렬화.
//
// 디자인 패턴:
// - 파이프라인(Pipeline).
//
// 참조:
// - src_rs/index/tokenize.rs
// - src_rs/index/payload.rs
// - src_rs/core/engine.rs

use std::collections::{BTreeMap, HashSet};
use std::ops::Bound;
use std::time::Instant;

use tracing::debug;

use crate::core::config::BridgeConfig;
use crate::core::engine::SearchEngine;
use crate::core::errors::CoreResult;
use crate::index::payload::{IndexPayload, SearchHit, SearchResponse, SearchTimings};
use crate::index::tokenize::{query_terms, tokenize};

/// 이 길이 미만의 질의 토큰은 접두어로 취급한다.
pub const PREFIX_TERM_LEN: usize = 3;

#[derive(Debug, Clone)]
struct Posting {
    doc: usize,
    counts: Vec<u32>,
}

#[derive(Debug, Clone)]
struct IndexedDocument {
    key: String,
    texts: Vec<String>,
    popularity: u64,
}

/// 질의 토큰 하나에 걸린 색인 토큰 하나.
struct TermMatch<'a> {
    token: &'a str,
    postings: &'a [Posting],
    exact: bool,
}

struct DocScore {
    doc: usize,
    words: Vec<u32>,
    exact: Vec<u32>,
}

impl DocScore {
    fn best_words(&self) -> u32 {
        self.words.iter().copied().max().unwrap_or(0)
    }

    fn best_exact(&self) -> u32 {
        self.exact.iter().copied().max().unwrap_or(0)
    }

    /// 일치 단어가 가장 많고, 다음으로 정확 일치가 많은 번역본. 동률이면 앞 번역본.
    fn top_translation(&self) -> usize {
        (0..self.words.len())
            .max_by(|&left, &right| {
                self.words[left]
                    .cmp(&self.words[right])
                    .then_with(|| self.exact[left].cmp(&self.exact[right]))
                    .then_with(|| right.cmp(&left))
            })
            .unwrap_or(0)
    }
}

pub struct TextIndex {
    translations: Vec<String>,
    documents: Vec<IndexedDocument>,
    postings: BTreeMap<String, Vec<Posting>>,
    max_results: usize,
}

impl TextIndex {
    pub fn from_payload(payload: IndexPayload, max_results: usize) -> Self {
        let translation_count = payload.translations.len();
        let mut postings = BTreeMap::<String, Vec<Posting>>::new();
        let mut documents = Vec::with_capacity(payload.documents.len());

        for (doc, document) in payload.documents.into_iter().enumerate() {
            for (translation, text) in document.texts.iter().enumerate() {
                for token in tokenize(text) {
                    let list = postings.entry(token.token).or_default();
                    // 문서 순서대로 추가하므로 마지막 항목만 확인하면 된다.
                    match list.last_mut() {
                        Some(posting) if posting.doc == doc => posting.counts[translation] += 1,
                        _ => {
                            let mut counts = vec![0; translation_count];
                            counts[translation] = 1;
                            list.push(Posting { doc, counts });
                        }
                    }
                }
            }

            documents.push(IndexedDocument {
                key: document.key,
                texts: document.texts,
                popularity: document.popularity,
            });
        }

        Self {
            translations: payload.translations,
            documents,
            postings,
            max_results: max_results.max(1),
        }
    }

    pub fn translations(&self) -> &[String] {
        &self.translations
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn token_count(&self) -> usize {
        self.postings.len()
    }

    /// 질의를 실행해 구조화된 응답을 반환한다.
    pub fn search_response(&self, query: &str) -> SearchResponse {
        let started = Instant::now();
        let terms = query_terms(query);
        let tokenize_us = elapsed_us(started);

        if terms.is_empty() {
            return SearchResponse::empty();
        }

        let started = Instant::now();
        let matches = terms
            .iter()
            .map(|term| self.lookup(term))
            .collect::<Vec<_>>();
        let lookup_us = elapsed_us(started);

        let started = Instant::now();
        let scores = self.score(&matches);
        let score_us = elapsed_us(started);

        let started = Instant::now();
        let results = self.rank(scores, &terms);
        let rank_us = elapsed_us(started);

        debug!(
            terms = terms.len(),
            results = results.len(),
            "TextIndex 검색을 완료했습니다"
        );

        SearchResponse {
            results,
            timings: Some(SearchTimings {
                tokenize_us,
                lookup_us,
                score_us,
                rank_us,
                total_us: tokenize_us + lookup_us + score_us + rank_us,
            }),
        }
    }

    fn lookup<'a>(&'a self, term: &str) -> Vec<TermMatch<'a>> {
        if term.len() < PREFIX_TERM_LEN {
            return self
                .postings
                .range::<str, _>((Bound::Included(term), Bound::Unbounded))
                .take_while(|(token, _)| token.starts_with(term))
                .map(|(token, postings)| TermMatch {
                    token: token.as_str(),
                    postings: postings.as_slice(),
                    exact: token == term,
                })
                .collect();
        }

        self.postings
            .get_key_value(term)
            .map(|(token, postings)| TermMatch {
                token: token.as_str(),
                postings: postings.as_slice(),
                exact: true,
            })
            .into_iter()
            .collect()
    }

    fn score(&self, matches: &[Vec<TermMatch<'_>>]) -> Vec<DocScore> {
        let Some(candidates) = select_candidates(matches, self.max_results) else {
            return Vec::new();
        };

        let translation_count = self.translations.len();
        candidates
            .iter()
            .map(|candidate| {
                let mut score = DocScore {
                    doc: candidate.doc,
                    words: vec![0; translation_count],
                    exact: vec![0; translation_count],
                };

                for term_matches in matches {
                    let mut matched = vec![false; translation_count];
                    let mut matched_exact = vec![false; translation_count];

                    for term_match in term_matches {
                        let Some(posting) = find_posting(term_match.postings, candidate.doc) else {
                            continue;
                        };
                        for (translation, count) in posting.counts.iter().enumerate() {
                            if *count > 0 {
                                matched[translation] = true;
                                matched_exact[translation] |= term_match.exact;
                            }
                        }
                    }

                    for translation in 0..translation_count {
                        score.words[translation] += u32::from(matched[translation]);
                        score.exact[translation] += u32::from(matched_exact[translation]);
                    }
                }

                score
            })
            .collect()
    }

    fn rank(&self, mut scores: Vec<DocScore>, terms: &[String]) -> Vec<SearchHit> {
        scores.sort_by(|left, right| {
            let left_doc = &self.documents[left.doc];
            let right_doc = &self.documents[right.doc];
            right
                .best_words()
                .cmp(&left.best_words())
                .then_with(|| right.best_exact().cmp(&left.best_exact()))
                .then_with(|| right_doc.popularity.cmp(&left_doc.popularity))
                .then_with(|| left_doc.key.cmp(&right_doc.key))
        });
        scores.truncate(self.max_results);

        scores
            .into_iter()
            .map(|score| {
                let document = &self.documents[score.doc];
                let top_translation = score.top_translation();
                SearchHit {
                    key: document.key.clone(),
                    top_translation,
                    texts: document.texts.clone(),
                    highlights: highlights(&document.texts[top_translation], terms),
                    words: score.words,
                    exact: score.exact,
                    popularity: document.popularity,
                }
            })
            .collect()
    }
}

impl SearchEngine for TextIndex {
    fn load(payload: &[u8], config: &BridgeConfig) -> CoreResult<Self> {
        let decoded = IndexPayload::decode(payload)?;
        Ok(Self::from_payload(decoded, config.max_results))
    }

    fn search(&self, query: &str) -> CoreResult<Vec<u8>> {
        self.search_response(query).encode()
    }

    fn describe(&self) -> String {
        format!(
            "TextIndex(translations={}, documents={}, tokens={})",
            self.translations.len(),
            self.documents.len(),
            self.postings.len()
        )
    }
}

/// 후보 게시 목록을 고른다.
///
/// 짧은 목록부터 보며 max_results의 3배, 2배, 1배 이상인 첫 목록을 쓰고,
/// 없으면 가장 긴 목록을 쓴다.
fn select_candidates<'a>(
    matches: &[Vec<TermMatch<'a>>],
    max_results: usize,
) -> Option<&'a [Posting]> {
    let mut seen = HashSet::new();
    let mut lists = matches
        .iter()
        .flatten()
        .filter(|term_match| seen.insert(term_match.token))
        .map(|term_match| term_match.postings)
        .collect::<Vec<_>>();
    lists.sort_by_key(|postings| postings.len());

    [3usize, 2, 1]
        .iter()
        .find_map(|factor| {
            lists
                .iter()
                .find(|postings| postings.len() >= max_results.saturating_mul(*factor))
                .copied()
        })
        .or_else(|| lists.last().copied())
}

fn find_posting(postings: &[Posting], doc: usize) -> Option<&Posting> {
    postings
        .binary_search_by_key(&doc, |posting| posting.doc)
        .ok()
        .map(|idx| &postings[idx])
}

/// 질의 토큰과 일치한 원문 단어를 본문 순서대로 중복 없이 모은다.
fn highlights(text: &str, terms: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|token| {
            terms.iter().any(|term| {
                if term.len() < PREFIX_TERM_LEN {
                    token.token.starts_with(term.as_str())
                } else {
                    token.token == *term
                }
            })
        })
        .filter_map(|token| seen.insert(token.source.clone()).then_some(token.source))
        .collect()
}

fn elapsed_us(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX)
}
