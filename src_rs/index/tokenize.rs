// 목적:
// - 본문과 질의를 색인 토큰으로 나눈다.
//
// 설명:
// - 공백 기준으로 나눈 뒤 ASCII 영숫자만 남겨 대문자로 만든다("it's"와 "its"는 같은 토큰).
// - source는 하이라이트용 원문 단어로, 아포스트로피와 끝이 아닌 쉼표를 유지한다.
//
// 참조:
// - src_rs/index/text_index.rs

use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub source: String,
    pub token: String,
}

pub fn tokenize(input: &str) -> Vec<Token> {
    input
        .split_whitespace()
        .filter_map(|word| {
            let token = word
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
                .to_ascii_uppercase();
            if token.is_empty() {
                return None;
            }

            let last = word.chars().count().saturating_sub(1);
            let source = word
                .chars()
                .enumerate()
                .filter(|(i, ch)| {
                    ch.is_ascii_alphanumeric() || *ch == '\'' || (*ch == ',' && *i != last)
                })
                .map(|(_, ch)| ch)
                .collect::<String>();

            Some(Token { source, token })
        })
        .collect()
}

/// 질의 토큰을 첫 등장 순서대로 중복 제거한다.
pub fn query_terms(query: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize(query)
        .into_iter()
        .filter_map(|token| seen.insert(token.token.clone()).then_some(token.token))
        .collect()
}
