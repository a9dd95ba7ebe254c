//! 한 줄 변환 모듈
//!
//! 철자 사전을 단어 경계 매칭 규칙으로 컴파일하고,
//! 자막 한 줄에 적용하여 변환된 텍스트와 변경 기록을 만듭니다.

use regex::{Captures, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::casing::CasePattern;
use crate::dictionary::SpellingDictionary;
use crate::error::{BrConvertError, Result};

/// 단어 치환 한 건의 기록
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// 줄 번호 (1부터 시작)
    pub line: usize,
    /// 원문에 나타난 그대로의 단어
    pub original: String,
    /// 대소문자가 적용된 치환 단어
    pub changed: String,
}

/// 한 줄 변환 결과
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineConversion {
    /// 변환된 텍스트
    pub text: String,
    /// 발견 순서대로 정렬된 변경 기록
    pub changes: Vec<ChangeRecord>,
}

impl LineConversion {
    /// 변경 사항이 있는지 확인
    pub fn is_changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// 컴파일된 치환 규칙 하나
#[derive(Debug)]
struct SpellingRule {
    american: String,
    british: String,
    pattern: Regex,
}

impl SpellingRule {
    fn new(american: &str, british: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(american)))
            .case_insensitive(true)
            .build()
            .map_err(|e| BrConvertError::InvalidRule {
                key: american.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            american: american.to_string(),
            british: british.to_string(),
            pattern,
        })
    }

    /// 규칙 하나를 텍스트 전체에 적용
    fn apply(&self, text: &str, line_number: usize, changes: &mut Vec<ChangeRecord>) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| {
                let original = &caps[0];
                let replacement = CasePattern::classify(original, &self.american).apply(&self.british);

                if replacement != original {
                    changes.push(ChangeRecord {
                        line: line_number,
                        original: original.to_string(),
                        changed: replacement.clone(),
                    });
                }
                replacement
            })
            .into_owned()
    }
}

/// 미국식 → 영국식 한 줄 변환기
///
/// 규칙은 미국식 키의 글자 수 내림차순으로 정렬되어 있어,
/// 긴 구문이 그 안에 포함된 짧은 키보다 먼저 적용됩니다.
#[derive(Debug)]
pub struct LineConverter {
    rules: Vec<SpellingRule>,
}

impl LineConverter {
    /// 사전으로부터 변환기 생성
    pub fn new(dictionary: &SpellingDictionary) -> Result<Self> {
        let mut pairs: Vec<(&str, &str)> = dictionary.iter().collect();
        pairs.sort_by(|(a, _), (b, _)| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        let rules = pairs
            .into_iter()
            .map(|(american, british)| SpellingRule::new(american, british))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// 규칙 수
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// 한 줄 변환
    ///
    /// 각 규칙은 앞선 규칙이 만든 텍스트 위에 차례로 적용됩니다.
    /// 계산된 치환어가 원문과 같으면 치환도 기록도 하지 않습니다.
    ///
    /// # Examples
    /// ```
    /// use brconvert::converter::LineConverter;
    /// use brconvert::dictionary::SpellingDictionary;
    ///
    /// let dictionary = SpellingDictionary::from_entries([("color", "colour")]).unwrap();
    /// let converter = LineConverter::new(&dictionary).unwrap();
    ///
    /// let result = converter.convert_line("What COLOR is it?", 3);
    /// assert_eq!(result.text, "What COLOUR is it?");
    /// assert_eq!(result.changes[0].line, 3);
    /// ```
    pub fn convert_line(&self, line: &str, line_number: usize) -> LineConversion {
        let mut changes = Vec::new();

        let text = self.rules.iter().fold(line.to_string(), |text, rule| {
            rule.apply(&text, line_number, &mut changes)
        });

        LineConversion { text, changes }
    }
}
