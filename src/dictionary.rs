//! 철자 사전 모듈
//!
//! 미국식 → 영국식 철자 사전(JSON 객체)의 로딩과 검사를 담당합니다.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{BrConvertError, Result};

/// 미국식 철자 → 영국식 철자 사전
///
/// 키는 대소문자를 구분하며 중복되지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpellingDictionary {
    entries: BTreeMap<String, String>,
}

impl SpellingDictionary {
    /// JSON 파일에서 사전 로딩
    ///
    /// 파일이 없거나, 문자열 → 문자열 객체가 아니거나, 비어 있으면 에러를 반환합니다.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BrConvertError::DictionaryNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|e| BrConvertError::DictionaryParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let entries: BTreeMap<String, String> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| BrConvertError::DictionaryParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if entries.is_empty() {
            return Err(BrConvertError::EmptyDictionary {
                path: path.to_path_buf(),
            });
        }

        let dictionary = Self::from_entries(entries)?;
        tracing::info!(path = %path.display(), entries = dictionary.len(), "철자 사전 로딩 완료");

        Ok(dictionary)
    }

    /// 메모리상의 항목으로 사전 생성
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries: BTreeMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        if entries.keys().any(|k| k.trim().is_empty()) {
            return Err(BrConvertError::InvalidDictionaryKey {
                reason: "빈 문자열 또는 공백만 있는 키".to_string(),
            });
        }

        let dictionary = Self { entries };
        for warning in dictionary.lint() {
            tracing::warn!("{}", warning);
        }

        Ok(dictionary)
    }

    /// 변환 결과에 영향을 줄 수 있는 항목 검사
    ///
    /// 치명적이지 않은 경고 목록을 반환합니다:
    /// - 대문자가 포함된 영국식 값 (대소문자 보존 규칙이 소문자 값을 가정)
    /// - 영국식 값이 다시 미국식 키인 경우 (재변환 시 결과가 달라짐)
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for (american, british) in &self.entries {
            if british.chars().any(char::is_uppercase) {
                warnings.push(format!(
                    "영국식 값에 대문자가 포함되어 있습니다: {:?} → {:?}",
                    american, british
                ));
            }
            if british != american && self.entries.contains_key(british) {
                warnings.push(format!(
                    "영국식 값이 다시 사전 키로 등록되어 있습니다: {:?} → {:?}",
                    american, british
                ));
            }
        }

        warnings
    }

    /// 사전 항목 수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 사전이 비어 있는지 확인
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (미국식, 영국식) 쌍 순회
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
