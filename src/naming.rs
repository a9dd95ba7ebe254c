//! 파일 이름 규칙 모듈
//!
//! 원본 언어 접미사(`_en.vtt`)로 입력 파일을 고르고,
//! 대상 언어 접미사(`_uk.vtt`)로 출력 파일 이름을 만듭니다.

use glob::Pattern;

use crate::error::{BrConvertError, Result};

/// 기본 원본 접미사
pub const DEFAULT_SOURCE_SUFFIX: &str = "_en.vtt";

/// 기본 대상 접미사
pub const DEFAULT_TARGET_SUFFIX: &str = "_uk.vtt";

/// 접미사 기반 파일 이름 규칙
#[derive(Debug, Clone)]
pub struct SuffixRule {
    source: String,
    target: String,
    pattern: Pattern,
}

impl SuffixRule {
    /// 새 접미사 규칙 생성
    ///
    /// # Arguments
    /// * `source` - 처리 대상 파일의 접미사
    /// * `target` - 출력 파일의 접미사
    ///
    /// # Examples
    /// ```
    /// use brconvert::naming::SuffixRule;
    ///
    /// let rule = SuffixRule::new("_en.vtt", "_uk.vtt").unwrap();
    /// assert!(rule.matches("sample_en.vtt"));
    /// assert_eq!(rule.output_name("sample_en.vtt").as_deref(), Some("sample_uk.vtt"));
    /// ```
    pub fn new(source: &str, target: &str) -> Result<Self> {
        if source.is_empty() {
            return Err(BrConvertError::InvalidSuffix {
                suffix: source.to_string(),
                reason: "원본 접미사가 비어 있습니다".to_string(),
            });
        }
        if target.is_empty() {
            return Err(BrConvertError::InvalidSuffix {
                suffix: target.to_string(),
                reason: "대상 접미사가 비어 있습니다".to_string(),
            });
        }
        if source == target {
            return Err(BrConvertError::InvalidSuffix {
                suffix: target.to_string(),
                reason: "원본과 대상 접미사가 같으면 입력 파일을 덮어쓸 수 있습니다".to_string(),
            });
        }
        if source.contains(['/', '\\']) || target.contains(['/', '\\']) {
            return Err(BrConvertError::InvalidSuffix {
                suffix: format!("{} / {}", source, target),
                reason: "접미사에 경로 구분자를 쓸 수 없습니다".to_string(),
            });
        }

        let glob = format!("*{}", Pattern::escape(source));
        let pattern = Pattern::new(&glob).map_err(|e| BrConvertError::InvalidSuffix {
            suffix: source.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            source: source.to_string(),
            target: target.to_string(),
            pattern,
        })
    }

    /// 원본 접미사
    pub fn source(&self) -> &str {
        &self.source
    }

    /// 대상 접미사
    pub fn target(&self) -> &str {
        &self.target
    }

    /// 파일 이름이 원본 접미사로 끝나는지 확인
    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.matches(file_name)
    }

    /// 출력 파일 이름 생성 (원본 접미사가 아니면 `None`)
    pub fn output_name(&self, file_name: &str) -> Option<String> {
        if !self.matches(file_name) {
            return None;
        }
        file_name
            .strip_suffix(self.source.as_str())
            .map(|stem| format!("{}{}", stem, self.target))
    }
}

impl Default for SuffixRule {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE_SUFFIX.to_string(),
            target: DEFAULT_TARGET_SUFFIX.to_string(),
            pattern: Pattern::new(&format!("*{}", Pattern::escape(DEFAULT_SOURCE_SUFFIX)))
                .expect("기본 접미사 패턴은 항상 유효함"),
        }
    }
}
