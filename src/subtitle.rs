//! 자막(WebVTT) 줄 분류 모듈
//!
//! 헤더, 타임스탬프, 빈 줄처럼 대사가 아닌 구조 줄을 판별합니다.

use regex::Regex;
use std::sync::LazyLock;

/// WebVTT 헤더 토큰
pub const WEBVTT_HEADER: &str = "WEBVTT";

/// `HH:MM:SS.mmm --> HH:MM:SS.mmm` 형식의 타임스탬프 범위
static TIMESTAMP_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3} --> [0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}$")
        .expect("타임스탬프 패턴은 항상 유효함")
});

/// 자막 줄 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// 빈 줄 또는 공백만 있는 줄
    Blank,
    /// `WEBVTT` 헤더
    Header,
    /// 타임스탬프 범위
    Timestamp,
    /// 변환 대상 대사
    Content,
}

impl LineKind {
    /// 줄 종류 판별 (BOM과 앞뒤 공백 제외 후 비교)
    pub fn of(line: &str) -> Self {
        let trimmed = line.trim_start_matches('\u{feff}').trim();

        if trimmed.is_empty() {
            LineKind::Blank
        } else if trimmed == WEBVTT_HEADER {
            LineKind::Header
        } else if TIMESTAMP_RANGE.is_match(trimmed) {
            LineKind::Timestamp
        } else {
            LineKind::Content
        }
    }

    /// 변환하지 않고 그대로 통과시키는 구조 줄인지 확인
    pub fn is_structural(self) -> bool {
        !matches!(self, LineKind::Content)
    }
}

/// 구조 줄 여부 확인
///
/// # Examples
/// ```
/// use brconvert::subtitle::is_structural;
///
/// assert!(is_structural("WEBVTT"));
/// assert!(is_structural("00:00:01.000 --> 00:00:04.000"));
/// assert!(is_structural("   "));
/// assert!(!is_structural("The color was gray."));
/// ```
pub fn is_structural(line: &str) -> bool {
    LineKind::of(line).is_structural()
}
