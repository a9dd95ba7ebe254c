//! 대소문자 패턴 모듈
//!
//! 원문에서 매칭된 단어의 대소문자 형태를 분류하고,
//! 같은 형태를 영국식 철자에 적용합니다.

/// 매칭된 단어의 대소문자 형태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePattern {
    /// 사전 키와 정확히 일치 (예: `color`)
    Lower,
    /// 사전 키 전체 대문자 (예: `COLOR`)
    Upper,
    /// 첫 글자만 대문자 (예: `Color`)
    TitleFirst,
    /// 그 외 불규칙 형태 (예: `cOLOR`)
    Other,
}

impl CasePattern {
    /// 매칭된 텍스트를 사전 키와 비교하여 대소문자 형태를 분류
    ///
    /// 우선순위: `Lower` → `Upper` → `TitleFirst` → `Other`
    ///
    /// # Examples
    /// ```
    /// use brconvert::casing::CasePattern;
    ///
    /// assert_eq!(CasePattern::classify("color", "color"), CasePattern::Lower);
    /// assert_eq!(CasePattern::classify("COLOR", "color"), CasePattern::Upper);
    /// assert_eq!(CasePattern::classify("Color", "color"), CasePattern::TitleFirst);
    /// assert_eq!(CasePattern::classify("cOLOR", "color"), CasePattern::Other);
    /// ```
    pub fn classify(matched: &str, american: &str) -> Self {
        if matched == american {
            CasePattern::Lower
        } else if matched == american.to_uppercase() {
            CasePattern::Upper
        } else if matched.chars().next().is_some_and(char::is_uppercase) {
            CasePattern::TitleFirst
        } else {
            CasePattern::Other
        }
    }

    /// 영국식 철자에 대소문자 형태 적용
    ///
    /// `TitleFirst`는 첫 글자만 대문자로 바꾸고 나머지는 그대로 둡니다.
    /// 여러 단어로 된 값도 두 번째 단어 이후는 건드리지 않습니다.
    pub fn apply(self, british: &str) -> String {
        match self {
            CasePattern::Lower | CasePattern::Other => british.to_string(),
            CasePattern::Upper => british.to_uppercase(),
            CasePattern::TitleFirst => capitalize_first(british),
        }
    }
}

/// 첫 글자만 대문자로 변환
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
