//! brconvert - AMERICAN TO BRITISH SUBTITLE CONVERTER
//!
//! WebVTT 자막 파일의 미국식 철자를 영국식 철자로 바꾸고,
//! 모든 변경 사항을 JSON 변환 로그로 남기는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔤 **대소문자 보존**: `color` → `colour`, `COLOR` → `COLOUR`, `Color` → `Colour`
//! - 📏 **긴 구문 우선**: 글자 수가 긴 사전 키부터 적용
//! - 🧱 **단어 단위 매칭**: `grayscale` 안의 `gray`는 바꾸지 않음
//! - ⏱️ **구조 줄 보존**: WEBVTT 헤더, 타임스탬프, 빈 줄은 그대로 유지
//! - 📝 **변환 로그**: 파일별, 줄별 변경 내역을 JSON으로 기록
//! - 🧪 **드라이런 모드**: 파일을 쓰지 않고 변경 사항만 확인
//!
//! # 예제
//!
//! ```bash
//! # 실행 파일 위치 기준 기본 경로 사용
//! brconvert
//!
//! # 폴더 지정 + 변경 사항만 확인
//! brconvert -i ./subs -o ./subs_uk --dry-run --verbose
//! ```

pub mod casing;
pub mod cli;
pub mod converter;
pub mod dictionary;
pub mod error;
pub mod logging;
pub mod naming;
pub mod pipeline;
pub mod stats;
pub mod subtitle;

// Re-exports for convenient access
pub use casing::CasePattern;
pub use cli::{Args, Paths};
pub use converter::{ChangeRecord, LineConversion, LineConverter};
pub use dictionary::SpellingDictionary;
pub use error::{BrConvertError, Result};
pub use naming::SuffixRule;
pub use pipeline::{
    collect_source_files, convert_content, process_file, process_files, ConversionLog,
    FileLogEntry, ProcessOptions, ProcessResult,
};
pub use stats::{format_bytes, Statistics};
