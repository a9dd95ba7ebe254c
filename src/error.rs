//! 에러 타입 정의 모듈
//!
//! brconvert에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! 모든 에러는 치명적이며, 발생 즉시 전체 실행이 중단됩니다.

use std::path::PathBuf;
use thiserror::Error;

/// brconvert에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum BrConvertError {
    /// 철자 사전 파일이 존재하지 않음
    #[error("철자 사전 파일을 찾을 수 없습니다: {path}")]
    DictionaryNotFound { path: PathBuf },

    /// 철자 사전 파싱 실패
    #[error("철자 사전 파싱 실패 ({path}): {reason}")]
    DictionaryParse { path: PathBuf, reason: String },

    /// 철자 사전이 비어 있음
    #[error("철자 사전이 비어 있습니다: {path}")]
    EmptyDictionary { path: PathBuf },

    /// 사용할 수 없는 사전 키
    #[error("유효하지 않은 사전 키: {reason}")]
    InvalidDictionaryKey { reason: String },

    /// 매칭 규칙 컴파일 실패
    #[error("매칭 규칙 생성 실패 ({key}): {reason}")]
    InvalidRule { key: String, reason: String },

    /// 입력 폴더가 존재하지 않음
    #[error("입력 폴더를 찾을 수 없습니다: {path}")]
    InputNotFound { path: PathBuf },

    /// 입력이 폴더가 아님
    #[error("입력 경로가 폴더가 아닙니다: {path}")]
    NotADirectory { path: PathBuf },

    /// 파일 이름 접미사 설정 오류
    #[error("유효하지 않은 파일 접미사: {suffix} ({reason})")]
    InvalidSuffix { suffix: String, reason: String },

    /// 파일 읽기 실패
    #[error("파일을 읽을 수 없습니다 ({file}): {reason}")]
    FileRead { file: PathBuf, reason: String },

    /// 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({file}): {reason}")]
    FileWrite { file: PathBuf, reason: String },

    /// 변환 로그 직렬화 실패
    #[error("변환 로그 직렬화 실패: {reason}")]
    LogSerialize { reason: String },

    /// 실행 파일 위치 확인 실패
    #[error("프로그램 위치를 확인할 수 없습니다: {reason}")]
    ProgramLocation { reason: String },
}

/// brconvert 결과 타입 별칭
pub type Result<T> = std::result::Result<T, BrConvertError>;
