//! 자막 파일 처리 모듈
//!
//! 입력 폴더 탐색, 파일 단위 변환, 변환 로그 누적을 담당합니다.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::converter::{ChangeRecord, LineConverter};
use crate::error::{BrConvertError, Result};
use crate::naming::SuffixRule;
use crate::subtitle::is_structural;

/// 파일 하나의 변환 로그
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLogEntry {
    /// 출력 파일 이름
    #[serde(rename = "outputFile")]
    pub output_file: String,
    /// 줄 순서대로의 변경 기록
    pub changes: Vec<ChangeRecord>,
}

/// 전체 변환 로그 (입력 파일 이름 → 파일 로그)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversionLog {
    files: BTreeMap<String, FileLogEntry>,
}

impl ConversionLog {
    /// 빈 로그 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 파일 로그 기록
    pub fn record(&mut self, input_name: impl Into<String>, entry: FileLogEntry) {
        self.files.insert(input_name.into(), entry);
    }

    /// 입력 파일 이름으로 로그 조회
    pub fn get(&self, input_name: &str) -> Option<&FileLogEntry> {
        self.files.get(input_name)
    }

    /// 기록된 파일 수
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// 전체 변경 수
    pub fn total_changes(&self) -> usize {
        self.files.values().map(|e| e.changes.len()).sum()
    }

    /// 2칸 들여쓰기 JSON 문자열로 직렬화
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| BrConvertError::LogSerialize {
            reason: e.to_string(),
        })
    }

    /// 로그 파일 쓰기 (상위 폴더가 없으면 생성)
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| BrConvertError::FileWrite {
                file: parent.to_path_buf(),
                reason: e.to_string(),
            })?;
        }

        fs::write(path, json).map_err(|e| BrConvertError::FileWrite {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// 파일 내용 변환 결과
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentConversion {
    /// 변환된 전체 내용
    pub content: String,
    /// 줄 순서대로의 변경 기록
    pub changes: Vec<ChangeRecord>,
}

/// 파일 내용 전체 변환
///
/// `\n` 기준으로 줄을 나누고, 구조 줄은 그대로 두며,
/// 나머지 줄은 1부터 시작하는 줄 번호와 함께 변환합니다.
/// 같은 `\n`으로 다시 합치므로 치환된 단어 외에는 원본과 동일합니다.
pub fn convert_content(content: &str, converter: &LineConverter) -> ContentConversion {
    let mut changes = Vec::new();

    let lines: Vec<String> = content
        .split('\n')
        .enumerate()
        .map(|(index, line)| {
            if is_structural(line) {
                return line.to_string();
            }
            let result = converter.convert_line(line, index + 1);
            if result.is_changed() {
                changes.extend(result.changes);
            }
            result.text
        })
        .collect();

    ContentConversion {
        content: lines.join("\n"),
        changes,
    }
}

/// 파일 처리 옵션
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    /// 출력 폴더
    pub output_dir: PathBuf,
    /// 파일 이름 규칙
    pub suffix_rule: SuffixRule,
    /// 파일을 쓰지 않고 결과만 계산
    pub dry_run: bool,
}

impl ProcessOptions {
    /// 기본 옵션 생성
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// 파일 이름 규칙 설정
    pub fn with_suffix_rule(mut self, suffix_rule: SuffixRule) -> Self {
        self.suffix_rule = suffix_rule;
        self
    }

    /// 드라이런 설정
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// 파일 처리 결과
#[derive(Debug)]
pub struct ProcessResult {
    /// 입력 파일 이름
    pub input_name: String,
    /// 출력 파일 경로
    pub output_path: PathBuf,
    /// 파일 로그
    pub entry: FileLogEntry,
    /// 읽은 바이트
    pub bytes_read: u64,
    /// 쓴 바이트 (드라이런이면 0)
    pub bytes_written: u64,
}

/// 입력 폴더 확인
pub fn validate_input_dir(input_dir: &Path) -> Result<()> {
    if !input_dir.exists() {
        return Err(BrConvertError::InputNotFound {
            path: input_dir.to_path_buf(),
        });
    }
    if !input_dir.is_dir() {
        return Err(BrConvertError::NotADirectory {
            path: input_dir.to_path_buf(),
        });
    }
    Ok(())
}

/// 입력 폴더 바로 아래에서 원본 접미사 파일 수집 (파일 이름 순)
pub fn collect_source_files(input_dir: &Path, rule: &SuffixRule) -> Result<Vec<PathBuf>> {
    validate_input_dir(input_dir)?;

    let files = WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.file_name()
                .to_str()
                .map(|name| rule.matches(name))
                .unwrap_or(false)
        })
        .map(|e| e.into_path())
        .collect();

    Ok(files)
}

/// 자막 파일 하나 처리
///
/// # Arguments
/// * `path` - 입력 파일 경로
/// * `converter` - 한 줄 변환기
/// * `options` - 처리 옵션
///
/// # Returns
/// 출력 경로와 파일 로그를 담은 `ProcessResult`
pub fn process_file(
    path: &Path,
    converter: &LineConverter,
    options: &ProcessOptions,
) -> Result<ProcessResult> {
    let input_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or_else(|| BrConvertError::FileRead {
            file: path.to_path_buf(),
            reason: "파일 이름을 UTF-8로 읽을 수 없습니다".to_string(),
        })?;

    let output_name =
        options
            .suffix_rule
            .output_name(&input_name)
            .ok_or_else(|| BrConvertError::InvalidSuffix {
                suffix: options.suffix_rule.source().to_string(),
                reason: format!("{} 파일이 원본 접미사로 끝나지 않습니다", input_name),
            })?;
    let output_path = options.output_dir.join(&output_name);

    let content = fs::read_to_string(path).map_err(|e| BrConvertError::FileRead {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let converted = convert_content(&content, converter);
    tracing::debug!(
        file = %input_name,
        changes = converted.changes.len(),
        "파일 변환 완료"
    );

    let bytes_written = if options.dry_run {
        0
    } else {
        write_output(&output_path, &converted.content)?;
        converted.content.len() as u64
    };

    Ok(ProcessResult {
        input_name,
        output_path,
        entry: FileLogEntry {
            output_file: output_name,
            changes: converted.changes,
        },
        bytes_read: content.len() as u64,
        bytes_written,
    })
}

/// 출력 파일 쓰기
fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BrConvertError::FileWrite {
            file: parent.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    fs::write(path, content).map_err(|e| BrConvertError::FileWrite {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// 파일 목록을 차례로 처리하여 변환 로그 생성
///
/// 파일마다 `on_file`이 호출됩니다. 실패한 파일이 있으면 즉시 중단합니다.
pub fn process_files<F>(
    files: &[PathBuf],
    converter: &LineConverter,
    options: &ProcessOptions,
    mut on_file: F,
) -> Result<ConversionLog>
where
    F: FnMut(&ProcessResult),
{
    files.iter().try_fold(ConversionLog::new(), |mut log, path| {
        let result = process_file(path, converter, options)?;
        on_file(&result);
        log.record(result.input_name, result.entry);
        Ok(log)
    })
}
