//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의와 경로 설정을 담당합니다.
//! 인자 없이 실행하면 실행 파일 위치 기준의 고정 경로를 사용합니다.

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::error::{BrConvertError, Result};
use crate::naming::{DEFAULT_SOURCE_SUFFIX, DEFAULT_TARGET_SUFFIX};

/// 기본 철자 사전 경로 (루트 기준)
pub const DEFAULT_DICTIONARY: &str = "american_spellings.json";
/// 기본 입력 폴더 (루트 기준)
pub const DEFAULT_INPUT_DIR: &str = "files/English-vtt-files";
/// 기본 출력 폴더 (루트 기준)
pub const DEFAULT_OUTPUT_DIR: &str = "files/British-vtt-files";
/// 기본 변환 로그 경로 (루트 기준)
pub const DEFAULT_LOG_FILE: &str = "files/conversion_log.json";

/// brconvert CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "brconvert",
    author = "YourName <your@email.com>",
    version,
    about = "AMERICAN TO BRITISH SUBTITLE CONVERTER - 자막 파일의 미국식 철자를 영국식으로 변환",
    long_about = r#"
AMERICAN TO BRITISH SUBTITLE CONVERTER
======================================

입력 폴더의 *_en.vtt 자막 파일에서 미국식 철자를 찾아
영국식 철자로 바꾼 *_uk.vtt 파일을 출력 폴더에 만듭니다.
모든 변경 사항은 JSON 변환 로그에 기록됩니다.

특징:
  • 대소문자 형태 보존 (color → colour, COLOR → COLOUR, Color → Colour)
  • 긴 구문 우선 적용, 단어 단위 매칭
  • WEBVTT 헤더, 타임스탬프, 빈 줄은 그대로 유지

기본 경로 (실행 파일 위치 기준):
  american_spellings.json
  files/English-vtt-files/   → files/British-vtt-files/
  files/conversion_log.json

예제:
  brconvert
  brconvert --root ./project
  brconvert -i ./subs -o ./subs_uk --dry-run --verbose
"#
)]
pub struct Args {
    /// 기본 경로의 기준 폴더 (기본값: 실행 파일이 있는 폴더)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// 미국식 → 영국식 철자 사전 (JSON)
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,

    /// 원본 자막 파일 폴더
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 변환된 자막 파일 폴더
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 변환 로그 파일 경로
    #[arg(short, long)]
    pub log: Option<PathBuf>,

    /// 처리할 파일 접미사
    #[arg(long, default_value = DEFAULT_SOURCE_SUFFIX)]
    pub source_suffix: String,

    /// 출력 파일 접미사
    #[arg(long, default_value = DEFAULT_TARGET_SUFFIX)]
    pub target_suffix: String,

    /// 파일을 쓰지 않고 변경 사항만 확인
    #[arg(long)]
    pub dry_run: bool,

    /// 상세 출력 모드 (변경 사항마다 출력)
    #[arg(short, long)]
    pub verbose: bool,
}

/// 확정된 경로 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub dictionary: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Args {
    /// 주어진 루트를 기준으로 경로 확정
    ///
    /// 명시된 경로는 그대로, 생략된 경로는 루트 아래 기본값을 사용합니다.
    pub fn paths_from(&self, root: &Path) -> Paths {
        let root = self.root.as_deref().unwrap_or(root);
        let pick = |explicit: &Option<PathBuf>, default: &str| {
            explicit.clone().unwrap_or_else(|| root.join(default))
        };

        Paths {
            dictionary: pick(&self.dictionary, DEFAULT_DICTIONARY),
            input_dir: pick(&self.input, DEFAULT_INPUT_DIR),
            output_dir: pick(&self.output, DEFAULT_OUTPUT_DIR),
            log_file: pick(&self.log, DEFAULT_LOG_FILE),
        }
    }

    /// 실행 파일 위치를 기준으로 경로 확정
    pub fn resolve_paths(&self) -> Result<Paths> {
        if self.root.is_some() {
            return Ok(self.paths_from(Path::new(".")));
        }
        Ok(self.paths_from(&program_dir()?))
    }
}

/// 실행 파일이 있는 폴더
pub fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| BrConvertError::ProgramLocation {
        reason: e.to_string(),
    })?;

    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| BrConvertError::ProgramLocation {
            reason: format!("상위 폴더가 없습니다: {:?}", exe),
        })
}
