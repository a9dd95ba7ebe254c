//! 통계 및 유틸리티 모듈
//!
//! 변환 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::pipeline::ProcessResult;

/// 변환 통계 구조체
#[derive(Debug)]
pub struct Statistics {
    /// 총 대상 파일 수
    pub total_files: usize,
    /// 처리 완료 파일 수
    pub processed_files: usize,
    /// 변경이 하나 이상 있었던 파일 수
    pub changed_files: usize,
    /// 전체 철자 변경 수
    pub total_changes: usize,
    /// 읽은 총 바이트
    pub total_bytes_read: u64,
    /// 쓴 총 바이트
    pub total_bytes_written: u64,
    /// 처리 시작 시간
    start_time: Instant,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            processed_files: 0,
            changed_files: 0,
            total_changes: 0,
            total_bytes_read: 0,
            total_bytes_written: 0,
            start_time: Instant::now(),
        }
    }

    /// 파일 처리 결과 반영
    pub fn record(&mut self, result: &ProcessResult) {
        let changes = result.entry.changes.len();

        self.processed_files += 1;
        self.total_changes += changes;
        if changes > 0 {
            self.changed_files += 1;
        }
        self.total_bytes_read += result.bytes_read;
        self.total_bytes_written += result.bytes_written;
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 변환 통계 요약 출력
    pub fn print_summary(&self, output_dir: &Path, log_path: &Path, dry_run: bool) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 변환 완료".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} 처리 파일:    {}/{}",
            "📁".bright_cyan(),
            self.processed_files.to_string().green(),
            self.total_files
        );
        println!(
            "  {} 변경 파일:    {}",
            "📝".bright_yellow(),
            self.changed_files
        );
        println!(
            "  {} 철자 변경:    {}",
            "🔤".bright_magenta(),
            self.total_changes.to_string().bright_green()
        );
        println!(
            "  {} 입력 용량:    {}",
            "📥".bright_yellow(),
            format_bytes(self.total_bytes_read)
        );

        if dry_run {
            println!(
                "  {} {}",
                "⚠️".bright_yellow(),
                "드라이런: 출력 파일과 로그를 쓰지 않았습니다".yellow()
            );
        } else {
            println!(
                "  {} 출력 용량:    {}",
                "📤".bright_magenta(),
                format_bytes(self.total_bytes_written)
            );
            println!("  {} 출력 폴더:    {:?}", "📂".bright_cyan(), output_dir);
            println!("  {} 변환 로그:    {:?}", "📄".bright_green(), log_path);
        }

        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed())
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Examples
/// ```
/// use brconvert::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 60 {
        format!("{}분 {}초", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
