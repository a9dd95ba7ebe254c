//! brconvert - AMERICAN TO BRITISH SUBTITLE CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;

use brconvert::{
    cli::{Args, Paths},
    converter::LineConverter,
    dictionary::SpellingDictionary,
    logging::init_logging,
    naming::SuffixRule,
    pipeline::{collect_source_files, process_files, ProcessOptions},
    stats::Statistics,
};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let paths = args.resolve_paths().context("경로 설정 실패")?;
    let suffix_rule = SuffixRule::new(&args.source_suffix, &args.target_suffix)?;

    // 헤더 출력
    print_header(&args, &paths, &suffix_rule);

    // 철자 사전 로딩 (실패 시 어떤 파일도 처리하지 않음)
    let dictionary = SpellingDictionary::load(&paths.dictionary)
        .with_context(|| format!("철자 사전 로딩 실패: {:?}", paths.dictionary))?;
    let converter = LineConverter::new(&dictionary)?;
    println!(
        "  {} 사전 항목 수: {}",
        "📖".bright_white(),
        converter.rule_count().to_string().bright_green()
    );

    // 자막 파일 수집
    println!("\n{}", "📁 파일 검색 중...".bright_cyan());
    let files = collect_source_files(&paths.input_dir, &suffix_rule)?;

    if files.is_empty() {
        // 빈 로그를 써서 이전 실행의 로그가 남지 않도록 계속 진행
        println!(
            "{}",
            format!("⚠️ 처리할 *{} 파일이 없습니다.", suffix_rule.source()).yellow()
        );
    } else {
        println!(
            "  {} 발견된 파일 수: {}",
            "📋".bright_white(),
            files.len().to_string().bright_green()
        );
    }

    run_conversion(&args, &paths, suffix_rule, &converter, files)
}

/// 헤더 출력
fn print_header(args: &Args, paths: &Paths, suffix_rule: &SuffixRule) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!(
        "{}",
        " 🇬🇧 AMERICAN TO BRITISH SUBTITLE CONVERTER"
            .bright_white()
            .bold()
    );
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 철자 사전: {:?}", "📖".bright_yellow(), paths.dictionary);
    println!("  {} 입력 폴더: {:?}", "📂".bright_cyan(), paths.input_dir);
    println!("  {} 출력 폴더: {:?}", "📂".bright_green(), paths.output_dir);
    println!("  {} 변환 로그: {:?}", "📄".bright_green(), paths.log_file);
    println!(
        "  {} 파일 이름: *{} → *{}",
        "🔁".bright_magenta(),
        suffix_rule.source(),
        suffix_rule.target()
    );

    if args.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "드라이런 모드 (파일 쓰기 없음)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
}

/// 변환 실행
fn run_conversion(
    args: &Args,
    paths: &Paths,
    suffix_rule: SuffixRule,
    converter: &LineConverter,
    files: Vec<PathBuf>,
) -> Result<()> {
    let mut stats = Statistics::new(files.len());
    let pb = create_progress_bar(files.len());

    let options = ProcessOptions::new(&paths.output_dir)
        .with_suffix_rule(suffix_rule)
        .with_dry_run(args.dry_run);

    if !args.dry_run {
        fs::create_dir_all(&paths.output_dir)
            .with_context(|| format!("출력 폴더 생성 실패: {:?}", paths.output_dir))?;
    }

    println!("\n{}", "⚡ 변환 중...".bright_cyan());

    let log = process_files(&files, converter, &options, |result| {
        stats.record(result);
        pb.set_message(result.input_name.clone());
        pb.inc(1);

        if args.verbose {
            pb.println(format!(
                "  {} {} → {:?}",
                "✓".green(),
                result.input_name,
                result.output_path
            ));
            for change in &result.entry.changes {
                pb.println(format!(
                    "  {} {}:{} {} → {}",
                    "•".cyan(),
                    result.input_name,
                    change.line,
                    change.original.red(),
                    change.changed.green()
                ));
            }
        }
    })?;

    pb.finish_with_message("완료!");

    // 변환 로그 저장
    if !args.dry_run {
        log.write_to(&paths.log_file)
            .with_context(|| format!("변환 로그 저장 실패: {:?}", paths.log_file))?;
        println!(
            "\n{} 변환 로그 저장: {:?}",
            "📝".bright_cyan(),
            paths.log_file
        );
    }

    // 통계 출력
    stats.print_summary(&paths.output_dir, &paths.log_file, args.dry_run);

    println!(
        "\n{} {} 개 파일에서 {} 개의 철자를 변경했습니다.\n",
        "✅".bright_green(),
        log.file_count().to_string().bright_green(),
        log.total_changes().to_string().bright_green()
    );

    Ok(())
}

/// 진행률 바 생성
fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb
}
