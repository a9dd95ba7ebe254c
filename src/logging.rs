//! 진단 로그 모듈
//!
//! `tracing` 기반 진단 로그를 표준 에러로 출력합니다.
//! 진행률과 요약은 표준 출력을 쓰므로 서로 섞이지 않습니다.

use tracing_subscriber::EnvFilter;

/// 로그 초기화
///
/// `RUST_LOG`가 설정되어 있으면 그 값을 따르고,
/// 없으면 상세 모드에서 `debug`, 기본은 `warn` 수준을 사용합니다.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 테스트 등에서 이미 초기화된 경우 무시
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
