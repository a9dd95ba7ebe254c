//! 통합 테스트 모듈
//!
//! brconvert의 전체 기능을 테스트합니다.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use brconvert::{LineConverter, SpellingDictionary};

/// 테스트용 파일 생성 헬퍼
fn create_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// 테스트용 변환기 생성
fn converter(entries: &[(&str, &str)]) -> LineConverter {
    let dictionary = SpellingDictionary::from_entries(entries.iter().copied()).unwrap();
    LineConverter::new(&dictionary).unwrap()
}

/// 입력/출력 폴더와 사전을 갖춘 테스트 루트 생성
fn setup_project(dictionary: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    create_file(temp_dir.path(), "american_spellings.json", dictionary);

    let input = temp_dir.path().join("files/English-vtt-files");
    fs::create_dir_all(&input).unwrap();

    temp_dir
}

mod converter_tests {
    use super::*;

    #[test]
    fn test_structural_lines_never_change() {
        let c = converter(&[("webvtt", "webvtt-uk"), ("color", "colour")]);
        let content = "WEBVTT\n\n00:00:01.000 --> 00:00:04.000\n";

        let result = brconvert::convert_content(content, &c);
        assert_eq!(result.content, content);
        assert!(result.changes.is_empty());
    }

    #[test]
    fn test_longest_match_precedence() {
        let c = converter(&[("color", "colour"), ("colorize", "colourise")]);
        let result = c.convert_line("We colorize the color.", 1);

        assert_eq!(result.text, "We colourise the colour.");
        let changed: Vec<&str> = result.changes.iter().map(|c| c.changed.as_str()).collect();
        assert_eq!(changed, vec!["colourise", "colour"]);
    }

    #[test]
    fn test_grayscale_not_touched() {
        let c = converter(&[("gray", "grey")]);
        let result = c.convert_line("A grayscale image.", 1);

        assert_eq!(result.text, "A grayscale image.");
        assert!(result.changes.is_empty());
    }

    #[test]
    fn test_idempotent_on_output() {
        let c = converter(&[
            ("color", "colour"),
            ("gray", "grey"),
            ("center", "centre"),
            ("organize", "organise"),
        ]);
        let first = c.convert_line("ORGANIZE the Center: color, Gray, gray.", 4);
        let second = c.convert_line(&first.text, 4);

        assert_eq!(first.text, "ORGANISE the Centre: colour, Grey, grey.");
        assert_eq!(second.text, first.text);
        assert!(second.changes.is_empty());
    }
}

mod pipeline_tests {
    use super::*;
    use brconvert::{collect_source_files, process_files, ProcessOptions, SuffixRule};

    #[test]
    fn test_end_to_end_sample() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in");
        let output = temp_dir.path().join("out");
        fs::create_dir(&input).unwrap();
        create_file(
            &input,
            "sample_en.vtt",
            "WEBVTT\n\n00:00:01.000 --> 00:00:04.000\nThe color was gray.\n",
        );

        let c = converter(&[("color", "colour"), ("gray", "grey")]);
        let files = collect_source_files(&input, &SuffixRule::default()).unwrap();
        let log = process_files(&files, &c, &ProcessOptions::new(&output), |_| {}).unwrap();

        let converted = fs::read_to_string(output.join("sample_uk.vtt")).unwrap();
        assert_eq!(
            converted,
            "WEBVTT\n\n00:00:01.000 --> 00:00:04.000\nThe colour was grey.\n"
        );

        let entry = log.get("sample_en.vtt").unwrap();
        assert_eq!(entry.output_file, "sample_uk.vtt");
        assert_eq!(entry.changes.len(), 2);
        assert!(entry.changes.iter().all(|c| c.line == 4));

        let originals: Vec<&str> = entry.changes.iter().map(|c| c.original.as_str()).collect();
        let changed: Vec<&str> = entry.changes.iter().map(|c| c.changed.as_str()).collect();
        assert_eq!(originals, vec!["color", "gray"]);
        assert_eq!(changed, vec!["colour", "grey"]);
    }

    #[test]
    fn test_unchanged_file_still_logged() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "plain_en.vtt", "WEBVTT\n\nHello there.");
        let output = temp_dir.path().join("out");

        let c = converter(&[("color", "colour")]);
        let files = collect_source_files(temp_dir.path(), &SuffixRule::default()).unwrap();
        let log = process_files(&files, &c, &ProcessOptions::new(&output), |_| {}).unwrap();

        assert_eq!(log.file_count(), 1);
        assert!(log.get("plain_en.vtt").unwrap().changes.is_empty());
        assert_eq!(
            fs::read_to_string(output.join("plain_uk.vtt")).unwrap(),
            "WEBVTT\n\nHello there."
        );
    }

    #[test]
    fn test_other_languages_ignored() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "a_en.vtt", "color");
        create_file(temp_dir.path(), "a_bn.vtt", "color");
        create_file(temp_dir.path(), "a_en.srt", "color");

        let files = collect_source_files(temp_dir.path(), &SuffixRule::default()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_log_written_as_json() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "x_en.vtt", "COLOR");
        let output = temp_dir.path().join("out");
        let log_path = temp_dir.path().join("logs/conversion_log.json");

        let c = converter(&[("color", "colour")]);
        let files = collect_source_files(temp_dir.path(), &SuffixRule::default()).unwrap();
        let log = process_files(&files, &c, &ProcessOptions::new(&output), |_| {}).unwrap();
        log.write_to(&log_path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&log_path).unwrap()).unwrap();
        assert_eq!(value["x_en.vtt"]["outputFile"], "x_uk.vtt");
        assert_eq!(value["x_en.vtt"]["changes"][0]["original"], "COLOR");
        assert_eq!(value["x_en.vtt"]["changes"][0]["changed"], "COLOUR");
    }

    #[test]
    fn test_on_file_called_in_name_order() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "b_en.vtt", "gray");
        create_file(temp_dir.path(), "a_en.vtt", "color");

        let c = converter(&[("color", "colour"), ("gray", "grey")]);
        let files = collect_source_files(temp_dir.path(), &SuffixRule::default()).unwrap();
        let options = ProcessOptions::new(temp_dir.path().join("out")).with_dry_run(true);

        let mut seen = Vec::new();
        let log = process_files(&files, &c, &options, |r| seen.push(r.input_name.clone())).unwrap();

        assert_eq!(seen, vec!["a_en.vtt", "b_en.vtt"]);
        assert_eq!(log.total_changes(), 2);
    }
}

mod binary_tests {
    use super::*;
    use std::process::{Command, Output};

    const SAMPLE: &str = "WEBVTT\n\n00:00:01.000 --> 00:00:04.000\nThe color was gray.\n";

    /// 기본 경로 구조의 루트를 지정하여 바이너리 실행
    fn run_brconvert(root: &Path, extra: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_brconvert"))
            .arg("--root")
            .arg(root)
            .args(extra)
            .output()
            .unwrap()
    }

    fn input_dir(root: &Path) -> PathBuf {
        root.join("files/English-vtt-files")
    }

    fn output_dir(root: &Path) -> PathBuf {
        root.join("files/British-vtt-files")
    }

    fn log_file(root: &Path) -> PathBuf {
        root.join("files/conversion_log.json")
    }

    #[test]
    fn test_default_layout_end_to_end() {
        let project = setup_project(r#"{"color": "colour", "gray": "grey"}"#);
        create_file(&input_dir(project.path()), "sample_en.vtt", SAMPLE);

        let output = run_brconvert(project.path(), &[]);
        assert!(output.status.success());

        let converted = fs::read_to_string(output_dir(project.path()).join("sample_uk.vtt")).unwrap();
        assert_eq!(
            converted,
            "WEBVTT\n\n00:00:01.000 --> 00:00:04.000\nThe colour was grey.\n"
        );

        let log: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(log_file(project.path())).unwrap()).unwrap();
        let entry = &log["sample_en.vtt"];
        assert_eq!(entry["outputFile"], "sample_uk.vtt");
        assert_eq!(entry["changes"][0]["line"], 4);
        assert_eq!(entry["changes"][0]["original"], "color");
        assert_eq!(entry["changes"][0]["changed"], "colour");
        assert_eq!(entry["changes"][1]["original"], "gray");
        assert_eq!(entry["changes"][1]["changed"], "grey");
    }

    #[test]
    fn test_empty_input_overwrites_stale_log() {
        let project = setup_project(r#"{"color": "colour"}"#);
        fs::create_dir_all(project.path().join("files")).unwrap();
        create_file(
            &project.path().join("files"),
            "conversion_log.json",
            r#"{"old_en.vtt":{"outputFile":"old_uk.vtt","changes":[]}}"#,
        );

        let output = run_brconvert(project.path(), &[]);
        assert!(output.status.success());

        assert_eq!(fs::read_to_string(log_file(project.path())).unwrap(), "{}");
        assert!(output_dir(project.path()).is_dir());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let project = setup_project(r#"{"color": "colour", "gray": "grey"}"#);
        create_file(&input_dir(project.path()), "sample_en.vtt", SAMPLE);

        let output = run_brconvert(project.path(), &["--dry-run", "--verbose"]);
        assert!(output.status.success());

        assert!(!output_dir(project.path()).exists());
        assert!(!log_file(project.path()).exists());
    }

    #[test]
    fn test_missing_dictionary_fails_before_processing() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(input_dir(temp_dir.path())).unwrap();
        create_file(&input_dir(temp_dir.path()), "sample_en.vtt", SAMPLE);

        let output = run_brconvert(temp_dir.path(), &[]);
        assert!(!output.status.success());
        assert!(!output_dir(temp_dir.path()).exists());
        assert!(!log_file(temp_dir.path()).exists());
    }

    #[test]
    fn test_missing_input_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "american_spellings.json", r#"{"color": "colour"}"#);

        let output = run_brconvert(temp_dir.path(), &[]);
        assert!(!output.status.success());
        assert!(!log_file(temp_dir.path()).exists());
    }
}

mod dictionary_tests {
    use super::*;
    use brconvert::BrConvertError;

    #[test]
    fn test_load_from_project_root() {
        let project = setup_project(r#"{"color": "colour", "gray": "grey"}"#);
        let dictionary =
            SpellingDictionary::load(&project.path().join("american_spellings.json")).unwrap();

        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn test_array_document_rejected() {
        let project = setup_project(r#"[["color", "colour"]]"#);
        let result = SpellingDictionary::load(&project.path().join("american_spellings.json"));

        assert!(matches!(result, Err(BrConvertError::DictionaryParse { .. })));
    }
}

mod error_tests {
    use brconvert::BrConvertError;
    use std::path::PathBuf;

    #[test]
    fn test_error_display() {
        let error = BrConvertError::InputNotFound {
            path: PathBuf::from("/nonexistent"),
        };
        assert!(error.to_string().contains("입력 폴더를 찾을 수 없습니다"));
    }

    #[test]
    fn test_dictionary_error_display() {
        let error = BrConvertError::DictionaryParse {
            path: PathBuf::from("american_spellings.json"),
            reason: "expected value".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("철자 사전 파싱 실패"));
        assert!(msg.contains("american_spellings.json"));
    }
}

mod property_tests {
    use super::*;
    use brconvert::CasePattern;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_no_key_no_change(line in "[A-Za-z ,.!?]{0,40}") {
            let c = converter(&[("zzcolor", "zzcolour")]);
            prop_assume!(!line.to_lowercase().contains("zzcolor"));

            let result = c.convert_line(&line, 1);
            prop_assert_eq!(result.text, line);
            prop_assert!(result.changes.is_empty());
        }

        #[test]
        fn prop_case_forms(key in "[a-z]{2,10}", suffix in "[a-z]{1,4}") {
            let british = format!("{}{}", key, suffix);
            let c = converter(&[(key.as_str(), british.as_str())]);

            prop_assert_eq!(c.convert_line(&key, 1).text, british.clone());
            prop_assert_eq!(
                c.convert_line(&key.to_uppercase(), 1).text,
                british.to_uppercase()
            );

            let title = CasePattern::TitleFirst.apply(&key);
            prop_assert_eq!(
                c.convert_line(&title, 1).text,
                CasePattern::TitleFirst.apply(&british)
            );
        }

        #[test]
        fn prop_idempotent(words in proptest::collection::vec(
            prop_oneof![
                Just("color"), Just("Gray"), Just("CENTER"), Just("the"), Just("grayscale")
            ],
            0..12,
        )) {
            let c = converter(&[("color", "colour"), ("gray", "grey"), ("center", "centre")]);
            let line = words.join(" ");

            let first = c.convert_line(&line, 1);
            let second = c.convert_line(&first.text, 1);
            prop_assert_eq!(second.text, first.text);
            prop_assert!(second.changes.is_empty());
        }
    }
}
