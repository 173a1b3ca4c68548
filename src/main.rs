//! kanagrade - 일본어 단어 답안 채점 CLI

use kanagrade::{display_canonical_reading, load_config, Grader, QuizMode, WordRecord};
use std::process::ExitCode;

const USAGE: &str = "\
사용법:
  kanagrade show <가나>
  kanagrade reading <가나> <답안>
  kanagrade meaning <답안> <뜻> [대체 뜻]";

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력, RUST_LOG 로 조정)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let grader = Grader::with_config(load_config());
    log::debug!("채점 설정: {:?}", grader.config());

    let (record, mode, answer) = match args.as_slice() {
        ["show", kana] => {
            println!("{}", display_canonical_reading(kana));
            return ExitCode::SUCCESS;
        }
        ["reading", kana, answer] => (
            WordRecord::new("", kana, "", ""),
            QuizMode::Reading,
            *answer,
        ),
        ["meaning", answer, meaning] => (
            WordRecord::new("", "", meaning, ""),
            QuizMode::Meaning,
            *answer,
        ),
        ["meaning", answer, meaning, alt] => (
            WordRecord::new("", "", meaning, alt),
            QuizMode::Meaning,
            *answer,
        ),
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    let verdict = grader.grade(&record, mode, answer);
    println!("{}", verdict.message);

    if verdict.correct {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
