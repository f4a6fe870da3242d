//! korconv - 두벌식 영문 니모닉 <-> 한글 변환 CLI

use korconv::config::load_config;
use korconv::{to_hangul_with, to_jamo_sequence, to_mnemonic, InputSession};
use std::io::{self, BufRead};
use std::process::ExitCode;

const USAGE: &str = "사용법: korconv [--compound] <hangul|mnemonic|jamo|type> [--compound] [TEXT...]";

/// 복합 자음 옵션 (TEXT 앞이면 어디든 허용)
const COMPOUND_FLAG: &str = "--compound";

/// 실행할 변환 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// 영문 니모닉 -> 한글
    Hangul,
    /// 한글 -> 영문 니모닉
    Mnemonic,
    /// 한글 -> 자모 나열
    Jamo,
    /// 글자 하나하나를 키 입력으로 재생
    Type,
}

impl Command {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "hangul" => Some(Command::Hangul),
            "mnemonic" => Some(Command::Mnemonic),
            "jamo" => Some(Command::Jamo),
            "type" => Some(Command::Type),
            _ => None,
        }
    }
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut config = load_config();

    let Some(invocation) = parse_args(std::env::args().skip(1)) else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };
    config.allow_compound_consonant |= invocation.compound;
    let command = invocation.command;

    let convert = |line: &str| -> String {
        match command {
            Command::Hangul => to_hangul_with(line, config.allow_compound_consonant),
            Command::Mnemonic => to_mnemonic(line),
            Command::Jamo => to_jamo_sequence(line),
            Command::Type => replay_keys(&InputSession::from_config(&config), line),
        }
    };

    let text = invocation.text;
    if !text.is_empty() {
        println!("{}", convert(&text.join(" ")));
        return ExitCode::SUCCESS;
    }

    // 인자가 없으면 표준 입력을 한 줄씩 변환
    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => println!("{}", convert(&line)),
            Err(e) => {
                log::error!("표준 입력 읽기 실패: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

/// 명령줄 해석 결과
#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    command: Command,
    compound: bool,
    text: Vec<String>,
}

/// 명령줄 해석: 명령 앞뒤의 `--compound`는 옵션, 첫 TEXT 이후는 모두 텍스트
fn parse_args(args: impl IntoIterator<Item = String>) -> Option<Invocation> {
    let mut args = args.into_iter().peekable();
    let mut compound = take_compound_flags(&mut args);
    let command = args.next().as_deref().and_then(Command::parse)?;
    compound |= take_compound_flags(&mut args);

    Some(Invocation {
        command,
        compound,
        text: args.collect(),
    })
}

/// 연속된 `--compound`를 소비하고, 하나라도 있었는지 반환
fn take_compound_flags<I: Iterator<Item = String>>(args: &mut std::iter::Peekable<I>) -> bool {
    let mut found = false;
    while args.next_if(|arg| arg == COMPOUND_FLAG).is_some() {
        found = true;
    }
    found
}

/// 입력 문자열을 키 입력으로 재생 (\x08, \x7f는 백스페이스)
fn replay_keys(template: &InputSession, keys: &str) -> String {
    let mut session = template.clone();
    for key in keys.chars() {
        match key {
            '\u{8}' | '\u{7f}' => {
                session.backspace();
            }
            _ => {
                session.press(key);
            }
        }
    }
    session.take()
}
