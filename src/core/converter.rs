//! 영문 니모닉 <-> 한글 통합 변환기

use crate::core::decomposer::{decompose, OutputMode};
use crate::core::parser::parse;
use crate::core::tables::tables;

/// 영문 문자열을 한글 문자열로 변환
/// 변환할 수 없는 문자(숫자, 특수문자, 매핑 없는 영문)는 그대로 유지
pub fn to_hangul(input: &str) -> String {
    to_hangul_with(input, false)
}

/// 영문 문자열을 한글로 변환
/// `allow_compound`가 true이면 모음 없이 입력된 ㄳ, ㅄ 등을 복합 자음 하나로 출력
pub fn to_hangul_with(input: &str, allow_compound: bool) -> String {
    parse(tables(), input, allow_compound)
}

/// 한글 문자열을 두벌식 영문 키 시퀀스로 역변환
pub fn to_mnemonic(input: &str) -> String {
    decompose(tables(), input, OutputMode::Mnemonic)
}

/// 한글 문자열을 호환용 자모 나열로 분해
pub fn to_jamo_sequence(input: &str) -> String {
    decompose(tables(), input, OutputMode::Jamo)
}
