//! 한글 → 영문 니모닉 / 자모 분해
//!
//! 글자마다 독립적으로 분해하므로 앞뒤 문맥을 보지 않습니다.

use crate::core::tables::MnemonicTables;
use crate::core::unicode::{decompose_syllable, standalone_consonant_offset, standalone_vowel_offset};

/// 분해 결과 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// 두벌식 영문 키 시퀀스
    Mnemonic,
    /// 호환용 자모 나열
    Jamo,
}

/// 한글 문자열 분해
///
/// - 완성형 음절: 초성/중성/종성으로 나누어 니모닉(또는 자모)을 이어 붙임
/// - 단독 자음/모음: 니모닉 모드에서는 니모닉, 자모 모드에서는 그대로
/// - 그 외 문자: 그대로 유지
pub fn decompose(tables: &MnemonicTables, input: &str, mode: OutputMode) -> String {
    let mut result = String::with_capacity(input.len() * 2);

    for c in input.chars() {
        if let Some((cho, jung, jong)) = decompose_syllable(c) {
            push_syllable(tables, &mut result, mode, cho as usize, jung as usize, jong as usize);
            continue;
        }

        let mnemonic = match mode {
            OutputMode::Jamo => None,
            OutputMode::Mnemonic => standalone_consonant_offset(c)
                .and_then(|offset| tables.standalone_consonant_mnemonic(offset))
                .or_else(|| standalone_vowel_offset(c).and_then(|offset| tables.vowel_mnemonic(offset))),
        };

        match mnemonic {
            Some(m) => result.push_str(m),
            None => result.push(c),
        }
    }

    result
}

fn push_syllable(
    tables: &MnemonicTables,
    result: &mut String,
    mode: OutputMode,
    cho: usize,
    jung: usize,
    jong: usize,
) {
    match mode {
        OutputMode::Mnemonic => {
            for part in [
                tables.leading_mnemonic(cho),
                tables.vowel_mnemonic(jung),
                tables.trailing_mnemonic(jong),
            ]
            .into_iter()
            .flatten()
            {
                result.push_str(part);
            }
        }
        OutputMode::Jamo => {
            // 종성 없음(0)은 trailing_jamo가 None
            for part in [tables.leading_jamo(cho), tables.vowel_jamo(jung), tables.trailing_jamo(jong)]
                .into_iter()
                .flatten()
            {
                result.push(part);
            }
        }
    }
}
