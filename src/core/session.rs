//! 키 입력 세션
//!
//! 키보드에서 한 키씩 들어오는 입력을 받아 화면에 보일 텍스트를 관리합니다.
//! 한글 모드에서는 마지막 글자를 니모닉으로 되돌린 뒤 새 키를 붙여 다시
//! 변환하므로, 조합 상태를 따로 들고 있지 않습니다.

use serde::{Deserialize, Serialize};

use crate::config::KorconvConfig;
use crate::core::converter::{to_hangul_with, to_mnemonic};
use crate::core::unicode::is_hangul;

/// 입력 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    English,
    Korean,
}

impl InputMode {
    /// 반대 모드
    pub fn toggled(self) -> Self {
        match self {
            InputMode::English => InputMode::Korean,
            InputMode::Korean => InputMode::English,
        }
    }
}

/// 키 입력 세션
#[derive(Debug, Clone, Default)]
pub struct InputSession {
    text: String,
    mode: InputMode,
    allow_compound: bool,
}

impl InputSession {
    pub fn new(mode: InputMode) -> Self {
        Self {
            text: String::new(),
            mode,
            allow_compound: false,
        }
    }

    /// 설정값으로 세션 생성
    pub fn from_config(config: &KorconvConfig) -> Self {
        Self::new(config.initial_mode).with_compound(config.allow_compound_consonant)
    }

    /// 모음 없는 복합 자음(ㄳ, ㅄ 등) 인식 여부 설정
    pub fn with_compound(mut self, allow: bool) -> Self {
        self.allow_compound = allow;
        self
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        log::debug!("입력 모드 변경: {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }

    /// 한/영 전환
    pub fn toggle_mode(&mut self) -> InputMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// 현재 화면 텍스트
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 텍스트를 확정하여 꺼내고 세션 비우기
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    /// 키 하나 입력
    ///
    /// 한글 모드의 문자 키는 영문 니모닉 또는 자모 레이블 모두 받습니다.
    /// 숫자, 공백, 기호는 모드와 무관하게 그대로 붙습니다.
    pub fn press(&mut self, key: char) -> &str {
        if self.mode == InputMode::English || !key.is_alphabetic() {
            self.text.push(key);
            return &self.text;
        }

        // 자모 레이블 키는 니모닉으로, 영문 키는 그대로
        let key_mnemonic = to_mnemonic(key.encode_utf8(&mut [0; 4]));

        let mut run = match self.pop_hangul_tail() {
            Some(tail) => to_mnemonic(tail.encode_utf8(&mut [0; 4])),
            None => String::new(),
        };
        run.push_str(&key_mnemonic);

        let converted = to_hangul_with(&run, self.allow_compound);
        log::trace!("키 입력 {:?}: {} -> {}", key, run, converted);
        self.text.push_str(&converted);
        &self.text
    }

    /// 한 단위 지우기
    ///
    /// 한글 모드에서 마지막 글자가 한글이면 니모닉 한 글자만 지우고 다시
    /// 변환합니다 (닭 -> 달, 가 -> ㄱ). 그 외에는 글자 하나를 지웁니다.
    pub fn backspace(&mut self) -> &str {
        let Some(tail) = self.text.pop() else {
            return &self.text;
        };

        if self.mode == InputMode::Korean && is_hangul(tail) {
            let mut run = to_mnemonic(tail.encode_utf8(&mut [0; 4]));
            run.pop();
            let converted = to_hangul_with(&run, self.allow_compound);
            self.text.push_str(&converted);
        }
        &self.text
    }

    /// 마지막 글자가 한글이면 떼어내 반환
    fn pop_hangul_tail(&mut self) -> Option<char> {
        let tail = self.text.chars().next_back().filter(|&c| is_hangul(c))?;
        self.text.pop();
        Some(tail)
    }
}
