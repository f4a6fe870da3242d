//! 영문 니모닉 → 한글 파서
//!
//! 커서 하나로 입력을 왼쪽에서 오른쪽으로 읽는 상태 기계입니다.
//! 최대 두 글자까지 앞을 내다보고, 종성 후보가 다음 음절의 초성으로
//! 쓰일 수 있으면 한 칸 물러납니다.

use crate::core::tables::MnemonicTables;
use crate::core::unicode::compose_syllable;

/// 파서 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 새 음절(또는 통과 문자) 시작 위치
    Scan,
    /// 초성 확정, 커서는 초성 다음 글자
    Leading { cho: usize, key: char },
    /// 초성+중성 확정, 커서는 중성 다음 글자
    Nucleus { cho: usize, jung: usize },
}

/// 종성 판정 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trailing {
    /// 종성 없음
    None,
    /// 한 글자 종성 (종성 인덱스)
    Single(usize),
    /// 두 글자 복합 종성 (종성 인덱스)
    Compound(usize),
}

impl Trailing {
    /// 소비하는 입력 글자 수
    pub fn width(self) -> usize {
        match self {
            Trailing::None => 0,
            Trailing::Single(_) => 1,
            Trailing::Compound(_) => 2,
        }
    }

    /// 음절 조합에 쓰는 종성 인덱스 (없으면 0)
    pub fn index(self) -> usize {
        match self {
            Trailing::None => 0,
            Trailing::Single(i) | Trailing::Compound(i) => i,
        }
    }
}

/// `at`부터 `width` 글자를 잘라 문자열로 반환 (입력 끝을 넘으면 None)
fn window(chars: &[char], at: usize, width: usize) -> Option<String> {
    let end = at.checked_add(width)?;
    chars.get(at..end).map(|w| w.iter().collect())
}

/// `at` 위치의 중성 매칭: 두 글자 조합을 먼저, 다음으로 한 글자
/// 반환: (중성 인덱스, 소비 글자 수)
pub fn match_vowel(tables: &MnemonicTables, chars: &[char], at: usize) -> Option<(usize, usize)> {
    [2, 1].into_iter().find_map(|width| {
        window(chars, at, width)
            .and_then(|key| tables.vowel(&key))
            .map(|jung| (jung, width))
    })
}

fn vowel_starts_at(tables: &MnemonicTables, chars: &[char], at: usize) -> bool {
    window(chars, at, 1).and_then(|key| tables.vowel(&key)).is_some()
}

fn trailing_at(tables: &MnemonicTables, chars: &[char], at: usize, width: usize) -> Option<usize> {
    window(chars, at, width).and_then(|key| tables.trailing(&key))
}

/// 중성 다음 위치 `at`에서 종성을 판정
///
/// 1. 두 글자 복합 종성이 맞고 바로 뒤에 모음이 없으면 복합 종성
/// 2. 복합 종성 뒤에 모음이 오면 첫 글자만 종성, 둘째 글자는 다음 음절 초성
/// 3. 복합 종성이 없고 한 글자 뒤에 모음이 오면 종성 없음
/// 4. 그 외에는 한 글자 종성, 맞지 않으면 종성 없음
pub fn decide_trailing(tables: &MnemonicTables, chars: &[char], at: usize) -> Trailing {
    if let Some(compound) = trailing_at(tables, chars, at, 2) {
        if !vowel_starts_at(tables, chars, at + 2) {
            return Trailing::Compound(compound);
        }
        // 복합 종성을 되돌리고 둘째 글자를 다음 초성으로 넘김
        return trailing_at(tables, chars, at, 1).map_or(Trailing::None, Trailing::Single);
    }

    if vowel_starts_at(tables, chars, at + 1) {
        return Trailing::None;
    }

    trailing_at(tables, chars, at, 1).map_or(Trailing::None, Trailing::Single)
}

/// 니모닉 파서
pub struct MnemonicParser<'a> {
    tables: &'a MnemonicTables,
    chars: Vec<char>,
    cursor: usize,
    /// 모음 없이 입력된 복합 자음(ㄳ, ㅄ 등) 인식 여부
    allow_compound: bool,
    output: String,
}

impl<'a> MnemonicParser<'a> {
    pub fn new(tables: &'a MnemonicTables, input: &str, allow_compound: bool) -> Self {
        Self {
            tables,
            chars: input.chars().collect(),
            cursor: 0,
            allow_compound,
            output: String::with_capacity(input.len()),
        }
    }

    /// 입력 끝까지 파싱하고 결과 반환
    pub fn run(mut self) -> String {
        let mut state = State::Scan;
        loop {
            state = match state {
                State::Scan if self.cursor >= self.chars.len() => break,
                State::Scan => self.scan(),
                State::Leading { cho, key } => self.resolve_vowel(cho, key),
                State::Nucleus { cho, jung } => self.resolve_trailing(cho, jung),
            };
        }
        self.output
    }

    /// 커서 위치 글자 분류: 통과 문자, 초성, 단독 모음
    fn scan(&mut self) -> State {
        let c = self.chars[self.cursor];

        if !c.is_ascii_alphabetic() {
            self.output.push(c);
            self.cursor += 1;
            return State::Scan;
        }

        if let Some(cho) = self.tables.leading(c.encode_utf8(&mut [0; 4])) {
            self.cursor += 1;
            return State::Leading { cho, key: c };
        }

        match match_vowel(self.tables, &self.chars, self.cursor) {
            Some((jung, width)) => {
                self.push_jamo(self.tables.vowel_jamo(jung));
                self.cursor += width;
            }
            None => {
                log::trace!("매핑 없는 영문자 통과: {:?}", c);
                self.output.push(c);
                self.cursor += 1;
            }
        }
        State::Scan
    }

    /// 초성 다음 중성 판정, 없으면 단독 자음으로 출력
    fn resolve_vowel(&mut self, cho: usize, key: char) -> State {
        if let Some((jung, width)) = match_vowel(self.tables, &self.chars, self.cursor) {
            self.cursor += width;
            return State::Nucleus { cho, jung };
        }

        self.emit_standalone_consonant(cho, key);
        State::Scan
    }

    /// 모음이 따라오지 않는 자음 출력
    /// 커서는 초성 다음 글자에 머물러, 그 글자를 새로 판정하게 함
    fn emit_standalone_consonant(&mut self, cho: usize, key: char) {
        if self.allow_compound {
            if let Some(&next) = self.chars.get(self.cursor) {
                let pair: String = [key, next].iter().collect();
                if let Some(jong) = self.tables.trailing(&pair) {
                    self.push_jamo(self.tables.trailing_jamo(jong));
                    self.cursor += 1;
                    return;
                }
            }
        }
        self.push_jamo(self.tables.leading_jamo(cho));
    }

    /// 종성 판정 후 음절 조합
    fn resolve_trailing(&mut self, cho: usize, jung: usize) -> State {
        let trailing = decide_trailing(self.tables, &self.chars, self.cursor);
        log::trace!("음절 판정 위치 {}: {:?}", self.cursor, trailing);
        self.cursor += trailing.width();

        if let Some(c) = compose_syllable(cho as u32, jung as u32, trailing.index() as u32) {
            self.output.push(c);
        }
        State::Scan
    }

    fn push_jamo(&mut self, jamo: Option<char>) {
        if let Some(c) = jamo {
            self.output.push(c);
        }
    }
}

/// 니모닉 문자열을 한글로 변환
pub fn parse(tables: &MnemonicTables, input: &str, allow_compound: bool) -> String {
    MnemonicParser::new(tables, input, allow_compound).run()
}
