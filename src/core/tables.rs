//! 두벌식 자판 니모닉 코드표와 역방향 인덱스
//!
//! 초성(19), 중성(21), 종성(28), 단일 자음(30) 니모닉 배열과
//! 호환용 자모 코드포인트 배열을 보관합니다. 영문 → 한글 방향에서 사용하는
//! 니모닉 → 인덱스 맵은 프로세스 수명 동안 한 번만 만들어집니다.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// 초성 니모닉 (19)
/// ㄱ ㄲ ㄴ ㄷ ㄸ ㄹ ㅁ ㅂ ㅃ ㅅ ㅆ ㅇ ㅈ ㅉ ㅊ ㅋ ㅌ ㅍ ㅎ
#[rustfmt::skip]
pub const CHOSEONG_MNEMONICS: [&str; 19] = [
    "r", "R", "s", "e", "E",
    "f", "a", "q", "Q", "t",
    "T", "d", "w", "W", "c",
    "z", "x", "v", "g",
];

/// 중성 니모닉 (21), 단일 키 10개 + 두 키 조합 11개
/// ㅏ ㅐ ㅑ ㅒ ㅓ ㅔ ㅕ ㅖ ㅗ ㅘ ㅙ ㅚ ㅛ ㅜ ㅝ ㅞ ㅟ ㅠ ㅡ ㅢ ㅣ
#[rustfmt::skip]
pub const JUNGSEONG_MNEMONICS: [&str; 21] = [
    "k", "o", "i", "O", "j",
    "p", "u", "P", "h", "hk",
    "ho", "hl", "y", "n", "nj",
    "np", "nl", "b", "m", "ml",
    "l",
];

/// 종성 니모닉 (1 + 27), 0번은 종성 없음
/// 없음 ㄱ ㄲ ㄳ ㄴ ㄵ ㄶ ㄷ ㄹ ㄺ ㄻ ㄼ ㄽ ㄾ ㄿ ㅀ ㅁ ㅂ ㅄ ㅅ ㅆ ㅇ ㅈ ㅊ ㅋ ㅌ ㅍ ㅎ
#[rustfmt::skip]
pub const JONGSEONG_MNEMONICS: [&str; 28] = [
    "", "r", "R", "rt", "s",
    "sw", "sg", "e", "f", "fr",
    "fa", "fq", "ft", "fx", "fv",
    "fg", "a", "q", "qt", "t",
    "T", "d", "w", "c", "z",
    "x", "v", "g",
];

/// 단일 자음 니모닉 (30), 호환용 자모 ㄱ(U+3131) ~ ㅎ(U+314E) 순서
/// ㄸ, ㅃ, ㅉ 처럼 종성에 올 수 없는 자음도 포함
#[rustfmt::skip]
pub const STANDALONE_CONSONANT_MNEMONICS: [&str; 30] = [
    "r", "R", "rt", "s", "sw",
    "sg", "e", "E", "f", "fr",
    "fa", "fq", "ft", "fx", "fv",
    "fg", "a", "q", "Q", "qt",
    "t", "T", "d", "w", "W",
    "c", "z", "x", "v", "g",
];

/// 초성 호환용 자모 (19)
#[rustfmt::skip]
const CHOSEONG_JAMO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ',
    'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 호환용 자모 (21): ㅏ(U+314F) ~ ㅣ(U+3163)
#[rustfmt::skip]
const JUNGSEONG_JAMO: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ',
    'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ',
    'ㅣ',
];

/// 종성 호환용 자모 (28), 0번 자리는 사용하지 않음
#[rustfmt::skip]
const JONGSEONG_JAMO: [char; 28] = [
    '\0', 'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ',
    'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ',
    'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ',
    'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// 음절 구성 요소 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonemeClass {
    Choseong,
    Jungseong,
    Jongseong,
}

impl fmt::Display for PhonemeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhonemeClass::Choseong => write!(f, "초성"),
            PhonemeClass::Jungseong => write!(f, "중성"),
            PhonemeClass::Jongseong => write!(f, "종성"),
        }
    }
}

/// 코드표 생성 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// 같은 분류 안에 동일한 니모닉이 두 번 등장
    DuplicateMnemonic {
        class: PhonemeClass,
        mnemonic: String,
        first: usize,
        second: usize,
    },
    /// 분류별 배열 길이가 음절 산술(19/21/28)과 다름
    WrongSize {
        class: PhonemeClass,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::DuplicateMnemonic {
                class,
                mnemonic,
                first,
                second,
            } => write!(
                f,
                "{} 니모닉 중복: \"{}\" ({}번, {}번)",
                class, mnemonic, first, second
            ),
            TableError::WrongSize {
                class,
                expected,
                actual,
            } => write!(f, "{} 코드표 크기 오류: {}개 필요, {}개 입력", class, expected, actual),
        }
    }
}

impl std::error::Error for TableError {}

/// 니모닉 코드표와 역방향 인덱스
#[derive(Debug, Clone)]
pub struct MnemonicTables {
    choseong: &'static [&'static str],
    jungseong: &'static [&'static str],
    jongseong: &'static [&'static str],
    choseong_index: HashMap<&'static str, usize>,
    jungseong_index: HashMap<&'static str, usize>,
    jongseong_index: HashMap<&'static str, usize>,
}

impl MnemonicTables {
    /// 기본 두벌식 코드표로 생성
    pub fn build() -> Result<Self, TableError> {
        Self::from_arrays(&CHOSEONG_MNEMONICS, &JUNGSEONG_MNEMONICS, &JONGSEONG_MNEMONICS)
    }

    /// 임의의 니모닉 배열로 생성
    ///
    /// 배열 순서가 곧 음절 인덱스입니다. 배열 길이가 19/21/28이 아니거나
    /// 같은 분류 안에서 니모닉이 중복되면 변환을 시작하기 전에 실패합니다.
    pub fn from_arrays(
        choseong: &'static [&'static str],
        jungseong: &'static [&'static str],
        jongseong: &'static [&'static str],
    ) -> Result<Self, TableError> {
        check_size(PhonemeClass::Choseong, choseong, CHOSEONG_JAMO.len())?;
        check_size(PhonemeClass::Jungseong, jungseong, JUNGSEONG_JAMO.len())?;
        check_size(PhonemeClass::Jongseong, jongseong, JONGSEONG_JAMO.len())?;

        let tables = Self {
            choseong,
            jungseong,
            jongseong,
            choseong_index: build_index(PhonemeClass::Choseong, choseong)?,
            jungseong_index: build_index(PhonemeClass::Jungseong, jungseong)?,
            jongseong_index: build_index(PhonemeClass::Jongseong, jongseong)?,
        };
        log::debug!(
            "코드표 생성 완료: 초성 {}, 중성 {}, 종성 {}",
            tables.choseong_index.len(),
            tables.jungseong_index.len(),
            tables.jongseong_index.len()
        );
        Ok(tables)
    }

    /// 초성 니모닉 → 초성 인덱스
    pub fn leading(&self, mnemonic: &str) -> Option<usize> {
        self.choseong_index.get(mnemonic).copied()
    }

    /// 중성 니모닉 → 중성 인덱스
    pub fn vowel(&self, mnemonic: &str) -> Option<usize> {
        self.jungseong_index.get(mnemonic).copied()
    }

    /// 종성 니모닉 → 종성 인덱스 (빈 문자열은 매칭하지 않음)
    pub fn trailing(&self, mnemonic: &str) -> Option<usize> {
        self.jongseong_index.get(mnemonic).copied()
    }

    pub fn leading_mnemonic(&self, index: usize) -> Option<&'static str> {
        self.choseong.get(index).copied()
    }

    pub fn vowel_mnemonic(&self, index: usize) -> Option<&'static str> {
        self.jungseong.get(index).copied()
    }

    /// 종성 인덱스 → 니모닉 (0번은 빈 문자열)
    pub fn trailing_mnemonic(&self, index: usize) -> Option<&'static str> {
        self.jongseong.get(index).copied()
    }

    /// 단일 자음 순번 → 니모닉 (30자 표)
    /// 호환용 자모 영역 순서에 고정된 표라 사용자 배열과 무관
    pub fn standalone_consonant_mnemonic(&self, offset: usize) -> Option<&'static str> {
        STANDALONE_CONSONANT_MNEMONICS.get(offset).copied()
    }

    /// 초성 인덱스 → 호환용 자모
    pub fn leading_jamo(&self, index: usize) -> Option<char> {
        CHOSEONG_JAMO.get(index).copied()
    }

    /// 중성 인덱스 → 호환용 자모
    pub fn vowel_jamo(&self, index: usize) -> Option<char> {
        JUNGSEONG_JAMO.get(index).copied()
    }

    /// 종성 인덱스 → 호환용 자모 (종성 없음이면 None)
    pub fn trailing_jamo(&self, index: usize) -> Option<char> {
        match index {
            0 => None,
            _ => JONGSEONG_JAMO.get(index).copied(),
        }
    }
}

/// 배열 길이가 호환용 자모 표와 같은지 확인
fn check_size(class: PhonemeClass, mnemonics: &[&str], expected: usize) -> Result<(), TableError> {
    if mnemonics.len() != expected {
        return Err(TableError::WrongSize {
            class,
            expected,
            actual: mnemonics.len(),
        });
    }
    Ok(())
}

/// 분류별 니모닉 → 인덱스 맵 생성
fn build_index(
    class: PhonemeClass,
    mnemonics: &'static [&'static str],
) -> Result<HashMap<&'static str, usize>, TableError> {
    let mut index = HashMap::with_capacity(mnemonics.len());
    for (i, &mnemonic) in mnemonics.iter().enumerate() {
        // 종성 0번 자리(종성 없음)는 입력으로 매칭되지 않음
        if mnemonic.is_empty() {
            continue;
        }
        if let Some(first) = index.insert(mnemonic, i) {
            return Err(TableError::DuplicateMnemonic {
                class,
                mnemonic: mnemonic.to_string(),
                first,
                second: i,
            });
        }
    }
    Ok(index)
}

/// 기본 코드표 (최초 접근 시 1회 생성, 이후 읽기 전용)
static TABLES: LazyLock<MnemonicTables> = LazyLock::new(|| match MnemonicTables::build() {
    Ok(tables) => tables,
    Err(e) => {
        log::error!("코드표 생성 실패: {}", e);
        panic!("코드표 생성 실패: {}", e);
    }
});

/// 프로세스 전역 기본 코드표
pub fn tables() -> &'static MnemonicTables {
    &TABLES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_build() {
        let tables = MnemonicTables::build().unwrap();
        assert_eq!(tables.leading("r"), Some(0));
        assert_eq!(tables.leading("g"), Some(18));
        assert_eq!(tables.vowel("k"), Some(0));
        assert_eq!(tables.vowel("ml"), Some(19));
        assert_eq!(tables.trailing("fr"), Some(9));
        assert_eq!(tables.trailing("g"), Some(27));
    }

    #[test]
    fn test_case_sensitive_lookup() {
        let tables = tables();
        assert_eq!(tables.leading("R"), Some(1)); // ㄲ
        assert_eq!(tables.leading("K"), None);
        assert_eq!(tables.vowel("O"), Some(3)); // ㅒ
        assert_eq!(tables.trailing("E"), None); // ㄸ은 종성 불가
    }

    #[test]
    fn test_empty_trailing_not_indexed() {
        assert_eq!(tables().trailing(""), None);
        assert_eq!(tables().trailing_mnemonic(0), Some(""));
    }

    #[test]
    fn test_vowel_mnemonic_shape() {
        let single = JUNGSEONG_MNEMONICS.iter().filter(|m| m.len() == 1).count();
        let double = JUNGSEONG_MNEMONICS.iter().filter(|m| m.len() == 2).count();
        assert_eq!(single, 10);
        assert_eq!(double, 11);
    }

    #[test]
    fn test_standalone_table_matches_jamo_order() {
        // 단일 자음 표의 니모닉은 초성 또는 종성 표의 같은 자모와 일치해야 함
        let tables = tables();
        for (i, &mnemonic) in CHOSEONG_MNEMONICS.iter().enumerate() {
            let jamo = tables.leading_jamo(i).unwrap();
            let offset = (jamo as u32 - 0x3131) as usize;
            assert_eq!(STANDALONE_CONSONANT_MNEMONICS[offset], mnemonic);
        }
        for (i, &mnemonic) in JONGSEONG_MNEMONICS.iter().enumerate().skip(1) {
            let jamo = tables.trailing_jamo(i).unwrap();
            let offset = (jamo as u32 - 0x3131) as usize;
            assert_eq!(STANDALONE_CONSONANT_MNEMONICS[offset], mnemonic);
        }
    }

    #[test]
    fn test_duplicate_mnemonic_rejected() {
        #[rustfmt::skip]
        static DUP_JUNG: [&str; 21] = [
            "k", "o", "i", "O", "j",
            "p", "u", "P", "h", "hk",
            "ho", "hl", "y", "n", "nj",
            "np", "nl", "b", "m", "ml",
            "k",
        ];
        let result = MnemonicTables::from_arrays(&CHOSEONG_MNEMONICS, &DUP_JUNG, &JONGSEONG_MNEMONICS);
        assert_eq!(
            result.unwrap_err(),
            TableError::DuplicateMnemonic {
                class: PhonemeClass::Jungseong,
                mnemonic: "k".to_string(),
                first: 0,
                second: 20,
            }
        );
    }

    #[test]
    fn test_duplicate_choseong_rejected() {
        // ㅎ 자리에 ㄱ 니모닉
        #[rustfmt::skip]
        static DUP_CHO: [&str; 19] = [
            "r", "R", "s", "e", "E",
            "f", "a", "q", "Q", "t",
            "T", "d", "w", "W", "c",
            "z", "x", "v", "r",
        ];
        let result = MnemonicTables::from_arrays(&DUP_CHO, &JUNGSEONG_MNEMONICS, &JONGSEONG_MNEMONICS);
        assert_eq!(
            result.unwrap_err(),
            TableError::DuplicateMnemonic {
                class: PhonemeClass::Choseong,
                mnemonic: "r".to_string(),
                first: 0,
                second: 18,
            }
        );
    }

    #[test]
    fn test_duplicate_jongseong_rejected_but_empty_slot_skipped() {
        // 0번 빈 자리는 인덱스에서 제외되어 기본 표는 생성됨
        assert!(MnemonicTables::from_arrays(&CHOSEONG_MNEMONICS, &JUNGSEONG_MNEMONICS, &JONGSEONG_MNEMONICS).is_ok());

        // ㅎ 자리에 ㄺ 니모닉
        #[rustfmt::skip]
        static DUP_JONG: [&str; 28] = [
            "", "r", "R", "rt", "s",
            "sw", "sg", "e", "f", "fr",
            "fa", "fq", "ft", "fx", "fv",
            "fg", "a", "q", "qt", "t",
            "T", "d", "w", "c", "z",
            "x", "v", "fr",
        ];
        let result = MnemonicTables::from_arrays(&CHOSEONG_MNEMONICS, &JUNGSEONG_MNEMONICS, &DUP_JONG);
        assert_eq!(
            result.unwrap_err(),
            TableError::DuplicateMnemonic {
                class: PhonemeClass::Jongseong,
                mnemonic: "fr".to_string(),
                first: 9,
                second: 27,
            }
        );
    }

    #[test]
    fn test_wrong_size_rejected() {
        // 20번째 초성은 음절로 조합할 수 없음
        #[rustfmt::skip]
        static LONG_CHO: [&str; 20] = [
            "r", "R", "s", "e", "E",
            "f", "a", "q", "Q", "t",
            "T", "d", "w", "W", "c",
            "z", "x", "v", "g", "K",
        ];
        let result = MnemonicTables::from_arrays(&LONG_CHO, &JUNGSEONG_MNEMONICS, &JONGSEONG_MNEMONICS);
        assert_eq!(
            result.unwrap_err(),
            TableError::WrongSize {
                class: PhonemeClass::Choseong,
                expected: 19,
                actual: 20,
            }
        );

        static SHORT_JUNG: [&str; 3] = ["k", "o", "i"];
        let result = MnemonicTables::from_arrays(&CHOSEONG_MNEMONICS, &SHORT_JUNG, &JONGSEONG_MNEMONICS);
        assert!(matches!(
            result,
            Err(TableError::WrongSize {
                class: PhonemeClass::Jungseong,
                expected: 21,
                actual: 3,
            })
        ));

        static JONG: [&str; 28] = JONGSEONG_MNEMONICS;
        let result = MnemonicTables::from_arrays(&CHOSEONG_MNEMONICS, &JUNGSEONG_MNEMONICS, &JONG[1..]);
        assert!(matches!(
            result,
            Err(TableError::WrongSize {
                class: PhonemeClass::Jongseong,
                expected: 28,
                actual: 27,
            })
        ));
    }

    #[test]
    fn test_duplicate_error_display() {
        let err = TableError::DuplicateMnemonic {
            class: PhonemeClass::Choseong,
            mnemonic: "r".into(),
            first: 0,
            second: 5,
        };
        assert_eq!(err.to_string(), "초성 니모닉 중복: \"r\" (0번, 5번)");

        let err = TableError::WrongSize {
            class: PhonemeClass::Jongseong,
            expected: 28,
            actual: 27,
        };
        assert_eq!(err.to_string(), "종성 코드표 크기 오류: 28개 필요, 27개 입력");
    }

    #[test]
    fn test_jamo_accessors() {
        let tables = tables();
        assert_eq!(tables.leading_jamo(4), Some('ㄸ'));
        assert_eq!(tables.vowel_jamo(20), Some('ㅣ'));
        assert_eq!(tables.trailing_jamo(0), None);
        assert_eq!(tables.trailing_jamo(18), Some('ㅄ'));
        assert_eq!(tables.leading_jamo(19), None);
    }
}
