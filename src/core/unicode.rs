//! 유니코드 한글 음절 조합/분해 산술

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 완성형 음절 전체 개수 (19 * 21 * 28)
pub const SYLLABLE_COUNT: u32 = CHOSEONG_COUNT * JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// 호환용 단일 자음 영역 (ㄱ ~ ㅎ, 30자)
const CONSONANT_AREA: (u32, u32) = (0x3131, 0x314E);
/// 호환용 단일 모음 영역 (ㅏ ~ ㅣ, 21자)
const VOWEL_AREA: (u32, u32) = (0x314F, 0x3163);

/// 초성/중성/종성 인덱스로 완성된 한글 음절 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let offset = syllable_offset(c)?;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 음절 블록 내 오프셋 (블록 밖이면 None)
fn syllable_offset(c: char) -> Option<u32> {
    let offset = (c as u32).checked_sub(HANGUL_SYLLABLE_BASE)?;
    (offset < SYLLABLE_COUNT).then_some(offset)
}

/// 완성형 한글(가-힣)인지 확인
pub fn is_syllable(c: char) -> bool {
    syllable_offset(c).is_some()
}

/// 호환용 단일 자음 영역의 순번 (ㄱ = 0, ㅎ = 29)
pub fn standalone_consonant_offset(c: char) -> Option<usize> {
    area_offset(c, CONSONANT_AREA)
}

/// 호환용 단일 모음 영역의 순번 (ㅏ = 0, ㅣ = 20)
pub fn standalone_vowel_offset(c: char) -> Option<usize> {
    area_offset(c, VOWEL_AREA)
}

fn area_offset(c: char, (start, end): (u32, u32)) -> Option<usize> {
    let cp = c as u32;
    (start..=end).contains(&cp).then(|| (cp - start) as usize)
}

/// 단독 자음 문자인지 확인
pub fn is_standalone_consonant(c: char) -> bool {
    standalone_consonant_offset(c).is_some()
}

/// 단독 모음 문자인지 확인
pub fn is_standalone_vowel(c: char) -> bool {
    standalone_vowel_offset(c).is_some()
}

/// 완성형 음절 또는 호환용 자모인지 확인
pub fn is_hangul(c: char) -> bool {
    is_syllable(c) || is_standalone_consonant(c) || is_standalone_vowel(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_syllable() {
        // 가 = 초성 ㄱ(0) + 중성 ㅏ(0) + 종성 없음(0)
        assert_eq!(compose_syllable(0, 0, 0), Some('가'));
        // 각 = 초성 ㄱ(0) + 중성 ㅏ(0) + 종성 ㄱ(1)
        assert_eq!(compose_syllable(0, 0, 1), Some('각'));
        // 닭 = 초성 ㄷ(3) + 중성 ㅏ(0) + 종성 ㄺ(9)
        assert_eq!(compose_syllable(3, 0, 9), Some('닭'));
        // 힣 = 마지막 음절
        assert_eq!(compose_syllable(18, 20, 27), Some('힣'));

        // 범위 밖 인덱스
        assert_eq!(compose_syllable(19, 0, 0), None);
        assert_eq!(compose_syllable(0, 21, 0), None);
        assert_eq!(compose_syllable(0, 0, 28), None);
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('한'), Some((18, 0, 4)));
        assert_eq!(decompose_syllable('힣'), Some((18, 20, 27)));

        // 한글이 아닌 문자
        assert_eq!(decompose_syllable('a'), None);
        assert_eq!(decompose_syllable('ㄱ'), None);
        // 음절 블록 바로 다음 코드포인트
        assert_eq!(decompose_syllable('\u{D7A4}'), None);
    }

    #[test]
    fn test_compose_decompose_all_triples() {
        for cho in 0..CHOSEONG_COUNT {
            for jung in 0..JUNGSEONG_COUNT {
                for jong in 0..JONGSEONG_COUNT {
                    let c = compose_syllable(cho, jung, jong).unwrap();
                    assert_eq!(decompose_syllable(c), Some((cho, jung, jong)));
                }
            }
        }
    }

    #[test]
    fn test_standalone_areas() {
        assert_eq!(standalone_consonant_offset('ㄱ'), Some(0));
        assert_eq!(standalone_consonant_offset('ㄳ'), Some(2));
        assert_eq!(standalone_consonant_offset('ㅎ'), Some(29));
        assert_eq!(standalone_consonant_offset('ㅏ'), None);

        assert_eq!(standalone_vowel_offset('ㅏ'), Some(0));
        assert_eq!(standalone_vowel_offset('ㅣ'), Some(20));
        assert_eq!(standalone_vowel_offset('ㅎ'), None);
        // 옛한글 호환 자모는 범위 밖
        assert!(!is_hangul('\u{3164}'));
    }

    #[test]
    fn test_is_hangul() {
        assert!(is_hangul('가'));
        assert!(is_hangul('ㄸ'));
        assert!(is_hangul('ㅢ'));
        assert!(!is_hangul('a'));
        assert!(!is_hangul('1'));
    }
}
