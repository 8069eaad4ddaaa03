/// First code point of the katakana block that has a hiragana counterpart (ァ)
const KATAKANA_START: u32 = 0x30A1;
/// Last code point of that block (ン)
const KATAKANA_END: u32 = 0x30F3;
/// Distance between a katakana code point and its hiragana counterpart
const KANA_OFFSET: u32 = 0x60;

/// Convert katakana to hiragana so on-readings are pronounced naturally.
///
/// ァ..ン shift down by 0x60, ヴ maps to ゔ, everything else is returned
/// unchanged. Running it twice is a no-op.
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars().map(to_hiragana).collect()
}

fn to_hiragana(ch: char) -> char {
    let code = ch as u32;
    if (KATAKANA_START..=KATAKANA_END).contains(&code) {
        char::from_u32(code - KANA_OFFSET).unwrap_or(ch)
    } else if ch == 'ヴ' {
        'ゔ'
    } else {
        ch
    }
}
