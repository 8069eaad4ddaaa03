use serde_json::{json, Value};

/// The canonical single-entry dataset
pub fn love_dataset() -> Value {
    json!([{"kanji": "愛", "kunyomi": ["あい"], "onyomi": ["アイ"]}])
}

/// A few entries with extra fields, empty readings and a missing list
pub fn mixed_dataset() -> Value {
    json!([
        {
            "id": 1,
            "kanji": "生",
            "meaning": ["life", "birth"],
            "kunyomi": ["い.きる", "  ", "う.まれる"],
            "onyomi": ["セイ", "ショウ"],
            "jlpt": 5
        },
        {
            "id": 2,
            "kanji": "木",
            "kunyomi": ["き", ""],
            "onyomi": ["ボク", "モク"],
            "strokes": {"count": 4}
        },
        {
            "id": 3,
            "kanji": "〆",
            "kunyomi": ["しめ"],
            "onyomi": null
        }
    ])
}
