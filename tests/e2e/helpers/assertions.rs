use serde_json::Value;

pub const AUDIO_FIELDS: [&str; 2] = ["audioKunyomi", "audioOnyomi"];

/// Every original field is present and unchanged, and only the two audio
/// fields were added
pub fn assert_fields_preserved(input: &Value, output: &Value) {
    let input = input.as_object().expect("input entry is an object");
    let output = output.as_object().expect("output entry is an object");

    for (key, value) in input {
        assert_eq!(output.get(key), Some(value), "field '{}' changed", key);
    }

    for key in output.keys() {
        assert!(
            input.contains_key(key) || AUDIO_FIELDS.contains(&key.as_str()),
            "unexpected field '{}'",
            key
        );
    }
}

/// The audio fields come after all of the original fields
pub fn assert_audio_fields_appended(input: &Value, output: &Value) {
    let original = input.as_object().expect("input entry is an object").len();
    let keys: Vec<&str> = output
        .as_object()
        .expect("output entry is an object")
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(&keys[original..], &AUDIO_FIELDS[..]);
}

pub fn audio_paths(entry: &Value, field: &str) -> Vec<String> {
    entry
        .get(field)
        .and_then(Value::as_array)
        .unwrap_or_else(|| panic!("missing {}", field))
        .iter()
        .map(|v| v.as_str().expect("audio path is a string").to_string())
        .collect()
}
