use crate::e2e::helpers;

use helpers::assertions::{assert_audio_fields_appended, assert_fields_preserved, audio_paths};
use helpers::fakes::mock_audio_bytes;
use helpers::fixtures::{love_dataset, mixed_dataset};
use helpers::TestContext;
use kanji_audio::domain::audio::LanguageCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_attach_audio_paths_for_both_reading_kinds(ctx: &TestContext) {
    ctx.write_input(&love_dataset()).unwrap();

    ctx.run().await.unwrap();

    let output = ctx.read_output().unwrap();
    assert_eq!(
        output,
        json!([{
            "kanji": "愛",
            "kunyomi": ["あい"],
            "onyomi": ["アイ"],
            "audioKunyomi": ["assets/audio/愛_kun_あい.mp3"],
            "audioOnyomi": ["assets/audio/愛_on_あい.mp3"]
        }])
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_synthesize_on_readings_in_hiragana(ctx: &TestContext) {
    ctx.write_input(&love_dataset()).unwrap();

    ctx.run().await.unwrap();

    assert_eq!(ctx.tts.texts(), vec!["あい", "あい"]);
    assert_eq!(
        ctx.tts.languages(),
        vec![LanguageCode::Japanese, LanguageCode::Japanese]
    );
    assert_eq!(ctx.audio_files(), vec!["愛_kun_あい.mp3", "愛_on_あい.mp3"]);
    assert_eq!(
        std::fs::read(ctx.audio_path("愛_on_あい.mp3")).unwrap(),
        mock_audio_bytes("あい")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_preserve_entries_and_extra_fields(ctx: &TestContext) {
    let input = mixed_dataset();
    ctx.write_input(&input).unwrap();

    ctx.run().await.unwrap();

    let output = ctx.read_output().unwrap();
    let inputs = input.as_array().unwrap();
    let outputs = output.as_array().unwrap();
    assert_eq!(inputs.len(), outputs.len());

    for (input_entry, output_entry) in inputs.iter().zip(outputs) {
        assert_fields_preserved(input_entry, output_entry);
        assert_audio_fields_appended(input_entry, output_entry);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_drop_empty_readings_and_keep_order(ctx: &TestContext) {
    ctx.write_input(&mixed_dataset()).unwrap();

    let summary = ctx.run().await.unwrap();

    let output = ctx.read_output().unwrap();
    assert_eq!(
        audio_paths(&output[0], "audioKunyomi"),
        vec![
            "assets/audio/生_kun_い.きる.mp3",
            "assets/audio/生_kun_う.まれる.mp3"
        ]
    );
    assert_eq!(
        audio_paths(&output[0], "audioOnyomi"),
        vec!["assets/audio/生_on_せい.mp3", "assets/audio/生_on_しょう.mp3"]
    );
    assert_eq!(audio_paths(&output[1], "audioKunyomi"), vec!["assets/audio/木_kun_き.mp3"]);
    assert_eq!(
        audio_paths(&output[1], "audioOnyomi"),
        vec!["assets/audio/木_on_ぼく.mp3", "assets/audio/木_on_もく.mp3"]
    );
    assert_eq!(audio_paths(&output[2], "audioKunyomi"), vec!["assets/audio/〆_kun_しめ.mp3"]);
    assert!(audio_paths(&output[2], "audioOnyomi").is_empty());

    assert_eq!(summary.entries, 3);
    assert_eq!(summary.synthesized, 8);
    assert_eq!(summary.empty_skipped, 2);
    assert_eq!(ctx.audio_files().len(), 8);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_yield_one_path_for_blank_and_filled_readings(ctx: &TestContext) {
    ctx.write_input(&json!([{"kanji": "愛", "kunyomi": ["", "  ", "あい"], "onyomi": []}]))
        .unwrap();

    ctx.run().await.unwrap();

    let output = ctx.read_output().unwrap();
    assert_eq!(
        audio_paths(&output[0], "audioKunyomi"),
        vec!["assets/audio/愛_kun_あい.mp3"]
    );
    assert_eq!(ctx.tts.call_count(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_skip_unnameable_readings_and_continue(ctx: &TestContext) {
    ctx.write_input(&json!([
        {"kanji": "何", "kunyomi": ["?", "なに"], "onyomi": ["カ"]}
    ]))
    .unwrap();

    let summary = ctx.run().await.unwrap();

    let output = ctx.read_output().unwrap();
    assert_eq!(audio_paths(&output[0], "audioKunyomi"), vec!["assets/audio/何_kun_なに.mp3"]);
    assert_eq!(audio_paths(&output[0], "audioOnyomi"), vec!["assets/audio/何_on_か.mp3"]);
    assert_eq!(summary.invalid_skipped, 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_write_readable_indented_json(ctx: &TestContext) {
    ctx.write_input(&love_dataset()).unwrap();

    ctx.run().await.unwrap();

    let raw = std::fs::read_to_string(ctx.config.output_path()).unwrap();
    assert!(raw.contains("\"audioOnyomi\": [\n      \"assets/audio/愛_on_あい.mp3\"\n    ]"));
    assert!(!raw.contains("\\u"));
}
