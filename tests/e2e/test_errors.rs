use crate::e2e::helpers;

use helpers::fixtures::mixed_dataset;
use helpers::TestContext;
use kanji_audio::AppError;
use pretty_assertions::assert_eq;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_with_missing_input_and_write_nothing(ctx: &TestContext) {
    let err = ctx.run().await.unwrap_err();

    assert!(matches!(err, AppError::MissingInput(ref path) if path == &ctx.config.input_path()));
    assert_ne!(err.exit_code(), 0);
    assert!(!ctx.output_exists());
    assert!(!ctx.config.audio_dir().exists());
    assert_eq!(ctx.tts.call_count(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_abort_on_synthesis_failure_without_output(ctx: &TestContext) {
    ctx.write_input(&mixed_dataset()).unwrap();
    ctx.tts.fail_on("き");

    let err = ctx.run().await.unwrap_err();

    assert!(matches!(err, AppError::Synthesis(_)));
    assert!(!ctx.output_exists());
    // Everything synthesized before the failure stays for the next run
    assert_eq!(
        ctx.audio_files(),
        vec![
            "生_kun_い.きる.mp3",
            "生_kun_う.まれる.mp3",
            "生_on_しょう.mp3",
            "生_on_せい.mp3"
        ]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_resume_from_stored_audio_after_a_failure(ctx: &TestContext) {
    ctx.write_input(&mixed_dataset()).unwrap();
    ctx.tts.fail_on("き");
    assert!(ctx.run().await.is_err());

    let recovered = helpers::fakes::CountingTtsRepository::new();
    let recovered = std::sync::Arc::new(recovered);
    let summary = kanji_audio::infrastructure::pipeline::run_enrichment(&ctx.config, recovered.clone())
        .await
        .unwrap();

    assert_eq!(summary.reused, 4);
    assert_eq!(summary.synthesized, 4);
    assert_eq!(recovered.call_count(), 4);
    assert!(ctx.output_exists());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_a_document_that_is_not_a_list(ctx: &TestContext) {
    std::fs::write(ctx.config.input_path(), r#"{"kanji": "愛"}"#).unwrap();

    let err = ctx.run().await.unwrap_err();

    assert!(matches!(err, AppError::Dataset(_)));
    assert!(!ctx.output_exists());
}
