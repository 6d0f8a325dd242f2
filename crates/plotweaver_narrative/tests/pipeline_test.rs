//! End-to-end tests for the story pipeline using a mock generation driver.

mod test_utils;

use plotweaver_core::GenerationType;
use plotweaver_error::GenerationErrorKind;
use plotweaver_narrative::{DEFAULT_THEMES, GenerationInvoker, StoryPipeline};
use plotweaver_storage::FileSystemArtifactStore;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use test_utils::{MockDriver, fenced_story_json, resolve};

fn pipeline(agent_id: &str, invoker: GenerationInvoker, dir: &TempDir) -> StoryPipeline {
    let store = Arc::new(FileSystemArtifactStore::new(dir.path().join("stories")));
    StoryPipeline::new(resolve(Some(agent_id)), invoker, store)
}

fn assert_complete(content: &plotweaver_core::ContentStructure) {
    assert!(!content.title.is_empty());
    assert!(!content.characters.is_empty());
    assert!(!content.plot.setup.is_empty());
    assert!(!content.plot.conflict.is_empty());
    assert!(!content.plot.resolution.is_empty());
    assert!(!content.themes.is_empty());
    assert!(content.metadata.is_finalized());
}

#[tokio::test]
async fn test_generation_disabled_uses_default_template() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let mock = MockDriver::new_success(fenced_story_json("unused"));
    let pipeline = pipeline("offline_story_agent", mock.invoker(), &temp_dir);

    let outcome = pipeline.run("ファンタジー").await?;

    assert_eq!(mock.call_count(), 0);
    assert_eq!(outcome.generation_type(), Some(GenerationType::Template));
    assert_eq!(
        outcome.content().plot.setup,
        "小さな町の図書館で、古い地図が見つかった。"
    );
    assert_eq!(
        outcome.content().title,
        "ファンタジーの不思議な冒険（テンプレート）"
    );
    assert_complete(outcome.content());
    Ok(())
}

#[tokio::test]
async fn test_fenced_json_is_used_as_generated_story() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let mock = MockDriver::new_success(fenced_story_json("X"));
    let pipeline = pipeline("simple_story_agent_v1", mock.invoker(), &temp_dir);

    let outcome = pipeline.run("SF").await?;

    assert_eq!(mock.call_count(), 1);
    assert_eq!(outcome.generation_type(), Some(GenerationType::Llm));
    assert_eq!(outcome.content().title, "X");
    assert_eq!(outcome.content().characters[0].name, "アリス");
    assert_eq!(outcome.content().genre, "SF");
    assert!(outcome.error_artifact().is_none());

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(outcome.json_path())?)?;
    assert_eq!(saved["metadata"]["generation_type"], "llm");
    assert_eq!(saved["title"], "X");
    Ok(())
}

#[tokio::test]
async fn test_request_carries_tool_parameters() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let mock = MockDriver::new_success(fenced_story_json("X"));
    let pipeline = pipeline("simple_story_agent_v1", mock.invoker(), &temp_dir);

    pipeline.run("SF").await?;

    let request = mock.last_request().expect("request recorded");
    assert_eq!(request.model().as_deref(), Some("gemini-2.0-flash"));
    assert_eq!(*request.temperature(), Some(0.7));
    assert_eq!(*request.max_tokens(), Some(1000));
    assert!(*request.json_response());
    assert_eq!(
        request.combined_prompt(),
        "あなたは有能なストーリーテラーです。JSONのみを出力してください。\n\nジャンル：SF\n物語を生成してください。"
    );
    Ok(())
}

#[tokio::test]
async fn test_prose_response_falls_back_and_keeps_raw_text() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let prose = "昔々、遠い星に一人の少年がいました。";
    let mock = MockDriver::new_success(prose);
    let pipeline = pipeline("simple_story_agent_v1", mock.invoker(), &temp_dir);

    let outcome = pipeline.run("SF").await?;

    assert_eq!(outcome.generation_type(), Some(GenerationType::Template));
    assert_eq!(
        outcome.content().plot.setup,
        "宇宙ステーションで目覚めた主人公は記憶を失っていた。"
    );
    assert_complete(outcome.content());

    let error_path = outcome.error_artifact().as_ref().expect("raw text saved");
    let name = error_path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("error_story_"));
    assert_eq!(std::fs::read_to_string(error_path)?, prose);
    Ok(())
}

#[tokio::test]
async fn test_incomplete_json_falls_back_without_error_artifact() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let mock = MockDriver::new_success(r#"{"title": "Only a title"}"#);
    let pipeline = pipeline("simple_story_agent_v1", mock.invoker(), &temp_dir);

    let outcome = pipeline.run("Comedy").await?;

    assert_eq!(outcome.generation_type(), Some(GenerationType::Template));
    assert_eq!(outcome.content().title, "Comedyの不思議な冒険（テンプレート）");
    assert!(outcome.error_artifact().is_none());
    assert_complete(outcome.content());
    Ok(())
}

#[tokio::test]
async fn test_service_failure_falls_back() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let mock = MockDriver::new_error(GenerationErrorKind::HttpError {
        status_code: 503,
        message: "overloaded".to_string(),
    });
    let pipeline = pipeline("simple_story_agent_v1", mock.invoker(), &temp_dir);

    let outcome = pipeline.run("ホラー").await?;

    assert_eq!(mock.call_count(), 1);
    assert_eq!(outcome.generation_type(), Some(GenerationType::Template));
    assert_eq!(
        outcome.content().plot.conflict,
        "ホラーの要素を活かしながら、仲間たちと共に冒険を繰り広げます。"
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_credential_falls_back() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let pipeline = pipeline("simple_story_agent_v1", GenerationInvoker::new(None), &temp_dir);

    let outcome = pipeline.run("SF").await?;

    assert_eq!(outcome.generation_type(), Some(GenerationType::Template));
    assert_complete(outcome.content());
    Ok(())
}

#[tokio::test]
async fn test_timeout_falls_back() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let mock = MockDriver::new_delayed(Duration::from_secs(5), fenced_story_json("late"));
    let invoker = mock.invoker().with_timeout(Some(Duration::from_millis(50)));
    let pipeline = pipeline("simple_story_agent_v1", invoker, &temp_dir);

    let outcome = pipeline.run("SF").await?;

    assert_eq!(outcome.generation_type(), Some(GenerationType::Template));
    assert_ne!(outcome.content().title, "late");
    Ok(())
}

#[tokio::test]
async fn test_unknown_agent_still_produces_story() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let mock = MockDriver::new_success(fenced_story_json("X"));
    let pipeline = pipeline("no_such_agent", mock.invoker(), &temp_dir);

    let outcome = pipeline.run("ミステリー").await?;

    assert_eq!(mock.call_count(), 0);
    assert_eq!(outcome.content().metadata.agent_id, "no_such_agent");
    assert_eq!(
        outcome.content().themes,
        DEFAULT_THEMES.map(String::from).to_vec()
    );
    assert_complete(outcome.content());
    Ok(())
}

#[tokio::test]
async fn test_totality_across_outcomes() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let invokers = vec![
        MockDriver::new_success(fenced_story_json("X")).invoker(),
        MockDriver::new_success("not json").invoker(),
        MockDriver::new_error(GenerationErrorKind::ServiceCallFailed("reset".into())).invoker(),
        GenerationInvoker::new(None),
    ];

    for invoker in invokers {
        let pipeline = pipeline("simple_story_agent_v1", invoker, &temp_dir);
        for genre in ["SF", "ファンタジー", "", "Sci-Fi/Horror"] {
            let outcome = pipeline.run(genre).await?;
            assert_complete(outcome.content());
            assert!(outcome.json_path().exists());
            assert!(outcome.text_path().exists());
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_long_genre_still_persists() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let genre = "壮大なファンタジー".repeat(10);
    let mock = MockDriver::new_success("むかしむかし、あるところに。");
    let pipeline = pipeline("simple_story_agent_v1", mock.invoker(), &temp_dir);

    let outcome = pipeline.run(&genre).await?;

    assert_eq!(outcome.content().genre, genre);
    assert_complete(outcome.content());
    assert!(outcome.json_path().exists());
    assert!(outcome.text_path().exists());
    let error_path = outcome.error_artifact().as_ref().expect("raw text kept");
    assert!(error_path.exists());

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(outcome.json_path())?)?;
    assert_eq!(stored["genre"], genre.as_str());
    Ok(())
}

#[tokio::test]
async fn test_fallback_plot_is_deterministic() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let pipeline = pipeline("simple_story_agent_v1", GenerationInvoker::new(None), &temp_dir);

    let first = pipeline.run("Western").await?;
    let second = pipeline.run("Western").await?;

    assert_eq!(first.content().plot, second.content().plot);
    assert_eq!(first.content().title, second.content().title);
    assert_ne!(first.json_path(), second.json_path());
    Ok(())
}

#[tokio::test]
async fn test_concurrent_runs_write_distinct_artifacts() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let pipeline = pipeline("simple_story_agent_v1", GenerationInvoker::new(None), &temp_dir);

    let (sf, comedy) = tokio::join!(pipeline.run("SF"), pipeline.run("Comedy"));
    let (sf, comedy) = (sf?, comedy?);

    assert_ne!(sf.json_path(), comedy.json_path());
    assert_ne!(sf.text_path(), comedy.text_path());

    let files = std::fs::read_dir(temp_dir.path().join("stories"))?.count();
    assert_eq!(files, 4);
    Ok(())
}
