//! Tests for the plot optimizer.

mod test_utils;

use plotweaver_core::Plot;
use plotweaver_error::GenerationErrorKind;
use plotweaver_narrative::{
    GENERATION_DISABLED_TEXT, GenerationInvoker, PlotOptimizer, Suggestion, TOOL_MISSING_TEXT,
};
use test_utils::{MockDriver, resolve};

fn sample_plot() -> Plot {
    Plot::new(
        "平和な村に魔王が攻めてきた。",
        "勇者が仲間と魔王を倒しに行くが、途中で仲間割れ。",
        "一人になった勇者が覚醒し魔王を倒した。",
    )
}

#[tokio::test]
async fn test_structured_suggestions() -> anyhow::Result<()> {
    let mock = MockDriver::new_success(
        r#"```json
{"analysis_points": [{"point": "仲間割れの動機が弱い", "suggestion": "伏線を追加する"}],
 "overall_suggestion": "中盤の葛藤を深める"}
```"#,
    );
    let optimizer = PlotOptimizer::new(resolve(Some("plot_optimizer_agent_v1")), mock.invoker());

    let suggestion = optimizer.analyze(&sample_plot(), "ファンタジー").await;

    match suggestion {
        Some(Suggestion::Structured {
            analysis_points,
            overall_suggestion,
        }) => {
            assert_eq!(analysis_points.len(), 1);
            assert_eq!(analysis_points[0].suggestion, "伏線を追加する");
            assert_eq!(overall_suggestion.as_deref(), Some("中盤の葛藤を深める"));
        }
        other => panic!("expected structured suggestion, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_prompt_uses_summary_and_agent_model() -> anyhow::Result<()> {
    let mock = MockDriver::new_success("テンポを上げましょう。");
    let optimizer = PlotOptimizer::new(resolve(Some("plot_optimizer_agent_v1")), mock.invoker());

    optimizer.analyze(&sample_plot(), "ファンタジー").await;

    let request = mock.last_request().expect("request recorded");
    assert_eq!(request.model().as_deref(), Some("gemini-2.5-pro"));
    assert!(!*request.json_response());
    assert_eq!(request.system_prompt(), "あなたは経験豊富な編集者です。");
    assert!(request.user_prompt().contains("導入：平和な村に魔王が攻めてきた。\n葛藤："));
    assert!(request.user_prompt().ends_with("改善案を提案してください。"));
    Ok(())
}

#[tokio::test]
async fn test_prose_degrades_to_text() -> anyhow::Result<()> {
    let mock = MockDriver::new_success("テンポを上げましょう。");
    let optimizer = PlotOptimizer::new(resolve(Some("plot_optimizer_agent_v1")), mock.invoker());

    assert_eq!(
        optimizer.analyze(&sample_plot(), "ファンタジー").await,
        Some(Suggestion::Text("テンポを上げましょう。".to_string()))
    );
    Ok(())
}

#[tokio::test]
async fn test_disabled_agent_returns_notice_without_calling() -> anyhow::Result<()> {
    let mock = MockDriver::new_success("unused");
    let optimizer = PlotOptimizer::new(resolve(Some("offline_story_agent")), mock.invoker());

    assert_eq!(
        optimizer.analyze(&sample_plot(), "SF").await,
        Some(Suggestion::Text(GENERATION_DISABLED_TEXT.to_string()))
    );
    assert_eq!(mock.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_missing_tool_returns_notice() -> anyhow::Result<()> {
    let resolved = plotweaver_config::ResolvedAgent::new(
        "plot_optimizer_agent_v1",
        "config/agent_config.yaml",
        plotweaver_core::AgentConfigBuilder::default()
            .use_generation(true)
            .build()?,
        None,
    );
    let optimizer = PlotOptimizer::new(resolved, GenerationInvoker::new(None));

    assert_eq!(
        optimizer.analyze(&sample_plot(), "SF").await,
        Some(Suggestion::Text(TOOL_MISSING_TEXT.to_string()))
    );
    Ok(())
}

#[tokio::test]
async fn test_service_failure_yields_none() -> anyhow::Result<()> {
    let mock = MockDriver::new_error(GenerationErrorKind::ServiceCallFailed("reset".into()));
    let optimizer = PlotOptimizer::new(resolve(Some("plot_optimizer_agent_v1")), mock.invoker());

    assert_eq!(optimizer.analyze(&sample_plot(), "SF").await, None);
    assert_eq!(mock.call_count(), 1);
    Ok(())
}
