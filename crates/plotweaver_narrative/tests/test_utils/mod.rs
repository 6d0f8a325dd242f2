//! Test utilities for Plotweaver narrative tests.
//!
//! Provides a mock generation driver and config fixtures.

#![allow(dead_code)]

use async_trait::async_trait;
use plotweaver_config::{ConfigDocument, ConfigResolver, ResolvedAgent};
use plotweaver_core::{GenerateRequest, GenerateResponse};
use plotweaver_error::{GenerationError, GenerationErrorKind, PlotweaverResult};
use plotweaver_interface::GenerationDriver;
use plotweaver_narrative::GenerationInvoker;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the mock does on every call.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Answer with this text
    Success(String),
    /// Fail with this error kind
    Error(GenerationErrorKind),
    /// Sleep, then answer with this text
    Delayed(Duration, String),
}

/// Generation driver that never touches the network.
#[derive(Debug, Clone)]
pub struct MockDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Option<GenerateRequest>>>,
}

impl MockDriver {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Success(text.into()))
    }

    pub fn new_error(kind: GenerationErrorKind) -> Self {
        Self::new(MockBehavior::Error(kind))
    }

    pub fn new_delayed(delay: Duration, text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Delayed(delay, text.into()))
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.last_request.lock().unwrap().clone()
    }

    /// Invoker sharing this mock's counters.
    pub fn invoker(&self) -> GenerationInvoker {
        GenerationInvoker::new(Some(Arc::new(self.clone())))
    }
}

#[async_trait]
impl GenerationDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> PlotweaverResult<GenerateResponse> {
        *self.call_count.lock().unwrap() += 1;
        *self.last_request.lock().unwrap() = Some(req.clone());

        match &self.behavior {
            MockBehavior::Success(text) => Ok(GenerateResponse::new(text.clone())),
            MockBehavior::Error(kind) => Err(GenerationError::new(kind.clone()).into()),
            MockBehavior::Delayed(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(GenerateResponse::new(text.clone()))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Configuration document with a generation-enabled story agent, an
/// offline agent and a plot optimizer.
pub const AGENT_CONFIG: &str = r#"
default_agent_id: simple_story_agent_v1
tools:
  - id: llm_tool_gemini_pro
    config:
      model_name: gemini-2.0-flash
      temperature: 0.7
      max_tokens: 1000
      prompt_templates:
        story:
          system: あなたは有能なストーリーテラーです。JSONのみを出力してください。
          user: "ジャンル：{genre}\n物語を生成してください。"
        plot_optimization:
          system: あなたは経験豊富な編集者です。
agents:
  - id: simple_story_agent_v1
    config:
      use_llm: true
      llm_tool_id: llm_tool_gemini_pro
      story_templates:
        default:
          setup: 平和な世界で暮らしていた主人公は、ある日突然、不思議な出来事に巻き込まれます。
          conflict: "{genre}の要素を活かしながら、仲間たちと共に冒険を繰り広げます。"
          resolution: 知恵と勇気で困難を乗り越えます。
        SF:
          setup: 宇宙ステーションで目覚めた主人公は記憶を失っていた。
          conflict: 反乱を起こしたAIと対峙する。
          resolution: AIと和解し地球へ帰還する。
  - id: offline_story_agent
    config:
      use_llm: false
      story_templates:
        default:
          setup: 小さな町の図書館で、古い地図が見つかった。
  - id: plot_optimizer_agent_v1
    config:
      use_llm: true
      llm_tool_id: llm_tool_gemini_pro
      model_name: gemini-2.5-pro
"#;

pub fn resolve(agent_id: Option<&str>) -> ResolvedAgent {
    let document = ConfigDocument::from_yaml_str(AGENT_CONFIG).expect("fixture config parses");
    ConfigResolver::new(document, "config/agent_config.yaml").resolve(agent_id)
}

/// Fenced JSON story as the service tends to return it.
pub fn fenced_story_json(title: &str) -> String {
    format!(
        "```json\n{}\n```",
        serde_json::json!({
            "title": title,
            "characters": [
                {"name": "アリス", "role": "protagonist", "description": "宇宙飛行士"}
            ],
            "plot": {
                "setup": "出発",
                "conflict": "事故",
                "resolution": "帰還"
            },
            "themes": ["勇気"]
        })
    )
}
