//! Test doubles shared by the chat module tests.

use std::sync::Mutex;

use banter_types::error::StoreError;
use banter_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};
use banter_types::turn::{now_timestamp, NewTurn, Turn};

use crate::chat::store::TurnStore;
use crate::llm::provider::LlmProvider;

#[derive(Clone)]
pub enum ScriptedReply {
    Text(String),
    NoText,
    Fail(String),
}

/// Provider that answers every request with the same scripted outcome and
/// records the prompts it was sent.
pub struct ScriptedProvider {
    reply: ScriptedReply,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(reply: ScriptedReply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.prompts.lock().unwrap().push(request.prompt.clone());
        match self.reply.clone() {
            ScriptedReply::Text(text) => Ok(CompletionResponse {
                text: Some(text),
                model: "scripted-model".to_string(),
                finish_reason: Some("STOP".to_string()),
                usage: Usage::default(),
            }),
            ScriptedReply::NoText => Ok(CompletionResponse {
                text: None,
                model: "scripted-model".to_string(),
                finish_reason: Some("SAFETY".to_string()),
                usage: Usage::default(),
            }),
            ScriptedReply::Fail(message) => Err(LlmError::Provider { message }),
        }
    }
}

/// In-memory store; `failing` makes every append error out.
#[derive(Default)]
pub struct MemoryStore {
    turns: Mutex<Vec<Turn>>,
    failing: bool,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self {
            turns: Mutex::new(Vec::new()),
            failing: true,
        }
    }
}

impl TurnStore for MemoryStore {
    async fn load(&self) -> Vec<Turn> {
        self.turns.lock().unwrap().clone()
    }

    async fn append(&self, turn: NewTurn) -> Result<Turn, StoreError> {
        if self.failing {
            return Err(StoreError::Io {
                path: "memory".to_string(),
                message: "disk full".to_string(),
            });
        }
        let turn = Turn::stamp(turn, now_timestamp());
        self.turns.lock().unwrap().push(turn.clone());
        Ok(turn)
    }
}
