//! 現在のビューを保持し、UIからの要求に応答するドライバー

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::NavConfig;
use crate::error::WorkspaceError;
use crate::index::WorkspaceSymbols;
use crate::model::{Declaration, Metadata, VisualizationConfig};
use crate::state::{declaration_view, ViewState};

/// UIからの要求（JSON 1行）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "topic", rename_all = "camelCase")]
pub enum Request {
    LoadData,
    GetMetadata { id: String },
    DirectStateTransition { id: String },
}

/// UIへの応答
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "topic", rename_all = "camelCase")]
pub enum Response {
    Data { data: VisualizationConfig },
    Metadata { data: Option<Metadata> },
    Transition { available: bool },
    Error { message: String },
}

pub struct Navigator {
    current: Box<dyn ViewState>,
}

impl Navigator {
    pub fn new(initial: Box<dyn ViewState>) -> Self {
        Self { current: initial }
    }

    /// 設定のentry（なければ最初のワークスペースコンポーネント）から開始
    pub fn from_config(
        context: Arc<WorkspaceSymbols>,
        config: &NavConfig,
    ) -> Result<Self, WorkspaceError> {
        let entry = match config.entry.as_deref() {
            Some(entry) => Self::resolve_entry(&context, entry)
                .ok_or_else(|| WorkspaceError::UnknownSymbol(entry.to_string()))?,
            None => context
                .workspace_components()
                .into_iter()
                .next()
                .ok_or(WorkspaceError::NoEntry)?,
        };
        let view = declaration_view(&context, &entry)
            .ok_or_else(|| WorkspaceError::NotNavigable(entry.id()))?;
        info!("Starting navigation at {}", view.symbol_id());
        Ok(Self::new(view))
    }

    /// entryをシンボルIDとして引き、なければ宣言名で探す（ワークスペース内を優先）
    fn resolve_entry(context: &WorkspaceSymbols, entry: &str) -> Option<Arc<Declaration>> {
        if let Some(declaration) = context.get(entry) {
            return Some(declaration);
        }
        let candidates = context.find_by_name(entry);
        candidates
            .iter()
            .find(|d| !d.is_third_party())
            .or_else(|| candidates.first())
            .cloned()
    }

    pub fn current(&self) -> &dyn ViewState {
        self.current.as_ref()
    }

    pub fn load_data(&mut self) -> VisualizationConfig {
        self.current.get_data()
    }

    pub fn metadata(&self, id: &str) -> Option<Metadata> {
        self.current.get_metadata(id)
    }

    /// 遷移できた場合は現在のビューを置き換えてtrueを返す
    pub fn transition(&mut self, id: &str) -> bool {
        match self.current.next_state(id) {
            Some(next) => {
                self.current = next;
                true
            }
            None => {
                debug!("No transition for {}", id);
                false
            }
        }
    }

    pub fn handle(&mut self, request: Request) -> Response {
        match request {
            Request::LoadData => Response::Data {
                data: self.load_data(),
            },
            Request::GetMetadata { id } => Response::Metadata {
                data: self.metadata(&id),
            },
            Request::DirectStateTransition { id } => Response::Transition {
                available: self.transition(&id),
            },
        }
    }

    /// JSON 1行の要求を処理（解釈できない行はErrorを返す）
    pub fn handle_line(&mut self, line: &str) -> Response {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(request),
            Err(e) => Response::Error {
                message: e.to_string(),
            },
        }
    }
}
