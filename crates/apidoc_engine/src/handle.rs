use std::sync::Arc;

use parking_lot::RwLock;

use crate::editor::{EditorAction, EditorState};
use crate::model::ApiSpec;

/* # Why wrap EditorState in Arc<RwLock>?

The reducer itself is pure; EditorHandle is the shared ownership layer a UI
shell holds on to. Arc makes cloning cheap, RwLock (parking_lot, no poisoning)
lets readers take snapshots while a dispatch swaps in the next state.
*/

/// Shared handle to the editor state.
///
/// Clones are cheap and refer to the same underlying state.
#[derive(Debug, Clone)]
pub struct EditorHandle {
    state: Arc<RwLock<EditorState>>,
}

impl EditorHandle {
    /// Creates a handle owning the given initial state.
    pub fn new(state: EditorState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Applies an action, replacing the held state with the result.
    pub fn dispatch(&self, action: &EditorAction) {
        let mut guard = self.state.write();
        *guard = guard.apply(action);
    }

    /// Returns a renderable snapshot of the current description.
    pub fn snapshot(&self) -> ApiSpec {
        self.state.read().spec.clone()
    }

    /// Returns a copy of the full editor state.
    pub fn state(&self) -> EditorState {
        self.state.read().clone()
    }
}

impl Default for EditorHandle {
    fn default() -> Self {
        Self::new(EditorState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::ApiInfoField;

    #[test]
    fn test_dispatch_updates_shared_state() {
        let handle = EditorHandle::default();
        handle.dispatch(&EditorAction::AddEndpoint);
        assert_eq!(handle.snapshot().endpoints.len(), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let handle = EditorHandle::default();
        let clone = handle.clone();

        clone.dispatch(&EditorAction::SetApiInfoField {
            field: ApiInfoField::Title,
            value: "Shared".to_string(),
        });

        assert_eq!(handle.snapshot().api_info.title, "Shared");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let handle = EditorHandle::default();
        let snapshot = handle.snapshot();
        handle.dispatch(&EditorAction::AddEndpoint);
        assert_eq!(snapshot.endpoints.len(), 1);
    }
}
