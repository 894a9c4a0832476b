//! Edit Session Tracking
//!
//! Which rows are in edit mode and what their unsaved drafts hold.
//! One map from id to draft: presence of a key is edit mode, so the
//! draft bookkeeping can never drift out of step with the mode flag.

use std::collections::HashMap;
use std::future::Future;

use leptos::prelude::*;

use crate::models::Todo;
use sync_datastore::{StoreError, StoreResult};

/// Editable fields of a todo
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
}

/// Unsaved edits for one todo. A `Some` field overrides the persisted
/// value on commit; `None` keeps whatever the store currently holds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TodoDraft {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl TodoDraft {
    /// Draft pre-filled with the todo's current values
    pub fn seeded_from(todo: &Todo) -> Self {
        Self {
            name: Some(todo.name.clone()),
            description: Some(todo.description.clone()),
        }
    }

    /// Merge onto a freshly fetched record: draft fields win, the rest
    /// keeps the persisted values
    pub fn apply_to(&self, original: Todo) -> Todo {
        Todo {
            id: original.id,
            name: self.name.clone().unwrap_or(original.name),
            description: self.description.clone().unwrap_or(original.description),
        }
    }
}

/// Edit tracking errors
#[derive(Debug, Clone, PartialEq)]
pub enum EditError {
    /// The record has no id yet, so there is nothing to track or commit
    MissingId,
    /// No edit session exists for the requested id
    NotEditing,
    /// A store fetch or save failed; the session is kept for retry
    Store(StoreError),
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::MissingId => write!(f, "Invalid argument: record id is empty"),
            EditError::NotEditing => write!(f, "No edit session for this record"),
            EditError::Store(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for EditError {}

/// All rows currently in edit mode, keyed by todo id
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditSessions {
    drafts: HashMap<String, TodoDraft>,
}

impl EditSessions {
    /// Enter edit mode for a todo, seeding the draft from its current
    /// values. Re-invoking while already editing re-seeds; the single
    /// map makes duplicate sessions impossible.
    pub fn begin(&mut self, todo: &Todo) -> Result<(), EditError> {
        if todo.id.is_empty() {
            return Err(EditError::MissingId);
        }
        self.drafts.insert(todo.id.clone(), TodoDraft::seeded_from(todo));
        Ok(())
    }

    /// Replace one field of a tracked draft. Untracked ids are ignored.
    pub fn set_field(&mut self, id: &str, field: DraftField, value: String) {
        if let Some(draft) = self.drafts.get_mut(id) {
            match field {
                DraftField::Name => draft.name = Some(value),
                DraftField::Description => draft.description = Some(value),
            }
        }
    }

    /// Leave edit mode, dropping the draft. Untracked ids are a no-op.
    pub fn discard(&mut self, id: &str) -> Result<(), EditError> {
        if id.is_empty() {
            return Err(EditError::MissingId);
        }
        self.drafts.remove(id);
        Ok(())
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.drafts.contains_key(id)
    }

    pub fn draft(&self, id: &str) -> Option<&TodoDraft> {
        self.drafts.get(id)
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}

/// Commit the draft for `id`: fetch the current record, merge the draft
/// over it, persist, and only then drop the session. On any failure the
/// session and draft stay untouched so the user can retry.
///
/// The tracker is read before the first await and written after the last
/// one; no borrow is held across a suspension, so commits for different
/// ids can be in flight at the same time without interfering.
pub async fn commit_edit<Fetch, FetchFut, Persist, PersistFut>(
    sessions: RwSignal<EditSessions>,
    id: &str,
    fetch: Fetch,
    persist: Persist,
) -> Result<Todo, EditError>
where
    Fetch: FnOnce(String) -> FetchFut,
    FetchFut: Future<Output = StoreResult<Option<Todo>>>,
    Persist: FnOnce(Todo) -> PersistFut,
    PersistFut: Future<Output = StoreResult<Todo>>,
{
    if id.is_empty() {
        return Err(EditError::MissingId);
    }
    let draft = sessions
        .with_untracked(|sessions| sessions.draft(id).cloned())
        .ok_or(EditError::NotEditing)?;

    let original = fetch(id.to_string())
        .await
        .map_err(EditError::Store)?
        .ok_or_else(|| EditError::Store(StoreError::NotFound(id.to_string())))?;
    let saved = persist(draft.apply_to(original))
        .await
        .map_err(EditError::Store)?;

    sessions.update(|sessions| {
        sessions.drafts.remove(id);
    });
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sync_datastore::{DataStore, MemoryStore};
    use tokio::sync::oneshot;

    fn todo(id: &str, name: &str, description: &str) -> Todo {
        Todo {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    fn draft(name: Option<&str>, description: Option<&str>) -> TodoDraft {
        TodoDraft {
            name: name.map(str::to_string),
            description: description.map(str::to_string),
        }
    }

    async fn seeded_store(todos: &[Todo]) -> MemoryStore<Todo> {
        let store = MemoryStore::new();
        store.seed(todos.iter().cloned()).await;
        store
    }

    #[test]
    fn test_begin_then_discard_restores_previous_state() {
        let mut sessions = EditSessions::default();
        sessions.begin(&todo("2", "other", "row")).unwrap();
        let before = sessions.clone();

        sessions.begin(&todo("1", "A", "B")).unwrap();
        sessions.discard("1").unwrap();
        assert_eq!(sessions, before);
    }

    #[test]
    fn test_begin_requires_an_id() {
        let mut sessions = EditSessions::default();
        let err = sessions.begin(&Todo::new("A", "B")).unwrap_err();
        assert_eq!(err, EditError::MissingId);
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_re_begin_reseeds_the_draft() {
        let mut sessions = EditSessions::default();
        sessions.begin(&todo("1", "A", "B")).unwrap();
        sessions.set_field("1", DraftField::Name, "A2".into());

        sessions.begin(&todo("1", "A", "B")).unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions.draft("1"), Some(&draft(Some("A"), Some("B"))));
    }

    #[test]
    fn test_set_field_replaces_only_the_named_field() {
        let mut sessions = EditSessions::default();
        sessions.begin(&todo("1", "A", "B")).unwrap();
        sessions.set_field("1", DraftField::Name, "A2".into());

        assert!(sessions.is_editing("1"));
        assert_eq!(sessions.draft("1"), Some(&draft(Some("A2"), Some("B"))));
    }

    #[test]
    fn test_set_field_on_untracked_id_changes_nothing() {
        let mut sessions = EditSessions::default();
        sessions.begin(&todo("1", "A", "B")).unwrap();
        let before = sessions.clone();

        sessions.set_field("2", DraftField::Name, "ghost".into());
        assert_eq!(sessions, before);
    }

    #[test]
    fn test_discard_on_a_never_tracked_id_is_a_no_op() {
        let mut sessions = EditSessions::default();
        sessions.begin(&todo("1", "A", "B")).unwrap();
        let before = sessions.clone();

        sessions.discard("2").unwrap();
        assert_eq!(sessions, before);
    }

    #[test]
    fn test_discard_requires_an_id() {
        let mut sessions = EditSessions::default();
        assert_eq!(sessions.discard("").unwrap_err(), EditError::MissingId);
    }

    #[test]
    fn test_merge_keeps_fields_without_overrides() {
        let merged = draft(Some("X2"), None).apply_to(todo("1", "X", "Y"));
        assert_eq!(merged, todo("1", "X2", "Y"));
    }

    #[tokio::test]
    async fn test_commit_persists_the_merged_record() {
        let store = seeded_store(&[todo("1", "X", "Y")]).await;
        let sessions = RwSignal::new(EditSessions::default());
        sessions.update(|s| s.begin(&todo("1", "X", "Y")).unwrap());
        sessions.update(|s| s.set_field("1", DraftField::Name, "X2".into()));

        let fetch_store = store.clone();
        let persist_store = store.clone();
        let saved = commit_edit(
            sessions,
            "1",
            move |id| async move { fetch_store.get(&id).await },
            move |merged| async move { persist_store.save(merged).await },
        )
        .await
        .unwrap();

        assert_eq!(saved, todo("1", "X2", "Y"));
        assert!(!sessions.with_untracked(|s| s.is_editing("1")));
        assert_eq!(store.get("1").await.unwrap(), Some(todo("1", "X2", "Y")));
    }

    #[tokio::test]
    async fn test_commit_applies_edits_to_both_fields() {
        let store = seeded_store(&[todo("1", "X", "Y")]).await;
        let sessions = RwSignal::new(EditSessions::default());
        sessions.update(|s| s.begin(&todo("1", "X", "Y")).unwrap());
        sessions.update(|s| s.set_field("1", DraftField::Name, "X2".into()));
        sessions.update(|s| s.set_field("1", DraftField::Description, "Y2".into()));

        let fetch_store = store.clone();
        let persist_store = store.clone();
        commit_edit(
            sessions,
            "1",
            move |id| async move { fetch_store.get(&id).await },
            move |merged| async move { persist_store.save(merged).await },
        )
        .await
        .unwrap();

        assert!(sessions.with_untracked(|s| s.is_empty()));
        assert_eq!(store.get("1").await.unwrap(), Some(todo("1", "X2", "Y2")));
    }

    #[tokio::test]
    async fn test_concurrent_commits_for_distinct_ids() {
        let store = seeded_store(&[todo("1", "X", "Y"), todo("2", "P", "Q")]).await;
        let sessions = RwSignal::new(EditSessions::default());
        sessions.update(|s| s.begin(&todo("1", "X", "Y")).unwrap());
        sessions.update(|s| s.begin(&todo("2", "P", "Q")).unwrap());
        sessions.update(|s| s.set_field("1", DraftField::Name, "X2".into()));
        sessions.update(|s| s.set_field("2", DraftField::Name, "P2".into()));

        let (report_first, first_started) = oneshot::channel::<()>();
        let (report_second, second_started) = oneshot::channel::<()>();
        let (release_first, first_gate) = oneshot::channel::<()>();
        let (release_second, second_gate) = oneshot::channel::<()>();

        let first_fetch = store.clone();
        let first_persist = store.clone();
        let first = commit_edit(
            sessions,
            "1",
            move |id| async move {
                report_first.send(()).unwrap();
                first_gate.await.unwrap();
                first_fetch.get(&id).await
            },
            move |merged| async move { first_persist.save(merged).await },
        );

        let second_fetch = store.clone();
        let second_persist = store.clone();
        let second = commit_edit(
            sessions,
            "2",
            move |id| async move {
                report_second.send(()).unwrap();
                second_gate.await.unwrap();
                second_fetch.get(&id).await
            },
            move |merged| async move { second_persist.save(merged).await },
        );

        // Both commits reach their fetch before either gate opens, so each
        // one finishes while the other is still in flight
        let (first, second, _) = tokio::join!(first, second, async move {
            first_started.await.unwrap();
            second_started.await.unwrap();
            release_first.send(()).unwrap();
            release_second.send(()).unwrap();
        });

        assert_eq!(first.unwrap(), todo("1", "X2", "Y"));
        assert_eq!(second.unwrap(), todo("2", "P2", "Q"));
        assert!(sessions.with_untracked(|s| s.is_empty()));
        assert_eq!(store.get("1").await.unwrap(), Some(todo("1", "X2", "Y")));
        assert_eq!(store.get("2").await.unwrap(), Some(todo("2", "P2", "Q")));
    }

    #[tokio::test]
    async fn test_commit_leaves_unrelated_sessions_alone() {
        let store = seeded_store(&[todo("1", "X", "Y")]).await;
        let sessions = RwSignal::new(EditSessions::default());
        sessions.update(|s| s.begin(&todo("1", "X", "Y")).unwrap());
        sessions.update(|s| s.set_field("1", DraftField::Name, "X2".into()));

        let (report_commit, commit_started) = oneshot::channel::<()>();
        let (release_commit, commit_gate) = oneshot::channel::<()>();

        let fetch_store = store.clone();
        let persist_store = store.clone();
        let commit = commit_edit(
            sessions,
            "1",
            move |id| async move {
                report_commit.send(()).unwrap();
                commit_gate.await.unwrap();
                fetch_store.get(&id).await
            },
            move |merged| async move { persist_store.save(merged).await },
        );

        // Another row enters edit mode while the commit is parked at its gate
        let (saved, _) = tokio::join!(commit, async move {
            commit_started.await.unwrap();
            sessions.update(|s| s.begin(&todo("2", "P", "Q")).unwrap());
            sessions.update(|s| s.set_field("2", DraftField::Description, "Q2".into()));
            release_commit.send(()).unwrap();
        });

        assert_eq!(saved.unwrap(), todo("1", "X2", "Y"));
        assert!(!sessions.with_untracked(|s| s.is_editing("1")));
        assert_eq!(
            sessions.with_untracked(|s| s.draft("2").cloned()),
            Some(draft(Some("P"), Some("Q2")))
        );
    }

    #[tokio::test]
    async fn test_failed_persist_retains_the_session() {
        let store = seeded_store(&[todo("1", "X", "Y")]).await;
        let sessions = RwSignal::new(EditSessions::default());
        sessions.update(|s| s.begin(&todo("1", "X", "Y")).unwrap());
        sessions.update(|s| s.set_field("1", DraftField::Name, "X2".into()));

        let fetch_store = store.clone();
        let err = commit_edit(
            sessions,
            "1",
            move |id| async move { fetch_store.get(&id).await },
            move |_merged| async move { Err::<Todo, _>(StoreError::Backend("offline".into())) },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, EditError::Store(StoreError::Backend(_))));
        assert!(sessions.with_untracked(|s| s.is_editing("1")));
        assert_eq!(
            sessions.with_untracked(|s| s.draft("1").cloned()),
            Some(draft(Some("X2"), Some("Y")))
        );
        // The store still holds the original
        assert_eq!(store.get("1").await.unwrap(), Some(todo("1", "X", "Y")));
    }

    #[tokio::test]
    async fn test_commit_after_remote_delete_keeps_the_draft() {
        let store = seeded_store(&[]).await;
        let sessions = RwSignal::new(EditSessions::default());
        sessions.update(|s| s.begin(&todo("1", "X", "Y")).unwrap());

        let fetch_store = store.clone();
        let persist_store = store.clone();
        let err = commit_edit(
            sessions,
            "1",
            move |id| async move { fetch_store.get(&id).await },
            move |merged| async move { persist_store.save(merged).await },
        )
        .await
        .unwrap_err();

        assert_eq!(err, EditError::Store(StoreError::NotFound("1".into())));
        assert!(sessions.with_untracked(|s| s.is_editing("1")));
    }

    #[tokio::test]
    async fn test_commit_without_a_session_is_rejected() {
        let store = seeded_store(&[todo("1", "X", "Y")]).await;
        let sessions = RwSignal::new(EditSessions::default());

        let fetch_store = store.clone();
        let persist_store = store.clone();
        let err = commit_edit(
            sessions,
            "1",
            move |id| async move { fetch_store.get(&id).await },
            move |merged| async move { persist_store.save(merged).await },
        )
        .await
        .unwrap_err();

        assert_eq!(err, EditError::NotEditing);
        assert_eq!(store.get("1").await.unwrap(), Some(todo("1", "X", "Y")));
    }

    #[tokio::test]
    async fn test_commit_requires_an_id() {
        let store = seeded_store(&[]).await;
        let sessions = RwSignal::new(EditSessions::default());

        let fetch_store = store.clone();
        let persist_store = store.clone();
        let err = commit_edit(
            sessions,
            "",
            move |id| async move { fetch_store.get(&id).await },
            move |merged| async move { persist_store.save(merged).await },
        )
        .await
        .unwrap_err();

        assert_eq!(err, EditError::MissingId);
    }
}
