//! Generic entity manager screen
//!
//! [`Screen`] is the state machine behind every management view: it owns
//! the last-fetched collection, the active filter and sort, the editing
//! draft, and the dialog/busy flags, and it orchestrates the CRUD calls.
//! Per-entity behavior (blank drafts, filter predicates, comparators,
//! validation) is supplied by a [`ScreenSpec`].
//!
//! After a successful mutation the screen always re-fetches the whole
//! collection, so server-computed fields never drift from local state.

use crate::confirm::Confirm;
use backroom_client::{ApiError, EntityApi};
use shared::{EntityId, Resource, UNSAVED};
use std::cmp::Ordering;

/// Collection load lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Errored,
}

/// Why the edit dialog is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit,
}

/// Edit dialog visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open(DialogMode),
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Outcome message shown by the embedding shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Inline notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Per-entity behavior of a manager screen.
pub trait ScreenSpec {
    type Entity: Resource;
    /// Filter parameters; `Default` means "no filtering".
    type Filter: Default + Clone;
    /// Sort key, where the screen offers sorting; `()` where it does not.
    type SortKey: Copy;

    /// Blank draft with entity-specific defaults.
    fn blank() -> Self::Entity;

    /// Conjunction of the active filter predicates.
    fn matches(filter: &Self::Filter, entity: &Self::Entity) -> bool;

    /// Ascending comparator for the given sort key.
    fn compare(key: Self::SortKey, a: &Self::Entity, b: &Self::Entity) -> Ordering;

    /// Validate a draft before submission. May mutate the draft (the
    /// transaction screen clears an invalid kind). An `Err` aborts the
    /// submit before any network call.
    fn validate(draft: &mut Self::Entity) -> Result<(), String> {
        let _ = draft;
        Ok(())
    }

    /// Sort applied when the screen opens.
    fn default_sort() -> Option<(Self::SortKey, SortOrder)> {
        None
    }
}

/// Manager screen state for the entity described by `S`.
pub struct Screen<S: ScreenSpec> {
    items: Vec<S::Entity>,
    filter: S::Filter,
    sort: Option<(S::SortKey, SortOrder)>,
    draft: Option<S::Entity>,
    dialog: DialogState,
    load: LoadState,
    busy: bool,
    notice: Option<Notice>,
}

impl<S: ScreenSpec> Default for Screen<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ScreenSpec> Screen<S> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            filter: S::Filter::default(),
            sort: S::default_sort(),
            draft: None,
            dialog: DialogState::Closed,
            load: LoadState::Idle,
            busy: false,
            notice: None,
        }
    }

    // ========== State accessors ==========

    /// The owned collection, as last fetched.
    pub fn items(&self) -> &[S::Entity] {
        &self.items
    }

    pub fn filter(&self) -> &S::Filter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: S::Filter) {
        self.filter = filter;
    }

    pub fn filter_mut(&mut self) -> &mut S::Filter {
        &mut self.filter
    }

    pub fn sort(&self) -> Option<(S::SortKey, SortOrder)> {
        self.sort
    }

    pub fn set_sort(&mut self, sort: Option<(S::SortKey, SortOrder)>) {
        self.sort = sort;
    }

    /// Flip the direction of the active sort, if any.
    pub fn toggle_sort_order(&mut self) {
        if let Some((_, order)) = &mut self.sort {
            *order = order.toggled();
        }
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn load(&self) -> LoadState {
        self.load
    }

    /// Whether an API call is in flight. Interactive surfaces should
    /// disable actions while this is set; the operations below also
    /// no-op on re-entry.
    pub fn busy(&self) -> bool {
        self.busy
    }

    pub fn draft(&self) -> Option<&S::Entity> {
        self.draft.as_ref()
    }

    /// The editing draft, for form bindings.
    pub fn draft_mut(&mut self) -> Option<&mut S::Entity> {
        self.draft.as_mut()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Take the pending notice, clearing it.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    // ========== Derived state ==========

    /// Filtered and sorted view of the collection. Pure function of the
    /// owned collection, the filter, and the sort; the sort is stable.
    pub fn visible(&self) -> Vec<&S::Entity> {
        let mut out: Vec<&S::Entity> = self
            .items
            .iter()
            .filter(|entity| S::matches(&self.filter, entity))
            .collect();

        if let Some((key, order)) = self.sort {
            out.sort_by(|a, b| {
                let ord = S::compare(key, a, b);
                match order {
                    SortOrder::Ascending => ord,
                    SortOrder::Descending => ord.reverse(),
                }
            });
        }
        out
    }

    // ========== Dialog flow ==========

    /// Open the dialog over a blank draft.
    pub fn open_create(&mut self) {
        self.draft = Some(S::blank());
        self.dialog = DialogState::Open(DialogMode::Create);
    }

    /// Open the dialog over a copy of an existing entity.
    pub fn open_edit(&mut self, entity: S::Entity) {
        self.draft = Some(entity);
        self.dialog = DialogState::Open(DialogMode::Edit);
    }

    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::Closed;
        self.draft = None;
    }

    // ========== Operations ==========

    /// Re-fetch the collection. On failure the previous collection is
    /// left intact and an error notice is recorded.
    pub async fn refresh<A>(&mut self, api: &A)
    where
        A: EntityApi<S::Entity> + ?Sized,
    {
        if self.busy {
            return;
        }
        self.busy = true;
        if let Err(err) = self.reload(api).await {
            self.notice = Some(Notice::error(err.to_string()));
        }
        self.busy = false;
    }

    /// Validate and save the editing draft: create when the draft has no
    /// identifier yet, update otherwise. On success the dialog closes and
    /// the collection is re-fetched; on failure the dialog stays open so
    /// the input is not lost.
    pub async fn submit<A>(&mut self, api: &A)
    where
        A: EntityApi<S::Entity> + ?Sized,
    {
        if self.busy {
            return;
        }
        let Some(draft) = self.draft.as_mut() else {
            return;
        };

        if let Err(message) = S::validate(draft) {
            self.notice = Some(Notice::error(message));
            return;
        }

        let id = draft.id();
        let payload = draft.to_draft();

        self.busy = true;
        let saved = if id == UNSAVED {
            api.create(&payload).await.map(drop)
        } else {
            api.update(id, &payload).await.map(drop)
        };

        match saved {
            Ok(()) => {
                self.close_dialog();
                self.notice = Some(Notice::success(format!("{} saved.", S::Entity::NAME)));
                if let Err(err) = self.reload(api).await {
                    self.notice = Some(Notice::error(err.to_string()));
                }
            }
            Err(err) => {
                tracing::warn!(entity = S::Entity::NAME, error = %err, "save failed");
                self.notice = Some(Notice::error(err.to_string()));
            }
        }
        self.busy = false;
    }

    /// Delete the entity addressed by `id`, gated by `confirm`. A
    /// declined confirmation issues no call at all. On success the
    /// collection is re-fetched; on failure it is left unchanged.
    pub async fn remove<A>(&mut self, api: &A, confirm: &dyn Confirm, id: EntityId)
    where
        A: EntityApi<S::Entity> + ?Sized,
    {
        if self.busy {
            return;
        }
        let prompt = format!("Delete this {}?", S::Entity::NAME.to_lowercase());
        if !confirm.confirm(&prompt) {
            return;
        }

        self.busy = true;
        match api.delete(id).await {
            Ok(()) => {
                self.notice = Some(Notice::success(format!("{} deleted.", S::Entity::NAME)));
                if let Err(err) = self.reload(api).await {
                    self.notice = Some(Notice::error(err.to_string()));
                }
            }
            Err(err) => {
                tracing::warn!(entity = S::Entity::NAME, id, error = %err, "delete failed");
                self.notice = Some(Notice::error(err.to_string()));
            }
        }
        self.busy = false;
    }

    /// Replace the owned collection wholesale from `list()`.
    async fn reload<A>(&mut self, api: &A) -> Result<(), ApiError>
    where
        A: EntityApi<S::Entity> + ?Sized,
    {
        self.load = LoadState::Loading;
        match api.list().await {
            Ok(items) => {
                tracing::info!(entity = S::Entity::NAME, count = items.len(), "collection refreshed");
                self.items = items;
                self.load = LoadState::Ready;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(entity = S::Entity::NAME, error = %err, "refresh failed");
                self.load = LoadState::Errored;
                Err(err)
            }
        }
    }
}
