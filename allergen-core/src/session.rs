//! Review/selection workflow.
//!
//! An explicit state machine replacing the original UI's ad hoc boolean
//! flags: a batch must be reviewed and approved before any report is
//! computed, and exactly one recipe is "active" at a time once approved.

use crate::cache::{CacheStats, IngredientCache};
use crate::lookup::AllergenLookup;
use crate::pipeline::process_recipe;
use crate::types::{RecipeBatch, RecipeReport};

/// Workflow state for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowState {
    /// No batch loaded.
    #[default]
    Empty,
    /// Batch loaded, awaiting explicit user approval.
    PendingReview,
    /// Batch approved; `active` is the index of the selected recipe.
    Approved { active: usize },
}

/// Ticket for one selection, carrying the generation it was issued at.
///
/// A ticket goes stale as soon as a newer selection (or a re-import) bumps
/// the session generation; processing a stale ticket is a no-op, so a later
/// selection always supersedes an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    generation: u64,
}

impl Selection {
    pub fn index(&self) -> usize {
        self.index
    }
}

/// One user session: the current batch, the workflow state, the ingredient
/// cache, and the report for the active recipe.
///
/// There is no teardown; a session lives for the life of the process. The
/// ingredient cache is deliberately NOT cleared on re-import, matching the
/// original behavior: an ingredient name reused across unrelated batches
/// keeps its first resolved allergen data for the whole session.
#[derive(Debug, Default)]
pub struct Session {
    batch: RecipeBatch,
    state: WorkflowState,
    cache: IngredientCache,
    report: Option<RecipeReport>,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn recipes(&self) -> &RecipeBatch {
        &self.batch
    }

    /// Report for the active recipe, if one has been computed since the last
    /// selection change.
    pub fn report(&self) -> Option<&RecipeReport> {
        self.report.as_ref()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Load a freshly imported batch, replacing any prior one.
    ///
    /// A non-empty batch moves the session to `PendingReview` (any prior
    /// approval is forgotten); an empty one resets to `Empty`. Outstanding
    /// selection tickets are invalidated either way. The cache is kept.
    pub fn load_batch(&mut self, batch: RecipeBatch) {
        self.generation += 1;
        self.report = None;
        if batch.is_empty() {
            self.batch.clear();
            self.state = WorkflowState::Empty;
        } else {
            tracing::info!(recipes = batch.len(), "batch loaded, awaiting review");
            self.batch = batch;
            self.state = WorkflowState::PendingReview;
        }
    }

    /// Approve the loaded batch.
    ///
    /// Takes no parameters and does not re-validate the batch. Moves to
    /// `Approved` with recipe 0 active and returns its selection ticket, so
    /// the first report can be computed immediately. Returns `None` in any
    /// other state.
    pub fn approve(&mut self) -> Option<Selection> {
        if self.state != WorkflowState::PendingReview {
            return None;
        }
        self.state = WorkflowState::Approved { active: 0 };
        self.generation += 1;
        self.report = None;
        Some(Selection {
            index: 0,
            generation: self.generation,
        })
    }

    /// Change which recipe is active.
    ///
    /// Only valid in `Approved`, with `index` in bounds of the batch; both
    /// are caller contract violations, not recoverable errors. Clears the
    /// current report and invalidates any outstanding ticket, even when the
    /// same index is reselected.
    pub fn select_recipe(&mut self, index: usize) -> Selection {
        assert!(
            matches!(self.state, WorkflowState::Approved { .. }),
            "select_recipe called before approval"
        );
        assert!(
            index < self.batch.len(),
            "recipe index {} out of bounds for batch of {}",
            index,
            self.batch.len()
        );
        self.state = WorkflowState::Approved { active: index };
        self.generation += 1;
        self.report = None;
        Selection {
            index,
            generation: self.generation,
        }
    }

    /// Run the pipeline for a selection ticket and install the report.
    ///
    /// A stale ticket (superseded by a later selection or re-import) is
    /// skipped entirely and `false` is returned; the session's report is
    /// left untouched.
    pub async fn process_selection(
        &mut self,
        selection: Selection,
        lookup: &dyn AllergenLookup,
    ) -> bool {
        if selection.generation != self.generation {
            tracing::debug!(
                index = selection.index,
                "stale selection superseded, skipping"
            );
            return false;
        }

        let recipe = self.batch[selection.index].clone();
        let report = process_recipe(&recipe, &mut self.cache, lookup).await;
        self.report = Some(report);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Recipe;

    fn batch() -> RecipeBatch {
        vec![
            Recipe {
                name: "Cake".to_string(),
                ingredients: vec!["flour".to_string()],
            },
            Recipe {
                name: "Salad".to_string(),
                ingredients: vec!["lettuce".to_string()],
            },
        ]
    }

    #[test]
    fn test_empty_batch_resets_to_empty() {
        let mut session = Session::new();
        session.load_batch(batch());
        assert_eq!(session.state(), WorkflowState::PendingReview);

        session.load_batch(Vec::new());
        assert_eq!(session.state(), WorkflowState::Empty);
        assert!(session.recipes().is_empty());
    }

    #[test]
    fn test_approve_requires_pending_review() {
        let mut session = Session::new();
        assert!(session.approve().is_none());

        session.load_batch(batch());
        let selection = session.approve().unwrap();
        assert_eq!(selection.index(), 0);
        assert_eq!(session.state(), WorkflowState::Approved { active: 0 });

        // Already approved: a second approval is a no-op
        assert!(session.approve().is_none());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_select_out_of_bounds_panics() {
        let mut session = Session::new();
        session.load_batch(batch());
        session.approve();
        session.select_recipe(2);
    }

    #[test]
    #[should_panic(expected = "before approval")]
    fn test_select_before_approval_panics() {
        let mut session = Session::new();
        session.load_batch(batch());
        session.select_recipe(0);
    }
}
