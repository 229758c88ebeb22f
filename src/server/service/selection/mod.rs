//! Per-session selection lottery.
//!
//! Active inscriptions of a session are shuffled; the first three candidates become
//! `official` winners with ranks 1 to 3 and the next four at most become ranked
//! `alternate`s. A run replaces every earlier result of the session inside a single
//! transaction that holds an exclusive lock on the session row, so concurrent runs
//! for the same session are serialized and never leave a mix of old and new rows.

pub mod shuffle;

use chrono::Utc;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{
        inscription::InscriptionRepository, selection_result::SelectionResultRepository,
        session::SessionRepository,
    },
    error::{internal::InternalError, selection::SelectionError, AppError},
    model::selection::{RankedCandidate, SelectionCategory, SelectionResult},
};

use self::shuffle::Shuffler;

/// Fewest active inscriptions a session needs before a lottery can run.
pub const MIN_CANDIDATES: usize = 3;

/// Number of `official` winners.
pub const OFFICIAL_SLOTS: usize = 3;

/// Upper bound on rows produced by one run, officials and alternates combined.
pub const TOTAL_SLOTS: usize = 7;

pub struct SelectionService<'a> {
    db: &'a DatabaseConnection,
    shuffler: &'a dyn Shuffler,
}

impl<'a> SelectionService<'a> {
    pub fn new(db: &'a DatabaseConnection, shuffler: &'a dyn Shuffler) -> Self {
        Self { db, shuffler }
    }

    /// Runs the lottery for a session, replacing any earlier results.
    ///
    /// # Returns
    /// - `Ok(Vec<SelectionResult>)` - New results ordered by rank
    /// - `Err(AppError::NotFound)` - Session does not exist
    /// - `Err(AppError::SelectionErr)` - Fewer than three active inscriptions; earlier
    ///   results are left untouched
    pub async fn generate(&self, session_id: i32) -> Result<Vec<SelectionResult>, AppError> {
        let txn = self.db.begin().await?;

        self.lock_session(&txn, session_id).await?;
        let results = self.draw(&txn, session_id).await?;

        txn.commit().await?;

        Ok(results)
    }

    /// Runs the lottery only if the session has no results yet.
    ///
    /// The emptiness check happens after the session lock is taken, so two callers
    /// racing on the same session generate at most once.
    ///
    /// # Returns
    /// - `Ok(Some(results))` - Lottery ran
    /// - `Ok(None)` - Session already had results
    /// - `Err(AppError)` - Same failures as `generate`
    pub async fn generate_if_absent(
        &self,
        session_id: i32,
    ) -> Result<Option<Vec<SelectionResult>>, AppError> {
        let txn = self.db.begin().await?;

        self.lock_session(&txn, session_id).await?;

        if SelectionResultRepository::new(&txn)
            .count_by_session(session_id)
            .await?
            > 0
        {
            txn.rollback().await?;
            return Ok(None);
        }

        let results = self.draw(&txn, session_id).await?;

        txn.commit().await?;

        Ok(Some(results))
    }

    async fn lock_session(&self, txn: &DatabaseTransaction, session_id: i32) -> Result<(), AppError> {
        match SessionRepository::new(txn)
            .find_by_id_for_update(session_id)
            .await?
        {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!(
                "Session {} not found",
                session_id
            ))),
        }
    }

    /// Shuffles candidates and swaps the session's results for the new batch.
    async fn draw(
        &self,
        txn: &DatabaseTransaction,
        session_id: i32,
    ) -> Result<Vec<SelectionResult>, AppError> {
        let candidates = InscriptionRepository::new(txn)
            .get_active_employee_ids(session_id)
            .await?;

        if candidates.len() < MIN_CANDIDATES {
            return Err(SelectionError::InsufficientCandidates {
                found: candidates.len(),
                required: MIN_CANDIDATES,
            }
            .into());
        }

        let permutation = self.shuffler.permutation(candidates.len());
        let ranked = assign_ranks(&candidates, &permutation)?;

        let repo = SelectionResultRepository::new(txn);
        repo.delete_by_session(session_id).await?;
        let results = repo.insert_batch(session_id, &ranked, Utc::now()).await?;

        Ok(results)
    }
}

/// Assigns categories and ranks to candidates in permutation order.
///
/// Position `i` of `permutation` names the candidate placed at rank `i + 1`. The
/// first three placed are `Official`, the rest `Alternate`; placement stops after
/// seven.
///
/// # Returns
/// - `Ok(Vec<RankedCandidate>)` - `min(7, candidates.len())` entries ordered by rank
/// - `Err(InternalError::InvalidPermutation)` - `permutation` is not a permutation of
///   the candidate indices
pub fn assign_ranks(
    candidates: &[i32],
    permutation: &[usize],
) -> Result<Vec<RankedCandidate>, InternalError> {
    let mut seen = vec![false; candidates.len()];
    let is_permutation = permutation.len() == candidates.len()
        && permutation
            .iter()
            .all(|&i| i < seen.len() && !std::mem::replace(&mut seen[i], true));

    if !is_permutation {
        return Err(InternalError::InvalidPermutation {
            len: candidates.len(),
        });
    }

    Ok(permutation
        .iter()
        .take(TOTAL_SLOTS)
        .enumerate()
        .map(|(position, &index)| RankedCandidate {
            employee_id: candidates[index],
            category: if position < OFFICIAL_SLOTS {
                SelectionCategory::Official
            } else {
                SelectionCategory::Alternate
            },
            rank: position as i32 + 1,
        })
        .collect())
}
