use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::selection_result::SelectionResultRepository,
    error::AppError,
    model::selection::{RankedCandidate, SelectionCategory, SelectionResultParams},
};

mod create;
mod delete_by_session;
mod insert_batch;
mod session_ids_with_results;
