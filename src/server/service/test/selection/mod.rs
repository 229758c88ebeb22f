use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::selection_result::SelectionResultRepository,
    error::{internal::InternalError, selection::SelectionError, AppError},
    model::selection::SelectionCategory,
    service::selection::{assign_ranks, SelectionService},
};

use super::{BrokenShuffler, IdentityShuffler, ReverseShuffler};

mod assign_ranks;
mod generate;
