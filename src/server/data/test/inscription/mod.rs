use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::inscription::InscriptionRepository,
    error::AppError,
    model::inscription::{CreateInscriptionParams, Inscription, InscriptionStatus},
};

mod get_active_employee_ids;
mod get_all;
