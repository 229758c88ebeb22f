use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{registration::RegistrationError, AppError},
    model::inscription::{CreateInscriptionParams, InscriptionStatus, UpdateInscriptionParams},
    service::inscription::InscriptionService,
};

mod delete;
mod update;

fn params(employee_id: i32, session_id: i32) -> CreateInscriptionParams {
    CreateInscriptionParams {
        employee_id,
        session_id,
        status: None,
    }
}
