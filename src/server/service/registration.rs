//! Registration window policy.
//!
//! A period accepts inscription changes while its status is `open` and the current
//! date is on or before its registration deadline. The date comparison ignores time
//! of day, so the deadline day itself is still open.
//!
//! Callers always pass a freshly loaded period; nothing here caches deadlines.

use chrono::NaiveDate;

use crate::server::{
    error::registration::RegistrationError,
    model::periode::{Periode, PeriodeStatus},
};

/// Returns whether the period accepts registrations on `today`.
pub fn is_open(periode: &Periode, today: NaiveDate) -> bool {
    periode.status == PeriodeStatus::Open && today <= periode.registration_deadline
}

/// Requires the period to be fully open.
///
/// A passed deadline is reported before a non-open status.
///
/// # Returns
/// - `Ok(())` - Period is open on `today`
/// - `Err(RegistrationError::DeadlinePassed)` - `today` is after the deadline
/// - `Err(RegistrationError::Closed)` - Status is anything but `open`
pub fn ensure_open(periode: &Periode, today: NaiveDate) -> Result<(), RegistrationError> {
    ensure_before_deadline(periode, today)?;

    if periode.status != PeriodeStatus::Open {
        return Err(RegistrationError::Closed {
            status: periode.status.as_str().to_string(),
        });
    }

    Ok(())
}

/// Requires `today` to be on or before the period's deadline, ignoring status.
pub fn ensure_before_deadline(periode: &Periode, today: NaiveDate) -> Result<(), RegistrationError> {
    if today > periode.registration_deadline {
        return Err(RegistrationError::DeadlinePassed {
            deadline: periode.registration_deadline,
        });
    }

    Ok(())
}
