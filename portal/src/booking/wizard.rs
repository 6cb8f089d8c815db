//! Booking wizard state machine.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use tracing::{debug, info};

use super::{BookingDraft, BookingStepError, PoolChoice, WizardStep};
use crate::domain::{BOOKING_SLOTS, BookingHandoff, BookingRequest, Pool, Service, TimeSlot};

/// Modulus keeping the last six digits of a millisecond timestamp.
const CONFIRMATION_ID_MODULUS: i64 = 1_000_000;

/// Display identifier for a booking confirmed at `now`.
///
/// Built from the last six digits of the Unix timestamp in milliseconds. It is
/// only unique enough to show on the confirmation step.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use portal::booking::confirmation_id;
///
/// let now = Utc.timestamp_millis_opt(1_705_330_482_913).single().expect("valid instant");
/// assert_eq!(confirmation_id(now), "ORD-482913");
/// ```
pub fn confirmation_id(now: DateTime<Utc>) -> String {
    let suffix = now.timestamp_millis().rem_euclid(CONFIRMATION_ID_MODULUS);
    format!("ORD-{suffix:06}")
}

/// A booking in progress for one chosen service.
///
/// Fields are editable only on their own step. Moving back keeps what was
/// entered. [`reset`](Self::reset) returns to step one with a blank draft.
pub struct BookingWizard {
    service: Service,
    pools: Vec<PoolChoice>,
    step: WizardStep,
    draft: BookingDraft,
    confirmation: Option<BookingRequest>,
    clock: Arc<dyn Clock>,
    handoff: Arc<dyn BookingHandoff>,
}

impl fmt::Debug for BookingWizard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingWizard")
            .field("service", &self.service.id())
            .field("step", &self.step)
            .field("draft", &self.draft)
            .field("confirmation", &self.confirmation)
            .finish_non_exhaustive()
    }
}

impl BookingWizard {
    /// Opens the wizard on step one for `service`.
    pub fn new(
        service: Service,
        pools: &[Pool],
        clock: Arc<dyn Clock>,
        handoff: Arc<dyn BookingHandoff>,
    ) -> Self {
        debug!(service_id = %service.id(), pools = pools.len(), "booking wizard opened");
        Self {
            service,
            pools: pools.iter().map(PoolChoice::from).collect(),
            step: WizardStep::SelectPool,
            draft: BookingDraft::default(),
            confirmation: None,
            clock,
            handoff,
        }
    }

    /// The service being booked.
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Pools offered on the first step.
    pub fn pools(&self) -> &[PoolChoice] {
        self.pools.as_slice()
    }

    /// The step currently shown.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Values entered so far. Going back never clears them.
    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// The confirmed booking, once step five is reached.
    pub fn confirmation(&self) -> Option<&BookingRequest> {
        self.confirmation.as_ref()
    }

    /// Times offered on the time step.
    pub fn time_slots(&self) -> &'static [TimeSlot] {
        &BOOKING_SLOTS
    }

    /// Calendar day that date selection is measured against.
    pub fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    /// The offered pool matching the draft's choice, if any.
    pub fn selected_pool(&self) -> Option<&PoolChoice> {
        let id = self.draft.pool_id.as_deref()?;
        self.pools.iter().find(|pool| pool.id == id)
    }

    /// Chooses the pool to service.
    ///
    /// # Errors
    ///
    /// Fails off the pool step, or when `pool_id` is not among
    /// [`pools`](Self::pools).
    pub fn select_pool(&mut self, pool_id: &str) -> Result<(), BookingStepError> {
        self.ensure_editable(WizardStep::SelectPool, "pool")?;
        if !self.pools.iter().any(|pool| pool.id == pool_id) {
            return Err(self.reject(BookingStepError::UnknownPool {
                id: pool_id.to_owned(),
            }));
        }
        self.draft.pool_id = Some(pool_id.to_owned());
        Ok(())
    }

    /// Records the chosen date. Past dates are refused when advancing.
    pub fn choose_date(&mut self, date: NaiveDate) -> Result<(), BookingStepError> {
        self.ensure_editable(WizardStep::SelectDate, "date")?;
        self.draft.date = Some(date);
        Ok(())
    }

    /// Chooses the visit time.
    ///
    /// # Errors
    ///
    /// Fails off the time step, or when `time` is not one of
    /// [`time_slots`](Self::time_slots).
    pub fn pick_time(&mut self, time: TimeSlot) -> Result<(), BookingStepError> {
        self.ensure_editable(WizardStep::SelectTime, "time")?;
        if !time.is_bookable() {
            return Err(self.reject(BookingStepError::UnofferedTime { time }));
        }
        self.draft.time = Some(time);
        Ok(())
    }

    /// Replaces the free-text notes. Empty notes are allowed.
    pub fn set_notes(&mut self, notes: impl Into<String>) -> Result<(), BookingStepError> {
        self.ensure_editable(WizardStep::ReviewNotes, "notes")?;
        self.draft.notes = notes.into();
        Ok(())
    }

    /// Whether [`next`](Self::next) would currently succeed, ignoring handoff.
    pub fn can_advance(&self) -> bool {
        !self.step.is_terminal() && self.check_step().is_ok()
    }

    /// Whether [`back`](Self::back) would succeed.
    pub fn can_go_back(&self) -> bool {
        !self.step.is_terminal() && self.step.previous().is_some()
    }

    /// Advances one step when the current step is complete.
    ///
    /// Leaving the review step confirms the booking and hands it off; a failed
    /// handoff keeps the wizard on the review step.
    pub fn next(&mut self) -> Result<WizardStep, BookingStepError> {
        let Some(target) = self.step.next() else {
            return Err(self.reject(BookingStepError::AlreadyConfirmed));
        };
        if let Err(error) = self.check_step() {
            return Err(self.reject(error));
        }
        if target.is_terminal() {
            let request = self.finalise()?;
            if let Err(error) = self.handoff.submit(&request) {
                return Err(self.reject(error.into()));
            }
            info!(
                confirmation_id = %request.confirmation_id,
                service_id = %request.service_id,
                pool_id = %request.pool_id,
                date = %request.date,
                time = %request.time,
                "booking confirmed"
            );
            self.confirmation = Some(request);
        }
        debug!(from = self.step.number(), to = target.number(), "booking wizard advanced");
        self.step = target;
        Ok(target)
    }

    /// Steps back one stage, keeping entered values.
    pub fn back(&mut self) -> Result<WizardStep, BookingStepError> {
        if self.step.is_terminal() {
            return Err(self.reject(BookingStepError::AlreadyConfirmed));
        }
        let Some(target) = self.step.previous() else {
            return Err(self.reject(BookingStepError::AtFirstStep));
        };
        debug!(from = self.step.number(), to = target.number(), "booking wizard went back");
        self.step = target;
        Ok(target)
    }

    /// Returns to step one and discards every entered value.
    pub fn reset(&mut self) {
        debug!(from = self.step.number(), "booking wizard reset");
        self.step = WizardStep::SelectPool;
        self.draft = BookingDraft::default();
        self.confirmation = None;
    }

    fn check_step(&self) -> Result<(), BookingStepError> {
        match self.step {
            WizardStep::SelectPool => self
                .draft
                .pool_id
                .as_ref()
                .map(|_| ())
                .ok_or(BookingStepError::PoolRequired),
            WizardStep::SelectDate => {
                let date = self.draft.date.ok_or(BookingStepError::DateRequired)?;
                let today = self.today();
                if date < today {
                    return Err(BookingStepError::DateInPast { date, today });
                }
                Ok(())
            }
            WizardStep::SelectTime => self
                .draft
                .time
                .map(|_| ())
                .ok_or(BookingStepError::TimeRequired),
            WizardStep::ReviewNotes => Ok(()),
            WizardStep::Confirmed => Err(BookingStepError::AlreadyConfirmed),
        }
    }

    fn finalise(&self) -> Result<BookingRequest, BookingStepError> {
        let pool = self
            .selected_pool()
            .ok_or(BookingStepError::PoolRequired)?;
        let date = self.draft.date.ok_or(BookingStepError::DateRequired)?;
        let time = self.draft.time.ok_or(BookingStepError::TimeRequired)?;
        Ok(BookingRequest {
            confirmation_id: confirmation_id(self.clock.utc()),
            service_id: self.service.id().to_owned(),
            service_name: self.service.name().to_owned(),
            company: self.service.company().to_owned(),
            price: self.service.price(),
            pool_id: pool.id.clone(),
            pool_name: pool.name.clone(),
            date,
            time,
            notes: self.draft.notes.trim().to_owned(),
        })
    }

    fn ensure_editable(
        &self,
        owner: WizardStep,
        field: &'static str,
    ) -> Result<(), BookingStepError> {
        if self.step == owner {
            return Ok(());
        }
        Err(self.reject(BookingStepError::FieldNotEditable {
            field,
            step: self.step.number(),
        }))
    }

    fn reject(&self, error: BookingStepError) -> BookingStepError {
        debug!(step = self.step.number(), %error, "booking wizard action rejected");
        error
    }
}
