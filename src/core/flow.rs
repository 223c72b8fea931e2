//! Lead form state and submission sequences
//!
//! `TrialFlow` and `DemoFlow` are plain state holders driven by the modal
//! components. They never perform I/O; the async [`submit_trial`] and
//! [`schedule_demo`] functions run the network sequence and hand the outcome
//! back through `finish`.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::core::api::{
    schedule_error_message, submit_error_message, AnalyticsEvent, ApiClient, DemoRequest,
    EventName, LandingResponse, LeadSubmission, Transport, LANDING_PAGE_ID,
};
use crate::core::schedule::{to_utc, validate_demo_datetime};
use crate::core::validation::validate_contact;

/// Timezone reported with demo bookings
pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

/// Step of the demo scheduling wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoStep {
    /// Contact details
    #[default]
    Entry,
    /// Slot selection
    DateTime,
    /// Confirmation
    Success,
}

impl DemoStep {
    /// Move to `to` if the wizard allows it
    pub fn transition(self, to: DemoStep) -> Result<DemoStep, StepTransitionError> {
        match (self, to) {
            (DemoStep::Entry, DemoStep::DateTime)
            | (DemoStep::DateTime, DemoStep::Entry)
            | (DemoStep::DateTime, DemoStep::Success) => Ok(to),
            (from, to) => Err(StepTransitionError { from, to }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot move from {from:?} to {to:?}")]
pub struct StepTransitionError {
    pub from: DemoStep,
    pub to: DemoStep,
}

/// Editable lead form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    Name,
    Email,
    Whatsapp,
    Company,
    Notes,
    PreferredDatetime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialFields {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub company: String,
    pub notes: String,
}

impl TrialFields {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Whatsapp => &self.whatsapp,
            LeadField::Company => &self.company,
            LeadField::Notes => &self.notes,
            LeadField::PreferredDatetime => "",
        }
    }

    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::Whatsapp => self.whatsapp = value,
            LeadField::Company => self.company = value,
            LeadField::Notes => self.notes = value,
            LeadField::PreferredDatetime => {}
        }
    }

    pub fn to_submission(&self) -> LeadSubmission {
        LeadSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            whatsapp: self.whatsapp.clone(),
            company: self.company.clone(),
            notes: self.notes.clone(),
            action_type: "trial".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoFields {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub company: String,
    /// Selected slot value, `YYYY-MM-DDTHH:MM` local
    pub preferred_datetime: String,
    pub timezone: String,
}

impl Default for DemoFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            whatsapp: String::new(),
            company: String::new(),
            preferred_datetime: String::new(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl DemoFields {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Whatsapp => &self.whatsapp,
            LeadField::Company => &self.company,
            LeadField::PreferredDatetime => &self.preferred_datetime,
            LeadField::Notes => "",
        }
    }

    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::Whatsapp => self.whatsapp = value,
            LeadField::Company => self.company = value,
            LeadField::PreferredDatetime => self.preferred_datetime = value,
            LeadField::Notes => {}
        }
    }

    pub fn to_request(&self, preferred_datetime: DateTime<Utc>) -> DemoRequest {
        DemoRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            whatsapp: self.whatsapp.clone(),
            company: self.company.clone(),
            preferred_datetime,
            timezone: self.timezone.clone(),
        }
    }
}

/// Trial signup modal state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrialFlow {
    pub fields: TrialFields,
    pub loading: bool,
    pub error: Option<String>,
    pub success: bool,
    pub trial_expires: Option<String>,
}

impl TrialFlow {
    /// Update a field; any displayed error is cleared
    pub fn edit(&mut self, field: LeadField, value: String) {
        self.fields.set(field, value);
        self.error = None;
    }

    /// Validate and enter the loading state.
    ///
    /// Returns the payload to send, or `None` when validation failed (the
    /// message is stored in `error`) or a submission is already running.
    pub fn begin_submit(&mut self) -> Option<LeadSubmission> {
        if self.loading || self.success {
            return None;
        }

        if let Err(e) = validate_contact(&self.fields.name, &self.fields.email, &self.fields.whatsapp) {
            self.error = Some(e.to_string());
            return None;
        }

        self.error = None;
        self.loading = true;
        Some(self.fields.to_submission())
    }

    pub fn finish(&mut self, outcome: Result<LandingResponse, String>) {
        self.loading = false;
        match outcome {
            Ok(response) => {
                self.success = true;
                self.trial_expires = response.trial_expires;
            }
            Err(message) => self.error = Some(message),
        }
    }

    pub fn can_close(&self) -> bool {
        !self.loading
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Demo scheduling wizard state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoFlow {
    pub fields: DemoFields,
    pub step: DemoStep,
    pub loading: bool,
    pub error: Option<String>,
    pub confirmation: Option<LandingResponse>,
}

impl DemoFlow {
    pub fn edit(&mut self, field: LeadField, value: String) {
        self.fields.set(field, value);
        self.error = None;
    }

    /// Validate contact details and advance to slot selection
    pub fn next(&mut self) -> bool {
        if self.step != DemoStep::Entry {
            return false;
        }

        if let Err(e) = validate_contact(&self.fields.name, &self.fields.email, &self.fields.whatsapp) {
            self.error = Some(e.to_string());
            return false;
        }

        match self.step.transition(DemoStep::DateTime) {
            Ok(step) => {
                self.step = step;
                self.error = None;
                true
            }
            Err(_) => false,
        }
    }

    /// Return to contact details, keeping entered values
    pub fn back(&mut self) -> Result<(), StepTransitionError> {
        if self.loading {
            return Err(StepTransitionError {
                from: self.step,
                to: DemoStep::Entry,
            });
        }

        self.step = self.step.transition(DemoStep::Entry)?;
        self.error = None;
        Ok(())
    }

    /// Validate the selected slot against `now` and enter the loading state.
    ///
    /// Returns a snapshot of the fields and the parsed local slot.
    pub fn begin_submit(&mut self, now: NaiveDateTime) -> Option<(DemoFields, NaiveDateTime)> {
        if self.loading || self.step != DemoStep::DateTime {
            return None;
        }

        match validate_demo_datetime(&self.fields.preferred_datetime, now) {
            Ok(selected) => {
                self.error = None;
                self.loading = true;
                Some((self.fields.clone(), selected))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn finish(&mut self, outcome: Result<LandingResponse, String>) {
        self.loading = false;
        match outcome {
            Ok(confirmation) => match self.step.transition(DemoStep::Success) {
                Ok(step) => {
                    self.step = step;
                    self.confirmation = Some(confirmation);
                }
                Err(e) => self.error = Some(e.to_string()),
            },
            Err(message) => self.error = Some(message),
        }
    }

    pub fn can_close(&self) -> bool {
        !self.loading
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Submit a trial signup.
///
/// Sends a best-effort `form_submit` event, then the submission, then a
/// `trial_started` event on success. Errors come back as display messages.
pub async fn submit_trial<T: Transport>(
    client: &ApiClient<T>,
    submission: &LeadSubmission,
) -> Result<LandingResponse, String> {
    client
        .track_event(
            AnalyticsEvent::new(EventName::FormSubmit)
                .with("action_type", submission.action_type.as_str())
                .with("page", LANDING_PAGE_ID),
        )
        .await;

    match client.submit_form(submission).await {
        Ok(response) => {
            client
                .track_event(
                    AnalyticsEvent::new(EventName::TrialStarted)
                        .with("email", submission.email.as_str())
                        .with("page", LANDING_PAGE_ID),
                )
                .await;
            Ok(response)
        }
        Err(e) => {
            leptos::logging::warn!("Trial signup failed: {}", e);
            Err(submit_error_message(&e))
        }
    }
}

/// Book a demo for the local slot `selected` in `tz`.
///
/// Same sequence as [`submit_trial`] with `demo_scheduled` as the success
/// event.
pub async fn schedule_demo<T: Transport, Tz: TimeZone>(
    client: &ApiClient<T>,
    fields: &DemoFields,
    selected: NaiveDateTime,
    tz: &Tz,
) -> Result<LandingResponse, String> {
    client
        .track_event(
            AnalyticsEvent::new(EventName::FormSubmit)
                .with("action_type", "demo")
                .with("page", LANDING_PAGE_ID),
        )
        .await;

    let preferred = to_utc(selected, tz).map_err(|e| e.to_string())?;
    let request = fields.to_request(preferred);

    match client.schedule_demo(&request).await {
        Ok(confirmation) => {
            client
                .track_event(
                    AnalyticsEvent::new(EventName::DemoScheduled)
                        .with("email", fields.email.as_str())
                        .with("demo_datetime", fields.preferred_datetime.as_str())
                        .with("page", LANDING_PAGE_ID),
                )
                .await;
            Ok(confirmation)
        }
        Err(e) => {
            leptos::logging::warn!("Demo scheduling failed: {}", e);
            Err(schedule_error_message(&e))
        }
    }
}
