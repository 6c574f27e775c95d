//! Contact form state machine.
//!
//! ```text
//! Editing ──submit──▶ Submitting ──delay elapsed──▶ Submitted
//! ```
//!
//! `Submitted` is terminal for the lifetime of a mounted form. There is no
//! failure transition: the artificial delay always ends in success. The
//! pending submission only holds a weak reference, so completing after the
//! form was unmounted does nothing.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use thiserror::Error;

/// Form inputs, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Company,
    Message,
}

impl FormField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Company, Self::Message];

    /// `name`/`id` attribute of the input.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Message => "message",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name *",
            Self::Email => "Email Address *",
            Self::Company => "Company Name",
            Self::Message => "Message *",
        }
    }

    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Company)
    }
}

/// Current input values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::Message => &mut self.message,
        }
    }
}

/// Lifecycle phase of a form instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Request the form refuses in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("`{}` is required", .0.name())]
    Missing(FormField),

    #[error("form is not editable while {0:?}")]
    Frozen(FormPhase),
}

/// State owned by one contact section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    phase: FormPhase,
}

impl ContactForm {
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    pub const fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Input change handler. Fields are frozen outside `Editing`.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> Result<(), FormError> {
        self.ensure_editing()?;
        *self.fields.slot(field) = value.into();
        Ok(())
    }

    /// First required field that is still empty.
    pub fn missing_required(&self) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .find(|f| f.is_required() && self.fields.get(*f).is_empty())
    }

    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Editing && self.missing_required().is_none()
    }

    /// `Editing → Submitting`.
    pub fn begin_submit(&mut self) -> Result<(), FormError> {
        self.ensure_editing()?;
        if let Some(field) = self.missing_required() {
            return Err(FormError::Missing(field));
        }
        self.phase = FormPhase::Submitting;
        Ok(())
    }

    /// `Submitting → Submitted`: clears every field.
    ///
    /// Returns `false` if no submission was in flight.
    pub fn complete(&mut self) -> bool {
        if self.phase != FormPhase::Submitting {
            return false;
        }
        self.fields = ContactFields::default();
        self.phase = FormPhase::Submitted;
        true
    }

    fn ensure_editing(&self) -> Result<(), FormError> {
        match self.phase {
            FormPhase::Editing => Ok(()),
            phase => Err(FormError::Frozen(phase)),
        }
    }
}

/// A form attached to a live section.
///
/// Dropping it (or calling [`MountedForm::unmount`]) ends the instance; a
/// submission still waiting on its delay then settles as
/// [`SubmitOutcome::Unmounted`].
#[derive(Debug)]
pub struct MountedForm {
    state: Arc<Mutex<ContactForm>>,
    delay: Duration,
}

/// How a pending submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    /// The form was gone when the delay elapsed; nothing was touched
    Unmounted,
}

/// Submission waiting on its artificial delay.
#[must_use = "a submission only completes when awaited"]
#[derive(Debug)]
pub struct PendingSubmission {
    state: Weak<Mutex<ContactForm>>,
    delay: Duration,
}

impl MountedForm {
    pub fn mount(delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ContactForm::default())),
            delay,
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> ContactForm {
        self.state.lock().clone()
    }

    pub fn phase(&self) -> FormPhase {
        self.state.lock().phase()
    }

    pub fn set(&self, field: FormField, value: impl Into<String>) -> Result<(), FormError> {
        self.state.lock().set(field, value)
    }

    /// Start submitting. The state flips to `Submitting` immediately; the
    /// returned future finishes the transition after the delay.
    pub fn submit(&self) -> Result<PendingSubmission, FormError> {
        self.state.lock().begin_submit()?;
        crate::debug!("form"; "submitting, settles in {}ms", self.delay.as_millis());
        Ok(PendingSubmission {
            state: Arc::downgrade(&self.state),
            delay: self.delay,
        })
    }

    pub fn unmount(self) {
        drop(self);
    }
}

impl PendingSubmission {
    /// Wait out the delay on a non-blocking timer, then complete.
    pub async fn settle(self) -> SubmitOutcome {
        tokio::time::sleep(self.delay).await;

        match self.state.upgrade() {
            Some(state) => {
                state.lock().complete();
                SubmitOutcome::Submitted
            }
            None => SubmitOutcome::Unmounted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1000);

    fn filled() -> MountedForm {
        let form = MountedForm::mount(DELAY);
        form.set(FormField::Name, "Ann").unwrap();
        form.set(FormField::Email, "a@b.com").unwrap();
        form.set(FormField::Message, "Hi").unwrap();
        form
    }

    #[test]
    fn test_required_fields() {
        let mut form = ContactForm::default();
        assert_eq!(form.missing_required(), Some(FormField::Name));
        assert!(!form.can_submit());

        form.set(FormField::Name, "Ann").unwrap();
        form.set(FormField::Email, "a@b.com").unwrap();
        assert_eq!(form.missing_required(), Some(FormField::Message));
        assert_eq!(form.begin_submit(), Err(FormError::Missing(FormField::Message)));
        assert_eq!(form.phase(), FormPhase::Editing);

        form.set(FormField::Message, "Hi").unwrap();
        // company stays optional
        assert!(form.can_submit());
    }

    #[test]
    fn test_complete_requires_submitting() {
        let mut form = ContactForm::default();
        assert!(!form.complete());
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_transitions_and_clears() {
        let form = filled();
        form.set(FormField::Company, "Acme").unwrap();
        assert_eq!(form.phase(), FormPhase::Editing);

        let pending = form.submit().unwrap();
        assert_eq!(form.phase(), FormPhase::Submitting);
        // fields are frozen while submitting
        assert_eq!(
            form.set(FormField::Name, "Bob"),
            Err(FormError::Frozen(FormPhase::Submitting))
        );
        assert_eq!(form.snapshot().fields().name, "Ann");

        assert_eq!(pending.settle().await, SubmitOutcome::Submitted);
        let state = form.snapshot();
        assert_eq!(state.phase(), FormPhase::Submitted);
        assert_eq!(state.fields(), &ContactFields::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_is_honoured() {
        let form = filled();
        let pending = form.submit().unwrap();
        let started = tokio::time::Instant::now();

        pending.settle().await;
        assert!(started.elapsed() >= DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_other_work_runs_during_delay() {
        let form = filled();
        let pending = tokio::spawn(form.submit().unwrap().settle());

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(form.phase(), FormPhase::Submitting);

        assert_eq!(pending.await.unwrap(), SubmitOutcome::Submitted);
        assert_eq!(form.phase(), FormPhase::Submitted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_during_delay_is_noop() {
        let form = filled();
        let pending = form.submit().unwrap();
        form.unmount();

        assert_eq!(pending.settle().await, SubmitOutcome::Unmounted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submitted_is_terminal() {
        let form = filled();
        form.submit().unwrap().settle().await;

        assert_eq!(
            form.submit().unwrap_err(),
            FormError::Frozen(FormPhase::Submitted)
        );
        assert_eq!(
            form.set(FormField::Name, "Ann"),
            Err(FormError::Frozen(FormPhase::Submitted))
        );
    }

    #[test]
    fn test_double_submit_refused() {
        let form = filled();
        let _pending = form.submit().unwrap();
        assert_eq!(
            form.submit().unwrap_err(),
            FormError::Frozen(FormPhase::Submitting)
        );
    }
}
