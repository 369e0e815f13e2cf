//! Invitee-side selection of a single slot and the confirmation payload.
//!
//! `Unselected → Selected(choice) → Submitted`. Re-selecting is allowed until
//! the form is submitted; `Submitted` is terminal. Duplicate submissions across
//! form instances are the confirmation endpoint's concern, not checked here.

use serde::Serialize;

use crate::error::{Result, SlotError};
use crate::interval::TimeInterval;

/// What the invitee picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Slot(TimeInterval),
    /// The explicit "none of these times work" option.
    NoAvailability,
}

impl Choice {
    /// Value sent to the confirmation endpoint; `None` for no availability.
    pub fn candidate_value(&self) -> Option<String> {
        match self {
            Choice::Slot(iv) => Some(iv.candidate_value()),
            Choice::NoAvailability => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Unselected,
    Selected(Choice),
    Submitted(Choice),
}

/// Body of the appointment confirmation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub candidate: Option<String>,
    pub participant_emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_token: Option<String>,
}

/// One invitee form: the offered slots, the participants, and the selection state.
#[derive(Debug, Clone)]
pub struct Selection {
    offered: Vec<TimeInterval>,
    participants: Vec<String>,
    form_token: Option<String>,
    state: SelectionState,
}

impl Selection {
    /// Participant emails are trimmed; blank entries are dropped.
    pub fn new<I, S>(offered: Vec<TimeInterval>, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let participants = participants
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        Self {
            offered,
            participants,
            form_token: None,
            state: SelectionState::Unselected,
        }
    }

    /// Attach the token the form was opened with.
    pub fn with_form_token(mut self, token: impl Into<String>) -> Self {
        self.form_token = Some(token.into());
        self
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn offered(&self) -> &[TimeInterval] {
        &self.offered
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.state, SelectionState::Selected(_))
    }

    /// Select an offered slot or the no-availability option.
    ///
    /// # Errors
    /// `AlreadySubmitted` after submission; `UnknownCandidate` for a slot that
    /// is not in the offered list.
    pub fn select(&mut self, choice: Choice) -> Result<()> {
        if let SelectionState::Submitted(_) = self.state {
            return Err(SlotError::AlreadySubmitted);
        }
        if let Choice::Slot(iv) = &choice {
            if !self.offered.contains(iv) {
                return Err(SlotError::UnknownCandidate(iv.candidate_value()));
            }
        }
        self.state = SelectionState::Selected(choice);
        Ok(())
    }

    /// Finish the form and build the confirmation request.
    ///
    /// # Errors
    /// `NothingSelected` before any selection, `AlreadySubmitted` on a second
    /// call, `NoParticipants` when every participant email was blank. The
    /// state is left unchanged on error.
    pub fn submit(&mut self) -> Result<AppointmentRequest> {
        let choice = match self.state {
            SelectionState::Unselected => return Err(SlotError::NothingSelected),
            SelectionState::Submitted(_) => return Err(SlotError::AlreadySubmitted),
            SelectionState::Selected(choice) => choice,
        };
        if self.participants.is_empty() {
            return Err(SlotError::NoParticipants);
        }

        self.state = SelectionState::Submitted(choice);
        Ok(AppointmentRequest {
            candidate: choice.candidate_value(),
            participant_emails: self.participants.clone(),
            form_token: self.form_token.clone(),
        })
    }
}
