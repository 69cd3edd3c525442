#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

/// Fixed delay before the simulated submission completes, in milliseconds.
pub const SUBMIT_DELAY_MS: u64 = 1_500;

/// How long the confirmation stays on screen before reverting to idle.
pub const CONFIRMATION_MS: u64 = 5_000;

/// Submission lifecycle. Strictly linear: idle, submitting, submitted,
/// back to idle. There is no failure state; the submission is simulated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Contact form fields plus the submission state machine.
///
/// The private `generation` counter is bumped on every accepted submission
/// and handed out as a token. Deferred transitions (`complete_submit`,
/// `dismiss`) only apply when their token still matches, so a timer
/// scheduled for an earlier submission can never mutate a later one.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: SubmitStatus,
    generation: u32,
}

impl ContactForm {
    /// All three fields are required before a submission is accepted.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Start a submission from `Idle` with a complete form.
    ///
    /// Clears the fields, moves to `Submitting`, and returns the token the
    /// caller must pass to [`Self::complete_submit`] and [`Self::dismiss`].
    /// Returns `None` (and changes nothing) from any other state or with an
    /// incomplete form.
    pub fn begin_submit(&mut self) -> Option<u32> {
        if self.status != SubmitStatus::Idle || !self.is_complete() {
            return None;
        }
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.status = SubmitStatus::Submitting;
        self.generation = self.generation.wrapping_add(1);
        Some(self.generation)
    }

    /// Finish the submission: `Submitting` to `Submitted`.
    ///
    /// Ignored (returns `false`) when the token is stale or the machine is
    /// not in `Submitting`.
    pub fn complete_submit(&mut self, token: u32) -> bool {
        if self.status == SubmitStatus::Submitting && token == self.generation {
            self.status = SubmitStatus::Submitted;
            true
        } else {
            false
        }
    }

    /// Dismiss the confirmation: `Submitted` back to `Idle`.
    ///
    /// Ignored when the token is stale or the machine is not in
    /// `Submitted`.
    pub fn dismiss(&mut self, token: u32) -> bool {
        if self.status == SubmitStatus::Submitted && token == self.generation {
            self.status = SubmitStatus::Idle;
            true
        } else {
            false
        }
    }
}
