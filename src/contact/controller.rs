use super::{
    email_fallback, ContactError, ContactPayload, Field, FormState, FormTransport, Launcher,
    MailtoLink, SubmissionStatus, RESET_DELAY, SUBMIT_FAILED_MESSAGE,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

struct Shared {
    form: FormState,
    /// Bumped on every status change; a reset timer only fires if nothing has happened
    /// since it was scheduled
    generation: u64,
}

/// Owns the form state and runs submissions through a [FormTransport].
///
/// Status resets run on spawned tokio tasks, so the controller must live inside a tokio
/// runtime. Dropping the controller cancels any reset that hasn't fired yet.
pub struct ContactForm<T> {
    transport: T,
    shared: Arc<Mutex<Shared>>,
    timers: Mutex<Vec<JoinHandle<()>>>,
    reset_delay: Duration,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Held while a submission is in flight. If the submitting future is dropped before the
/// outcome is recorded, the form goes back to `Idle` so later submits aren't locked out.
struct InFlight<'a> {
    shared: &'a Mutex<Shared>,
    settled: bool,
}

impl<'a> InFlight<'a> {
    /// Marks the outcome as recorded and hands back the lock to record it under
    fn settle(mut self) -> MutexGuard<'a, Shared> {
        self.settled = true;
        lock(self.shared)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut shared = lock(self.shared);
        if shared.form.status == SubmissionStatus::Submitting {
            shared.form.status = SubmissionStatus::Idle;
            shared.generation += 1;
            warn!("contact form submission cancelled before it finished");
        }
    }
}

impl<T: FormTransport> ContactForm<T> {
    pub fn new(transport: T) -> ContactForm<T> {
        ContactForm {
            transport,
            shared: Arc::new(Mutex::new(Shared {
                form: FormState::default(),
                generation: 0,
            })),
            timers: Mutex::new(Vec::new()),
            reset_delay: RESET_DELAY,
        }
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> ContactForm<T> {
        self.reset_delay = delay;
        self
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        lock(&self.shared).form.set_field(field, value.into());
    }

    /// A copy of the current state
    pub fn snapshot(&self) -> FormState {
        lock(&self.shared).form.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        lock(&self.shared).form.status
    }

    /// Sends the current fields, exactly once, and returns the resulting status.
    ///
    /// While a submission is in flight further calls return
    /// [SubmissionStatus::Submitting] without sending anything. Failures are never
    /// retried: the status becomes [SubmissionStatus::Error] and the fields are kept so
    /// the visitor can try again.
    pub async fn submit(&self) -> SubmissionStatus {
        let payload = {
            let mut shared = lock(&self.shared);
            if shared.form.status == SubmissionStatus::Submitting {
                debug!("submission already in flight");
                return SubmissionStatus::Submitting;
            }
            shared.form.status = SubmissionStatus::Submitting;
            shared.form.error_message = None;
            shared.generation += 1;
            ContactPayload::from_form(&shared.form)
        };
        let in_flight = InFlight {
            shared: &self.shared,
            settled: false,
        };

        let outcome = self.transport.post(&payload).await;

        let (status, generation) = {
            let mut shared = in_flight.settle();
            match outcome {
                Ok(()) => {
                    info!("contact form sent");
                    shared.form.clear_fields();
                    shared.form.status = SubmissionStatus::Success;
                }
                Err(err) => {
                    error!(error = %err, "contact form submission failed");
                    shared.form.status = SubmissionStatus::Error;
                    shared.form.error_message = Some(SUBMIT_FAILED_MESSAGE.to_string());
                }
            }
            shared.generation += 1;
            (shared.form.status, shared.generation)
        };

        self.schedule_reset(generation);
        status
    }

    /// Opens the visitor's mail client on a pre-filled message. The form is untouched.
    pub fn email_fallback(&self, launcher: &dyn Launcher) -> Result<MailtoLink, ContactError> {
        email_fallback(launcher)
    }

    fn schedule_reset(&self, generation: u64) {
        let shared = Arc::clone(&self.shared);
        let delay = self.reset_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut shared = lock(&shared);
            if shared.generation == generation {
                shared.form.status = SubmissionStatus::Idle;
                shared.form.error_message = None;
                shared.generation += 1;
                debug!("contact form status reset");
            }
        });

        let mut timers = self.timers.lock().unwrap_or_else(PoisonError::into_inner);
        timers.retain(|t| !t.is_finished());
        timers.push(handle);
    }
}

impl<T> Drop for ContactForm<T> {
    fn drop(&mut self) {
        let timers = self.timers.get_mut().unwrap_or_else(PoisonError::into_inner);
        for timer in timers.drain(..) {
            timer.abort();
        }
    }
}
