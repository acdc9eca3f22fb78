//! Session state machine.

use crate::charset::{Alphabet, CharacterClass, ClassSelection};
use crate::formatter::{GeneratedPassword, ValidationError};
use crate::generator::{Generator, Outcome, PasswordLength};
use crate::service::RandomSource;

/// Identifies one generation request within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// What the display currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationState {
    /// Nothing attempted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading {
        /// Ticket of the in-flight request.
        ticket: Ticket,
    },
    /// The latest attempt produced a password.
    Succeeded(GeneratedPassword),
    /// The latest attempt failed with this message.
    Failed(String),
}

/// Snapshot of the inputs for one request.
///
/// Changing the session's selection or length afterwards does not
/// affect a request already in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    /// Identifies the request when its outcome is applied.
    pub ticket: Ticket,
    /// Requested password length.
    pub length: PasswordLength,
    /// Alphabet built from the selection at request time.
    pub alphabet: Alphabet,
}

/// User choices plus the display slot.
#[derive(Debug, Clone, Default)]
pub struct Session {
    selection: ClassSelection,
    length: PasswordLength,
    state: GenerationState,
    issued: u64,
}

impl Session {
    /// Creates an idle session with the given choices.
    pub fn new(selection: ClassSelection, length: PasswordLength) -> Self {
        Self {
            selection,
            length,
            ..Default::default()
        }
    }

    /// The current class selection.
    pub fn selection(&self) -> &ClassSelection {
        &self.selection
    }

    /// Enables or disables one class.
    pub fn set_class(&mut self, class: CharacterClass, enabled: bool) {
        self.selection.set(class, enabled);
    }

    /// Flips one class and returns its new state.
    pub fn toggle_class(&mut self, class: CharacterClass) -> bool {
        self.selection.toggle(class)
    }

    /// The current password length.
    pub fn length(&self) -> PasswordLength {
        self.length
    }

    /// Sets the length, saturating into the supported range.
    pub fn set_length(&mut self, length: usize) {
        self.length = PasswordLength::clamped(length);
    }

    /// What the display currently shows.
    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    /// Returns true while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, GenerationState::Loading { .. })
    }

    /// The displayed password, if the last attempt succeeded.
    pub fn password(&self) -> Option<&GeneratedPassword> {
        match self.state {
            GenerationState::Succeeded(ref password) => Some(password),
            _ => None,
        }
    }

    /// The displayed error message, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        match self.state {
            GenerationState::Failed(ref message) => Some(message),
            _ => None,
        }
    }

    /// Starts a new attempt, clearing any previous password or error.
    ///
    /// Returns `None` when no class is selected; the validation message
    /// is displayed instead and any in-flight request is still superseded.
    pub fn begin(&mut self) -> Option<PendingRequest> {
        // Every attempt supersedes earlier tickets, even one rejected here
        self.issued += 1;

        if self.selection.is_empty() {
            self.state = GenerationState::Failed(ValidationError::NoClassSelected.to_string());
            tracing::debug!("Generation rejected: no character class selected");
            return None;
        }

        let ticket = Ticket(self.issued);
        self.state = GenerationState::Loading { ticket };

        Some(PendingRequest {
            ticket,
            length: self.length,
            alphabet: Alphabet::from_selection(&self.selection),
        })
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Returns false, leaving the display untouched, if a newer request
    /// has been started since.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Outcome) -> bool {
        if ticket != Ticket(self.issued) {
            tracing::debug!(
                stale = ticket.0,
                latest = self.issued,
                "Discarding superseded outcome"
            );
            return false;
        }

        self.state = match outcome {
            Ok(password) => GenerationState::Succeeded(password),
            Err(e) => GenerationState::Failed(e.to_string()),
        };
        true
    }

    /// Runs one complete attempt against `generator`.
    pub async fn run<S: RandomSource>(&mut self, generator: &Generator<S>) -> &GenerationState {
        if let Some(request) = self.begin() {
            let outcome = generator.generate(request.length, &request.alphabet).await;
            self.resolve(request.ticket, outcome);
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::format_password;
    use crate::generator::GenerateError;
    use crate::service::{ServiceResponse, SourceError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    struct CountingSource {
        bytes: Vec<u8>,
        calls: AtomicUsize,
    }

    impl RandomSource for CountingSource {
        async fn fetch(&self, _count: usize) -> Result<ServiceResponse, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ServiceResponse::success(&self.bytes))
        }
    }

    /// Source that answers 8-value requests slowly and others quickly.
    struct LengthPacedSource;

    impl RandomSource for LengthPacedSource {
        async fn fetch(&self, count: usize) -> Result<ServiceResponse, SourceError> {
            let delay = if count == 8 { 3 } else { 1 };
            tokio::time::sleep(Duration::from_secs(delay)).await;
            Ok(ServiceResponse::success(&vec![count as u8; count]))
        }
    }

    fn password(bytes: &[u8], selection: &ClassSelection, length: usize) -> GeneratedPassword {
        format_password(bytes, &Alphabet::from_selection(selection), length).unwrap()
    }

    #[test]
    fn test_starts_idle() {
        let session = Session::default();
        assert_eq!(session.state(), &GenerationState::Idle);
        assert_eq!(session.length().get(), 16);
        assert!(session.password().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_begin_without_classes_fails_fast() {
        let mut session = Session::new(ClassSelection::none(), PasswordLength::default());
        assert!(session.begin().is_none());
        assert_eq!(session.error(), Some("select at least one character type"));
        assert!(!session.is_loading());
    }

    #[test]
    fn test_begin_clears_previous_result() {
        let mut session = Session::default();
        let first = session.begin().unwrap();
        session.resolve(first.ticket, Err(GenerateError::Timeout));
        assert!(session.error().is_some());

        session.begin().unwrap();
        assert!(session.is_loading());
        assert!(session.error().is_none());
        assert!(session.password().is_none());
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let selection = ClassSelection::only(CharacterClass::Numbers);
        let mut session = Session::new(selection, PasswordLength::default());

        let first = session.begin().unwrap();
        let second = session.begin().unwrap();

        let newer = password(&[1; 16], &selection, 16);
        assert!(session.resolve(second.ticket, Ok(newer.clone())));

        let older = password(&[2; 16], &selection, 16);
        assert!(!session.resolve(first.ticket, Ok(older)));
        assert_eq!(session.password(), Some(&newer));
    }

    #[test]
    fn test_request_snapshot_unaffected_by_later_edits() {
        let mut session = Session::new(ClassSelection::default(), PasswordLength::default());
        let request = session.begin().unwrap();

        session.set_class(CharacterClass::Special, false);
        session.set_length(40);

        assert_eq!(request.length.get(), 16);
        assert_eq!(request.alphabet.len(), 88);
        assert_eq!(session.length().get(), 32);
    }

    #[tokio::test]
    async fn test_run_no_selection_makes_no_call() {
        let generator = Generator::new(
            CountingSource {
                bytes: vec![0; 32],
                calls: AtomicUsize::new(0),
            },
            Duration::from_secs(8),
        );
        let mut session = Session::new(ClassSelection::none(), PasswordLength::default());

        session.run(&generator).await;

        assert_eq!(generator.source().calls.load(Ordering::SeqCst), 0);
        assert!(session.error().is_some());
    }

    #[tokio::test]
    async fn test_run_shows_password() {
        let generator = Generator::new(
            CountingSource {
                bytes: vec![0, 27, 54, 81, 108, 135, 162, 189],
                calls: AtomicUsize::new(0),
            },
            Duration::from_secs(8),
        );
        let mut session = Session::new(
            ClassSelection::only(CharacterClass::Uppercase),
            PasswordLength::new(8).unwrap(),
        );

        let state = session.run(&generator).await;

        assert!(matches!(state, GenerationState::Succeeded(_)));
        assert_eq!(session.password().map(|p| p.as_str()), Some("ABCDEFGH"));
        assert!(!session.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_latest_request_wins_when_older_resolves_last() {
        let generator = Arc::new(Generator::new(LengthPacedSource, Duration::from_secs(8)));
        let session = Arc::new(Mutex::new(Session::new(
            ClassSelection::only(CharacterClass::Uppercase),
            PasswordLength::new(8).unwrap(),
        )));

        let mut handles = Vec::new();
        for length in [8, 9] {
            let request = {
                let mut session = session.lock().unwrap();
                session.set_length(length);
                session.begin().unwrap()
            };
            let generator = Arc::clone(&generator);
            let session = Arc::clone(&session);
            handles.push(tokio::spawn(async move {
                let outcome = generator.generate(request.length, &request.alphabet).await;
                session.lock().unwrap().resolve(request.ticket, outcome)
            }));
        }

        let mut applied = Vec::new();
        for handle in handles {
            applied.push(handle.await.unwrap());
        }

        // The 8-character request finishes last but was superseded
        assert_eq!(applied, vec![false, true]);
        let session = session.lock().unwrap();
        assert_eq!(session.password().map(|p| p.as_str()), Some("JJJJJJJJJ"));
    }

    #[test]
    fn test_rejected_attempt_supersedes_in_flight_request() {
        let mut session = Session::default();
        let first = session.begin().unwrap();

        for class in CharacterClass::ALL {
            session.set_class(class, false);
        }
        assert!(session.begin().is_none());

        let late = password(&[0; 16], &ClassSelection::default(), 16);
        assert!(!session.resolve(first.ticket, Ok(late)));
        assert_eq!(session.error(), Some("select at least one character type"));
        assert!(session.password().is_none());
    }
}
