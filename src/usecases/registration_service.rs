//! Registration view: form state, per-field error clearing, submit.
//!
//! Validation runs only on submit. Editing a field clears that field's error and
//! no other. A collaborator failure is logged and reported, never turned into a
//! field error.

use crate::domain::registration::{self, error_message};
use crate::domain::{
    FieldErrors, FormField, NewUserPayload, PreferenceSet, RegistrationForm, Route,
};
use crate::ports::SessionPort;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; see `errors()`.
    Invalid,
    /// Account created and signed in.
    Registered { navigate_to: Route },
    /// The auth session rejected the request. Form left intact for retry.
    Failed(String),
}

pub struct RegistrationService {
    session: Arc<dyn SessionPort>,
    form: RegistrationForm,
    errors: FieldErrors,
    loading: Arc<AtomicBool>,
}

impl RegistrationService {
    pub fn new(session: Arc<dyn SessionPort>) -> Self {
        Self {
            session,
            form: RegistrationForm::default(),
            errors: FieldErrors::new(),
            loading: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Message for a field's current error, if any.
    pub fn error_for(&self, field: FormField) -> Option<String> {
        self.errors
            .get(&field)
            .map(|&err| error_message(field, err))
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Shared view of the in-flight flag, readable while `submit` holds `&mut self`.
    pub fn loading_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.loading)
    }

    pub fn edit(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.remove(&field);
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.errors = registration::validate(&self.form);
        if !self.errors.is_empty() {
            info!(fields = self.errors.len(), "registration form invalid");
            return SubmitOutcome::Invalid;
        }

        let payload = NewUserPayload {
            username: self.form.username.trim().to_string(),
            email: self.form.email.trim().to_string(),
            password: self.form.password.clone(),
            preferences: PreferenceSet::default(),
            bookmarks: Vec::new(),
            liked_articles: Vec::new(),
        };

        self.loading.store(true, Ordering::SeqCst);
        let result = self.session.register(payload).await;
        self.loading.store(false, Ordering::SeqCst);

        match result {
            Ok(user) => {
                info!(user = %user.display_name(), "registered");
                SubmitOutcome::Registered {
                    navigate_to: Route::Home,
                }
            }
            Err(e) => {
                error!(error = %e, "registration error");
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::api::MockUserApi;
    use crate::adapters::session::MemorySession;
    use crate::domain::ValidationError;

    fn service(api: Arc<MockUserApi>) -> (RegistrationService, Arc<MemorySession>) {
        let session = Arc::new(MemorySession::new(api, None));
        (RegistrationService::new(session.clone()), session)
    }

    fn fill(s: &mut RegistrationService, username: &str, email: &str, pw: &str, confirm: &str) {
        s.edit(FormField::Username, username);
        s.edit(FormField::Email, email);
        s.edit(FormField::Password, pw);
        s.edit(FormField::ConfirmPassword, confirm);
    }

    #[tokio::test]
    async fn test_invalid_submit_does_not_call_session() {
        let api = Arc::new(MockUserApi::with_delay(0));
        let (mut s, session) = service(api.clone());
        fill(&mut s, "ab", "bad", "123", "456");

        assert_eq!(s.submit().await, SubmitOutcome::Invalid);
        assert_eq!(s.errors().len(), 4);
        assert!(api.registered().is_empty());
        assert!(session.current_user().await.is_none());
        assert_eq!(
            s.error_for(FormField::Email).as_deref(),
            Some("Please enter a valid email")
        );
    }

    #[tokio::test]
    async fn test_edit_clears_only_that_field() {
        let api = Arc::new(MockUserApi::with_delay(0));
        let (mut s, _) = service(api);
        fill(&mut s, "ab", "bad", "123", "456");
        s.submit().await;

        s.edit(FormField::Email, "still bad");

        assert!(!s.errors().contains_key(&FormField::Email));
        assert_eq!(
            s.errors().get(&FormField::Username),
            Some(&ValidationError::TooShort { min: 3 })
        );
        assert!(s.errors().contains_key(&FormField::Password));
        assert!(s.errors().contains_key(&FormField::ConfirmPassword));
    }

    #[tokio::test]
    async fn test_valid_submit_forwards_trimmed_payload() {
        let api = Arc::new(MockUserApi::with_delay(0));
        let (mut s, session) = service(api.clone());
        fill(&mut s, "  alice ", " a@b.com ", " secret1", " secret1");

        let outcome = s.submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Registered {
                navigate_to: Route::Home
            }
        );
        let sent = api.registered();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].username, "alice");
        assert_eq!(sent[0].email, "a@b.com");
        assert_eq!(sent[0].password, " secret1");
        assert_eq!(sent[0].preferences, PreferenceSet::default());
        assert!(sent[0].bookmarks.is_empty());
        assert!(sent[0].liked_articles.is_empty());
        assert_eq!(
            session.current_user().await.unwrap().username.as_deref(),
            Some("alice")
        );
        assert!(!s.is_loading());
    }

    #[tokio::test]
    async fn test_loading_is_set_while_register_is_in_flight() {
        let api = Arc::new(MockUserApi::with_delay(100));
        let (mut s, _) = service(api);
        fill(&mut s, "alice", "a@b.com", "secret1", "secret1");
        let loading = s.loading_flag();
        assert!(!loading.load(Ordering::SeqCst));

        let (outcome, seen_in_flight) = tokio::join!(s.submit(), async {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            loading.load(Ordering::SeqCst)
        });

        assert!(matches!(outcome, SubmitOutcome::Registered { .. }));
        assert!(seen_in_flight);
        assert!(!s.is_loading());
    }

    #[tokio::test]
    async fn test_collaborator_failure_adds_no_field_errors() {
        let api = Arc::new(MockUserApi::with_delay(0).failing("email taken"));
        let (mut s, _) = service(api);
        fill(&mut s, "alice", "a@b.com", "secret1", "secret1");

        match s.submit().await {
            SubmitOutcome::Failed(msg) => assert!(msg.contains("email taken")),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(s.errors().is_empty());
        assert_eq!(s.form().username, "alice");
        assert!(!s.is_loading());
    }
}
