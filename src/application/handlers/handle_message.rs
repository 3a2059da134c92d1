//! HandleMessageHandler - Dispatch one inbound event to a reply.
//!
//! Classifies the event, advances the user's session, and resolves the
//! curriculum answer when the sequence completes. Every user-facing path
//! terminates in a reply; only storage failures escape as errors.
//!
//! # Concurrency
//!
//! Events for different users run concurrently; events for the same user
//! are serialized through a per-user mutex so a session's read-modify-write
//! cycle never interleaves. Sessions are never shared across users, so
//! there is no cross-user contention.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::conversation::{
    classify, parse_week_argument, replies, InboundEvent, OutboundReply, UserInput,
};
use crate::domain::curriculum::{CurriculumTable, Grade, Subject};
use crate::domain::foundation::{ErrorCode, UserId};
use crate::domain::schedule::AcademicWeek;
use crate::domain::session::{Session, SessionState};
use crate::ports::{Clock, SessionStore, SessionStoreError};

/// Error type for message handling.
#[derive(Debug, Error)]
pub enum HandleMessageError {
    /// Session storage failure; the only error that crosses this boundary.
    #[error("Session storage failed: {0}")]
    Storage(#[from] SessionStoreError),
}

/// Handler for inbound conversation events.
pub struct HandleMessageHandler {
    sessions: Arc<dyn SessionStore>,
    curriculum: Arc<CurriculumTable>,
    clock: Arc<dyn Clock>,
    user_locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl HandleMessageHandler {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        curriculum: Arc<CurriculumTable>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sessions,
            curriculum,
            clock,
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Handles one inbound event, producing exactly one reply.
    pub async fn handle(&self, event: InboundEvent) -> Result<OutboundReply, HandleMessageError> {
        let lock = self.user_lock(&event.user_id).await;
        let _guard = lock.lock().await;

        let input = classify(&event);
        debug!(user_id = %event.user_id, input = ?input, "dispatching inbound event");

        match input {
            UserInput::Start | UserInput::Restart => self.restart_session(&event.user_id).await,
            UserInput::Help => Ok(replies::help(&event.user_id)),
            UserInput::WeekQuery(arg) => {
                self.answer_week_query(&event.user_id, arg.as_deref()).await
            }
            UserInput::Grade(grade) => self.apply_grade(&event.user_id, grade).await,
            UserInput::Subject(subject) => self.apply_subject(&event.user_id, subject).await,
            UserInput::Unrecognized(_) => self.reject(&event.user_id).await,
        }
    }

    /// Returns the per-user lock, creating it on first contact.
    async fn user_lock(&self, user_id: &UserId) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().await;
        locks
            .entry(user_id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Creates or replaces the session, discarding prior selections.
    async fn restart_session(&self, user_id: &UserId) -> Result<OutboundReply, HandleMessageError> {
        self.sessions.put(Session::new(user_id.clone())).await?;
        Ok(replies::welcome(user_id))
    }

    /// Stores a grade selection, or rejects it with state-appropriate guidance.
    async fn apply_grade(
        &self,
        user_id: &UserId,
        grade: Grade,
    ) -> Result<OutboundReply, HandleMessageError> {
        let Some(mut session) = self.sessions.get(user_id).await? else {
            return Ok(replies::start_required(user_id));
        };

        match session.choose_grade(grade) {
            Ok(()) => {
                self.sessions.put(session).await?;
                Ok(replies::grade_accepted(user_id, grade))
            }
            // A grade token is just another invalid token for later states.
            Err(_) => Ok(match session.state() {
                SessionState::AwaitingGrade => replies::grade_rejected(user_id),
                SessionState::AwaitingSubject => replies::subject_rejected(user_id),
                SessionState::Completed => replies::completed_guidance(user_id),
            }),
        }
    }

    /// Stores a subject selection and answers with the current week's
    /// objective, or rejects out-of-sequence input.
    async fn apply_subject(
        &self,
        user_id: &UserId,
        subject: Subject,
    ) -> Result<OutboundReply, HandleMessageError> {
        let Some(mut session) = self.sessions.get(user_id).await? else {
            return Ok(replies::grade_required(user_id));
        };

        match session.choose_subject(subject) {
            Ok(()) => {
                let Some((grade, subject)) = session.selection() else {
                    // choose_subject success guarantees a full selection
                    return Ok(replies::grade_required(user_id));
                };

                let week = AcademicWeek::for_date(self.clock.today());
                let outcome = self.curriculum.lookup(subject, grade, week.week_number());
                let reply = replies::current_week_answer(user_id, grade, subject, &week, outcome);

                self.sessions.put(session).await?;
                Ok(reply)
            }
            Err(err) if err.code == ErrorCode::SequenceViolation => {
                Ok(replies::grade_required(user_id))
            }
            Err(_) => Ok(match session.state() {
                SessionState::Completed => replies::completed_guidance(user_id),
                _ => replies::grade_required(user_id),
            }),
        }
    }

    /// Answers an explicit week query against the stored selection.
    ///
    /// Requires both selections; bypasses the week resolver. The session is
    /// never mutated on this path.
    async fn answer_week_query(
        &self,
        user_id: &UserId,
        arg: Option<&str>,
    ) -> Result<OutboundReply, HandleMessageError> {
        let selection = self
            .sessions
            .get(user_id)
            .await?
            .and_then(|session| session.selection());

        let Some((grade, subject)) = selection else {
            return Ok(replies::selection_required(user_id));
        };

        match parse_week_argument(arg) {
            Ok(week) => {
                let outcome = self.curriculum.lookup(subject, grade, week);
                Ok(replies::specific_week_answer(
                    user_id, grade, subject, week, outcome,
                ))
            }
            Err(_) => Ok(replies::week_usage(user_id)),
        }
    }

    /// Produces corrective guidance for unrecognized input; never mutates.
    async fn reject(&self, user_id: &UserId) -> Result<OutboundReply, HandleMessageError> {
        let state = self.sessions.get(user_id).await?.map(|s| s.state());

        Ok(match state {
            None => replies::start_required(user_id),
            Some(SessionState::AwaitingGrade) => replies::grade_rejected(user_id),
            Some(SessionState::AwaitingSubject) => replies::subject_rejected(user_id),
            Some(SessionState::Completed) => replies::completed_guidance(user_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySessionStore;
    use crate::domain::curriculum::RawTable;
    use chrono::NaiveDate;

    struct FixedClock(NaiveDate);

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    fn test_user_id() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn test_table() -> CurriculumTable {
        let mut weeks = HashMap::new();
        weeks.insert("1".to_string(), "Kümelerde işlemler".to_string());
        weeks.insert("5".to_string(), "Denklemler ve eşitsizlikler".to_string());
        let mut grades = HashMap::new();
        grades.insert("9".to_string(), weeks);
        let mut raw: RawTable = HashMap::new();
        raw.insert("Matematik".to_string(), grades);
        CurriculumTable::from_raw(raw).unwrap()
    }

    /// Handler fixed on 2024-09-18, a Wednesday in academic week 1.
    fn test_handler() -> HandleMessageHandler {
        HandleMessageHandler::new(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(test_table()),
            Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 9, 18).unwrap())),
        )
    }

    fn event(text: &str) -> InboundEvent {
        InboundEvent::new(test_user_id(), text)
    }

    async fn run(handler: &HandleMessageHandler, text: &str) -> OutboundReply {
        handler.handle(event(text)).await.unwrap()
    }

    // Selection sequence

    #[tokio::test]
    async fn start_prompts_for_grade() {
        let handler = test_handler();
        let reply = run(&handler, "/start").await;

        assert!(reply.text.contains("sınıfınızı seçin"));
        assert_eq!(
            reply.suggested_replies,
            Some(vec![
                "9".to_string(),
                "10".to_string(),
                "11".to_string(),
                "12".to_string()
            ])
        );
    }

    #[tokio::test]
    async fn grade_selection_prompts_for_subject() {
        let handler = test_handler();
        run(&handler, "/start").await;
        let reply = run(&handler, "9").await;

        assert!(reply.text.contains("9. sınıf seçildi"));
        assert!(reply
            .suggested_replies
            .unwrap()
            .contains(&"Matematik".to_string()));
    }

    #[tokio::test]
    async fn subject_selection_answers_with_current_week() {
        let handler = test_handler();
        run(&handler, "/start").await;
        run(&handler, "9").await;
        let reply = run(&handler, "Matematik").await;

        assert!(reply.text.contains("16–22 Eylül"));
        assert!(reply.text.contains("9. sınıf Matematik dersi, 1. hafta"));
        assert!(reply.text.contains("Kümelerde işlemler"));
    }

    #[tokio::test]
    async fn restart_phrase_resets_the_session() {
        let handler = test_handler();
        run(&handler, "/start").await;
        run(&handler, "9").await;
        run(&handler, "Matematik").await;

        let reply = run(&handler, "🔄 Yeniden Başlat").await;
        assert!(reply.text.contains("sınıfınızı seçin"));

        // Selections were discarded, so a week query needs the sequence again.
        let reply = run(&handler, "/hafta 5").await;
        assert!(reply.text.contains("Önce sınıf ve branşınızı seçmelisiniz"));
    }

    // Defensive rejection

    #[tokio::test]
    async fn subject_before_start_instructs_to_start() {
        let handler = test_handler();
        let reply = run(&handler, "Matematik").await;
        assert!(reply.text.contains("Önce sınıfınızı seçmelisiniz"));
        assert!(reply.text.contains("/start"));
    }

    #[tokio::test]
    async fn subject_before_grade_instructs_to_start() {
        let handler = test_handler();
        run(&handler, "/start").await;
        let reply = run(&handler, "Biyoloji").await;
        assert!(reply.text.contains("Önce sınıfınızı seçmelisiniz"));
    }

    #[tokio::test]
    async fn unrecognized_input_while_awaiting_grade_is_idempotent() {
        let handler = test_handler();
        run(&handler, "/start").await;

        let first = run(&handler, "sekiz").await;
        let second = run(&handler, "sekiz").await;
        assert_eq!(first.text, second.text);
        assert!(first.text.contains("9, 10, 11, 12"));

        // The session did not advance: a valid grade is still accepted.
        let reply = run(&handler, "10").await;
        assert!(reply.text.contains("10. sınıf seçildi"));
    }

    #[tokio::test]
    async fn grade_token_while_awaiting_subject_is_rejected() {
        let handler = test_handler();
        run(&handler, "/start").await;
        run(&handler, "9").await;

        let reply = run(&handler, "10").await;
        assert!(reply.text.contains("geçerli bir branş"));
    }

    #[tokio::test]
    async fn input_without_any_session_points_to_start() {
        let handler = test_handler();
        let reply = run(&handler, "merhaba").await;
        assert!(reply.text.contains("/start"));
    }

    #[tokio::test]
    async fn completed_session_rejects_stray_input_with_guidance() {
        let handler = test_handler();
        run(&handler, "/start").await;
        run(&handler, "9").await;
        run(&handler, "Matematik").await;

        let reply = run(&handler, "Fizik").await;
        assert!(reply.text.contains("🔄 Yeniden Başlat"));
        assert!(reply.text.contains("/hafta"));
    }

    // Specific-week queries

    #[tokio::test]
    async fn week_query_before_selection_is_rejected() {
        let handler = test_handler();
        let reply = run(&handler, "/hafta 5").await;
        assert!(reply.text.contains("Önce sınıf ve branşınızı seçmelisiniz"));
    }

    #[tokio::test]
    async fn week_query_answers_from_the_stored_selection() {
        let handler = test_handler();
        run(&handler, "/start").await;
        run(&handler, "9").await;
        run(&handler, "Matematik").await;

        let reply = run(&handler, "/hafta 5").await;
        assert!(reply.text.contains("9. sınıf Matematik dersi, 5. hafta"));
        assert!(reply.text.contains("Denklemler ve eşitsizlikler"));
    }

    #[tokio::test]
    async fn week_query_misses_render_not_found_text() {
        let handler = test_handler();
        run(&handler, "/start").await;
        run(&handler, "9").await;
        run(&handler, "Matematik").await;

        let reply = run(&handler, "/hafta 12").await;
        assert!(reply
            .text
            .contains("Bu hafta için Matematik dersi kazanımı bulunamadı."));
    }

    #[tokio::test]
    async fn week_query_rejections_are_uniform_and_mutate_nothing() {
        let handler = test_handler();
        run(&handler, "/start").await;
        run(&handler, "9").await;
        run(&handler, "Matematik").await;

        let out_of_range = run(&handler, "/hafta 41").await;
        let non_numeric = run(&handler, "/hafta bes").await;
        let missing = run(&handler, "/hafta").await;

        for reply in [&out_of_range, &non_numeric, &missing] {
            assert!(reply.text.contains("1-40"), "got: {}", reply.text);
        }

        // Session survived untouched: a valid query still answers.
        let reply = run(&handler, "/hafta 1").await;
        assert!(reply.text.contains("Kümelerde işlemler"));
    }

    // Round trip between the two answer paths

    #[tokio::test]
    async fn current_week_and_explicit_week_agree_on_the_objective() {
        let handler = test_handler();
        run(&handler, "/start").await;
        run(&handler, "9").await;
        let current = run(&handler, "Matematik").await;

        // The fixed clock resolves to week 1.
        let explicit = run(&handler, "/hafta 1").await;

        assert!(current.text.contains("Kümelerde işlemler"));
        assert!(explicit.text.contains("Kümelerde işlemler"));
    }

    // Degraded mode

    #[tokio::test]
    async fn empty_table_still_answers_with_not_found_text() {
        let handler = HandleMessageHandler::new(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(CurriculumTable::empty()),
            Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 9, 18).unwrap())),
        );

        handler.handle(event("/start")).await.unwrap();
        handler.handle(event("9")).await.unwrap();
        let reply = handler.handle(event("Biyoloji")).await.unwrap();

        assert!(reply
            .text
            .contains("Biyoloji dersi için 9. sınıf kazanımları bulunamadı."));
    }

    // Help pass-through

    #[tokio::test]
    async fn help_has_no_state_effect() {
        let handler = test_handler();
        run(&handler, "/start").await;
        run(&handler, "9").await;

        let reply = run(&handler, "/help").await;
        assert!(reply.text.contains("/hafta"));

        // Still awaiting a subject afterwards.
        let reply = run(&handler, "Matematik").await;
        assert!(reply.text.contains("1. hafta"));
    }

    // Per-user serialization

    #[tokio::test]
    async fn concurrent_events_for_different_users_are_independent() {
        let handler = Arc::new(test_handler());

        let other = UserId::new("user-2").unwrap();
        handler
            .handle(InboundEvent::new(test_user_id(), "/start"))
            .await
            .unwrap();
        handler
            .handle(InboundEvent::new(other.clone(), "/start"))
            .await
            .unwrap();

        let a = handler.clone();
        let b = handler.clone();
        let other_b = other.clone();
        let h1 = tokio::spawn(async move {
            a.handle(InboundEvent::new(UserId::new("user-1").unwrap(), "9"))
                .await
                .unwrap()
        });
        let h2 = tokio::spawn(async move {
            b.handle(InboundEvent::new(other_b, "11")).await.unwrap()
        });

        let r1 = h1.await.unwrap();
        let r2 = h2.await.unwrap();
        assert!(r1.text.contains("9. sınıf seçildi"));
        assert!(r2.text.contains("11. sınıf seçildi"));
    }
}
