//! Per-session state and the in-memory session store.
//!
//! Sessions never share data. Handlers access a session through `read`/`write`
//! closures, so the store lock is never held across an external call.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::chat::ChatTurn;
use crate::models::profile::Profile;
use crate::skills::gap::SkillLevel;

pub mod context;
pub mod handlers;

use context::SessionContext;

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub profile: Option<Profile>,
    /// Iterates in skill-name order.
    pub personal_skills: BTreeMap<String, SkillLevel>,
    pub chat_history: Vec<ChatTurn>,
    pub context: SessionContext,
    pub created_at: DateTime<Utc>,
}

impl Session {
    fn new(id: Uuid) -> Self {
        Self {
            id,
            profile: None,
            personal_skills: BTreeMap::new(),
            chat_history: Vec::new(),
            context: SessionContext::default(),
            created_at: Utc::now(),
        }
    }

    /// Every view except profile intake is blocked until a profile is saved.
    pub fn profile(&self) -> Result<&Profile, AppError> {
        self.profile.as_ref().ok_or(AppError::ProfileRequired)
    }

    /// Saves the intake profile. There is no edit path once set.
    pub fn set_profile(&mut self, profile: Profile) -> Result<(), AppError> {
        if self.profile.is_some() {
            return Err(AppError::Conflict(
                "A profile has already been saved for this session".to_string(),
            ));
        }
        self.profile = Some(profile);
        Ok(())
    }

    /// Upserts each submitted rating; skills not submitted keep their levels.
    pub fn upsert_skill_levels(&mut self, levels: impl IntoIterator<Item = (String, SkillLevel)>) {
        self.personal_skills.extend(levels);
    }

    /// Appends a question and its reply as a pair.
    pub fn record_exchange(&mut self, question: &str, reply: String) {
        self.record_question(question);
        self.record_reply(reply);
    }

    pub fn record_question(&mut self, question: &str) {
        self.chat_history.push(ChatTurn::user(question));
    }

    pub fn record_reply(&mut self, reply: String) {
        self.chat_history.push(ChatTurn::assistant(reply));
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, Session::new(id));
        info!(session_id = %id, "Session created");
        id
    }

    pub async fn read<T>(&self, id: Uuid, f: impl FnOnce(&Session) -> T) -> Result<T, AppError> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        Ok(f(session))
    }

    pub async fn write<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Result<T, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        Ok(f(session))
    }

    /// Ends a session and drops everything it held.
    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .ok_or_else(|| not_found(id))?;
        info!(session_id = %id, "Session ended");
        Ok(())
    }

    /// Clones the saved profile, failing if the session has none yet.
    pub async fn require_profile(&self, id: Uuid) -> Result<Profile, AppError> {
        self.read(id, |s| s.profile().cloned()).await?
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::ChatRole;
    use crate::models::profile::Profession;

    fn profile() -> Profile {
        Profile {
            name: "Ana".to_string(),
            profession: Profession::Student,
            experience_years: 0,
            career_goals: "Graduate".to_string(),
            career_interests: vec![],
        }
    }

    #[tokio::test]
    async fn test_new_session_is_empty() {
        let store = SessionStore::new();
        let id = store.create().await;
        let (has_profile, skills, turns) = store
            .read(id, |s| {
                (s.profile.is_some(), s.personal_skills.len(), s.chat_history.len())
            })
            .await
            .unwrap();
        assert!(!has_profile);
        assert_eq!(skills, 0);
        assert_eq!(turns, 0);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let store = SessionStore::new();
        let err = store.read(Uuid::new_v4(), |_| ()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_profile_required_until_saved() {
        let store = SessionStore::new();
        let id = store.create().await;
        assert!(matches!(
            store.require_profile(id).await,
            Err(AppError::ProfileRequired)
        ));
        store
            .write(id, |s| s.set_profile(profile()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(store.require_profile(id).await.unwrap().name, "Ana");
    }

    #[tokio::test]
    async fn test_profile_cannot_be_saved_twice() {
        let store = SessionStore::new();
        let id = store.create().await;
        store.write(id, |s| s.set_profile(profile())).await.unwrap().unwrap();
        let second = store.write(id, |s| s.set_profile(profile())).await.unwrap();
        assert!(matches!(second, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let a = store.create().await;
        let b = store.create().await;
        store
            .write(a, |s| s.record_exchange("hi", "hello".into()))
            .await
            .unwrap();
        assert_eq!(store.read(a, |s| s.chat_history.len()).await.unwrap(), 2);
        assert_eq!(store.read(b, |s| s.chat_history.len()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_removed_session_is_gone() {
        let store = SessionStore::new();
        let kept = store.create().await;
        let ended = store.create().await;
        store.remove(ended).await.unwrap();

        assert!(matches!(
            store.read(ended, |_| ()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(store.remove(ended).await, Err(AppError::NotFound(_))));
        assert!(store.read(kept, |_| ()).await.is_ok());
    }

    #[test]
    fn test_question_is_recorded_before_reply() {
        let mut session = Session::new(Uuid::new_v4());
        session.record_question("What next?");
        assert_eq!(session.chat_history.len(), 1);
        session.record_reply("Learn SQL.".to_string());
        let roles: Vec<_> = session.chat_history.iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![ChatRole::User, ChatRole::Assistant]);
    }

    #[test]
    fn test_upsert_keeps_unsubmitted_skills_and_is_idempotent() {
        let mut session = Session::new(Uuid::new_v4());
        let first = vec![
            ("Python".to_string(), SkillLevel { current: 1, target: 4 }),
            ("SQL".to_string(), SkillLevel { current: 2, target: 2 }),
        ];
        session.upsert_skill_levels(first.clone());
        let snapshot = session.personal_skills.clone();
        session.upsert_skill_levels(first);
        assert_eq!(session.personal_skills, snapshot);

        session.upsert_skill_levels(vec![(
            "Python".to_string(),
            SkillLevel { current: 3, target: 5 },
        )]);
        assert_eq!(session.personal_skills["Python"].current, 3);
        assert_eq!(session.personal_skills["SQL"].target, 2);
    }
}
