//! In-memory record store for the three form-submission kinds. Built as an
//! explicit value rather than process-wide state so tests can run against
//! independent stores.

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("This email address is already subscribed")]
    DuplicateEmail(String),
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: i64,
    pub name: String,
    pub story: String,
    #[serde(with = "time::serde::iso8601")]
    pub created_at: OffsetDateTime,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: i64,
    pub email: String,
    #[serde(with = "time::serde::iso8601")]
    pub created_at: OffsetDateTime,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Nomination {
    pub id: i64,
    pub nominee_name: String,
    pub nominee_organization: Option<String>,
    pub reason: String,
    pub nominator_name: String,
    pub nominator_email: String,
    #[serde(with = "time::serde::iso8601")]
    pub created_at: OffsetDateTime,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewStory {
    pub name: String,
    pub story: String,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscription {
    pub email: String,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewNomination {
    pub nominee_name: String,
    #[serde(default)]
    pub nominee_organization: Option<String>,
    pub reason: String,
    pub nominator_name: String,
    pub nominator_email: String,
}

impl NewStory {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        if self.story.chars().count() < 10 {
            return Err("Story must be at least 10 characters long");
        }
        Ok(())
    }
}

impl NewSubscription {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !valid_email(&self.email) {
            return Err("A valid email address is required");
        }
        Ok(())
    }
}

impl NewNomination {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.nominee_name.trim().is_empty() {
            return Err("Nominee name is required");
        }
        if self.reason.trim().is_empty() {
            return Err("Nomination reason is required");
        }
        if self.nominator_name.trim().is_empty() {
            return Err("Nominator name is required");
        }
        if !valid_email(&self.nominator_email) {
            return Err("A valid nominator email address is required");
        }
        Ok(())
    }
}

fn valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[derive(Default)]
struct Tables {
    stories: BTreeMap<i64, Story>,
    subscriptions: BTreeMap<i64, Subscription>,
    nominations: BTreeMap<i64, Nomination>,
    next_story_id: i64,
    next_subscription_id: i64,
    next_nomination_id: i64,
}

pub struct RecordStore {
    inner: Mutex<Tables>,
}

impl RecordStore {
    pub fn new() -> Self {
        RecordStore {
            inner: Mutex::new(Tables::default()),
        }
    }

    pub fn create_story(&self, new: NewStory) -> Story {
        let mut tables = self.inner.lock().unwrap();
        tables.next_story_id += 1;
        let story = Story {
            id: tables.next_story_id,
            name: new.name,
            story: new.story,
            created_at: OffsetDateTime::now_utc(),
        };
        tables.stories.insert(story.id, story.clone());
        story
    }

    /// Email uniqueness is case-sensitive and checked at creation time,
    /// matching the unique column it stands in for.
    pub fn create_subscription(&self, new: NewSubscription) -> Result<Subscription, StoreError> {
        let mut tables = self.inner.lock().unwrap();
        if tables
            .subscriptions
            .values()
            .any(|existing| existing.email == new.email)
        {
            return Err(StoreError::DuplicateEmail(new.email));
        }
        tables.next_subscription_id += 1;
        let subscription = Subscription {
            id: tables.next_subscription_id,
            email: new.email,
            created_at: OffsetDateTime::now_utc(),
        };
        tables
            .subscriptions
            .insert(subscription.id, subscription.clone());
        Ok(subscription)
    }

    pub fn create_nomination(&self, new: NewNomination) -> Nomination {
        let mut tables = self.inner.lock().unwrap();
        tables.next_nomination_id += 1;
        let nomination = Nomination {
            id: tables.next_nomination_id,
            nominee_name: new.nominee_name,
            nominee_organization: new.nominee_organization,
            reason: new.reason,
            nominator_name: new.nominator_name,
            nominator_email: new.nominator_email,
            created_at: OffsetDateTime::now_utc(),
        };
        tables.nominations.insert(nomination.id, nomination.clone());
        nomination
    }

    pub fn story(&self, id: i64) -> Option<Story> {
        self.inner.lock().unwrap().stories.get(&id).cloned()
    }

    pub fn subscription(&self, id: i64) -> Option<Subscription> {
        self.inner.lock().unwrap().subscriptions.get(&id).cloned()
    }

    pub fn nomination(&self, id: i64) -> Option<Nomination> {
        self.inner.lock().unwrap().nominations.get(&id).cloned()
    }

    pub fn stories(&self) -> Vec<Story> {
        self.inner.lock().unwrap().stories.values().cloned().collect()
    }

    pub fn subscriptions(&self) -> Vec<Subscription> {
        self.inner
            .lock()
            .unwrap()
            .subscriptions
            .values()
            .cloned()
            .collect()
    }

    pub fn nominations(&self) -> Vec<Nomination> {
        self.inner
            .lock()
            .unwrap()
            .nominations
            .values()
            .cloned()
            .collect()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
