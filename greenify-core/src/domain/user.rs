//! User domain model

use serde::{Deserialize, Serialize};

/// The signed-in visitor and their progression counters.
///
/// Serialized with the same field names the browser mirror used
/// (`tasksCompleted`), so stored records stay readable across versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub tasks_completed: u32,
}

impl User {
    /// A fresh user with zeroed counters
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            points: 0,
            tasks_completed: 0,
        }
    }

    /// Synthesize a user from an email address, naming it after the local part
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email);
        Self::new(name, email)
    }

    /// Add earned points and completed tasks
    pub fn award(&mut self, points: u32, tasks_completed: u32) {
        self.points = self.points.saturating_add(points);
        self.tasks_completed = self.tasks_completed.saturating_add(tasks_completed);
    }
}
