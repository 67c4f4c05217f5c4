//! In-memory project table.
//!
//! A `HashMap` behind one `std::sync::Mutex`. Every access, reads included,
//! takes the lock for the duration of the map operation only; nothing awaits
//! or does I/O while holding it, so a blocking mutex is fine inside async
//! handlers.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use crate::project::Project;

/// Projects keyed by id.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Mutex<HashMap<String, Project>>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding projects `1`, `2` and `3`, each with open issues and
    /// PRs `["1", "2"]`, all stamped `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let store = Self::new();
        for n in 1..=3 {
            store.insert(Project {
                id: n.to_string(),
                name: format!("Project {n}"),
                open_issues: vec!["1".into(), "2".into()],
                open_prs: vec!["1".into(), "2".into()],
                created_at: now,
                updated_at: now,
            });
        }
        store
    }

    /// Adds `project`, replacing any existing entry with the same id.
    pub fn insert(&self, project: Project) {
        self.lock().insert(project.id.clone(), project);
    }

    /// Snapshot of every project, in no particular order.
    pub fn all(&self) -> Vec<Project> {
        self.lock().values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<Project> {
        self.lock().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic elsewhere cannot leave the map half-written: each operation is
    // a single HashMap call.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Project>> {
        self.projects.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn project(id: &str) -> Project {
        let now = Utc::now();
        Project {
            id: id.into(),
            name: format!("p{id}"),
            open_issues: Vec::new(),
            open_prs: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn seeded_store_has_three_projects() {
        let store = ProjectStore::seeded(Utc::now());
        assert_eq!(store.len(), 3);
        let second = store.get("2").unwrap();
        assert_eq!(second.name, "Project 2");
        assert_eq!(second.open_issues, ["1", "2"]);
        assert_eq!(second.open_prs, ["1", "2"]);
        assert_eq!(second.created_at, second.updated_at);
    }

    #[test]
    fn get_unknown_id_is_none() {
        let store = ProjectStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("1"), None);
    }

    #[test]
    fn insert_overwrites_same_id() {
        let store = ProjectStore::new();
        store.insert(project("1"));
        let mut replacement = project("1");
        replacement.name = "renamed".into();
        store.insert(replacement);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("1").unwrap().name, "renamed");
    }

    #[test]
    fn all_returns_every_project() {
        let store = ProjectStore::seeded(Utc::now());
        store.insert(project("9"));
        let mut ids: Vec<String> = store.all().into_iter().map(|p| p.id).collect();
        ids.sort();
        assert_eq!(ids, ["1", "2", "3", "9"]);
    }

    #[test]
    fn concurrent_inserts_with_distinct_ids_all_land() {
        let store = Arc::new(ProjectStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        store.insert(project(&format!("{t}-{i}")));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.len(), 400);
    }
}
