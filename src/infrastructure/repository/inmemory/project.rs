//! InMemory Project Store 実装
//!
//! プラットフォームの Project ストアはチャンネルの外部コラボレータであり、
//! ここではそのインターフェース境界（`ProjectStore` trait）だけを満たします。
//! 本番環境では CRUD サーフェスを持つ永続ストアに置き換えられます。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Project, ProjectId, ProjectStore};

/// インメモリ Project Store 実装
pub struct InMemoryProjectStore {
    projects: Mutex<HashMap<ProjectId, Project>>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self {
            projects: Mutex::new(HashMap::new()),
        }
    }

    /// Register a project. Used by startup seeding and tests.
    pub async fn insert(&self, project: Project) {
        let mut projects = self.projects.lock().await;
        projects.insert(project.id.clone(), project);
    }
}

impl Default for InMemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn resolve(&self, id: &ProjectId) -> Option<Project> {
        let projects = self.projects.lock().await;
        projects.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_existing_project() {
        // テスト項目: 登録済みの project が解決できる
        // given (前提条件):
        let store = InMemoryProjectStore::new();
        let id = ProjectId::new("507f1f77bcf86cd799439011".to_string()).unwrap();
        store
            .insert(Project::new(id.clone(), "demo".to_string(), vec![]))
            .await;

        // when (操作):
        let result = store.resolve(&id).await;

        // then (期待する結果):
        assert_eq!(result.unwrap().name, "demo");
    }

    #[tokio::test]
    async fn test_resolve_unknown_project_returns_none() {
        // テスト項目: 未登録の project は None になる
        // given (前提条件):
        let store = InMemoryProjectStore::new();
        let id = ProjectId::new("507f1f77bcf86cd799439011".to_string()).unwrap();

        // when (操作):
        let result = store.resolve(&id).await;

        // then (期待する結果):
        assert!(result.is_none());
    }
}
