/// Store invariants checked through the public API
use team_directory_mcp::*;

#[cfg(test)]
mod store_tests {
    use super::*;

    fn seeded() -> MemoryStorage {
        MemoryStorage::from_seed(SeedData::builtin(), ReferencePolicy::Loose)
            .expect("Failed to build seeded store")
    }

    #[test]
    fn test_seeded_store_contents() {
        let storage = seeded();

        let emails: Vec<String> = storage.list_users().into_iter().map(|u| u.email).collect();
        assert_eq!(emails, vec!["alice@example.com", "bob@example.com", "carol@example.com"]);
        assert_eq!(storage.project_count(), 3);
        assert_eq!(storage.next_user_id().unwrap(), UserId(4));
    }

    #[test]
    fn test_find_user_by_id() {
        let storage = seeded();

        let alice = storage.find_user_by_id(UserId(1)).expect("Alice should exist");
        assert_eq!(alice.name, "Alice Johnson");
        assert_eq!(alice.role, Role::Admin);
        assert!(storage.find_user_by_id(UserId(0)).is_none());
    }

    #[test]
    fn test_project_filter_preserves_relative_order() {
        let mut seed = SeedData::builtin();
        seed.projects.push(Project::new(ProjectId(4), "Docs Refresh".to_string(), ProjectStatus::Active, UserId(2)));
        seed.projects.push(Project::new(ProjectId(5), "Billing".to_string(), ProjectStatus::Planning, UserId(1)));
        seed.projects.push(Project::new(ProjectId(6), "Search".to_string(), ProjectStatus::Active, UserId(3)));
        let storage = MemoryStorage::from_seed(seed, ReferencePolicy::Loose).unwrap();

        let active: Vec<u64> = storage
            .list_projects(Some(ProjectStatus::Active))
            .into_iter()
            .map(|p| p.id.0)
            .collect();
        assert_eq!(active, vec![1, 4, 6]);

        for project in storage.list_projects(Some(ProjectStatus::Planning)) {
            assert_eq!(project.status, ProjectStatus::Planning);
        }
    }

    #[test]
    fn test_builtin_seed_passes_strict_mode() {
        let storage = MemoryStorage::from_seed(SeedData::builtin(), ReferencePolicy::Strict);
        assert!(storage.is_ok());
    }
}
