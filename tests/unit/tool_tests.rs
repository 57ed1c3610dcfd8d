/// Tool behavior checked through the dispatcher
use serde_json::{json, Map, Value};
use team_directory_mcp::*;

#[cfg(test)]
mod tool_tests {
    use super::*;

    fn dispatcher() -> Dispatcher<MemoryStorage> {
        let storage = MemoryStorage::from_seed(SeedData::builtin(), ReferencePolicy::Loose)
            .expect("Failed to build seeded store");
        Dispatcher::new(storage)
    }

    fn call(dispatcher: &mut Dispatcher<MemoryStorage>, name: &str, arguments: Value) -> Result<String, McpError> {
        let arguments: Map<String, Value> = serde_json::from_value(arguments).expect("arguments must be an object");
        dispatcher
            .call_tool(name, arguments)
            .map(|result| result.content.into_iter().map(|c| c.text).collect())
    }

    #[test]
    fn test_every_seeded_user_is_retrievable() {
        let mut dispatcher = dispatcher();

        let users = dispatcher.storage().list_users();
        for user in users {
            let text = call(&mut dispatcher, "get_user", json!({ "userId": user.id.0 })).unwrap();
            let fetched: User = serde_json::from_str(&text).unwrap();
            assert_eq!(fetched, user);
        }
    }

    #[test]
    fn test_ids_continue_from_prior_maximum() {
        let mut seed = SeedData::builtin();
        seed.users[2].id = UserId(10);
        let storage = MemoryStorage::from_seed(seed, ReferencePolicy::Loose).unwrap();
        let mut dispatcher = Dispatcher::new(storage);

        let mut ids = Vec::new();
        for name in ["Dan", "Erin", "Frank"] {
            let email = format!("{}@example.net", name.to_lowercase());
            let text = call(&mut dispatcher, "create_user", json!({ "name": name, "email": email, "role": "user" })).unwrap();
            let user: User = serde_json::from_str(&text).unwrap();
            ids.push(user.id.0);
        }

        assert_eq!(ids, vec![11, 12, 13]);
    }

    #[test]
    fn test_duplicate_email_is_case_sensitive() {
        let mut dispatcher = dispatcher();

        let result = call(&mut dispatcher, "create_user", json!({ "name": "Alice Two", "email": "ALICE@example.com", "role": "admin" }));
        assert!(result.is_ok());

        let error = call(&mut dispatcher, "create_user", json!({ "name": "Alice Three", "email": "ALICE@example.com", "role": "user" })).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Conflict);
        assert_eq!(error.to_string(), "User with this email already exists");
    }

    #[test]
    fn test_malformed_email_wins_over_duplicate_check() {
        let mut dispatcher = dispatcher();

        let error = call(&mut dispatcher, "create_user", json!({ "name": "X", "email": "x y@example.com", "role": "user" })).unwrap_err();
        assert_eq!(error, McpError::InvalidInput("Invalid email format".to_string()));
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let mut dispatcher = dispatcher();

        let text = call(&mut dispatcher, "list_users", json!({ "verbose": true })).unwrap();
        let users: Vec<User> = serde_json::from_str(&text).unwrap();
        assert_eq!(users.len(), 3);
    }

    #[test]
    fn test_null_status_lists_everything() {
        let mut dispatcher = dispatcher();

        let text = call(&mut dispatcher, "get_projects", json!({ "status": null })).unwrap();
        let projects: Vec<Project> = serde_json::from_str(&text).unwrap();
        assert_eq!(projects.len(), 3);
    }
}
