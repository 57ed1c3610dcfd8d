/// Server construction and stdio loop tests
use std::io::Write;
use std::time::Duration;

use serde_json::{json, Value};
use team_directory_mcp::*;
use tempfile::NamedTempFile;

#[cfg(test)]
mod server_tests {
    use super::*;

    fn read_status(server: &mut McpServer<MemoryStorage>) -> String {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "resources/read",
            "params": { "uri": "system://status" }
        });
        let response = serde_json::to_value(server.handle_line(&request.to_string()).unwrap()).unwrap();
        response["result"]["contents"][0]["text"].as_str().unwrap().to_string()
    }

    fn field<'a>(report: &'a str, prefix: &str) -> &'a str {
        report
            .lines()
            .find_map(|line| line.strip_prefix(prefix))
            .unwrap_or_else(|| panic!("missing {} in report", prefix))
    }

    #[test]
    fn test_server_with_default_config() {
        let server = DirectoryServer::new(ServerConfig::default()).expect("Failed to create server");
        assert_eq!(server.storage().user_count(), 3);
        assert_eq!(server.storage().project_count(), 3);
    }

    #[test]
    fn test_server_with_seed_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(
            file,
            "{}",
            json!({
                "users": [{ "id": 7, "name": "Grace", "email": "grace@lab.dev", "role": "admin" }],
                "projects": [{ "id": 1, "name": "Compiler", "status": "active", "assignedTo": 8 }]
            })
        ).unwrap();

        let config = ServerConfig {
            seed_path: Some(file.path().to_path_buf()),
            strict_references: false,
        };
        let server = DirectoryServer::new(config).expect("Loose mode accepts dangling references");
        assert_eq!(server.storage().next_user_id().unwrap(), UserId(8));

        let strict = ServerConfig {
            seed_path: Some(file.path().to_path_buf()),
            strict_references: true,
        };
        let result = DirectoryServer::new(strict);
        assert!(matches!(
            result,
            Err(ServerError::Storage(StorageError::DanglingReference { .. }))
        ));
    }

    #[test]
    fn test_empty_seed_starts_ids_at_one() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, r#"{{"users": [], "projects": []}}"#).unwrap();

        let config = ServerConfig {
            seed_path: Some(file.path().to_path_buf()),
            strict_references: false,
        };
        let mut server = DirectoryServer::new(config).unwrap().into_mcp_server();

        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": { "name": "create_user", "arguments": { "name": "First", "email": "first@new.org", "role": "admin" } }
        });
        let response = serde_json::to_value(server.handle_line(&request.to_string()).unwrap()).unwrap();
        let user: User = serde_json::from_str(response["result"]["content"][0]["text"].as_str().unwrap()).unwrap();
        assert_eq!(user.id, UserId(1));
    }

    #[test]
    fn test_status_is_fresh_on_every_read() {
        let mut server = DirectoryServer::new(ServerConfig::default()).unwrap().into_mcp_server();

        let first = read_status(&mut server);
        std::thread::sleep(Duration::from_millis(20));

        let create = json!({
            "jsonrpc": "2.0",
            "id": 2,
            "method": "tools/call",
            "params": { "name": "create_user", "arguments": { "name": "Dan", "email": "dan@x.com", "role": "user" } }
        });
        server.handle_line(&create.to_string()).unwrap();
        let second = read_status(&mut server);

        let uptime = |report: &str| -> u64 {
            field(report, "Uptime: ").trim_end_matches(" seconds").parse().unwrap()
        };
        assert!(uptime(&second) >= uptime(&first));
        assert_ne!(field(&first, "Generated: "), field(&second, "Generated: "));
        assert_eq!(field(&first, "Total Users: "), "3");
        assert_eq!(field(&second, "Total Users: "), "4");
        assert!(first.starts_with("System Status Report\nServer: team-directory-mcp v"));
    }

    #[tokio::test]
    async fn test_serve_over_byte_streams() {
        let mut server = DirectoryServer::new(ServerConfig::default()).unwrap().into_mcp_server();

        let input = [
            json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {} }).to_string(),
            json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }).to_string(),
            String::new(),
            json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/call", "params": { "name": "get_user", "arguments": { "userId": 3 } } }).to_string(),
            json!({ "jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": { "name": "get_user", "arguments": { "userId": 30 } } }).to_string(),
        ]
        .join("\n")
            + "\n";

        let mut output = Vec::new();
        server
            .serve(input.as_bytes(), &mut output, std::future::pending())
            .await
            .expect("serve should end cleanly at EOF");

        let responses: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0]["id"], 1);
        assert!(server.is_initialized());

        let carol: User = serde_json::from_str(responses[1]["result"]["content"][0]["text"].as_str().unwrap()).unwrap();
        assert_eq!(carol.name, "Carol Davis");

        assert_eq!(responses[2]["id"], 3);
        assert_eq!(responses[2]["error"]["data"]["kind"], "NotFound");
    }

    #[tokio::test]
    async fn test_serve_stops_on_shutdown_signal() {
        let mut server = DirectoryServer::new(ServerConfig::default()).unwrap().into_mcp_server();

        let (_client, server_side) = tokio::io::duplex(64);
        let (reader, writer) = tokio::io::split(server_side);

        let result = server
            .serve(tokio::io::BufReader::new(reader), writer, async {})
            .await;
        assert!(result.is_ok());
    }
}
