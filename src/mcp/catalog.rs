/// Static descriptors advertised by `tools/list` and `resources/list`
/// 
/// Tool input schemas are generated from the same params structs the
/// dispatcher deserializes arguments into.

use schemars::gen::SchemaSettings;
use schemars::JsonSchema;
use serde_json::{json, Value};

use crate::mcp::protocol::{ResourceDefinition, ToolDefinition};
use crate::resources::{JSON_MIME_TYPE, PROJECTS_URI, STATUS_URI, TEXT_MIME_TYPE, USERS_URI};
use crate::tools::{CreateUserParams, GetProjectsParams, GetUserParams, ListUsersParams};

pub const GET_USER: &str = "get_user";
pub const LIST_USERS: &str = "list_users";
pub const CREATE_USER: &str = "create_user";
pub const GET_PROJECTS: &str = "get_projects";

/// Descriptors for every tool, in advertised order
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        tool::<GetUserParams>(GET_USER, "Get user information by ID"),
        tool::<ListUsersParams>(LIST_USERS, "List all users in the system"),
        tool::<CreateUserParams>(CREATE_USER, "Create a new user"),
        tool::<GetProjectsParams>(GET_PROJECTS, "Get projects, optionally filtered by status"),
    ]
}

/// Descriptors for every resource, in advertised order
pub fn resource_definitions() -> Vec<ResourceDefinition> {
    vec![
        resource(USERS_URI, "All Users", "Complete list of all users in the system", JSON_MIME_TYPE),
        resource(PROJECTS_URI, "All Projects", "Complete list of all projects in the system", JSON_MIME_TYPE),
        resource(STATUS_URI, "System Status", "Current system status and statistics", TEXT_MIME_TYPE),
    ]
}

fn tool<T: JsonSchema>(name: &str, description: &str) -> ToolDefinition {
    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        input_schema: input_schema::<T>(),
    }
}

fn resource(uri: &str, name: &str, description: &str, mime_type: &str) -> ResourceDefinition {
    ResourceDefinition {
        uri: uri.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        mime_type: mime_type.to_string(),
    }
}

/// Generate a flat object schema for a params struct
/// 
/// Subschemas are inlined and optional fields are not widened with
/// `null`, so enum constraints appear directly on each property.
fn input_schema<T: JsonSchema>() -> Value {
    let settings = SchemaSettings::draft07().with(|s| {
        s.inline_subschemas = true;
        s.option_add_null_type = false;
        s.meta_schema = None;
    });
    let root = settings.into_generator().into_root_schema_for::<T>();
    
    let mut schema = serde_json::to_value(root).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize input schema: {}", e);
        json!({ "type": "object" })
    });
    
    if let Some(object) = schema.as_object_mut() {
        // Tool description already covers what the root title/description say
        object.remove("title");
        object.remove("description");
        object.remove("definitions");
    }
    
    schema
}
