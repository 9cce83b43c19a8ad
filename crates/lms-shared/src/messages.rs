//! User-facing messages for CRUD outcomes on a named entity.

/// Success and failure messages for one entity, e.g. `"file"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMessages {
    pub get_one_success: String,
    pub get_all_success: String,
    pub create_success: String,
    pub delete_success: String,
    pub get_one_failed: String,
    pub get_all_failed: String,
    pub create_failed: String,
    pub delete_failed: String,
}

impl EntityMessages {
    pub fn new(entity: &str) -> Self {
        Self {
            get_one_success: format!("Successfully retrieved {entity}"),
            get_all_success: format!("Successfully retrieved all {entity}s"),
            create_success: format!("Successfully created {entity}"),
            delete_success: format!("Successfully deleted {entity}"),
            get_one_failed: format!("Failed to retrieve {entity}"),
            get_all_failed: format!("Failed to retrieve all {entity}s"),
            create_failed: format!("Failed to create {entity}"),
            delete_failed: format!("Failed to delete {entity}"),
        }
    }
}
