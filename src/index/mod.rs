mod workspace_store;

pub use workspace_store::{WorkspaceSymbols, WORKSPACE_FILE_NAME};
