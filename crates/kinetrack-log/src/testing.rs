/// Convenience helper for snapshotting a loaded tracker log as pretty JSON.
pub fn snapshot_from_str(input: &str) -> String {
    match crate::parse(input) {
        Ok(document) => serde_json::to_string_pretty(&document)
            .unwrap_or_else(|err| format!("failed to render JSON: {err}")),
        Err(err) => format!("load error: {err}"),
    }
}
