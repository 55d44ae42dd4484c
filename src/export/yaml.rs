//! YAML export of the whole dataset

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::FullExport;
use crate::state::AppState;

/// Same document as the JSON export, with a short comment header
pub fn export_full_yaml<W: Write>(state: &AppState, writer: &mut W) -> TrackerResult<()> {
    let export = FullExport::from_state(state);

    writeln!(writer, "# Finance tracker export")
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.export_date)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::validation::TransactionForm;
    use crate::services::TransactionService;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_export() {
        let temp_dir = TempDir::new().unwrap();
        let mut state = AppState::load(TrackerPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        TransactionService::new(&mut state)
            .create(&TransactionForm::new("Monthly bus pass", "Transport", "1500", "2025-01-05"))
            .unwrap();

        let mut output = Vec::new();
        export_full_yaml(&state, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# Finance tracker export"));
        assert!(text.contains("description: Monthly bus pass"));
        assert!(text.contains("baseCurrency: KES"));
        assert!(text.contains("exportDate:"));
    }
}
