#![deny(unsafe_code)]

//! Owned validation session for one submission file at a time.
//!
//! The session holds the schema, the ingested table, the user's mapping
//! overlay, and the current report. Every mutation triggers a full,
//! synchronous recomputation of the report; nothing is updated
//! incrementally. The session is exclusively owned and single-threaded;
//! the only asynchronous step in the surrounding system is acquiring file
//! text, which is guarded here by a generation counter so a stale read
//! completing late can never overwrite newer state.

use nds_ingest::ingest;
use nds_model::{
    MappingOverlay, RawTable, Result, SchemaField, TemplateError, TransformationCounts,
    ValidationReport,
};
use nds_normalize::standardize_rows;
use nds_report::export_template;
use nds_validate::run_validation;

/// Ticket issued when a file load begins. Completing a load with a ticket
/// from a superseded generation is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// One active validation session.
#[derive(Debug)]
pub struct ValidationSession {
    schema: Vec<SchemaField>,
    short_name: String,
    table: Option<RawTable>,
    overlay: MappingOverlay,
    report: Option<ValidationReport>,
    generation: u64,
}

impl ValidationSession {
    /// Creates a session. An empty `short_name` disables the template
    /// shortname check on load (the file's own framing is still detected).
    pub fn new(schema: Vec<SchemaField>, short_name: impl Into<String>) -> Self {
        Self {
            schema,
            short_name: short_name.into(),
            table: None,
            overlay: MappingOverlay::new(),
            report: None,
            generation: 0,
        }
    }

    /// Begins a file load, superseding any load still in flight.
    pub fn load_begin(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Completes a file load with the acquired text.
    ///
    /// A stale ticket (one issued before a newer `load_begin`) is rejected
    /// with [`TemplateError::Acquisition`] and leaves the session
    /// untouched. On success the previous table, overlay, and report are
    /// replaced wholesale.
    pub fn load_complete(
        &mut self,
        ticket: LoadTicket,
        content: Result<String>,
    ) -> Result<&ValidationReport> {
        if ticket.generation != self.generation {
            tracing::warn!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding superseded file load"
            );
            return Err(TemplateError::Acquisition(
                "file load superseded by a newer one".to_string(),
            ));
        }
        let text = content?;
        let expected = (!self.short_name.is_empty()).then_some(self.short_name.as_str());
        let table = ingest(&text, expected)?;
        self.overlay = MappingOverlay::new();
        let report = run_validation(&table, &self.overlay, &self.schema);
        self.table = Some(table);
        Ok(self.report.insert(report))
    }

    /// Convenience wrapper for synchronous callers: begin + complete.
    pub fn load_text(&mut self, text: &str) -> Result<&ValidationReport> {
        let ticket = self.load_begin();
        self.load_complete(ticket, Ok(text.to_string()))
    }

    /// Sets or clears the mapping for a header and recomputes the report.
    pub fn set_mapping(&mut self, header: &str, field: Option<&str>) {
        self.overlay.set_mapping(header, field);
        self.recompute();
    }

    /// Flips the ignore flag for a header and recomputes the report.
    pub fn toggle_ignored(&mut self, header: &str) {
        self.overlay.toggle_ignored(header);
        self.recompute();
    }

    /// Current report, if a file has been loaded.
    pub fn report(&self) -> Option<&ValidationReport> {
        self.report.as_ref()
    }

    /// Ingested table, if a file has been loaded.
    pub fn table(&self) -> Option<&RawTable> {
        self.table.as_ref()
    }

    pub fn overlay(&self) -> &MappingOverlay {
        &self.overlay
    }

    pub fn schema(&self) -> &[SchemaField] {
        &self.schema
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// The loaded table with first-pass standardization applied, for
    /// export. Standardization is idempotent, so repeated calls yield
    /// byte-identical rows.
    pub fn standardized_table(&self) -> Result<(RawTable, TransformationCounts)> {
        let table = self.table.as_ref().ok_or_else(|| {
            TemplateError::Acquisition("no file loaded in this session".to_string())
        })?;
        let mut standardized = table.clone();
        let counts = standardize_rows(&standardized.header, &mut standardized.rows);
        Ok((standardized, counts))
    }

    /// Serializes the corrected template for the loaded file, honoring the
    /// session's mapping and ignore decisions.
    pub fn export(&self) -> Result<String> {
        let (standardized, _) = self.standardized_table()?;
        Ok(export_template(
            &standardized,
            &self.overlay,
            &self.short_name,
        ))
    }

    fn recompute(&mut self) {
        self.report = self
            .table
            .as_ref()
            .map(|table| run_validation(table, &self.overlay, &self.schema));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nds_model::RequirementLevel;

    fn schema() -> Vec<SchemaField> {
        vec![
            SchemaField::new("subjectkey", RequirementLevel::Required),
            SchemaField::new("gender", RequirementLevel::Required).with_range("M;F"),
        ]
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut session = ValidationSession::new(schema(), "demographics02");
        let stale = session.load_begin();
        let fresh = session.load_begin();

        let newer = session.load_complete(
            fresh,
            Ok("subjectkey,gender\nNDAR_1,M\n".to_string()),
        );
        assert!(newer.is_ok());

        let result = session.load_complete(stale, Ok("subjectkey,gender\nOLD,F\n".to_string()));
        assert!(matches!(result, Err(TemplateError::Acquisition(_))));
        // Newer state survives.
        let table = session.table().expect("table");
        assert_eq!(table.rows[0][0], "NDAR_1");
    }

    #[test]
    fn acquisition_failure_propagates() {
        let mut session = ValidationSession::new(schema(), "demographics02");
        let ticket = session.load_begin();
        let result = session.load_complete(
            ticket,
            Err(TemplateError::Acquisition("read failed".to_string())),
        );
        assert!(result.is_err());
        assert!(session.report().is_none());
    }

    #[test]
    fn load_resets_overlay() {
        let mut session = ValidationSession::new(schema(), "demographics02");
        session
            .load_text("subjectkey,gender,extra\nNDAR_1,M,x\n")
            .expect("load");
        session.toggle_ignored("extra");
        assert!(session.overlay().is_ignored("extra"));

        session
            .load_text("subjectkey,gender,extra\nNDAR_2,F,y\n")
            .expect("reload");
        assert!(!session.overlay().is_ignored("extra"));
    }
}
