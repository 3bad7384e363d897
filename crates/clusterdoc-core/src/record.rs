//! The ticket record data model.

/// One row of the clustered ticket export.
///
/// All text fields default to the empty string when the source cell is
/// absent or blank. The `cluster` field is only ever populated from a
/// numeric cell; rows without one are dropped during ingestion and never
/// become a `TicketRecord`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketRecord {
    /// Docket number assigned by the ticketing system.
    pub docket_no: String,
    /// Identifier of the mailing list the message arrived on.
    pub mail_list_id: String,
    /// Identifier of the individual mail message.
    pub mail_id: String,
    /// Ticket identifier.
    pub ticket_id: String,
    /// Disposition category name.
    pub disposition_name: String,
    /// Sub-disposition category name.
    pub sub_disposition_name: String,
    /// Priority name.
    pub priority_name: String,
    /// Free-text summary of the reported problem.
    pub problem_reported: String,
    /// Department the ticket was assigned to.
    pub assigned_to_dept_name: String,
    /// Cleaned message body text.
    pub processed_body: String,
    /// Resolution text, empty when the ticket carries no solution.
    pub solution: String,
    /// Pre-computed cluster id this row belongs to.
    pub cluster: i64,
}

impl TicketRecord {
    /// True when the record carries a non-empty solution text.
    #[inline]
    #[must_use]
    pub fn has_solution(&self) -> bool {
        !self.solution.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        let record = TicketRecord::default();
        assert!(record.docket_no.is_empty());
        assert!(record.solution.is_empty());
        assert_eq!(record.cluster, 0);
        assert!(!record.has_solution());
    }

    #[test]
    fn test_has_solution() {
        let record = TicketRecord {
            solution: "Rebooted the switch".to_string(),
            ..Default::default()
        };
        assert!(record.has_solution());
    }
}
