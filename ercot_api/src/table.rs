//! Unpacking page envelopes into a tabular result.

use serde_json::Value;

use crate::types::PageEnvelope;
use crate::Error;

/// The accumulated tabular output of a fetch: column names from the first
/// page, rows concatenated across pages in page order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultTable {
    /// Unpacks one page envelope into a table fragment.
    ///
    /// Columns are `fields[*].name` in order; each `data` entry is read as a
    /// positional row aligned to them. A row whose arity does not match the
    /// field count fails with [`Error::Format`] rather than misaligning.
    pub fn from_envelope(envelope: &PageEnvelope) -> Result<Self, Error> {
        let columns: Vec<String> = envelope.fields.iter().map(|f| f.name.clone()).collect();
        let mut rows = Vec::with_capacity(envelope.data.len());
        for (index, row) in envelope.data.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::Format(format!(
                    "row {} has {} values for {} columns",
                    index,
                    row.len(),
                    columns.len()
                )));
            }
            rows.push(row.clone());
        }
        Ok(Self { columns, rows })
    }

    /// Appends a later page's fragment. Pages of one query are expected to
    /// share identical field order; a fragment whose columns differ fails
    /// with [`Error::Format`] instead of concatenating misaligned rows.
    pub fn append(&mut self, fragment: ResultTable) -> Result<(), Error> {
        if fragment.columns != self.columns {
            return Err(Error::Format(
                "page field order changed mid-query".to_string(),
            ));
        }
        self.rows.extend(fragment.rows);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(body: serde_json::Value) -> PageEnvelope {
        PageEnvelope::parse(&body.to_string()).unwrap()
    }

    #[test]
    fn unpacks_positional_rows() {
        let envelope = envelope(json!({
            "fields": [{"name": "A"}, {"name": "B"}],
            "data": [[1, 2], [3, 4]],
            "_meta": {"totalPages": 1}
        }));
        let table = ResultTable::from_envelope(&envelope).unwrap();
        assert_eq!(table.columns, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec![json!(1), json!(2)], vec![json!(3), json!(4)]]);
    }

    #[test]
    fn unpacking_is_pure() {
        let envelope = envelope(json!({
            "fields": [{"name": "A"}],
            "data": [["x"]],
            "_meta": {"totalPages": 1}
        }));
        let first = ResultTable::from_envelope(&envelope).unwrap();
        let second = ResultTable::from_envelope(&envelope).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn arity_mismatch_is_a_format_error() {
        let envelope = envelope(json!({
            "fields": [{"name": "A"}, {"name": "B"}],
            "data": [[1, 2], [3]],
            "_meta": {"totalPages": 1}
        }));
        assert!(matches!(
            ResultTable::from_envelope(&envelope),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn append_concatenates_in_order() {
        let first = envelope(json!({
            "fields": [{"name": "A"}],
            "data": [[1], [2]],
            "_meta": {"totalPages": 2}
        }));
        let second = envelope(json!({
            "fields": [{"name": "A"}],
            "data": [[3]],
            "_meta": {"totalPages": 2}
        }));
        let mut table = ResultTable::from_envelope(&first).unwrap();
        table.append(ResultTable::from_envelope(&second).unwrap()).unwrap();
        assert_eq!(table.rows, vec![vec![json!(1)], vec![json!(2)], vec![json!(3)]]);
    }

    #[test]
    fn append_rejects_column_drift() {
        let first = envelope(json!({
            "fields": [{"name": "A"}],
            "data": [[1]],
            "_meta": {"totalPages": 2}
        }));
        let second = envelope(json!({
            "fields": [{"name": "B"}],
            "data": [[2]],
            "_meta": {"totalPages": 2}
        }));
        let mut table = ResultTable::from_envelope(&first).unwrap();
        let result = table.append(ResultTable::from_envelope(&second).unwrap());
        assert!(matches!(result, Err(Error::Format(_))));
        assert_eq!(table.len(), 1);
    }
}
