use datasieve_core::project;
use datasieve_types::{Selection, SieveResponse};
use std::fmt;

// --------------------------------------------------------
// Projection View
// --------------------------------------------------------

/// Console rendering of the projected response fields, one `label: values`
/// line per non-empty selected field. Fields outside the selection and
/// fields with no values produce no output at all.
pub struct ProjectionView<'a> {
    response: &'a SieveResponse,
    selection: &'a Selection,
}

impl<'a> ProjectionView<'a> {
    pub fn new(response: &'a SieveResponse, selection: &'a Selection) -> Self {
        Self {
            response,
            selection,
        }
    }
}

impl fmt::Display for ProjectionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in project(self.response, self.selection) {
            writeln!(f, "{}: {}", row.label(), row.joined())?;
        }
        Ok(())
    }
}
