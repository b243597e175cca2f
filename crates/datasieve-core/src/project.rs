use datasieve_types::{ResponseField, Selection, SieveResponse};

/// One renderable row of the response projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectedField<'a> {
    pub field: ResponseField,
    pub values: &'a [String],
}

impl ProjectedField<'_> {
    pub fn label(&self) -> &'static str {
        self.field.label()
    }

    /// Values joined the way both front ends render them.
    pub fn joined(&self) -> String {
        self.values.join(", ")
    }
}

/// Project the response fields chosen by the user.
///
/// Walks the fixed display order and yields a field iff it is selected and
/// its sequence is non-empty. Empty or absent fields are skipped silently;
/// there is no error path. The iterator borrows its inputs and is recomputed
/// on every selection or response change, so nothing is cached.
pub fn project<'a>(
    response: &'a SieveResponse,
    selection: &'a Selection,
) -> impl Iterator<Item = ProjectedField<'a>> + 'a {
    ResponseField::DISPLAY_ORDER
        .into_iter()
        .filter(|field| selection.contains(*field))
        .map(|field| ProjectedField {
            field,
            values: response.field(field),
        })
        .filter(|projected| !projected.values.is_empty())
}
