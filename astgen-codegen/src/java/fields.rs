//! Field declaration and constructor wiring.
//!
//! A variant's fields appear three times in its generated class: as `final`
//! declarations, as constructor parameters and as constructor assignments.
//! [`RenderedFields`] produces all three from one pass over the field list so
//! they always share the same length and order.

use astgen_schema::{FieldDef, FormatError};

/// The three aligned renderings of a field list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedFields {
    /// `final Type name;` lines.
    pub declarations: Vec<String>,
    /// `Type name` constructor parameters.
    pub params: Vec<String>,
    /// `this.name = name;` lines.
    pub assignments: Vec<String>,
}

impl RenderedFields {
    /// Renders a field list. Fields must already be validated.
    #[must_use]
    pub fn from_fields(fields: &[FieldDef]) -> Self {
        let mut rendered = Self {
            declarations: Vec::with_capacity(fields.len()),
            params: Vec::with_capacity(fields.len()),
            assignments: Vec::with_capacity(fields.len()),
        };

        for field in fields {
            rendered
                .declarations
                .push(format!("final {} {};", field.type_name, field.name));
            rendered
                .params
                .push(format!("{} {}", field.type_name, field.name));
            rendered
                .assignments
                .push(format!("this.{0} = {0};", field.name));
        }

        rendered
    }

    /// Returns true if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Comma-joined constructor parameter list.
    #[must_use]
    pub fn param_list(&self) -> String {
        self.params.join(", ")
    }
}

/// Renders a field list, rejecting empty type or field names.
///
/// # Errors
/// Returns `FormatError::EmptyIdentifier` for a field with an empty type or name.
pub fn render_fields(fields: &[FieldDef]) -> Result<RenderedFields, FormatError> {
    for (index, field) in fields.iter().enumerate() {
        if field.type_name.trim().is_empty() {
            return Err(FormatError::empty("field type", format!("field #{index}")));
        }
        if field.name.trim().is_empty() {
            return Err(FormatError::empty("field name", format!("field #{index}")));
        }
    }
    Ok(RenderedFields::from_fields(fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::new("Expr", "left"),
            FieldDef::new("Token", "operator"),
            FieldDef::new("Expr", "right"),
        ]
    }

    #[test]
    fn test_render_fields() {
        let rendered = render_fields(&binary_fields()).unwrap();

        assert_eq!(
            rendered.declarations,
            ["final Expr left;", "final Token operator;", "final Expr right;"]
        );
        assert_eq!(rendered.param_list(), "Expr left, Token operator, Expr right");
        assert_eq!(
            rendered.assignments,
            [
                "this.left = left;",
                "this.operator = operator;",
                "this.right = right;"
            ]
        );
    }

    #[test]
    fn test_permutation_moves_all_three_together() {
        let fields = binary_fields();
        let original = RenderedFields::from_fields(&fields);

        let order = [2, 0, 1];
        let permuted: Vec<_> = order.iter().map(|&i| fields[i].clone()).collect();
        let rendered = RenderedFields::from_fields(&permuted);

        for (pos, &i) in order.iter().enumerate() {
            assert_eq!(rendered.declarations[pos], original.declarations[i]);
            assert_eq!(rendered.params[pos], original.params[i]);
            assert_eq!(rendered.assignments[pos], original.assignments[i]);
        }
    }

    #[test]
    fn test_empty_field_list() {
        let rendered = render_fields(&[]).unwrap();
        assert!(rendered.is_empty());
        assert_eq!(rendered.param_list(), "");
        assert!(rendered.assignments.is_empty());
    }

    #[test]
    fn test_generic_types_copied_verbatim() {
        let rendered = RenderedFields::from_fields(&[FieldDef::new("List<Stmt>", "body")]);
        assert_eq!(rendered.declarations, ["final List<Stmt> body;"]);
        assert_eq!(rendered.params, ["List<Stmt> body"]);
    }

    #[test]
    fn test_empty_names_rejected() {
        assert!(matches!(
            render_fields(&[FieldDef::new("", "value")]),
            Err(FormatError::EmptyIdentifier { .. })
        ));
        assert!(matches!(
            render_fields(&[FieldDef::new("Object", "")]),
            Err(FormatError::EmptyIdentifier { .. })
        ));
    }
}
