//! Field access on untyped nodes.

use indexmap::IndexMap;

use crate::parser::fields::{self, Cardinality, Field};
use crate::parser::{Supertype, SyntaxElement, SyntaxNode};

/// Named-slot access for any [`SyntaxNode`].
///
/// Field names are the grammar's camelCase names (`classSpecifier`,
/// `operand1`, `endIdentifier`). Asking for a name the node's kind does not
/// declare gives [`Field::Absent`].
pub trait NodeExt {
    fn field(&self, name: &str) -> Field;

    /// Every filled slot, in declaration order.
    fn fields(&self) -> IndexMap<&'static str, Field>;

    /// The slot `child` fills on this node, if any.
    fn field_name_of(&self, child: &SyntaxElement) -> Option<&'static str>;

    /// The supertypes of this node's kind, innermost first.
    fn supertypes(&self) -> &'static [Supertype];

    /// The node filling a single-valued slot.
    fn child_by_field(&self, name: &str) -> Option<SyntaxNode> {
        self.field(name).node()
    }
}

impl NodeExt for SyntaxNode {
    fn field(&self, name: &str) -> Field {
        fields::field(self, name)
    }

    fn fields(&self) -> IndexMap<&'static str, Field> {
        let mut out = IndexMap::new();
        let table = fields::field_table();
        let slots = table.slots(self.kind());
        let mut grouped: Vec<Vec<SyntaxElement>> = vec![Vec::new(); slots.len()];
        for (idx, element) in table.resolve(self) {
            grouped[idx].push(element);
        }
        for (slot, mut elements) in slots.iter().zip(grouped) {
            let field = match (slot.cardinality, elements.len()) {
                (_, 0) => continue,
                (Cardinality::Many, _) => Field::Many(elements),
                _ => Field::One(elements.swap_remove(0)),
            };
            out.insert(slot.name, field);
        }
        out
    }

    fn field_name_of(&self, child: &SyntaxElement) -> Option<&'static str> {
        let table = fields::field_table();
        let slots = table.slots(self.kind());
        table
            .resolve(self)
            .into_iter()
            .find(|(_, element)| element == child)
            .map(|(idx, _)| slots[idx].name)
    }

    fn supertypes(&self) -> &'static [Supertype] {
        self.kind().supertypes()
    }
}
