//! Field table
//!
//! The declarative half of the grammar: for every node kind, the ordered
//! list of named slots its children fill. The grammar functions build the
//! tree; this table names the parts of it.
//!
//! Children are matched to slots in order. A single-valued slot is filled
//! at most once and moves the cursor past itself. A repeated slot stays
//! open, together with any repeated slots declared next to it, so
//! `repeat(choice(a, b))` shapes interleave freely. A required slot left
//! empty takes the child of the nearest earlier optional slot that could
//! hold it, so `a:b` fills `startExpression` and `stopExpression` and
//! leaves `stepExpression` empty.

use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};

use super::errors::RuleTableError;
use super::syntax_kind::{SyntaxElement, SyntaxKind, SyntaxNode, Supertype};

/// How many children a slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    Optional,
    Required,
    Many,
}

/// Which children a slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Matcher {
    Kind(SyntaxKind),
    Kinds(&'static [SyntaxKind]),
    Super(Supertype),
}

impl Matcher {
    pub fn matches(&self, kind: SyntaxKind) -> bool {
        match *self {
            Self::Kind(expected) => kind == expected,
            Self::Kinds(expected) => expected.contains(&kind),
            Self::Super(supertype) => kind.is_a(supertype),
        }
    }
}

/// One named slot on a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub name: &'static str,
    pub matcher: Matcher,
    pub cardinality: Cardinality,
}

/// The value of a field on one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Absent,
    One(SyntaxElement),
    Many(Vec<SyntaxElement>),
}

impl Field {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The single child, or the first of many.
    pub fn first(&self) -> Option<&SyntaxElement> {
        match self {
            Self::Absent => None,
            Self::One(element) => Some(element),
            Self::Many(elements) => elements.first(),
        }
    }

    /// The children as a list; empty when absent.
    pub fn to_vec(&self) -> Vec<SyntaxElement> {
        match self {
            Self::Absent => Vec::new(),
            Self::One(element) => vec![element.clone()],
            Self::Many(elements) => elements.clone(),
        }
    }

    /// The first child, when it is a node.
    pub fn node(&self) -> Option<SyntaxNode> {
        self.first().and_then(|element| element.as_node().cloned())
    }
}

/// Validated per-kind slot lists, shared read-only by every parse.
#[derive(Debug)]
pub struct FieldTable {
    slots: FxHashMap<SyntaxKind, &'static [Slot]>,
}

static FIELD_TABLE: Lazy<FieldTable> = Lazy::new(|| load(SCHEMA));

/// Build `schema`, panicking if it is malformed. The shipped schema is
/// static, so this can only fail on a broken build.
fn load(schema: &'static [(SyntaxKind, &'static [Slot])]) -> FieldTable {
    match FieldTable::build(schema) {
        Ok(table) => table,
        Err(err) => panic!("malformed field table: {err}"),
    }
}

/// The process-wide field table, built and validated on first use.
///
/// Every parse entry point forces it before building a tree, so a malformed
/// table stops the first parse instead of degrading field lookups.
pub fn field_table() -> &'static FieldTable {
    &FIELD_TABLE
}

/// Resolve one field of `node`. Unknown names give [`Field::Absent`].
pub fn field(node: &SyntaxNode, name: &str) -> Field {
    field_table().field(node, name)
}

impl FieldTable {
    /// Build a table from a schema, rejecting duplicate kinds, duplicate slot
    /// names and entries keyed by token kinds.
    pub fn build(schema: &'static [(SyntaxKind, &'static [Slot])]) -> Result<Self, RuleTableError> {
        let mut slots = FxHashMap::default();
        for &(kind, kind_slots) in schema {
            if !kind.is_node() || kind == SyntaxKind::ERROR {
                return Err(RuleTableError::NotANode {
                    kind: kind.grammar_name(),
                });
            }
            let mut names = FxHashSet::default();
            for slot in kind_slots {
                if !names.insert(slot.name) {
                    return Err(RuleTableError::DuplicateSlot {
                        kind: kind.grammar_name(),
                        slot: slot.name,
                    });
                }
            }
            if slots.insert(kind, kind_slots).is_some() {
                return Err(RuleTableError::DuplicateKind {
                    kind: kind.grammar_name(),
                });
            }
        }
        Ok(Self { slots })
    }

    /// The slots of `kind`, in declaration order.
    pub fn slots(&self, kind: SyntaxKind) -> &'static [Slot] {
        self.slots.get(&kind).copied().unwrap_or(&[])
    }

    pub fn contains(&self, kind: SyntaxKind) -> bool {
        self.slots.contains_key(&kind)
    }

    /// The value of the slot called `name` on `node`.
    pub fn field(&self, node: &SyntaxNode, name: &str) -> Field {
        let slots = self.slots(node.kind());
        let Some(wanted) = slots.iter().position(|slot| slot.name == name) else {
            return Field::Absent;
        };
        let mut elements: Vec<SyntaxElement> = self
            .resolve(node)
            .into_iter()
            .filter(|(idx, _)| *idx == wanted)
            .map(|(_, element)| element)
            .collect();
        match (slots[wanted].cardinality, elements.len()) {
            (_, 0) => Field::Absent,
            (Cardinality::Many, _) => Field::Many(elements),
            _ => Field::One(elements.swap_remove(0)),
        }
    }

    /// Assign the children of `node` to slots. Returns `(slot index, child)`
    /// in child order; children no slot accepts (punctuation, keywords that
    /// are not flags, `ERROR` nodes) are left out.
    pub fn resolve(&self, node: &SyntaxNode) -> Vec<(usize, SyntaxElement)> {
        let slots = self.slots(node.kind());
        let mut filled = vec![false; slots.len()];
        let mut assigned: Vec<(usize, SyntaxElement)> = Vec::new();
        let mut cursor = 0;

        for child in node.children_with_tokens() {
            let kind = child.kind();
            if kind.is_trivia() && kind != SyntaxKind::BOM {
                continue;
            }
            let found = (cursor..slots.len()).find(|&idx| {
                let slot = &slots[idx];
                slot.matcher.matches(kind) && (slot.cardinality == Cardinality::Many || !filled[idx])
            });
            let Some(idx) = found else {
                continue;
            };
            filled[idx] = true;
            cursor = match slots[idx].cardinality {
                Cardinality::Many => run_start(slots, idx),
                Cardinality::Optional | Cardinality::Required => idx + 1,
            };
            assigned.push((idx, child));
        }

        for required in 0..slots.len() {
            if slots[required].cardinality != Cardinality::Required || filled[required] {
                continue;
            }
            let donor = assigned.iter().rposition(|(idx, element)| {
                *idx < required
                    && slots[*idx].cardinality == Cardinality::Optional
                    && slots[required].matcher.matches(element.kind())
            });
            if let Some(position) = donor {
                filled[assigned[position].0] = false;
                assigned[position].0 = required;
                filled[required] = true;
            }
        }

        assigned
    }
}

/// First index of the run of repeated slots containing `idx`.
fn run_start(slots: &[Slot], idx: usize) -> usize {
    let mut start = idx;
    while start > 0 && slots[start - 1].cardinality == Cardinality::Many {
        start -= 1;
    }
    start
}

// =============================================================================
// Schema
// =============================================================================

const fn opt(name: &'static str, matcher: Matcher) -> Slot {
    Slot {
        name,
        matcher,
        cardinality: Cardinality::Optional,
    }
}

const fn req(name: &'static str, matcher: Matcher) -> Slot {
    Slot {
        name,
        matcher,
        cardinality: Cardinality::Required,
    }
}

const fn many(name: &'static str, matcher: Matcher) -> Slot {
    Slot {
        name,
        matcher,
        cardinality: Cardinality::Many,
    }
}

/// A keyword present only as a flag, such as `final` or `each`.
const fn flag(name: &'static str, keyword: SyntaxKind) -> Slot {
    opt(name, Matcher::Kind(keyword))
}

use Matcher::{Kind, Kinds, Super};
use SyntaxKind as K;

const DESCRIPTION: Slot = opt("descriptionString", Kind(K::DESCRIPTION_STRING));
const ANNOTATION: Slot = opt("annotationClause", Kind(K::ANNOTATION_CLAUSE));
const CONDITION: Slot = req("condition", Super(Supertype::Expression));
const EQUATIONS: Slot = many("equation", Super(Supertype::Equation));
const STATEMENTS: Slot = many("statement", Super(Supertype::Statement));

const BINARY_OPERATORS: &[SyntaxKind] = &[
    K::OR_KW,
    K::AND_KW,
    K::LT,
    K::LT_EQ,
    K::GT,
    K::GT_EQ,
    K::EQ_EQ,
    K::LT_GT,
    K::PLUS,
    K::MINUS,
    K::DOT_PLUS,
    K::DOT_MINUS,
    K::STAR,
    K::SLASH,
    K::DOT_STAR,
    K::DOT_SLASH,
    K::CARET,
    K::DOT_CARET,
];

const UNARY_OPERATORS: &[SyntaxKind] = &[K::NOT_KW, K::PLUS, K::MINUS, K::DOT_PLUS, K::DOT_MINUS];

const TYPE_PREFIX: [Slot; 7] = [
    flag("flow", K::FLOW_KW),
    flag("stream", K::STREAM_KW),
    flag("discrete", K::DISCRETE_KW),
    flag("parameter", K::PARAMETER_KW),
    flag("constant", K::CONSTANT_KW),
    flag("input", K::INPUT_KW),
    flag("output", K::OUTPUT_KW),
];

/// Every node kind and its slots.
pub static SCHEMA: &[(SyntaxKind, &[Slot])] = &[
    // Stored definition and classes
    (
        K::STORED_DEFINITION,
        &[
            opt("bom", Kind(K::BOM)),
            opt("withinClause", Kind(K::WITHIN_CLAUSE)),
            many("classDefinitionClause", Kind(K::CLASS_DEFINITION_CLAUSE)),
        ],
    ),
    (K::WITHIN_CLAUSE, &[opt("packageName", Kind(K::NAME))]),
    (
        K::CLASS_DEFINITION_CLAUSE,
        &[
            flag("final", K::FINAL_KW),
            req("classDefinition", Kind(K::CLASS_DEFINITION)),
        ],
    ),
    (
        K::CLASS_DEFINITION,
        &[
            flag("encapsulated", K::ENCAPSULATED_KW),
            req("classPrefixes", Kind(K::CLASS_PREFIXES)),
            req("classSpecifier", Super(Supertype::ClassSpecifier)),
        ],
    ),
    (
        K::CLASS_PREFIXES,
        &[
            flag("partial", K::PARTIAL_KW),
            flag("class", K::CLASS_KW),
            flag("model", K::MODEL_KW),
            flag("block", K::BLOCK_KW),
            flag("type", K::TYPE_KW),
            flag("package", K::PACKAGE_KW),
            flag("expandable", K::EXPANDABLE_KW),
            flag("connector", K::CONNECTOR_KW),
            flag("pure", K::PURE_KW),
            flag("impure", K::IMPURE_KW),
            flag("operator", K::OPERATOR_KW),
            flag("record", K::RECORD_KW),
            flag("function", K::FUNCTION_KW),
        ],
    ),
    (
        K::LONG_CLASS_SPECIFIER,
        &[
            flag("extends", K::EXTENDS_KW),
            req("identifier", Kind(K::IDENT)),
            opt("classModification", Kind(K::CLASS_MODIFICATION)),
            DESCRIPTION,
            opt("initialElementList", Kind(K::INITIAL_ELEMENT_LIST)),
            many("elementList", Kind(K::ELEMENT_LIST)),
            many("equationSection", Kind(K::EQUATION_SECTION)),
            many("algorithmSection", Kind(K::ALGORITHM_SECTION)),
            opt("externalFunctionClause", Kind(K::EXTERNAL_FUNCTION_CLAUSE)),
            ANNOTATION,
            req("endIdentifier", Kind(K::IDENT)),
        ],
    ),
    (
        K::SHORT_CLASS_SPECIFIER,
        &[
            req("identifier", Kind(K::IDENT)),
            flag("input", K::INPUT_KW),
            flag("output", K::OUTPUT_KW),
            opt("typeSpecifier", Kind(K::TYPE_SPECIFIER)),
            opt("arraySubscripts", Kind(K::ARRAY_SUBSCRIPTS)),
            opt("classModification", Kind(K::CLASS_MODIFICATION)),
            flag("enumeration", K::ENUMERATION_KW),
            many("enumerationLiteral", Kind(K::ENUMERATION_LITERAL)),
            opt("unspecified", Kind(K::COLON)),
            DESCRIPTION,
            ANNOTATION,
        ],
    ),
    (
        K::DER_CLASS_SPECIFIER,
        &[
            req("identifier", Kind(K::IDENT)),
            req("typeSpecifier", Kind(K::TYPE_SPECIFIER)),
            many("input", Kind(K::IDENT)),
            DESCRIPTION,
            ANNOTATION,
        ],
    ),
    (
        K::EXTERNAL_FUNCTION_CLAUSE,
        &[
            opt("languageSpecification", Kind(K::LANGUAGE_SPECIFICATION)),
            opt("externalFunctionCall", Kind(K::EXTERNAL_FUNCTION_CALL)),
            ANNOTATION,
        ],
    ),
    (
        K::ENUMERATION_LITERAL,
        &[req("identifier", Kind(K::IDENT)), DESCRIPTION, ANNOTATION],
    ),
    (K::LANGUAGE_SPECIFICATION, &[req("language", Kind(K::STRING_LITERAL))]),
    (
        K::EXTERNAL_FUNCTION_CALL,
        &[
            opt("output", Kind(K::COMPONENT_REFERENCE)),
            req("functionName", Kind(K::IDENT)),
            opt("arguments", Kind(K::EXPRESSION_LIST)),
        ],
    ),
    (K::INITIAL_ELEMENT_LIST, &[many("element", Super(Supertype::Element))]),
    (
        K::ELEMENT_LIST,
        &[
            flag("protected", K::PROTECTED_KW),
            flag("public", K::PUBLIC_KW),
            many("element", Super(Supertype::Element)),
        ],
    ),
    // Elements
    (
        K::NAMED_ELEMENT_CLAUSE,
        &[
            flag("redeclare", K::REDECLARE_KW),
            flag("final", K::FINAL_KW),
            flag("inner", K::INNER_KW),
            flag("outer", K::OUTER_KW),
            flag("replaceable", K::REPLACEABLE_KW),
            opt("classDefinition", Kind(K::CLASS_DEFINITION)),
            opt("componentClause", Kind(K::COMPONENT_CLAUSE)),
            opt("constrainingClause", Kind(K::CONSTRAINING_CLAUSE)),
            DESCRIPTION,
            ANNOTATION,
        ],
    ),
    (
        K::SIMPLE_IMPORT_CLAUSE,
        &[
            opt("shortName", Kind(K::IDENT)),
            req("packageName", Kind(K::NAME)),
            DESCRIPTION,
            ANNOTATION,
        ],
    ),
    (
        K::COMPOUND_IMPORT_CLAUSE,
        &[
            req("packageName", Kind(K::NAME)),
            many("importName", Kind(K::IDENT)),
            DESCRIPTION,
            ANNOTATION,
        ],
    ),
    (
        K::UNQUALIFIED_IMPORT_CLAUSE,
        &[req("packageName", Kind(K::NAME)), DESCRIPTION, ANNOTATION],
    ),
    (
        K::EXTENDS_CLAUSE,
        &[
            req("typeSpecifier", Kind(K::TYPE_SPECIFIER)),
            opt(
                "classOrInheritanceModification",
                Kind(K::CLASS_OR_INHERITANCE_MODIFICATION),
            ),
            ANNOTATION,
        ],
    ),
    (
        K::CONSTRAINING_CLAUSE,
        &[
            req("typeSpecifier", Kind(K::TYPE_SPECIFIER)),
            opt("classModification", Kind(K::CLASS_MODIFICATION)),
        ],
    ),
    (
        K::CLASS_OR_INHERITANCE_MODIFICATION,
        &[many(
            "argumentOrInheritanceModification",
            Kinds(&[
                K::ELEMENT_MODIFICATION,
                K::ELEMENT_REDECLARATION,
                K::ELEMENT_REPLACEABLE,
                K::INHERITANCE_MODIFICATION,
            ]),
        )],
    ),
    (
        K::INHERITANCE_MODIFICATION,
        &[
            opt("connectClause", Kind(K::CONNECT_CLAUSE)),
            opt("identifier", Kind(K::IDENT)),
        ],
    ),
    (
        K::COMPONENT_CLAUSE,
        &[
            TYPE_PREFIX[0],
            TYPE_PREFIX[1],
            TYPE_PREFIX[2],
            TYPE_PREFIX[3],
            TYPE_PREFIX[4],
            TYPE_PREFIX[5],
            TYPE_PREFIX[6],
            req("typeSpecifier", Kind(K::TYPE_SPECIFIER)),
            opt("arraySubscripts", Kind(K::ARRAY_SUBSCRIPTS)),
            many("componentDeclaration", Kind(K::COMPONENT_DECLARATION)),
        ],
    ),
    (
        K::COMPONENT_DECLARATION,
        &[
            req("declaration", Kind(K::DECLARATION)),
            opt("conditionAttribute", Kind(K::CONDITION_ATTRIBUTE)),
            DESCRIPTION,
            ANNOTATION,
        ],
    ),
    (K::CONDITION_ATTRIBUTE, &[CONDITION]),
    (
        K::DECLARATION,
        &[
            req("identifier", Kind(K::IDENT)),
            opt("arraySubscripts", Kind(K::ARRAY_SUBSCRIPTS)),
            opt("modification", Kind(K::MODIFICATION)),
        ],
    ),
    // Modifications
    (
        K::MODIFICATION,
        &[
            opt("classModification", Kind(K::CLASS_MODIFICATION)),
            opt("modificationExpression", Kind(K::MODIFICATION_EXPRESSION)),
        ],
    ),
    (
        K::MODIFICATION_EXPRESSION,
        &[
            flag("break", K::BREAK_KW),
            opt("expression", Super(Supertype::Expression)),
        ],
    ),
    (K::CLASS_MODIFICATION, &[many("argument", Super(Supertype::Argument))]),
    (
        K::ELEMENT_MODIFICATION,
        &[
            flag("each", K::EACH_KW),
            flag("final", K::FINAL_KW),
            req("name", Kinds(&[K::NAME, K::COMPONENT_REFERENCE])),
            opt("modification", Kind(K::MODIFICATION)),
            DESCRIPTION,
        ],
    ),
    (
        K::ELEMENT_REDECLARATION,
        &[
            flag("each", K::EACH_KW),
            flag("final", K::FINAL_KW),
            flag("replaceable", K::REPLACEABLE_KW),
            opt("shortClassDefinition", Kind(K::SHORT_CLASS_DEFINITION)),
            opt("componentClause", Kind(K::COMPONENT_CLAUSE1)),
            opt("constrainingClause", Kind(K::CONSTRAINING_CLAUSE)),
        ],
    ),
    (
        K::ELEMENT_REPLACEABLE,
        &[
            flag("each", K::EACH_KW),
            flag("final", K::FINAL_KW),
            opt("shortClassDefinition", Kind(K::SHORT_CLASS_DEFINITION)),
            opt("componentClause", Kind(K::COMPONENT_CLAUSE1)),
            opt("constrainingClause", Kind(K::CONSTRAINING_CLAUSE)),
        ],
    ),
    (
        K::COMPONENT_CLAUSE1,
        &[
            TYPE_PREFIX[0],
            TYPE_PREFIX[1],
            TYPE_PREFIX[2],
            TYPE_PREFIX[3],
            TYPE_PREFIX[4],
            TYPE_PREFIX[5],
            TYPE_PREFIX[6],
            req("typeSpecifier", Kind(K::TYPE_SPECIFIER)),
            req("componentDeclaration", Kind(K::COMPONENT_DECLARATION1)),
        ],
    ),
    (
        K::COMPONENT_DECLARATION1,
        &[req("declaration", Kind(K::DECLARATION)), DESCRIPTION, ANNOTATION],
    ),
    (
        K::SHORT_CLASS_DEFINITION,
        &[
            req("classPrefixes", Kind(K::CLASS_PREFIXES)),
            req("shortClassSpecifier", Kind(K::SHORT_CLASS_SPECIFIER)),
        ],
    ),
    // Equations
    (K::EQUATION_SECTION, &[flag("initial", K::INITIAL_KW), EQUATIONS]),
    (K::ALGORITHM_SECTION, &[flag("initial", K::INITIAL_KW), STATEMENTS]),
    (
        K::SIMPLE_EQUATION,
        &[
            req("expression1", Super(Supertype::SimpleExpression)),
            req("expression2", Super(Supertype::Expression)),
            DESCRIPTION,
            ANNOTATION,
        ],
    ),
    (
        K::SPECIAL_EQUATION,
        &[
            req("functionReference", Kind(K::COMPONENT_REFERENCE)),
            opt("functionArguments", Kind(K::FUNCTION_ARGUMENTS)),
            DESCRIPTION,
            ANNOTATION,
        ],
    ),
    (
        K::IF_EQUATION,
        &[
            CONDITION,
            EQUATIONS,
            many("elseIfEquationClause", Kind(K::ELSE_IF_EQUATION_CLAUSE)),
            opt("elseEquationClause", Kind(K::ELSE_EQUATION_CLAUSE)),
            DESCRIPTION,
            ANNOTATION,
        ],
    ),
    (K::ELSE_IF_EQUATION_CLAUSE, &[CONDITION, EQUATIONS]),
    (K::ELSE_EQUATION_CLAUSE, &[EQUATIONS]),
    (
        K::FOR_EQUATION,
        &[
            many("forIndex", Kind(K::FOR_INDEX)),
            EQUATIONS,
            DESCRIPTION,
            ANNOTATION,
        ],
    ),
    (
        K::CONNECT_EQUATION,
        &[
            req("connectClause", Kind(K::CONNECT_CLAUSE)),
            DESCRIPTION,
            ANNOTATION,
        ],
    ),
    (
        K::CONNECT_CLAUSE,
        &[
            req("componentReference1", Kind(K::COMPONENT_REFERENCE)),
            req("componentReference2", Kind(K::COMPONENT_REFERENCE)),
        ],
    ),
    (
        K::WHEN_EQUATION,
        &[
            CONDITION,
            EQUATIONS,
            many("elseWhenClause", Kind(K::ELSE_WHEN_EQUATION_CLAUSE)),
            DESCRIPTION,
            ANNOTATION,
        ],
    ),
    (K::ELSE_WHEN_EQUATION_CLAUSE, &[CONDITION, EQUATIONS]),
    // Statements
    (
        K::SIMPLE_ASSIGNMENT_STATEMENT,
        &[
            req("target", Kind(K::COMPONENT_REFERENCE)),
            req("expression", Super(Supertype::Expression)),
            DESCRIPTION,
            ANNOTATION,
        ],
    ),
    (
        K::FUNCTION_CALL_STATEMENT,
        &[
            req("functionReference", Kind(K::COMPONENT_REFERENCE)),
            opt("functionArguments", Kind(K::FUNCTION_ARGUMENTS)),
            DESCRIPTION,
            ANNOTATION,
        ],
    ),
    (
        K::DESTRUCTURING_ASSIGNMENT_STATEMENT,
        &[
            req("targets", Kind(K::PARENTHESIZED_EXPRESSION)),
            req("functionReference", Kind(K::COMPONENT_REFERENCE)),
            opt("functionArguments", Kind(K::FUNCTION_ARGUMENTS)),
            DESCRIPTION,
            ANNOTATION,
        ],
    ),
    (K::BREAK_STATEMENT, &[DESCRIPTION, ANNOTATION]),
    (K::RETURN_STATEMENT, &[DESCRIPTION, ANNOTATION]),
    (
        K::IF_STATEMENT,
        &[
            CONDITION,
            STATEMENTS,
            many("elseIfStatementClause", Kind(K::ELSE_IF_STATEMENT_CLAUSE)),
            opt("elseStatementClause", Kind(K::ELSE_STATEMENT_CLAUSE)),
            DESCRIPTION,
            ANNOTATION,
        ],
    ),
    (K::ELSE_IF_STATEMENT_CLAUSE, &[CONDITION, STATEMENTS]),
    (K::ELSE_STATEMENT_CLAUSE, &[STATEMENTS]),
    (
        K::FOR_STATEMENT,
        &[
            many("forIndex", Kind(K::FOR_INDEX)),
            STATEMENTS,
            DESCRIPTION,
            ANNOTATION,
        ],
    ),
    (
        K::FOR_INDEX,
        &[
            req("identifier", Kind(K::IDENT)),
            opt("expression", Super(Supertype::Expression)),
        ],
    ),
    (
        K::WHILE_STATEMENT,
        &[CONDITION, STATEMENTS, DESCRIPTION, ANNOTATION],
    ),
    (
        K::WHEN_STATEMENT,
        &[
            CONDITION,
            STATEMENTS,
            many("elseWhenClause", Kind(K::ELSE_WHEN_STATEMENT_CLAUSE)),
            DESCRIPTION,
            ANNOTATION,
        ],
    ),
    (K::ELSE_WHEN_STATEMENT_CLAUSE, &[CONDITION, STATEMENTS]),
    // Expressions
    (
        K::IF_EXPRESSION,
        &[
            CONDITION,
            req("thenExpression", Super(Supertype::Expression)),
            many("elseIfExpressionClause", Kind(K::ELSE_IF_EXPRESSION_CLAUSE)),
            req("elseExpression", Super(Supertype::Expression)),
        ],
    ),
    (
        K::ELSE_IF_EXPRESSION_CLAUSE,
        &[CONDITION, req("thenExpression", Super(Supertype::Expression))],
    ),
    (
        K::RANGE_EXPRESSION,
        &[
            req("startExpression", Super(Supertype::SimpleExpression)),
            opt("stepExpression", Super(Supertype::SimpleExpression)),
            req("stopExpression", Super(Supertype::SimpleExpression)),
        ],
    ),
    (
        K::UNARY_EXPRESSION,
        &[
            req("operator", Kinds(UNARY_OPERATORS)),
            req("operand", Super(Supertype::SimpleExpression)),
        ],
    ),
    (
        K::BINARY_EXPRESSION,
        &[
            req("operand1", Super(Supertype::SimpleExpression)),
            req("operator", Kinds(BINARY_OPERATORS)),
            req("operand2", Super(Supertype::SimpleExpression)),
        ],
    ),
    (K::END_EXPRESSION, &[]),
    (K::UNSIGNED_INTEGER_LITERAL, &[]),
    (K::UNSIGNED_REAL_LITERAL, &[]),
    (K::LOGICAL_LITERAL, &[]),
    (K::STRING_LITERAL, &[]),
    (
        K::TYPE_SPECIFIER,
        &[opt("global", Kind(K::DOT)), req("name", Kind(K::NAME))],
    ),
    (K::NAME, &[many("part", Kind(K::IDENT))]),
    (
        K::COMPONENT_REFERENCE,
        &[
            opt("global", Kind(K::DOT)),
            many("part", Kind(K::COMPONENT_REFERENCE_PART)),
        ],
    ),
    (
        K::COMPONENT_REFERENCE_PART,
        &[
            req("identifier", Kind(K::IDENT)),
            opt("arraySubscripts", Kind(K::ARRAY_SUBSCRIPTS)),
        ],
    ),
    (
        K::FUNCTION_CALL,
        &[
            req(
                "functionReference",
                Kinds(&[K::COMPONENT_REFERENCE, K::DER_KW, K::INITIAL_KW, K::PURE_KW]),
            ),
            opt("functionArguments", Kind(K::FUNCTION_ARGUMENTS)),
        ],
    ),
    (
        K::FUNCTION_ARGUMENTS,
        &[
            opt("comprehensionClause", Kind(K::COMPREHENSION_CLAUSE)),
            many("argument", Kind(K::FUNCTION_ARGUMENT)),
            many("namedArgument", Kind(K::NAMED_ARGUMENT)),
        ],
    ),
    (
        K::ARRAY_CONCATENATION,
        &[many("expressionList", Kind(K::EXPRESSION_LIST))],
    ),
    (
        K::ARRAY_CONSTRUCTOR,
        &[
            opt("comprehensionClause", Kind(K::COMPREHENSION_CLAUSE)),
            opt("expressionList", Kind(K::EXPRESSION_LIST)),
        ],
    ),
    (
        K::COMPREHENSION_CLAUSE,
        &[
            req("expression", Super(Supertype::Expression)),
            many("forIndex", Kind(K::FOR_INDEX)),
        ],
    ),
    (
        K::NAMED_ARGUMENT,
        &[
            req("identifier", Kind(K::IDENT)),
            req("argument", Kind(K::FUNCTION_ARGUMENT)),
        ],
    ),
    (
        K::FUNCTION_ARGUMENT,
        &[
            opt(
                "functionPartialApplication",
                Kind(K::FUNCTION_PARTIAL_APPLICATION),
            ),
            opt("expression", Super(Supertype::Expression)),
        ],
    ),
    (
        K::FUNCTION_PARTIAL_APPLICATION,
        &[
            req("typeSpecifier", Kind(K::TYPE_SPECIFIER)),
            many("namedArgument", Kind(K::NAMED_ARGUMENT)),
        ],
    ),
    (
        K::PARENTHESIZED_EXPRESSION,
        &[many("expression", Super(Supertype::Expression))],
    ),
    (K::EXPRESSION_LIST, &[many("expression", Super(Supertype::Expression))]),
    (K::ARRAY_SUBSCRIPTS, &[many("subscript", Kind(K::SUBSCRIPT))]),
    (
        K::SUBSCRIPT,
        &[
            opt("flexible", Kind(K::COLON)),
            opt("expression", Super(Supertype::Expression)),
        ],
    ),
    (K::DESCRIPTION_STRING, &[many("string", Kind(K::STRING_LITERAL))]),
    (
        K::ANNOTATION_CLAUSE,
        &[req("classModification", Kind(K::CLASS_MODIFICATION))],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_shipped_schema_is_valid() {
        assert!(FieldTable::build(SCHEMA).is_ok());
    }

    #[test]
    #[should_panic(expected = "malformed field table: duplicate field `identifier` on Declaration")]
    fn test_malformed_table_is_fatal() {
        static BAD: &[(SyntaxKind, &[Slot])] = &[(
            K::DECLARATION,
            &[
                req("identifier", Kind(K::IDENT)),
                many("identifier", Kind(K::IDENT)),
            ],
        )];
        load(BAD);
    }

    #[test]
    fn test_every_node_kind_has_an_entry() {
        let table = field_table();
        for kind in SyntaxKind::node_kinds() {
            assert!(table.contains(kind), "no schema for {kind:?}");
        }
        assert_eq!(SCHEMA.len(), SyntaxKind::node_kinds().count());
    }

    #[test]
    fn test_duplicate_slot_is_rejected() {
        static BAD: &[(SyntaxKind, &[Slot])] = &[(
            K::DECLARATION,
            &[
                req("identifier", Kind(K::IDENT)),
                opt("identifier", Kind(K::IDENT)),
            ],
        )];
        assert_eq!(
            FieldTable::build(BAD).unwrap_err(),
            RuleTableError::DuplicateSlot {
                kind: "Declaration",
                slot: "identifier"
            }
        );
    }

    #[test]
    fn test_duplicate_kind_is_rejected() {
        static BAD: &[(SyntaxKind, &[Slot])] = &[(K::NAME, &[]), (K::NAME, &[])];
        assert!(matches!(
            FieldTable::build(BAD),
            Err(RuleTableError::DuplicateKind { kind: "Name" })
        ));
    }

    #[test]
    fn test_token_kind_is_rejected() {
        static BAD: &[(SyntaxKind, &[Slot])] = &[(K::IDENT, &[])];
        assert!(matches!(
            FieldTable::build(BAD),
            Err(RuleTableError::NotANode { .. })
        ));
    }

    fn first_of_kind(text: &str, kind: SyntaxKind) -> SyntaxNode {
        parse(text)
            .syntax()
            .descendants()
            .find(|n| n.kind() == kind)
            .unwrap()
    }

    fn slot_names(node: &SyntaxNode) -> Vec<&'static str> {
        let table = field_table();
        let slots = table.slots(node.kind());
        table
            .resolve(node)
            .into_iter()
            .map(|(idx, _)| slots[idx].name)
            .collect()
    }

    #[test]
    fn test_two_part_range_skips_step() {
        let node = first_of_kind("model M equation x = 1:3; end M;", K::RANGE_EXPRESSION);
        assert_eq!(slot_names(&node), ["startExpression", "stopExpression"]);
    }

    #[test]
    fn test_three_part_range_fills_step() {
        let node = first_of_kind("model M equation x = 1:2:9; end M;", K::RANGE_EXPRESSION);
        assert_eq!(
            slot_names(&node),
            ["startExpression", "stepExpression", "stopExpression"]
        );
    }

    #[test]
    fn test_sections_interleave() {
        let text = "model M Real x; equation x = 1; protected Real y; algorithm y := 2; end M;";
        let node = first_of_kind(text, K::LONG_CLASS_SPECIFIER);
        assert_eq!(
            slot_names(&node),
            [
                "identifier",
                "initialElementList",
                "equationSection",
                "elementList",
                "algorithmSection",
                "endIdentifier"
            ]
        );
    }

    #[test]
    fn test_separator_dot_is_not_global() {
        let node = first_of_kind("model M equation a.b = 1; end M;", K::COMPONENT_REFERENCE);
        assert_eq!(slot_names(&node), ["part", "part"]);
        let node = first_of_kind("model M equation .a.b = 1; end M;", K::COMPONENT_REFERENCE);
        assert_eq!(slot_names(&node), ["global", "part", "part"]);
    }
}
