use std::collections::BTreeMap;
use std::sync::LazyLock;

use bson::{Bson, Document, doc};
use core_types::LearnerProfile;

use crate::error::DbError;

/// The scalar class a profile field can hold. Partial updates may only
/// replace a scalar with a value of the same class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LeafKind {
    Integer,
    Text,
}

/// Every dotted path that a partial update is allowed to target, derived
/// from the document shape itself: a zero-valued profile is flattened into
/// its scalar leaves once, so the whitelist can never drift from the structs
/// in `core-types`.
///
/// `_id` never appears here (the identifier is immutable), and neither do
/// array-valued fields (`courses` and the sequences below it) — sequences
/// are rewritten through full read-modify-write, not addressed by path.
static SCHEMA_LEAVES: LazyLock<BTreeMap<String, LeafKind>> = LazyLock::new(|| {
    let template = bson::to_document(&LearnerProfile::default())
        .expect("a zero-valued profile always maps to a document");
    let mut leaves = BTreeMap::new();
    collect_leaves("", &template, &mut leaves);
    leaves
});

fn collect_leaves(prefix: &str, document: &Document, leaves: &mut BTreeMap<String, LeafKind>) {
    for (key, value) in document {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Bson::Document(nested) => collect_leaves(&path, nested, leaves),
            scalar => {
                if let Some(kind) = kind_of(scalar) {
                    leaves.insert(path, kind);
                }
            }
        }
    }
}

fn kind_of(value: &Bson) -> Option<LeafKind> {
    match value {
        Bson::Int32(_) | Bson::Int64(_) => Some(LeafKind::Integer),
        Bson::String(_) => Some(LeafKind::Text),
        _ => None,
    }
}

/// A partial update of a learner profile: a closed mapping of dotted field
/// paths to replacement scalars.
///
/// Only the named paths are overwritten when the update is applied; sibling
/// fields and the `courses` sequence stay untouched, so a caller can bump a
/// single counter without re-sending the whole nested document. Paths are
/// checked against the profile schema when the update is applied — an
/// unknown path or a wrong-class value rejects the whole update and leaves
/// the stored document unchanged.
///
/// ```
/// use database::ProfileUpdate;
///
/// let update = ProfileUpdate::new()
///     .set("metrics.engagement", 12)
///     .set("metrics.coding.switches", 3)
///     .set("learning_style", "coding");
/// assert!(!update.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    fields: BTreeMap<String, Bson>,
}

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages `path` (e.g. `metrics.engagement`) to be overwritten with
    /// `value`.
    pub fn set(mut self, path: impl Into<String>, value: impl Into<Bson>) -> Self {
        self.fields.insert(path.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Checks every staged path against the profile schema.
    pub(crate) fn validate(&self) -> Result<(), DbError> {
        if self.fields.is_empty() {
            return Err(DbError::Validation(
                "the update names no fields".to_string(),
            ));
        }
        for (path, value) in &self.fields {
            let Some(expected) = SCHEMA_LEAVES.get(path.as_str()) else {
                return Err(DbError::Validation(format!(
                    "`{path}` is not a field of the profile schema"
                )));
            };
            if kind_of(value) != Some(*expected) {
                return Err(DbError::Validation(format!(
                    "the value for `{path}` does not match the field's type"
                )));
            }
        }
        Ok(())
    }

    /// Renders the staged fields as the partial-update document understood
    /// by the store.
    pub(crate) fn to_set_document(&self) -> Document {
        let mut set = Document::new();
        for (path, value) in &self.fields {
            set.insert(path.clone(), value.clone());
        }
        doc! { "$set": set }
    }
}
