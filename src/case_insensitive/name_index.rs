use std::{borrow::Cow, cell::RefCell};

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::OwnStruct;

/// Positions of every field whose name folds to the same key, in insertion order.
pub(crate) type Positions = SmallVec<[usize; 1]>;

/// Which field wins when several names differ only by case.
///
/// # Example
///
/// ```
/// use ion_ci::{DuplicatePolicy, OwnStruct, OwnValue, wrap_with_policy};
///
/// let fields: OwnStruct = [("a", 1), ("A", 2)].into_iter().collect();
/// let value = OwnValue::from(fields);
///
/// let first = wrap_with_policy(&value, DuplicatePolicy::FirstWins);
/// let exact = wrap_with_policy(&value, DuplicatePolicy::PreferExact);
///
/// assert_eq!(first.get("A").unwrap().unwrap().as_int(), Some(1));
/// assert_eq!(exact.get("A").unwrap().unwrap().as_int(), Some(2));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum DuplicatePolicy {
    /// The first case-insensitive match in insertion order, even if a later
    /// field matches the query exactly.
    #[default]
    FirstWins,
    /// A field spelled exactly like the query, falling back to the first
    /// case-insensitive match.
    PreferExact,
}

/// Folds `name` for comparison: ASCII letters are lower-cased, everything else
/// is compared as is. Borrows when there is nothing to fold.
///
/// # Example
///
/// ```
/// use ion_ci::fold_case;
///
/// assert_eq!(fold_case("UserId"), "userid");
/// assert_eq!(fold_case("ÄBC"), "Äbc");
/// ```
pub fn fold_case(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|byte| byte.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

struct BuiltIndex {
    generation: u64,
    positions: AHashMap<Box<str>, Positions>,
}

impl BuiltIndex {
    fn build(fields: &OwnStruct) -> Self {
        let mut positions = AHashMap::<Box<str>, Positions>::with_capacity(fields.len());
        for (position, name) in fields.field_names().enumerate() {
            match positions.get_mut(&*fold_case(name)) {
                Some(existing) => existing.push(position),
                None => {
                    positions.insert(fold_case(name).into(), smallvec::smallvec![position]);
                }
            }
        }
        tracing::trace!(
            fields = fields.len(),
            keys = positions.len(),
            generation = fields.generation(),
            "built case-insensitive name index"
        );
        Self {
            generation: fields.generation(),
            positions,
        }
    }
}

/// Lazily built map from folded field name to field positions.
///
/// The index is derived data only. It remembers the generation of the struct
/// it was built from and is rebuilt on the next lookup once that generation
/// moves on, so it is never trusted for a struct whose names may have changed.
pub(crate) struct NameIndex {
    built: RefCell<Option<BuiltIndex>>,
    policy: DuplicatePolicy,
}

impl NameIndex {
    #[inline]
    pub(crate) const fn new(policy: DuplicatePolicy) -> Self {
        Self {
            built: RefCell::new(None),
            policy,
        }
    }

    #[inline]
    pub(crate) fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    #[inline]
    pub(crate) fn set_policy(&mut self, policy: DuplicatePolicy) {
        self.policy = policy;
    }

    #[inline]
    pub(crate) fn invalidate(&mut self) {
        *self.built.get_mut() = None;
    }

    /// Whether a lookup against `fields` would be served without a rebuild.
    pub(crate) fn is_fresh_for(&self, fields: &OwnStruct) -> bool {
        self.built
            .borrow()
            .as_ref()
            .is_some_and(|index| index.generation == fields.generation())
    }

    fn with_positions<R>(
        &self,
        fields: &OwnStruct,
        name: &str,
        f: impl FnOnce(&[usize]) -> R,
    ) -> R {
        let mut built = self.built.borrow_mut();
        if built
            .as_ref()
            .is_some_and(|index| index.generation != fields.generation())
        {
            *built = None;
        }
        let index = built.get_or_insert_with(|| BuiltIndex::build(fields));
        let positions: &[usize] = match index.positions.get(&*fold_case(name)) {
            Some(positions) => positions.as_slice(),
            None => &[],
        };
        f(positions)
    }

    /// The position of the field `name` resolves to under the policy.
    pub(crate) fn lookup(&self, fields: &OwnStruct, name: &str) -> Option<usize> {
        let policy = self.policy;
        self.with_positions(fields, name, |positions| match policy {
            DuplicatePolicy::FirstWins => positions.first().copied(),
            DuplicatePolicy::PreferExact => positions
                .iter()
                .copied()
                .find(|&position| {
                    fields
                        .field_at(position)
                        .is_some_and(|(field, _)| field == name)
                })
                .or_else(|| positions.first().copied()),
        })
    }

    /// Every position whose name matches `name` case-insensitively.
    pub(crate) fn lookup_all(&self, fields: &OwnStruct, name: &str) -> Positions {
        self.with_positions(fields, name, Positions::from_slice)
    }
}

impl Clone for NameIndex {
    /// Clones start with an empty index; nothing is shared between views.
    fn clone(&self) -> Self {
        Self::new(self.policy)
    }
}
