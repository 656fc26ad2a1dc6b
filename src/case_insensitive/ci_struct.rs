use std::{fmt, iter::FusedIterator};

use crate::{
    CiValue, CiValueMut, DuplicatePolicy, OwnStruct, OwnValue, StructIter, StructIterMut,
    case_insensitive::{
        name_index::{NameIndex, Positions},
        wrap_mut_with_policy, wrap_with_policy,
    },
};

/// A decorated view over a borrowed struct.
///
/// Field lookup folds ASCII case on both sides and goes through a name index
/// that is built on first use and rebuilt whenever the struct's field names may
/// have changed. Enumeration is untouched: names come back exactly as stored,
/// in insertion order.
///
/// When several fields differ only by case, the view's [`DuplicatePolicy`]
/// picks one for [`get`](Self::get); [`get_all`](Self::get_all) returns all of
/// them.
#[derive(Clone)]
pub struct CiStruct<'a> {
    raw: &'a OwnStruct,
    index: NameIndex,
}

impl<'a> CiStruct<'a> {
    #[inline]
    pub fn new(raw: &'a OwnStruct) -> Self {
        Self {
            raw,
            index: NameIndex::new(DuplicatePolicy::default()),
        }
    }

    #[inline]
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.index.set_policy(policy);
        self
    }

    #[inline]
    pub fn policy(&self) -> DuplicatePolicy {
        self.index.policy()
    }

    /// The underlying struct.
    #[inline]
    pub fn raw(&self) -> &'a OwnStruct {
        self.raw
    }

    /// Number of fields, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether the next lookup would be served without rebuilding the index.
    #[inline]
    pub fn is_index_fresh(&self) -> bool {
        self.index.is_fresh_for(self.raw)
    }

    /// Returns the field `name` resolves to, wrapped, or `None` if no field
    /// matches ignoring case.
    pub fn get(&self, name: &str) -> Option<CiValue<'a>> {
        let position = self.index.lookup(self.raw, name)?;
        let (_, value) = self.raw.field_at(position)?;
        Some(wrap_with_policy(value, self.policy()))
    }

    /// Every field matching `name` ignoring case, in insertion order.
    pub fn get_all(&self, name: &str) -> CiMatches<'a> {
        CiMatches {
            raw: self.raw,
            positions: self.index.lookup_all(self.raw, name).into_iter(),
            policy: self.policy(),
        }
    }

    #[inline]
    pub fn contains_field(&self, name: &str) -> bool {
        self.index.lookup(self.raw, name).is_some()
    }

    /// The stored, original-case name of the field [`get`](Self::get) would
    /// return.
    ///
    /// # Example
    ///
    /// ```
    /// use ion_ci::{CiStruct, OwnStruct};
    ///
    /// let row: OwnStruct = [("UserId", 3)].into_iter().collect();
    /// assert_eq!(CiStruct::new(&row).resolve("userid"), Some("UserId"));
    /// ```
    pub fn resolve(&self, name: &str) -> Option<&'a str> {
        let position = self.index.lookup(self.raw, name)?;
        self.raw.field_at(position).map(|(field, _)| field)
    }

    /// Field names as stored.
    #[inline]
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'a str> + Clone + use<'a> {
        self.raw.field_names()
    }

    /// Iterates `(name, value)` pairs in insertion order, wrapping each value
    /// as it is reached.
    #[inline]
    pub fn iter(&self) -> CiStructIter<'a> {
        CiStructIter {
            inner: self.raw.iter(),
            policy: self.policy(),
        }
    }
}

impl fmt::Debug for CiStruct<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for CiStruct<'a> {
    type Item = (&'a str, CiValue<'a>);
    type IntoIter = CiStructIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &CiStruct<'a> {
    type Item = (&'a str, CiValue<'a>);
    type IntoIter = CiStructIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Default)]
pub struct CiStructIter<'a> {
    inner: StructIter<'a>,
    policy: DuplicatePolicy,
}

impl<'a> Iterator for CiStructIter<'a> {
    type Item = (&'a str, CiValue<'a>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let policy = self.policy;
        self.inner
            .next()
            .map(|(name, value)| (name, wrap_with_policy(value, policy)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for CiStructIter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let policy = self.policy;
        self.inner
            .next_back()
            .map(|(name, value)| (name, wrap_with_policy(value, policy)))
    }
}

impl ExactSizeIterator for CiStructIter<'_> {}

impl FusedIterator for CiStructIter<'_> {}

/// Iterator over the fields that match one name ignoring case.
pub struct CiMatches<'a> {
    raw: &'a OwnStruct,
    positions: smallvec::IntoIter<[usize; 1]>,
    policy: DuplicatePolicy,
}

impl<'a> Iterator for CiMatches<'a> {
    type Item = CiValue<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.positions.next()?;
        let (_, value) = self.raw.field_at(position)?;
        Some(wrap_with_policy(value, self.policy))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl ExactSizeIterator for CiMatches<'_> {}

impl FusedIterator for CiMatches<'_> {}

/// A decorated view over an exclusively borrowed struct.
///
/// Lookups behave like [`CiStruct`]. Mutations take the name they are given
/// verbatim: `put("Foo", ..)` replaces only fields spelled `Foo`. To change the
/// field a case-insensitive lookup would find, [`resolve`](Self::resolve) the
/// name first.
///
/// # Example
///
/// ```
/// use ion_ci::{CiStructMut, OwnStruct};
///
/// let mut row: OwnStruct = [("Name", "a")].into_iter().collect();
/// let mut view = CiStructMut::new(&mut row);
///
/// let name = view.resolve("NAME").map(str::to_owned).unwrap();
/// view.put(name, "b");
///
/// assert_eq!(row.get("Name").and_then(|value| value.as_text()), Some("b"));
/// ```
pub struct CiStructMut<'a> {
    raw: &'a mut OwnStruct,
    index: NameIndex,
}

impl<'a> CiStructMut<'a> {
    #[inline]
    pub fn new(raw: &'a mut OwnStruct) -> Self {
        Self {
            raw,
            index: NameIndex::new(DuplicatePolicy::default()),
        }
    }

    #[inline]
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.index.set_policy(policy);
        self
    }

    #[inline]
    pub fn policy(&self) -> DuplicatePolicy {
        self.index.policy()
    }

    #[inline]
    pub fn raw(&self) -> &OwnStruct {
        self.raw
    }

    /// The underlying struct, for direct mutation. Any change made through it,
    /// including replacing the struct outright, is seen by the next lookup.
    #[inline]
    pub fn raw_mut(&mut self) -> &mut OwnStruct {
        self.index.invalidate();
        self.raw
    }

    #[inline]
    pub fn into_raw(self) -> &'a mut OwnStruct {
        self.raw
    }

    /// A shared view of the same struct. It starts with its own, empty index.
    #[inline]
    pub fn as_view(&self) -> CiStruct<'_> {
        CiStruct::new(self.raw).with_policy(self.policy())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[inline]
    pub fn is_index_fresh(&self) -> bool {
        self.index.is_fresh_for(self.raw)
    }

    pub fn get(&self, name: &str) -> Option<CiValue<'_>> {
        let position = self.index.lookup(self.raw, name)?;
        let (_, value) = self.raw.field_at(position)?;
        Some(wrap_with_policy(value, self.policy()))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<CiValueMut<'_>> {
        let position = self.index.lookup(self.raw, name)?;
        let policy = self.policy();
        let (_, value) = self.raw.field_at_mut(position)?;
        Some(wrap_mut_with_policy(value, policy))
    }

    pub fn get_all(&self, name: &str) -> CiMatches<'_> {
        let positions: Positions = self.index.lookup_all(self.raw, name);
        CiMatches {
            raw: self.raw,
            positions: positions.into_iter(),
            policy: self.policy(),
        }
    }

    #[inline]
    pub fn contains_field(&self, name: &str) -> bool {
        self.index.lookup(self.raw, name).is_some()
    }

    pub fn resolve(&self, name: &str) -> Option<&str> {
        let position = self.index.lookup(self.raw, name)?;
        self.raw.field_at(position).map(|(field, _)| field)
    }

    #[inline]
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &str> + Clone + '_ {
        self.raw.field_names()
    }

    #[inline]
    pub fn iter(&self) -> CiStructIter<'_> {
        CiStructIter {
            inner: self.raw.iter(),
            policy: self.policy(),
        }
    }

    #[inline]
    pub fn iter_mut(&mut self) -> CiStructIterMut<'_> {
        let policy = self.policy();
        CiStructIterMut {
            inner: self.raw.iter_mut(),
            policy,
        }
    }

    /// Appends a field under exactly `name`, keeping any existing ones.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<OwnValue>) {
        self.index.invalidate();
        self.raw.add(name, value);
    }

    /// Replaces every field named exactly `name`, returning the first old value.
    pub fn put(&mut self, name: impl Into<String>, value: impl Into<OwnValue>) -> Option<OwnValue> {
        self.index.invalidate();
        self.raw.put(name, value)
    }

    /// Removes every field named exactly `name`, returning the first old value.
    pub fn remove(&mut self, name: &str) -> Option<OwnValue> {
        self.index.invalidate();
        self.raw.remove(name)
    }

    pub fn clear(&mut self) {
        self.index.invalidate();
        self.raw.clear();
    }
}

impl fmt::Debug for CiStructMut<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

pub struct CiStructIterMut<'a> {
    inner: StructIterMut<'a>,
    policy: DuplicatePolicy,
}

impl<'a> Iterator for CiStructIterMut<'a> {
    type Item = (&'a str, CiValueMut<'a>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let policy = self.policy;
        self.inner
            .next()
            .map(|(name, value)| (name, wrap_mut_with_policy(value, policy)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for CiStructIterMut<'_> {}

impl FusedIterator for CiStructIterMut<'_> {}
