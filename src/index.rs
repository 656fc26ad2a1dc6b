mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

/// A resolved lookup key: a position into a sequence or a field name of a struct.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key<'a> {
    Position(usize),
    Name(&'a str),
}

/// Types that can address a child of a container value.
///
/// `usize` addresses sequence elements, `str`/`String` address struct fields.
/// The trait is sealed; it only exists so that one `get` method can take either.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn key(&self) -> Key<'_>;
}

impl Index for usize {
    #[inline]
    fn key(&self) -> Key<'_> {
        Key::Position(*self)
    }
}

impl Index for str {
    #[inline]
    fn key(&self) -> Key<'_> {
        Key::Name(self)
    }
}

impl Index for String {
    #[inline]
    fn key(&self) -> Key<'_> {
        Key::Name(self.as_str())
    }
}

impl<T: ?Sized + Index> Index for &T {
    #[inline]
    fn key(&self) -> Key<'_> {
        (**self).key()
    }
}
