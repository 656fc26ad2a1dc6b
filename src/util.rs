#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

/// Checks `index` against `len` the way every positional accessor does.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> crate::Result<()> {
    if index >= len {
        cold_path();
        return Err(crate::Error::IndexOutOfRange { index, len });
    }
    Ok(())
}
