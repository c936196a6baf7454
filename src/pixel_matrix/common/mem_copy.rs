/// Copies `length` bytes from `src` to `dest`.
///
/// # Safety
///
/// `src` must be valid for reads and `dest` valid for writes of `length`
/// bytes. The ranges may overlap.
#[inline]
pub(crate) unsafe fn mem_copy(dest: *mut u8, src: *const u8, length: usize) {
    if length == 0 || std::ptr::eq(dest, src) {
        return;
    }
    // SAFETY: upheld by the caller.
    unsafe { std::ptr::copy(src, dest, length) };
}

#[cfg(test)]
mod tests {
    use super::mem_copy;

    #[test]
    fn copies_exact_byte_range() {
        // lengths around the 8/4/1 byte steps
        for length in [0usize, 1, 3, 4, 7, 8, 9, 13, 16, 31] {
            let src: Vec<u8> = (0..32u8).collect();
            let mut dest = vec![0xAAu8; 32];
            unsafe { mem_copy(dest.as_mut_ptr(), src.as_ptr(), length) };
            assert_eq!(&dest[..length], &src[..length]);
            assert!(dest[length..].iter().all(|&b| b == 0xAA));
        }
    }

    #[test]
    fn overlapping_ranges_are_copied_like_memmove() {
        let mut data: Vec<u8> = (0..10u8).collect();
        let base = data.as_mut_ptr();
        unsafe { mem_copy(base.add(2), base, 6) };
        assert_eq!(data, vec![0, 1, 0, 1, 2, 3, 4, 5, 8, 9]);
    }
}
