use ib_bridge::ByteBuffer;

#[test]
fn empty_buffer_is_null_with_zero_length() {
    let buffer = ByteBuffer::empty();
    assert!(buffer.is_null());
    assert_eq!(buffer.raw_len(), 0);
    assert_eq!(buffer.len(), 0);
    assert!(buffer.as_ptr().is_null());
}

#[test]
fn empty_vec_becomes_the_null_sentinel() {
    let buffer = ByteBuffer::from_vec(Vec::new());
    assert!(buffer.is_null());
    assert_eq!(buffer.raw_len(), 0);
}

#[test]
fn non_empty_buffer_exposes_exactly_its_bytes() {
    let buffer = ByteBuffer::from_vec(b"verse".to_vec());
    assert!(!buffer.is_null());
    assert_eq!(buffer.raw_len(), 5);
    assert_eq!(buffer.len(), 5);
    unsafe {
        assert_eq!(buffer.as_slice(), b"verse");
        buffer.destroy();
    }
}

#[test]
fn into_vec_returns_ownership() {
    let buffer = ByteBuffer::from_vec(vec![1, 2, 3]);
    let bytes = unsafe { buffer.into_vec() };
    assert_eq!(bytes, vec![1, 2, 3]);
}

#[test]
fn destroying_a_null_buffer_is_a_noop() {
    unsafe {
        ByteBuffer::empty().destroy();
        assert!(ByteBuffer::empty().into_vec().is_empty());
        assert!(ByteBuffer::empty().as_slice().is_empty());
    }
}

#[test]
fn layout_matches_the_c_struct() {
    assert_eq!(
        std::mem::size_of::<ByteBuffer>(),
        std::mem::size_of::<i64>() + std::mem::size_of::<*mut u8>()
    );
    assert_eq!(std::mem::align_of::<ByteBuffer>(), std::mem::align_of::<i64>());
}
