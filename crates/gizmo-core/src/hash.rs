//! 32-bit FNV-1a hashing for gizmo identities

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Hash a byte string with 32-bit FNV-1a.
///
/// No collision detection is performed anywhere this is used; two inputs
/// with the same hash are indistinguishable to the caller.
pub fn fnv1a(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_offset_basis() {
        assert_eq!(fnv1a(b""), FNV_OFFSET_BASIS);
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(fnv1a(b"a"), 0xe40c_292c);
        assert_eq!(fnv1a(b"foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_distinct_names_differ() {
        assert_ne!(fnv1a(b"first-example-gizmo"), fnv1a(b"second-example-gizmo"));
    }
}
