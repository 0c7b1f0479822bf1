//! String interning: every source-visible string is stored exactly once, so
//! content equality coincides with handle identity.
//!
//! The reference C interpreter (`examples/original_source`) uses an
//! open-addressed hash table with linear probing and tombstones. That
//! scheme is an implementation detail of that original — the externally
//! observable contract is just "equal bytes share one handle, lookup
//! happens before insert". A `std::collections::HashMap` gives the same
//! contract without hand-rolled probing, which is the idiomatic Rust
//! choice the rest of the pack makes whenever a hash table is needed for
//! anything other than the FFI boundary of a VM's tagged stack.

use std::collections::HashMap;
use std::rc::Rc;

use crate::heap::Heap;
use crate::value::{Object, ObjectRef, StringObj};

/// FNV-1a, 32-bit.
pub fn fnv1a_hash(bytes: &[u8]) -> u32 {
    const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
    const FNV_PRIME: u32 = 0x0100_0193;
    let mut hash = FNV_OFFSET_BASIS;
    for &b in bytes {
        hash ^= b as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// The canonical-string table. Keyed by raw bytes rather than by `(hash,
/// length)` buckets; the hash is still computed and stored on the
/// [`StringObj`] itself, matching its object layout, but is not load-
/// bearing for lookup correctness here.
#[derive(Default)]
pub struct StringTable {
    interned: HashMap<Vec<u8>, ObjectRef>,
}

impl StringTable {
    pub fn new() -> Self {
        StringTable {
            interned: HashMap::new(),
        }
    }

    /// Looks up `bytes`; if a String with identical content has already
    /// been interned, returns the existing handle. Otherwise allocates a
    /// new String object on `heap`, registers it, and returns the new
    /// handle.
    pub fn intern(&mut self, heap: &mut Heap, bytes: &[u8]) -> ObjectRef {
        if let Some(existing) = self.interned.get(bytes) {
            return Rc::clone(existing);
        }
        let hash = fnv1a_hash(bytes);
        let handle = heap.alloc(Object::Str(StringObj {
            hash,
            chars: bytes.to_vec(),
        }));
        self.interned.insert(bytes.to_vec(), Rc::clone(&handle));
        handle
    }

    pub fn len(&self) -> usize {
        self.interned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interned.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_the_same_bytes_twice_returns_the_same_handle() {
        let mut heap = Heap::new();
        let mut table = StringTable::new();
        let a = table.intern(&mut heap, b"foo");
        let b = table.intern(&mut heap, b"foo");
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn distinct_content_gets_distinct_handles() {
        let mut heap = Heap::new();
        let mut table = StringTable::new();
        let a = table.intern(&mut heap, b"foo");
        let b = table.intern(&mut heap, b"bar");
        assert!(!Rc::ptr_eq(&a, &b));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn fnv1a_is_deterministic() {
        assert_eq!(fnv1a_hash(b"foo"), fnv1a_hash(b"foo"));
        assert_ne!(fnv1a_hash(b"foo"), fnv1a_hash(b"bar"));
    }
}
