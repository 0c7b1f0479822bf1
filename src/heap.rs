//! The heap registry: every object ever allocated, kept alive until
//! process-wide teardown.
//!
//! A C interpreter would thread an intrusive `next` pointer through each
//! object so the whole list can be walked and freed in one pass. Rust
//! gives us a cheaper way to express "freed in bulk, no reachability
//! analysis": a plain owning `Vec<Rc<Object>>`. Dropping the registry drops
//! every object whose last other reference has also gone away; until then,
//! the registry's own strong count keeps it alive regardless of what the
//! value stack or globals table still reference.

use std::rc::Rc;

use crate::value::Object;

/// Owns every heap object allocated during a run. There is no reachability
/// tracing: objects live until the registry itself is dropped.
#[derive(Default)]
pub struct Heap {
    objects: Vec<Rc<Object>>,
}

impl Heap {
    pub fn new() -> Self {
        Heap { objects: Vec::new() }
    }

    /// Registers a freshly-allocated object and returns a handle to it.
    pub fn alloc(&mut self, object: Object) -> Rc<Object> {
        let handle = Rc::new(object);
        self.objects.push(Rc::clone(&handle));
        handle
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
