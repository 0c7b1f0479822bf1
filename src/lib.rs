//! `pera`: a small interpreter for a parenthesized, prefix-notation
//! expression language. Compiles source to bytecode (`compiler.rs`) and
//! runs it on a stack machine (`vm.rs`); `main.rs` is a thin CLI shell
//! around [`run_source`].

pub mod chunk;
pub mod common;
pub mod compiler;
pub mod disassembler;
pub mod error;
pub mod heap;
pub mod scanner;
pub mod strings;
pub mod value;
pub mod vm;

use std::collections::HashMap;

pub use error::{PeraError, Result};
pub use value::Value;

use heap::Heap;
use strings::StringTable;
use value::{GlobalKey, ObjectRef};

/// Everything a run of the interpreter needs to keep alive across however
/// many top-level compilations it performs: the object registry, the
/// intern table, and the global-variable bindings. A REPL keeps one
/// `Runtime` alive across lines so `_`-prefixed globals and interned
/// strings persist between them; a one-shot file run builds one and
/// discards it at exit.
#[derive(Default)]
pub struct Runtime {
    pub heap: Heap,
    pub strings: StringTable,
    pub globals: HashMap<GlobalKey, Value>,
}

impl Runtime {
    pub fn new() -> Self {
        Runtime {
            heap: Heap::new(),
            strings: StringTable::new(),
            globals: HashMap::new(),
        }
    }

    pub fn intern(&mut self, bytes: &[u8]) -> ObjectRef {
        self.strings.intern(&mut self.heap, bytes)
    }
}

/// Compiles and runs one unit of source against `runtime`, printing
/// whatever `(print ...)` forms emit to stdout.
pub fn run_source(source: &str, runtime: &mut Runtime) -> Result<()> {
    let function = compiler::compile(source, runtime)?;
    vm::Vm::new(runtime).run(function)
}
