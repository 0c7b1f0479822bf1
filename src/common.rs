//! Crate-wide limit constants.
//!
//! Several of these are forced by the bytecode encoding itself, not chosen
//! for taste: whenever an opcode's operand is a single byte, whatever it
//! indexes into is capped at 256 entries.

/// The maximum number of distinct constants a single chunk can hold. Forced
/// by `CONSTANT`'s single-byte operand.
pub const MAX_CONSTANTS: usize = 256;

/// The maximum number of local variables in scope at one time within a
/// single function. Forced by `GET_LOCAL`/`SET_LOCAL`'s single-byte operand.
pub const MAX_LOCALS: usize = 256;

/// The maximum number of parameters a function definition may declare.
/// Forced by `CALL`'s single-byte argument-count operand.
pub const MAX_PARAMETERS: usize = 256;

/// The maximum number of active call frames. Exceeding this at runtime is
/// a stack-overflow error.
pub const FRAMES_MAX: usize = 64;

/// The maximum size of the value stack: `FRAMES_MAX` frames, each with at
/// most `MAX_LOCALS` slots live at once.
pub const STACK_MAX: usize = FRAMES_MAX * MAX_LOCALS;

/// The maximum forward/backward displacement a `JUMP`, `JUMP_IF_FALSE`, or
/// `LOOP` instruction can encode in its 16-bit operand.
pub const MAX_JUMP: usize = u16::MAX as usize;
