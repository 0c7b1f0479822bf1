//! A pretty-printer for a compiled [`Chunk`], used only for `log::trace!`
//! output (gated behind `-v`/`RUST_LOG=trace`, see `main.rs`). Carries no
//! semantic weight — deleting this module would not change what any
//! program computes, only what a `-v` run prints while it runs.

use crate::chunk::{Chunk, Opcode};

/// Disassembles every instruction in `chunk`, one per line, prefixed with
/// `name`.
pub fn disassemble_chunk(chunk: &Chunk, name: &str) -> String {
    let mut out = format!("== {name} ==\n");
    let mut offset = 0;
    while offset < chunk.len() {
        let line = disassemble_instruction(chunk, offset);
        offset = next_offset(chunk, offset);
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Disassembles the single instruction at `offset`, returning one
/// formatted line (without a trailing newline).
pub fn disassemble_instruction(chunk: &Chunk, offset: usize) -> String {
    let op = match Opcode::try_from(chunk.code[offset]) {
        Ok(op) => op,
        Err(byte) => return format!("{offset:04} unknown opcode {byte}"),
    };
    let line = chunk.lines.get(offset).copied().unwrap_or(0);
    match op {
        Opcode::Constant | Opcode::SetGlobal | Opcode::GetGlobal | Opcode::Closure => {
            let idx = chunk.code[offset + 1];
            format!(
                "{offset:04} {line:>4} {:<14} {idx:3} '{}'",
                op.name(),
                chunk.constants[idx as usize]
            )
        }
        Opcode::SetLocal | Opcode::GetLocal | Opcode::Call | Opcode::EndScope => {
            let operand = chunk.code[offset + 1];
            format!("{offset:04} {line:>4} {:<14} {operand:3}", op.name())
        }
        Opcode::Jump | Opcode::JumpIfFalse | Opcode::Loop => {
            let jump = chunk.read_u16(offset + 1);
            format!("{offset:04} {line:>4} {:<14} {jump:5}", op.name())
        }
        _ => format!("{offset:04} {line:>4} {}", op.name()),
    }
}

fn next_offset(chunk: &Chunk, offset: usize) -> usize {
    match Opcode::try_from(chunk.code[offset]) {
        Ok(
            Opcode::Constant
            | Opcode::SetGlobal
            | Opcode::GetGlobal
            | Opcode::SetLocal
            | Opcode::GetLocal
            | Opcode::Closure
            | Opcode::Call
            | Opcode::EndScope,
        ) => offset + 2,
        Ok(Opcode::Jump | Opcode::JumpIfFalse | Opcode::Loop) => offset + 3,
        _ => offset + 1,
    }
}
