//! Decoded instruction forms.

/// One decoded 16-bit instruction.
///
/// Register operand fields are indices into the register file; immediate
/// fields are already sign-extended where the encoding calls for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `add dst, src_a, src_b` — wrapping addition.
    Add { dst: usize, src_a: usize, src_b: usize },
    /// `sub dst, src_a, src_b` — wrapping subtraction.
    Sub { dst: usize, src_a: usize, src_b: usize },
    /// `or dst, src_a, src_b` — bitwise or.
    Or { dst: usize, src_a: usize, src_b: usize },
    /// `and dst, src_a, src_b` — bitwise and.
    And { dst: usize, src_a: usize, src_b: usize },
    /// `slt dst, src_a, src_b` — unsigned set-less-than.
    Slt { dst: usize, src_a: usize, src_b: usize },
    /// `jr src` — jump to the address held in `src`.
    Jr { src: usize },
    /// `addi dst, src, imm` — wrapping add of a sign-extended immediate.
    Addi { dst: usize, src: usize, imm: u16 },
    /// `j target` — unconditional jump to a 13-bit absolute target.
    J { target: u16 },
    /// `jal target` — jump and link through register 7.
    Jal { target: u16 },
    /// `lw dst, offset(base)` — load from `base + offset`.
    Lw { dst: usize, base: usize, offset: u16 },
    /// `sw src, offset(base)` — store to `base + offset`.
    Sw { src: usize, base: usize, offset: u16 },
    /// `jeq src_a, src_b, offset` — relative branch when equal.
    Jeq { src_a: usize, src_b: usize, offset: u16 },
    /// `slti dst, src, imm` — unsigned set-less-than against an immediate.
    Slti { dst: usize, src: usize, imm: u16 },
    /// Register-form encoding with an unassigned function code.
    ///
    /// Executing one changes no machine state and does not advance the
    /// program counter.
    Reserved { funct: u16 },
}
