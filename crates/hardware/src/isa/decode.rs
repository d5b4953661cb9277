//! Instruction decoding.
//!
//! Splits a 16-bit instruction word into its fields and maps it to a
//! decoded [`Instruction`]. The encoding packs, from the top bit down:
//! a 3-bit opcode, then either three 3-bit register fields and a 4-bit
//! function code (register form), two register fields and a 7-bit
//! immediate (immediate form), or a 13-bit absolute target (jump form).

use crate::common::constants::{
    FUNCT_MASK, IMM7_MASK, IMM7_SIGN_BIT, IMM13_MASK, OPCODE_SHIFT, REG_A_SHIFT, REG_B_SHIFT,
    REG_DST_SHIFT, REG_MASK,
};
use crate::isa::Instruction;

/// Sign-extends a 7-bit immediate to 16 bits.
pub fn sign_extend_imm7(imm: u16) -> u16 {
    if imm & IMM7_SIGN_BIT != 0 {
        imm | !IMM7_MASK
    } else {
        imm
    }
}

/// Raw field views over one instruction word.
struct Fields(u16);

impl Fields {
    fn opcode(&self) -> u16 {
        self.0 >> OPCODE_SHIFT
    }

    fn reg_a(&self) -> usize {
        usize::from((self.0 >> REG_A_SHIFT) & REG_MASK)
    }

    fn reg_b(&self) -> usize {
        usize::from((self.0 >> REG_B_SHIFT) & REG_MASK)
    }

    fn reg_dst(&self) -> usize {
        usize::from((self.0 >> REG_DST_SHIFT) & REG_MASK)
    }

    fn funct(&self) -> u16 {
        self.0 & FUNCT_MASK
    }

    fn imm7(&self) -> u16 {
        sign_extend_imm7(self.0 & IMM7_MASK)
    }

    fn imm13(&self) -> u16 {
        self.0 & IMM13_MASK
    }
}

/// Decodes one instruction word.
///
/// Every word decodes to something: register-form words with an unassigned
/// function code decode to [`Instruction::Reserved`] rather than an error,
/// matching the machine's do-nothing behavior for them.
pub fn decode(word: u16) -> Instruction {
    let f = Fields(word);
    match f.opcode() {
        0b000 => {
            let (dst, src_a, src_b) = (f.reg_dst(), f.reg_a(), f.reg_b());
            match f.funct() {
                0 => Instruction::Add { dst, src_a, src_b },
                1 => Instruction::Sub { dst, src_a, src_b },
                2 => Instruction::Or { dst, src_a, src_b },
                3 => Instruction::And { dst, src_a, src_b },
                4 => Instruction::Slt { dst, src_a, src_b },
                8 => Instruction::Jr { src: f.reg_a() },
                funct => Instruction::Reserved { funct },
            }
        }
        0b001 => Instruction::Addi {
            dst: f.reg_b(),
            src: f.reg_a(),
            imm: f.imm7(),
        },
        0b010 => Instruction::J { target: f.imm13() },
        0b011 => Instruction::Jal { target: f.imm13() },
        0b100 => Instruction::Lw {
            dst: f.reg_b(),
            base: f.reg_a(),
            offset: f.imm7(),
        },
        0b101 => Instruction::Sw {
            src: f.reg_b(),
            base: f.reg_a(),
            offset: f.imm7(),
        },
        0b110 => Instruction::Jeq {
            src_a: f.reg_a(),
            src_b: f.reg_b(),
            offset: f.imm7(),
        },
        // Only 0b111 remains after the arms above.
        _ => Instruction::Slti {
            dst: f.reg_b(),
            src: f.reg_a(),
            imm: f.imm7(),
        },
    }
}
