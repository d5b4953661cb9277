//! The fetch/decode/execute step.

use crate::common::constants::{ADDR_MASK, BRANCH_TARGET_MODULUS, LINK_REG};
use crate::core::cpu::Machine;
use crate::isa::{Instruction, decode};

impl Machine {
    /// Executes one cycle.
    ///
    /// Fetches the word at the program counter, decodes it, and applies
    /// its effects. The program counter is confined to 13 bits after every
    /// cycle. Any control transfer whose target is its own address halts
    /// the machine. On a halted machine this is a no-op.
    pub fn step(&mut self) {
        self.events.clear();
        if self.halted {
            return;
        }

        let word = self.mem.load(self.pc);
        let instr = decode(word);
        tracing::trace!(pc = self.pc, word = %format_args!("{word:#06x}"), ?instr, "cycle");
        self.execute(instr);
        self.pc &= ADDR_MASK;

        self.stats.cycles += 1;
        for event in &self.events {
            self.stats.record_access(event);
        }
    }

    fn execute(&mut self, instr: Instruction) {
        match instr {
            Instruction::Add { dst, src_a, src_b } => {
                let val = self.regs.read(src_a).wrapping_add(self.regs.read(src_b));
                self.regs.write(dst, val);
                self.pc = self.pc.wrapping_add(1);
            }
            Instruction::Sub { dst, src_a, src_b } => {
                let val = self.regs.read(src_a).wrapping_sub(self.regs.read(src_b));
                self.regs.write(dst, val);
                self.pc = self.pc.wrapping_add(1);
            }
            Instruction::Or { dst, src_a, src_b } => {
                let val = self.regs.read(src_a) | self.regs.read(src_b);
                self.regs.write(dst, val);
                self.pc = self.pc.wrapping_add(1);
            }
            Instruction::And { dst, src_a, src_b } => {
                let val = self.regs.read(src_a) & self.regs.read(src_b);
                self.regs.write(dst, val);
                self.pc = self.pc.wrapping_add(1);
            }
            Instruction::Slt { dst, src_a, src_b } => {
                let val = u16::from(self.regs.read(src_a) < self.regs.read(src_b));
                self.regs.write(dst, val);
                self.pc = self.pc.wrapping_add(1);
            }
            Instruction::Jr { src } => {
                let target = self.regs.read(src);
                if target == self.pc {
                    self.halted = true;
                } else {
                    self.pc = target;
                }
            }
            Instruction::Addi { dst, src, imm } => {
                let val = self.regs.read(src).wrapping_add(imm);
                self.regs.write(dst, val);
                self.pc = self.pc.wrapping_add(1);
            }
            Instruction::J { target } => {
                if target == self.pc {
                    self.halted = true;
                } else {
                    self.pc = target;
                }
            }
            Instruction::Jal { target } => {
                // The link register is written even when the jump halts.
                self.regs.write(LINK_REG, self.pc.wrapping_add(1));
                if target == self.pc {
                    self.halted = true;
                } else {
                    self.pc = target;
                }
            }
            Instruction::Lw { dst, base, offset } => {
                let addr = self.regs.read(base).wrapping_add(offset);
                let pc = self.pc;
                let val = match self.cache.as_mut() {
                    Some(cache) => cache.read(&self.mem, addr, pc, &mut self.events),
                    None => self.mem.load(addr),
                };
                self.regs.write(dst, val);
                self.stats.loads += 1;
                self.pc = self.pc.wrapping_add(1);
            }
            Instruction::Sw { src, base, offset } => {
                let addr = self.regs.read(base).wrapping_add(offset);
                let val = self.regs.read(src);
                let pc = self.pc;
                match self.cache.as_mut() {
                    Some(cache) => cache.write(&mut self.mem, addr, val, pc, &mut self.events),
                    None => self.mem.store(addr, val),
                }
                self.stats.stores += 1;
                self.pc = self.pc.wrapping_add(1);
            }
            Instruction::Jeq { src_a, src_b, offset } => {
                if self.regs.read(src_a) == self.regs.read(src_b) {
                    let target = self
                        .pc
                        .wrapping_add(1)
                        .wrapping_add(offset)
                        .wrapping_rem(BRANCH_TARGET_MODULUS);
                    if target == self.pc {
                        self.halted = true;
                    } else {
                        self.pc = target;
                    }
                } else {
                    self.pc = self.pc.wrapping_add(1);
                }
            }
            Instruction::Slti { dst, src, imm } => {
                let val = u16::from(self.regs.read(src) < imm);
                self.regs.write(dst, val);
                self.pc = self.pc.wrapping_add(1);
            }
            // Unassigned function code: no state changes, including the
            // program counter.
            Instruction::Reserved { funct } => {
                tracing::warn!(funct, pc = self.pc, "unassigned function code");
            }
        }
    }
}
