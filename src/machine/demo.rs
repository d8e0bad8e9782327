use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::Machine;

const DEFAULT_MEM_BYTES: usize = 64 * 1024;
const NR_REGS: usize = 8;

/// A deliberately tiny machine to put behind the monitor.
///
/// Flat byte-addressable memory starting at address zero, eight general
/// registers plus a program counter, and a toy engine: each step consumes
/// the byte at `pc`, accumulates it into `r0`, and advances; a zero byte
/// (or running off the end of memory) halts. The evaluator accepts a
/// register name or a single numeric literal and nothing else.
pub struct DemoMachine {
    mem: Vec<u8>,
    regs: [u64; NR_REGS],
    pc: u64,
    halted: bool,
    quit: bool,
}

impl DemoMachine {
    pub fn new() -> Self {
        Self::with_mem_size(DEFAULT_MEM_BYTES)
    }

    pub fn with_mem_size(bytes: usize) -> Self {
        Self {
            mem: vec![0; bytes],
            regs: [0; NR_REGS],
            pc: 0,
            halted: false,
            quit: false,
        }
    }

    /// Copy a raw image file into memory at address zero.
    pub fn load_image<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let image = fs::read(path)
            .with_context(|| format!("failed to read image '{}'", path.display()))?;
        if image.len() > self.mem.len() {
            anyhow::bail!(
                "image '{}' ({} bytes) does not fit in {} bytes of memory",
                path.display(),
                image.len(),
                self.mem.len()
            );
        }
        self.mem[..image.len()].copy_from_slice(&image);
        Ok(image.len())
    }

    fn step(&mut self) {
        let Some(&byte) = self.mem.get(self.pc as usize) else {
            self.halted = true;
            return;
        };
        if byte == 0 {
            self.halted = true;
            return;
        }
        self.regs[0] = self.regs[0].wrapping_add(u64::from(byte));
        self.pc += 1;
    }

    fn lookup_reg(&self, name: &str) -> Option<u64> {
        if name == "pc" {
            return Some(self.pc);
        }
        let idx: usize = name.strip_prefix('r')?.parse().ok()?;
        self.regs.get(idx).copied()
    }
}

impl Default for DemoMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine for DemoMachine {
    fn execute(&mut self, steps: i64) {
        if self.quit {
            return;
        }
        if steps < 0 {
            while !self.halted {
                self.step();
            }
            return;
        }
        for _ in 0..steps {
            if self.halted {
                break;
            }
            self.step();
        }
    }

    fn display_registers(&self) {
        println!("pc   0x{:016x}", self.pc);
        for (i, value) in self.regs.iter().enumerate() {
            println!("r{}   0x{:016x}", i, value);
        }
    }

    fn read_memory(&self, addr: u64, len: usize) -> Vec<u8> {
        // Reads past the end of memory come back as zero bytes.
        (0..len)
            .map(|i| {
                addr.checked_add(i as u64)
                    .and_then(|a| self.mem.get(a as usize).copied())
                    .unwrap_or(0)
            })
            .collect()
    }

    fn evaluate(&self, expr: &str) -> Option<u64> {
        let text = expr.trim();
        let text = text.strip_prefix('$').unwrap_or(text);
        if text.is_empty() {
            return None;
        }
        if let Some(value) = self.lookup_reg(text) {
            return Some(value);
        }
        if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            return u64::from_str_radix(hex, 16).ok();
        }
        text.parse().ok()
    }

    fn request_quit(&mut self) {
        self.quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_registers_and_literals_only() {
        let mut machine = DemoMachine::with_mem_size(16);
        machine.pc = 0x40;
        machine.regs[3] = 7;

        assert_eq!(machine.evaluate("pc"), Some(0x40));
        assert_eq!(machine.evaluate("$pc"), Some(0x40));
        assert_eq!(machine.evaluate("r3"), Some(7));
        assert_eq!(machine.evaluate("0x10"), Some(16));
        assert_eq!(machine.evaluate(" 42 "), Some(42));
        assert_eq!(machine.evaluate("r9"), None);
        assert_eq!(machine.evaluate("1+1"), None);
        assert_eq!(machine.evaluate(""), None);
    }

    #[test]
    fn stepping_accumulates_until_the_zero_byte() {
        let mut machine = DemoMachine::with_mem_size(8);
        machine.mem[..3].copy_from_slice(&[2, 3, 0]);

        machine.execute(1);
        assert_eq!(machine.pc, 1);
        assert_eq!(machine.regs[0], 2);

        machine.execute(-1);
        assert!(machine.halted);
        assert_eq!(machine.pc, 2);
        assert_eq!(machine.regs[0], 5);
    }

    #[test]
    fn out_of_range_reads_are_zero_filled() {
        let mut machine = DemoMachine::with_mem_size(4);
        machine.mem.copy_from_slice(&[0xaa, 0xbb, 0xcc, 0xdd]);
        assert_eq!(machine.read_memory(2, 4), vec![0xcc, 0xdd, 0, 0]);
        assert_eq!(machine.read_memory(u64::MAX, 2), vec![0, 0]);
    }

    #[test]
    fn zero_steps_is_a_no_op() {
        let mut machine = DemoMachine::with_mem_size(4);
        machine.mem[0] = 1;
        machine.execute(0);
        assert_eq!(machine.pc, 0);
        assert_eq!(machine.regs[0], 0);
    }
}
