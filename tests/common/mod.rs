#![allow(dead_code)]

use std::cmp::Ordering;

use exprcc::codegen::{Codegen, Condition, Instruction, Register};
use exprcc::parser::Node;
use exprcc::CompileOptions;

/// Just enough of an x86-64 to run what the code generator emits.
#[derive(Debug, Default)]
pub struct Machine {
    stack: Vec<i64>,
    rax: i64,
    rdi: i64,
    rdx: i64,
    flags: Option<Ordering>,
}

impl Machine {
    fn read(&self, reg: Register) -> i64 {
        match reg {
            Register::Rax => self.rax,
            Register::Rdi => self.rdi,
            Register::Al => self.rax & 0xff,
        }
    }

    fn write(&mut self, reg: Register, value: i64) {
        match reg {
            Register::Rax => self.rax = value,
            Register::Rdi => self.rdi = value,
            Register::Al => self.rax = (self.rax & !0xff) | (value & 0xff),
        }
    }

    fn pop(&mut self) -> i64 {
        self.stack.pop().expect("pop from empty stack")
    }

    fn step(&mut self, instruction: &Instruction) {
        match *instruction {
            Instruction::PushImm(value) => {
                assert!(i32::try_from(value).is_ok(), "immediate too wide: {value}");
                self.stack.push(value);
            }
            Instruction::Push(reg) => self.stack.push(self.read(reg)),
            Instruction::Pop(reg) => {
                let value = self.pop();
                self.write(reg, value);
            }
            Instruction::MovImm(reg, value) => self.write(reg, value),
            Instruction::Add(dst, src) => self.write(dst, self.read(dst).wrapping_add(self.read(src))),
            Instruction::Sub(dst, src) => self.write(dst, self.read(dst).wrapping_sub(self.read(src))),
            Instruction::Imul(dst, src) => self.write(dst, self.read(dst).wrapping_mul(self.read(src))),
            Instruction::Cqo => self.rdx = if self.rax < 0 { -1 } else { 0 },
            Instruction::Idiv(reg) => {
                let divisor = self.read(reg);
                assert_eq!(self.rdx, if self.rax < 0 { -1 } else { 0 }, "idiv without cqo");
                self.rdx = self.rax.checked_rem(divisor).expect("division fault");
                self.rax = self.rax.checked_div(divisor).expect("division fault");
            }
            Instruction::Cmp(lhs, rhs) => self.flags = Some(self.read(lhs).cmp(&self.read(rhs))),
            Instruction::Set(cond, reg) => {
                let ordering = self.flags.expect("set without cmp");
                let hit = match cond {
                    Condition::Equal => ordering == Ordering::Equal,
                    Condition::NotEqual => ordering != Ordering::Equal,
                    Condition::Less => ordering == Ordering::Less,
                    Condition::LessEqual => ordering != Ordering::Greater,
                };
                self.write(reg, hit as i64);
            }
            Instruction::Movzb(dst, src) => self.write(dst, self.read(src) & 0xff),
            Instruction::Ret => {}
        }
    }

    /// Runs the instructions and returns the single value left on the stack.
    pub fn run(instructions: &[Instruction]) -> i64 {
        let mut machine = Machine::default();
        for instruction in instructions {
            machine.step(instruction);
        }
        assert_eq!(machine.stack.len(), 1, "stack: {:?}", machine.stack);
        machine.stack[0]
    }
}

pub fn parse(input: &str) -> Node {
    exprcc::parse(input, &CompileOptions::default()).expect("parse failed")
}

pub fn generate(input: &str) -> Vec<Instruction> {
    Codegen::new().generate(&parse(input))
}

pub fn eval(input: &str) -> i64 {
    Machine::run(&generate(input))
}
