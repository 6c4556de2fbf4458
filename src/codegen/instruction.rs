use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register {
    Rax,
    Rdi,
    /// Low byte of `rax`.
    Al,
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Register::Rax => "rax",
            Register::Rdi => "rdi",
            Register::Al => "al",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    Equal,
    NotEqual,
    Less,
    LessEqual,
}

impl Condition {
    fn suffix(&self) -> &'static str {
        match self {
            Condition::Equal => "e",
            Condition::NotEqual => "ne",
            Condition::Less => "l",
            Condition::LessEqual => "le",
        }
    }
}

/// One line of Intel syntax x86-64 assembly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Immediate must fit a sign-extended 32-bit value.
    PushImm(i64),
    Push(Register),
    Pop(Register),
    MovImm(Register, i64),
    Add(Register, Register),
    Sub(Register, Register),
    Imul(Register, Register),
    /// Sign-extends `rax` into `rdx:rax`.
    Cqo,
    Idiv(Register),
    Cmp(Register, Register),
    Set(Condition, Register),
    Movzb(Register, Register),
    Ret,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::PushImm(value) => write!(f, "push {value}"),
            Instruction::Push(reg) => write!(f, "push {reg}"),
            Instruction::Pop(reg) => write!(f, "pop {reg}"),
            Instruction::MovImm(reg, value) => write!(f, "mov {reg}, {value}"),
            Instruction::Add(dst, src) => write!(f, "add {dst}, {src}"),
            Instruction::Sub(dst, src) => write!(f, "sub {dst}, {src}"),
            Instruction::Imul(dst, src) => write!(f, "imul {dst}, {src}"),
            Instruction::Cqo => write!(f, "cqo"),
            Instruction::Idiv(reg) => write!(f, "idiv {reg}"),
            Instruction::Cmp(lhs, rhs) => write!(f, "cmp {lhs}, {rhs}"),
            Instruction::Set(cond, reg) => write!(f, "set{} {reg}", cond.suffix()),
            Instruction::Movzb(dst, src) => write!(f, "movzb {dst}, {src}"),
            Instruction::Ret => write!(f, "ret"),
        }
    }
}
