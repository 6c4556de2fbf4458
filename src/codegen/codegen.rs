use log::trace;

use super::{Condition, Instruction, Register};
use crate::parser::{BinOpKind, Node};

enum Step<'a> {
    Visit(&'a Node),
    Apply(BinOpKind),
}

/// Lowers an expression tree into stack machine code. Each subtree leaves
/// exactly one value on the stack.
#[derive(Debug, Default)]
pub struct Codegen {
    instructions: Vec<Instruction>,
}

impl Codegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(mut self, node: &Node) -> Vec<Instruction> {
        self.gen_expr(node);
        trace!("generated {} instructions", self.instructions.len());
        self.instructions
    }

    fn emit(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    fn gen_num(&mut self, value: i64) {
        if i32::try_from(value).is_ok() {
            self.emit(Instruction::PushImm(value));
        } else {
            self.emit(Instruction::MovImm(Register::Rax, value));
            self.emit(Instruction::Push(Register::Rax));
        }
    }

    fn gen_compare(&mut self, cond: Condition) {
        self.emit(Instruction::Cmp(Register::Rax, Register::Rdi));
        self.emit(Instruction::Set(cond, Register::Al));
        self.emit(Instruction::Movzb(Register::Rax, Register::Al));
    }

    fn gen_binop(&mut self, kind: BinOpKind) {
        self.emit(Instruction::Pop(Register::Rdi));
        self.emit(Instruction::Pop(Register::Rax));

        match kind {
            BinOpKind::Add => self.emit(Instruction::Add(Register::Rax, Register::Rdi)),
            BinOpKind::Sub => self.emit(Instruction::Sub(Register::Rax, Register::Rdi)),
            BinOpKind::Mul => self.emit(Instruction::Imul(Register::Rax, Register::Rdi)),
            BinOpKind::Div => {
                self.emit(Instruction::Cqo);
                self.emit(Instruction::Idiv(Register::Rdi));
            }
            BinOpKind::Equal => self.gen_compare(Condition::Equal),
            BinOpKind::NotEqual => self.gen_compare(Condition::NotEqual),
            BinOpKind::LessThan => self.gen_compare(Condition::Less),
            BinOpKind::LessEqual => self.gen_compare(Condition::LessEqual),
        }

        self.emit(Instruction::Push(Register::Rax));
    }

    /// Post-order walk with an explicit stack: left operand, right operand,
    /// then the operator.
    fn gen_expr(&mut self, node: &Node) {
        let mut stack = vec![Step::Visit(node)];

        while let Some(step) = stack.pop() {
            match step {
                Step::Visit(Node::Num(value)) => self.gen_num(*value),
                Step::Visit(Node::Binary(kind, lhs, rhs)) => {
                    stack.push(Step::Apply(*kind));
                    stack.push(Step::Visit(rhs));
                    stack.push(Step::Visit(lhs));
                }
                Step::Apply(kind) => self.gen_binop(kind),
            }
        }
    }
}

/// Frames the instructions as a complete program whose `main` returns the
/// value left on the stack.
pub fn emit_program(instructions: &[Instruction]) -> String {
    let mut asm = String::new();
    asm.push_str(".intel_syntax noprefix\n");
    asm.push_str(".globl main\n");
    asm.push_str("main:\n");
    for instruction in instructions {
        asm.push_str(&format!("  {instruction}\n"));
    }
    asm.push_str(&format!("  {}\n", Instruction::Pop(Register::Rax)));
    asm.push_str(&format!("  {}\n", Instruction::Ret));
    asm
}
