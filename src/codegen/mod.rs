pub mod tac;

use snafu::Snafu;

use crate::parser::ast::{Expr, Program, Stmt};
use tac::Instruction;

#[derive(Debug, Clone, PartialEq, Snafu)]
pub enum CodegenError {
    #[snafu(display(
        "code generation for '{construct}' is not implemented; conditionals are parsed but not lowered"
    ))]
    NotImplemented { construct: String },
    #[snafu(display("no code generation rule for {variant} nodes"))]
    UnsupportedConstruct { variant: String },
}

/// Lower a parsed program to a linear three-address listing. Generation is
/// deterministic: the same AST always yields the same listing.
pub fn generate(program: &Program) -> Result<Vec<Instruction>, CodegenError> {
    TacGen::new().generate(program)
}

/// Single pre-order walk over the AST with a fresh-temporary counter.
/// Temporaries are named t0, t1, ... in allocation order and never reused.
pub struct TacGen {
    instructions: Vec<Instruction>,
    next_temp: usize,
}

impl TacGen {
    pub fn new() -> Self {
        Self {
            instructions: Vec::new(),
            next_temp: 0,
        }
    }

    pub fn generate(mut self, program: &Program) -> Result<Vec<Instruction>, CodegenError> {
        for stmt in &program.statements {
            self.gen_stmt(stmt)?;
        }
        Ok(self.instructions)
    }

    fn gen_stmt(&mut self, stmt: &Stmt) -> Result<(), CodegenError> {
        match stmt {
            Stmt::Declaration { name, value } | Stmt::Assignment { name, value } => {
                let result = self.gen_expr(value);
                self.instructions.push(Instruction::Copy {
                    target: name.clone(),
                    value: result,
                });
                Ok(())
            }
            Stmt::Print { expr } => {
                let value = self.gen_expr(expr);
                self.instructions.push(Instruction::Print { value });
                Ok(())
            }
            Stmt::Function { name, params, body } => {
                self.instructions.push(Instruction::FuncBegin {
                    name: name.clone(),
                    params: params.clone(),
                });
                for stmt in body {
                    self.gen_stmt(stmt)?;
                }
                self.instructions.push(Instruction::FuncEnd { name: name.clone() });
                Ok(())
            }
            Stmt::If { .. } => NotImplementedSnafu { construct: "თუ" }.fail(),
            Stmt::Unknown(_) => UnsupportedConstructSnafu { variant: "Unknown" }.fail(),
        }
    }

    /// Returns the operand naming this expression's result. Leaves emit
    /// nothing and return their text verbatim; binary operations evaluate
    /// left before right, then write a fresh temporary.
    fn gen_expr(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::Number(value) => value.to_string(),
            Expr::Variable(name) => name.clone(),
            Expr::Binary { op, left, right } => {
                let left = self.gen_expr(left);
                let right = self.gen_expr(right);
                let target = self.new_temp();
                self.instructions.push(Instruction::Binary {
                    target: target.clone(),
                    op: *op,
                    left,
                    right,
                });
                target
            }
        }
    }

    fn new_temp(&mut self) -> String {
        let temp = format!("t{}", self.next_temp);
        self.next_temp += 1;
        temp
    }
}

impl Default for TacGen {
    fn default() -> Self {
        Self::new()
    }
}
