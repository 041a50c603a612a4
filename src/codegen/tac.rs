use std::fmt;

use crate::parser::ast::BinaryOp;

/// One line of three-address code. Targets are either source identifiers or
/// compiler temporaries; a temporary is written exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Copy {
        target: String,
        value: String,
    },
    Binary {
        target: String,
        op: BinaryOp,
        left: String,
        right: String,
    },
    Print {
        value: String,
    },
    FuncBegin {
        name: String,
        params: Vec<String>,
    },
    FuncEnd {
        name: String,
    },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Copy { target, value } => write!(f, "{} = {}", target, value),
            Instruction::Binary {
                target,
                op,
                left,
                right,
            } => write!(f, "{} = {} {} {}", target, left, op.as_str(), right),
            Instruction::Print { value } => write!(f, "print {}", value),
            Instruction::FuncBegin { name, params } => {
                write!(f, "begin_func {}({})", name, params.join(", "))
            }
            Instruction::FuncEnd { name } => write!(f, "end_func {}", name),
        }
    }
}

/// Render an instruction listing, one instruction per line, in emission
/// order.
pub fn render(instructions: &[Instruction]) -> String {
    let mut out = String::new();
    for instruction in instructions {
        out.push_str(&instruction.to_string());
        out.push('\n');
    }
    out
}
