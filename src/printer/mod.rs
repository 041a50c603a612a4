//! Read-only AST presentation: renders the tree with box-drawing connectors
//! for terminal display. Nothing here feeds back into the pipeline.

use crate::parser::ast::{Expr, Program, Stmt};

struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    fn branch(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }
}

pub fn render(program: &Program) -> String {
    let root = TreeNode::branch(
        "Program",
        program.statements.iter().map(stmt_node).collect(),
    );
    let mut out = String::new();
    write_node(&root, "", true, &mut out);
    out
}

fn write_node(node: &TreeNode, prefix: &str, is_last: bool, out: &mut String) {
    let connector = if is_last { "└── " } else { "├── " };
    out.push_str(prefix);
    out.push_str(connector);
    out.push_str(&node.label);
    out.push('\n');

    let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        write_node(child, &child_prefix, i == count - 1, out);
    }
}

fn stmt_node(stmt: &Stmt) -> TreeNode {
    match stmt {
        Stmt::Declaration { name, value } => TreeNode::branch(
            "Declaration",
            vec![TreeNode::leaf(name.clone()), expr_node(value)],
        ),
        Stmt::Assignment { name, value } => TreeNode::branch(
            "Assignment",
            vec![TreeNode::leaf(name.clone()), expr_node(value)],
        ),
        Stmt::If {
            condition,
            true_branch,
            false_branch,
        } => TreeNode::branch(
            "If",
            vec![
                expr_node(condition),
                TreeNode::branch("TrueBranch", true_branch.iter().map(stmt_node).collect()),
                TreeNode::branch("FalseBranch", false_branch.iter().map(stmt_node).collect()),
            ],
        ),
        Stmt::Print { expr } => TreeNode::branch("Print", vec![expr_node(expr)]),
        Stmt::Function { name, params, body } => TreeNode::branch(
            "Function",
            vec![
                TreeNode::leaf(name.clone()),
                TreeNode::branch(
                    "Parameters",
                    params.iter().map(|p| TreeNode::leaf(p.clone())).collect(),
                ),
                TreeNode::branch("Block", body.iter().map(stmt_node).collect()),
            ],
        ),
        Stmt::Unknown(token) => TreeNode::leaf(format!("Unknown('{}')", token.lexeme)),
    }
}

fn expr_node(expr: &Expr) -> TreeNode {
    match expr {
        Expr::Number(value) => TreeNode::leaf(value.to_string()),
        Expr::Variable(name) => TreeNode::leaf(name.clone()),
        Expr::Binary { op, left, right } => {
            TreeNode::branch(op.as_str(), vec![expr_node(left), expr_node(right)])
        }
    }
}
