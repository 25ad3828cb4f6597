use std::fmt::{self, Display};

/// 要求两个张量形状一致的二元运算
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
}
impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operation_name = match self {
            Operator::Add => "相加",
        };
        write!(f, "{}", operation_name)
    }
}

/// 比较运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Equal,
}
impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator_name = match self {
            ComparisonOperator::Equal => "==",
        };
        write!(f, "{}", operator_name)
    }
}
