use serde::Deserialize;

/// The four arithmetic operations exposed by the `calculate` tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Parse a lowercase operation name. Matching is case-sensitive.
    pub fn parse(name: &str) -> Option<Self> {
        serde_plain::from_str(name).ok()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operation. Returns `None` only for division by zero.
    pub fn apply(&self, a: f64, b: f64) -> Option<f64> {
        match self {
            Self::Add => Some(a + b),
            Self::Subtract => Some(a - b),
            Self::Multiply => Some(a * b),
            Self::Divide if b == 0.0 => None,
            Self::Divide => Some(a / b),
        }
    }
}

/// Evaluate `a <operation> b` and render it as `"<a> <symbol> <b> = <result>"`.
///
/// Bad input never fails: division by zero and unknown operation names come
/// back as explanatory text.
pub fn calculate(a: f64, b: f64, operation: &str) -> String {
    let Some(op) = Operation::parse(operation) else {
        return format!(
            "Error: unknown operation '{}'. Supported operations: {}",
            operation,
            supported_operations(),
        );
    };

    match op.apply(a, b) {
        Some(result) => format!("{} {} {} = {}", a, op.symbol(), b, result),
        None => "Error: division by zero".into(),
    }
}

fn supported_operations() -> String {
    Operation::ALL
        .iter()
        .map(Operation::name)
        .collect::<Vec<_>>()
        .join(", ")
}
