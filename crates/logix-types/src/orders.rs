//! Order intake types

use serde::{Deserialize, Serialize};

/// Delivery priority of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderPriority {
    Critical,
    High,
    Standard,
}

impl OrderPriority {
    pub fn label(&self) -> &'static str {
        match self {
            OrderPriority::Critical => "Crítica",
            OrderPriority::High => "Alta",
            OrderPriority::Standard => "Estándar",
        }
    }
}

impl std::fmt::Display for OrderPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An order waiting for vehicle assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOrder {
    pub id: String,
    pub address: String,
    pub priority: OrderPriority,
    pub weight_kg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_labels() {
        assert_eq!(OrderPriority::Critical.label(), "Crítica");
        assert_eq!(OrderPriority::High.label(), "Alta");
        assert_eq!(OrderPriority::Standard.label(), "Estándar");
    }
}
