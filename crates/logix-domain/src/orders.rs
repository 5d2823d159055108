//! Order form validation
//!
//! The intake form collects free text; validation turns it into a typed order
//! ready for the (simulated) routing engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use logix_types::OrderPriority;

/// Raw form fields as typed by the operator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    pub address: String,
    pub weight_kg: String,
    pub volume_m3: String,
    pub priority: Option<OrderPriority>,
}

/// A validated order, ready for intake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedOrder {
    pub address: String,
    pub weight_kg: f64,
    pub volume_m3: f64,
    pub priority: OrderPriority,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderValidationError {
    #[error("La dirección de entrega es obligatoria")]
    MissingAddress,

    #[error("Peso inválido: {0}")]
    InvalidWeight(String),

    #[error("Volumen inválido: {0}")]
    InvalidVolume(String),

    #[error("Seleccione una prioridad de entrega")]
    MissingPriority,
}

impl OrderDraft {
    pub fn validate(&self) -> Result<ValidatedOrder, OrderValidationError> {
        let address = self.address.trim();
        if address.is_empty() {
            return Err(OrderValidationError::MissingAddress);
        }
        let weight_kg = parse_positive(&self.weight_kg)
            .ok_or_else(|| OrderValidationError::InvalidWeight(self.weight_kg.clone()))?;
        let volume_m3 = parse_positive(&self.volume_m3)
            .ok_or_else(|| OrderValidationError::InvalidVolume(self.volume_m3.clone()))?;
        let priority = self.priority.ok_or(OrderValidationError::MissingPriority)?;
        Ok(ValidatedOrder {
            address: address.to_string(),
            weight_kg,
            volume_m3,
            priority,
        })
    }
}

fn parse_positive(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    if value > 0.0 && value.is_finite() {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> OrderDraft {
        OrderDraft {
            address: "Av. Principal 1234, Zona Norte".to_string(),
            weight_kg: "450".to_string(),
            volume_m3: "2.5".to_string(),
            priority: Some(OrderPriority::Critical),
        }
    }

    #[test]
    fn test_valid_draft() {
        let order = draft().validate().unwrap();
        assert_eq!(order.weight_kg, 450.0);
        assert_eq!(order.volume_m3, 2.5);
        assert_eq!(order.priority, OrderPriority::Critical);
    }

    #[test]
    fn test_missing_address() {
        let mut d = draft();
        d.address = "   ".to_string();
        assert_eq!(d.validate(), Err(OrderValidationError::MissingAddress));
    }

    #[test]
    fn test_non_positive_weight() {
        let mut d = draft();
        d.weight_kg = "0".to_string();
        assert!(matches!(
            d.validate(),
            Err(OrderValidationError::InvalidWeight(_))
        ));
    }

    #[test]
    fn test_garbage_volume() {
        let mut d = draft();
        d.volume_m3 = "mucho".to_string();
        assert!(matches!(
            d.validate(),
            Err(OrderValidationError::InvalidVolume(_))
        ));
    }

    #[test]
    fn test_missing_priority() {
        let mut d = draft();
        d.priority = None;
        assert_eq!(d.validate(), Err(OrderValidationError::MissingPriority));
    }
}
