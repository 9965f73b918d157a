use bigdecimal::BigDecimal;

use super::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: String,
    name: String,
    price: BigDecimal,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: BigDecimal,
    ) -> Result<Self, DomainError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::invalid("Id is required"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid("Name is required"));
        }
        if self.price < BigDecimal::from(0) {
            return Err(DomainError::invalid("Price must be greater or equal to 0"));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &BigDecimal {
        &self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid("Name is required"));
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: BigDecimal) -> Result<(), DomainError> {
        if price < BigDecimal::from(0) {
            return Err(DomainError::invalid("Price must be greater or equal to 0"));
        }
        self.price = price;
        Ok(())
    }
}
