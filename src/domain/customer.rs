use super::errors::DomainError;

/// Postal address value object. Compared by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    street: String,
    number: i32,
    zip: String,
    city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: i32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        if address.street.trim().is_empty() {
            return Err(DomainError::invalid("Street is required"));
        }
        if address.zip.trim().is_empty() {
            return Err(DomainError::invalid("Zip is required"));
        }
        if address.city.trim().is_empty() {
            return Err(DomainError::invalid("City is required"));
        }
        Ok(address)
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}

/// Customer referenced by orders through `customer_id`. Persisted by its own
/// collaborator; orders only hold the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: i32,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, DomainError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        customer.validate()?;
        Ok(customer)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::invalid("Id is required"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid("Name is required"));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> i32 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid("Name is required"));
        }
        self.name = name;
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn activate(&mut self) -> Result<(), DomainError> {
        if self.address.is_none() {
            return Err(DomainError::invalid(
                "Address is mandatory to activate a customer",
            ));
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: i32) -> Result<(), DomainError> {
        self.reward_points = self
            .reward_points
            .checked_add(points)
            .ok_or_else(|| DomainError::invalid("Reward points out of range"))?;
        Ok(())
    }
}
