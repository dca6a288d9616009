//! Item model and request payloads
//!
//! An item is a `(name, number)` pair keyed by `name`. Raw request payloads
//! are turned into [`NewItem`] / [`ItemNumber`] before any store call, so the
//! store only ever sees values that fit the `items` table.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Maximum length for item names, matches `VARCHAR(255)`
pub const MAX_ITEM_NAME_LEN: usize = 255;

/// A persisted item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub name: String,
    pub number: i32,
}

/// Validated item name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemName(String);

impl ItemName {
    /// Create a new item name.
    ///
    /// # Rules
    /// - Must not be empty
    /// - Max 255 characters
    ///
    /// The name is kept exactly as given, whitespace included.
    ///
    /// # Example
    /// ```
    /// use itemctl_server::models::ItemName;
    ///
    /// assert!(ItemName::new("alice").is_ok());
    /// assert!(ItemName::new("").is_err());
    /// assert!(ItemName::new("   ").is_ok());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        if s.chars().count() > MAX_ITEM_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: MAX_ITEM_NAME_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated item number (fits the `INTEGER` column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemNumber(i32);

impl ItemNumber {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Validate a JSON number.
    ///
    /// Integral floats such as `5.0` or `1e3` are accepted. Values with a
    /// fractional part and values outside the `i32` range are rejected.
    pub fn from_json(number: &serde_json::Number) -> Result<Self, ValidationError> {
        const OUT_OF_RANGE: ValidationError = ValidationError::InvalidFormat {
            field: "number",
            reason: "must fit in a 32-bit signed integer",
        };

        if let Some(value) = number.as_i64() {
            return i32::try_from(value).map(Self).map_err(|_| OUT_OF_RANGE);
        }

        let value = number
            .as_f64()
            .filter(|v| v.is_finite() && v.fract() == 0.0)
            .ok_or(ValidationError::InvalidFormat {
                field: "number",
                reason: "must be an integer",
            })?;

        if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
            return Err(OUT_OF_RANGE);
        }
        // Range checked above, the cast is exact
        Ok(Self(value as i32))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

/// Item ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: ItemName,
    pub number: ItemNumber,
}

impl NewItem {
    pub fn new(name: ItemName, number: ItemNumber) -> Self {
        Self { name, number }
    }
}

impl TryFrom<CreateItemRequest> for NewItem {
    type Error = ValidationError;

    fn try_from(req: CreateItemRequest) -> Result<Self, Self::Error> {
        let name = ItemName::new(&req.name)?;
        let number = ItemNumber::from_json(&req.number)?;
        Ok(Self { name, number })
    }
}

/// POST /api/items body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub number: serde_json::Number,
}

/// PUT /api/items/{name} body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNumberRequest {
    pub number: serde_json::Number,
}

impl UpdateNumberRequest {
    pub fn validate(&self) -> Result<ItemNumber, ValidationError> {
        ItemNumber::from_json(&self.number)
    }
}
