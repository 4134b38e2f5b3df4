use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use solestock_core::{DomainError, DomainResult, Entity, InventoryItemId, Money, ValueObject};

/// Sale details of a sold item.
///
/// Date and price are one value: an item is either sold (both known) or not.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub date_sold: NaiveDate,
    pub price_sold: Money,
}

impl ValueObject for Sale {}

/// A stored inventory item.
///
/// Only built through [`NewInventoryItem::into_item`], so every instance has
/// passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItem {
    id: InventoryItemId,
    sku: String,
    shoe_name: String,
    size: f64,
    purchase_price: Money,
    date_bought: NaiveDate,
    #[serde(flatten)]
    sale: Option<Sale>,
}

impl InventoryItem {
    pub fn id_typed(&self) -> InventoryItemId {
        self.id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn shoe_name(&self) -> &str {
        &self.shoe_name
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn purchase_price(&self) -> Money {
        self.purchase_price
    }

    pub fn date_bought(&self) -> NaiveDate {
        self.date_bought
    }

    pub fn sale(&self) -> Option<&Sale> {
        self.sale.as_ref()
    }

    pub fn is_sold(&self) -> bool {
        self.sale.is_some()
    }

    /// `price_sold - purchase_price` for sold items.
    pub fn profit(&self) -> Option<Money> {
        self.sale.map(|s| s.price_sold - self.purchase_price)
    }
}

impl Entity for InventoryItem {
    type Id = InventoryItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input for adding an item to inventory.
///
/// Sale fields arrive independently (as entered in a form); they must be given
/// together or not at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInventoryItem {
    pub sku: String,
    pub shoe_name: String,
    pub size: f64,
    pub purchase_price: Money,
    pub date_bought: NaiveDate,
    #[serde(default)]
    pub date_sold: Option<NaiveDate>,
    #[serde(default)]
    pub price_sold: Option<Money>,
}

impl NewInventoryItem {
    pub fn new(
        sku: impl Into<String>,
        shoe_name: impl Into<String>,
        size: f64,
        purchase_price: Money,
        date_bought: NaiveDate,
    ) -> Self {
        Self {
            sku: sku.into(),
            shoe_name: shoe_name.into(),
            size,
            purchase_price,
            date_bought,
            date_sold: None,
            price_sold: None,
        }
    }

    /// Record the item as sold.
    pub fn sold(mut self, date_sold: NaiveDate, price_sold: Money) -> Self {
        self.date_sold = Some(date_sold);
        self.price_sold = Some(price_sold);
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(DomainError::validation("size must be a positive number"));
        }
        if self.purchase_price.is_negative() {
            return Err(DomainError::validation("purchase_price cannot be negative"));
        }
        match (self.date_sold, self.price_sold) {
            (Some(_), None) => Err(DomainError::validation(
                "price_sold is required when date_sold is set",
            )),
            (None, Some(_)) => Err(DomainError::validation(
                "date_sold is required when price_sold is set",
            )),
            (Some(_), Some(price)) if price.is_negative() => {
                Err(DomainError::validation("price_sold cannot be negative"))
            }
            _ => Ok(()),
        }
    }

    /// Validate and assign an identity.
    pub fn into_item(self, id: InventoryItemId) -> DomainResult<InventoryItem> {
        self.validate()?;
        let sale = match (self.date_sold, self.price_sold) {
            (Some(date_sold), Some(price_sold)) => Some(Sale {
                date_sold,
                price_sold,
            }),
            _ => None,
        };
        Ok(InventoryItem {
            id,
            sku: self.sku,
            shoe_name: self.shoe_name,
            size: self.size,
            purchase_price: self.purchase_price,
            date_bought: self.date_bought,
            sale,
        })
    }
}
