//! Selectable variant options per product category.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cart::VariantProperties;
use crate::error::CommerceError;
use crate::i18n::{Lang, Localized};

/// One of the three variant axes a shopper can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantAxis {
    Color,
    Storage,
    Size,
}

impl VariantAxis {
    /// Axes in the order they are rendered.
    pub const ALL: [VariantAxis; 3] = [VariantAxis::Color, VariantAxis::Storage, VariantAxis::Size];

    pub fn as_str(&self) -> &'static str {
        match self {
            VariantAxis::Color => "color",
            VariantAxis::Storage => "storage",
            VariantAxis::Size => "size",
        }
    }

    /// Localization key of the axis label.
    pub fn label_key(&self) -> &'static str {
        match self {
            VariantAxis::Color => "order.color",
            VariantAxis::Storage => "order.storage",
            VariantAxis::Size => "order.size",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "color" | "colour" => Some(VariantAxis::Color),
            "storage" => Some(VariantAxis::Storage),
            "size" => Some(VariantAxis::Size),
            _ => None,
        }
    }
}

impl fmt::Display for VariantAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selectable option value with its localized label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionChoice {
    /// Stable machine value (e.g., "space-gray").
    pub value: String,
    /// Display label.
    pub label: Localized<String>,
}

impl OptionChoice {
    fn new(value: &str, en: &str, ar: &str) -> Self {
        Self {
            value: value.to_string(),
            label: Localized::text(en, ar),
        }
    }

    fn matches(&self, input: &str) -> bool {
        let input = input.trim();
        self.value.eq_ignore_ascii_case(input)
            || self.label.en.eq_ignore_ascii_case(input)
            || self.label.ar == input
    }
}

/// The option axes offered for a category. Absent axes are empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductOptions {
    pub colors: Vec<OptionChoice>,
    pub storage: Vec<OptionChoice>,
    pub sizes: Vec<OptionChoice>,
}

impl ProductOptions {
    /// Whether the category offers no options at all.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.storage.is_empty() && self.sizes.is_empty()
    }

    /// Choices for one axis.
    pub fn choices(&self, axis: VariantAxis) -> &[OptionChoice] {
        match axis {
            VariantAxis::Color => &self.colors,
            VariantAxis::Storage => &self.storage,
            VariantAxis::Size => &self.sizes,
        }
    }

    /// Axes that have at least one choice, in render order.
    pub fn axes(&self) -> Vec<VariantAxis> {
        VariantAxis::ALL
            .into_iter()
            .filter(|axis| !self.choices(*axis).is_empty())
            .collect()
    }

    /// Find the choice matching a value or either label.
    pub fn resolve(&self, axis: VariantAxis, input: &str) -> Option<&OptionChoice> {
        self.choices(axis).iter().find(|choice| choice.matches(input))
    }

    /// Resolve raw user inputs into variant properties.
    ///
    /// Stored values are the English labels so the identity key does not
    /// change with the interface language.
    pub fn selection(
        &self,
        color: Option<&str>,
        storage: Option<&str>,
        size: Option<&str>,
    ) -> Result<VariantProperties, CommerceError> {
        let pick = |axis: VariantAxis, input: Option<&str>| -> Result<Option<String>, CommerceError> {
            let Some(input) = input else {
                return Ok(None);
            };
            self.resolve(axis, input)
                .map(|choice| Some(choice.label.en.clone()))
                .ok_or_else(|| CommerceError::InvalidOption {
                    axis: axis.to_string(),
                    value: input.to_string(),
                })
        };

        Ok(VariantProperties {
            color: pick(VariantAxis::Color, color)?,
            storage: pick(VariantAxis::Storage, storage)?,
            size: pick(VariantAxis::Size, size)?,
        })
    }

    /// Localized label for a stored property value, falling back to the value.
    pub fn display_value<'a>(&'a self, axis: VariantAxis, stored: &'a str, lang: Lang) -> &'a str {
        self.resolve(axis, stored)
            .map(|choice| choice.label.get(lang).as_str())
            .unwrap_or(stored)
    }
}

/// Options offered for a category. Unknown categories get an empty set.
pub fn options_for_category(category: &str) -> ProductOptions {
    let c = OptionChoice::new;
    match category {
        "phones" => ProductOptions {
            colors: vec![
                c("black", "Black", "أسود"),
                c("white", "White", "أبيض"),
                c("blue", "Blue", "أزرق"),
                c("natural", "Natural Titanium", "تيتانيوم طبيعي"),
            ],
            storage: vec![
                c("128GB", "128GB", "128 جيجابايت"),
                c("256GB", "256GB", "256 جيجابايت"),
                c("512GB", "512GB", "512 جيجابايت"),
                c("1TB", "1TB", "1 تيرابايت"),
            ],
            sizes: Vec::new(),
        },
        "laptops" => ProductOptions {
            colors: vec![
                c("silver", "Silver", "فضي"),
                c("space-gray", "Space Gray", "رمادي فلكي"),
                c("midnight", "Midnight", "منتصف الليل"),
            ],
            storage: vec![
                c("256GB", "256GB SSD", "256 جيجابايت SSD"),
                c("512GB", "512GB SSD", "512 جيجابايت SSD"),
                c("1TB", "1TB SSD", "1 تيرابايت SSD"),
                c("2TB", "2TB SSD", "2 تيرابايت SSD"),
            ],
            sizes: Vec::new(),
        },
        "tablets" => ProductOptions {
            colors: vec![
                c("silver", "Silver", "فضي"),
                c("space-gray", "Space Gray", "رمادي فلكي"),
            ],
            storage: vec![
                c("128GB", "128GB", "128 جيجابايت"),
                c("256GB", "256GB", "256 جيجابايت"),
                c("512GB", "512GB", "512 جيجابايت"),
                c("1TB", "1TB", "1 تيرابايت"),
            ],
            sizes: Vec::new(),
        },
        "watches" => ProductOptions {
            colors: vec![
                c("natural", "Natural Titanium", "تيتانيوم طبيعي"),
                c("black", "Black Titanium", "تيتانيوم أسود"),
            ],
            storage: Vec::new(),
            sizes: vec![
                c("41mm", "41mm", "41 مم"),
                c("45mm", "45mm", "45 مم"),
                c("49mm", "49mm", "49 مم"),
            ],
        },
        "headphones" => ProductOptions {
            colors: vec![
                c("white", "White", "أبيض"),
                c("black", "Black", "أسود"),
                c("silver", "Silver", "فضي"),
                c("space-gray", "Space Gray", "رمادي فلكي"),
            ],
            storage: Vec::new(),
            sizes: Vec::new(),
        },
        _ => ProductOptions::default(),
    }
}
