// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;
use std::str::FromStr;

/// The service categories offered by the salon, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ServiceCategory {
    /// Hair cut.
    Cut,

    /// Hair coloring.
    Color,

    /// Hair or scalp treatment.
    #[cfg_attr(feature = "clap", clap(name = "treatment"))]
    HairTreatment,

    /// Washing and styling.
    Styling,
}

const CATEGORY_CUT: &str = "Cut";
const CATEGORY_COLOR: &str = "Color";
const CATEGORY_HAIR_TREATMENT: &str = "Hair Treatment";
const CATEGORY_STYLING: &str = "Styling";

impl ServiceCategory {
    /// All categories in display order.
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::Cut,
        ServiceCategory::Color,
        ServiceCategory::HairTreatment,
        ServiceCategory::Styling,
    ];

    /// The options a customer can pick for this category, not including "none".
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            ServiceCategory::Cut => &["Cut"],
            ServiceCategory::Color => &["Touch up", "Short", "Medium", "Long"],
            ServiceCategory::HairTreatment => &["Scalp only", "Short", "Medium", "Long"],
            ServiceCategory::Styling => &["Wash and Blow Dry", "Wash and Styling"],
        }
    }

    /// Whether the given option belongs to this category.
    pub fn offers(&self, option: &str) -> bool {
        self.options().contains(&option)
    }
}

impl AsRef<str> for ServiceCategory {
    fn as_ref(&self) -> &str {
        match self {
            ServiceCategory::Cut => CATEGORY_CUT,
            ServiceCategory::Color => CATEGORY_COLOR,
            ServiceCategory::HairTreatment => CATEGORY_HAIR_TREATMENT,
            ServiceCategory::Styling => CATEGORY_STYLING,
        }
    }
}

impl Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for ServiceCategory {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            CATEGORY_CUT => Ok(ServiceCategory::Cut),
            CATEGORY_COLOR => Ok(ServiceCategory::Color),
            CATEGORY_HAIR_TREATMENT => Ok(ServiceCategory::HairTreatment),
            CATEGORY_STYLING => Ok(ServiceCategory::Styling),
            _ => Err(()),
        }
    }
}

/// The choice made for one service category.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum ServiceChoice {
    /// One of the category options.
    Selected(String),

    /// Nothing picked for the category.
    #[default]
    NotSelected,
}

impl ServiceChoice {
    /// Creates a selected choice.
    pub fn selected(option: impl Into<String>) -> Self {
        ServiceChoice::Selected(option.into())
    }

    /// Whether an option has been picked.
    pub fn is_selected(&self) -> bool {
        matches!(self, ServiceChoice::Selected(_))
    }

    /// The picked option, if any.
    pub fn as_option(&self) -> Option<&str> {
        match self {
            ServiceChoice::Selected(a) => Some(a),
            ServiceChoice::NotSelected => None,
        }
    }
}

impl Display for ServiceChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceChoice::Selected(a) => write!(f, "{a}"),
            ServiceChoice::NotSelected => write!(f, "None"),
        }
    }
}

/// Choices for every service category of one booking.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ServiceSelection {
    pub cut: ServiceChoice,
    pub color: ServiceChoice,
    pub treatment: ServiceChoice,
    pub styling: ServiceChoice,
}

impl ServiceSelection {
    /// The choice for the given category.
    pub fn get(&self, category: ServiceCategory) -> &ServiceChoice {
        match category {
            ServiceCategory::Cut => &self.cut,
            ServiceCategory::Color => &self.color,
            ServiceCategory::HairTreatment => &self.treatment,
            ServiceCategory::Styling => &self.styling,
        }
    }

    /// Replaces the choice for the given category.
    pub fn set(&mut self, category: ServiceCategory, choice: ServiceChoice) {
        let slot = match category {
            ServiceCategory::Cut => &mut self.cut,
            ServiceCategory::Color => &mut self.color,
            ServiceCategory::HairTreatment => &mut self.treatment,
            ServiceCategory::Styling => &mut self.styling,
        };
        *slot = choice;
    }

    /// Whether at least one category has a selected option.
    pub fn has_any(&self) -> bool {
        ServiceCategory::ALL
            .iter()
            .any(|&c| self.get(c).is_selected())
    }

    /// The selected options in category order.
    pub fn services(&self) -> Vec<String> {
        ServiceCategory::ALL
            .iter()
            .filter_map(|&c| self.get(c).as_option().map(ToOwned::to_owned))
            .collect()
    }

    /// Each category followed by its option, like "Color", "Touch up".
    /// The category is left out when it reads the same as the option.
    pub fn labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        for &category in ServiceCategory::ALL.iter() {
            let Some(option) = self.get(category).as_option() else {
                continue;
            };
            if category.as_ref() != option {
                labels.push(category.to_string());
            }
            labels.push(option.to_string());
        }
        labels
    }
}
