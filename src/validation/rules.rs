use super::{Location, Rule, checks};

/// The ordered rule chain for one field.
#[derive(Clone, Copy)]
pub struct FieldRules {
    pub location: Location,
    pub field: &'static str,
    pub rules: &'static [Rule],
}

impl FieldRules {
    pub const fn new(location: Location, field: &'static str, rules: &'static [Rule]) -> Self {
        Self {
            location,
            field,
            rules,
        }
    }
}

pub const ID: FieldRules = FieldRules::new(
    Location::Params,
    "id",
    &[Rule::new(checks::is_int, "ID must be an integer")],
);

pub const NAME: FieldRules = FieldRules::new(
    Location::Body,
    "name",
    &[Rule::new(checks::not_empty, "Name product is required")],
);

// The type and presence checks overlap on purpose: a missing price is
// reported by all three rules.
pub const PRICE: FieldRules = FieldRules::new(
    Location::Body,
    "price",
    &[
        Rule::new(checks::is_numeric, "Price product must be a number"),
        Rule::new(checks::not_empty, "Price product is required"),
        Rule::new(
            checks::greater_than_zero,
            "Price product must be greater than zero",
        ),
    ],
);

pub const AVAILABILITY: FieldRules = FieldRules::new(
    Location::Body,
    "availability",
    &[Rule::new(
        checks::is_boolean,
        "Availability must be true or false",
    )],
);

pub const BY_ID: &[FieldRules] = &[ID];
pub const CREATE: &[FieldRules] = &[NAME, PRICE];
pub const REPLACE: &[FieldRules] = &[ID, NAME, PRICE, AVAILABILITY];
