use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    models::{Product, ProductFields},
    validation::{
        FieldRules, Location, RequestInput, Validate,
        checks::{as_text, loose_bool, loose_number, parse_int},
        rules,
    },
};

/// Path id of a product route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i64);

#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    #[schema(example = 399.99)]
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct ReplaceProductRequest {
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    #[schema(example = 399.99)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}

/// A validated PUT: the target id plus the new field values.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceProduct {
    pub id: ProductId,
    pub payload: ReplaceProductRequest,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

impl From<CreateProductRequest> for ProductFields {
    fn from(request: CreateProductRequest) -> Self {
        ProductFields::new(request.name, request.price)
    }
}

impl From<ReplaceProductRequest> for ProductFields {
    fn from(request: ReplaceProductRequest) -> Self {
        ProductFields {
            name: request.name,
            price: request.price,
            availability: request.availability,
        }
    }
}

fn name_from(input: &RequestInput) -> String {
    as_text(input.get(Location::Body, "name").as_ref()).into_owned()
}

fn price_from(input: &RequestInput) -> f64 {
    loose_number(input.get(Location::Body, "price").as_ref())
}

impl Validate for ProductId {
    const RULES: &'static [FieldRules] = rules::BY_ID;

    fn from_input(input: &RequestInput) -> Option<Self> {
        let raw = input.get(Location::Params, "id")?;
        parse_int(raw.as_str()?).map(ProductId)
    }
}

impl Validate for CreateProductRequest {
    const RULES: &'static [FieldRules] = rules::CREATE;

    fn from_input(input: &RequestInput) -> Option<Self> {
        Some(Self {
            name: name_from(input),
            price: price_from(input),
        })
    }
}

impl Validate for ReplaceProduct {
    const RULES: &'static [FieldRules] = rules::REPLACE;

    fn from_input(input: &RequestInput) -> Option<Self> {
        let id = ProductId::from_input(input)?;
        let availability = loose_bool(input.get(Location::Body, "availability").as_ref())?;
        Some(Self {
            id,
            payload: ReplaceProductRequest {
                name: name_from(input),
                price: price_from(input),
                availability,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::evaluate;
    use serde_json::json;

    #[test]
    fn create_request_coerces_numeric_strings() {
        let input = RequestInput::from_body(json!({ "name": "Audífonos", "price": "49.90" }));
        assert!(evaluate(CreateProductRequest::RULES, &input).is_empty());

        let request = CreateProductRequest::from_input(&input).unwrap();
        assert_eq!(request.name, "Audífonos");
        assert_eq!(request.price, 49.9);

        let fields = ProductFields::from(request);
        assert!(fields.availability);
    }

    #[test]
    fn replace_request_reads_id_and_loose_boolean() {
        let input = RequestInput::new(
            vec![("id".into(), "12".into())],
            json!({ "name": "Silla", "price": 80, "availability": "0" }),
        );
        assert!(evaluate(ReplaceProduct::RULES, &input).is_empty());

        let replace = ReplaceProduct::from_input(&input).unwrap();
        assert_eq!(replace.id, ProductId(12));
        assert_eq!(replace.payload.price, 80.0);
        assert!(!replace.payload.availability);
    }

    #[test]
    fn product_id_rejects_missing_param() {
        let input = RequestInput::from_body(json!({}));
        assert!(ProductId::from_input(&input).is_none());
    }
}
