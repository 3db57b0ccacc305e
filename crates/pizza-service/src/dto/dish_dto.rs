//! Dish-related DTOs.

use pizza_core::Dish;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A dish as listed on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DishResponse {
    pub id: i64,
    pub name: String,
    /// Price in the smallest currency unit.
    pub price: i64,
    pub description: String,
    pub image_url: String,
    /// `null` when the stored row has no tags.
    pub tags: Option<Vec<String>>,
}

/// The full menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DishListResponse {
    pub items: Vec<DishResponse>,
}

impl From<Dish> for DishResponse {
    fn from(dish: Dish) -> Self {
        Self {
            id: dish.id,
            name: dish.name,
            price: dish.price,
            description: dish.description,
            image_url: dish.image_url,
            tags: dish.tags.into(),
        }
    }
}

impl From<Vec<Dish>> for DishListResponse {
    fn from(dishes: Vec<Dish>) -> Self {
        Self {
            items: dishes.into_iter().map(DishResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizza_core::Tags;

    fn dish(id: i64, tags: Tags) -> Dish {
        Dish {
            id,
            name: format!("dish-{id}"),
            price: 100 * id,
            description: String::new(),
            image_url: String::new(),
            tags,
        }
    }

    #[test]
    fn test_list_shape() {
        let response = DishListResponse::from(vec![
            dish(1, Tags::from(vec!["a".to_string(), "b".to_string()])),
            dish(2, Tags::Absent),
        ]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["items"][0]["tags"], serde_json::json!(["a", "b"]));
        assert!(json["items"][1]["tags"].is_null());
        assert_eq!(json["items"][1]["price"], 200);
    }

    #[test]
    fn test_empty_list_is_array() {
        let json = serde_json::to_string(&DishListResponse::from(Vec::new())).unwrap();
        assert_eq!(json, r#"{"items":[]}"#);
    }
}
