use axum_cafe::schema::menu_items;
use bigdecimal::BigDecimal;
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::prelude::*;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Base,
    Ingredient,
    Drink,
    CookMethod,
    Utensil,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Base => "base",
            Category::Ingredient => "ingredient",
            Category::Drink => "drink",
            Category::CookMethod => "cook_method",
            Category::Utensil => "utensil",
        }
    }

    /// Heading shown on the menu page.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Base => "Основа для завтрака",
            Category::Ingredient => "Ингредиенты",
            Category::Drink => "Напитки",
            Category::CookMethod => "Способ приготовления",
            Category::Utensil => "Приборы",
        }
    }
}

impl ToSql<Text, Pg> for Category {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for Category {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match std::str::from_utf8(bytes.as_bytes())? {
            "base" => Ok(Category::Base),
            "ingredient" => Ok(Category::Ingredient),
            "drink" => Ok(Category::Drink),
            "cook_method" => Ok(Category::CookMethod),
            "utensil" => Ok(Category::Utensil),
            other => Err(format!("unrecognized category: {}", other).into()),
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, AsExpression, FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    #[default]
    Piece,
    Gram,
    #[serde(rename = "ml")]
    Milliliter,
    Slice,
    Spoon,
    Portion,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Piece => "piece",
            Unit::Gram => "gram",
            Unit::Milliliter => "ml",
            Unit::Slice => "slice",
            Unit::Spoon => "spoon",
            Unit::Portion => "portion",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Piece => "шт",
            Unit::Gram => "г",
            Unit::Milliliter => "мл",
            Unit::Slice => "ломтик",
            Unit::Spoon => "ложка",
            Unit::Portion => "порция",
        }
    }
}

impl ToSql<Text, Pg> for Unit {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for Unit {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match std::str::from_utf8(bytes.as_bytes())? {
            "piece" => Ok(Unit::Piece),
            "gram" => Ok(Unit::Gram),
            "ml" => Ok(Unit::Milliliter),
            "slice" => Ok(Unit::Slice),
            "spoon" => Ok(Unit::Spoon),
            "portion" => Ok(Unit::Portion),
            other => Err(format!("unrecognized unit: {}", other).into()),
        }
    }
}

#[derive(Queryable, Selectable, Debug, PartialEq, Identifiable, Serialize)]
#[diesel(table_name = menu_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub category: Category,
    pub price: BigDecimal,
    pub unit: Unit,
    pub order: i32,
}

#[derive(Insertable, Deserialize)]
#[diesel(table_name = menu_items)]
pub struct NewMenuItem {
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub price: BigDecimal,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub order: i32,
}

#[derive(AsChangeset, Deserialize)]
#[diesel(table_name = menu_items)]
pub struct UpdateMenuItem {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub price: Option<BigDecimal>,
    pub unit: Option<Unit>,
    pub order: Option<i32>,
}

#[derive(Deserialize, Debug)]
pub struct MenuItemFilters {
    pub category: Option<Category>,
    pub search: Option<String>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct MenuSection {
    pub category: Category,
    pub items: Vec<MenuItem>,
}

/// Reshapes the catalog, already sorted by (`order`, `id`), into per-category
/// sections. Sections appear in the order their first item was encountered.
pub fn group_by_category(items: Vec<MenuItem>) -> Vec<MenuSection> {
    let mut sections: Vec<MenuSection> = Vec::new();

    for item in items {
        match sections.iter().position(|s| s.category == item.category) {
            Some(idx) => sections[idx].items.push(item),
            None => sections.push(MenuSection {
                category: item.category,
                items: vec![item],
            }),
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn item(id: i32, name: &str, category: Category, order: i32) -> MenuItem {
        MenuItem {
            id,
            name: name.to_owned(),
            category,
            price: BigDecimal::from(100),
            unit: Unit::Piece,
            order,
        }
    }

    #[test]
    fn grouping_empty_catalog_yields_no_sections() {
        assert_eq!(group_by_category(vec![]), vec![]);
    }

    #[test]
    fn grouping_keeps_scan_order_within_a_category() {
        let items = vec![
            item(1, "Тост", Category::Base, 1),
            item(2, "Круассан", Category::Base, 2),
            item(3, "Каша", Category::Base, 5),
        ];

        let sections = group_by_category(items);

        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections[0].items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn sections_appear_in_first_occurrence_order() {
        // Sorted by `order`: base(1), drink(2), base(3). The base section must
        // come first and collect both of its items.
        let items = vec![
            item(10, "Тост", Category::Base, 1),
            item(11, "Чай", Category::Drink, 2),
            item(12, "Омлет", Category::Base, 3),
        ];

        let sections = group_by_category(items);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].category, Category::Base);
        assert_eq!(
            sections[0].items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![10, 12]
        );
        assert_eq!(sections[1].category, Category::Drink);
        assert_eq!(
            sections[1].items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![11]
        );
    }

    #[test]
    fn category_wire_names_match_stored_tags() {
        let tag: Category = serde_json::from_str("\"cook_method\"").unwrap();
        assert_eq!(tag, Category::CookMethod);
        assert_eq!(tag.as_str(), "cook_method");
    }

    #[test]
    fn unit_defaults_to_piece_and_ml_keeps_short_tag() {
        assert_eq!(Unit::default(), Unit::Piece);

        let unit: Unit = serde_json::from_str("\"ml\"").unwrap();
        assert_eq!(unit, Unit::Milliliter);
        assert_eq!(unit.label(), "мл");
    }

    #[test]
    fn new_menu_item_fills_storage_defaults() {
        let payload: NewMenuItem =
            serde_json::from_str(r#"{"name": "Сырник", "category": "base"}"#).unwrap();

        assert_eq!(payload.price, BigDecimal::from(0));
        assert_eq!(payload.unit, Unit::Piece);
        assert_eq!(payload.order, 0);
    }
}
