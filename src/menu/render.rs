use super::models::MenuSection;
use std::fmt::Write;

/// Menu page markup. The front-end script reads the data attributes off each
/// `.menu-item` node, so they stay in sync with what it expects.
pub fn render_menu(sections: &[MenuSection]) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Меню</title>\n</head>\n<body>\n<h1>Меню</h1>\n",
    );

    for section in sections {
        let _ = write!(
            page,
            "<section class=\"category\">\n<h2>{}</h2>\n<ul>\n",
            section.category.label()
        );

        for item in &section.items {
            let name = escape(&item.name);
            let _ = write!(
                page,
                "<li class=\"menu-item\" data-id=\"{id}\" data-name=\"{name}\" data-price=\"{price}\">\
                 <span class=\"item-name\">{name}</span> \
                 <span class=\"item-price\">{price} ₽ / {unit}</span>\
                 </li>\n",
                id = item.id,
                name = name,
                price = item.price,
                unit = item.unit.label(),
            );
        }

        page.push_str("</ul>\n</section>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::models::{Category, MenuItem, Unit};
    use bigdecimal::BigDecimal;

    #[test]
    fn sections_render_in_given_order() {
        let sections = vec![
            MenuSection {
                category: Category::Base,
                items: vec![MenuItem {
                    id: 1,
                    name: "Тост".to_owned(),
                    category: Category::Base,
                    price: BigDecimal::from(120),
                    unit: Unit::Piece,
                    order: 1,
                }],
            },
            MenuSection {
                category: Category::Drink,
                items: vec![],
            },
        ];

        let page = render_menu(&sections);

        let base = page.find(Category::Base.label()).unwrap();
        let drink = page.find(Category::Drink.label()).unwrap();
        assert!(base < drink);
        assert!(page.contains("data-id=\"1\""));
    }

    #[test]
    fn item_names_are_escaped() {
        let sections = vec![MenuSection {
            category: Category::Ingredient,
            items: vec![MenuItem {
                id: 7,
                name: "Сыр <бри>".to_owned(),
                category: Category::Ingredient,
                price: BigDecimal::from(90),
                unit: Unit::Gram,
                order: 3,
            }],
        }];

        let page = render_menu(&sections);

        assert!(page.contains("Сыр &lt;бри&gt;"));
        assert!(!page.contains("<бри>"));
    }
}
