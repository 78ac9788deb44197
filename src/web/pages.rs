//! Inline HTML page rendering.
//!
//! Pages are built with `format!` against a shared layout, mirroring the
//! store's original inline-template approach; there is no template engine.
//! All user-supplied text goes through [`escape`] before landing in markup.

use crate::core::{cart::CartView, catalog::ALLOWED_CONDITIONS};
use crate::entities::phone;
use std::fmt::Write;

const STYLE: &str = "\
body { font-family: Arial, sans-serif; background-color: #f4f4f4; margin: 0; padding: 0; }\n\
header { background-color: #333; color: #fff; padding: 10px 0; text-align: center; }\n\
main { padding: 20px; }\n\
.products { display: flex; flex-wrap: wrap; justify-content: space-around; }\n\
.product { background-color: #fff; border: 1px solid #ddd; border-radius: 5px; padding: 15px; margin: 10px; width: 200px; text-align: center; }\n\
.product img { max-width: 100%; height: auto; }\n\
.error { color: #b00; font-weight: bold; }\n\
table { border-collapse: collapse; background-color: #fff; }\n\
td, th { border: 1px solid #ddd; padding: 8px 12px; }";

/// Escapes the five HTML-significant characters in `value`.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <header><h1>{title}</h1></header>\n<main>\n{body}\n</main>\n</body>\n</html>",
        title = escape(title),
    )
}

fn phone_card(phone: &phone::Model, link_detail: bool) -> String {
    let mut card = format!(
        "<div class=\"product\">\n<img src=\"{image}\" alt=\"{name}\">\n\
         <h2>{name}</h2>\n<p>{brand} - {condition}</p>\n<p>Price: ${price:.2}</p>\n",
        image = escape(&phone.image),
        name = escape(&phone.name),
        brand = escape(&phone.brand),
        condition = escape(&phone.condition),
        price = phone.price,
    );
    if link_detail {
        let _ = write!(card, "<a href=\"/product/{}\">Details</a>\n", phone.id);
    }
    card.push_str("</div>");
    card
}

/// The storefront listing at `/`.
pub fn storefront(phones: &[phone::Model]) -> String {
    let cards: String = phones
        .iter()
        .map(|p| phone_card(p, true))
        .collect::<Vec<_>>()
        .join("\n");
    let body = format!(
        "<p><a href=\"/cart\">View cart</a></p>\n<section class=\"products\">\n{cards}\n</section>"
    );
    layout("Phone Store", &body)
}

/// The product detail page with its add-to-cart form.
pub fn product_detail(phone: &phone::Model) -> String {
    let body = format!(
        "<section class=\"product-details\">\n\
         <img src=\"{image}\" alt=\"{name}\">\n\
         <p>Brand: {brand}</p>\n<p>Condition: {condition}</p>\n<p>Price: ${price:.2}</p>\n\
         <form action=\"/add_to_cart/{id}\" method=\"POST\">\n\
         <label for=\"quantity\">Quantity:</label>\n\
         <input type=\"number\" id=\"quantity\" name=\"quantity\" min=\"1\" value=\"1\">\n\
         <button type=\"submit\">Add to cart</button>\n</form>\n</section>",
        image = escape(&phone.image),
        name = escape(&phone.name),
        brand = escape(&phone.brand),
        condition = escape(&phone.condition),
        price = phone.price,
        id = phone.id,
    );
    layout(&phone.name, &body)
}

/// The cart page: one row per line item plus the grand total.
pub fn cart(view: &CartView) -> String {
    if view.is_empty() {
        return layout("Your Cart", "<p>Your cart is empty.</p>\n<p><a href=\"/\">Back to the store</a></p>");
    }

    let mut rows = String::new();
    for line in &view.lines {
        let _ = write!(
            rows,
            "<tr><td>{name}</td><td>{brand}</td><td>${price:.2}</td>\
             <td>{quantity}</td><td>${line_total:.2}</td></tr>\n",
            name = escape(&line.phone.name),
            brand = escape(&line.phone.brand),
            price = line.phone.price,
            quantity = line.order.quantity,
            line_total = line.line_total(),
        );
    }

    let body = format!(
        "<table>\n<tr><th>Phone</th><th>Brand</th><th>Price</th><th>Quantity</th><th>Total</th></tr>\n\
         {rows}</table>\n<p><strong>Grand total: ${total:.2}</strong></p>\n\
         <p><a href=\"/checkout\">Checkout</a> | <a href=\"/\">Keep shopping</a></p>",
        total = view.total,
    );
    layout("Your Cart", &body)
}

/// The admin page: add-product form plus the current catalog. `error` is a
/// validation message from a rejected submission, re-rendered per the form.
pub fn admin(phones: &[phone::Model], error: Option<&str>) -> String {
    let error_banner = error
        .map(|msg| format!("<p class=\"error\">{}</p>\n", escape(msg)))
        .unwrap_or_default();

    let options: String = ALLOWED_CONDITIONS
        .iter()
        .map(|c| format!("<option value=\"{c}\">{c}</option>"))
        .collect::<Vec<_>>()
        .join("\n");

    let cards: String = phones
        .iter()
        .map(|p| phone_card(p, false))
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        "<section class=\"admin\">\n<h2>Add a listing</h2>\n{error_banner}\
         <form action=\"/admin/add\" method=\"POST\" enctype=\"multipart/form-data\">\n\
         <label for=\"name\">Name:</label>\n<input type=\"text\" id=\"name\" name=\"name\" required>\n\
         <label for=\"brand\">Brand:</label>\n<input type=\"text\" id=\"brand\" name=\"brand\" required>\n\
         <label for=\"price\">Price:</label>\n<input type=\"number\" id=\"price\" name=\"price\" step=\"0.01\" required>\n\
         <label for=\"condition\">Condition:</label>\n<select id=\"condition\" name=\"condition\" required>\n{options}\n</select>\n\
         <label for=\"image\">Image URL:</label>\n<input type=\"url\" id=\"image\" name=\"image\">\n\
         <label for=\"image_file\">Or upload an image:</label>\n<input type=\"file\" id=\"image_file\" name=\"image_file\">\n\
         <button type=\"submit\">Add</button>\n</form>\n\
         <h2>Listings</h2>\n<section class=\"products\">\n{cards}\n</section>\n</section>"
    );
    layout("Admin", &body)
}

/// The 404 page for a missing product.
pub fn not_found() -> String {
    layout(
        "Not Found",
        "<p>That listing does not exist.</p>\n<p><a href=\"/\">Back to the store</a></p>",
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::cart::{CartLine, CartView};
    use crate::entities::order;

    fn sample_phone() -> phone::Model {
        phone::Model {
            id: 1,
            name: "X1".to_string(),
            brand: "Acme".to_string(),
            price: 100.0,
            condition: "new".to_string(),
            image: "a.png".to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn test_escape_covers_markup_characters() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_storefront_lists_each_phone() {
        let html = storefront(&[sample_phone()]);
        assert!(html.contains("X1"));
        assert!(html.contains("Acme"));
        assert!(html.contains("/product/1"));
    }

    #[test]
    fn test_storefront_escapes_listing_text() {
        let mut phone = sample_phone();
        phone.name = "<script>alert(1)</script>".to_string();
        let html = storefront(&[phone]);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_product_detail_posts_to_add_to_cart() {
        let html = product_detail(&sample_phone());
        assert!(html.contains("action=\"/add_to_cart/1\""));
        assert!(html.contains("name=\"quantity\""));
    }

    #[test]
    fn test_cart_page_shows_totals() {
        let phone = sample_phone();
        let view = CartView {
            lines: vec![CartLine {
                order: order::Model {
                    id: 1,
                    phone_id: phone.id,
                    cart_token: "t".to_string(),
                    quantity: 2,
                    created_at: chrono::Utc::now().naive_utc(),
                },
                phone,
            }],
            total: 200.0,
        };
        let html = cart(&view);
        assert!(html.contains("$200.00"));
        assert!(html.contains("/checkout"));
    }

    #[test]
    fn test_empty_cart_page() {
        let view = CartView { lines: vec![], total: 0.0 };
        let html = cart(&view);
        assert!(html.contains("empty"));
    }

    #[test]
    fn test_admin_page_renders_error_banner() {
        let html = admin(&[], Some("Price must be a non-negative number"));
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("non-negative"));

        let clean = admin(&[], None);
        assert!(!clean.contains("class=\"error\""));
    }

    #[test]
    fn test_admin_form_offers_both_conditions() {
        let html = admin(&[], None);
        for condition in ALLOWED_CONDITIONS {
            assert!(html.contains(&format!("value=\"{condition}\"")));
        }
        assert!(html.contains("multipart/form-data"));
    }
}
