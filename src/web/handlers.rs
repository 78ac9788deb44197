//! Route handlers for the store.
//!
//! Each handler parses request input, invokes one core operation, and renders
//! the result. The cart is keyed by a `cart` cookie holding an opaque uuid;
//! [`cart_token`] issues the cookie on first contact so every subsequent
//! request from that browser lands in the same cart.

use crate::{
    core::{cart, catalog, checkout, upload},
    entities::phone,
    errors::{Error, Result},
    web::{AppState, pages},
};
use axum::{
    extract::{Form, Multipart, Path, State, multipart::Field},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

const CART_COOKIE: &str = "cart";

/// Returns the cart token from the jar, minting a fresh cookie when the
/// browser does not carry one yet. The returned jar must be included in the
/// response so the `Set-Cookie` header reaches the client.
fn cart_token(jar: CookieJar) -> (CookieJar, String) {
    if let Some(cookie) = jar.get(CART_COOKIE) {
        let token = cookie.value().to_string();
        (jar, token)
    } else {
        let token = Uuid::new_v4().to_string();
        let mut cookie = Cookie::new(CART_COOKIE, token.clone());
        cookie.set_path("/");
        (jar.add(cookie), token)
    }
}

/// `GET /` - the storefront listing.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    let phones = catalog::list_phones(&state.db).await?;
    Ok(Html(pages::storefront(&phones)))
}

/// `GET /product/{id}` - product detail, or a 404 page for unknown ids.
pub async fn product_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Response> {
    match catalog::get_phone(&state.db, id).await {
        Ok(phone) => Ok(Html(pages::product_detail(&phone)).into_response()),
        Err(Error::PhoneNotFound { .. }) => {
            Ok((StatusCode::NOT_FOUND, Html(pages::not_found())).into_response())
        }
        Err(e) => Err(e),
    }
}

#[derive(Deserialize)]
pub struct AddToCartForm {
    #[serde(default)]
    quantity: Option<i32>,
}

/// `POST /add_to_cart/{id}` - appends a line item, then redirects to the cart.
pub async fn add_to_cart(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    jar: CookieJar,
    Form(form): Form<AddToCartForm>,
) -> Result<impl IntoResponse> {
    let (jar, token) = cart_token(jar);
    let quantity = form.quantity.ok_or_else(|| Error::Validation {
        message: "Quantity is required".to_string(),
    })?;
    cart::add_line_item(&state.db, &token, id, quantity).await?;
    Ok((jar, Redirect::to("/cart")))
}

/// `GET /cart` - the cart view with line and grand totals.
pub async fn cart_page(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<impl IntoResponse> {
    let (jar, token) = cart_token(jar);
    let view = cart::get_cart_view(&state.db, &token).await?;
    Ok((jar, Html(pages::cart(&view))))
}

/// `GET /checkout` - clears the cart and redirects to the storefront.
pub async fn checkout_page(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<impl IntoResponse> {
    let (jar, token) = cart_token(jar);
    checkout::checkout(&state.db, &token).await?;
    Ok((jar, Redirect::to("/")))
}

/// `GET /admin` - current listings plus the add-product form.
pub async fn admin(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    let phones = catalog::list_phones(&state.db).await?;
    Ok(Html(pages::admin(&phones, None)))
}

/// `POST /admin/add` - creates a listing from the multipart admin form.
///
/// The image comes from either the `image` URL field or an uploaded
/// `image_file` routed through the upload module; a submitted file wins over
/// the URL. Validation and upload rejections re-render the admin page with
/// the message; anything else becomes an error response.
pub async fn admin_add(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response> {
    let mut name = None;
    let mut brand = None;
    let mut price = None;
    let mut condition = None;
    let mut image_url: Option<String> = None;
    let mut image_file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Validation {
            message: format!("Malformed form payload: {e}"),
        })?
    {
        let Some(field_name) = field.name().map(ToString::to_string) else {
            continue;
        };
        match field_name.as_str() {
            "name" => name = Some(field_text(field).await?),
            "brand" => brand = Some(field_text(field).await?),
            "price" => price = Some(field_text(field).await?),
            "condition" => condition = Some(field_text(field).await?),
            "image" => image_url = Some(field_text(field).await?),
            "image_file" => {
                let filename = field.file_name().map(ToString::to_string);
                let bytes = field.bytes().await.map_err(|e| Error::Validation {
                    message: format!("Malformed form payload: {e}"),
                })?;
                // Browsers submit an empty file part when nothing was chosen
                if let Some(filename) = filename.filter(|f| !f.is_empty()) {
                    if !bytes.is_empty() {
                        image_file = Some((filename, bytes.to_vec()));
                    }
                }
            }
            _ => {}
        }
    }

    match submit_listing(&state, name, brand, price, condition, image_url, image_file).await {
        Ok(phone) => {
            tracing::info!(id = phone.id, name = %phone.name, "listing created");
            Ok(Redirect::to("/admin").into_response())
        }
        Err(e @ (Error::Validation { .. } | Error::UploadRejected { .. })) => {
            let phones = catalog::list_phones(&state.db).await?;
            Ok((
                StatusCode::BAD_REQUEST,
                Html(pages::admin(&phones, Some(&e.to_string()))),
            )
                .into_response())
        }
        Err(e) => Err(e),
    }
}

async fn submit_listing(
    state: &AppState,
    name: Option<String>,
    brand: Option<String>,
    price: Option<String>,
    condition: Option<String>,
    image_url: Option<String>,
    image_file: Option<(String, Vec<u8>)>,
) -> Result<phone::Model> {
    let name = required(name, "name")?;
    let brand = required(brand, "brand")?;
    let price_text = required(price, "price")?;
    let condition = required(condition, "condition")?;

    let price: f64 = price_text.trim().parse().map_err(|_| Error::Validation {
        message: format!("Price must be a number, got {price_text:?}"),
    })?;

    let image = if let Some((filename, bytes)) = image_file {
        upload::store_image(
            &state.config.upload_dir,
            &state.config.allowed_image_extensions,
            &filename,
            &bytes,
        )
        .await?
    } else {
        image_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| Error::Validation {
                message: "Provide an image URL or upload a file".to_string(),
            })?
    };

    catalog::create_phone(&state.db, name, brand, price, condition, image).await
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::Validation {
            message: format!("Field '{field}' is required"),
        })
}

async fn field_text(field: Field<'_>) -> Result<String> {
    field.text().await.map_err(|e| Error::Validation {
        message: format!("Malformed form payload: {e}"),
    })
}
