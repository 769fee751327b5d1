use crate::i18n::{t, tr};
use souq_catalog::{Language, PriceRange, Product};
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Shown when the product image fails to load.
const IMAGE_FALLBACK: &str = "https://placehold.co/400x400/0a0a0a/e5e7eb?text=Image";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub product: Product,
    pub lang: Language,
}

fn status_badge(product: &Product) -> Html {
    product.status.as_ref().map_or_else(Html::default, |status| {
        let class = format!("status-badge status-{}", status.to_lowercase().replace(' ', "-"));
        html! { <div class={class}>{ status.clone() }</div> }
    })
}

#[function_component(ProductCard)]
pub fn product_card(p: &Props) -> Html {
    let product = &p.product;
    let lang = p.lang;

    let name = product.localized_name(lang).to_string();
    let description = product.localized_description(lang).to_string();
    let price_label = PriceRange::of(&product.options)
        .map_or_else(|| t("card.price_unavailable"), |range| range.label());
    let image_alt = {
        let mut args = BTreeMap::new();
        args.insert("name", name.as_str());
        tr("card.image_alt", Some(&args))
    };

    let on_image_error = Callback::from(|e: Event| {
        if let Some(img) = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
            && img.src() != IMAGE_FALLBACK
        {
            img.set_src(IMAGE_FALLBACK);
        }
    });

    let action = if product.is_out_of_stock() {
        html! {
            <button disabled=true class="card-action card-action--disabled">
                { t("card.out_of_stock") }
            </button>
        }
    } else {
        html! {
            <a
                class="card-action details-link"
                href={format!("product-details.html?id={}", product.slug())}
            >
                { t("card.view_details") }
            </a>
        }
    };

    html! {
        <article class="product-card">
            <div class="product-card__media">
                { status_badge(product) }
                <img
                    src={product.image_url.clone()}
                    alt={image_alt}
                    loading="lazy"
                    onerror={on_image_error}
                />
            </div>
            <div class="product-card__body">
                <h3 class="product-card__name">{ name }</h3>
                <p class="product-card__description">{ description }</p>
                <p class="product-card__price">{ price_label }</p>
                { action }
            </div>
        </article>
    }
}
